//! Keystroke capture: records, the session log, and key naming

pub mod keysym;
mod log;
mod record;

pub use keysym::key_symbol;
pub use log::KeyLog;
pub use record::KeyRecord;
