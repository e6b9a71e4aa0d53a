//! Keystroke Visualizer - focus-only keystroke recorder
//!
//! Records key presses while the terminal has input focus, mirrors them into
//! a scrolling log, and offers CSV export and typing-speed statistics.

pub mod capture;
pub mod config;
pub mod export;
pub mod stats;
pub mod ui;

pub use config::Config;
