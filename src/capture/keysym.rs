//! Symbolic key names for captured events
//!
//! Maps crossterm key codes onto the X11-style keysym names shown in the log
//! and written to the export ("Return", "BackSpace", "Prior"). Printable
//! characters map to themselves; anything without a conventional name falls
//! through with whatever debug name crossterm assigns.

use crossterm::event::{KeyCode, MediaKeyCode};

/// Symbolic name for a key code.
pub fn key_symbol(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Return".to_string(),
        KeyCode::Backspace => "BackSpace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "ISO_Left_Tab".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "Prior".to_string(),
        KeyCode::PageDown => "Next".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::CapsLock => "Caps_Lock".to_string(),
        KeyCode::ScrollLock => "Scroll_Lock".to_string(),
        KeyCode::NumLock => "Num_Lock".to_string(),
        KeyCode::PrintScreen => "Print".to_string(),
        KeyCode::Pause => "Pause".to_string(),
        KeyCode::Menu => "Menu".to_string(),
        KeyCode::Media(media) => media_symbol(media),
        other => format!("{other:?}"),
    }
}

fn media_symbol(media: MediaKeyCode) -> String {
    match media {
        MediaKeyCode::Play => "XF86AudioPlay".to_string(),
        MediaKeyCode::Pause => "XF86AudioPause".to_string(),
        MediaKeyCode::Stop => "XF86AudioStop".to_string(),
        MediaKeyCode::TrackNext => "XF86AudioNext".to_string(),
        MediaKeyCode::TrackPrevious => "XF86AudioPrev".to_string(),
        MediaKeyCode::MuteVolume => "XF86AudioMute".to_string(),
        MediaKeyCode::RaiseVolume => "XF86AudioRaiseVolume".to_string(),
        MediaKeyCode::LowerVolume => "XF86AudioLowerVolume".to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_chars_map_to_themselves() {
        assert_eq!(key_symbol(KeyCode::Char('a')), "a");
        assert_eq!(key_symbol(KeyCode::Char('A')), "A");
        assert_eq!(key_symbol(KeyCode::Char('7')), "7");
        assert_eq!(key_symbol(KeyCode::Char(',')), ",");
    }

    #[test]
    fn space_uses_keysym_name() {
        assert_eq!(key_symbol(KeyCode::Char(' ')), "space");
    }

    #[test]
    fn named_keys_use_keysym_names() {
        assert_eq!(key_symbol(KeyCode::Enter), "Return");
        assert_eq!(key_symbol(KeyCode::Backspace), "BackSpace");
        assert_eq!(key_symbol(KeyCode::Esc), "Escape");
        assert_eq!(key_symbol(KeyCode::PageUp), "Prior");
        assert_eq!(key_symbol(KeyCode::PageDown), "Next");
    }

    #[test]
    fn function_keys_are_numbered() {
        assert_eq!(key_symbol(KeyCode::F(1)), "F1");
        assert_eq!(key_symbol(KeyCode::F(5)), "F5");
        assert_eq!(key_symbol(KeyCode::F(12)), "F12");
    }

    #[test]
    fn unnamed_keys_fall_through_with_a_name() {
        // Whatever crossterm calls it, the symbol is never empty
        assert!(!key_symbol(KeyCode::Null).is_empty());
    }
}
