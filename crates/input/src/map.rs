//! Key decoding from terminal events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Key;

/// Decode a key press.
///
/// Releases and repeats yield `None`. Keys that do not produce a character
/// are only decoded when `extended` is set. Ctrl+letter yields the matching
/// control character.
pub fn decode_key(key: KeyEvent, extended: bool) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() => {
            let code = c.to_ascii_lowercase() as u8 - b'a' + 1;
            Some(Key::Char(code as char))
        }
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::ENTER),
        KeyCode::Tab => Some(Key::TAB),
        KeyCode::Backspace => Some(Key::BACKSPACE),
        KeyCode::Esc => Some(Key::ESC),
        code if extended => decode_extended(code),
        _ => None,
    }
}

fn decode_extended(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::F(n) => Some(Key::F(n)),
        _ => None,
    }
}

/// Check if key is the interrupt chord (Ctrl-C).
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
