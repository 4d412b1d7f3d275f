//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data with no terminal I/O, so they can be used by the
//! rasterizer, the surface, the input poller and the frame loop alike.
//!
//! # Mode flags
//!
//! Startup behavior is requested with a [`ModeFlags`] bitmask and resolved
//! once into an explicit [`Mode`]:
//!
//! | Flag | Bit | Effect |
//! |------|-----|--------|
//! | `CBREAK` | 0x001 | character-at-a-time input, Ctrl-C interrupts |
//! | `RAW` | 0x002 | character-at-a-time input, Ctrl-C delivered as a key |
//! | `ECHO` | 0x004 | echo pressed keys (shown on the top row under `CBREAK`/`RAW`) |
//! | `NOECHO` | 0x008 | do not echo pressed keys; needs `CBREAK` or `RAW`, line input is echoed by the terminal regardless |
//! | `CURSOR` | 0x010 | show the terminal cursor |
//! | `NOCURSOR` | 0x020 | hide the terminal cursor |
//! | `RESIZE` | 0x040 | resynchronize the surface with the terminal every tick |
//! | `DEBUG` | 0x080 | draw the dimension overlay on the top border |
//! | `FULLSCREEN` | 0x100 | size the surface from the terminal bounds |
//! | `KEYPAD` | 0x200 | decode extended keys (arrows, function keys, ...) |
//! | `POLL_KEYS` | 0x400 | poll for one key per tick |
//!
//! Contradictory pairs are resolved by application order: the later flag in
//! `CBREAK, RAW, ECHO, NOECHO, CURSOR, NOCURSOR` wins.
//!
//! # Examples
//!
//! ```
//! use tui_gridloop_types::{InputMode, Mode, ModeFlags};
//!
//! let mode = Mode::from_flags(ModeFlags::CBREAK | ModeFlags::RAW | ModeFlags::NOECHO);
//! assert_eq!(mode.input, InputMode::Raw);
//! assert!(!mode.echo);
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use thiserror::Error;

/// Border thickness around the surface interior, in cells.
pub const BORDER: u16 = 1;

/// Interior size used when no window size is requested.
pub const DEFAULT_WIDTH: u16 = 20;
pub const DEFAULT_HEIGHT: u16 = 10;

/// Fallback terminal bounds when the driver cannot report a size.
pub const FALLBACK_BOUNDS: (u16, u16) = (80, 24);

bitflags! {
    /// Startup options, combined with `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModeFlags: u32 {
        const CBREAK     = 0x001;
        const RAW        = 0x002;
        const ECHO       = 0x004;
        const NOECHO     = 0x008;
        const CURSOR     = 0x010;
        const NOCURSOR   = 0x020;
        const RESIZE     = 0x040;
        const DEBUG      = 0x080;
        const FULLSCREEN = 0x100;
        const KEYPAD     = 0x200;
        const POLL_KEYS  = 0x400;
    }
}

/// Flag names accepted by [`ModeFlags::from_str`], in application order.
const FLAG_NAMES: [(&str, ModeFlags); 11] = [
    ("CBREAK", ModeFlags::CBREAK),
    ("RAW", ModeFlags::RAW),
    ("ECHO", ModeFlags::ECHO),
    ("NOECHO", ModeFlags::NOECHO),
    ("CURSOR", ModeFlags::CURSOR),
    ("NOCURSOR", ModeFlags::NOCURSOR),
    ("KEYPAD", ModeFlags::KEYPAD),
    ("RESIZE", ModeFlags::RESIZE),
    ("DEBUG", ModeFlags::DEBUG),
    ("FULLSCREEN", ModeFlags::FULLSCREEN),
    ("POLL_KEYS", ModeFlags::POLL_KEYS),
];

/// Mutually exclusive flag pairs.
const EXCLUSIVE_PAIRS: [(ModeFlags, ModeFlags); 3] = [
    (ModeFlags::CBREAK, ModeFlags::RAW),
    (ModeFlags::ECHO, ModeFlags::NOECHO),
    (ModeFlags::CURSOR, ModeFlags::NOCURSOR),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseModeError {
    #[error("unknown mode flag: {0}")]
    UnknownFlag(String),
}

impl FromStr for ModeFlags {
    type Err = ParseModeError;

    /// Parse a `|` or `,` separated list of flag names, case-insensitive.
    ///
    /// An empty string parses to no flags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = ModeFlags::empty();
        for part in s.split(['|', ',']) {
            let name = part.trim();
            if name.is_empty() {
                continue;
            }
            let upper = name.to_ascii_uppercase().replace('-', "_");
            let flag = FLAG_NAMES
                .iter()
                .find(|(n, _)| *n == upper)
                .map(|(_, f)| *f)
                .ok_or_else(|| ParseModeError::UnknownFlag(name.to_string()))?;
            flags |= flag;
        }
        Ok(flags)
    }
}

impl fmt::Display for ModeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, flag) in FLAG_NAMES.iter() {
            if self.contains(*flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Terminal line discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Line-buffered input, the terminal's own default.
    #[default]
    Line,
    /// Unbuffered input; Ctrl-C still requests an interrupt.
    Cbreak,
    /// Unbuffered input; every key, Ctrl-C included, reaches the application.
    Raw,
}

impl InputMode {
    pub fn is_unbuffered(self) -> bool {
        !matches!(self, InputMode::Line)
    }
}

/// Resolved startup configuration.
///
/// `input`, `echo`, `cursor_visible` and `extended_keys` are applied once when
/// the terminal is entered. `auto_resize`, `debug_overlay` and `poll_keys` are
/// consulted on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub input: InputMode,
    pub echo: bool,
    pub cursor_visible: bool,
    pub auto_resize: bool,
    pub debug_overlay: bool,
    pub full_screen: bool,
    pub extended_keys: bool,
    pub poll_keys: bool,
}

impl Default for Mode {
    /// Terminal defaults: line input, echo on, cursor visible.
    fn default() -> Self {
        Self {
            input: InputMode::Line,
            echo: true,
            cursor_visible: true,
            auto_resize: false,
            debug_overlay: false,
            full_screen: false,
            extended_keys: false,
            poll_keys: false,
        }
    }
}

impl Mode {
    /// Resolve a flag set. Later flags in application order override earlier ones.
    pub fn from_flags(flags: ModeFlags) -> Self {
        let mut mode = Mode::default();
        if flags.contains(ModeFlags::CBREAK) {
            mode.input = InputMode::Cbreak;
        }
        if flags.contains(ModeFlags::RAW) {
            mode.input = InputMode::Raw;
        }
        if flags.contains(ModeFlags::ECHO) {
            mode.echo = true;
        }
        if flags.contains(ModeFlags::NOECHO) {
            mode.echo = false;
        }
        if flags.contains(ModeFlags::CURSOR) {
            mode.cursor_visible = true;
        }
        if flags.contains(ModeFlags::NOCURSOR) {
            mode.cursor_visible = false;
        }
        mode.extended_keys = flags.contains(ModeFlags::KEYPAD);
        mode.auto_resize = flags.contains(ModeFlags::RESIZE);
        mode.debug_overlay = flags.contains(ModeFlags::DEBUG);
        mode.full_screen = flags.contains(ModeFlags::FULLSCREEN);
        mode.poll_keys = flags.contains(ModeFlags::POLL_KEYS);
        mode
    }

    /// Contradictory pairs present in `flags`, as `(overridden, winner)`.
    pub fn conflicts(flags: ModeFlags) -> Vec<(ModeFlags, ModeFlags)> {
        EXCLUSIVE_PAIRS
            .iter()
            .filter(|(a, b)| flags.contains(*a | *b))
            .copied()
            .collect()
    }
}

impl From<ModeFlags> for Mode {
    fn from(flags: ModeFlags) -> Self {
        Mode::from_flags(flags)
    }
}

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    BackTab,
    F(u8),
}

impl Key {
    pub const ENTER: Key = Key::Char('\n');
    pub const TAB: Key = Key::Char('\t');
    pub const BACKSPACE: Key = Key::Char('\u{7f}');
    pub const ESC: Key = Key::Char('\u{1b}');
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char('\n') => f.write_str("Enter"),
            Key::Char('\t') => f.write_str("Tab"),
            Key::Char('\u{7f}') => f.write_str("Backspace"),
            Key::Char('\u{1b}') => f.write_str("Esc"),
            Key::Char(c) => write!(f, "{c}"),
            Key::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}
