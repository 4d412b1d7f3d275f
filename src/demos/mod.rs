//! Demo applications.
//!
//! - [`Falling`]: a projectile launched from the bottom-left corner
//! - [`Ping`]: a ball bouncing inside the surface

pub mod falling;
pub mod ping;

use crate::types::ModeFlags;

pub use falling::Falling;
pub use ping::Ping;

/// Flags the falling demo runs with.
pub const FALLING_MODE: ModeFlags = ModeFlags::DEBUG
    .union(ModeFlags::CBREAK)
    .union(ModeFlags::NOECHO)
    .union(ModeFlags::NOCURSOR)
    .union(ModeFlags::FULLSCREEN);

/// Flags the ping demo runs with.
pub const PING_MODE: ModeFlags = ModeFlags::CBREAK
    .union(ModeFlags::NOECHO)
    .union(ModeFlags::NOCURSOR)
    .union(ModeFlags::RESIZE)
    .union(ModeFlags::DEBUG)
    .union(ModeFlags::POLL_KEYS);
