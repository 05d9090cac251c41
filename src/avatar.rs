//! Avatars for terminal output
//!
//! Every magical object carries a short emoji (or text) avatar that the
//! presentation layer prints in front of it.

/// Available avatars
pub const CAT: &str = "🐱";
/// Sadly there is no bat emoji
pub const BAT: &str = "[bat]";
pub const TOAD: &str = "🐸";
pub const SPELL: &str = "💫";
pub const WITCH: &str = "👩🏻";
pub const HAT: &str = "🎩";

/// Anything that can be shown with an avatar.
pub trait MagicalObject {
    /// The avatar printed in front of this object.
    fn avatar(&self) -> &'static str;
}

/// Prefix `text` with an avatar when avatars are enabled.
///
/// # Examples
///
/// ```
/// use coven::avatar::{decorate, TOAD};
///
/// assert_eq!(decorate(TOAD, "Salem", true), "🐸 Salem");
/// assert_eq!(decorate(TOAD, "Salem", false), "Salem");
/// ```
pub fn decorate(avatar: &str, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{} {}", avatar, text)
    } else {
        text.to_string()
    }
}
