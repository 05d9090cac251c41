//! Spells and the magic words that make them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::avatar::{self, MagicalObject};

/// The closed set of incantations a witch may know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagicWords {
    #[serde(rename = "abracadabra")]
    Abracadabra,
    #[serde(rename = "alakazam")]
    Alakazam,
    #[serde(rename = "hocus pocus")]
    HocusPocus,
    #[serde(rename = "presto chango")]
    PrestoChango,
}

impl MagicWords {
    /// Every incantation, in declaration order.
    pub const ALL: [MagicWords; 4] = [
        MagicWords::Abracadabra,
        MagicWords::Alakazam,
        MagicWords::HocusPocus,
        MagicWords::PrestoChango,
    ];

    /// Canonical spoken form of the incantation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MagicWords::Abracadabra => "abracadabra",
            MagicWords::Alakazam => "alakazam",
            MagicWords::HocusPocus => "hocus pocus",
            MagicWords::PrestoChango => "presto chango",
        }
    }
}

impl fmt::Display for MagicWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that is not one of the known incantations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a known incantation")]
pub struct UnknownIncantation(pub String);

impl FromStr for MagicWords {
    type Err = UnknownIncantation;

    /// Exact match against the canonical strings; no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MagicWords::ALL
            .into_iter()
            .find(|words| words.as_str() == s)
            .ok_or_else(|| UnknownIncantation(s.to_string()))
    }
}

/// A validated spell. Holding one means the magic words are real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spell {
    pub magic_words: MagicWords,
}

impl Spell {
    /// Build a spell from a known incantation. Always succeeds.
    pub fn new(magic_words: MagicWords) -> Self {
        Self { magic_words }
    }

    /// Build a spell from free-form text.
    ///
    /// Returns `None` unless `words` is exactly one of the canonical
    /// incantations.
    ///
    /// # Examples
    ///
    /// ```
    /// use coven::spell::{MagicWords, Spell};
    ///
    /// let spell = Spell::from_words("hocus pocus").unwrap();
    /// assert_eq!(spell.magic_words, MagicWords::HocusPocus);
    /// assert!(Spell::from_words("xyzzy").is_none());
    /// ```
    pub fn from_words(words: &str) -> Option<Self> {
        words.parse::<MagicWords>().ok().map(Self::new)
    }
}

impl MagicalObject for Spell {
    fn avatar(&self) -> &'static str {
        avatar::SPELL
    }
}

impl From<MagicWords> for Spell {
    fn from(magic_words: MagicWords) -> Self {
        Self::new(magic_words)
    }
}
