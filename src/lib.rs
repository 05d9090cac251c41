//! Coven - witches, familiars, and the presto chango spell
//!
//! This library provides:
//! - The familiar (cat, bat, toad) and witch entity model
//! - The presto chango transformation and its closed error taxonomy
//! - Coven file parsing, configuration, and the `coven` command-line driver

pub mod avatar;
pub mod cli;
pub mod config;
pub mod error;
pub mod familiar;
pub mod hat;
pub mod logging;
pub mod parser;
pub mod present;
pub mod spell;
pub mod suggest;
pub mod witch;

pub use error::ChangoSpellError;
pub use familiar::{Bat, Cat, Companion, Familiar, FamiliarKind, Toad};
pub use hat::{Hat, HatColor, HatSize};
pub use spell::{MagicWords, Spell};
pub use witch::{MagicalBeing, Witch};
