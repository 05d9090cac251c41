//! Error types for the presto chango spell

use thiserror::Error;

/// Reason given when the familiar has no name to carry over.
pub const NAMELESS_FAMILIAR: &str = "Familiar doesn't have a name.";

/// Why a familiar could not be turned into a toad.
///
/// Exactly one of these is reported per failed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangoSpellError {
    /// The witch has no hat, or the hat is not magical
    #[error("hat missing or not magical")]
    HatMissingOrNotMagical,
    /// The witch has no familiar
    #[error("witch has no familiar")]
    NoFamiliar,
    /// The familiar is a toad already
    #[error("familiar is already a toad")]
    FamiliarAlreadyAToad,
    /// Catch-all with a human-readable reason
    #[error("spell failed: {reason}")]
    SpellFailed { reason: String },
    /// The witch does not know presto chango
    #[error("spell not known to witch")]
    SpellNotKnownToWitch,
}

impl ChangoSpellError {
    pub fn spell_failed(reason: impl Into<String>) -> Self {
        ChangoSpellError::SpellFailed { reason: reason.into() }
    }

    /// Stable snake_case label, used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ChangoSpellError::HatMissingOrNotMagical => "hat_missing_or_not_magical",
            ChangoSpellError::NoFamiliar => "no_familiar",
            ChangoSpellError::FamiliarAlreadyAToad => "familiar_already_a_toad",
            ChangoSpellError::SpellFailed { .. } => "spell_failed",
            ChangoSpellError::SpellNotKnownToWitch => "spell_not_known_to_witch",
        }
    }
}
