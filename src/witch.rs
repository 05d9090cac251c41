//! Witches and the presto chango spell.

use serde::{Deserialize, Serialize};

use crate::avatar::{self, MagicalObject};
use crate::error::{ChangoSpellError, NAMELESS_FAMILIAR};
use crate::familiar::{Companion, Familiar, Toad};
use crate::hat::Hat;
use crate::spell::{MagicWords, Spell};

/// Capability of anything that can cast spells on its familiar.
pub trait MagicalBeing: MagicalObject {
    fn name(&self) -> Option<&str>;

    fn familiar(&self) -> Option<&Companion>;

    fn spells(&self) -> &[Spell];

    /// Whether presto chango (or any other incantation) is in the spellbook.
    fn has_spell_of_type(&self, magic_words: MagicWords) -> bool {
        self.spells().iter().any(|spell| spell.magic_words == magic_words)
    }

    /// Attempt to turn the familiar into a toad.
    ///
    /// Never mutates the caster or its familiar. On success the returned
    /// toad is a new value that only shares the familiar's name.
    fn turn_familiar_into_toad(&self) -> Result<Toad, ChangoSpellError>;
}

/// A witch, her familiar, her hat, and her spellbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WitchRecord")]
pub struct Witch {
    pub name: Option<String>,
    pub familiar: Option<Companion>,
    pub spells: Vec<Spell>,
    pub hat: Option<Hat>,
}

impl Witch {
    /// Create a hatless witch. She always starts out knowing presto chango.
    pub fn new(name: Option<String>, familiar: Option<Companion>) -> Self {
        Self {
            name,
            familiar,
            spells: vec![Spell::new(MagicWords::PrestoChango)],
            hat: None,
        }
    }

    pub fn with_hat(name: Option<String>, familiar: Option<Companion>, hat: Option<Hat>) -> Self {
        let mut witch = Self::new(name, familiar);
        witch.hat = hat;
        witch
    }

    /// Add a spell to the spellbook unless it is already known.
    pub fn learn(&mut self, spell: Spell) {
        if !self.has_spell_of_type(spell.magic_words) {
            self.spells.push(spell);
        }
    }
}

impl MagicalObject for Witch {
    fn avatar(&self) -> &'static str {
        avatar::WITCH
    }
}

impl MagicalBeing for Witch {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn familiar(&self) -> Option<&Companion> {
        self.familiar.as_ref()
    }

    fn spells(&self) -> &[Spell] {
        &self.spells
    }

    fn turn_familiar_into_toad(&self) -> Result<Toad, ChangoSpellError> {
        if !self.hat.as_ref().is_some_and(|hat| hat.is_magical) {
            return Err(ChangoSpellError::HatMissingOrNotMagical);
        }

        let Some(familiar) = &self.familiar else {
            return Err(ChangoSpellError::NoFamiliar);
        };

        if familiar.is_toad() {
            return Err(ChangoSpellError::FamiliarAlreadyAToad);
        }

        if !self.has_spell_of_type(MagicWords::PrestoChango) {
            return Err(ChangoSpellError::SpellNotKnownToWitch);
        }

        let Some(name) = familiar.name().filter(|name| !name.is_empty()) else {
            return Err(ChangoSpellError::spell_failed(NAMELESS_FAMILIAR));
        };

        Ok(Toad::named(Some(name.to_string())))
    }
}

/// On-disk shape of a witch. Goes through [`Witch::with_hat`] so the
/// starting spellbook is always seeded.
#[derive(Deserialize)]
struct WitchRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    familiar: Option<Companion>,
    #[serde(default)]
    spells: Vec<Spell>,
    #[serde(default)]
    hat: Option<Hat>,
}

impl From<WitchRecord> for Witch {
    fn from(record: WitchRecord) -> Self {
        let mut witch = Witch::with_hat(record.name, record.familiar, record.hat);
        for spell in record.spells {
            witch.learn(spell);
        }
        witch
    }
}
