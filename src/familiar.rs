//! Familiars: the companions a witch keeps (cats, bats, and toads).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::avatar::{self, MagicalObject};

/// Runtime tag for a familiar's variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamiliarKind {
    Cat,
    Bat,
    Toad,
}

impl FamiliarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FamiliarKind::Cat => "cat",
            FamiliarKind::Bat => "bat",
            FamiliarKind::Toad => "toad",
        }
    }
}

impl fmt::Display for FamiliarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability shared by every familiar.
pub trait Familiar: MagicalObject {
    fn name(&self) -> Option<&str>;

    fn set_name(&mut self, name: Option<String>);

    /// The sound this familiar makes, e.g. "purr".
    fn noise(&self) -> &'static str;

    fn kind(&self) -> FamiliarKind;

    /// Build a familiar with an optional name.
    fn named(name: Option<String>) -> Self
    where
        Self: Sized + Default,
    {
        let mut familiar = Self::default();
        familiar.set_name(name);
        familiar
    }

    /// Avatar followed by the conjugated noise, e.g. `🐱 * purrs *`.
    fn speech(&self) -> String {
        format!("{} * {}s *", self.avatar(), self.noise())
    }

    fn speak(&self) {
        println!("{}", self.speech());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub name: Option<String>,
}

impl MagicalObject for Cat {
    fn avatar(&self) -> &'static str {
        avatar::CAT
    }
}

impl Familiar for Cat {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    fn noise(&self) -> &'static str {
        "purr"
    }

    fn kind(&self) -> FamiliarKind {
        FamiliarKind::Cat
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bat {
    pub name: Option<String>,
}

impl MagicalObject for Bat {
    fn avatar(&self) -> &'static str {
        avatar::BAT
    }
}

impl Familiar for Bat {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    fn noise(&self) -> &'static str {
        "screech"
    }

    fn kind(&self) -> FamiliarKind {
        FamiliarKind::Bat
    }

    // "screeches", not "screechs"
    fn speech(&self) -> String {
        format!("{} * {}es *", self.avatar(), self.noise())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toad {
    pub name: Option<String>,
}

impl MagicalObject for Toad {
    fn avatar(&self) -> &'static str {
        avatar::TOAD
    }
}

impl Familiar for Toad {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    fn noise(&self) -> &'static str {
        "croak"
    }

    fn kind(&self) -> FamiliarKind {
        FamiliarKind::Toad
    }
}

/// A familiar owned by a witch: exactly one of the concrete variants.
///
/// Serialized with a `type` tag, e.g. `{"type": "cat", "name": "Salem"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Companion {
    Cat(Cat),
    Bat(Bat),
    Toad(Toad),
}

impl Companion {
    fn as_familiar(&self) -> &dyn Familiar {
        match self {
            Companion::Cat(cat) => cat,
            Companion::Bat(bat) => bat,
            Companion::Toad(toad) => toad,
        }
    }

    fn as_familiar_mut(&mut self) -> &mut dyn Familiar {
        match self {
            Companion::Cat(cat) => cat,
            Companion::Bat(bat) => bat,
            Companion::Toad(toad) => toad,
        }
    }

    pub fn is_toad(&self) -> bool {
        matches!(self, Companion::Toad(_))
    }
}

impl MagicalObject for Companion {
    fn avatar(&self) -> &'static str {
        self.as_familiar().avatar()
    }
}

impl Familiar for Companion {
    fn name(&self) -> Option<&str> {
        self.as_familiar().name()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.as_familiar_mut().set_name(name);
    }

    fn noise(&self) -> &'static str {
        self.as_familiar().noise()
    }

    fn kind(&self) -> FamiliarKind {
        self.as_familiar().kind()
    }

    fn speech(&self) -> String {
        self.as_familiar().speech()
    }
}

impl From<Cat> for Companion {
    fn from(cat: Cat) -> Self {
        Companion::Cat(cat)
    }
}

impl From<Bat> for Companion {
    fn from(bat: Bat) -> Self {
        Companion::Bat(bat)
    }
}

impl From<Toad> for Companion {
    fn from(toad: Toad) -> Self {
        Companion::Toad(toad)
    }
}
