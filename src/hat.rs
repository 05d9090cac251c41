//! The witch's hat, without which no spell gets cast.

use serde::{Deserialize, Serialize};

use crate::avatar::{self, MagicalObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HatSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HatColor {
    #[default]
    Black,
}

/// A hat. Only magical ones are any use for spellcasting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hat {
    #[serde(default)]
    pub size: HatSize,
    #[serde(default)]
    pub color: HatColor,
    #[serde(default = "default_magical")]
    pub is_magical: bool,
}

fn default_magical() -> bool {
    true
}

impl Default for Hat {
    fn default() -> Self {
        Self { size: HatSize::default(), color: HatColor::default(), is_magical: default_magical() }
    }
}

impl Hat {
    /// A hat that looks the part but has no magic in it.
    pub fn mundane() -> Self {
        Self { is_magical: false, ..Self::default() }
    }
}

impl MagicalObject for Hat {
    fn avatar(&self) -> &'static str {
        avatar::HAT
    }
}
