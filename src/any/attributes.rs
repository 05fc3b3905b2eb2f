use rosu_map::section::general::GameMode;

use crate::taiko::TaikoDifficultyAttributes;

/// The result of a difficulty calculation based on the mode.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "mode")
)]
pub enum DifficultyAttributes {
    /// osu!taiko difficulty calculation result.
    Taiko(TaikoDifficultyAttributes),
}

impl DifficultyAttributes {
    /// The final star rating.
    pub const fn stars(&self) -> f64 {
        match self {
            Self::Taiko(attrs) => attrs.stars,
        }
    }

    /// The maximum combo of the map.
    pub const fn max_combo(&self) -> u32 {
        match self {
            Self::Taiko(attrs) => attrs.max_combo,
        }
    }

    /// The combined difficulty of all skills before rescaling into stars.
    pub const fn peak(&self) -> f64 {
        match self {
            Self::Taiko(attrs) => attrs.peak,
        }
    }

    /// The [`GameMode`] the attributes were calculated for.
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::Taiko(_) => GameMode::Taiko,
        }
    }
}

impl From<TaikoDifficultyAttributes> for DifficultyAttributes {
    fn from(attrs: TaikoDifficultyAttributes) -> Self {
        Self::Taiko(attrs)
    }
}
