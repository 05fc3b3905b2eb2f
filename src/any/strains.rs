use crate::taiko::TaikoStrains;

/// The result of calculating the strains of a beatmap.
///
/// Suitable to plot the difficulty over time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "mode")
)]
pub enum Strains {
    /// osu!taiko strain values.
    Taiko(TaikoStrains),
}

impl Strains {
    /// Time inbetween two strains in ms.
    pub const fn section_len(&self) -> f64 {
        match self {
            Self::Taiko(_) => TaikoStrains::SECTION_LEN,
        }
    }
}

impl From<TaikoStrains> for Strains {
    fn from(strains: TaikoStrains) -> Self {
        Self::Taiko(strains)
    }
}
