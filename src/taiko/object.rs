use crate::model::hit_object::{HitObject, HitObjectKind, HitSoundType};

/// A [`HitObject`] interpreted for osu!taiko.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TaikoObject {
    pub start_time: f64,
    pub kind: TaikoObjectKind,
}

impl TaikoObject {
    pub fn new(h: &HitObject, sound: HitSoundType) -> Self {
        let kind = match h.kind {
            HitObjectKind::Circle if is_rim(sound) => TaikoObjectKind::Hit(HitType::Rim),
            HitObjectKind::Circle => TaikoObjectKind::Hit(HitType::Center),
            HitObjectKind::DrumRoll(_) => TaikoObjectKind::DrumRoll,
            HitObjectKind::Swell(_) => TaikoObjectKind::Swell,
        };

        Self {
            start_time: h.start_time,
            kind,
        }
    }

    pub const fn is_hit(&self) -> bool {
        self.kind.is_hit()
    }
}

/// Clap or whistle turn a circle into a rim hit.
fn is_rim(sound: HitSoundType) -> bool {
    sound.has_flag(HitSoundType::CLAP | HitSoundType::WHISTLE)
}

/// Type-specific data of a [`TaikoObject`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaikoObjectKind {
    Hit(HitType),
    DrumRoll,
    Swell,
}

impl TaikoObjectKind {
    /// Whether the object is a regular note.
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// The color of the note, `None` for drum rolls and swells.
    pub const fn hit_type(self) -> Option<HitType> {
        match self {
            Self::Hit(hit_type) => Some(hit_type),
            Self::DrumRoll | Self::Swell => None,
        }
    }
}

/// The color of a note.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitType {
    /// "don"
    Center,
    /// "kat"
    Rim,
}
