use std::cmp::Ordering;

pub use rosu_map::section::hit_objects::hit_samples::HitSoundType;

/// All hitobject related data required for difficulty calculation except for
/// the [`HitSoundType`].
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Create a new circle at the given time.
    pub const fn circle(start_time: f64) -> Self {
        Self {
            start_time,
            kind: HitObjectKind::Circle,
        }
    }

    /// Create a new drum roll at the given time.
    pub const fn drum_roll(start_time: f64, duration: f64) -> Self {
        Self {
            start_time,
            kind: HitObjectKind::DrumRoll(DrumRoll { duration }),
        }
    }

    /// Create a new swell at the given time.
    pub const fn swell(start_time: f64, duration: f64) -> Self {
        Self {
            start_time,
            kind: HitObjectKind::Swell(Swell { duration }),
        }
    }

    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a drum roll.
    pub const fn is_drum_roll(&self) -> bool {
        matches!(&self.kind, HitObjectKind::DrumRoll(_))
    }

    /// Whether the hitobject is a swell.
    pub const fn is_swell(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Swell(_))
    }

    /// The end time of the object.
    pub fn end_time(&self) -> f64 {
        match &self.kind {
            HitObjectKind::Circle => self.start_time,
            HitObjectKind::DrumRoll(DrumRoll { duration })
            | HitObjectKind::Swell(Swell { duration }) => self.start_time + *duration,
        }
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    DrumRoll(DrumRoll),
    Swell(Swell),
}

/// A drum roll.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrumRoll {
    pub duration: f64,
}

/// A swell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Swell {
    pub duration: f64,
}
