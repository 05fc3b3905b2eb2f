/// A rhythm change between two consecutive intervals.
#[derive(Debug, PartialEq)]
pub struct HitObjectRhythm {
    /// Position within [`COMMON_RHYTHMS`].
    pub id: usize,
    /// Ratio of the current interval to the previous one.
    pub ratio: f64,
    pub difficulty: f64,
}

impl HitObjectRhythm {
    const fn new(id: usize, ratio: f64, difficulty: f64) -> Self {
        Self {
            id,
            ratio,
            difficulty,
        }
    }

    /// The constant rhythm, i.e. no change at all.
    pub fn constant() -> &'static Self {
        &COMMON_RHYTHMS[0]
    }
}

pub static COMMON_RHYTHMS: [HitObjectRhythm; 9] = [
    HitObjectRhythm::new(0, 1.0, 0.0),
    HitObjectRhythm::new(1, 2.0 / 1.0, 0.3),
    HitObjectRhythm::new(2, 1.0 / 2.0, 0.5),
    HitObjectRhythm::new(3, 3.0 / 1.0, 0.3),
    HitObjectRhythm::new(4, 1.0 / 3.0, 0.35),
    HitObjectRhythm::new(5, 3.0 / 2.0, 0.6),
    HitObjectRhythm::new(6, 2.0 / 3.0, 0.4),
    HitObjectRhythm::new(7, 5.0 / 4.0, 0.5),
    HitObjectRhythm::new(8, 4.0 / 5.0, 0.7),
];

/// The entry of [`COMMON_RHYTHMS`] whose ratio is closest to `ratio`.
///
/// On ties the entry that comes first in the catalogue wins.
pub fn closest_rhythm(ratio: f64) -> &'static HitObjectRhythm {
    COMMON_RHYTHMS
        .iter()
        .min_by(|a, b| {
            let a = (a.ratio - ratio).abs();
            let b = (b.ratio - ratio).abs();

            a.total_cmp(&b)
        })
        .unwrap_or_else(HitObjectRhythm::constant)
}
