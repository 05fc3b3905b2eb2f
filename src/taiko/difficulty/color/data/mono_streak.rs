use crate::taiko::object::HitType;

/// A maximal run of notes of the same color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonoStreak {
    pub hit_type: HitType,
    /// Indices of the difficulty objects within the streak.
    pub hit_objects: Vec<usize>,
    /// Index of the [`AlternatingMonoPattern`] containing this streak.
    ///
    /// [`AlternatingMonoPattern`]: super::alternating_mono_pattern::AlternatingMonoPattern
    pub parent: usize,
    /// Position within the parent pattern.
    pub idx: usize,
}

impl MonoStreak {
    pub fn new(hit_type: HitType, first: usize) -> Self {
        Self {
            hit_type,
            hit_objects: vec![first],
            parent: 0,
            idx: 0,
        }
    }

    pub fn first_hit_object(&self) -> usize {
        self.hit_objects[0]
    }

    pub fn run_len(&self) -> usize {
        self.hit_objects.len()
    }
}
