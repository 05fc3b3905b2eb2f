use crate::taiko::difficulty::color::ColorHierarchy;

/// A maximal run of [`MonoStreak`]s of equal length, e.g. `dkdk` or `ddkkdd`.
///
/// [`MonoStreak`]: super::mono_streak::MonoStreak
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlternatingMonoPattern {
    /// Indices of the contained mono streaks.
    pub mono_streaks: Vec<usize>,
    /// Index of the [`RepeatingHitPatterns`] containing this pattern.
    ///
    /// [`RepeatingHitPatterns`]: super::repeating_hit_patterns::RepeatingHitPatterns
    pub parent: usize,
    /// Position within the parent group.
    pub idx: usize,
}

impl AlternatingMonoPattern {
    pub fn new(first: usize) -> Self {
        Self {
            mono_streaks: vec![first],
            parent: 0,
            idx: 0,
        }
    }

    /// Length of the mono streaks that make up this pattern.
    pub fn mono_len(&self, hierarchy: &ColorHierarchy) -> usize {
        hierarchy.mono_streaks[self.mono_streaks[0]].run_len()
    }

    /// Whether both patterns consist of the same amount of equally long
    /// streaks.
    pub fn is_repetition_of(&self, other: &Self, hierarchy: &ColorHierarchy) -> bool {
        self.has_identical_mono_len(other, hierarchy)
            && self.mono_streaks.len() == other.mono_streaks.len()
    }

    pub fn has_identical_mono_len(&self, other: &Self, hierarchy: &ColorHierarchy) -> bool {
        self.mono_len(hierarchy) == other.mono_len(hierarchy)
    }

    pub fn first_hit_object(&self, hierarchy: &ColorHierarchy) -> usize {
        hierarchy.mono_streaks[self.mono_streaks[0]].first_hit_object()
    }
}
