use crate::taiko::difficulty::color::ColorHierarchy;

/// A group of [`AlternatingMonoPattern`]s where every pattern repeats the
/// one two positions before it, e.g. `dkdkdd` `kkdkdkk`.
///
/// [`AlternatingMonoPattern`]: super::alternating_mono_pattern::AlternatingMonoPattern
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatingHitPatterns {
    /// Indices of the contained alternating mono patterns.
    pub alternating_mono_patterns: Vec<usize>,
    /// Index of the preceding group, if any.
    pub previous: Option<usize>,
    /// How many groups ago an identical group occurred.
    ///
    /// [`Self::NO_REPETITION`] if there was none within
    /// [`Self::MAX_REPETITION_INTERVAL`] groups.
    pub repetition_interval: usize,
}

impl RepeatingHitPatterns {
    pub const MAX_REPETITION_INTERVAL: usize = 16;
    pub const NO_REPETITION: usize = Self::MAX_REPETITION_INTERVAL + 1;

    pub const fn new(previous: Option<usize>) -> Self {
        Self {
            alternating_mono_patterns: Vec::new(),
            previous,
            repetition_interval: Self::NO_REPETITION,
        }
    }

    /// Whether the first two patterns of both groups have the same streak
    /// lengths and both groups contain the same amount of patterns.
    pub fn is_repetition_of(&self, other: &Self, hierarchy: &ColorHierarchy) -> bool {
        if self.alternating_mono_patterns.len() != other.alternating_mono_patterns.len() {
            return false;
        }

        let len = self.alternating_mono_patterns.len().min(2);

        self.alternating_mono_patterns[..len]
            .iter()
            .zip(&other.alternating_mono_patterns[..len])
            .all(|(&a, &b)| {
                let a = &hierarchy.alternating_mono_patterns[a];
                let b = &hierarchy.alternating_mono_patterns[b];

                a.has_identical_mono_len(b, hierarchy)
            })
    }

    /// Walk back through previous groups until an identical one is found.
    pub fn find_repetition_interval(&self, hierarchy: &ColorHierarchy) -> usize {
        let mut other = self.previous;
        let mut interval = 1;

        while let Some(idx) = other {
            if interval >= Self::MAX_REPETITION_INTERVAL {
                break;
            }

            let group = &hierarchy.repeating_hit_patterns[idx];

            if self.is_repetition_of(group, hierarchy) {
                return interval;
            }

            other = group.previous;
            interval += 1;
        }

        Self::NO_REPETITION
    }

    pub fn first_hit_object(&self, hierarchy: &ColorHierarchy) -> usize {
        hierarchy.alternating_mono_patterns[self.alternating_mono_patterns[0]]
            .first_hit_object(hierarchy)
    }
}
