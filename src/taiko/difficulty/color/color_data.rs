/// Position of a note within the [`ColorHierarchy`].
///
/// All fields are `None` for drum rolls and swells.
///
/// [`ColorHierarchy`]: super::ColorHierarchy
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TaikoColorData {
    pub mono_streak: Option<usize>,
    pub alternating_mono_pattern: Option<usize>,
    pub repeating_hit_patterns: Option<usize>,
}
