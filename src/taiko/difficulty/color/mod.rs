pub use self::{
    color_data::TaikoColorData,
    data::{
        alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak,
        repeating_hit_patterns::RepeatingHitPatterns,
    },
    preprocessor::{ColorDifficultyPreprocessor, ColorHierarchy},
};

mod color_data;
mod data;
mod preprocessor;
