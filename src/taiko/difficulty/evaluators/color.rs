use std::f64::consts::E;

use crate::taiko::difficulty::{
    color::{AlternatingMonoPattern, ColorHierarchy, MonoStreak, RepeatingHitPatterns},
    object::{TaikoDifficultyObject, TaikoDifficultyObjects},
};

pub struct ColorEvaluator;

impl ColorEvaluator {
    /// Falls from `middle + height / 2` to `middle - height / 2` around
    /// `center`.
    fn sigmoid(val: f64, center: f64, width: f64, middle: f64, height: f64) -> f64 {
        let sigmoid = f64::tanh(E * -(val - center) / width);

        sigmoid * (height / 2.0) + middle
    }

    pub fn evaluate_diff_of_mono_streak(mono_streak: &MonoStreak, hierarchy: &ColorHierarchy) -> f64 {
        let parent = &hierarchy.alternating_mono_patterns[mono_streak.parent];

        Self::sigmoid(mono_streak.idx as f64, 2.0, 2.0, 0.5, 1.0)
            * Self::evaluate_diff_of_alternating_mono_pattern(parent, hierarchy)
            * 0.5
    }

    pub fn evaluate_diff_of_alternating_mono_pattern(
        pattern: &AlternatingMonoPattern,
        hierarchy: &ColorHierarchy,
    ) -> f64 {
        let parent = &hierarchy.repeating_hit_patterns[pattern.parent];

        Self::sigmoid(pattern.idx as f64, 2.0, 2.0, 0.5, 1.0)
            * Self::evaluate_diff_of_repeating_hit_patterns(parent)
    }

    pub fn evaluate_diff_of_repeating_hit_patterns(group: &RepeatingHitPatterns) -> f64 {
        let repetition_interval = group.repetition_interval as f64;

        2.0 * (1.0 - Self::sigmoid(repetition_interval, 2.0, 2.0, 0.5, 1.0))
    }

    /// Only the first note of a streak, pattern, or group is rated.
    pub fn evaluate_diff_of(curr: &TaikoDifficultyObject, objects: &TaikoDifficultyObjects) -> f64 {
        let hierarchy = &objects.color;
        let color = &curr.color;
        let mut difficulty = 0.0;

        if let Some(streak) = color.mono_streak.map(|idx| &hierarchy.mono_streaks[idx]) {
            if streak.first_hit_object() == curr.idx {
                difficulty += Self::evaluate_diff_of_mono_streak(streak, hierarchy);
            }
        }

        if let Some(pattern) = color
            .alternating_mono_pattern
            .map(|idx| &hierarchy.alternating_mono_patterns[idx])
        {
            if pattern.first_hit_object(hierarchy) == curr.idx {
                difficulty += Self::evaluate_diff_of_alternating_mono_pattern(pattern, hierarchy);
            }
        }

        if let Some(group) = color
            .repeating_hit_patterns
            .map(|idx| &hierarchy.repeating_hit_patterns[idx])
        {
            if group.first_hit_object(hierarchy) == curr.idx {
                difficulty += Self::evaluate_diff_of_repeating_hit_patterns(group);
            }
        }

        difficulty
    }
}
