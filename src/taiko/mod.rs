use crate::{model::beatmap::Beatmap, Difficulty};

pub use self::{
    attributes::TaikoDifficultyAttributes,
    difficulty::{
        color::{
            AlternatingMonoPattern, ColorHierarchy, MonoStreak, RepeatingHitPatterns,
            TaikoColorData,
        },
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
        rhythm::{HitObjectRhythm, COMMON_RHYTHMS},
    },
    object::{HitType, TaikoObject, TaikoObjectKind},
    strains::TaikoStrains,
};

mod attributes;
mod difficulty;
mod object;
mod strains;

pub(crate) fn difficulty(difficulty: &Difficulty, map: &Beatmap) -> TaikoDifficultyAttributes {
    difficulty::difficulty(difficulty, map)
}

pub(crate) fn strains(difficulty: &Difficulty, map: &Beatmap) -> TaikoStrains {
    difficulty::strains(difficulty, map)
}

/// Create the difficulty objects of a map, including its color encoding.
///
/// Useful to inspect how a map's notes are grouped into streaks and
/// patterns.
pub fn difficulty_objects(difficulty: &Difficulty, map: &Beatmap) -> TaikoDifficultyObjects {
    let mut max_combo = 0;

    difficulty::DifficultyValues::create_difficulty_objects(
        map,
        difficulty.get_passed_objects(),
        difficulty.get_clock_rate(),
        &mut max_combo,
    )
}
