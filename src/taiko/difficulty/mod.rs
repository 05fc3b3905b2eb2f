use std::iter;

use rosu_map::section::general::GameMode;

use crate::{
    any::difficulty::skills::Skill,
    model::{
        beatmap::{Beatmap, HitWindows},
        hit_object::HitSoundType,
    },
    taiko::{
        attributes::TaikoDifficultyAttributes,
        difficulty::{
            color::ColorDifficultyPreprocessor,
            object::{TaikoDifficultyObject, TaikoDifficultyObjects},
        },
        object::TaikoObject,
        strains::TaikoStrains,
    },
    util::{difficulty::norm, strains_vec::StrainsVec},
    Difficulty,
};

use self::skills::{Color, Rhythm, Stamina, TaikoSkills};

pub mod color;
mod evaluators;
pub mod object;
pub mod rhythm;
mod skills;

const FINAL_MULTIPLIER: f64 = 0.0625;
const RHYTHM_SKILL_MULTIPLIER: f64 = 0.2 * FINAL_MULTIPLIER;
const COLOR_SKILL_MULTIPLIER: f64 = 0.375 * FINAL_MULTIPLIER;
const STAMINA_SKILL_MULTIPLIER: f64 = 0.375 * FINAL_MULTIPLIER;

const DIFFICULTY_MULTIPLIER: f64 = 1.35;

pub fn difficulty(difficulty: &Difficulty, map: &Beatmap) -> TaikoDifficultyAttributes {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        mode = ?GameMode::Taiko,
        n_objects = map.hit_objects.len(),
        clock_rate = difficulty.get_clock_rate(),
        "Calculating osu!taiko difficulty"
    );

    let HitWindows { od_great, od_ok } = map.attributes().difficulty(difficulty).hit_windows();

    let DifficultyValues { skills, max_combo } = DifficultyValues::calculate(difficulty, map);

    let mut attrs = TaikoDifficultyAttributes {
        great_hit_window: od_great,
        ok_hit_window: od_ok,
        max_combo,
        is_convert: map.is_convert_for(GameMode::Taiko),
        ..Default::default()
    };

    let is_relax = difficulty.get_mods().rx();

    DifficultyValues::eval(&mut attrs, skills, is_relax);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        stars = attrs.stars,
        max_combo = attrs.max_combo,
        "Calculated osu!taiko difficulty"
    );

    attrs
}

pub fn strains(difficulty: &Difficulty, map: &Beatmap) -> TaikoStrains {
    let DifficultyValues {
        skills:
            TaikoSkills {
                rhythm,
                color,
                stamina,
            },
        max_combo: _,
    } = DifficultyValues::calculate(difficulty, map);

    let strains = TaikoStrains {
        color: color.into_current_strain_peaks().into_vec(),
        rhythm: rhythm.into_current_strain_peaks().into_vec(),
        stamina: stamina.into_current_strain_peaks().into_vec(),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(sections = strains.color.len(), "Calculated osu!taiko strains");

    strains
}

/// Weighted sum of the combined per-section peaks of all skills.
fn combined_difficulty_value(rhythm: Rhythm, color: Color, stamina: Stamina, is_relax: bool) -> f64 {
    let rhythm_peaks = rhythm.into_current_strain_peaks();
    let color_peaks = color.into_current_strain_peaks();
    let stamina_peaks = stamina.into_current_strain_peaks();

    let mut peaks = combine_peaks(&rhythm_peaks, &color_peaks, &stamina_peaks, is_relax);

    let mut difficulty = 0.0;
    let mut weight = 1.0;

    peaks.sort_desc();

    for strain in peaks.iter() {
        difficulty += strain * weight;
        weight *= 0.9;
    }

    difficulty
}

fn combine_peaks(
    rhythm_peaks: &StrainsVec,
    color_peaks: &StrainsVec,
    stamina_peaks: &StrainsVec,
    is_relax: bool,
) -> StrainsVec {
    let color_multiplier = if is_relax {
        0.0 // There is no color difficulty in relax
    } else {
        COLOR_SKILL_MULTIPLIER
    };

    let mut combined_peaks = StrainsVec::with_capacity(color_peaks.len());

    let iter = rhythm_peaks
        .iter()
        .zip(color_peaks.iter())
        .zip(stamina_peaks.iter());

    for ((rhythm_peak, color_peak), stamina_peak) in iter {
        let rhythm_peak = rhythm_peak * RHYTHM_SKILL_MULTIPLIER;
        let color_peak = color_peak * color_multiplier;
        let stamina_peak = stamina_peak * STAMINA_SKILL_MULTIPLIER;

        let peak = norm(2.0, [norm(1.5, [color_peak, stamina_peak]), rhythm_peak]);

        // Sections with 0 strain are excluded since they do not contribute
        // to the difficulty
        if peak > 0.0 {
            combined_peaks.push(peak);
        }
    }

    combined_peaks
}

fn rescale(stars: f64) -> f64 {
    if stars < 0.0 {
        stars
    } else {
        10.43 * f64::ln(stars / 8.0 + 1.0)
    }
}

pub struct DifficultyValues {
    pub skills: TaikoSkills,
    pub max_combo: u32,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let take = difficulty.get_passed_objects();
        let clock_rate = difficulty.get_clock_rate();

        let mut max_combo = 0;

        let diff_objects = Self::create_difficulty_objects(map, take, clock_rate, &mut max_combo);

        let mut skills = TaikoSkills::new();

        for hit_object in diff_objects.iter() {
            skills.rhythm.process(hit_object, &diff_objects);
            skills.color.process(hit_object, &diff_objects);
            skills.stamina.process(hit_object, &diff_objects);
        }

        Self { skills, max_combo }
    }

    pub fn eval(attrs: &mut TaikoDifficultyAttributes, skills: TaikoSkills, is_relax: bool) {
        let TaikoSkills {
            rhythm,
            color,
            stamina,
        } = skills;

        let color_multiplier = if is_relax {
            0.0
        } else {
            COLOR_SKILL_MULTIPLIER
        };

        let color_rating = color.difficulty_value() * color_multiplier * DIFFICULTY_MULTIPLIER;
        let rhythm_rating =
            rhythm.difficulty_value() * RHYTHM_SKILL_MULTIPLIER * DIFFICULTY_MULTIPLIER;
        let stamina_rating =
            stamina.difficulty_value() * STAMINA_SKILL_MULTIPLIER * DIFFICULTY_MULTIPLIER;

        let combined_rating =
            combined_difficulty_value(rhythm, color, stamina, is_relax) * DIFFICULTY_MULTIPLIER;

        let mut star_rating = rescale(combined_rating * 1.4);

        // Converts are played with more than two inputs more often than not
        if attrs.is_convert {
            star_rating *= 0.925;

            // Maps with low color variance and high stamina requirement are
            // even more prone to multiple inputs
            if color_rating < 2.0 && stamina_rating > 8.0 {
                star_rating *= 0.8;
            }
        }

        attrs.stamina = stamina_rating;
        attrs.rhythm = rhythm_rating;
        attrs.color = color_rating;
        attrs.peak = combined_rating;
        attrs.stars = star_rating;
    }

    pub fn create_difficulty_objects(
        map: &Beatmap,
        take: usize,
        clock_rate: f64,
        max_combo: &mut u32,
    ) -> TaikoDifficultyObjects {
        // Objects without a hitsound are centre notes
        let hit_sounds = map
            .hit_sounds
            .iter()
            .copied()
            .chain(iter::repeat(HitSoundType::from(0_u8)));

        let hit_objects_iter = map
            .hit_objects
            .iter()
            .zip(hit_sounds)
            .map(|(h, s)| TaikoObject::new(h, s))
            .take(take)
            .inspect(|h| *max_combo += u32::from(h.is_hit()));

        let capacity = map.hit_objects.len().min(take);
        let mut diff_objects = TaikoDifficultyObjects::with_capacity(capacity);
        let mut last: Option<TaikoObject> = None;

        for curr in hit_objects_iter {
            let diff_object =
                TaikoDifficultyObject::new(&curr, last.as_ref(), clock_rate, &diff_objects);

            diff_objects.push(diff_object);
            last = Some(curr);
        }

        ColorDifficultyPreprocessor::process_and_assign(&mut diff_objects);

        diff_objects
    }
}
