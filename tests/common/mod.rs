#![allow(dead_code)]

use rosu_stars::{
    model::hit_object::{HitObject, HitSoundType},
    taiko::TaikoDifficultyAttributes,
    Beatmap, Difficulty, DifficultyAttributes, GameMode,
};

/// Build a map from a pattern such as `"dk-dd"`.
///
/// - `d`: centre note
/// - `k`: rim note
/// - `r`: drum roll
/// - `s`: swell
/// - anything else: empty beat
///
/// Each character takes `interval` milliseconds.
pub fn map_from_pattern(pattern: &str, interval: f64) -> Beatmap {
    let mut map = Beatmap::default();

    for (i, b) in pattern.bytes().enumerate() {
        let start_time = i as f64 * interval;

        let (hit_object, sound) = match b {
            b'd' => (HitObject::circle(start_time), HitSoundType::from(0_u8)),
            b'k' => (
                HitObject::circle(start_time),
                HitSoundType::from(HitSoundType::CLAP),
            ),
            b'r' => (
                HitObject::drum_roll(start_time, interval / 2.0),
                HitSoundType::from(0_u8),
            ),
            b's' => (
                HitObject::swell(start_time, interval / 2.0),
                HitSoundType::from(0_u8),
            ),
            _ => continue,
        };

        map.push(hit_object, sound);
    }

    map
}

/// Build a map of notes `interval` milliseconds apart, `true` being rim.
pub fn map_from_colors(colors: &[bool], interval: f64) -> Beatmap {
    let pattern: String = colors
        .iter()
        .map(|&is_rim| if is_rim { 'k' } else { 'd' })
        .collect();

    map_from_pattern(&pattern, interval)
}

pub fn taiko_attrs(difficulty: &Difficulty, map: &Beatmap) -> TaikoDifficultyAttributes {
    let DifficultyAttributes::Taiko(attrs) = difficulty.calculate(map, GameMode::Taiko).unwrap();

    attrs
}

/// A long map with varied colors and rhythm.
pub fn varied_map(interval: f64) -> Beatmap {
    map_from_pattern(&"dkddk-dkkd-ddkdk-kkdd-".repeat(24), interval)
}
