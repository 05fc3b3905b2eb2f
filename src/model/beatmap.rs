use rosu_map::section::general::GameMode;

use crate::{
    model::hit_object::{HitObject, HitSoundType},
    util::difficulty::difficulty_range,
    Difficulty,
};

/// All beatmap data that is relevant for difficulty calculation.
///
/// The hit objects are expected to be sorted by start time and every hit
/// object has a [`HitSoundType`] at the same index in `hit_sounds`. Hit
/// objects without a hitsound are treated as centre notes.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    pub mode: GameMode,
    pub is_convert: bool,
    pub od: f32,
    pub hit_objects: Vec<HitObject>,
    pub hit_sounds: Vec<HitSoundType>,
}

impl Beatmap {
    /// Create a new empty [`Beatmap`] of the given mode.
    pub const fn new(mode: GameMode) -> Self {
        Self {
            mode,
            is_convert: false,
            od: 5.0,
            hit_objects: Vec::new(),
            hit_sounds: Vec::new(),
        }
    }

    /// Set the overall difficulty.
    pub fn with_od(mut self, od: f32) -> Self {
        self.od = od;

        self
    }

    /// Mark the map as converted from another mode.
    pub fn converted(mut self, is_convert: bool) -> Self {
        self.is_convert = is_convert;

        self
    }

    /// Append a hit object alongside its hitsound.
    pub fn push(&mut self, hit_object: HitObject, hit_sound: HitSoundType) {
        self.hit_objects.push(hit_object);
        self.hit_sounds.push(hit_sound);
    }

    /// Whether the map contains no hit objects.
    pub fn is_empty(&self) -> bool {
        self.hit_objects.is_empty()
    }

    /// Whether the map's objects have to be interpreted as a convert when
    /// calculating for `mode`.
    pub fn is_convert_for(&self, mode: GameMode) -> bool {
        self.is_convert || self.mode != mode
    }

    /// Builder for the difficulty-adjusted attributes of this map.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new(self)
    }
}

impl Default for Beatmap {
    fn default() -> Self {
        Self::new(GameMode::Taiko)
    }
}

/// Beatmap attributes after applying mods and clock rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    pub od: f64,
    pub clock_rate: f64,
    pub hit_windows: HitWindows,
}

/// Hit windows in milliseconds, already divided by the clock rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    pub od_great: f64,
    pub od_ok: f64,
}

/// Applies a [`Difficulty`] onto the base attributes of a [`Beatmap`].
#[derive(Clone, Debug)]
pub struct BeatmapAttributesBuilder {
    od: f64,
    clock_rate: f64,
}

impl BeatmapAttributesBuilder {
    const GREAT_MIN: f64 = 50.0;
    const GREAT_MID: f64 = 35.0;
    const GREAT_MAX: f64 = 20.0;

    const OK_MIN: f64 = 120.0;
    const OK_MID: f64 = 80.0;
    const OK_MAX: f64 = 50.0;

    fn new(map: &Beatmap) -> Self {
        Self {
            od: f64::from(map.od),
            clock_rate: 1.0,
        }
    }

    /// Use the settings of the given [`Difficulty`].
    pub fn difficulty(mut self, difficulty: &Difficulty) -> Self {
        let od = difficulty.get_od().map_or(self.od, f64::from);

        self.od = difficulty.get_mods().apply_od(od);
        self.clock_rate = difficulty.get_clock_rate();

        self
    }

    /// Calculate the hit windows.
    ///
    /// Windows are floored to whole milliseconds before the clock rate is
    /// applied.
    pub fn hit_windows(&self) -> HitWindows {
        let od_great =
            difficulty_range(self.od, Self::GREAT_MAX, Self::GREAT_MID, Self::GREAT_MIN).floor()
                / self.clock_rate;

        let od_ok = difficulty_range(self.od, Self::OK_MAX, Self::OK_MID, Self::OK_MIN).floor()
            / self.clock_rate;

        HitWindows { od_great, od_ok }
    }

    /// Calculate the final attributes.
    pub fn build(&self) -> BeatmapAttributes {
        BeatmapAttributes {
            od: self.od,
            clock_rate: self.clock_rate,
            hit_windows: self.hit_windows(),
        }
    }
}
