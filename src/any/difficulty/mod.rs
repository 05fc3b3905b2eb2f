use std::num::NonZeroU64;

use rosu_map::section::general::GameMode;

use crate::{
    any::{DifficultyAttributes, Strains},
    model::{beatmap::Beatmap, mode::UnsupportedMode, mods::GameMods},
    taiko,
};

pub mod object;
pub mod skills;

/// Difficulty calculator on maps of any mode.
///
/// All settings that influence the result are stored in this type so a
/// `(Difficulty, Beatmap, GameMode)` triple fully determines the outcome.
///
/// # Example
///
/// ```
/// use rosu_stars::{Beatmap, Difficulty, GameMode};
///
/// let map = Beatmap::default();
///
/// let attrs = Difficulty::new()
///     .mods(64) // DT
///     .calculate(&map, GameMode::Taiko)
///     .unwrap();
///
/// assert_eq!(attrs.stars(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    passed_objects: Option<u32>,
    /// Clock rate will be clamped internally between 0.01 and 100.0.
    ///
    /// Since its minimum value is 0.01, its bits are never zero.
    clock_rate: Option<NonZeroU64>,
    od: Option<f32>,
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            passed_objects: None,
            clock_rate: None,
            od: None,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        let clock_rate = clock_rate.clamp(0.01, 100.0).to_bits();

        Self {
            clock_rate: NonZeroU64::new(clock_rate),
            ..self
        }
    }

    /// Override a beatmap's set OD.
    ///
    /// Mods are still applied on top of it.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn od(self, od: f32) -> Self {
        Self {
            od: Some(od.clamp(-20.0, 20.0)),
            ..self
        }
    }

    /// Perform the difficulty calculation.
    ///
    /// Returns [`UnsupportedMode`] if no calculator exists for `mode`.
    pub fn calculate(
        &self,
        map: &Beatmap,
        mode: GameMode,
    ) -> Result<DifficultyAttributes, UnsupportedMode> {
        match mode {
            GameMode::Taiko => Ok(DifficultyAttributes::Taiko(taiko::difficulty(self, map))),
            GameMode::Osu | GameMode::Catch | GameMode::Mania => Err(unsupported(mode)),
        }
    }

    /// Calculate the skill strains.
    ///
    /// Suitable to plot the difficulty of a map over time.
    pub fn strains(&self, map: &Beatmap, mode: GameMode) -> Result<Strains, UnsupportedMode> {
        match mode {
            GameMode::Taiko => Ok(Strains::Taiko(taiko::strains(self, map))),
            GameMode::Osu | GameMode::Catch | GameMode::Mania => Err(unsupported(mode)),
        }
    }

    pub(crate) const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub(crate) fn get_clock_rate(&self) -> f64 {
        self.clock_rate
            .map_or(self.mods.clock_rate(), non_zero_u64_to_f64)
    }

    pub(crate) fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    pub(crate) const fn get_od(&self) -> Option<f32> {
        self.od
    }
}

fn unsupported(mode: GameMode) -> UnsupportedMode {
    #[cfg(feature = "tracing")]
    tracing::warn!(?mode, "Rejected difficulty calculation for unsupported mode");

    UnsupportedMode::new(mode)
}

const fn non_zero_u64_to_f64(n: NonZeroU64) -> f64 {
    f64::from_bits(n.get())
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}
