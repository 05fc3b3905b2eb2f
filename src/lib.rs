//! Star rating calculation for osu!taiko beatmaps.
//!
//! A map's hit objects are turned into difficulty objects, their colors are
//! encoded into streaks, patterns, and repeating groups, and three skills
//! (rhythm, color, stamina) accumulate decaying strain over fixed-length
//! sections. The per-section peaks are then combined into a single rating.
//!
//! ## Usage
//!
//! ```
//! use rosu_stars::{
//!     model::hit_object::{HitObject, HitSoundType},
//!     Beatmap, Difficulty, GameMode,
//! };
//!
//! let mut map = Beatmap::default().with_od(5.0);
//!
//! for i in 0_u32..64 {
//!     let sound = if i % 3 == 0 {
//!         HitSoundType::from(HitSoundType::CLAP)
//!     } else {
//!         HitSoundType::from(0_u8)
//!     };
//!
//!     map.push(HitObject::circle(f64::from(i) * 150.0), sound);
//! }
//!
//! // Default settings
//! let attrs = rosu_stars::compute_difficulty(&map, GameMode::Taiko).unwrap();
//! println!("Stars: {}", attrs.stars());
//!
//! // Custom settings
//! let attrs = Difficulty::new()
//!     .mods(64) // DT
//!     .passed_objects(32)
//!     .calculate(&map, GameMode::Taiko)
//!     .unwrap();
//!
//! assert_eq!(attrs.max_combo(), 32);
//!
//! // Unsupported modes are rejected
//! assert!(rosu_stars::compute_difficulty(&map, GameMode::Mania).is_err());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features enabled |
//! | `serde` | Implement `serde::Serialize` and `serde::Deserialize` for attributes and strains | [`serde`]
//! | `tracing` | Log calculation progress and rejected modes through `tracing::debug!` and `tracing::warn!` | [`tracing`]
//!
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]

#[doc(inline)]
pub use self::{
    any::{Difficulty, DifficultyAttributes, Strains},
    model::{beatmap::Beatmap, mode::UnsupportedMode, mods::GameMods},
};

#[doc(no_inline)]
pub use rosu_map::section::general::GameMode;

/// Types for calculations of any mode.
pub mod any;

/// Types of the in-memory map.
pub mod model;

/// Types for osu!taiko calculations.
pub mod taiko;

mod util;

/// Calculate the difficulty of a map for the given mode with default
/// settings.
///
/// Use [`Difficulty`] to specify mods, clock rate, or partial plays.
pub fn compute_difficulty(
    map: &Beatmap,
    mode: GameMode,
) -> Result<DifficultyAttributes, UnsupportedMode> {
    Difficulty::new().calculate(map, mode)
}
