use proptest::prelude::*;
use rosu_mods::GameModsLegacy;
use rosu_stars::{
    taiko::{self, RepeatingHitPatterns, TaikoStrains},
    Beatmap, Difficulty, GameMode, Strains, UnsupportedMode,
};

use self::common::*;

mod common;

#[test]
fn empty_map() {
    let attrs = taiko_attrs(&Difficulty::new(), &Beatmap::default());

    assert_eq!(attrs.stars, 0.0);
    assert_eq!(attrs.peak, 0.0);
    assert_eq!(attrs.max_combo, 0);
    assert!(!attrs.is_convert);
}

#[test]
fn unsupported_modes() {
    let map = varied_map(150.0);

    for mode in [GameMode::Osu, GameMode::Catch, GameMode::Mania] {
        let err = rosu_stars::compute_difficulty(&map, mode).unwrap_err();

        assert_eq!(err, UnsupportedMode::new(mode));
        assert!(err.to_string().contains("cannot calculate difficulty"));
    }

    assert!(rosu_stars::compute_difficulty(&map, GameMode::Taiko).is_ok());
}

#[test]
fn mono_chart() {
    const N: usize = 64;

    let map = map_from_pattern(&"d".repeat(N), 120.0);
    let attrs = taiko_attrs(&Difficulty::new(), &map);

    assert_eq!(attrs.rhythm, 0.0);
    assert!(attrs.stamina > 0.0);
    assert!(attrs.stars > 0.0);
    assert_eq!(attrs.max_combo, N as u32);

    let objects = taiko::difficulty_objects(&Difficulty::new(), &map);
    let hierarchy = &objects.color;

    assert_eq!(hierarchy.mono_streaks.len(), 1);
    assert_eq!(hierarchy.mono_streaks[0].run_len(), N);
    assert_eq!(hierarchy.alternating_mono_patterns.len(), 1);
    assert_eq!(hierarchy.repeating_hit_patterns.len(), 1);
    assert!(objects.iter().all(|h| h.rhythm.id == 0));
}

#[test]
fn alternating_chart() {
    const N: usize = 32;

    let map = map_from_pattern(&"dk".repeat(N / 2), 120.0);
    let objects = taiko::difficulty_objects(&Difficulty::new(), &map);
    let hierarchy = &objects.color;

    assert_eq!(hierarchy.mono_streaks.len(), N);
    assert!(hierarchy.mono_streaks.iter().all(|s| s.run_len() == 1));
    assert_eq!(hierarchy.alternating_mono_patterns.len(), 1);
    assert_eq!(hierarchy.repeating_hit_patterns.len(), 1);

    let group = &hierarchy.repeating_hit_patterns[0];
    assert_eq!(group.repetition_interval, RepeatingHitPatterns::NO_REPETITION);
}

#[test]
fn denser_maps_are_harder() {
    let dense = taiko_attrs(&Difficulty::new(), &varied_map(100.0));
    let sparse = taiko_attrs(&Difficulty::new(), &varied_map(200.0));

    assert!(dense.stars > sparse.stars);
    assert!(dense.stamina > sparse.stamina);
    assert!(dense.color > sparse.color);
}

#[test]
fn deterministic() {
    let map = varied_map(110.0);
    let difficulty = Difficulty::new().mods(GameModsLegacy::DoubleTime);

    let a = taiko_attrs(&difficulty, &map);
    let b = taiko_attrs(&difficulty, &map);

    assert_eq!(a.stars.to_bits(), b.stars.to_bits());
    assert_eq!(a.peak.to_bits(), b.peak.to_bits());
    assert_eq!(a, b);
}

#[test]
fn clock_rate() {
    let map = varied_map(150.0);

    let nomod = taiko_attrs(&Difficulty::new(), &map);
    let dt = taiko_attrs(&Difficulty::new().mods(GameModsLegacy::DoubleTime), &map);
    let ht = taiko_attrs(&Difficulty::new().mods(GameModsLegacy::HalfTime), &map);
    let rate = taiko_attrs(&Difficulty::new().clock_rate(1.5), &map);

    assert!(dt.stars > nomod.stars);
    assert!(ht.stars < nomod.stars);
    assert_eq!(dt.stars.to_bits(), rate.stars.to_bits());
    assert!((dt.great_hit_window - nomod.great_hit_window / 1.5).abs() < 1e-9);
}

#[test]
fn short_sparse_charts_can_rate_higher() {
    // The sparser chart spans more sections and thus sums more weighted peaks
    let map = |interval| map_from_pattern("dkdkdk", interval);

    let dense = taiko_attrs(&Difficulty::new(), &map(100.0));
    let sparse = taiko_attrs(&Difficulty::new(), &map(200.0));

    assert!(sparse.stars > dense.stars);
}

#[test]
fn missing_hit_sounds_are_centre_notes() {
    let mut map = map_from_pattern(&"d".repeat(8), 120.0);
    map.hit_sounds.truncate(2);

    let full = map_from_pattern(&"d".repeat(8), 120.0);

    let attrs = taiko_attrs(&Difficulty::new(), &map);

    assert_eq!(attrs.max_combo, 8);
    assert_eq!(attrs, taiko_attrs(&Difficulty::new(), &full));
}

#[test]
fn hard_rock_only_affects_hit_windows() {
    let map = varied_map(150.0).with_od(7.0);

    let nomod = taiko_attrs(&Difficulty::new(), &map);
    let hr = taiko_attrs(&Difficulty::new().mods(GameModsLegacy::HardRock), &map);

    assert_eq!(hr.stars.to_bits(), nomod.stars.to_bits());
    assert!(hr.great_hit_window < nomod.great_hit_window);
    assert!(hr.ok_hit_window < nomod.ok_hit_window);
}

#[test]
fn od_override() {
    let map = varied_map(150.0).with_od(0.0);
    let attrs = taiko_attrs(&Difficulty::new().od(10.0), &map);

    assert_eq!(attrs.great_hit_window, 20.0);
    assert_eq!(attrs.ok_hit_window, 50.0);
}

#[test]
fn passed_objects() {
    let map = map_from_pattern(&"dkkdr".repeat(40), 120.0);

    let full = taiko_attrs(&Difficulty::new(), &map);
    let partial = taiko_attrs(&Difficulty::new().passed_objects(50), &map);
    let none = taiko_attrs(&Difficulty::new().passed_objects(0), &map);

    assert_eq!(full.max_combo, 160);
    assert_eq!(partial.max_combo, 40);
    assert!(partial.stars <= full.stars);
    assert_eq!(none.stars, 0.0);
    assert_eq!(none.max_combo, 0);
}

#[test]
fn converts_are_penalized() {
    let taiko_map = varied_map(120.0);

    let mut osu_map = taiko_map.clone();
    osu_map.mode = GameMode::Osu;

    let original = taiko_attrs(&Difficulty::new(), &taiko_map);
    let convert = taiko_attrs(&Difficulty::new(), &osu_map);
    let flagged = taiko_attrs(&Difficulty::new(), &taiko_map.clone().converted(true));

    assert!(convert.is_convert);
    assert!(!original.is_convert);
    assert_eq!(convert, flagged);

    let ratio = convert.stars / original.stars;
    assert!((ratio - 0.925).abs() < 1e-9 || (ratio - 0.925 * 0.8).abs() < 1e-9);
}

#[test]
fn relax_has_no_color() {
    let map = varied_map(120.0);

    let nomod = taiko_attrs(&Difficulty::new(), &map);
    let relax = taiko_attrs(&Difficulty::new().mods(GameModsLegacy::Relax), &map);

    assert_eq!(relax.color, 0.0);
    assert!(nomod.color > 0.0);
    assert!(relax.stars < nomod.stars);
    assert_eq!(relax.stamina.to_bits(), nomod.stamina.to_bits());
}

#[test]
fn drum_rolls_and_swells_only() {
    let map = map_from_pattern("r-s-r-s-r-s-", 100.0);
    let attrs = taiko_attrs(&Difficulty::new(), &map);

    assert_eq!(attrs.stars, 0.0);
    assert_eq!(attrs.max_combo, 0);
}

#[test]
fn strains() {
    let map = varied_map(120.0);

    let Strains::Taiko(TaikoStrains {
        color,
        rhythm,
        stamina,
    }) = Difficulty::new().strains(&map, GameMode::Taiko).unwrap();

    assert_eq!(color.len(), rhythm.len());
    assert_eq!(color.len(), stamina.len());

    let last_time = map.hit_objects.last().map_or(0.0, |h| h.start_time);
    assert_eq!(color.len(), (last_time / TaikoStrains::SECTION_LEN).ceil() as usize + 1);

    assert!(stamina.iter().any(|&strain| strain > 0.0));

    let err = Difficulty::new().strains(&map, GameMode::Mania).unwrap_err();
    assert_eq!(err.mode, GameMode::Mania);
}

fn colors(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn deterministic_for_any_pattern(pattern in "[dkrs-]{0,200}", interval in 20.0..400.0_f64) {
        let map = map_from_pattern(&pattern, interval);

        let a = taiko_attrs(&Difficulty::new(), &map);
        let b = taiko_attrs(&Difficulty::new(), &map);

        prop_assert_eq!(a.stars.to_bits(), b.stars.to_bits());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn stars_are_finite(pattern in "[dkrs-]{0,200}", interval in 1.0..1000.0_f64) {
        let attrs = taiko_attrs(&Difficulty::new(), &map_from_pattern(&pattern, interval));

        prop_assert!(attrs.stars.is_finite());
        prop_assert!(attrs.stars >= 0.0);
    }

    #[test]
    fn denser_charts_rate_higher(colors in colors(64..256)) {
        let dense = taiko_attrs(&Difficulty::new(), &map_from_colors(&colors, 100.0));
        let sparse = taiko_attrs(&Difficulty::new(), &map_from_colors(&colors, 200.0));

        prop_assert!(dense.stars > sparse.stars);
    }

    #[test]
    fn every_note_is_encoded(colors in colors(0..256)) {
        let map = map_from_colors(&colors, 100.0);
        let objects = taiko::difficulty_objects(&Difficulty::new(), &map);
        let hierarchy = &objects.color;

        for h in objects.iter() {
            let streak = h.color.mono_streak.map(|idx| &hierarchy.mono_streaks[idx]);
            prop_assert!(streak.is_some_and(|streak| streak.hit_objects.contains(&h.idx)));

            let pattern = h.color.alternating_mono_pattern.unwrap();
            let group = h.color.repeating_hit_patterns.unwrap();
            prop_assert_eq!(hierarchy.alternating_mono_patterns[pattern].parent, group);
        }

        let patterns: usize = hierarchy
            .repeating_hit_patterns
            .iter()
            .map(|group| group.alternating_mono_patterns.len())
            .sum();

        prop_assert_eq!(patterns, hierarchy.alternating_mono_patterns.len());
    }
}
