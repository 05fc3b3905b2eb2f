use crate::taiko::{
    difficulty::{
        color::{
            data::{
                alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak,
                repeating_hit_patterns::RepeatingHitPatterns,
            },
            TaikoColorData,
        },
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
    object::HitType,
};

/// Arena of all color encodings of a map.
///
/// Every note belongs to exactly one [`MonoStreak`], every streak to exactly
/// one [`AlternatingMonoPattern`] and every pattern to exactly one
/// [`RepeatingHitPatterns`]. Elements refer to each other by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorHierarchy {
    pub mono_streaks: Vec<MonoStreak>,
    pub alternating_mono_patterns: Vec<AlternatingMonoPattern>,
    pub repeating_hit_patterns: Vec<RepeatingHitPatterns>,
}

impl ColorHierarchy {
    /// Encode notes, given as pairs of difficulty object index and color, into
    /// the three levels of the hierarchy and link them up.
    pub fn encode<I>(notes: I) -> Self
    where
        I: IntoIterator<Item = (usize, HitType)>,
    {
        let mono_streaks = encode_mono_streaks(notes);
        let alternating_mono_patterns = encode_alternating_mono_patterns(&mono_streaks);

        let mut hierarchy = Self {
            mono_streaks,
            alternating_mono_patterns,
            repeating_hit_patterns: Vec::new(),
        };

        hierarchy.repeating_hit_patterns = encode_repeating_hit_patterns(&hierarchy);
        hierarchy.finalize();

        hierarchy
    }

    /// Assign parents, sibling indices and repetition intervals once all
    /// levels are encoded.
    fn finalize(&mut self) {
        for (group_idx, group) in self.repeating_hit_patterns.iter().enumerate() {
            for (i, &pattern_idx) in group.alternating_mono_patterns.iter().enumerate() {
                let pattern = &mut self.alternating_mono_patterns[pattern_idx];
                pattern.parent = group_idx;
                pattern.idx = i;

                for (j, &streak_idx) in pattern.mono_streaks.iter().enumerate() {
                    let streak = &mut self.mono_streaks[streak_idx];
                    streak.parent = pattern_idx;
                    streak.idx = j;
                }
            }
        }

        let this = &*self;

        let intervals: Vec<_> = this
            .repeating_hit_patterns
            .iter()
            .map(|group| group.find_repetition_interval(this))
            .collect();

        for (group, interval) in self.repeating_hit_patterns.iter_mut().zip(intervals) {
            group.repetition_interval = interval;
        }
    }

    /// Stamp each note with its streak, pattern, and group.
    fn assign(&self, objects: &mut [TaikoDifficultyObject]) {
        for (group_idx, group) in self.repeating_hit_patterns.iter().enumerate() {
            for &pattern_idx in group.alternating_mono_patterns.iter() {
                let pattern = &self.alternating_mono_patterns[pattern_idx];

                for &streak_idx in pattern.mono_streaks.iter() {
                    for &obj_idx in self.mono_streaks[streak_idx].hit_objects.iter() {
                        objects[obj_idx].color = TaikoColorData {
                            mono_streak: Some(streak_idx),
                            alternating_mono_pattern: Some(pattern_idx),
                            repeating_hit_patterns: Some(group_idx),
                        };
                    }
                }
            }
        }
    }
}

pub struct ColorDifficultyPreprocessor;

impl ColorDifficultyPreprocessor {
    /// Encode the notes of `objects` and assign the resulting color data to
    /// each of them. Drum rolls and swells are skipped.
    pub fn process_and_assign(objects: &mut TaikoDifficultyObjects) {
        let notes = objects
            .objects
            .iter()
            .filter_map(|h| h.base_hit_type.hit_type().map(|hit_type| (h.idx, hit_type)));

        let hierarchy = ColorHierarchy::encode(notes);
        hierarchy.assign(&mut objects.objects);
        objects.color = hierarchy;
    }
}

fn encode_mono_streaks<I>(notes: I) -> Vec<MonoStreak>
where
    I: IntoIterator<Item = (usize, HitType)>,
{
    let mut mono_streaks: Vec<MonoStreak> = Vec::new();

    for (idx, hit_type) in notes {
        match mono_streaks.last_mut() {
            Some(streak) if streak.hit_type == hit_type => streak.hit_objects.push(idx),
            _ => mono_streaks.push(MonoStreak::new(hit_type, idx)),
        }
    }

    mono_streaks
}

fn encode_alternating_mono_patterns(mono_streaks: &[MonoStreak]) -> Vec<AlternatingMonoPattern> {
    let mut patterns: Vec<AlternatingMonoPattern> = Vec::new();

    for (i, streak) in mono_streaks.iter().enumerate() {
        let same_len = i
            .checked_sub(1)
            .is_some_and(|prev| mono_streaks[prev].run_len() == streak.run_len());

        match patterns.last_mut() {
            Some(pattern) if same_len => pattern.mono_streaks.push(i),
            _ => patterns.push(AlternatingMonoPattern::new(i)),
        }
    }

    patterns
}

fn encode_repeating_hit_patterns(hierarchy: &ColorHierarchy) -> Vec<RepeatingHitPatterns> {
    let patterns = &hierarchy.alternating_mono_patterns;
    let len = patterns.len();

    // Pattern `i` repeats the pattern two positions after it
    let is_coupled =
        |i: usize| i + 2 < len && patterns[i].is_repetition_of(&patterns[i + 2], hierarchy);

    let mut groups: Vec<RepeatingHitPatterns> = Vec::new();
    let mut i = 0;

    while i < len {
        let mut group = RepeatingHitPatterns::new(groups.len().checked_sub(1));

        if is_coupled(i) {
            while is_coupled(i) {
                group.alternating_mono_patterns.push(i);
                i += 1;
            }

            // The last coupled pattern guarantees two more patterns after
            // the cursor
            group.alternating_mono_patterns.push(i);
            group.alternating_mono_patterns.push(i + 1);
            i += 2;
        } else {
            group.alternating_mono_patterns.push(i);
            i += 1;
        }

        groups.push(group);
    }

    groups
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Alternate colors with each streak so consecutive streaks never merge.
    fn notes_from_run_lens(run_lens: &[usize]) -> Vec<(usize, HitType)> {
        let mut notes = Vec::new();
        let mut hit_type = HitType::Center;

        for &run_len in run_lens {
            for _ in 0..run_len {
                notes.push((notes.len(), hit_type));
            }

            hit_type = match hit_type {
                HitType::Center => HitType::Rim,
                HitType::Rim => HitType::Center,
            };
        }

        notes
    }

    fn notes_from_str(s: &str) -> Vec<(usize, HitType)> {
        s.bytes()
            .map(|b| if b == b'k' { HitType::Rim } else { HitType::Center })
            .enumerate()
            .collect()
    }

    fn group_sizes(patterns: &[&[usize]]) -> Vec<usize> {
        let run_lens: Vec<_> = patterns.iter().flat_map(|p| p.iter().copied()).collect();
        let hierarchy = ColorHierarchy::encode(notes_from_run_lens(&run_lens));

        assert_eq!(hierarchy.alternating_mono_patterns.len(), patterns.len());

        hierarchy
            .repeating_hit_patterns
            .iter()
            .map(|group| group.alternating_mono_patterns.len())
            .collect()
    }

    #[test]
    fn repeating_hit_patterns_boundaries() {
        const A: &[usize] = &[1, 1];
        const B: &[usize] = &[2];
        const C: &[usize] = &[3];

        let cases: &[(&[&[usize]], &[usize])] = &[
            (&[], &[]),
            (&[A], &[1]),
            (&[A, B], &[1, 1]),
            (&[A, B, A], &[3]),
            (&[A, B, C], &[1, 1, 1]),
            (&[A, B, A, B], &[4]),
            (&[A, B, A, C], &[3, 1]),
            (&[A, B, C, A, B], &[1, 1, 1, 1, 1]),
            (&[A, B, A, B, A], &[5]),
            (&[C, A, B, A], &[1, 3]),
        ];

        for (patterns, expected) in cases {
            assert_eq!(group_sizes(patterns), *expected, "patterns: {patterns:?}");
        }
    }

    #[test]
    fn mono_chart_is_single_streak() {
        let hierarchy = ColorHierarchy::encode(notes_from_str("dddddddd"));

        assert_eq!(hierarchy.mono_streaks.len(), 1);
        assert_eq!(hierarchy.mono_streaks[0].run_len(), 8);
        assert_eq!(hierarchy.alternating_mono_patterns.len(), 1);
        assert_eq!(hierarchy.repeating_hit_patterns.len(), 1);
    }

    #[test]
    fn alternating_chart() {
        let hierarchy = ColorHierarchy::encode(notes_from_str("dkdkdkdk"));

        assert_eq!(hierarchy.mono_streaks.len(), 8);
        assert!(hierarchy.mono_streaks.iter().all(|s| s.run_len() == 1));
        assert_eq!(hierarchy.alternating_mono_patterns.len(), 1);
        assert_eq!(hierarchy.alternating_mono_patterns[0].mono_streaks.len(), 8);
        assert_eq!(hierarchy.repeating_hit_patterns.len(), 1);

        for (i, streak) in hierarchy.mono_streaks.iter().enumerate() {
            assert_eq!(streak.parent, 0);
            assert_eq!(streak.idx, i);
        }
    }

    #[test]
    fn parents_and_indices() {
        // Patterns: [1, 1] [2] [1, 1] [3]
        let hierarchy = ColorHierarchy::encode(notes_from_str("dkddkdkkk"));

        let streak_lens: Vec<_> = hierarchy.mono_streaks.iter().map(MonoStreak::run_len).collect();
        assert_eq!(streak_lens, [1, 1, 2, 1, 1, 3]);

        let groups: Vec<_> = hierarchy
            .repeating_hit_patterns
            .iter()
            .map(|g| g.alternating_mono_patterns.clone())
            .collect();
        assert_eq!(groups, [vec![0, 1, 2], vec![3]]);

        let pattern = &hierarchy.alternating_mono_patterns[2];
        assert_eq!((pattern.parent, pattern.idx), (0, 2));
        assert_eq!(pattern.first_hit_object(&hierarchy), 4);

        let streak = &hierarchy.mono_streaks[4];
        assert_eq!((streak.parent, streak.idx), (2, 1));

        assert_eq!(hierarchy.repeating_hit_patterns[1].previous, Some(0));
        assert_eq!(hierarchy.repeating_hit_patterns[1].first_hit_object(&hierarchy), 6);
    }

    #[test]
    fn repetition_interval() {
        // Groups: [1, 1] [2] [3] [1, 1] [2]
        let hierarchy = ColorHierarchy::encode(notes_from_run_lens(&[1, 1, 2, 3, 1, 1, 2]));

        let intervals: Vec<_> = hierarchy
            .repeating_hit_patterns
            .iter()
            .map(|g| g.repetition_interval)
            .collect();

        let none = RepeatingHitPatterns::NO_REPETITION;
        assert_eq!(intervals, [none, none, none, 3, 3]);
    }

    #[test]
    fn skipped_indices_are_kept() {
        // Non-notes in between are not part of the encoding
        let notes = [(0, HitType::Center), (2, HitType::Center), (5, HitType::Rim)];
        let hierarchy = ColorHierarchy::encode(notes);

        assert_eq!(hierarchy.mono_streaks[0].hit_objects, [0, 2]);
        assert_eq!(hierarchy.mono_streaks[1].hit_objects, [5]);
    }

    fn colors() -> impl Strategy<Value = Vec<bool>> {
        prop::collection::vec(any::<bool>(), 0..200)
    }

    fn encode_colors(colors: &[bool]) -> (Vec<(usize, HitType)>, ColorHierarchy) {
        let notes: Vec<_> = colors
            .iter()
            .map(|&is_rim| if is_rim { HitType::Rim } else { HitType::Center })
            .enumerate()
            .collect();

        let hierarchy = ColorHierarchy::encode(notes.iter().copied());

        (notes, hierarchy)
    }

    proptest! {
        #[test]
        fn streaks_partition_notes(colors in colors()) {
            let (notes, hierarchy) = encode_colors(&colors);

            let mut flattened = Vec::with_capacity(notes.len());

            for group in hierarchy.repeating_hit_patterns.iter() {
                for &p in group.alternating_mono_patterns.iter() {
                    for &s in hierarchy.alternating_mono_patterns[p].mono_streaks.iter() {
                        flattened.extend_from_slice(&hierarchy.mono_streaks[s].hit_objects);
                    }
                }
            }

            let expected: Vec<_> = notes.iter().map(|(idx, _)| *idx).collect();
            prop_assert_eq!(flattened, expected);
        }

        #[test]
        fn streak_boundary_law(colors in colors()) {
            let (notes, hierarchy) = encode_colors(&colors);

            let mut streak_of = vec![0; notes.len()];

            for (s, streak) in hierarchy.mono_streaks.iter().enumerate() {
                for &idx in streak.hit_objects.iter() {
                    streak_of[idx] = s;
                }
            }

            for window in notes.windows(2) {
                let (a, a_type) = window[0];
                let (b, b_type) = window[1];

                prop_assert_eq!(streak_of[a] == streak_of[b], a_type == b_type);
            }
        }

        #[test]
        fn every_pattern_grouped_once(colors in colors()) {
            let (_, hierarchy) = encode_colors(&colors);

            let grouped: Vec<_> = hierarchy
                .repeating_hit_patterns
                .iter()
                .flat_map(|g| g.alternating_mono_patterns.iter().copied())
                .collect();

            let expected: Vec<_> = (0..hierarchy.alternating_mono_patterns.len()).collect();
            prop_assert_eq!(grouped, expected);
        }

        #[test]
        fn patterns_consist_of_equal_streaks(colors in colors()) {
            let (_, hierarchy) = encode_colors(&colors);

            let mut streak_count = 0;

            for (p, pattern) in hierarchy.alternating_mono_patterns.iter().enumerate() {
                let mono_len = pattern.mono_len(&hierarchy);

                for (i, &s) in pattern.mono_streaks.iter().enumerate() {
                    let streak = &hierarchy.mono_streaks[s];
                    prop_assert_eq!(streak.run_len(), mono_len);
                    prop_assert_eq!((streak.parent, streak.idx), (p, i));
                }

                streak_count += pattern.mono_streaks.len();
            }

            prop_assert_eq!(streak_count, hierarchy.mono_streaks.len());
        }
    }
}
