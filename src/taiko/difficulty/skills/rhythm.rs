use crate::{
    any::difficulty::skills::{StrainDecay, StrainEvaluator, StrainValue},
    taiko::difficulty::{
        evaluators::RhythmEvaluator,
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
    util::{float_ext::FloatExt, limited_queue::LimitedQueue},
};

/// Rhythm change of a note, identified by the note's index and the rhythm id.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct RhythmChange {
    idx: usize,
    rhythm_id: usize,
}

#[derive(Clone, Debug)]
pub struct RhythmStrain {
    rhythm_history: LimitedQueue<RhythmChange, { RhythmEvaluator::HISTORY_MAX_LEN }>,
    notes_since_rhythm_change: usize,
}

impl RhythmStrain {
    pub fn new() -> Self {
        Self {
            rhythm_history: LimitedQueue::new(),
            notes_since_rhythm_change: 0,
        }
    }

    /// Penalize rhythm changes that repeat recent ones, comparing the
    /// latest 2, 3, and 4 changes against all earlier windows.
    fn repetition_penalties(&mut self, curr: &TaikoDifficultyObject) -> f64 {
        let mut penalty = 1.0;

        self.rhythm_history.push(RhythmChange {
            idx: curr.idx,
            rhythm_id: curr.rhythm.id,
        });

        for most_recent in 2..=RhythmEvaluator::HISTORY_MAX_LEN / 2 {
            let Some(last_start) = self.rhythm_history.len().checked_sub(most_recent + 1) else {
                continue;
            };

            for start in (0..=last_start).rev() {
                if !self.same_pattern(start, most_recent) {
                    continue;
                }

                let notes_since = curr.idx - self.rhythm_history[start].idx;
                penalty *= RhythmEvaluator::repetition_penalty(notes_since);

                break;
            }
        }

        penalty
    }

    fn same_pattern(&self, start: usize, most_recent: usize) -> bool {
        let recent_start = self.rhythm_history.len() - most_recent;

        (0..most_recent).all(|i| {
            self.rhythm_history[start + i].rhythm_id
                == self.rhythm_history[recent_start + i].rhythm_id
        })
    }

    fn reset(&mut self) -> StrainValue {
        self.notes_since_rhythm_change = 0;

        StrainValue::Reset
    }
}

impl Default for RhythmStrain {
    fn default() -> Self {
        Self::new()
    }
}

impl StrainEvaluator for RhythmStrain {
    type Object = TaikoDifficultyObject;

    const SKILL_MULTIPLIER: f64 = 10.0;
    const STRAIN_DECAY: StrainDecay = StrainDecay::Note { factor: 0.96 };

    fn strain_value_of(
        &mut self,
        curr: &TaikoDifficultyObject,
        _: &TaikoDifficultyObjects,
    ) -> StrainValue {
        // Drum rolls and swells are exempt
        if !curr.is_hit() {
            return self.reset();
        }

        self.notes_since_rhythm_change += 1;

        if FloatExt::eq(curr.rhythm.difficulty, 0.0) {
            return StrainValue::Add(0.0);
        }

        let mut object_strain = curr.rhythm.difficulty;
        object_strain *= self.repetition_penalties(curr);
        object_strain *=
            RhythmEvaluator::pattern_length_penalty(self.notes_since_rhythm_change);

        let Some(speed_penalty) = RhythmEvaluator::speed_penalty(curr.delta_time) else {
            return self.reset();
        };

        object_strain *= speed_penalty;
        self.notes_since_rhythm_change = 0;

        StrainValue::Add(object_strain)
    }
}
