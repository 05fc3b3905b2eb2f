use crate::util::difficulty::reverse_lerp;

pub struct RhythmEvaluator;

impl RhythmEvaluator {
    /// Number of rhythm changes kept to look for repetitions.
    pub const HISTORY_MAX_LEN: usize = 8;

    const REPETITION_PENALTY_SCALE: f64 = 0.032;

    const SPEED_PENALTY_START: f64 = 80.0;
    const SPEED_PENALTY_END: f64 = 210.0;

    /// Penalty for a rhythm change that already occurred `notes_since`
    /// objects ago.
    pub fn repetition_penalty(notes_since: usize) -> f64 {
        f64::min(1.0, Self::REPETITION_PENALTY_SCALE * notes_since as f64)
    }

    /// Penalty for both very short and very long stretches without a rhythm
    /// change.
    pub fn pattern_length_penalty(pattern_len: usize) -> f64 {
        let pattern_len = pattern_len as f64;

        let short_pattern_penalty = f64::min(0.15 * pattern_len, 1.0);
        let long_pattern_penalty = f64::clamp(2.5 - 0.15 * pattern_len, 0.0, 1.0);

        f64::min(short_pattern_penalty, long_pattern_penalty)
    }

    /// Penalty for slow notes.
    ///
    /// Returns `None` if notes are too far apart for the rhythm to matter, in
    /// which case the rhythm strain starts over.
    pub fn speed_penalty(delta_time: f64) -> Option<f64> {
        if delta_time < Self::SPEED_PENALTY_START {
            Some(1.0)
        } else if delta_time < Self::SPEED_PENALTY_END {
            Some(1.0 - reverse_lerp(delta_time, Self::SPEED_PENALTY_START, Self::SPEED_PENALTY_END))
        } else {
            None
        }
    }
}
