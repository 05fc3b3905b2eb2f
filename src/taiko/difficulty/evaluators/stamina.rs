use crate::taiko::difficulty::object::{TaikoDifficultyObject, TaikoDifficultyObjects};

pub struct StaminaEvaluator;

impl StaminaEvaluator {
    pub fn evaluate_diff_of(curr: &TaikoDifficultyObject, objects: &TaikoDifficultyObjects) -> f64 {
        if !curr.is_hit() {
            return 0.0;
        }

        // Previous note hit by the same key, two notes of the same color prior
        let Some(key_previous) = objects.previous_mono(curr, 1) else {
            return 0.0;
        };

        // Base strain
        let mut object_strain = 0.5;
        object_strain += Self::speed_bonus(curr.start_time - key_previous.start_time);

        object_strain
    }

    fn speed_bonus(mut interval: f64) -> f64 {
        // Cap to 600bpm 1/4, i.e. 25ms note interval and 50ms key interval
        interval = f64::max(interval, 50.0);

        30.0 / interval
    }
}
