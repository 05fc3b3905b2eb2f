use crate::{
    any::difficulty::skills::{StrainDecay, StrainEvaluator, StrainValue},
    taiko::difficulty::{
        evaluators::StaminaEvaluator,
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
};

#[derive(Copy, Clone, Debug, Default)]
pub struct StaminaStrain;

impl StrainEvaluator for StaminaStrain {
    type Object = TaikoDifficultyObject;

    const SKILL_MULTIPLIER: f64 = 1.1;
    const STRAIN_DECAY: StrainDecay = StrainDecay::Time { base: 0.4 };

    fn strain_value_of(
        &mut self,
        curr: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> StrainValue {
        StrainValue::Add(StaminaEvaluator::evaluate_diff_of(curr, objects))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        any::difficulty::skills::Skill,
        taiko::difficulty::{object::tests::objects_from_pattern, skills::Stamina},
    };

    use super::*;

    fn stamina_of(pattern: &str, interval: f64) -> f64 {
        let objects = objects_from_pattern(pattern, interval);
        let mut stamina = Stamina::new(StaminaStrain);

        for curr in objects.iter() {
            stamina.process(curr, &objects);
        }

        stamina.difficulty_value()
    }

    #[test]
    fn denser_streams_are_harder() {
        let pattern = "dkdk".repeat(50);

        assert!(stamina_of(&pattern, 100.0) > stamina_of(&pattern, 200.0));
    }
}
