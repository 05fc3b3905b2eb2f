use crate::{
    any::difficulty::skills::{StrainDecay, StrainEvaluator, StrainValue},
    taiko::difficulty::{
        evaluators::ColorEvaluator,
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
};

#[derive(Copy, Clone, Debug, Default)]
pub struct ColorStrain;

impl StrainEvaluator for ColorStrain {
    type Object = TaikoDifficultyObject;

    const SKILL_MULTIPLIER: f64 = 0.12;
    const STRAIN_DECAY: StrainDecay = StrainDecay::Time { base: 0.8 };

    fn strain_value_of(
        &mut self,
        curr: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> StrainValue {
        StrainValue::Add(ColorEvaluator::evaluate_diff_of(curr, objects))
    }
}
