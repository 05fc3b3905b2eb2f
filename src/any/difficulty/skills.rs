use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject},
    util::strains_vec::StrainsVec,
};

/// A single dimension of difficulty.
pub trait Skill {
    type Object: IDifficultyObject;

    /// Process a difficulty object and update the strain peaks.
    fn process(
        &mut self,
        curr: &Self::Object,
        objects: &<Self::Object as IDifficultyObject>::DifficultyObjects,
    );

    /// The weighted sum of all strain peaks so far.
    fn difficulty_value(&self) -> f64;
}

/// How the rolling strain of a skill loses value over time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StrainDecay {
    /// Multiply by `base^(delta_time / 1000)`.
    Time { base: f64 },
    /// Multiply by `factor` once per object, regardless of the elapsed time.
    Note { factor: f64 },
}

impl StrainDecay {
    pub fn apply(self, strain: f64, delta_time: f64) -> f64 {
        match self {
            Self::Time { base } => strain * strain_decay(delta_time, base),
            Self::Note { factor } => strain * factor,
        }
    }
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

/// What an evaluator does with the rolling strain after it decayed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StrainValue {
    /// Add the value, scaled by the skill multiplier.
    Add(f64),
    /// Drop the rolling strain to zero.
    Reset,
}

/// Skill-specific strategy plugged into a [`StrainDecaySkill`].
pub trait StrainEvaluator {
    type Object: IDifficultyObject;

    const SKILL_MULTIPLIER: f64;
    const STRAIN_DECAY: StrainDecay;

    fn strain_value_of(
        &mut self,
        curr: &Self::Object,
        objects: &<Self::Object as IDifficultyObject>::DifficultyObjects,
    ) -> StrainValue;
}

/// Section bookkeeping shared by all strain skills.
#[derive(Clone, Debug, Default)]
pub struct StrainSkill {
    pub curr_section_peak: f64,
    pub curr_section_end: f64,
    pub strain_peaks: StrainsVec,
}

impl StrainSkill {
    pub const DECAY_WEIGHT: f64 = 0.9;
    pub const SECTION_LENGTH: f64 = 400.0;

    pub fn save_curr_peak(&mut self) {
        self.strain_peaks.push(self.curr_section_peak);
    }

    pub fn start_new_section_from(&mut self, initial_strain: f64) {
        self.curr_section_peak = initial_strain;
    }

    pub fn current_strain_peaks(&self) -> StrainsVec {
        let mut strain_peaks = self.strain_peaks.clone();
        strain_peaks.push(self.curr_section_peak);

        strain_peaks
    }

    pub fn into_current_strain_peaks(self) -> StrainsVec {
        let mut strain_peaks = self.strain_peaks;
        strain_peaks.push(self.curr_section_peak);

        strain_peaks
    }

    pub fn difficulty_value(current_strain_peaks: StrainsVec) -> f64 {
        let mut difficulty = 0.0;
        let mut weight = 1.0;

        let mut peaks = current_strain_peaks;
        peaks.retain_non_zero_and_sort();

        for strain in peaks.iter() {
            difficulty += strain * weight;
            weight *= Self::DECAY_WEIGHT;
        }

        difficulty
    }
}

/// Strain skill whose rolling strain decays according to
/// [`StrainEvaluator::STRAIN_DECAY`] and grows by the evaluator's values.
#[derive(Clone, Debug)]
pub struct StrainDecaySkill<E> {
    inner: StrainSkill,
    curr_strain: f64,
    evaluator: E,
}

impl<E: StrainEvaluator> StrainDecaySkill<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            inner: StrainSkill::default(),
            curr_strain: 0.0,
            evaluator,
        }
    }

    pub const fn current_strain(&self) -> f64 {
        self.curr_strain
    }

    pub const fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn current_strain_peaks(&self) -> StrainsVec {
        self.inner.current_strain_peaks()
    }

    pub fn into_current_strain_peaks(self) -> StrainsVec {
        self.inner.into_current_strain_peaks()
    }

    pub fn into_difficulty_value(self) -> f64 {
        StrainSkill::difficulty_value(self.into_current_strain_peaks())
    }

    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &E::Object,
        objects: &<E::Object as IDifficultyObject>::DifficultyObjects,
    ) -> f64 {
        match E::STRAIN_DECAY {
            StrainDecay::Time { base } => {
                let prev_start_time = curr
                    .previous(0, objects)
                    .map_or(0.0, HasStartTime::start_time);

                self.curr_strain * strain_decay(time - prev_start_time, base)
            }
            // Strain that decays per note does not carry over into sections
            StrainDecay::Note { .. } => 0.0,
        }
    }

    fn strain_value_at(
        &mut self,
        curr: &E::Object,
        objects: &<E::Object as IDifficultyObject>::DifficultyObjects,
    ) -> f64 {
        self.curr_strain = E::STRAIN_DECAY.apply(self.curr_strain, curr.delta_time());

        match self.evaluator.strain_value_of(curr, objects) {
            StrainValue::Add(value) => self.curr_strain += value * E::SKILL_MULTIPLIER,
            StrainValue::Reset => self.curr_strain = 0.0,
        }

        self.curr_strain
    }
}

impl<E: StrainEvaluator> Skill for StrainDecaySkill<E> {
    type Object = E::Object;

    fn process(
        &mut self,
        curr: &Self::Object,
        objects: &<Self::Object as IDifficultyObject>::DifficultyObjects,
    ) {
        const SECTION_LENGTH: f64 = StrainSkill::SECTION_LENGTH;

        // The first section ends at the first multiple of the section length
        // that is not before the first object.
        if curr.idx() == 0 {
            self.inner.curr_section_end =
                f64::ceil(curr.start_time() / SECTION_LENGTH) * SECTION_LENGTH;
        }

        while curr.start_time() > self.inner.curr_section_end {
            self.inner.save_curr_peak();
            let initial_strain =
                self.calculate_initial_strain(self.inner.curr_section_end, curr, objects);
            self.inner.start_new_section_from(initial_strain);
            self.inner.curr_section_end += SECTION_LENGTH;
        }

        let strain = self.strain_value_at(curr, objects);
        self.inner.curr_section_peak = f64::max(strain, self.inner.curr_section_peak);
    }

    fn difficulty_value(&self) -> f64 {
        StrainSkill::difficulty_value(self.current_strain_peaks())
    }
}
