use crate::any::difficulty::skills::StrainDecaySkill;

use self::{color::ColorStrain, rhythm::RhythmStrain, stamina::StaminaStrain};

pub mod color;
pub mod rhythm;
pub mod stamina;

pub type Color = StrainDecaySkill<ColorStrain>;
pub type Rhythm = StrainDecaySkill<RhythmStrain>;
pub type Stamina = StrainDecaySkill<StaminaStrain>;

#[derive(Clone, Debug)]
pub struct TaikoSkills {
    pub rhythm: Rhythm,
    pub color: Color,
    pub stamina: Stamina,
}

impl TaikoSkills {
    pub fn new() -> Self {
        Self {
            rhythm: Rhythm::new(RhythmStrain::new()),
            color: Color::new(ColorStrain),
            stamina: Stamina::new(StaminaStrain),
        }
    }
}

impl Default for TaikoSkills {
    fn default() -> Self {
        Self::new()
    }
}
