pub use self::{color::ColorEvaluator, rhythm::RhythmEvaluator, stamina::StaminaEvaluator};

mod color;
mod rhythm;
mod stamina;
