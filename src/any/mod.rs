pub use self::{attributes::DifficultyAttributes, difficulty::Difficulty, strains::Strains};

mod attributes;
pub mod difficulty;
mod strains;
