//! Static study content served next to the AI answers.

pub mod materials;
pub mod quiz;
pub mod reels;

pub use materials::StudyMaterials;
pub use quiz::{questions_for, QuizQuestion};
pub use reels::{reels_for, Reel};
