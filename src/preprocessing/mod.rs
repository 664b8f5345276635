pub mod cleaner;
pub mod router;

pub use cleaner::{explicit_mode, lenient_text, Cleaner};
pub use router::{classify, Mode};

use crate::prompts::PromptTemplates;
use serde::Serialize;

/// The system prompt chosen for one question.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPrompt<'a> {
    pub mode: Mode,
    pub prompt_text: &'a str,
}

pub struct Preprocessor;

impl Preprocessor {
    /// Classifies the question and resolves the mode's system prompt.
    pub fn process<'a>(
        explicit_mode: Option<Mode>,
        question: &str,
        templates: &'a PromptTemplates,
    ) -> SelectedPrompt<'a> {
        let mode = classify(explicit_mode, question);
        let prompt_text = templates.for_mode(&mode);
        SelectedPrompt { mode, prompt_text }
    }
}
