//! System prompt table and the fixed prompts of the study endpoints.
//!
//! The two mode prompts ship as built-in defaults and can be replaced from a
//! TOML file at startup:
//!
//! ```toml
//! chatty = "You are a friendly study buddy..."
//! solution = "You are a rigorous tutor..."
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::preprocessing::Mode;

const CHATTY_PROMPT: &str = r#"You are NelaX Lite, a friendly and motivational AI study buddy.
For casual chats:
- Reply in clean HTML using <p> only.
- Be warm, short, and natural like a human friend.
- Use emojis for friendliness.
- DO NOT structure into steps or Final Answer.
- Example: <p>👋 Hey! Great to see you. What's on your mind today?</p>"#;

const SOLUTION_PROMPT: &str = r#"You are NelaX Lite, an AI study assistant specialized in mathematics and science.

IMPORTANT FORMATTING RULES:
- Use $...$ for inline math expressions (e.g., $f(x)$ or $\frac{dy}{dx}$)
- Use $$...$$ for display math blocks (e.g., $$\int_a^b f(x)dx$$)
- Use **bold** for emphasis and key terms
- Use numbered lists like 1), 2), 3) for step-by-step explanations
- Use bullet points • for lists
- Structure your answers clearly with proper mathematical notation
- Always provide detailed, educational explanations

For problem-solving, format answers like this:

<p><strong>Intro:</strong> Short motivational opener.</p>
<h3>🔹 Step 1:</h3>
<p>Explain clearly with short sentences or bullets.</p>
<h3>🔹 Step 2:</h3>
<p>Keep guiding step by step like a tutor.</p>
<hr>
<h2>✅ Final Answer</h2>
<pre><strong>🎯 Show the final solution here, copyable</strong></pre>

MATHEMATICAL EXAMPLES:
- Inline: "The derivative $f'(x)$ represents..."
- Block: "$$\lim_{x \to 0} \frac{\sin x}{x} = 1$$"
- Numbered: "1) First, compute the derivative..."
- Bold: "**Key Concept:** The chain rule states..."

Your responses should be professional, educational, and mathematically precise."#;

pub const TUTOR_SYSTEM: &str = "You're a helpful and knowledgeable tutor.";
pub const TEACHER_SYSTEM: &str = "You are an educational AI assistant.";
pub const NO_ANSWER_FALLBACK: &str = "Sorry, I couldn't generate a response.";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read prompt file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid prompt file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// One system prompt per mode. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PromptTemplates {
    pub chatty: String,
    pub solution: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            chatty: CHATTY_PROMPT.to_string(),
            solution: SOLUTION_PROMPT.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Built-in prompts, overridden by `path` when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self, PromptError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path).map_err(|source| PromptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let templates: Self = toml::from_str(&raw).map_err(|source| PromptError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Loaded prompt templates");
        Ok(templates)
    }

    pub fn for_mode(&self, mode: &Mode) -> &str {
        match mode {
            Mode::Chatty => self.chatty.as_str(),
            Mode::Solution => self.solution.as_str(),
            Mode::Unrecognized(raw) => {
                warn!(mode = %raw, "Unrecognized mode, using solution prompt");
                self.solution.as_str()
            }
        }
    }
}

/// User prompt for the study materials explanation.
pub fn materials_prompt(level: &str, department: &str, goal: &str, topic: &str) -> String {
    format!(
        "You're an educational AI helping a {level} student in the {department} department.\n\
         They want to learn: '{goal}' in the topic of {topic}.\n\
         Provide a short and clear explanation to help them get started.\n\
         End with: '📚 Here are materials to study further:'"
    )
}

pub fn materials_fallback(topic: &str) -> String {
    format!(
        "Let me help you learn {topic}. Start with the basic concepts and build from there. \
         📚 Here are materials to study further:"
    )
}

/// User prompt for the AI teach summary.
pub fn teach_prompt(level: &str, course: &str) -> String {
    format!(
        "You're a tutor. Teach a {level} student the basics of {course} in a friendly and \
         easy-to-understand way. Use simple language and practical examples."
    )
}

pub fn teach_fallback(level: &str, course: &str) -> String {
    format!(
        "Let me teach you the basics of {course}. We'll start with fundamental concepts and \
         build up from there. This is perfect for {level} students!"
    )
}
