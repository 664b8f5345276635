use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Conversational greetings. A match alone is not enough to pick `Chatty`.
const GREETING_KEYWORDS: [&str; 6] = [
    "hi",
    "hello",
    "hey",
    "how are you",
    "good morning",
    "good evening",
];

/// Analytical triggers. Any match forces `Solution`.
const SOLUTION_TRIGGERS: [&str; 8] = [
    "?", "solve", "calculate", "explain", "why", "how", "find", "prove",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Chatty,
    Solution,
    /// A caller-supplied mode outside the known set, kept verbatim.
    Unrecognized(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Chatty => "chatty",
            Mode::Solution => "solution",
            Mode::Unrecognized(raw) => raw,
        }
    }

    /// Interprets a JSON value the way the ask endpoint receives it.
    /// Falsy values (`null`, `""`, `false`, `0`) mean "no explicit mode".
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(Mode::from(s.as_str())),
            other => Some(Mode::Unrecognized(other.to_string())),
        }
    }
}

impl From<&str> for Mode {
    fn from(raw: &str) -> Self {
        match raw {
            "chatty" => Mode::Chatty,
            "solution" => Mode::Solution,
            other => Mode::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Picks the prompt mode for a question.
///
/// An explicit mode always wins and is not validated. Otherwise the
/// lowercased question is scanned for greeting and analytical keywords;
/// it is `Chatty` only when a greeting matched and nothing analytical did.
pub fn classify(explicit_mode: Option<Mode>, question: &str) -> Mode {
    if let Some(mode) = explicit_mode {
        return mode;
    }

    let lowered = question.to_lowercase();
    let is_greeting = GREETING_KEYWORDS.iter().any(|kw| lowered.contains(kw));
    let is_analytical = SOLUTION_TRIGGERS.iter().any(|kw| lowered.contains(kw));

    if is_greeting && !is_analytical {
        Mode::Chatty
    } else {
        Mode::Solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn explicit_mode_is_returned_unchanged() {
        let questions = ["hello there", "explain photosynthesis", "", "good morning?"];
        for question in questions {
            assert_eq!(classify(Some(Mode::Chatty), question), Mode::Chatty);
            assert_eq!(classify(Some(Mode::Solution), question), Mode::Solution);
            assert_eq!(
                classify(Some(Mode::Unrecognized("poetry".into())), question),
                Mode::Unrecognized("poetry".into())
            );
        }
    }

    #[test]
    fn greetings_are_chatty() {
        assert_eq!(classify(None, "hello there"), Mode::Chatty);
        assert_eq!(classify(None, "good morning"), Mode::Chatty);
        assert_eq!(classify(None, "Good Evening, NelaX!"), Mode::Chatty);
    }

    #[test]
    fn analytical_triggers_dominate_greetings() {
        assert_eq!(
            classify(None, "hey, how do I solve this integral?"),
            Mode::Solution
        );
        // "how are you" contains "how", so it never classifies as chatty.
        assert_eq!(classify(None, "how are you"), Mode::Solution);
        assert_eq!(classify(None, "hello?"), Mode::Solution);
    }

    #[test]
    fn analytical_questions_are_solution() {
        assert_eq!(classify(None, "explain photosynthesis"), Mode::Solution);
        assert_eq!(classify(None, "CALCULATE 2 + 2"), Mode::Solution);
        assert_eq!(classify(None, "integrate x^2"), Mode::Solution);
    }

    #[test]
    fn empty_question_is_solution() {
        assert_eq!(classify(None, ""), Mode::Solution);
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "this" contains "hi"
        assert_eq!(classify(None, "thanks, this helped"), Mode::Chatty);
    }

    #[test]
    fn classification_is_idempotent() {
        for question in ["hello there", "why is the sky blue", "", "hey"] {
            assert_eq!(classify(None, question), classify(None, question));
        }
    }

    #[test]
    fn mode_from_value_treats_falsy_as_absent() {
        assert_eq!(Mode::from_value(&json!(null)), None);
        assert_eq!(Mode::from_value(&json!("")), None);
        assert_eq!(Mode::from_value(&json!(false)), None);
        assert_eq!(Mode::from_value(&json!(0)), None);
        assert_eq!(Mode::from_value(&json!("chatty")), Some(Mode::Chatty));
        assert_eq!(Mode::from_value(&json!("solution")), Some(Mode::Solution));
        assert_eq!(
            Mode::from_value(&json!("Chatty")),
            Some(Mode::Unrecognized("Chatty".into()))
        );
        assert_eq!(
            Mode::from_value(&json!(2)),
            Some(Mode::Unrecognized("2".into()))
        );
    }

    #[test]
    fn mode_serializes_as_its_raw_name() {
        assert_eq!(serde_json::to_value(Mode::Chatty).unwrap(), json!("chatty"));
        assert_eq!(
            serde_json::to_value(Mode::Unrecognized("essay".into())).unwrap(),
            json!("essay")
        );
    }
}
