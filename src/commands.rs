use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::llm::CompletionClient;
use crate::preprocessing::{explicit_mode, lenient_text, Cleaner, Mode, Preprocessor};
use crate::prompts::{PromptTemplates, NO_ANSWER_FALLBACK};

pub const ASK_QUESTION: &str = "ask_question";

/// Body of `POST /execute`.
#[derive(Debug, Default)]
pub struct CommandRequest {
    pub command: Option<Value>,
    pub args: Option<AskArgs>,
}

impl CommandRequest {
    /// Reads the `{command, args}` envelope. A body that is not a JSON
    /// object carries neither field.
    pub fn from_body(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::default();
        };

        Self {
            command: fields.remove("command"),
            args: fields.remove("args").map(AskArgs::from_value),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct AskArgs {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
    #[serde(default, deserialize_with = "explicit_mode")]
    pub mode: Option<Mode>,
}

impl AskArgs {
    /// Non-object args carry no question and no mode.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    AskQuestion(AskArgs),
}

impl Command {
    pub fn parse(request: CommandRequest) -> Result<Self, ApiError> {
        match Cleaner::text(request.command).as_str() {
            ASK_QUESTION => Ok(Command::AskQuestion(request.args.unwrap_or_default())),
            _ => Err(ApiError::UnknownCommand),
        }
    }
}

/* ---------- ask_question ---------- */

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn ask_question(
    llm: &dyn CompletionClient,
    templates: &PromptTemplates,
    args: AskArgs,
) -> Result<String, ApiError> {
    let selected = Preprocessor::process(args.mode, &args.message, templates);
    info!(
        mode = %selected.mode,
        question_len = args.message.len(),
        "Forwarding question"
    );

    let answer = llm
        .ask(selected.prompt_text, &args.message)
        .await
        .map_err(ApiError::upstream("Failed to fetch response"))?;

    Ok(answer.unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> CommandRequest {
        CommandRequest::from_body(value)
    }

    #[test]
    fn ask_question_is_parsed() {
        let command = Command::parse(request(json!({
            "command": "ask_question",
            "args": { "message": "hello there", "mode": "chatty" }
        })))
        .unwrap();
        let Command::AskQuestion(args) = command;
        assert_eq!(args.message, "hello there");
        assert_eq!(args.mode, Some(Mode::Chatty));
    }

    #[test]
    fn missing_args_read_as_empty_question() {
        let Command::AskQuestion(args) =
            Command::parse(request(json!({ "command": "ask_question" }))).unwrap();
        assert_eq!(args.message, "");
        assert_eq!(args.mode, None);
    }

    #[test]
    fn non_object_args_read_as_empty_question() {
        for args in [json!("oops"), json!(42), json!(true), json!(["hello"])] {
            let Command::AskQuestion(parsed) = Command::parse(request(json!({
                "command": "ask_question",
                "args": args
            })))
            .unwrap();
            assert_eq!(parsed.message, "");
            assert_eq!(parsed.mode, None);
        }
    }

    #[test]
    fn non_object_body_is_unknown() {
        for body in [
            json!(["ask_question", { "message": "hello" }]),
            json!("ask_question"),
            json!(null),
        ] {
            assert!(matches!(
                Command::parse(request(body)),
                Err(ApiError::UnknownCommand)
            ));
        }
    }

    #[test]
    fn other_commands_are_unknown() {
        for body in [
            json!({ "command": "delete_everything" }),
            json!({ "command": 7 }),
            json!({}),
        ] {
            assert!(matches!(
                Command::parse(request(body)),
                Err(ApiError::UnknownCommand)
            ));
        }
    }
}
