use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use super::AppState;
use crate::catalog::{questions_for, reels_for, QuizQuestion, Reel, StudyMaterials};
use crate::commands::{ask_question, Command, CommandRequest};
use crate::error::ApiError;
use crate::preprocessing::Cleaner;
use crate::prompts::{
    materials_fallback, materials_prompt, teach_fallback, teach_prompt, TEACHER_SYSTEM,
    TUTOR_SYSTEM,
};

type ApiResult<T> = Result<Json<T>, ApiError>;

/* ---------- POST /execute ---------- */

#[derive(Serialize, Debug)]
pub struct AskResponse {
    pub success: bool,
    pub response: String,
}

pub async fn execute(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<AskResponse> {
    let request = match body {
        Ok(Json(body)) => CommandRequest::from_body(body),
        Err(rejection) => {
            warn!(error = %rejection, "Malformed command body");
            CommandRequest::default()
        }
    };

    match Command::parse(request)? {
        Command::AskQuestion(args) => {
            let response = ask_question(state.llm.as_ref(), &state.prompts, args).await?;
            Ok(Json(AskResponse {
                success: true,
                response,
            }))
        }
    }
}

/* ---------- GET /api/materials ---------- */

#[derive(Deserialize, Debug, Default)]
pub struct MaterialsQuery {
    pub topic: Option<String>,
    pub level: Option<String>,
    pub department: Option<String>,
    pub goal: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct MaterialsResponse {
    pub success: bool,
    pub query: String,
    pub ai_explanation: String,
    #[serde(flatten)]
    pub materials: StudyMaterials,
}

pub async fn materials(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MaterialsQuery>,
) -> ApiResult<MaterialsResponse> {
    let (Some(topic), Some(level), Some(department)) = (
        Cleaner::present(query.topic),
        Cleaner::present(query.level),
        Cleaner::present(query.department),
    ) else {
        return Err(ApiError::MissingParameters(
            "Missing one or more parameters: topic, level, department",
        ));
    };
    let goal = query.goal.unwrap_or_else(|| "general".to_string());

    let prompt = materials_prompt(&level, &department, &goal, &topic);
    let explanation = state
        .llm
        .ask(TUTOR_SYSTEM, &prompt)
        .await
        .map_err(ApiError::upstream("Failed to fetch study materials"))?
        .unwrap_or_else(|| materials_fallback(&topic));

    Ok(Json(MaterialsResponse {
        success: true,
        materials: StudyMaterials::for_topic(&topic, &level, &department),
        query: topic,
        ai_explanation: explanation,
    }))
}

/* ---------- GET /api/reels ---------- */

#[derive(Deserialize, Debug, Default)]
pub struct ReelsQuery {
    pub course: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ReelsResponse {
    pub success: bool,
    pub reels: Vec<Reel>,
}

pub async fn reels(Query(query): Query<ReelsQuery>) -> Json<ReelsResponse> {
    let course = Cleaner::present(query.course);
    Json(ReelsResponse {
        success: true,
        reels: reels_for(course.as_deref()),
    })
}

/* ---------- GET /api/cbt ---------- */

#[derive(Deserialize, Debug, Default)]
pub struct CbtQuery {
    pub topic: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CbtResponse {
    pub success: bool,
    pub questions: &'static [QuizQuestion],
}

pub async fn cbt(Query(query): Query<CbtQuery>) -> Json<CbtResponse> {
    Json(CbtResponse {
        success: true,
        questions: questions_for(query.topic.as_deref()),
    })
}

/* ---------- GET /api/ai-teach ---------- */

#[derive(Deserialize, Debug, Default)]
pub struct TeachQuery {
    pub course: Option<String>,
    pub level: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct TeachResponse {
    pub success: bool,
    pub summary: String,
}

pub async fn ai_teach(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TeachQuery>,
) -> ApiResult<TeachResponse> {
    let (Some(course), Some(level)) = (
        Cleaner::present(query.course),
        Cleaner::present(query.level),
    ) else {
        return Err(ApiError::MissingParameters("Missing course or level"));
    };

    let summary = state
        .llm
        .ask(TEACHER_SYSTEM, &teach_prompt(&level, &course))
        .await
        .map_err(ApiError::upstream("Failed to generate teaching content"))?
        .unwrap_or_else(|| teach_fallback(&level, &course));

    Ok(Json(TeachResponse {
        success: true,
        summary,
    }))
}

/* ---------- GET /api/health ---------- */

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
