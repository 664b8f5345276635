//! HTTP surface: JSON API routes, static pages, CORS and access logs.

pub mod handlers;


use axum::routing::{get, post};
use axum::Router;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::llm::CompletionClient;
use crate::prompts::PromptTemplates;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub llm: Arc<dyn CompletionClient>,
    pub prompts: PromptTemplates,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(
        llm: Arc<dyn CompletionClient>,
        prompts: PromptTemplates,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            llm,
            prompts,
            public_dir: public_dir.into(),
        }
    }
}

/// Page routes and the HTML file each one serves.
pub const PAGES: [(&str, &str); 6] = [
    ("/", "index.html"),
    ("/materials", "materials.html"),
    ("/reels", "reels.html"),
    ("/cbt", "cbt.html"),
    ("/talk-to-nelax", "talk-to-nelax.html"),
    ("/about", "about.html"),
];

pub fn router(state: AppState) -> Router {
    let public_dir = state.public_dir.clone();
    let state = Arc::new(state);

    let api = Router::new()
        .route("/execute", post(handlers::execute))
        .route("/api/materials", get(handlers::materials))
        .route("/api/reels", get(handlers::reels))
        .route("/api/cbt", get(handlers::cbt))
        .route("/api/ai-teach", get(handlers::ai_teach))
        .route("/api/health", get(handlers::health))
        .with_state(state);

    api.merge(pages(&public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn pages(public_dir: &Path) -> Router {
    PAGES
        .iter()
        .fold(Router::new(), |router, (route, file)| {
            router.route_service(route, ServeFile::new(public_dir.join(file)))
        })
        .fallback_service(ServeDir::new(public_dir))
}
