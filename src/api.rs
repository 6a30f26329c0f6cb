// 🌐 REST API with Axum
// Same JSON contract as the remote "categorize" service, so browser callers can
// point at either one.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::classifier::Categorizer;
use crate::keywords::KeywordDictionary;
use crate::taxonomy::Category;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    dictionary: Arc<KeywordDictionary>,
}

impl AppState {
    pub fn new(dictionary: KeywordDictionary) -> Self {
        AppState {
            dictionary: Arc::new(dictionary),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(KeywordDictionary::builtin().clone())
    }
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Taxonomy entry for category pickers and chart legends
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Category,
    pub label: String,
    pub color: String,
    pub icon: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "expense-categorizer".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// POST /api/categorize - Classify an expense description
async fn categorize(
    State(state): State<AppState>,
    Json(request): Json<CategorizeRequest>,
) -> impl IntoResponse {
    let text = request.text.trim();

    if text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "Text cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let result = Categorizer::new(&state.dictionary).classify(text);
    tracing::info!(
        text = %text,
        category = %result.category,
        confidence = result.confidence,
        "categorized expense"
    );

    (StatusCode::OK, Json(result)).into_response()
}

/// GET /api/categories - Taxonomy in priority order
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let categories: Vec<CategoryResponse> = Category::ALL
        .iter()
        .map(|category| CategoryResponse {
            id: *category,
            label: category.label().to_string(),
            color: category.color().to_string(),
            icon: category.icon().to_string(),
            keywords: state.dictionary.keywords_for(*category).to_vec(),
        })
        .collect();

    Json(categories)
}

// ============================================================================
// Router
// ============================================================================

/// Build the application router (API nested under /api, permissive CORS)
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/categorize", post(categorize))
        .route("/categories", get(list_categories))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}
