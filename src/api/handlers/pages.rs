use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;
use std::sync::Arc;

use super::store_error;
use crate::api::response::ApiError;
use crate::store::DrawingRecord;
use crate::AppState;

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    title: &'static str,
    grid_size: u32,
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    title: &'static str,
    drawings: Vec<DrawingRecord>,
}

#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate {
    title: &'static str,
    id: String,
    data: String,
}

fn render_page<T: Template>(template: T) -> Result<Html<String>, ApiError> {
    template
        .render()
        .map(Html)
        .map_err(|e| ApiError::internal(format!("Template rendering failed: {e}")))
}

// ============================================================================
// Handlers
// ============================================================================

/// The drawing form page.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render_page(IndexTemplate {
        title: "Draw an image",
        grid_size: state.config.render.grid_size,
    })
}

/// List the contents of every persisted drawing.
pub async fn results(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let drawings = state.store.list().await.map_err(store_error)?;

    render_page(ResultsTemplate {
        title: "Results",
        drawings,
    })
}

/// Show a single drawing's stored contents.
pub async fn result_for_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let data = state.store.get(&id).await.map_err(store_error)?;

    render_page(ResultTemplate {
        title: "Result",
        id,
        data,
    })
}
