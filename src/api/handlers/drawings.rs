use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::store_error;
use crate::api::response::ApiError;
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    pub canvas_data: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub unique_id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Persist a submitted drawing and return its generated identifier.
///
/// The payload is stored verbatim minus its enclosing brackets; no
/// well-formedness validation happens here. A fresh UUID per call means
/// concurrent submissions cannot collide.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SubmitForm>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let unique_id = state
        .store
        .create(&form.canvas_data)
        .await
        .map_err(store_error)?;

    tracing::debug!(drawing_id = %unique_id, bytes = form.canvas_data.len(), "Stored drawing");

    Ok(Json(SubmitResponse { unique_id }))
}
