use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use super::render_error;
use crate::api::response::ApiError;
use crate::render;
use crate::AppState;

/// Rasterize a path-embedded series as a PNG.
/// Route: GET /plot/:series
///
/// The series must contain exactly grid_size^2 comma-separated floats;
/// anything else is a 400. The image is derived per request and never
/// persisted.
pub async fn plot(
    State(state): State<Arc<AppState>>,
    Path(series): Path<String>,
) -> Result<Response, ApiError> {
    let png = render::plot_series(&series, state.config.render.grid_size).map_err(render_error)?;

    let byte_size = png.len() as u64;
    let mut response = (StatusCode::OK, png).into_response();
    let headers = response.headers_mut();

    headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("image/png"));
    headers.insert(header::CONTENT_LENGTH, header::HeaderValue::from(byte_size));

    Ok(response)
}
