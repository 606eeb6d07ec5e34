mod admin;
mod drawings;
mod pages;
mod plot;

use crate::api::response::ApiError;
use crate::render::RenderError;
use crate::store::StoreError;

pub use admin::health;
pub use drawings::submit;
pub use pages::{index, result_for_id, results};
pub use plot::plot;

/// Map a StoreError to an ApiError
fn store_error(e: StoreError) -> ApiError {
    match e {
        StoreError::InvalidId(id) => ApiError::bad_request(format!("Invalid drawing id: {id}")),
        StoreError::NotFound(_) => ApiError::not_found("Drawing not found"),
        StoreError::Io(e) => ApiError::internal(e.to_string()),
    }
}

/// Map a RenderError to an ApiError
fn render_error(e: RenderError) -> ApiError {
    match e {
        RenderError::InvalidNumber { .. } | RenderError::BadShape { .. } => {
            ApiError::bad_request(e.to_string())
        }
        RenderError::Encode(e) => ApiError::internal(e.to_string()),
    }
}
