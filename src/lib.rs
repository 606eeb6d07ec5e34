//! drawpad - capture, persist, and re-render freehand canvas drawings
//!
//! This crate provides a small HTTP service with:
//! - A browser drawing page that submits flattened pixel data
//! - File-backed persistence of submitted drawings, keyed by UUID
//! - On-demand grayscale PNG rendering of a flattened numeric series
//! - HTML listing and single-record pages

pub mod api;
pub mod config;
pub mod render;
pub mod store;

use config::Config;
use store::DrawingStore;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub store: DrawingStore,
}
