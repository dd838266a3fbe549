//! Model module - Application state and data types
//!
//! This module contains all the data structures and state for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (categories, tabs, focus, UI state)
//! - `catalog`: The compiled-in playlist catalog and its filter
//! - `app_model`: Main application model with state management methods

mod app_model;
mod catalog;
mod types;

// Re-export all public types for convenient access
pub use types::{Category, Focus, RowKind, Tab, UiState};

pub use catalog::Playlist;

pub use app_model::{AppModel, ALERT_MESSAGE};
