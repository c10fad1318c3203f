use serde::Serialize;

use crate::models::{ModelCatalog, Movie, RecommendationCount};

/// Lifecycle of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Catalog fetch not yet settled
    Uninitialized,
    /// Catalog fetch settled, successfully or not
    Ready,
}

/// The only two errors a user ever sees; detail goes to the log
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewError {
    #[error("Failed to load initial data")]
    LoadFailed,

    #[error("Failed to get recommendations")]
    RecommendationFailed,
}

/// Everything the page renders from
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub phase: Phase,
    pub models: ModelCatalog,
    pub movies: Vec<String>,
    /// Empty means no model selected
    pub selected_model: String,
    /// Empty means no movie selected
    pub selected_movie: String,
    pub count: RecommendationCount,
    pub recommendations: Vec<Movie>,
    /// Set on snapshots from the controller's in-flight flag
    pub loading: bool,
    pub error: Option<ViewError>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates the state of a page that has not loaded anything yet
    pub fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            models: ModelCatalog::new(),
            movies: Vec::new(),
            selected_model: String::new(),
            selected_movie: String::new(),
            count: RecommendationCount::default(),
            recommendations: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Whether "get recommendations" may run right now
    pub fn action_enabled(&self) -> bool {
        !self.selected_model.is_empty() && !self.selected_movie.is_empty() && !self.loading
    }
}
