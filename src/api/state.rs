use std::sync::Arc;

use crate::services::RecommenderGateway;
use crate::view::ViewController;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ViewController>,
}

impl AppState {
    /// Creates state around a fresh, not yet initialized controller
    pub fn new(gateway: Arc<dyn RecommenderGateway>) -> Self {
        Self {
            controller: Arc::new(ViewController::new(gateway)),
        }
    }
}
