/// Recommendation backend abstraction
///
/// The view layer only talks to the backend through this trait, so the HTTP
/// implementation can be swapped for a mock in tests.
use crate::{
    error::AppResult,
    models::{ModelCatalog, RecommendationRequest, RecommendationResponse},
};

pub mod http;

pub use http::HttpGateway;

/// Trait for the recommendation backend
///
/// No retries, timeouts or caching happen at this layer; every call maps to
/// exactly one HTTP request.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommenderGateway: Send + Sync {
    /// List available models, in the order the backend publishes them
    async fn list_models(&self) -> AppResult<ModelCatalog>;

    /// List the titles of every movie the backend can recommend from
    async fn list_movies(&self) -> AppResult<Vec<String>>;

    /// Ask for movies similar to `request.movie` under `request.model`
    ///
    /// The returned recommendations are ranked, most similar first.
    async fn request_recommendations(
        &self,
        request: RecommendationRequest,
    ) -> AppResult<RecommendationResponse>;
}
