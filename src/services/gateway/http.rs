/// HTTP gateway to the recommendation backend
///
/// API Flow:
/// 1. Catalogs: GET /models and GET /movies, fetched once when the page starts
/// 2. Recommend: POST /recommend with {movie, model, num_recommendations}
use crate::{
    error::{AppError, AppResult},
    models::{ModelCatalog, MoviesResponse, RecommendationRequest, RecommendationResponse},
    services::gateway::RecommenderGateway,
};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Clone)]
pub struct HttpGateway {
    http_client: HttpClient,
    api_url: String,
}

impl HttpGateway {
    /// Creates a gateway rooted at `api_url` (e.g. `http://127.0.0.1:5000/api`)
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Checks the status and decodes the JSON body of a backend response
    async fn decode<T: DeserializeOwned>(response: Response, endpoint: &str) -> AppResult<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Backend {} returned status {}: {}",
                endpoint,
                status,
                error_message(&body)
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(endpoint = %endpoint, response = %response_text, "Raw backend response");

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                endpoint = %endpoint,
                error = %e,
                response = %response_text,
                "Failed to deserialize backend response"
            );
            AppError::ExternalApi(format!("Failed to parse {} response: {}", endpoint, e))
        })
    }
}

/// Pulls the backend's `{"error": "..."}` message out of a failure body, falling back to the raw body
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait::async_trait]
impl RecommenderGateway for HttpGateway {
    async fn list_models(&self) -> AppResult<ModelCatalog> {
        let response = self.http_client.get(self.endpoint("models")).send().await?;
        let catalog: ModelCatalog = Self::decode(response, "/models").await?;

        tracing::info!(models = catalog.len(), "Model catalog fetched");

        Ok(catalog)
    }

    async fn list_movies(&self) -> AppResult<Vec<String>> {
        let response = self.http_client.get(self.endpoint("movies")).send().await?;
        let movies: MoviesResponse = Self::decode(response, "/movies").await?;

        tracing::info!(movies = movies.movies.len(), "Movie catalog fetched");

        Ok(movies.movies)
    }

    async fn request_recommendations(
        &self,
        request: RecommendationRequest,
    ) -> AppResult<RecommendationResponse> {
        let response = self
            .http_client
            .post(self.endpoint("recommend"))
            .json(&request)
            .send()
            .await?;

        let recommendations: RecommendationResponse = Self::decode(response, "/recommend").await?;

        tracing::info!(
            movie = %request.movie,
            model = %request.model,
            requested = request.num_recommendations.get(),
            returned = recommendations.recommendations.len(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let gateway = HttpGateway::new("http://127.0.0.1:5000/api/");
        assert_eq!(gateway.api_url(), "http://127.0.0.1:5000/api");
        assert_eq!(gateway.endpoint("models"), "http://127.0.0.1:5000/api/models");
    }

    #[test]
    fn test_error_message_prefers_backend_error_field() {
        assert_eq!(
            error_message(r#"{"error": "No movie title provided"}"#),
            "No movie title provided"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), "<html>502 Bad Gateway</html>");
        assert_eq!(error_message(""), "");
    }
}
