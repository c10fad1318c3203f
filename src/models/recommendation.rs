use serde::{Deserialize, Deserializer, Serialize};

use super::ModelInfo;

/// Smallest number of recommendations a user can ask for
pub const MIN_RECOMMENDATIONS: u8 = 1;
/// Largest number of recommendations a user can ask for
pub const MAX_RECOMMENDATIONS: u8 = 10;
const DEFAULT_RECOMMENDATIONS: u8 = 5;

/// A movie returned by the backend as similar to the queried one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub rating: f64,
    /// Cosine similarity to the queried movie, in [0, 1]
    pub similarity: f64,
    pub overview: String,
}

/// Number of recommendations to request, always within [1, 10]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecommendationCount(u8);

impl RecommendationCount {
    /// Builds a count, clamping out-of-range input into [1, 10]
    pub fn clamped(value: i64) -> Self {
        let value = value.clamp(MIN_RECOMMENDATIONS as i64, MAX_RECOMMENDATIONS as i64);
        Self(value as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for RecommendationCount {
    fn default() -> Self {
        Self(DEFAULT_RECOMMENDATIONS)
    }
}

impl<'de> Deserialize<'de> for RecommendationCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::clamped)
    }
}

/// Payload of `POST /recommend`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub movie: String,
    pub model: String,
    pub num_recommendations: RecommendationCount,
}

/// Response of `POST /recommend`
///
/// `recommendations` is ordered by rank, most similar first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub model: ModelInfo,
    pub recommendations: Vec<Movie>,
}

/// Response of `GET /movies`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoviesResponse {
    pub movies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_clamps_into_range() {
        assert_eq!(RecommendationCount::clamped(0).get(), 1);
        assert_eq!(RecommendationCount::clamped(-4).get(), 1);
        assert_eq!(RecommendationCount::clamped(7).get(), 7);
        assert_eq!(RecommendationCount::clamped(10).get(), 10);
        assert_eq!(RecommendationCount::clamped(250).get(), 10);
    }

    #[test]
    fn test_count_defaults_to_five() {
        assert_eq!(RecommendationCount::default().get(), 5);
    }

    #[test]
    fn test_count_deserialization_clamps() {
        let low: RecommendationCount = serde_json::from_str("0").unwrap();
        let high: RecommendationCount = serde_json::from_str("200").unwrap();
        let inside: RecommendationCount = serde_json::from_str("4").unwrap();
        assert_eq!(low.get(), 1);
        assert_eq!(high.get(), 10);
        assert_eq!(inside.get(), 4);

        let request: RecommendationRequest = serde_json::from_str(
            r#"{"movie": "Heat", "model": "kyle", "num_recommendations": -3}"#,
        )
        .unwrap();
        assert_eq!(request.num_recommendations.get(), 1);
    }

    #[test]
    fn test_count_rejects_non_integers() {
        assert!(serde_json::from_str::<RecommendationCount>("\"five\"").is_err());
        assert!(serde_json::from_str::<RecommendationCount>("2.5").is_err());
    }

    #[test]
    fn test_request_serializes_wire_field_names() {
        let request = RecommendationRequest {
            movie: "Inception".to_string(),
            model: "kyle".to_string(),
            num_recommendations: RecommendationCount::clamped(3),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "movie": "Inception",
                "model": "kyle",
                "num_recommendations": 3
            })
        );
    }

    #[test]
    fn test_response_deserialization_keeps_rank_order() {
        let json = r#"{
            "model": {"name": "SBERT", "description": "plot + genre", "author": "Brayan"},
            "recommendations": [
                {"title": "Interstellar", "genre": "Adventure, Drama, Sci-Fi", "rating": 8.6, "similarity": 0.91, "overview": "A team of explorers..."},
                {"title": "The Prestige", "genre": "Drama, Mystery, Sci-Fi", "rating": 8.5, "similarity": 0.87, "overview": "After a tragic accident..."}
            ]
        }"#;

        let response: RecommendationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.model.name, "SBERT");
        assert_eq!(response.recommendations.len(), 2);
        assert_eq!(response.recommendations[0].title, "Interstellar");
        assert_eq!(response.recommendations[1].title, "The Prestige");
        assert_eq!(response.recommendations[1].rating, 8.5);
    }

    #[test]
    fn test_movies_response_deserialization() {
        let response: MoviesResponse =
            serde_json::from_str(r#"{"movies": ["The Godfather", "12 Angry Men"]}"#).unwrap();
        assert_eq!(response.movies, vec!["The Godfather", "12 Angry Men"]);
    }
}
