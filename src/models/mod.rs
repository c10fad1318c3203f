mod model_info;
mod recommendation;

pub use model_info::{ModelCatalog, ModelInfo};
pub use recommendation::{
    Movie, MoviesResponse, RecommendationCount, RecommendationRequest, RecommendationResponse,
    MAX_RECOMMENDATIONS, MIN_RECOMMENDATIONS,
};
