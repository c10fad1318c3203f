/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let error = AppError::ExternalApi("Model foo not found".to_string());
        assert_eq!(error.to_string(), "External API error: Model foo not found");

        let error = AppError::InvalidInput("count must be a whole number".to_string());
        assert_eq!(error.to_string(), "Invalid input: count must be a whole number");
    }
}
