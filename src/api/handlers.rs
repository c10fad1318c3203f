use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    Extension, Form, Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::view::{render::render_page, ActionOutcome, ViewState};

use super::AppState;

// Form payloads

#[derive(Debug, Deserialize)]
pub struct ModelForm {
    #[serde(default)]
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieForm {
    #[serde(default)]
    pub movie: String,
}

/// Raw slider value; parsed by hand so a bad value never leaves the page
#[derive(Debug, Deserialize)]
pub struct CountForm {
    #[serde(default)]
    pub count: String,
}

impl CountForm {
    pub fn parse(&self) -> AppResult<i64> {
        self.count.trim().parse().map_err(|_| {
            AppError::InvalidInput(format!("count must be a whole number, got {:?}", self.count))
        })
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Render the page from the current view state
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.controller.snapshot().await;
    Html(render_page(&snapshot, Utc::now().year()))
}

/// Current view state as JSON
pub async fn view_state(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.controller.snapshot().await)
}

/// Change the selected model
pub async fn select_model(
    State(state): State<AppState>,
    Form(form): Form<ModelForm>,
) -> Redirect {
    state.controller.select_model(form.model).await;
    Redirect::to("/")
}

/// Change the selected movie
pub async fn select_movie(
    State(state): State<AppState>,
    Form(form): Form<MovieForm>,
) -> Redirect {
    state.controller.select_movie(form.movie).await;
    Redirect::to("/")
}

/// Change the number of recommendations
///
/// An unparseable value keeps the current count.
pub async fn select_count(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<CountForm>,
) -> Redirect {
    match form.parse() {
        Ok(value) => {
            state.controller.set_count(value).await;
        }
        Err(e) => tracing::warn!(request_id = %request_id, error = %e, "Ignoring count"),
    }
    Redirect::to("/")
}

/// Start a recommendation request and go straight back to the page
///
/// Loading is raised before the redirect goes out, so the page the browser
/// lands on already shows it. The backend call then runs on its own task and a
/// closed browser tab does not abandon it.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Redirect {
    let Some(pending) = state.controller.begin_recommendation().await else {
        tracing::info!(request_id = %request_id, "Recommendation action disabled");
        return Redirect::to("/");
    };

    let controller = state.controller.clone();
    tokio::spawn(async move {
        let outcome = controller.finish_recommendation(pending).await;
        match outcome {
            ActionOutcome::Completed => {
                tracing::info!(request_id = %request_id, "Recommendations completed")
            }
            ActionOutcome::Failed => {
                tracing::warn!(request_id = %request_id, "Recommendations failed")
            }
            ActionOutcome::Skipped => {
                tracing::debug!(request_id = %request_id, "Recommendations skipped")
            }
        }
    });

    Redirect::to("/")
}
