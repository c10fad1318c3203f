use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::RwLock;
use tracing::instrument;

use crate::{
    models::{RecommendationCount, RecommendationRequest},
    services::RecommenderGateway,
};

use super::state::{Phase, ViewError, ViewState};

/// What a "get recommendations" action ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Action was disabled (missing selection or a request already in flight)
    Skipped,
    /// Results were replaced by the backend's answer
    Completed,
    /// Backend call failed; previous results were kept
    Failed,
}

/// Lowers the loading flag when dropped
///
/// Dropped after settlement, or early if the pending request is abandoned or
/// the task running it is aborted.
struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// A recommendation request that has been admitted but not yet sent
///
/// The page shows the loading state for as long as this value, or the
/// [`ViewController::finish_recommendation`] call consuming it, is alive.
pub struct PendingRecommendation {
    request: RecommendationRequest,
    _loading: LoadingGuard,
}

impl PendingRecommendation {
    pub fn request(&self) -> &RecommendationRequest {
        &self.request
    }
}

/// Owns the page state and applies every user-driven transition to it
///
/// The state lock is never held across a backend call, so a render taken while
/// a request is in flight sees `loading == true`. The loading flag itself
/// lives outside the lock so that it can be cleared from a destructor.
pub struct ViewController {
    gateway: Arc<dyn RecommenderGateway>,
    state: RwLock<ViewState>,
    loading: Arc<AtomicBool>,
}

impl ViewController {
    pub fn new(gateway: Arc<dyn RecommenderGateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(ViewState::new()),
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Copy of the current state, for rendering
    pub async fn snapshot(&self) -> ViewState {
        let mut snapshot = self.state.read().await.clone();
        snapshot.loading = self.loading.load(Ordering::SeqCst);
        snapshot
    }

    pub async fn action_enabled(&self) -> bool {
        self.snapshot().await.action_enabled()
    }

    /// Loads both catalogs concurrently and pre-selects the first model
    ///
    /// Either fetch failing fails the whole load: nothing is stored and the
    /// generic load error is shown.
    #[instrument(skip(self))]
    pub async fn initialize(&self) {
        let result = tokio::try_join!(self.gateway.list_models(), self.gateway.list_movies());

        let mut state = self.state.write().await;
        match result {
            Ok((models, movies)) => {
                if let Some((first, _)) = models.first() {
                    state.selected_model = first.clone();
                }
                tracing::info!(
                    models = models.len(),
                    movies = movies.len(),
                    selected_model = %state.selected_model,
                    "Initial data loaded"
                );
                state.models = models;
                state.movies = movies;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load initial data");
                state.error = Some(ViewError::LoadFailed);
            }
        }
        state.phase = Phase::Ready;
    }

    pub async fn select_model(&self, key: impl Into<String>) {
        let key = key.into();
        tracing::debug!(model = %key, "Model selected");
        self.state.write().await.selected_model = key;
    }

    pub async fn select_movie(&self, title: impl Into<String>) {
        let title = title.into();
        tracing::debug!(movie = %title, "Movie selected");
        self.state.write().await.selected_movie = title;
    }

    /// Sets the number of recommendations, clamped into [1, 10]
    pub async fn set_count(&self, value: i64) -> RecommendationCount {
        let count = RecommendationCount::clamped(value);
        self.state.write().await.count = count;
        count
    }

    /// Requests recommendations for the current selections
    ///
    /// No-op while the action is disabled. The loading flag is raised before
    /// the backend call and lowered after it settles, whatever the outcome.
    #[instrument(skip(self))]
    pub async fn get_recommendations(&self) -> ActionOutcome {
        match self.begin_recommendation().await {
            Some(pending) => self.finish_recommendation(pending).await,
            None => ActionOutcome::Skipped,
        }
    }

    /// First half of [`get_recommendations`](Self::get_recommendations)
    ///
    /// Checks the action guard, clears the error and raises the loading flag
    /// under one write lock. Returns `None` when the action is disabled.
    pub async fn begin_recommendation(&self) -> Option<PendingRecommendation> {
        let mut state = self.state.write().await;
        if state.selected_model.is_empty() || state.selected_movie.is_empty() {
            tracing::debug!("Recommendation action disabled, selection missing");
            return None;
        }
        if self.loading.swap(true, Ordering::SeqCst) {
            tracing::debug!("Recommendation already in flight, ignoring");
            return None;
        }

        state.error = None;
        Some(PendingRecommendation {
            request: RecommendationRequest {
                movie: state.selected_movie.clone(),
                model: state.selected_model.clone(),
                num_recommendations: state.count,
            },
            _loading: LoadingGuard(self.loading.clone()),
        })
    }

    /// Second half: sends the admitted request and settles the state
    pub async fn finish_recommendation(&self, pending: PendingRecommendation) -> ActionOutcome {
        let PendingRecommendation { request, _loading: loading } = pending;

        tracing::info!(
            movie = %request.movie,
            model = %request.model,
            count = request.num_recommendations.get(),
            "Requesting recommendations"
        );

        let result = self.gateway.request_recommendations(request).await;

        let mut state = self.state.write().await;
        let outcome = match result {
            Ok(response) => {
                state.recommendations = response.recommendations;
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to get recommendations");
                state.error = Some(ViewError::RecommendationFailed);
                ActionOutcome::Failed
            }
        };
        drop(state);
        drop(loading);
        outcome
    }
}
