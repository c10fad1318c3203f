pub mod controller;
pub mod labels;
pub mod render;
pub mod state;

pub use controller::{ActionOutcome, PendingRecommendation, ViewController};
pub use state::{Phase, ViewError, ViewState};
