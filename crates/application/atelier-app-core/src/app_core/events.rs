use crate::domain::{Route, RunId};
use atelier_core::TopicEntry;

#[derive(Debug, Clone)]
pub enum StudioEvent {
    // Navigation
    RouteChanged(Route),

    // A worker finished (or failed) one generation attempt. Events whose
    // run_id no longer matches the owning composer are dropped before they
    // reach the reducer.
    Generation {
        run_id: RunId,
        outcome: GenerationOutcome,
    },
}

#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    PostReady(String),
    PostFailed(String),

    ImageReady(String),
    ImageFailed(String),
    ImageSaved(String),
    ImageSaveFailed(String),

    TopicsReady(Vec<TopicEntry>),
    TopicsFailed(String),

    DocumentReady(String),
    DocumentFailed(String),
}

impl GenerationOutcome {
    /// Screen whose run_id gates this outcome.
    pub fn route(&self) -> Route {
        match self {
            GenerationOutcome::PostReady(_) | GenerationOutcome::PostFailed(_) => Route::Post,
            GenerationOutcome::ImageReady(_)
            | GenerationOutcome::ImageFailed(_)
            | GenerationOutcome::ImageSaved(_)
            | GenerationOutcome::ImageSaveFailed(_) => Route::Image,
            GenerationOutcome::TopicsReady(_)
            | GenerationOutcome::TopicsFailed(_)
            | GenerationOutcome::DocumentReady(_)
            | GenerationOutcome::DocumentFailed(_) => Route::Document,
        }
    }
}
