use atelier_core::TopicOutline;

use crate::domain::{AppState, Notice, GENERATION_FAILURE_NOTICE};

use super::events::{GenerationOutcome, StudioEvent};

pub fn reduce(mut state: AppState, ev: StudioEvent) -> AppState {
    match ev {
        StudioEvent::RouteChanged(r) => state.route = r,

        StudioEvent::Generation { run_id: _, outcome } => apply_outcome(&mut state, outcome),
    }
    state
}

fn apply_outcome(state: &mut AppState, outcome: GenerationOutcome) {
    match outcome {
        GenerationOutcome::PostReady(text) => {
            state.post.in_flight = false;
            state.post.result = Some(text);
            state.post.notice = Some(Notice::success("Post generated"));
        }
        GenerationOutcome::PostFailed(_) => {
            state.post.in_flight = false;
            state.post.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
        }

        GenerationOutcome::ImageReady(url) => {
            state.image.in_flight = false;
            state.image.image_url = Some(url);
            state.image.notice = Some(Notice::success("Image generated"));
        }
        GenerationOutcome::ImageFailed(_) => {
            state.image.in_flight = false;
            state.image.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
        }
        GenerationOutcome::ImageSaved(path) => {
            state.image.notice = Some(Notice::success(format!("Saved to {path}")));
        }
        GenerationOutcome::ImageSaveFailed(_) => {
            state.image.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
        }

        GenerationOutcome::TopicsReady(entries) => {
            state.document.busy = None;
            state.document.outline = TopicOutline::new(entries);
            // A fresh outline invalidates any document written from the old one.
            state.document.document = None;
            state.document.notice = Some(Notice::success("Outline ready, edit it and continue"));
        }
        GenerationOutcome::TopicsFailed(_) => {
            state.document.busy = None;
            state.document.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
        }

        GenerationOutcome::DocumentReady(text) => {
            state.document.busy = None;
            state.document.document = Some(text);
            state.document.notice = Some(Notice::success("Document generated"));
        }
        GenerationOutcome::DocumentFailed(_) => {
            state.document.busy = None;
            state.document.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
        }
    }
}
