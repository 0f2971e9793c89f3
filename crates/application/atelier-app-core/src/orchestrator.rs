use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::error;

use atelier_core::{DocumentRequest, ImageRequest, PostRequest, TopicOutline};

use crate::app_core::{GenerationOutcome, StudioEvent};
use crate::domain::RunId;
use crate::ports::GenerationPort;

/// Runs one generation round-trip per user action on a named worker thread
/// and reports the outcome over the event channel. There is no cancellation;
/// a superseded attempt finishes on its own and its event is dropped by the
/// run_id filter.
pub struct GenerationOrchestrator {
    port: Arc<dyn GenerationPort>,
    tx: mpsc::Sender<StudioEvent>,
}

impl GenerationOrchestrator {
    pub fn new(port: Arc<dyn GenerationPort>, tx: mpsc::Sender<StudioEvent>) -> Self {
        Self { port, tx }
    }

    pub fn start_post(&self, req: PostRequest, run_id: RunId) -> anyhow::Result<()> {
        self.spawn(
            "atelier-gen-post",
            run_id,
            GenerationOutcome::PostFailed,
            move |port| async move {
                match port.generate_post(&req).await {
                    Ok(text) => GenerationOutcome::PostReady(text),
                    Err(e) => {
                        error!("post generation failed: {e}");
                        GenerationOutcome::PostFailed(e.to_string())
                    }
                }
            },
        )
    }

    pub fn start_image(&self, req: ImageRequest, run_id: RunId) -> anyhow::Result<()> {
        self.spawn(
            "atelier-gen-image",
            run_id,
            GenerationOutcome::ImageFailed,
            move |port| async move {
                match port.generate_image(&req).await {
                    Ok(url) => GenerationOutcome::ImageReady(url),
                    Err(e) => {
                        error!("image generation failed: {e}");
                        GenerationOutcome::ImageFailed(e.to_string())
                    }
                }
            },
        )
    }

    pub fn start_topics(&self, req: DocumentRequest, run_id: RunId) -> anyhow::Result<()> {
        self.spawn(
            "atelier-gen-topics",
            run_id,
            GenerationOutcome::TopicsFailed,
            move |port| async move {
                match port.generate_topics(&req).await {
                    Ok(entries) => GenerationOutcome::TopicsReady(entries),
                    Err(e) => {
                        error!("topic generation failed: {e}");
                        GenerationOutcome::TopicsFailed(e.to_string())
                    }
                }
            },
        )
    }

    pub fn start_document(
        &self,
        req: DocumentRequest,
        outline: TopicOutline,
        run_id: RunId,
    ) -> anyhow::Result<()> {
        self.spawn(
            "atelier-gen-document",
            run_id,
            GenerationOutcome::DocumentFailed,
            move |port| async move {
                match port.generate_document(&req, &outline).await {
                    Ok(text) => GenerationOutcome::DocumentReady(text),
                    Err(e) => {
                        error!("document generation failed: {e}");
                        GenerationOutcome::DocumentFailed(e.to_string())
                    }
                }
            },
        )
    }

    /// Re-fetches the image URL and writes the raw bytes to `path`.
    pub fn start_image_save(
        &self,
        url: String,
        path: PathBuf,
        run_id: RunId,
    ) -> anyhow::Result<()> {
        self.spawn(
            "atelier-save-image",
            run_id,
            GenerationOutcome::ImageSaveFailed,
            move |port| async move {
                let res: anyhow::Result<()> = async {
                    let bytes = port.fetch_image_bytes(&url).await?;
                    std::fs::write(&path, &bytes)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    Ok(())
                }
                .await;

                match res {
                    Ok(()) => GenerationOutcome::ImageSaved(path.display().to_string()),
                    Err(e) => {
                        error!("image download failed: {e:#}");
                        GenerationOutcome::ImageSaveFailed(e.to_string())
                    }
                }
            },
        )
    }

    /// Every spawned worker emits exactly one outcome, even when the async
    /// runtime cannot be brought up, so the owning composer's busy flag is
    /// always cleared. `fail` maps that startup error to the composer's
    /// failed variant.
    fn spawn<F, Fut>(
        &self,
        thread_name: &str,
        run_id: RunId,
        fail: fn(String) -> GenerationOutcome,
        work: F,
    ) -> anyhow::Result<()>
    where
        F: FnOnce(Arc<dyn GenerationPort>) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = GenerationOutcome> + Send,
    {
        let tx = self.tx.clone();
        let port = self.port.clone();

        std::thread::Builder::new()
            .name(thread_name.into())
            .spawn(move || {
                let outcome = match crate::async_runtime::runtime() {
                    Ok(rt) => rt.block_on(work(port)),
                    Err(e) => {
                        error!("failed to start async runtime: {e}");
                        fail(e.to_string())
                    }
                };
                let _ = tx.blocking_send(StudioEvent::Generation { run_id, outcome });
            })
            .context("Failed to spawn generation worker thread")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use atelier_client::GenerationError;
    use atelier_core::TopicEntry;

    struct RefusingPort;

    #[async_trait]
    impl GenerationPort for RefusingPort {
        async fn generate_post(&self, _req: &PostRequest) -> Result<String, GenerationError> {
            Err(GenerationError::MissingField("post"))
        }

        async fn generate_image(&self, _req: &ImageRequest) -> Result<String, GenerationError> {
            Err(GenerationError::MissingField("imageUrl"))
        }

        async fn generate_topics(
            &self,
            _req: &DocumentRequest,
        ) -> Result<Vec<TopicEntry>, GenerationError> {
            Err(GenerationError::MissingField("topics"))
        }

        async fn generate_document(
            &self,
            _req: &DocumentRequest,
            _outline: &TopicOutline,
        ) -> Result<String, GenerationError> {
            Err(GenerationError::MissingField("document"))
        }

        async fn fetch_image_bytes(&self, _url: &str) -> Result<Vec<u8>, GenerationError> {
            Err(GenerationError::MissingField("imageUrl"))
        }
    }

    #[test]
    fn failing_worker_still_reports_an_outcome() {
        let (tx, mut rx) = mpsc::channel(4);
        let orchestrator = GenerationOrchestrator::new(Arc::new(RefusingPort), tx);

        let run_id = uuid::Uuid::new_v4();
        let req = PostRequest {
            task: "Напиши про кофе".into(),
            ..Default::default()
        };
        orchestrator.start_post(req, run_id).expect("spawn worker");

        let event = rx.blocking_recv().expect("worker event");
        match event {
            StudioEvent::Generation {
                run_id: reported,
                outcome: GenerationOutcome::PostFailed(_),
            } => assert_eq!(reported, run_id),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
