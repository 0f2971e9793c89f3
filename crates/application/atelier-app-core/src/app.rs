use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;

use atelier_client::{default_http_client, Endpoints, GenerationClient};
use atelier_core::TopicField;

use crate::app_core::{reduce, StudioEvent};
use crate::domain::{
    AppState, DocumentPhase, Notice, Route, RunId, StudioSettings, GENERATION_FAILURE_NOTICE,
};
use crate::exporter;
use crate::orchestrator::GenerationOrchestrator;
use crate::persistence::FilePersistence;
use crate::ports::GenerationPort;

pub struct AtelierApplication {
    pub state: AppState,

    persistence: FilePersistence,
    orchestrator: GenerationOrchestrator,
    // `true` when a test injected its own port; settings changes must not
    // swap it out from under the test.
    custom_port: bool,

    msg_rx: mpsc::Receiver<StudioEvent>,
    msg_tx: mpsc::Sender<StudioEvent>,
}

/// Endpoint overrides win over built-in defaults (which themselves honor the
/// env vars).
pub fn endpoints(settings: &StudioSettings) -> Endpoints {
    let mut endpoints = Endpoints::default();
    if let Some(url) = &settings.post_url {
        endpoints.post_url = url.clone();
    }
    if let Some(url) = &settings.image_url {
        endpoints.image_url = url.clone();
    }
    if let Some(url) = &settings.document_url {
        endpoints.document_url = url.clone();
    }
    endpoints
}

fn default_port(settings: &StudioSettings) -> Arc<dyn GenerationPort> {
    let client = default_http_client().unwrap_or_else(|_| reqwest::Client::new());
    Arc::new(GenerationClient::new(client, endpoints(settings)))
}

impl Default for AtelierApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl AtelierApplication {
    pub fn new() -> Self {
        let persistence = FilePersistence::new();
        let settings = persistence.load_settings().unwrap_or_default();
        let port = default_port(&settings);

        let mut app = Self::with_port(port, persistence);
        app.custom_port = false;
        app.state.settings = settings;
        app
    }

    /// Builds the application around an arbitrary generation port.
    pub fn with_port(port: Arc<dyn GenerationPort>, persistence: FilePersistence) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(100);
        Self {
            state: AppState::default(),
            persistence,
            orchestrator: GenerationOrchestrator::new(port, msg_tx.clone()),
            custom_port: true,
            msg_rx,
            msg_tx,
        }
    }

    // --- Actions ---

    pub fn generate_post(&mut self) -> anyhow::Result<()> {
        if self.state.post.in_flight {
            return Ok(());
        }
        if let Err(e) = self.state.post.request.validate() {
            self.state.post.notice = Some(Notice::validation(e.to_string()));
            return Ok(());
        }

        let run_id: RunId = uuid::Uuid::new_v4();
        self.state.post.run_id = Some(run_id);
        self.state.post.in_flight = true;
        self.state.post.notice = None;

        if let Err(e) = self
            .orchestrator
            .start_post(self.state.post.request.clone(), run_id)
        {
            self.state.post.in_flight = false;
            self.state.post.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
            return Err(e);
        }
        Ok(())
    }

    pub fn generate_image(&mut self) -> anyhow::Result<()> {
        if self.state.image.in_flight {
            return Ok(());
        }
        if let Err(e) = self.state.image.request.validate() {
            self.state.image.notice = Some(Notice::validation(e.to_string()));
            return Ok(());
        }

        let run_id: RunId = uuid::Uuid::new_v4();
        self.state.image.run_id = Some(run_id);
        self.state.image.in_flight = true;
        self.state.image.notice = None;

        if let Err(e) = self
            .orchestrator
            .start_image(self.state.image.request.clone(), run_id)
        {
            self.state.image.in_flight = false;
            self.state.image.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
            return Err(e);
        }
        Ok(())
    }

    pub fn generate_topics(&mut self) -> anyhow::Result<()> {
        if self.state.document.is_busy() {
            return Ok(());
        }
        if let Err(e) = self.state.document.request.validate() {
            self.state.document.notice = Some(Notice::validation(e.to_string()));
            return Ok(());
        }

        let run_id: RunId = uuid::Uuid::new_v4();
        self.state.document.run_id = Some(run_id);
        self.state.document.busy = Some(DocumentPhase::Topics);
        self.state.document.notice = None;

        if let Err(e) = self
            .orchestrator
            .start_topics(self.state.document.request.clone(), run_id)
        {
            self.state.document.busy = None;
            self.state.document.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
            return Err(e);
        }
        Ok(())
    }

    pub fn generate_document(&mut self) -> anyhow::Result<()> {
        if self.state.document.is_busy() {
            return Ok(());
        }
        let validation = self
            .state
            .document
            .request
            .validate()
            .and_then(|()| self.state.document.outline.validate());
        if let Err(e) = validation {
            self.state.document.notice = Some(Notice::validation(e.to_string()));
            return Ok(());
        }

        let run_id: RunId = uuid::Uuid::new_v4();
        self.state.document.run_id = Some(run_id);
        self.state.document.busy = Some(DocumentPhase::Document);
        self.state.document.notice = None;

        if let Err(e) = self.orchestrator.start_document(
            self.state.document.request.clone(),
            self.state.document.outline.clone(),
            run_id,
        ) {
            self.state.document.busy = None;
            self.state.document.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
            return Err(e);
        }
        Ok(())
    }

    pub fn update_topic(&mut self, index: usize, field: TopicField, value: String) {
        self.state.document.outline.update(index, field, value);
    }

    pub fn set_pages(&mut self, pages: i64) {
        self.state.document.request.set_pages(pages);
    }

    /// Post screen hand-off: reuse the post task as the image prompt.
    pub fn derive_image_from_post(&mut self) {
        if self.state.post.result.is_none() {
            return;
        }
        self.state.image.request.task = self.state.post.request.task.clone();
        self.state.route = Route::Image;
    }

    // --- Export ---

    pub fn save_document_to(&mut self, path: &Path) -> anyhow::Result<()> {
        let Some(text) = self.state.document.document.clone() else {
            return Ok(());
        };
        match exporter::save_text(path, &text) {
            Ok(()) => {
                self.state.document.notice =
                    Some(Notice::success(format!("Saved to {}", path.display())));
                Ok(())
            }
            Err(e) => {
                self.state.document.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
                Err(e)
            }
        }
    }

    /// Re-fetches the image URL on a worker and writes the bytes to `path`.
    pub fn save_image_to(&mut self, path: PathBuf) -> anyhow::Result<()> {
        let Some(url) = self.state.image.image_url.clone() else {
            return Ok(());
        };
        let run_id = match self.state.image.run_id {
            Some(id) => id,
            None => {
                let id = uuid::Uuid::new_v4();
                self.state.image.run_id = Some(id);
                id
            }
        };
        if let Err(e) = self.orchestrator.start_image_save(url, path, run_id) {
            self.state.image.notice = Some(Notice::failure(GENERATION_FAILURE_NOTICE));
            return Err(e);
        }
        Ok(())
    }

    // --- State management ---

    pub fn navigate(&mut self, route: Route) {
        if !matches!(route, Route::Settings) {
            self.state.settings_draft = None;
        }
        self.state.route = route;
    }

    pub fn update_settings(&mut self, settings: StudioSettings) -> anyhow::Result<()> {
        self.state.settings = settings.clone();
        if !self.custom_port {
            self.orchestrator =
                GenerationOrchestrator::new(default_port(&settings), self.msg_tx.clone());
        }
        self.persistence.save_settings(&settings)
    }

    /// Event ingress for workers (and tests).
    pub fn sender(&self) -> mpsc::Sender<StudioEvent> {
        self.msg_tx.clone()
    }

    /// Call this from the UI tick to drain worker events. Outcomes whose
    /// run_id no longer matches the owning composer are stale and dropped.
    pub fn handle_events(&mut self) {
        while let Ok(ev) = self.msg_rx.try_recv() {
            if let StudioEvent::Generation { run_id, outcome } = &ev {
                let current = match outcome.route() {
                    Route::Post => self.state.post.run_id,
                    Route::Image => self.state.image.run_id,
                    Route::Document => self.state.document.run_id,
                    // No worker reports to the settings screen.
                    Route::Settings => None,
                };
                if current != Some(*run_id) {
                    continue;
                }
            }
            self.state = reduce(self.state.clone(), ev);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state.post.in_flight || self.state.image.in_flight || self.state.document.is_busy()
    }
}
