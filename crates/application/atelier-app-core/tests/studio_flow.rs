use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use atelier_app_core::persistence::FilePersistence;
use atelier_app_core::{
    app::endpoints, AppState, AtelierApplication, GenerationOutcome, GenerationPort, NoticeKind,
    Route, SettingsDraft, StudioEvent, StudioSettings, GENERATION_FAILURE_NOTICE,
};
use atelier_client::GenerationError;
use atelier_core::{
    DocumentRequest, ImageRequest, PostRequest, TopicEntry, TopicField, TopicOutline,
};

/// Canned port: `Some(value)` succeeds, `None` fails with a missing field.
#[derive(Default)]
struct ScriptedPort {
    post: Option<String>,
    image: Option<String>,
    topics: Option<Vec<TopicEntry>>,
    document: Option<String>,
    calls: AtomicUsize,
    last_outline: Mutex<Option<TopicOutline>>,
}

impl ScriptedPort {
    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationPort for ScriptedPort {
    async fn generate_post(&self, _req: &PostRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.post.clone().ok_or(GenerationError::MissingField("post"))
    }

    async fn generate_image(&self, _req: &ImageRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.image
            .clone()
            .ok_or(GenerationError::MissingField("imageUrl"))
    }

    async fn generate_topics(
        &self,
        _req: &DocumentRequest,
    ) -> Result<Vec<TopicEntry>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.topics
            .clone()
            .ok_or(GenerationError::MissingField("topics"))
    }

    async fn generate_document(
        &self,
        _req: &DocumentRequest,
        outline: &TopicOutline,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_outline.lock() {
            *guard = Some(outline.clone());
        }
        self.document
            .clone()
            .ok_or(GenerationError::MissingField("document"))
    }

    async fn fetch_image_bytes(&self, _url: &str) -> Result<Vec<u8>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![1, 2, 3])
    }
}

struct Harness {
    app: AtelierApplication,
    port: Arc<ScriptedPort>,
    _config_dir: tempfile::TempDir,
}

fn harness(port: ScriptedPort) -> Harness {
    let config_dir = tempfile::tempdir().expect("tempdir");
    let port = Arc::new(port);
    let app = AtelierApplication::with_port(
        port.clone(),
        FilePersistence::with_root(config_dir.path().to_path_buf()),
    );
    Harness {
        app,
        port,
        _config_dir: config_dir,
    }
}

fn wait_until(app: &mut AtelierApplication, pred: impl Fn(&AppState) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        app.handle_events();
        if pred(&app.state) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for state");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn whitespace_only_task_never_reaches_the_port() {
    let mut h = harness(ScriptedPort {
        post: Some("ignored".into()),
        ..Default::default()
    });
    h.app.state.post.request.task = "   ".into();

    h.app.generate_post().expect("validation is not an error");

    let notice = h.app.state.post.notice.clone().expect("validation notice");
    assert_eq!(notice.kind, NoticeKind::Validation);
    assert_eq!(notice.text, "Describe what you want the post to say");
    assert!(!h.app.state.post.in_flight);

    std::thread::sleep(Duration::from_millis(50));
    h.app.handle_events();
    assert_eq!(h.port.call_count(), 0);
}

#[test]
fn successful_post_lands_verbatim() {
    let mut h = harness(ScriptedPort {
        post: Some("☕ Пост о кофе с эмодзи".into()),
        ..Default::default()
    });
    h.app.state.post.request.task = "Напиши про кофе".into();

    h.app.generate_post().expect("start worker");
    assert!(h.app.state.post.in_flight);

    wait_until(&mut h.app, |s| !s.post.in_flight);

    assert_eq!(
        h.app.state.post.result.as_deref(),
        Some("☕ Пост о кофе с эмодзи")
    );
    assert_eq!(
        h.app.state.post.notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Success)
    );
}

#[test]
fn image_failure_keeps_placeholder_and_reports_once() {
    let mut h = harness(ScriptedPort::default());
    h.app.state.image.request.task = "кот в очках".into();

    h.app.generate_image().expect("start worker");
    wait_until(&mut h.app, |s| !s.image.in_flight);

    assert!(h.app.state.image.image_url.is_none());
    let notice = h.app.state.image.notice.clone().expect("failure notice");
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(notice.text, GENERATION_FAILURE_NOTICE);
    assert_eq!(h.port.call_count(), 1);
}

#[test]
fn stale_outcome_is_dropped() {
    let mut h = harness(ScriptedPort::default());
    let current = uuid::Uuid::new_v4();
    h.app.state.post.run_id = Some(current);
    h.app.state.post.in_flight = true;

    let stale = uuid::Uuid::new_v4();
    h.app
        .sender()
        .blocking_send(StudioEvent::Generation {
            run_id: stale,
            outcome: GenerationOutcome::PostReady("late and unwanted".into()),
        })
        .expect("queue event");

    h.app.handle_events();

    assert!(h.app.state.post.result.is_none());
    assert!(h.app.state.post.in_flight);
}

#[test]
fn edited_outline_is_submitted_verbatim() {
    let mut h = harness(ScriptedPort {
        topics: Some(vec![TopicEntry {
            title: "Введение".into(),
            description: "Обзор темы".into(),
        }]),
        document: Some("ВВЕДЕНИЕ\nТекст документа.".into()),
        ..Default::default()
    });
    h.app.state.document.request.subject = "История Рима".into();

    h.app.generate_topics().expect("start topics");
    wait_until(&mut h.app, |s| !s.document.is_busy());
    assert_eq!(h.app.state.document.outline.len(), 1);

    h.app
        .update_topic(0, TopicField::Title, "Введение и контекст".into());

    h.app.generate_document().expect("start document");
    wait_until(&mut h.app, |s| !s.document.is_busy());

    assert_eq!(
        h.app.state.document.document.as_deref(),
        Some("ВВЕДЕНИЕ\nТекст документа.")
    );

    let sent = h
        .port
        .last_outline
        .lock()
        .expect("lock")
        .clone()
        .expect("outline reached the port");
    assert_eq!(sent.entries()[0].title, "Введение и контекст");
    assert_eq!(sent.entries()[0].description, "Обзор темы");
}

#[test]
fn saved_settings_survive_a_restart_and_reroute_requests() {
    let h = harness(ScriptedPort::default());
    let mut app = h.app;

    let settings = StudioSettings {
        post_url: Some("https://override.test/post".into()),
        image_url: Some("https://override.test/image".into()),
        document_url: Some("https://override.test/document".into()),
    };
    app.update_settings(settings.clone()).expect("save settings");
    assert_eq!(app.state.settings, settings);

    // A second persistence handle over the same root sees the saved file.
    let reloaded = FilePersistence::with_root(h._config_dir.path().to_path_buf())
        .load_settings()
        .expect("reload settings");
    assert_eq!(reloaded, settings);

    let resolved = endpoints(&reloaded);
    assert_eq!(resolved.post_url, "https://override.test/post");
    assert_eq!(resolved.image_url, "https://override.test/image");
    assert_eq!(resolved.document_url, "https://override.test/document");
}

#[test]
fn leaving_the_settings_screen_discards_the_draft() {
    let h = harness(ScriptedPort::default());
    let mut app = h.app;

    app.navigate(Route::Settings);
    app.state.settings_draft = Some(SettingsDraft {
        post_url: "https://unsaved.test/post".into(),
        ..Default::default()
    });

    app.navigate(Route::Post);

    assert!(app.state.settings_draft.is_none());
    assert_eq!(app.state.settings, StudioSettings::default());
}

#[test]
fn empty_outline_blocks_document_generation() {
    let mut h = harness(ScriptedPort::default());
    h.app.state.document.request.subject = "История Рима".into();

    h.app.generate_document().expect("validation is not an error");

    let notice = h.app.state.document.notice.clone().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Validation);
    assert!(h.app.state.document.busy.is_none());
    assert_eq!(h.port.call_count(), 0);
}
