use serde::{Deserialize, Serialize};

use atelier_core::{DocumentRequest, ImageRequest, PostRequest, TopicOutline};

pub type RunId = uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Post,
    Image,
    Document,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    Validation,
}

/// One transient banner per screen. Replaced on the next attempt, never
/// stacked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
        }
    }

    pub fn validation(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Validation,
            text: text.into(),
        }
    }
}

/// Shown for any generation failure. The specific cause goes to the log,
/// not the screen.
pub const GENERATION_FAILURE_NOTICE: &str =
    "Generation failed. Check your connection and try again.";

#[derive(Debug, Clone, Default)]
pub struct PostComposer {
    pub request: PostRequest,
    pub result: Option<String>,
    pub in_flight: bool,
    pub run_id: Option<RunId>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Default)]
pub struct ImageComposer {
    pub request: ImageRequest,
    pub image_url: Option<String>,
    pub in_flight: bool,
    pub run_id: Option<RunId>,
    pub notice: Option<Notice>,
}

/// Which half of the two-phase document flow a worker is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentPhase {
    Topics,
    Document,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentComposer {
    pub request: DocumentRequest,
    pub outline: TopicOutline,
    pub document: Option<String>,
    pub busy: Option<DocumentPhase>,
    pub run_id: Option<RunId>,
    pub notice: Option<Notice>,
}

impl DocumentComposer {
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }
}

/// Endpoint overrides the user can persist. `None` falls back to the
/// built-in endpoint for that kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioSettings {
    pub post_url: Option<String>,
    pub image_url: Option<String>,
    pub document_url: Option<String>,
}

/// In-progress edits on the settings screen. A blank field means "use the
/// built-in endpoint"; nothing is applied until the user saves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub post_url: String,
    pub image_url: String,
    pub document_url: String,
}

impl SettingsDraft {
    pub fn from_settings(settings: &StudioSettings) -> Self {
        Self {
            post_url: settings.post_url.clone().unwrap_or_default(),
            image_url: settings.image_url.clone().unwrap_or_default(),
            document_url: settings.document_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_settings(&self) -> StudioSettings {
        fn non_blank(s: &str) -> Option<String> {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        StudioSettings {
            post_url: non_blank(&self.post_url),
            image_url: non_blank(&self.image_url),
            document_url: non_blank(&self.document_url),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: Route,
    pub post: PostComposer,
    pub image: ImageComposer,
    pub document: DocumentComposer,
    pub settings: StudioSettings,
    pub settings_draft: Option<SettingsDraft>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_draft_fields_fall_back_to_defaults() {
        let draft = SettingsDraft {
            post_url: "  https://example.test/post  ".into(),
            image_url: "   ".into(),
            document_url: String::new(),
        };

        let settings = draft.to_settings();
        assert_eq!(settings.post_url.as_deref(), Some("https://example.test/post"));
        assert_eq!(settings.image_url, None);
        assert_eq!(settings.document_url, None);
    }

    #[test]
    fn draft_round_trips_saved_overrides() {
        let settings = StudioSettings {
            post_url: Some("https://example.test/post".into()),
            image_url: None,
            document_url: None,
        };
        assert_eq!(
            SettingsDraft::from_settings(&settings).to_settings(),
            settings
        );
    }
}
