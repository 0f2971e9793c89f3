use crate::domain::{AppState, DocumentPhase, Notice, StudioSettings};
use crate::exporter;

#[derive(Debug, Clone)]
pub struct PostVm {
    pub busy: bool,
    pub can_generate: bool,
    pub generate_label: &'static str,
    pub result: Option<String>,
    pub can_copy: bool,
    pub can_derive_image: bool,
    pub notice: Option<Notice>,
}

pub fn post_vm(state: &AppState) -> PostVm {
    let busy = state.post.in_flight;
    PostVm {
        busy,
        // Busy is the only gate; a blank task is reported as a validation
        // notice when the button is clicked.
        can_generate: !busy,
        generate_label: if busy { "Generating..." } else { "Generate post" },
        result: state.post.result.clone(),
        can_copy: state.post.result.is_some(),
        can_derive_image: state.post.result.is_some() && !state.image.in_flight,
        notice: state.post.notice.clone(),
    }
}

#[derive(Debug, Clone)]
pub struct ImageVm {
    pub busy: bool,
    pub can_generate: bool,
    pub generate_label: &'static str,
    pub style_hint: &'static str,
    pub ratio_hint: String,
    pub image_url: Option<String>,
    pub can_download: bool,
    pub notice: Option<Notice>,
}

pub fn image_vm(state: &AppState) -> ImageVm {
    let busy = state.image.in_flight;
    let (w, h) = state.image.request.aspect_ratio.dimensions();
    ImageVm {
        busy,
        can_generate: !busy,
        generate_label: if busy { "Generating..." } else { "Generate image" },
        style_hint: state.image.request.style.sub_prompt(),
        ratio_hint: format!("{w}x{h} - {}", state.image.request.aspect_ratio.fits()),
        image_url: state.image.image_url.clone(),
        can_download: state.image.image_url.is_some(),
        notice: state.image.notice.clone(),
    }
}

#[derive(Debug, Clone)]
pub struct DocumentVm {
    pub topics_busy: bool,
    pub document_busy: bool,
    pub can_generate_topics: bool,
    pub can_generate_document: bool,
    pub topics_label: &'static str,
    pub document_label: &'static str,
    pub document: Option<String>,
    pub section_count: usize,
    pub char_count: usize,
    pub suggested_file_name: String,
    pub notice: Option<Notice>,
}

pub fn document_vm(state: &AppState) -> DocumentVm {
    let composer = &state.document;
    let topics_busy = composer.busy == Some(DocumentPhase::Topics);
    let document_busy = composer.busy == Some(DocumentPhase::Document);

    DocumentVm {
        topics_busy,
        document_busy,
        can_generate_topics: !composer.is_busy(),
        can_generate_document: !composer.is_busy(),
        topics_label: if topics_busy {
            "Generating outline..."
        } else {
            "Generate outline"
        },
        document_label: if document_busy {
            "Writing document..."
        } else {
            "Write document"
        },
        document: composer.document.clone(),
        section_count: composer.outline.len(),
        char_count: composer.document.as_deref().map_or(0, |d| d.chars().count()),
        suggested_file_name: exporter::suggested_document_file_name(&composer.request),
        notice: composer.notice.clone(),
    }
}

/// Persisted settings plus the save gate for the settings form.
#[derive(Debug, Clone)]
pub struct SettingsVm {
    pub settings: StudioSettings,
    pub can_save: bool,
}

pub fn settings_vm(state: &AppState) -> SettingsVm {
    SettingsVm {
        settings: state.settings.clone(),
        can_save: !state.post.in_flight && !state.image.in_flight && !state.document.is_busy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_task_leaves_generation_reachable() {
        // The click itself surfaces the validation notice, so the button
        // stays enabled for blank input.
        let state = AppState::default();
        assert!(post_vm(&state).can_generate);
        assert!(image_vm(&state).can_generate);

        let vm = document_vm(&state);
        assert!(vm.can_generate_topics);
        assert!(vm.can_generate_document);
    }

    #[test]
    fn in_flight_generation_gates_the_button() {
        let mut state = AppState::default();
        state.post.request.task = "Напиши про кофе".into();
        state.post.in_flight = true;

        let vm = post_vm(&state);
        assert!(!vm.can_generate);
        assert_eq!(vm.generate_label, "Generating...");
    }

    #[test]
    fn document_phase_gates_both_buttons() {
        let mut state = AppState::default();
        state.document.request.subject = "История Рима".into();

        let vm = document_vm(&state);
        assert!(vm.can_generate_topics);
        assert!(vm.can_generate_document);

        state.document.busy = Some(DocumentPhase::Topics);
        let vm = document_vm(&state);
        assert!(!vm.can_generate_topics);
        assert!(!vm.can_generate_document);
    }

    #[test]
    fn settings_save_waits_for_idle_workers() {
        let mut state = AppState::default();
        assert!(settings_vm(&state).can_save);

        state.image.in_flight = true;
        assert!(!settings_vm(&state).can_save);
    }
}
