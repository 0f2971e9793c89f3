use crate::components::forms::text_field;
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

use atelier_app_core::{
    viewmodel::settings_vm, AtelierApplication, Route, SettingsDraft, StudioSettings,
};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut AtelierApplication) {
    let vm = settings_vm(&app.state);
    let mut save_settings: Option<StudioSettings> = None;
    let mut cancel_clicked = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(8.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, "SETTINGS"));

        {
            let draft = app
                .state
                .settings_draft
                .get_or_insert_with(|| SettingsDraft::from_settings(&vm.settings));

            tui.ui(|ui| section_label(ui, "ENDPOINTS"));
            tui.ui(|ui| {
                ui.label(
                    egui::RichText::new("Leave a field blank to use the built-in endpoint.")
                        .size(10.0),
                );
            });

            text_field(
                &mut *tui,
                "POST URL",
                &mut draft.post_url,
                atelier_config::DEFAULT_POST_ENDPOINT,
            );
            text_field(
                &mut *tui,
                "IMAGE URL",
                &mut draft.image_url,
                atelier_config::DEFAULT_IMAGE_ENDPOINT,
            );
            text_field(
                &mut *tui,
                "DOCUMENT URL",
                &mut draft.document_url,
                atelier_config::DEFAULT_DOCUMENT_ENDPOINT,
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                if tui
                    .ui(|ui| cmd_button(ui, "SAVE", "primary", vm.can_save))
                    .clicked()
                {
                    save_settings = Some(draft.to_settings());
                }
                if tui
                    .ui(|ui| cmd_button(ui, "CANCEL", "outline", true))
                    .clicked()
                {
                    cancel_clicked = true;
                }
            });
        }
    });

    if cancel_clicked {
        app.navigate(Route::Post);
    } else if let Some(settings) = save_settings.take() {
        if app.update_settings(settings).is_ok() {
            app.navigate(Route::Post);
        }
    }
}
