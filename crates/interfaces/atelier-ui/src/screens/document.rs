use crate::components::forms::{enum_select, multiline_field, text_field};
use crate::theme::COL_TEXT_DIM;
use crate::utils::{cmd_button, notice_banner, section_label};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

use atelier_app_core::{viewmodel::document_vm, AtelierApplication};
use atelier_core::{DocType, TopicField};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut AtelierApplication) {
    let vm = document_vm(&app.state);
    let mut topics_clicked = false;
    let mut document_clicked = false;
    let mut pages_edit: Option<i64> = None;
    let mut outline_edits: Vec<(usize, TopicField, String)> = Vec::new();
    let mut save_target: Option<std::path::PathBuf> = None;

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
        tui.ui(|ui| section_label(ui, "DOCUMENT COMPOSER"));

        {
            let req = &mut app.state.document.request;

            enum_select(
                &mut *tui,
                "TYPE",
                "document-type",
                &DocType::ALL,
                &mut req.doc_type,
                DocType::label,
            );

            text_field(&mut *tui, "SUBJECT", &mut req.subject, "Document subject");
        }

        // Slider and numeric entry drive the same clamped value.
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(6.0),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .add(|tui| {
            tui.ui(|ui| section_label(ui, "PAGES"));
            tui.ui(|ui| {
                let mut pages = app.state.document.request.pages as i64;
                let slider = ui.add(egui::Slider::new(
                    &mut pages,
                    (atelier_config::MIN_PAGES as i64)..=(atelier_config::MAX_PAGES as i64),
                ));
                let drag = ui.add(egui::DragValue::new(&mut pages));
                if slider.changed() || drag.changed() {
                    pages_edit = Some(pages);
                }
            });
        });

        multiline_field(
            &mut *tui,
            "NOTES",
            &mut app.state.document.request.additional_info,
            "Extra instructions (optional)",
            2,
        );

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            if tui
                .ui(|ui| cmd_button(ui, vm.topics_label, "primary", vm.can_generate_topics))
                .clicked()
            {
                topics_clicked = true;
            }
            if tui
                .ui(|ui| cmd_button(ui, vm.document_label, "primary", vm.can_generate_document))
                .clicked()
            {
                document_clicked = true;
            }
            if vm.topics_busy || vm.document_busy {
                tui.ui_add(egui::Spinner::new());
            }
        });

        if let Some(notice) = &vm.notice {
            tui.ui(|ui| notice_banner(ui, notice));
        }

        let outline = &app.state.document.outline;
        if !outline.is_empty() {
            tui.ui(|ui| section_label(ui, "OUTLINE"));
            for (index, entry) in outline.entries().iter().enumerate() {
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    gap: length(2.0),
                    size: taffy::Size {
                        width: percent(1.),
                        height: egui_taffy::taffy::prelude::auto(),
                    },
                    ..Default::default()
                })
                .add(|tui| {
                    tui.ui(|ui| {
                        let mut title = entry.title.clone();
                        if ui
                            .add(
                                egui::TextEdit::singleline(&mut title)
                                    .desired_width(f32::INFINITY)
                                    .font(egui::FontId::monospace(12.0)),
                            )
                            .changed()
                        {
                            outline_edits.push((index, TopicField::Title, title));
                        }
                    });
                    tui.ui(|ui| {
                        let mut description = entry.description.clone();
                        if ui
                            .add(
                                egui::TextEdit::multiline(&mut description)
                                    .desired_rows(2)
                                    .desired_width(f32::INFINITY)
                                    .font(egui::FontId::monospace(11.0)),
                            )
                            .changed()
                        {
                            outline_edits.push((index, TopicField::Description, description));
                        }
                    });
                });
            }
        }

        if let Some(text) = &vm.document {
            tui.ui(|ui| section_label(ui, "RESULT"));
            tui.ui(|ui| {
                ui.colored_label(
                    COL_TEXT_DIM,
                    format!(
                        "{} sections, {} characters",
                        vm.section_count, vm.char_count
                    ),
                );
            });
            tui.ui(|ui| {
                let mut readout = text.clone();
                ui.add(
                    egui::TextEdit::multiline(&mut readout)
                        .interactive(false)
                        .desired_width(f32::INFINITY)
                        .desired_rows(12)
                        .font(egui::FontId::monospace(12.0)),
                );
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.ui(|ui| {
                    if cmd_button(ui, "COPY", "outline", true).clicked() {
                        ui.ctx().copy_text(text.clone());
                    }
                });
                if tui
                    .ui(|ui| cmd_button(ui, "SAVE", "outline", true))
                    .clicked()
                {
                    save_target = rfd::FileDialog::new()
                        .set_file_name(vm.suggested_file_name.clone())
                        .save_file();
                }
            });
        }
    });

    for (index, field, value) in outline_edits {
        app.update_topic(index, field, value);
    }
    if let Some(pages) = pages_edit {
        app.set_pages(pages);
    }
    if topics_clicked {
        let _ = app.generate_topics();
    }
    if document_clicked {
        let _ = app.generate_document();
    }
    if let Some(path) = save_target {
        let _ = app.save_document_to(&path);
    }
}
