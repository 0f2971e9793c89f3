use crate::components::forms::{enum_select, multiline_field};
use crate::theme::COL_TEXT_DIM;
use crate::utils::{cmd_button, notice_banner, section_label};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

use atelier_app_core::{exporter, viewmodel::image_vm, AtelierApplication};
use atelier_core::{AspectRatio, ImageStyle};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut AtelierApplication) {
    let vm = image_vm(&app.state);
    let mut generate_clicked = false;
    let mut download_target: Option<std::path::PathBuf> = None;

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
        tui.ui(|ui| section_label(ui, "IMAGE COMPOSER"));

        {
            let req = &mut app.state.image.request;

            multiline_field(
                &mut *tui,
                "TASK",
                &mut req.task,
                "Describe the image to create",
                3,
            );

            enum_select(
                &mut *tui,
                "STYLE",
                "image-style",
                &ImageStyle::ALL,
                &mut req.style,
                ImageStyle::label,
            );
        }
        tui.ui(|ui| {
            ui.colored_label(COL_TEXT_DIM, vm.style_hint);
        });

        enum_select(
            &mut *tui,
            "ASPECT RATIO",
            "image-ratio",
            &AspectRatio::ALL,
            &mut app.state.image.request.aspect_ratio,
            AspectRatio::label,
        );
        tui.ui(|ui| {
            ui.colored_label(COL_TEXT_DIM, &vm.ratio_hint);
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            if tui
                .ui(|ui| cmd_button(ui, vm.generate_label, "primary", vm.can_generate))
                .clicked()
            {
                generate_clicked = true;
            }
            if vm.busy {
                tui.ui_add(egui::Spinner::new());
            }
        });

        if let Some(notice) = &vm.notice {
            tui.ui(|ui| notice_banner(ui, notice));
        }

        match &vm.image_url {
            Some(url) => {
                tui.ui(|ui| section_label(ui, "RESULT"));
                tui.ui(|ui| {
                    let mut readout = url.clone();
                    ui.add(
                        egui::TextEdit::singleline(&mut readout)
                            .interactive(false)
                            .desired_width(f32::INFINITY)
                            .font(egui::FontId::monospace(11.0)),
                    );
                });

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    gap: length(8.0),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.ui(|ui| {
                        if cmd_button(ui, "COPY URL", "outline", true).clicked() {
                            ui.ctx().copy_text(url.clone());
                        }
                    });
                    if tui
                        .ui(|ui| cmd_button(ui, "DOWNLOAD", "outline", vm.can_download))
                        .clicked()
                    {
                        download_target = rfd::FileDialog::new()
                            .set_file_name(exporter::suggested_image_file_name())
                            .save_file();
                    }
                });
            }
            None => {
                tui.ui(|ui| {
                    ui.colored_label(COL_TEXT_DIM, "NO IMAGE YET");
                });
            }
        }
    });

    if generate_clicked {
        let _ = app.generate_image();
    }
    if let Some(path) = download_target {
        let _ = app.save_image_to(path);
    }
}
