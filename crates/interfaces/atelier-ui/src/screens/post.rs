use crate::components::forms::{enum_select, multiline_field};
use crate::utils::{cmd_button, notice_banner, section_label};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

use atelier_app_core::{viewmodel::post_vm, AtelierApplication};
use atelier_core::{EmojiDensity, Goal, Platform, PostLength, Tone};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut AtelierApplication) {
    let vm = post_vm(&app.state);
    let mut generate_clicked = false;
    let mut derive_clicked = false;

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
        tui.ui(|ui| section_label(ui, "POST COMPOSER"));

        {
            let req = &mut app.state.post.request;

            enum_select(
                &mut *tui,
                "PLATFORM",
                "post-platform",
                &Platform::ALL,
                &mut req.platform,
                Platform::label,
            );

            multiline_field(
                &mut *tui,
                "TASK",
                &mut req.task,
                "What should the post say?",
                3,
            );

            enum_select(
                &mut *tui,
                "TONE",
                "post-tone",
                &Tone::ALL,
                &mut req.tone,
                Tone::label,
            );
            enum_select(
                &mut *tui,
                "GOAL",
                "post-goal",
                &Goal::ALL,
                &mut req.goal,
                Goal::label,
            );
            enum_select(
                &mut *tui,
                "LENGTH",
                "post-length",
                &PostLength::ALL,
                &mut req.length,
                PostLength::label,
            );
            enum_select(
                &mut *tui,
                "EMOJIS",
                "post-emojis",
                &EmojiDensity::ALL,
                &mut req.emojis,
                EmojiDensity::label,
            );
        }

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

        if let Some(result) = &vm.result {
            tui.ui(|ui| section_label(ui, "RESULT"));
            tui.ui(|ui| {
                let mut readout = result.clone();
                ui.add(
                    egui::TextEdit::multiline(&mut readout)
                        .interactive(false)
                        .desired_width(f32::INFINITY)
                        .desired_rows(8)
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
                    if cmd_button(ui, "COPY", "outline", vm.can_copy).clicked() {
                        ui.ctx().copy_text(result.clone());
                    }
                });
                if tui
                    .ui(|ui| cmd_button(ui, "ILLUSTRATE", "outline", vm.can_derive_image))
                    .clicked()
                {
                    derive_clicked = true;
                }
            });
        }
    });

    if generate_clicked {
        let _ = app.generate_post();
    }
    if derive_clicked {
        app.derive_image_from_post();
    }
}
