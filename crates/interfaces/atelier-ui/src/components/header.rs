use crate::theme::*;
use crate::utils::cmd_button;
use atelier_app_core::Route;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct HeaderResponse {
    pub navigate_to: Option<Route>,
}

const TABS: [(Route, &str); 4] = [
    (Route::Post, "POST"),
    (Route::Image, "IMAGE"),
    (Route::Document, "DOCUMENT"),
    (Route::Settings, "SETTINGS"),
];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, current: Route, is_busy: bool) -> HeaderResponse {
    let mut navigate_to = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("ATELIER")
                        .family(egui::FontFamily::Monospace)
                        .size(12.0)
                        .extra_letter_spacing(2.0)
                        .strong()
                        .color(COL_TEXT),
                );

                for (route, label) in TABS {
                    let variant = if route == current { "primary" } else { "outline" };
                    if tui.ui(|ui| cmd_button(ui, label, variant, true)).clicked() {
                        navigate_to = Some(route);
                    }
                }
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if is_busy {
                    tui.ui_add(egui::Spinner::new());
                    tui.label(
                        egui::RichText::new("STATUS: GENERATING")
                            .color(COL_WARN)
                            .size(10.0),
                    );
                } else {
                    tui.label(
                        egui::RichText::new("STATUS: READY")
                            .color(COL_ACCENT)
                            .size(10.0),
                    );
                }
            });
        },
    );

    HeaderResponse { navigate_to }
}
