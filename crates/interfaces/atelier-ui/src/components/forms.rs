use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

fn field_column_style() -> taffy::Style {
    taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    }
}

pub fn text_field<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, value: &mut String, hint: &str) {
    tui.style(field_column_style()).add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui_add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY)
                .font(egui::FontId::monospace(12.0)),
        );
    });
}

pub fn multiline_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    hint: &str,
    rows: usize,
) {
    tui.style(field_column_style()).add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui_add(
            egui::TextEdit::multiline(value)
                .hint_text(hint)
                .desired_rows(rows)
                .desired_width(f32::INFINITY)
                .font(egui::FontId::monospace(12.0)),
        );
    });
}

/// Combo over a fixed enum variant list. Returns true when the value changed.
pub fn enum_select<'a, T: Copy + PartialEq>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    id: &str,
    options: &[T],
    value: &mut T,
    display: impl Fn(T) -> &'static str,
) -> bool {
    let mut changed = false;
    tui.style(field_column_style()).add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui(|ui| {
            egui::ComboBox::from_id_salt(id.to_owned())
                .selected_text(display(*value))
                .width(ui.available_width().min(260.0))
                .show_ui(ui, |ui| {
                    for option in options {
                        changed |= ui
                            .selectable_value(value, *option, display(*option))
                            .changed();
                    }
                });
        });
    });
    changed
}
