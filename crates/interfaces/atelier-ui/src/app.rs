use crate::components::header;
use crate::screens::{document, image, post, settings};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use atelier_app_core::{AtelierApplication, Route};

pub struct AtelierUiApp {
    core: AtelierApplication,
}

impl AtelierUiApp {
    pub fn new(core: AtelierApplication) -> Self {
        Self { core }
    }
}

impl eframe::App for AtelierUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.handle_events();

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::new(3).unwrap();
        });
        ctx.style_mut(|style| {
            // Width-independent text measurement keeps egui_taffy's
            // multi-pass layout stable.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(28.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp =
                            header::draw(tui, self.core.state.route, self.core.is_busy());
                        if let Some(route) = resp.navigate_to {
                            self.core.navigate(route);
                        }
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        padding: length(12.0),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .add(|tui| match self.core.state.route {
                        Route::Post => post::draw(tui, &mut self.core),
                        Route::Image => image::draw(tui, &mut self.core),
                        Route::Document => document::draw(tui, &mut self.core),
                        Route::Settings => settings::draw(tui, &mut self.core),
                    });
                });
        });

        if self.core.is_busy() {
            ctx.request_repaint();
        }
    }
}
