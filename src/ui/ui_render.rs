use eframe::egui::{CentralPanel, Context, ScrollArea, SidePanel, TopBottomPanel};

use crate::ui::app::RateScopeApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{FilterPanel, Panel};
use crate::ui::utils::{colored_heading, spaced_separator};
use crate::utils::time_utils;

impl RateScopeApp {
    /// Full-window blocking screen shown until the currency catalog loads.
    pub(super) fn render_loading_screen(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(colored_heading(UI_TEXT.app_title));
                    ui.add_space(20.0);
                    ui.spinner();
                    ui.add_space(10.0);
                    ui.label(UI_TEXT.loading_catalog);
                    if self.catalog_load.attempts > 1 {
                        ui.label_subdued(format!(
                            "Attempt {} (retrying every second)",
                            self.catalog_load.attempts
                        ));
                    }
                    if let Some(error) = &self.catalog_load.last_error {
                        ui.add_space(10.0);
                        ui.label_error(error);
                    }
                });
            });
        });
    }

    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::left("filter_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                let events = ScrollArea::vertical()
                    .show(ui, |ui| {
                        let mut panel = FilterPanel::new(&self.filter, &self.catalog);
                        panel.render(ui)
                    })
                    .inner;

                for event in events {
                    self.handle_filter_event(event);
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let base_url = self
                    .data_source
                    .as_ref()
                    .map(|source| source.base_url().to_string())
                    .unwrap_or_default();
                ui.metric(UI_TEXT.status_backend, &base_url, UI_CONFIG.colors.label);

                ui.separator();
                ui.metric(
                    UI_TEXT.status_currencies,
                    &self.catalog.len().to_string(),
                    UI_CONFIG.colors.label,
                );

                ui.separator();
                ui.metric(
                    "Selection",
                    &format!(
                        "{} -> {} ({})",
                        self.filter.from_currency, self.filter.to_currency, self.filter.period
                    ),
                    UI_CONFIG.colors.heading,
                );

                ui.separator();
                if self.is_series_pending() {
                    ui.spinner();
                    ui.label_subdued(UI_TEXT.loading_series);
                } else if let Some(error) = &self.last_series_error {
                    ui.label_error(error.to_string());
                } else if let Some((start, end)) = self.series.date_bounds() {
                    ui.metric(
                        UI_TEXT.status_points,
                        &self.series.len().to_string(),
                        UI_CONFIG.colors.label,
                    );
                    ui.label_subdued(time_utils::date_span_label(&start, &end));
                }
            });
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading(colored_heading(UI_TEXT.app_title));
            spaced_separator(ui);

            if self.filter.from_currency == self.filter.to_currency {
                ui.label_warning(UI_TEXT.identical_pair_notice);
                return;
            }

            if self.is_series_pending() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.label(UI_TEXT.loading_series);
                });
                return;
            }

            if let Some(error) = &self.last_series_error {
                ui.label_error(format!("Could not load rates: {error}"));
                ui.add_space(4.0);
            }

            if self.series.is_empty() {
                ui.label_subdued(UI_TEXT.empty_series_notice);
                return;
            }

            ScrollArea::vertical().show(ui, |ui| {
                self.charts.show_charts(ui, &self.series);
            });
        });

        // Keep the spinner animating while a fetch is pending.
        if self.is_series_pending() {
            ctx.request_repaint();
        }
    }
}
