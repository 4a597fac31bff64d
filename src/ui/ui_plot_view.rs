use std::hash::{Hash, Hasher};

use eframe::egui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoints, Points};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::RateSeries;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, format_rate};
use crate::utils::time_utils;

/// Plot-ready coordinates for one series, derived once per fetch.
#[derive(Clone)]
struct SeriesPlotCache {
    series_hash: u64,
    high: Vec<[f64; 2]>,
    low: Vec<[f64; 2]>,
    open: Vec<[f64; 2]>,
    close: Vec<[f64; 2]>,
    y_min: f64,
}

/// The two stacked OHLC charts.
#[derive(Default)]
pub struct RateChartsView {
    cache: Option<SeriesPlotCache>,
}

fn series_hash(series: &RateSeries) -> u64 {
    let mut hasher = std::hash::DefaultHasher::new();
    series.len().hash(&mut hasher);
    for point in &series.points {
        point.epoch_seconds().hash(&mut hasher);
        point.close.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

fn build_cache(series: &RateSeries) -> SeriesPlotCache {
    let coords = |f: fn(&crate::domain::RatePoint) -> f64| -> Vec<[f64; 2]> {
        series
            .points
            .iter()
            .map(|p| [p.epoch_seconds() as f64, f(p)])
            .collect()
    };

    let y_min = series
        .points
        .iter()
        .map(|p| p.low)
        .fold(f64::INFINITY, f64::min);

    SeriesPlotCache {
        series_hash: series_hash(series),
        high: coords(|p| p.high),
        low: coords(|p| p.low),
        open: coords(|p| p.open),
        close: coords(|p| p.close),
        y_min,
    }
}

impl RateChartsView {
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    pub fn show_charts(&mut self, ui: &mut egui::Ui, series: &RateSeries) {
        let needs_rebuild = match &self.cache {
            Some(cache) => cache.series_hash != series_hash(series),
            None => true,
        };
        if needs_rebuild {
            self.cache = Some(build_cache(series));
        }
        let Some(cache) = &self.cache else {
            return;
        };

        ui.label(colored_subsection_heading(UI_TEXT.high_low_chart_title));
        show_rate_plot(
            ui,
            "high_low_plot",
            (UI_TEXT.high_series, &cache.high, true),
            (UI_TEXT.low_series, &cache.low),
            cache.y_min,
        );

        ui.add_space(PLOT_CONFIG.chart_spacing);

        ui.label(colored_subsection_heading(UI_TEXT.open_close_chart_title));
        show_rate_plot(
            ui,
            "open_close_plot",
            (UI_TEXT.open_series, &cache.open, false),
            (UI_TEXT.close_series, &cache.close),
            cache.y_min,
        );
    }
}

/// One chart with a primary and a secondary line. `filled` shades the area
/// under the primary line down to the series minimum.
fn show_rate_plot(
    ui: &mut egui::Ui,
    plot_id: &str,
    primary: (&str, &[[f64; 2]], bool),
    secondary: (&str, &[[f64; 2]]),
    y_min: f64,
) {
    let legend = Legend::default().position(Corner::LeftTop);

    Plot::new(plot_id)
        .height(PLOT_CONFIG.chart_height)
        .legend(legend)
        .custom_x_axes(vec![create_x_axis()])
        .custom_y_axes(vec![create_y_axis()])
        .label_formatter(|_, value| {
            format!(
                "{}\n{}",
                time_utils::epoch_sec_to_utc(value.x as i64),
                format_rate(value.y)
            )
        })
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let (primary_name, primary_points, filled) = primary;
            let (secondary_name, secondary_points) = secondary;

            let mut primary_line = Line::new(
                primary_name,
                PlotPoints::new(primary_points.to_vec()),
            )
            .color(PLOT_CONFIG.primary_line)
            .width(PLOT_CONFIG.line_width);
            if filled {
                primary_line = primary_line
                    .fill(y_min as f32)
                    .fill_alpha(PLOT_CONFIG.fill_alpha as f32 / 255.0);
            }
            plot_ui.line(primary_line);

            plot_ui.line(
                Line::new(
                    secondary_name,
                    PlotPoints::new(secondary_points.to_vec()),
                )
                .color(PLOT_CONFIG.secondary_line)
                .width(PLOT_CONFIG.line_width),
            );

            // Per-day markers on both lines
            plot_ui.points(
                Points::new(primary_name, PlotPoints::new(primary_points.to_vec()))
                    .color(PLOT_CONFIG.primary_line)
                    .radius(PLOT_CONFIG.marker_radius),
            );
            plot_ui.points(
                Points::new(secondary_name, PlotPoints::new(secondary_points.to_vec()))
                    .color(PLOT_CONFIG.secondary_line)
                    .radius(PLOT_CONFIG.marker_radius),
            );
        });
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.x_axis)
        .formatter(|grid_mark, _range| time_utils::epoch_sec_to_utc(grid_mark.value as i64))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.y_axis)
        .formatter(|grid_mark, _range| format_rate(grid_mark.value))
        .placement(HPlacement::Left)
}
