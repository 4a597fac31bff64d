use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase();
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Creates a colored sub-section heading using the configured label color
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Formats an exchange rate for axis ticks and the status strip.
/// - Large (>1000): 2 decimals (95123.50)
/// - Medium (1-1000): 4 decimals (83.4829)
/// - Small (<1): 6 decimals (0.012031)
pub fn format_rate(rate: f64) -> String {
    let magnitude = rate.abs();
    if magnitude >= 1000.0 {
        format!("{rate:.2}")
    } else if magnitude >= 1.0 {
        format!("{rate:.4}")
    } else {
        format!("{rate:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_precision_scales_with_magnitude() {
        assert_eq!(format_rate(95123.5), "95123.50");
        assert_eq!(format_rate(83.482_91), "83.4829");
        assert_eq!(format_rate(0.012_030_9), "0.012031");
    }
}
