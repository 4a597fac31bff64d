use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance. Dark palette matched to the charts.
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(209, 213, 219),
        heading: Color32::from_rgb(0x06, 0xB6, 0xD4),
        subsection_heading: Color32::from_rgb(0x3B, 0x82, 0xF6),
        central_panel: Color32::from_rgb(0x11, 0x18, 0x27),
        side_panel: Color32::from_rgb(0x1F, 0x29, 0x37),
    },
};
