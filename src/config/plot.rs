use eframe::egui::Color32;

/// Colors and geometry for the rate charts.
pub struct PlotConfig {
    /// High / open line (cyan).
    pub primary_line: Color32,
    /// Low / close line (blue).
    pub secondary_line: Color32,
    pub line_width: f32,
    pub marker_radius: f32,
    /// Alpha applied to the fill under the primary line.
    pub fill_alpha: u8,
    pub chart_height: f32,
    /// Pixel gap kept between the two stacked charts.
    pub chart_spacing: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    primary_line: Color32::from_rgb(0x06, 0xB6, 0xD4),
    secondary_line: Color32::from_rgb(0x3B, 0x82, 0xF6),
    line_width: 2.0,
    marker_radius: 2.5,
    fill_alpha: 28,
    chart_height: 300.0,
    chart_spacing: 16.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_palette_is_cyan_and_blue() {
        assert_eq!(PLOT_CONFIG.primary_line, Color32::from_rgb(6, 182, 212));
        assert_eq!(PLOT_CONFIG.secondary_line, Color32::from_rgb(59, 130, 246));
    }
}
