use eframe::egui::{ComboBox, Ui};
use strum::IntoEnumIterator;

use crate::domain::{CurrencyCatalog, Period, RateFilter};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// One edit made in the filter panel.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    FromCurrency(String),
    ToCurrency(String),
    Period(Period),
}

/// Panel with the currency pair and period selectors.
pub struct FilterPanel<'a> {
    filter: &'a RateFilter,
    catalog: &'a CurrencyCatalog,
}

impl<'a> FilterPanel<'a> {
    pub fn new(filter: &'a RateFilter, catalog: &'a CurrencyCatalog) -> Self {
        Self { filter, catalog }
    }

    /// One currency selector. The options exclude the other side's current
    /// selection so the pair can never be collapsed to a single currency.
    fn currency_selector(
        &self,
        ui: &mut Ui,
        id_salt: &str,
        label: &str,
        selected: &str,
        excluded: &str,
    ) -> Option<String> {
        let mut picked = None;

        ui.label(colored_subsection_heading(label));
        ComboBox::from_id_salt(id_salt)
            .width(ui.available_width())
            .selected_text(self.catalog.display_label(selected))
            .show_ui(ui, |ui| {
                for (code, name) in self.catalog.options_excluding(excluded) {
                    let label = format!("{name} [{code}]");
                    if ui.selectable_label(code == selected, label).clicked() {
                        picked = Some(code.to_string());
                    }
                }
            });
        ui.add_space(8.0);

        picked
    }

    fn period_selector(&self, ui: &mut Ui) -> Option<Period> {
        let mut picked = None;

        ui.label(colored_subsection_heading(UI_TEXT.period_label));
        ComboBox::from_id_salt("period_selector")
            .width(ui.available_width())
            .selected_text(self.filter.period.label())
            .show_ui(ui, |ui| {
                for period in Period::iter() {
                    let is_selected = period == self.filter.period;
                    if ui.selectable_label(is_selected, period.label()).clicked() {
                        picked = Some(period);
                    }
                }
            });

        picked
    }
}

impl Panel for FilterPanel<'_> {
    type Event = FilterEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<FilterEvent> {
        let mut events = Vec::new();

        section_heading(ui, UI_TEXT.filters_heading);

        if let Some(code) = self.currency_selector(
            ui,
            "from_currency_selector",
            UI_TEXT.from_label,
            &self.filter.from_currency,
            &self.filter.to_currency,
        ) {
            events.push(FilterEvent::FromCurrency(code));
        }

        if let Some(code) = self.currency_selector(
            ui,
            "to_currency_selector",
            UI_TEXT.to_label,
            &self.filter.to_currency,
            &self.filter.from_currency,
        ) {
            events.push(FilterEvent::ToCurrency(code));
        }

        if let Some(period) = self.period_selector(ui) {
            events.push(FilterEvent::Period(period));
        }

        events
    }
}
