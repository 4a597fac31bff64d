use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Map of currency code to display name, as served by the backend.
/// BTreeMap keeps the selector lists in stable alphabetical order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCatalog {
    entries: BTreeMap<String, String>,
}

impl CurrencyCatalog {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Selector label, e.g. "United States Dollar [USD]".
    pub fn display_label(&self, code: &str) -> String {
        match self.entries.get(code) {
            Some(name) => format!("{name} [{code}]"),
            None => code.to_string(),
        }
    }

    /// Options for one side of the pair, excluding whatever the other side
    /// currently has selected.
    pub fn options_excluding<'a>(&'a self, other: &str) -> Vec<(&'a str, &'a str)> {
        self.entries
            .iter()
            .filter(|(code, _)| code.as_str() != other)
            .map(|(code, name)| (code.as_str(), name.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CurrencyCatalog {
        let entries = BTreeMap::from([
            ("EUR".to_string(), "Euro".to_string()),
            ("INR".to_string(), "Indian Rupee".to_string()),
            ("USD".to_string(), "United States Dollar".to_string()),
        ]);
        CurrencyCatalog { entries }
    }

    #[test]
    fn labels_combine_name_and_code() {
        let catalog = sample();
        assert_eq!(catalog.display_label("USD"), "United States Dollar [USD]");
        // Unknown codes fall back to the bare code
        assert_eq!(catalog.display_label("XXX"), "XXX");
    }

    #[test]
    fn each_side_excludes_the_other_selection() {
        let catalog = sample();
        let codes: Vec<&str> = catalog
            .options_excluding("USD")
            .into_iter()
            .map(|(code, _)| code)
            .collect();
        assert_eq!(codes, vec!["EUR", "INR"]);
    }

    #[test]
    fn deserializes_from_the_backend_object_shape() {
        let json = r#"{"USD":"United States Dollar","INR":"Indian Rupee"}"#;
        let catalog: CurrencyCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("USD"));
        assert!(catalog.contains("INR"));
    }

    #[test]
    fn options_are_sorted_by_code() {
        let catalog = sample();
        let codes: Vec<&str> = catalog
            .options_excluding("")
            .into_iter()
            .map(|(code, _)| code)
            .collect();
        assert_eq!(codes, vec!["EUR", "INR", "USD"]);
    }
}
