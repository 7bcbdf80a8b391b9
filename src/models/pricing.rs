use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Multi-duration price grid attached to broadband style products.
///
/// Each row carries one price per duration, keyed by the kebab-case form of
/// the column label (`"3 Months"` is stored under `"3-months"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTable {
    pub columns: Vec<String>,
    pub rows: Vec<PricingRow>,
    #[serde(default)]
    pub duration_images: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRow {
    pub mbps: u32,
    #[serde(flatten)]
    pub prices: BTreeMap<String, f64>,
}

#[must_use]
pub fn duration_key(label: &str) -> String {
    heck::AsKebabCase(label).to_string()
}

impl PricingTable {
    /// Column labels paired with their duration keys, in column order.
    pub fn durations(&self) -> impl Iterator<Item = (&str, String)> {
        self.columns
            .iter()
            .map(|label| (label.as_str(), duration_key(label)))
    }

    #[must_use]
    pub fn image_for(&self, key: &str) -> Option<&str> {
        self.duration_images.get(key).map(String::as_str)
    }
}

impl PricingRow {
    #[must_use]
    pub fn price(&self, key: &str) -> Option<f64> {
        self.prices.get(key).copied()
    }
}
