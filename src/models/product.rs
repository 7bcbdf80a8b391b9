use serde::{Deserialize, Serialize, Serializer};

use super::pricing::PricingTable;

pub const DEFAULT_CURRENCY: &str = "INR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_amount"
    )]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub short_description: String,
    pub image_url: String,
    pub sku: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_table: Option<PricingTable>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub image_missing: bool,
}

impl Product {
    #[must_use]
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    #[must_use]
    pub fn features(&self) -> &[String] {
        self.features.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Renders whole amounts without a fractional part (`499`, not `499.0`).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_amount(amount: f64) -> String {
    if is_whole(amount) {
        format!("{}", amount as i64)
    } else {
        format!("{amount:.2}")
    }
}

fn is_whole(amount: f64) -> bool {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;
    amount.fract() == 0.0 && amount.abs() < MAX_SAFE_INTEGER
}

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_amount<S>(amount: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *amount {
        Some(value) if is_whole(value) => serializer.serialize_i64(value as i64),
        Some(value) => serializer.serialize_f64(value),
        None => serializer.serialize_none(),
    }
}
