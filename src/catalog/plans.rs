use crate::models::{format_amount, PricingTable, Product};

/// Slices a product's pricing table into one card per duration column.
///
/// Returns an empty list for products without a table. A column in which no
/// row has a price produces no card.
#[must_use]
pub fn plan_cards(product: &Product) -> Vec<Product> {
    let Some(table) = &product.pricing_table else {
        return Vec::new();
    };

    table
        .durations()
        .filter_map(|(label, key)| plan_card(product, table, label, &key))
        .collect()
}

fn plan_card(product: &Product, table: &PricingTable, label: &str, key: &str) -> Option<Product> {
    let priced_rows: Vec<_> = table
        .rows
        .iter()
        .filter_map(|row| row.price(key).map(|price| (row.mbps, price)))
        .collect();

    let lowest = priced_rows
        .iter()
        .map(|&(_, price)| price)
        .reduce(f64::min)?;

    let currency = product.currency();
    let features = priced_rows
        .iter()
        .map(|&(mbps, price)| format!("{mbps} Mbps - {currency} {}", format_amount(price)))
        .collect();

    let image_url = table
        .image_for(key)
        .map_or_else(|| product.image_url.clone(), str::to_string);

    Some(Product {
        id: format!("{}-{key}", product.id),
        name: format!("{} - {label}", product.name),
        subcategory: label.to_string(),
        price: Some(lowest),
        currency: Some(currency.to_string()),
        image_url,
        features: Some(features),
        pricing_table: None,
        url_slug: product.url_slug.as_ref().map(|slug| format!("{slug}-{key}")),
        ..product.clone()
    })
}

/// Replaces every product carrying a pricing table with its plan cards,
/// keeping catalog order. Products whose table yields no card stay as is.
#[must_use]
pub fn expand_plan_cards(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .flat_map(|product| {
            let cards = plan_cards(product);
            if cards.is_empty() {
                vec![product.clone()]
            } else {
                cards
            }
        })
        .collect()
}
