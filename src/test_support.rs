use crate::models::Product;

pub fn product(id: &str, category: &str, subcategory: &str) -> Product {
    Product {
        id: id.to_string(),
        name: id.to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        price: None,
        currency: None,
        short_description: String::new(),
        image_url: String::new(),
        sku: id.to_uppercase(),
        stock: 1,
        url_slug: None,
        features: None,
        pricing_table: None,
        image_missing: false,
    }
}
