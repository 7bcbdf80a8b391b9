mod blog;
mod catalog;
mod category;
mod faq;
mod pricing;
mod product;
mod testimonial;

pub use self::blog::BlogPost;
pub use self::catalog::{Catalog, CatalogError};
pub use self::category::{Category, ALL, LAPTOP_SUBCATEGORIES};
pub use self::faq::{Faq, FAQS};
pub use self::pricing::{duration_key, PricingRow, PricingTable};
pub use self::product::{format_amount, Product, DEFAULT_CURRENCY};
pub use self::testimonial::{Testimonial, MAX_RATING};
