pub const APP_COMPANY: &str = env!("APP_COMPANY");
pub const APP_SITE_URL: &str = env!("APP_SITE_URL");
pub const APP_WHATSAPP_NUMBER: &str = env!("APP_WHATSAPP_NUMBER");
pub const APP_EMAIL: &str = env!("APP_EMAIL");
pub const APP_PRODUCT_COUNT: &str = env!("APP_PRODUCT_COUNT");

pub const PRODUCTS_JSON: &str = include_str!("../data/products.json");
pub const BLOGS_JSON: &str = include_str!("../data/blogs.json");
pub const TESTIMONIALS_JSON: &str = include_str!("../data/testimonials.json");

pub static PRODUCT_INDEX: phf::Map<&'static str, usize> =
    include!(concat!(env!("OUT_DIR"), "/product_index.rs"));

/// Where `import-products` writes unless told otherwise; the same file is
/// bundled into the binary on the next build.
pub const DEFAULT_CATALOG_OUTPUT: &str = "data/products.json";
pub const DEFAULT_IMPORT_INPUT: &str = "./products.xlsx";
