mod browser;
mod filter;
mod plans;

pub use self::browser::{CatalogBrowser, EMPTY_MESSAGE, PAGE_SIZE};
pub use self::filter::{ProductFilter, Selection};
pub use self::plans::{expand_plan_cards, plan_cards};
