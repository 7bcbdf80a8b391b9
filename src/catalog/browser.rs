use super::filter::{ProductFilter, Selection};
use crate::models::Product;

/// Products shown before the list is expanded.
pub const PAGE_SIZE: usize = 6;

pub const EMPTY_MESSAGE: &str = "No products found in this category.";

/// Selection state of the products section: category, laptop subcategory
/// and whether the full list is expanded.
#[derive(Debug, Clone)]
pub struct CatalogBrowser<'a> {
    products: &'a [Product],
    filter: ProductFilter,
    expanded: bool,
}

impl<'a> CatalogBrowser<'a> {
    #[must_use]
    pub fn new(products: &'a [Product]) -> Self {
        Self {
            products,
            filter: ProductFilter::default(),
            expanded: false,
        }
    }

    /// Selecting a category without subcategories resets the subcategory.
    pub fn select_category(&mut self, category: Selection) -> &mut Self {
        self.filter.category = category;
        if !self.filter.uses_subcategory() {
            self.filter.subcategory = Selection::All;
        }
        self
    }

    pub fn select_subcategory(&mut self, subcategory: Selection) -> &mut Self {
        self.filter.subcategory = subcategory;
        self
    }

    pub fn expand(&mut self) -> &mut Self {
        self.expanded = true;
        self
    }

    pub fn collapse(&mut self) -> &mut Self {
        self.expanded = false;
        self
    }

    #[must_use]
    pub const fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&'a Product> {
        self.filter.apply(self.products)
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&'a Product> {
        let mut products = self.filtered();
        if !self.expanded {
            products.truncate(PAGE_SIZE);
        }
        products
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.filtered().len() > PAGE_SIZE
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.products.iter().any(|product| self.filter.matches(product))
    }
}
