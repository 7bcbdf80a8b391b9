use std::convert::Infallible;
use std::str::FromStr;

use crate::models::{Category, Product, ALL};

/// One filter bar choice: the `All` wildcard or a concrete label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label == ALL {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// Like [`Selection::parse`], but taxonomy slugs (`isp`, `cctv`,
    /// `laptops`) resolve to their display names.
    #[must_use]
    pub fn category(label: &str) -> Self {
        Category::parse(label.trim()).map_or_else(|| Self::parse(label), Self::from)
    }

    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => label == value,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(label) => label,
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(label))
    }
}

impl From<Category> for Selection {
    fn from(category: Category) -> Self {
        Self::Only(category.display_name().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Selection,
    pub subcategory: Selection,
}

impl ProductFilter {
    #[must_use]
    pub fn new(category: Selection, subcategory: Selection) -> Self {
        Self { category, subcategory }
    }

    /// Whether the subcategory selection takes part in matching. It only
    /// does while a category with subcategories is selected.
    #[must_use]
    pub fn uses_subcategory(&self) -> bool {
        match &self.category {
            Selection::All => false,
            Selection::Only(label) => Category::parse(label)
                .is_some_and(|category| category.has_subcategories()),
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(&product.category) {
            return false;
        }

        !self.uses_subcategory() || self.subcategory.matches(&product.subcategory)
    }

    /// Matching products in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}
