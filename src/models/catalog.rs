use std::collections::HashMap;

use super::product::Product;
use crate::ordered_map::OrderedMap;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

#[derive(Debug)]
enum ProductIndex {
    Bundled(&'static phf::Map<&'static str, usize>),
    Built(HashMap<String, usize>),
}

impl ProductIndex {
    fn get(&self, id: &str) -> Option<usize> {
        match self {
            Self::Bundled(map) => map.get(id).copied(),
            Self::Built(map) => map.get(id).copied(),
        }
    }
}

/// Ordered, immutable product list with an id lookup.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    index: ProductIndex,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if let Some(first) = index.insert(product.id.clone(), position) {
                return Err(CatalogError::DuplicateId {
                    id: product.id.clone(),
                    first,
                    second: position,
                });
            }
        }

        Ok(Self {
            products,
            index: ProductIndex::Built(index),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Uses an id index generated at build time; the build script already
    /// rejected duplicate ids for this document.
    pub(crate) fn from_json_with_index(
        json: &str,
        index: &'static phf::Map<&'static str, usize>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            products: serde_json::from_str(json)?,
            index: ProductIndex::Bundled(index),
        })
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|position| self.products.get(position))
            .filter(|product| product.id == id)
    }

    /// Distinct categories with their product counts, in catalog order.
    #[must_use]
    pub fn categories(&self) -> OrderedMap<&str, usize> {
        let mut categories = OrderedMap::new();
        for product in &self.products {
            *categories.entry_or_default(product.category.as_str()) += 1;
        }
        categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
