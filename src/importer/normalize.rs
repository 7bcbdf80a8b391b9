use phf::phf_map;

use super::columns::{ColumnMap, Field};
use super::sheet::{Cell, Sheet};
use crate::models::{Product, DEFAULT_CURRENCY};
use crate::slug::{dash_words, slugify};

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_SUBCATEGORY: &str = "Standard";

static PLACEHOLDER_IMAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "isp" => "https://images.unsplash.com/photo-1606904825846-647eb07f5be2?w=400&h=300&fit=crop",
    "cctv" => "https://images.unsplash.com/photo-1557324232-b8917d3c3dcb?w=400&h=300&fit=crop",
    "laptops" => "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400&h=300&fit=crop",
};

pub const GENERIC_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop";

/// Placeholder image keyed by the lowercased category name.
#[must_use]
pub fn placeholder_image(category: &str) -> &'static str {
    PLACEHOLDER_IMAGES
        .get(category.to_lowercase().as_str())
        .copied()
        .unwrap_or(GENERIC_PLACEHOLDER_IMAGE)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("row {row}: {field:?} value '{value}' is not a number")]
    NotANumber {
        row: usize,
        field: Field,
        value: String,
    },
}

/// Outcome for one data row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Product(Box<Product>),
    MissingName,
}

/// Turns raw spreadsheet rows into catalog products.
pub struct RowNormalizer<'a> {
    sheet: &'a Sheet,
    columns: ColumnMap,
}

impl<'a> RowNormalizer<'a> {
    #[must_use]
    pub fn new(sheet: &'a Sheet) -> Self {
        Self {
            sheet,
            columns: ColumnMap::resolve(&sheet.headers),
        }
    }

    fn cell(&self, index: usize, field: Field) -> Option<&Cell> {
        self.columns
            .column(field)
            .map(|column| self.sheet.cell(index, column))
    }

    fn text(&self, index: usize, field: Field) -> Option<String> {
        self.cell(index, field).and_then(Cell::text)
    }

    fn number(&self, index: usize, field: Field) -> Result<Option<f64>, RowError> {
        self.cell(index, field)
            .map_or(Ok(None), Cell::number)
            .map_err(|value| RowError::NotANumber {
                row: spreadsheet_row(index),
                field,
                value,
            })
    }

    fn integer(&self, index: usize, field: Field) -> Result<Option<i64>, RowError> {
        self.cell(index, field)
            .map_or(Ok(None), Cell::integer)
            .map_err(|value| RowError::NotANumber {
                row: spreadsheet_row(index),
                field,
                value,
            })
    }

    /// `index` is the zero-based data row; ids and default SKUs derive from it.
    pub fn normalize(&self, index: usize) -> Result<RowOutcome, RowError> {
        let Some(name) = self.text(index, Field::Name) else {
            return Ok(RowOutcome::MissingName);
        };

        let category = self
            .text(index, Field::Category)
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let subcategory = self
            .text(index, Field::Subcategory)
            .unwrap_or_else(|| DEFAULT_SUBCATEGORY.to_string());
        let price = self.number(index, Field::Price)?.unwrap_or(0.0);
        let currency = self
            .text(index, Field::Currency)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let short_description = self
            .text(index, Field::Description)
            .unwrap_or_else(|| format!("{name} - High quality product from {category} category."));
        let sku = self
            .text(index, Field::Sku)
            .unwrap_or_else(|| format!("SKU-{}", index + 1));
        let stock = self.stock(index)?;

        let (image_url, image_missing) = match self.text(index, Field::ImageUrl) {
            Some(url) => (url, false),
            None => (placeholder_image(&category).to_string(), true),
        };

        let url_slug = slugify(&name);
        let id = format!("{}-{url_slug}-{index}", dash_words(&category));

        Ok(RowOutcome::Product(Box::new(Product {
            id,
            name,
            category,
            subcategory,
            price: Some(price),
            currency: Some(currency),
            short_description,
            image_url,
            sku,
            stock,
            url_slug: Some(url_slug),
            features: None,
            pricing_table: None,
            image_missing,
        })))
    }

    fn stock(&self, index: usize) -> Result<u32, RowError> {
        let stock = self.integer(index, Field::Stock)?.unwrap_or(0);
        if stock < 0 {
            log::warn!("Row {}: negative stock {stock} recorded as 0", spreadsheet_row(index));
        }
        Ok(u32::try_from(stock.max(0)).unwrap_or(u32::MAX))
    }
}

/// Spreadsheet row number of a data row: one for the header, one for 1-based numbering.
#[must_use]
pub const fn spreadsheet_row(index: usize) -> usize {
    index + 2
}
