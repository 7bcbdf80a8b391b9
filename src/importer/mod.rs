//! Offline conversion of a product spreadsheet into the catalog JSON.

mod columns;
mod normalize;
mod sheet;

use std::path::{Path, PathBuf};

use crate::models::Product;
use crate::ordered_map::OrderedMap;

pub use self::columns::{ColumnMap, Field, HEADER_SYNONYMS};
pub use self::normalize::{
    placeholder_image, spreadsheet_row, RowError, RowNormalizer, RowOutcome, DEFAULT_CATEGORY,
    DEFAULT_SUBCATEGORY, GENERIC_PLACEHOLDER_IMAGE,
};
pub use self::sheet::{Cell, Sheet};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("spreadsheet not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("workbook {} has no worksheets", .0.display())]
    NoWorksheet(PathBuf),
    #[error("no data found in sheet '{0}'")]
    EmptySheet(String),
    #[error("failed to serialize products: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ImportReport {
    pub headers: Vec<String>,
    pub rows: usize,
    pub products: Vec<Product>,
    pub skipped: usize,
    pub categories: OrderedMap<String, usize>,
}

impl ImportReport {
    #[must_use]
    pub fn missing_images(&self) -> usize {
        self.products
            .iter()
            .filter(|product| product.image_missing)
            .count()
    }
}

pub struct Importer;

impl Importer {
    /// Normalizes every data row. Rows without a name or with unreadable
    /// values are skipped and counted; they never abort the batch.
    pub fn import_sheet(sheet: &Sheet) -> Result<ImportReport, ImportError> {
        if sheet.is_empty() {
            return Err(ImportError::EmptySheet(sheet.name.clone()));
        }

        log::info!("Found {} rows in '{}'", sheet.rows.len(), sheet.name);
        log::info!("Detected columns: {}", sheet.headers.join(", "));

        let normalizer = RowNormalizer::new(sheet);
        let mut products = Vec::with_capacity(sheet.rows.len());
        let mut skipped = 0;

        for index in 0..sheet.rows.len() {
            match normalizer.normalize(index) {
                Ok(RowOutcome::Product(product)) => products.push(*product),
                Ok(RowOutcome::MissingName) => {
                    log::warn!("Row {}: Skipping - no name found", spreadsheet_row(index));
                    skipped += 1;
                }
                Err(error) => {
                    log::error!("Error processing {error}");
                    skipped += 1;
                }
            }
        }

        let mut categories = OrderedMap::new();
        for product in &products {
            *categories.entry_or_default(product.category.clone()) += 1;
        }

        Ok(ImportReport {
            headers: sheet.headers.clone(),
            rows: sheet.rows.len(),
            products,
            skipped,
            categories,
        })
    }

    pub fn import_file(input: &Path) -> Result<ImportReport, ImportError> {
        if !input.exists() {
            return Err(ImportError::NotFound(input.to_path_buf()));
        }

        log::info!("Reading spreadsheet {}", input.display());
        let sheet = Sheet::read_first(input)?;
        Self::import_sheet(&sheet)
    }

    /// Writes products as pretty-printed JSON, creating parent directories.
    pub fn write_json(products: &[Product], output: &Path) -> Result<(), ImportError> {
        let json = serde_json::to_string_pretty(products)?;

        let write_error = |source| ImportError::Write {
            path: output.to_path_buf(),
            source,
        };

        if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        std::fs::write(output, json + "\n").map_err(write_error)?;
        log::info!("Products saved to {}", output.display());
        Ok(())
    }

    pub fn run(input: &Path, output: &Path) -> Result<ImportReport, ImportError> {
        let report = Self::import_file(input)?;
        Self::write_json(&report.products, output)?;
        Ok(report)
    }
}
