#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Category,
    Subcategory,
    Price,
    Currency,
    Description,
    ImageUrl,
    Sku,
    Stock,
}

/// Accepted header spellings per field, most preferred first. Headers are
/// compared after trimming and lowercasing.
pub const HEADER_SYNONYMS: &[(Field, &[&str])] = &[
    (Field::Name, &["name", "product name", "product", "title"]),
    (Field::Category, &["category", "product category", "type"]),
    (Field::Subcategory, &["subcategory", "sub-category", "sub category", "variant"]),
    (Field::Price, &["price", "cost", "amount", "mrp"]),
    (Field::Currency, &["currency", "curr"]),
    (Field::Description, &["description", "short description", "desc", "details"]),
    (Field::ImageUrl, &["image url", "image", "img url", "picture"]),
    (Field::Sku, &["sku", "product id", "id", "code"]),
    (Field::Stock, &["stock", "quantity", "qty", "available"]),
];

/// Resolved column position for every field present in a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: Vec<(Field, usize)>,
}

impl ColumnMap {
    #[must_use]
    pub fn resolve(headers: &[String]) -> Self {
        let normalized: Vec<String> = headers
            .iter()
            .map(|header| header.trim().to_lowercase())
            .collect();

        let columns = HEADER_SYNONYMS
            .iter()
            .filter_map(|(field, candidates)| {
                Self::find_column(&normalized, candidates).map(|column| (*field, column))
            })
            .collect();

        Self { columns }
    }

    fn find_column(normalized: &[String], candidates: &[&str]) -> Option<usize> {
        candidates.iter().find_map(|candidate| {
            normalized.iter().position(|header| header == candidate)
        })
    }

    #[must_use]
    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|&(_, column)| column)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.column(field).is_some()
    }
}
