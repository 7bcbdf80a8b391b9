use std::path::Path;
use std::sync::LazyLock;

use calamine::{open_workbook_auto, Data, Range, Reader};
use regex::Regex;

use super::ImportError;
use crate::models::format_amount;

static LEADING_FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap());
static LEADING_INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+").unwrap());

/// A single spreadsheet value, detached from the workbook reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Integer(i64),
    Bool(bool),
}

impl Cell {
    /// Trimmed textual form; `None` for empty or blank cells. Whole numbers
    /// render without a fractional part.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let text = match self {
            Self::Empty => return None,
            Self::Text(text) => text.trim().to_string(),
            Self::Number(number) => format_amount_exact(*number),
            Self::Integer(number) => number.to_string(),
            Self::Bool(value) => value.to_string(),
        };

        (!text.is_empty()).then_some(text)
    }

    /// Numeric value. Text is read up to its first non-numeric character
    /// after dropping thousands separators, so `"1,299 /-"` reads as 1299.
    /// `Ok(None)` means the cell is blank, `Err` carries unreadable text.
    #[allow(clippy::cast_precision_loss)]
    pub fn number(&self) -> Result<Option<f64>, String> {
        match self {
            Self::Empty => Ok(None),
            Self::Number(number) => Ok(Some(*number)),
            Self::Integer(number) => Ok(Some(*number as f64)),
            Self::Bool(value) => Err(value.to_string()),
            Self::Text(text) => {
                let cleaned = text.trim().replace(',', "");
                if cleaned.is_empty() {
                    return Ok(None);
                }
                LEADING_FLOAT
                    .find(&cleaned)
                    .and_then(|found| found.as_str().parse().ok())
                    .filter(|number: &f64| number.is_finite())
                    .map(Some)
                    .ok_or_else(|| text.clone())
            }
        }
    }

    /// Integer value, truncating fractions the way a spreadsheet `INT` would.
    #[allow(clippy::cast_possible_truncation)]
    pub fn integer(&self) -> Result<Option<i64>, String> {
        match self {
            Self::Empty => Ok(None),
            Self::Integer(number) => Ok(Some(*number)),
            Self::Number(number) if number.is_finite() => Ok(Some(number.trunc() as i64)),
            Self::Number(number) => Err(number.to_string()),
            Self::Bool(value) => Err(value.to_string()),
            Self::Text(text) => {
                let cleaned = text.trim().replace(',', "");
                if cleaned.is_empty() {
                    return Ok(None);
                }
                LEADING_INTEGER
                    .find(&cleaned)
                    .and_then(|found| found.as_str().parse().ok())
                    .map(Some)
                    .ok_or_else(|| text.clone())
            }
        }
    }
}

fn format_amount_exact(number: f64) -> String {
    if number.fract() == 0.0 {
        format_amount(number)
    } else {
        number.to_string()
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Self::Empty,
            Data::String(text) => Self::Text(text.clone()),
            Data::Float(number) => Self::Number(*number),
            Data::Int(number) => Self::Integer(*number),
            Data::Bool(value) => Self::Bool(*value),
            other => Self::Text(other.to_string()),
        }
    }
}

static EMPTY_CELL: Cell = Cell::Empty;

/// Header row plus data rows of one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Blank data rows are dropped, matching how spreadsheet exports treat them.
    #[must_use]
    pub fn new(name: &str, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let rows = rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| cell.text().is_some()))
            .collect();

        Self {
            name: name.to_string(),
            headers,
            rows,
        }
    }

    #[must_use]
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut rows = range.rows();

        let headers = rows
            .next()
            .map(|header_row| {
                header_row
                    .iter()
                    .map(|data| Cell::from(data).text().unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default();

        let rows = rows
            .map(|row| row.iter().map(Cell::from).collect())
            .collect();

        Self::new(name, headers, rows)
    }

    /// Reads the first worksheet of an xlsx, xls or ods workbook.
    pub fn read_first(path: &Path) -> Result<Self, ImportError> {
        let mut workbook = open_workbook_auto(path).map_err(|source| ImportError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(name) = workbook.sheet_names().first().cloned() else {
            return Err(ImportError::NoWorksheet(path.to_path_buf()));
        };

        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| ImportError::Workbook {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::from_range(&name, &range))
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&EMPTY_CELL)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_trims_and_formats_numbers() {
        assert_eq!(Cell::Text("  USB Hub ".into()).text(), Some("USB Hub".into()));
        assert_eq!(Cell::Text("   ".into()).text(), None);
        assert_eq!(Cell::Number(1001.0).text(), Some("1001".into()));
        assert_eq!(Cell::Number(2.75).text(), Some("2.75".into()));
        assert_eq!(Cell::Empty.text(), None);
    }

    #[test]
    fn numbers_read_leading_digits() {
        assert_eq!(Cell::Number(499.0).number(), Ok(Some(499.0)));
        assert_eq!(Cell::Text("1,299 /-".into()).number(), Ok(Some(1299.0)));
        assert_eq!(Cell::Text("12.5".into()).number(), Ok(Some(12.5)));
        assert_eq!(Cell::Text("".into()).number(), Ok(None));
        assert_eq!(Cell::Text("on request".into()).number(), Err("on request".into()));
        assert_eq!(Cell::Text("1e999".into()).number(), Err("1e999".into()));
    }

    #[test]
    fn integers_truncate() {
        assert_eq!(Cell::Number(7.9).integer(), Ok(Some(7)));
        assert_eq!(Cell::Text("12 units".into()).integer(), Ok(Some(12)));
        assert_eq!(Cell::Text("-3".into()).integer(), Ok(Some(-3)));
        assert_eq!(Cell::Text("many".into()).integer(), Err("many".into()));
    }

    #[test]
    fn converts_workbook_data() {
        assert_eq!(Cell::from(&Data::String("x".into())), Cell::Text("x".into()));
        assert_eq!(Cell::from(&Data::Float(1.5)), Cell::Number(1.5));
        assert_eq!(Cell::from(&Data::Int(4)), Cell::Integer(4));
        assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
    }

    #[test]
    fn drops_blank_rows_and_pads_missing_cells() {
        let sheet = Sheet::new(
            "Sheet1",
            vec!["Name".into(), "Stock".into()],
            vec![
                vec![Cell::Text("Router".into())],
                vec![Cell::Empty, Cell::Text(" ".into())],
            ],
        );

        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.cell(0, 1), &Cell::Empty);
        assert_eq!(sheet.cell(5, 0), &Cell::Empty);
    }

    #[test]
    fn builds_from_range() {
        let mut range = Range::new((0, 0), (1, 2));
        range.set_value((0, 0), Data::String("Product Name".into()));
        range.set_value((0, 1), Data::String("Category".into()));
        range.set_value((0, 2), Data::String("Price".into()));
        range.set_value((1, 0), Data::String("USB Hub".into()));
        range.set_value((1, 1), Data::String("Electronics".into()));
        range.set_value((1, 2), Data::Float(499.0));

        let sheet = Sheet::from_range("Products", &range);
        assert_eq!(sheet.headers, vec!["Product Name", "Category", "Price"]);
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.cell(0, 2), &Cell::Number(499.0));
    }
}
