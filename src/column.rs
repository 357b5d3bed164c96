//! Column input: dynamically typed cell values plus kind inference.
//!
//! A [`ColumnData`] is the not-yet-materialized form of a column: the raw
//! cells, an optional name, and an optional caller-declared width. Nothing
//! is formatted until the layout decides the column might be shown.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::Align;

/// One cell's value.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Free-form text.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Absent value, rendered as the configured sentinel.
    Missing,
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Str(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Str(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Missing,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Int(i)
                } else {
                    CellValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => CellValue::Str(s.clone()),
            // Structured values are shown as their JSON text.
            v => CellValue::Str(v.to_string()),
        }
    }
}

/// The inferred kind of a column, driving alignment and the header's
/// type abbreviation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Text cells (also any mixed column containing text).
    Text,
    /// Integer cells.
    Int,
    /// Floating point cells (also integer/float mixes).
    Float,
    /// Boolean cells.
    Bool,
    /// No cells, or nothing but missing values.
    #[default]
    Unknown,
}

impl ColumnKind {
    /// Short abbreviation shown on the header's type line.
    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Text => "str",
            ColumnKind::Int => "int",
            ColumnKind::Float => "num",
            ColumnKind::Bool => "bool",
            ColumnKind::Unknown => "na",
        }
    }

    /// Default alignment for columns of this kind. Numbers sit on the
    /// right so magnitudes line up.
    pub fn alignment(self) -> Align {
        match self {
            ColumnKind::Int | ColumnKind::Float => Align::Right,
            _ => Align::Left,
        }
    }
}

/// One column's raw data: cells, an optional name, and an optional
/// caller-declared width.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnData {
    name: Option<String>,
    cells: Vec<CellValue>,
    width: Option<usize>,
}

impl ColumnData {
    /// Creates an unnamed column from raw cells.
    pub fn from_cells(cells: Vec<CellValue>) -> Self {
        ColumnData {
            name: None,
            cells,
            width: None,
        }
    }

    /// Creates a named text column.
    pub fn text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnData::from_cells(values.into_iter().map(|v| CellValue::Str(v.into())).collect())
            .named(name)
    }

    /// Creates a named integer column.
    pub fn ints(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        ColumnData::from_cells(values.into_iter().map(CellValue::Int).collect()).named(name)
    }

    /// Creates a named float column.
    pub fn floats(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        ColumnData::from_cells(values.into_iter().map(CellValue::Float).collect()).named(name)
    }

    /// Creates a named boolean column.
    pub fn bools(name: impl Into<String>, values: impl IntoIterator<Item = bool>) -> Self {
        ColumnData::from_cells(values.into_iter().map(CellValue::Bool).collect()).named(name)
    }

    /// Creates a named column from JSON values. Nulls become missing
    /// cells; arrays and objects are shown as their JSON text.
    pub fn from_json(name: impl Into<String>, values: &[Value]) -> Self {
        ColumnData::from_cells(values.iter().map(CellValue::from).collect()).named(name)
    }

    /// Sets the column name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declares an explicit column width, overriding the ideal width the
    /// body renderer would derive from the content.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Column name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The raw cells.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Caller-declared width, if any.
    pub fn declared_width(&self) -> Option<usize> {
        self.width
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Infers the column kind from the cells. Text wins over any mix;
    /// integer/float mixes collapse to float; all-missing is unknown.
    pub fn kind(&self) -> ColumnKind {
        let mut kind = ColumnKind::Unknown;
        for cell in &self.cells {
            match cell {
                CellValue::Str(_) => return ColumnKind::Text,
                CellValue::Float(_) => kind = ColumnKind::Float,
                CellValue::Int(_) if kind != ColumnKind::Float => kind = ColumnKind::Int,
                CellValue::Bool(_) if kind == ColumnKind::Unknown => kind = ColumnKind::Bool,
                _ => {}
            }
        }
        kind
    }

    /// Short type abbreviation for the header's type line.
    pub fn type_label(&self) -> &'static str {
        self.kind().label()
    }
}
