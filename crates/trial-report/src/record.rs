//! One-row tabular record

use std::fmt;

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Free text
    Text(String),
    /// Number shown with a fixed number of decimals
    Number { value: f64, decimals: usize },
    /// Percentage shown with two decimals and a trailing `%`
    Percent(f64),
    /// No value
    Empty,
}

impl Cell {
    /// Number with two decimals
    pub fn fixed2(value: f64) -> Self {
        Self::Number { value, decimals: 2 }
    }

    /// Number with three decimals
    pub fn fixed3(value: f64) -> Self {
        Self::Number { value, decimals: 3 }
    }

    /// Text cell
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Percent cell, or empty when absent
    pub fn percent_or_empty(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Percent)
    }

    /// True for cells a spreadsheet should store as numbers
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number { .. })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number { value, decimals } => write!(f, "{value:.decimals$}"),
            Self::Percent(value) => write!(f, "{value:.2}%"),
            Self::Empty => Ok(()),
        }
    }
}

/// Header row plus one data row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularRecord {
    columns: Vec<(String, Cell)>,
}

impl TabularRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column
    pub fn push(&mut self, header: impl Into<String>, cell: Cell) {
        self.columns.push((header.into(), cell));
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the record has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column headers in order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(header, _)| header.as_str())
    }

    /// Data cells in order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.columns.iter().map(|(_, cell)| cell)
    }

    /// Cell under `header`
    pub fn get(&self, header: &str) -> Option<&Cell> {
        self.columns
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, cell)| cell)
    }
}
