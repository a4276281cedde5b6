//! NumericFrame implementation for tabular data
//!
//! A NumericFrame is a 2-dimensional labeled structure holding one
//! `f64` column per variable. It is immutable once built; missing
//! values are encoded as NaN and excluded per variable subset through
//! [`NumericFrame::complete_rows`].

use indexmap::IndexMap;

use super::{DataError, FloatArray, Result};

/// Immutable numeric table with named, ordered columns
#[derive(Clone, Debug, Default)]
pub struct NumericFrame {
    columns: IndexMap<String, FloatArray>,
    nrows: usize,
}

impl NumericFrame {
    /// Create an empty NumericFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a NumericFrame from (name, values) pairs
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut builder = NumericFrameBuilder::new();

        for (name, values) in columns.into_iter() {
            builder = builder.with_column(name, values)?;
        }

        Ok(builder.build())
    }

    /// Get the shape of the frame (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.columns.len())
    }

    /// Get the number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Get the number of columns
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Get column names in declared order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }

    /// Check if a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get a reference to a column
    pub fn column(&self, name: &str) -> Result<&FloatArray> {
        self.columns
            .get(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))
    }

    /// Indices of rows where every named column holds a finite value.
    ///
    /// This is the complete-case selection used for a single model fit:
    /// a row missing any of `names` is dropped for that fit only.
    pub fn complete_rows<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>> {
        if names.is_empty() {
            return Err(DataError::EmptySelection);
        }

        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            selected.push(self.column(name.as_ref())?);
        }

        let rows = (0..self.nrows)
            .filter(|&i| selected.iter().all(|col| col[i].is_finite()))
            .collect();

        Ok(rows)
    }

    /// Extract the values of a column at the given row indices
    pub fn gather(&self, name: &str, rows: &[usize]) -> Result<FloatArray> {
        let col = self.column(name)?;

        for &idx in rows {
            if idx >= self.nrows {
                return Err(DataError::IndexOutOfBounds {
                    index: idx,
                    len: self.nrows,
                });
            }
        }

        Ok(rows.iter().map(|&i| col[i]).collect())
    }
}

impl std::fmt::Display for NumericFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NumericFrame({} rows × {} cols)", self.nrows, self.ncols())
    }
}

/// Builder for [`NumericFrame`]
#[derive(Clone, Debug, Default)]
pub struct NumericFrameBuilder {
    columns: IndexMap<String, FloatArray>,
    nrows: Option<usize>,
}

impl NumericFrameBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column; all columns must have the same length
    pub fn with_column<S: Into<String>>(mut self, name: S, values: Vec<f64>) -> Result<Self> {
        let name = name.into();

        if self.columns.contains_key(&name) {
            return Err(DataError::DuplicateColumn(name));
        }

        match self.nrows {
            Some(expected) if expected != values.len() => {
                return Err(DataError::LengthMismatch {
                    expected,
                    actual: values.len(),
                });
            }
            None => self.nrows = Some(values.len()),
            _ => {}
        }

        self.columns.insert(name, FloatArray::from(values));
        Ok(self)
    }

    /// Finalize into a NumericFrame
    pub fn build(self) -> NumericFrame {
        NumericFrame {
            nrows: self.nrows.unwrap_or(0),
            columns: self.columns,
        }
    }
}
