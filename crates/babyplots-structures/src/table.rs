//! Column-oriented tables as plot input.
//!
//! A [`Table`] holds named columns of equal length, one row per point. It is
//! split into plot coordinates and a color variable with
//! [`Table::to_plot_data`].

use babyplots_core::{BabyplotsError, ColorVar, Coordinates, Result};

/// A single table column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the numeric values, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(values) => Some(values),
            Self::Text(_) => None,
        }
    }

    /// Converts the column into a color variable.
    pub fn to_color_var(&self) -> ColorVar {
        match self {
            Self::Numeric(values) => ColorVar::Values(values.clone()),
            Self::Text(values) => ColorVar::Labels(values.clone()),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Self::Text(values.into_iter().map(str::to_string).collect())
    }
}

/// Where the color variable of a table plot comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// Take the named column and leave it out of the coordinates.
    Column(String),
    /// Use these values as given.
    Values(ColorVar),
}

impl ColorSource {
    /// Colors by the named column.
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }
}

impl From<&str> for ColorSource {
    fn from(name: &str) -> Self {
        Self::Column(name.to_string())
    }
}

impl From<ColorVar> for ColorSource {
    fn from(values: ColorVar) -> Self {
        Self::Values(values)
    }
}

/// Ordered named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, builder style.
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<Self> {
        self.push_column(name, column)?;
        Ok(self)
    }

    /// Appends a column.
    ///
    /// Fails if the name is taken or the length differs from existing columns.
    pub fn push_column(&mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if self.column(&name).is_some() {
            return Err(BabyplotsError::config(format!("duplicate column '{name}'")));
        }
        if let Some((_, first)) = self.columns.first() {
            if first.len() != column.len() {
                return Err(BabyplotsError::SizeMismatch {
                    expected: first.len(),
                    actual: column.len(),
                });
            }
        }

        self.columns.push((name, column));
        Ok(())
    }

    /// Gets a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(column_name, _)| column_name == name)
            .map(|(_, column)| column)
    }

    /// Returns the column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, column)| column.len())
    }

    /// Returns the number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| BabyplotsError::KeyNotFound(name.to_string()))
    }

    /// Splits the table into plot coordinates and a color variable.
    ///
    /// A color column is removed from the coordinate candidates. When
    /// `coord_columns` is empty every remaining column is used in table order;
    /// otherwise exactly the named columns, in the given order. At least one
    /// coordinate column must remain.
    pub fn to_plot_data(
        &self,
        color: &ColorSource,
        coord_columns: &[&str],
    ) -> Result<(Coordinates, ColorVar)> {
        let (color_var, color_column) = match color {
            ColorSource::Column(name) => (self.require(name)?.to_color_var(), Some(name.as_str())),
            ColorSource::Values(values) => (values.clone(), None),
        };

        let names: Vec<&str> = if coord_columns.is_empty() {
            self.column_names()
                .filter(|name| Some(*name) != color_column)
                .collect()
        } else {
            if let Some(name) = coord_columns.iter().find(|name| Some(**name) == color_column) {
                return Err(BabyplotsError::config(format!(
                    "column '{name}' is used as the color variable"
                )));
            }
            coord_columns.to_vec()
        };
        if names.is_empty() {
            return Err(BabyplotsError::config(
                "a table plot needs at least one coordinate column besides the color column",
            ));
        }

        let columns = names
            .iter()
            .map(|&name| {
                self.require(name)?.as_numeric().ok_or_else(|| {
                    BabyplotsError::config(format!("coordinate column '{name}' is not numeric"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rows: Vec<Vec<f64>> = (0..self.num_rows())
            .map(|row| columns.iter().map(|column| column[row]).collect())
            .collect();

        log::debug!(
            "table plot data: {} row(s) from columns {:?}",
            rows.len(),
            names
        );
        Ok((Coordinates::from(rows), color_var))
    }
}
