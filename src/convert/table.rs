//! Normalized tabular input supplied by the host data-binding layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimals_to_f64;
use crate::error::TornadoResult;
use crate::render::Color;

/// Raw value of one category row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryValue {
    Number(f64),
    Date(DateTime<Utc>),
    Text(String),
    Null,
}

impl From<&str> for CategoryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CategoryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CategoryValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for CategoryValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryColumn {
    pub display_name: String,
    pub query_name: Option<String>,
    /// Number format for numeric categories, strftime pattern for dates.
    pub format_string: Option<String>,
    pub values: Vec<CategoryValue>,
}

impl CategoryColumn {
    #[must_use]
    pub fn new<I, V>(display_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CategoryValue>,
    {
        Self {
            display_name: display_name.into(),
            query_name: None,
            format_string: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_format_string(mut self, format_string: impl Into<String>) -> Self {
        self.format_string = Some(format_string.into());
        self
    }
}

/// User-configured per-series properties attached to a column or group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesObjects {
    pub fill: Option<Color>,
    /// Caps the series' scale maximum.
    pub axis_end: Option<f64>,
}

/// Grouping-column instance that produced a dynamic series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesGroup {
    pub name: String,
    pub objects: SeriesObjects,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueColumn {
    pub display_name: String,
    pub query_name: Option<String>,
    pub format_string: Option<String>,
    pub objects: SeriesObjects,
    pub group: Option<SeriesGroup>,
    pub values: Vec<Option<f64>>,
    /// Partial cross-highlight values, parallel to `values`.
    pub highlights: Option<Vec<Option<f64>>>,
}

impl ValueColumn {
    #[must_use]
    pub fn new(display_name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let display_name = display_name.into();
        Self {
            query_name: Some(display_name.clone()),
            display_name,
            values,
            ..Self::default()
        }
    }

    /// Builds a column from plain values, none of them null.
    #[must_use]
    pub fn from_values(display_name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(display_name, values.iter().copied().map(Some).collect())
    }

    /// Builds a column from decimal measures (e.g. currency).
    pub fn from_decimals(
        display_name: impl Into<String>,
        values: &[Option<Decimal>],
    ) -> TornadoResult<Self> {
        let display_name = display_name.into();
        let values = decimals_to_f64(values, &display_name)?;
        Ok(Self::new(display_name, values))
    }

    #[must_use]
    pub fn with_highlights(mut self, highlights: Vec<Option<f64>>) -> Self {
        self.highlights = Some(highlights);
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: SeriesGroup) -> Self {
        self.group = Some(group);
        self
    }

    #[must_use]
    pub fn with_objects(mut self, objects: SeriesObjects) -> Self {
        self.objects = objects;
        self
    }

    #[must_use]
    pub fn with_format_string(mut self, format_string: impl Into<String>) -> Self {
        self.format_string = Some(format_string.into());
        self
    }
}

/// One category column plus one or two value columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalTable {
    pub category: Option<CategoryColumn>,
    pub values: Vec<ValueColumn>,
    /// Display name of the grouping column behind dynamic series.
    pub series_title: Option<String>,
}

impl CategoricalTable {
    #[must_use]
    pub fn new(category: CategoryColumn, values: Vec<ValueColumn>) -> Self {
        Self {
            category: Some(category),
            values,
            series_title: None,
        }
    }

    #[must_use]
    pub fn with_series_title(mut self, title: impl Into<String>) -> Self {
        self.series_title = Some(title.into());
        self
    }
}
