//! Chart adapters.
//!
//! Each adapter is a pure function of `(records, loading)` that yields a
//! [`ChartView`]: a loading indicator, an explicit empty placeholder, or a
//! chart description ready for a renderer. Adapters share no state.

pub mod category;
pub mod color;
pub mod product;
pub mod sales;
pub mod time_range;

use rust_decimal::Decimal;
use serde::Serialize;

pub use category::{NO_CATEGORY_DATA, category_distribution};
pub use color::{category_color, hash_hue, string_hash};
pub use product::{NO_PRODUCT_DATA, product_performance};
pub use sales::{NO_SALES_DATA, sales_overview};
pub use time_range::TimeRange;

/// What a chart slot should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ChartView {
    /// Data is still being fetched.
    Loading,
    /// No records to plot.
    Empty {
        /// Placeholder text.
        message: &'static str,
    },
    /// Bar or line chart over a category axis.
    Cartesian(CartesianChart),
    /// Pie chart.
    Pie(PieChart),
}

impl ChartView {
    /// Returns true while the slot shows the loading indicator.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Mark type of a cartesian chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Grouped bars.
    Bar,
    /// Monotone lines.
    Line,
}

/// Which value axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left-hand axis.
    Left,
    /// Right-hand axis.
    Right,
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    /// Record field the values come from.
    pub key: &'static str,
    /// Legend label.
    pub label: &'static str,
    /// Fill or stroke color.
    pub color: &'static str,
    /// Axis the series uses.
    pub axis: Axis,
    /// One value per category, absent values as zero.
    pub values: Vec<Decimal>,
}

/// Bar or line chart keyed by record `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartesianChart {
    /// Mark type.
    pub kind: ChartKind,
    /// Heading.
    pub title: &'static str,
    /// Sub-heading.
    pub subtitle: String,
    /// X-axis labels, in record order.
    pub categories: Vec<String>,
    /// Plotted series.
    pub series: Vec<Series>,
}

/// Pie chart of category shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChart {
    /// Heading.
    pub title: &'static str,
    /// Sub-heading.
    pub subtitle: &'static str,
    /// Slices in record order.
    pub slices: Vec<PieSlice>,
}

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    /// Category name, "Unknown" when absent.
    pub name: String,
    /// Percentage share as reported.
    pub value: Decimal,
    /// Order count.
    pub sales: u64,
    /// Fill color.
    pub color: String,
    /// On-slice label, e.g. `"Electronics 35%"`.
    pub label: String,
    /// Legend line, e.g. `"Electronics: 35%"`.
    pub legend: String,
    /// Tooltip lines.
    pub tooltip: Vec<String>,
}

/// Labels from the `name` field, substituting `fallback` when absent.
fn names<'a, I>(labels: I, fallback: &str) -> Vec<String>
where
    I: Iterator<Item = Option<&'a String>>,
{
    labels
        .map(|name| name.cloned().unwrap_or_else(|| fallback.to_string()))
        .collect()
}
