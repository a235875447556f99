//! Dashboard payload types.
//!
//! Every field is optional on the wire. Decoding is lenient: a missing or
//! mistyped field becomes `None`, never an error, so downstream code deals
//! only with these shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Response of `GET /admin/dashboard-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of orders placed.
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_orders: Option<u64>,
    /// Revenue in currency units.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_revenue: Option<Decimal>,
    /// Number of products in the catalogue.
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_products: Option<u64>,
    /// Products running low on stock.
    #[serde(default, deserialize_with = "lenient::count")]
    pub low_stock_products: Option<u64>,
    /// Signed growth percentage.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub growth_rate: Option<Decimal>,
    /// Time-bucketed sales, in display order.
    #[serde(default, deserialize_with = "lenient::records")]
    pub sales_overview: Option<Vec<SalesRecord>>,
    /// Per-product performance, in display order.
    #[serde(default, deserialize_with = "lenient::records")]
    pub product_performance: Option<Vec<ProductRecord>>,
    /// Sales share per category.
    #[serde(default, deserialize_with = "lenient::records")]
    pub category_distribution: Option<Vec<CategoryShare>>,
}

/// One time bucket of the sales overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Bucket label (e.g. `"Jan"`).
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    /// Orders in the bucket.
    #[serde(default, deserialize_with = "lenient::count")]
    pub orders: Option<u64>,
    /// Revenue in the bucket.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub revenue: Option<Decimal>,
}

/// Performance figures for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name.
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    /// Units sold.
    #[serde(default, deserialize_with = "lenient::count")]
    pub sales: Option<u64>,
    /// Profit in currency units.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub profit: Option<Decimal>,
    /// Units returned.
    #[serde(default, deserialize_with = "lenient::count")]
    pub returns: Option<u64>,
}

/// Share of sales attributed to a category.
///
/// Shares are independent display values; nothing requires them to sum
/// to 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name; rendered as "Unknown" when absent.
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    /// Percentage share, 0-100.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub value: Option<Decimal>,
    /// Order count shown in the tooltip.
    #[serde(default, deserialize_with = "lenient::count")]
    pub sales: Option<u64>,
}
