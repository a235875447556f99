//! Stat aggregation: summary payload to KPI snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::DashboardSummary;

/// Top-line figures shown on the stat cards.
///
/// Computed once per fetch and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Number of orders.
    pub total_orders: u64,
    /// Revenue in currency units.
    pub total_revenue: Decimal,
    /// Number of products.
    pub total_products: u64,
    /// Products running low on stock.
    pub low_stock_products: u64,
    /// Signed growth percentage.
    pub growth_rate: Decimal,
}

impl KpiSnapshot {
    /// The all-zero snapshot used before data arrives or after a failed fetch.
    pub const ZERO: Self = Self {
        total_orders: 0,
        total_revenue: Decimal::ZERO,
        total_products: 0,
        low_stock_products: 0,
        growth_rate: Decimal::ZERO,
    };
}

/// Maps a summary to its KPI snapshot, substituting zero for every absent
/// field. `None` stands for a failed fetch and yields [`KpiSnapshot::ZERO`].
#[must_use]
pub fn aggregate(summary: Option<&DashboardSummary>) -> KpiSnapshot {
    let Some(summary) = summary else {
        return KpiSnapshot::ZERO;
    };

    KpiSnapshot {
        total_orders: summary.total_orders.unwrap_or(0),
        total_revenue: summary.total_revenue.unwrap_or(Decimal::ZERO),
        total_products: summary.total_products.unwrap_or(0),
        low_stock_products: summary.low_stock_products.unwrap_or(0),
        growth_rate: summary.growth_rate.unwrap_or(Decimal::ZERO),
    }
}
