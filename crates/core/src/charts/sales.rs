//! Sales and revenue overview adapter (bar chart).

use rust_decimal::Decimal;

use super::{Axis, CartesianChart, ChartKind, ChartView, Series, TimeRange, names};
use crate::dashboard::SalesRecord;

/// Placeholder shown when there are no sales buckets.
pub const NO_SALES_DATA: &str = "No sales data available";

/// Renders the sales overview.
///
/// While `loading` the records are not read at all.
#[must_use]
pub fn sales_overview(
    records: Option<&[SalesRecord]>,
    loading: bool,
    range: TimeRange,
) -> ChartView {
    if loading {
        return ChartView::Loading;
    }
    let Some(records) = records.filter(|r| !r.is_empty()) else {
        return ChartView::Empty {
            message: NO_SALES_DATA,
        };
    };

    ChartView::Cartesian(CartesianChart {
        kind: ChartKind::Bar,
        title: "Sales & Revenue Overview",
        subtitle: format!("Performance metrics for {}", range.phrase()),
        categories: names(records.iter().map(|r| r.name.as_ref()), ""),
        series: vec![
            Series {
                key: "orders",
                label: "Orders",
                color: "#8884d8",
                axis: Axis::Left,
                values: records
                    .iter()
                    .map(|r| Decimal::from(r.orders.unwrap_or(0)))
                    .collect(),
            },
            Series {
                key: "revenue",
                label: "Revenue ($)",
                color: "#82ca9d",
                axis: Axis::Right,
                values: records
                    .iter()
                    .map(|r| r.revenue.unwrap_or(Decimal::ZERO))
                    .collect(),
            },
        ],
    })
}
