//! Product performance adapter (line chart).

use rust_decimal::Decimal;

use super::{Axis, CartesianChart, ChartKind, ChartView, Series, names};
use crate::dashboard::ProductRecord;

/// Placeholder shown when there are no product records.
pub const NO_PRODUCT_DATA: &str = "No product performance data available";

fn count_series(
    records: &[ProductRecord],
    key: &'static str,
    color: &'static str,
    axis: Axis,
    field: fn(&ProductRecord) -> Option<u64>,
) -> Series {
    Series {
        key,
        label: key,
        color,
        axis,
        values: records
            .iter()
            .map(|r| Decimal::from(field(r).unwrap_or(0)))
            .collect(),
    }
}

/// Renders sales, profit and returns per product.
#[must_use]
pub fn product_performance(records: Option<&[ProductRecord]>, loading: bool) -> ChartView {
    if loading {
        return ChartView::Loading;
    }
    let Some(records) = records.filter(|r| !r.is_empty()) else {
        return ChartView::Empty {
            message: NO_PRODUCT_DATA,
        };
    };

    let profit = Series {
        key: "profit",
        label: "profit",
        color: "#82ca9d",
        axis: Axis::Left,
        values: records
            .iter()
            .map(|r| r.profit.unwrap_or(Decimal::ZERO))
            .collect(),
    };

    ChartView::Cartesian(CartesianChart {
        kind: ChartKind::Line,
        title: "Product Performance",
        subtitle: "Sales, profit, and returns for top products".to_string(),
        categories: names(records.iter().map(|r| r.name.as_ref()), ""),
        series: vec![
            count_series(records, "sales", "#8884d8", Axis::Left, |r| r.sales),
            profit,
            count_series(records, "returns", "#ffc658", Axis::Right, |r| r.returns),
        ],
    })
}
