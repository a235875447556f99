//! Category distribution adapter (pie chart).

use rust_decimal::{Decimal, RoundingStrategy};

use super::{ChartView, PieChart, PieSlice, category_color};
use crate::dashboard::CategoryShare;

/// Placeholder shown when there are no category shares.
pub const NO_CATEGORY_DATA: &str = "No category data available";

/// Label used for a share without a name.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Renders sales share per category.
#[must_use]
pub fn category_distribution(records: Option<&[CategoryShare]>, loading: bool) -> ChartView {
    if loading {
        return ChartView::Loading;
    }
    let Some(records) = records.filter(|r| !r.is_empty()) else {
        return ChartView::Empty {
            message: NO_CATEGORY_DATA,
        };
    };

    // None when the shares overflow; every label then reads 0%
    let total = records.iter().try_fold(Decimal::ZERO, |acc, r| {
        acc.checked_add(r.value.unwrap_or(Decimal::ZERO))
    });

    let slices = records
        .iter()
        .map(|share| {
            let known = share.name.as_deref().filter(|n| !n.is_empty());
            let name = known.unwrap_or(UNKNOWN_CATEGORY).to_string();
            let value = share.value.unwrap_or(Decimal::ZERO).normalize();
            let sales = share.sales.unwrap_or(0);
            let percent = total
                .filter(|t| !t.is_zero())
                .and_then(|t| value.checked_div(t))
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map_or(Decimal::ZERO, |p| {
                    p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                        .normalize()
                });

            PieSlice {
                color: category_color(known),
                label: format!("{name} {percent}%"),
                legend: format!("{name}: {value}%"),
                tooltip: vec![
                    name.clone(),
                    format!("{value}% of Total Sales"),
                    format!("{sales} orders"),
                ],
                name,
                value,
                sales,
            }
        })
        .collect();

    ChartView::Pie(PieChart {
        title: "Sales by Category",
        subtitle: "Distribution of sales across product categories",
        slices,
    })
}
