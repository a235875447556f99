//! Composed dashboard view.

use serde::Serialize;
use shopdash_shared::types::CurrencyFormat;

use super::state::DashboardData;
use crate::charts::{
    ChartView, TimeRange, category_distribution, product_performance, sales_overview,
};
use crate::dashboard::{KpiSnapshot, StatCard, stat_cards};
use crate::nav::{ADMIN_MENU, NavItem};

/// Everything a renderer needs to draw the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Page heading.
    pub title: &'static str,
    /// True while the fetch is pending.
    pub loading: bool,
    /// KPI cards.
    pub cards: Vec<StatCard>,
    /// Sales overview slot.
    pub sales_overview: ChartView,
    /// Product performance slot.
    pub product_performance: ChartView,
    /// Category distribution slot.
    pub category_distribution: ChartView,
    /// Navigation menu.
    pub menu: &'static [NavItem],
}

impl DashboardView {
    /// Builds the view; `None` means the fetch has not settled yet.
    #[must_use]
    pub fn compose(
        data: Option<&DashboardData>,
        time_range: TimeRange,
        currency: &CurrencyFormat,
    ) -> Self {
        let loading = data.is_none();
        let kpis = data.map_or(KpiSnapshot::ZERO, |d| d.kpis);

        Self {
            title: "Admin Dashboard",
            loading,
            cards: stat_cards(&kpis, currency),
            sales_overview: sales_overview(
                data.and_then(|d| d.sales_overview.as_deref()),
                loading,
                time_range,
            ),
            product_performance: product_performance(
                data.and_then(|d| d.product_performance.as_deref()),
                loading,
            ),
            category_distribution: category_distribution(
                data.and_then(|d| d.category_distribution.as_deref()),
                loading,
            ),
            menu: &ADMIN_MENU,
        }
    }
}
