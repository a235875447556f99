//! Stat cards built from a KPI snapshot.

use rust_decimal::Decimal;
use serde::Serialize;
use shopdash_shared::types::CurrencyFormat;

use super::aggregate::KpiSnapshot;

/// Direction arrow next to a growth figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Positive growth.
    Up,
    /// Zero or negative growth.
    Down,
}

/// Growth indicator shown under a card value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Growth {
    /// Arrow direction.
    pub trend: Trend,
    /// Absolute percentage, e.g. `"7.5%"`.
    pub label: String,
}

impl Growth {
    /// Builds the indicator for a signed growth rate.
    #[must_use]
    pub fn from_rate(rate: Decimal) -> Self {
        let trend = if rate > Decimal::ZERO {
            Trend::Up
        } else {
            Trend::Down
        };
        Self {
            trend,
            label: format!("{}%", rate.abs().normalize()),
        }
    }
}

/// A single KPI card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Caption above the value.
    pub title: &'static str,
    /// Display value.
    pub value: String,
    /// Growth indicator, if the card carries one.
    pub growth: Option<Growth>,
    /// Low-stock warning, only present for a positive count.
    pub warning: Option<String>,
}

impl StatCard {
    fn plain(title: &'static str, value: String) -> Self {
        Self {
            title,
            value,
            growth: None,
            warning: None,
        }
    }
}

/// Builds the four KPI cards in display order.
#[must_use]
pub fn stat_cards(kpis: &KpiSnapshot, currency: &CurrencyFormat) -> Vec<StatCard> {
    let revenue = StatCard {
        growth: Some(Growth::from_rate(kpis.growth_rate)),
        ..StatCard::plain("Total Revenue", currency.format(kpis.total_revenue))
    };

    let products = StatCard {
        warning: (kpis.low_stock_products > 0)
            .then(|| format!("{} low stock!", kpis.low_stock_products)),
        ..StatCard::plain("Products", kpis.total_products.to_string())
    };

    vec![
        revenue,
        StatCard::plain("Total Orders", kpis.total_orders.to_string()),
        products,
        StatCard::plain("Low Stock Items", kpis.low_stock_products.to_string()),
    ]
}
