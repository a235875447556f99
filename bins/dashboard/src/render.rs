//! Plain-text rendering of a dashboard view.

use std::fmt::{self, Display, Formatter};

use shopdash_core::DashboardView;
use shopdash_core::charts::{CartesianChart, ChartView, PieChart};
use shopdash_core::dashboard::{StatCard, Trend};

/// Renders the whole dashboard as text.
pub fn render(view: &DashboardView) -> String {
    TextDashboard(view).to_string()
}

/// Display adapter over a [`DashboardView`].
pub struct TextDashboard<'a>(pub &'a DashboardView);

impl Display for TextDashboard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{}", view.title)?;
        writeln!(f, "{}", "=".repeat(view.title.len()))?;
        if view.loading {
            writeln!(f, "Loading dashboard...")?;
        }

        writeln!(f)?;
        for card in &view.cards {
            write_card(f, card)?;
        }

        for chart in [
            &view.sales_overview,
            &view.product_performance,
            &view.category_distribution,
        ] {
            writeln!(f)?;
            write_chart(f, chart)?;
        }

        writeln!(f)?;
        writeln!(f, "Menu")?;
        for item in view.menu {
            writeln!(f, "  {} -> {}", item.label, item.path)?;
        }
        Ok(())
    }
}

fn write_card(f: &mut Formatter<'_>, card: &StatCard) -> fmt::Result {
    write!(f, "{}: {}", card.title, card.value)?;
    if let Some(growth) = &card.growth {
        let arrow = match growth.trend {
            Trend::Up => '↑',
            Trend::Down => '↓',
        };
        write!(f, " ({arrow} {})", growth.label)?;
    }
    if let Some(warning) = &card.warning {
        write!(f, " [{warning}]")?;
    }
    writeln!(f)
}

fn write_chart(f: &mut Formatter<'_>, chart: &ChartView) -> fmt::Result {
    match chart {
        ChartView::Loading => writeln!(f, "Loading..."),
        ChartView::Empty { message } => writeln!(f, "{message}"),
        ChartView::Cartesian(chart) => write_table(f, chart),
        ChartView::Pie(chart) => write_pie(f, chart),
    }
}

fn write_table(f: &mut Formatter<'_>, chart: &CartesianChart) -> fmt::Result {
    writeln!(f, "{}", chart.title)?;
    writeln!(f, "{}", chart.subtitle)?;

    let mut header = vec![String::new()];
    header.extend(chart.series.iter().map(|s| s.label.to_string()));

    let mut rows = vec![header];
    for (i, category) in chart.categories.iter().enumerate() {
        let mut row = vec![category.clone()];
        row.extend(
            chart
                .series
                .iter()
                .map(|s| s.values.get(i).map(ToString::to_string).unwrap_or_default()),
        );
        rows.push(row);
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        writeln!(f, "  {}", cells.join(" | ").trim_end())?;
    }
    Ok(())
}

fn write_pie(f: &mut Formatter<'_>, chart: &PieChart) -> fmt::Result {
    writeln!(f, "{}", chart.title)?;
    writeln!(f, "{}", chart.subtitle)?;
    for slice in &chart.slices {
        writeln!(
            f,
            "  {} ({} orders) [{}]",
            slice.legend, slice.sales, slice.color
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shopdash_core::KpiSnapshot;
    use shopdash_core::charts::TimeRange;
    use shopdash_core::dashboard::{CategoryShare, SalesRecord};
    use shopdash_core::shell::DashboardData;
    use shopdash_shared::types::CurrencyFormat;

    #[test]
    fn test_render_loading() {
        let view = DashboardView::compose(None, TimeRange::Month, &CurrencyFormat::default());
        let text = render(&view);

        assert!(text.starts_with("Admin Dashboard\n===============\nLoading dashboard..."));
        assert_eq!(text.matches("Loading...").count(), 3);
        assert!(text.contains("Manage Orders -> /admin/orders"));
    }

    #[test]
    fn test_render_ready() {
        let mut data = DashboardData::fetched(Default::default());
        data.kpis = KpiSnapshot {
            total_orders: 120,
            total_revenue: dec!(45000),
            total_products: 30,
            low_stock_products: 4,
            growth_rate: dec!(7.5),
        };
        data.sales_overview = Some(vec![SalesRecord {
            name: Some("Jan".into()),
            orders: Some(400),
            revenue: Some(dec!(24000)),
        }]);
        data.category_distribution = Some(vec![CategoryShare {
            name: Some("Electronics".into()),
            value: Some(dec!(35)),
            sales: Some(140),
        }]);

        let view = DashboardView::compose(Some(&data), TimeRange::Week, &CurrencyFormat::default());
        let text = render(&view);

        assert!(!text.contains("Loading"));
        assert!(text.contains("Total Revenue: $45,000.00 (↑ 7.5%)"));
        assert!(text.contains("Products: 30 [4 low stock!]"));
        assert!(text.contains("Performance metrics for this week"));
        assert!(text.contains("Jan | 400    | 24000"));
        assert!(text.contains("No product performance data available"));
        assert!(text.contains("Electronics: 35% (140 orders) [#3f51b5]"));
    }
}
