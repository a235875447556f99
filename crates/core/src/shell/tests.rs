//! Lifecycle tests for the dashboard shell.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal_macros::dec;
use serde_json::json;
use shopdash_shared::types::CurrencyFormat;
use shopdash_shared::{AdminSession, FetchError, FetchResult, UserInfo};

use super::*;
use crate::charts::{ChartView, NO_CATEGORY_DATA, NO_PRODUCT_DATA, NO_SALES_DATA};
use crate::dashboard::KpiSnapshot;

/// Source returning a canned result and counting calls.
struct StubSource {
    result: FetchResult<DashboardSummary>,
    calls: AtomicUsize,
}

impl StubSource {
    fn new(result: FetchResult<DashboardSummary>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetricsSource for StubSource {
    async fn fetch_dashboard_summary(&self) -> FetchResult<DashboardSummary> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn shell() -> DashboardShell {
    let session = AdminSession::new(
        true,
        Some(UserInfo {
            id: 1,
            email: "admin@shop.test".into(),
            name: Some("Admin".into()),
        }),
    );
    DashboardShell::new(session, CurrencyFormat::default())
}

fn full_summary() -> DashboardSummary {
    serde_json::from_value(json!({
        "total_orders": 120,
        "total_revenue": "45000.00",
        "total_products": 30,
        "low_stock_products": 4,
        "growth_rate": 7.5,
        "sales_overview": [{"name": "Jan", "orders": 400, "revenue": 24000}],
        "product_performance": [{"name": "Product A", "sales": 120, "profit": 1800, "returns": 5}],
        "category_distribution": [{"name": "Electronics", "value": 35, "sales": 140}]
    }))
    .unwrap()
}

#[test]
fn test_new_shell_is_loading_and_unmounted() {
    let shell = shell();
    assert!(shell.is_loading());
    assert!(!shell.is_mounted());
    assert!(shell.session().is_admin());
}

#[test]
fn test_mount_issues_single_ticket() {
    let mut shell = shell();
    let ticket = shell.mount();
    assert!(ticket.is_some());
    assert!(shell.mount().is_none());
    assert!(shell.is_loading());
}

#[test]
fn test_settle_success() {
    let mut shell = shell();
    let ticket = shell.mount().unwrap();

    assert_eq!(shell.settle(ticket, Ok(full_summary())), SettleOutcome::Applied);

    let data = shell.state().data().unwrap();
    assert_eq!(data.origin, DataOrigin::Fetched);
    assert_eq!(data.kpis.total_orders, 120);
    assert_eq!(data.kpis.total_revenue, dec!(45000));
    assert_eq!(data.kpis.growth_rate, dec!(7.5));
    assert!(data.failure().is_none());
}

#[test]
fn test_settle_failure_is_ready_with_zero_data() {
    let mut shell = shell();
    let ticket = shell.mount().unwrap();
    let error = FetchError::Network("connection refused".into());

    assert_eq!(shell.settle(ticket, Err(error.clone())), SettleOutcome::Applied);
    assert!(!shell.is_loading());

    let data = shell.state().data().unwrap();
    assert_eq!(data.kpis, KpiSnapshot::ZERO);
    assert_eq!(data.failure(), Some(&error));

    let view = shell.view();
    assert!(!view.loading);
    assert_eq!(view.cards[0].value, "$0.00");
    assert_eq!(
        view.sales_overview,
        ChartView::Empty {
            message: NO_SALES_DATA
        }
    );
    assert_eq!(
        view.product_performance,
        ChartView::Empty {
            message: NO_PRODUCT_DATA
        }
    );
    assert_eq!(
        view.category_distribution,
        ChartView::Empty {
            message: NO_CATEGORY_DATA
        }
    );
}

#[test]
fn test_failed_view_matches_empty_backend_view() {
    let mut failed = shell();
    let ticket = failed.mount().unwrap();
    failed.settle(ticket, Err(FetchError::Timeout("10s".into())));

    let mut empty = shell();
    let ticket = empty.mount().unwrap();
    empty.settle(ticket, Ok(DashboardSummary::default()));

    assert_eq!(failed.view(), empty.view());
}

#[test]
fn test_settle_after_teardown_is_stale() {
    let mut shell = shell();
    let ticket = shell.mount().unwrap();
    shell.teardown();

    assert_eq!(shell.settle(ticket, Ok(full_summary())), SettleOutcome::Stale);
    assert!(shell.is_loading());
    assert!(shell.state().data().is_none());
}

#[test]
fn test_ticket_from_previous_mount_is_stale() {
    let mut shell = shell();
    let old = shell.mount().unwrap();
    shell.teardown();
    let current = shell.mount().unwrap();

    assert_eq!(shell.settle(old, Ok(full_summary())), SettleOutcome::Stale);
    assert!(shell.is_loading());

    assert_eq!(
        shell.settle(current, Ok(full_summary())),
        SettleOutcome::Applied
    );
    assert!(!shell.is_loading());
}

#[test]
fn test_teardown_drops_data() {
    let mut shell = shell();
    let ticket = shell.mount().unwrap();
    shell.settle(ticket, Ok(full_summary()));

    shell.teardown();
    assert!(!shell.is_mounted());
    assert!(shell.state().data().is_none());
}

#[test]
fn test_loading_view() {
    let mut shell = shell();
    shell.mount();

    let view = shell.view();
    assert!(view.loading);
    assert!(view.sales_overview.is_loading());
    assert!(view.product_performance.is_loading());
    assert!(view.category_distribution.is_loading());
    assert_eq!(view.menu.len(), 4);
}

#[test]
fn test_ready_view_composes_adapters() {
    let mut shell = shell().with_time_range(TimeRange::Year);
    let ticket = shell.mount().unwrap();
    shell.settle(ticket, Ok(full_summary()));

    let view = shell.view();
    assert_eq!(view.title, "Admin Dashboard");
    assert_eq!(view.cards[0].value, "$45,000.00");
    assert_eq!(view.cards[2].warning.as_deref(), Some("4 low stock!"));

    let ChartView::Cartesian(sales) = &view.sales_overview else {
        panic!("expected sales chart");
    };
    assert_eq!(sales.subtitle, "Performance metrics for this year");
    assert!(matches!(view.product_performance, ChartView::Cartesian(_)));
    assert!(matches!(view.category_distribution, ChartView::Pie(_)));
}

#[test]
fn test_time_range_change_does_not_refetch() {
    let mut shell = shell();
    let ticket = shell.mount().unwrap();
    shell.settle(ticket, Ok(full_summary()));

    shell.set_time_range(TimeRange::Week);
    assert_eq!(shell.time_range(), TimeRange::Week);
    assert!(!shell.is_loading());
    assert!(shell.mount().is_none());
}

#[tokio::test]
async fn test_load_fetches_once_per_mount() {
    let source = StubSource::new(Ok(full_summary()));
    let mut shell = shell();

    assert_eq!(shell.load(&source).await, Some(SettleOutcome::Applied));
    assert_eq!(shell.load(&source).await, None);
    assert_eq!(source.calls(), 1);

    shell.teardown();
    assert_eq!(shell.load(&source).await, Some(SettleOutcome::Applied));
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_load_failure_settles_ready() {
    let source = StubSource::new(Err(FetchError::Status {
        status: 500,
        message: "Internal Server Error".into(),
    }));
    let mut shell = shell();

    assert_eq!(shell.load(&source).await, Some(SettleOutcome::Applied));
    assert!(!shell.is_loading());
    assert_eq!(shell.state().data().unwrap().kpis, KpiSnapshot::ZERO);
}

#[tokio::test]
async fn test_load_through_trait_object() {
    let source: Box<dyn MetricsSource> = Box::new(StubSource::new(Ok(full_summary())));
    let mut shell = shell();

    assert_eq!(shell.load(source.as_ref()).await, Some(SettleOutcome::Applied));
}
