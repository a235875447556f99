//! Shell lifecycle state.

use chrono::{DateTime, Utc};
use shopdash_shared::FetchError;

use crate::dashboard::{
    CategoryShare, DashboardSummary, KpiSnapshot, ProductRecord, SalesRecord, aggregate,
};

/// Where the data in a ready dashboard came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    /// The fetch succeeded.
    Fetched,
    /// The fetch failed; KPIs are zero and every chart is empty.
    Failed(FetchError),
}

/// Everything the dashboard shows once the fetch has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    /// KPI snapshot for the cards.
    pub kpis: KpiSnapshot,
    /// Records for the sales adapter.
    pub sales_overview: Option<Vec<SalesRecord>>,
    /// Records for the product adapter.
    pub product_performance: Option<Vec<ProductRecord>>,
    /// Records for the category adapter.
    pub category_distribution: Option<Vec<CategoryShare>>,
    /// Success or failure of the fetch.
    pub origin: DataOrigin,
    /// When the fetch settled.
    pub settled_at: DateTime<Utc>,
}

impl DashboardData {
    /// Splits a fetched summary into KPIs and chart records.
    #[must_use]
    pub fn fetched(summary: DashboardSummary) -> Self {
        let kpis = aggregate(Some(&summary));
        Self {
            kpis,
            sales_overview: summary.sales_overview,
            product_performance: summary.product_performance,
            category_distribution: summary.category_distribution,
            origin: DataOrigin::Fetched,
            settled_at: Utc::now(),
        }
    }

    /// Zero KPIs and no records, remembering why.
    #[must_use]
    pub fn failed(error: FetchError) -> Self {
        Self {
            kpis: aggregate(None),
            sales_overview: None,
            product_performance: None,
            category_distribution: None,
            origin: DataOrigin::Failed(error),
            settled_at: Utc::now(),
        }
    }

    /// Returns the fetch error, if the data stands in for a failure.
    #[must_use]
    pub const fn failure(&self) -> Option<&FetchError> {
        match &self.origin {
            DataOrigin::Fetched => None,
            DataOrigin::Failed(error) => Some(error),
        }
    }
}

/// `Loading -> Ready`, with no error state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    /// Waiting for the fetch to settle.
    Loading,
    /// The fetch settled, successfully or not.
    Ready(Box<DashboardData>),
}

impl ShellState {
    /// Returns the settled data, if any.
    #[must_use]
    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            Self::Loading => None,
            Self::Ready(data) => Some(data.as_ref()),
        }
    }
}

/// Proof that a fetch was started by a particular mount.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub(super) generation: u64,
}

impl FetchTicket {
    /// Mount generation the ticket belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of handing a settled fetch to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The shell moved to `Ready`.
    Applied,
    /// The mount that issued the ticket is gone; nothing changed.
    Stale,
}
