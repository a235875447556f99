//! Dashboard shell.
//!
//! Owns the fetch lifecycle for one dashboard view:
//! - `mount` enters `Loading` and issues a single [`FetchTicket`]
//! - `settle` moves to `Ready` whether the fetch succeeded or not
//! - `teardown` invalidates outstanding tickets, so a fetch that settles
//!   after the view is gone changes nothing
//!
//! Failures are logged and absorbed; the view renders zero KPIs and empty
//! charts, exactly as for an empty backend response.

pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;

use shopdash_shared::types::CurrencyFormat;
use shopdash_shared::{AdminSession, FetchResult};
use tracing::{debug, error};

use crate::charts::TimeRange;
use crate::dashboard::DashboardSummary;

pub use source::MetricsSource;
pub use state::{DashboardData, DataOrigin, FetchTicket, SettleOutcome, ShellState};
pub use view::DashboardView;

/// State holder for a single dashboard view.
#[derive(Debug)]
pub struct DashboardShell {
    session: AdminSession,
    currency: CurrencyFormat,
    time_range: TimeRange,
    state: ShellState,
    generation: u64,
    mounted: bool,
}

impl DashboardShell {
    /// Creates an unmounted shell for the given auth context.
    #[must_use]
    pub fn new(session: AdminSession, currency: CurrencyFormat) -> Self {
        Self {
            session,
            currency,
            time_range: TimeRange::default(),
            state: ShellState::Loading,
            generation: 0,
            mounted: false,
        }
    }

    /// Sets the initial time range for the sales chart.
    #[must_use]
    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = time_range;
        self
    }

    /// Changes the sales chart time range. Does not refetch.
    pub fn set_time_range(&mut self, time_range: TimeRange) {
        self.time_range = time_range;
    }

    /// Returns the selected time range.
    #[must_use]
    pub const fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Returns the injected auth context.
    #[must_use]
    pub const fn session(&self) -> &AdminSession {
        &self.session
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &ShellState {
        &self.state
    }

    /// Returns true until the fetch for the current mount settles.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, ShellState::Loading)
    }

    /// Returns true between `mount` and `teardown`.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Shows the dashboard: enters `Loading` and hands out the ticket for
    /// the one fetch this mount may perform.
    ///
    /// Returns `None` if the shell is already mounted.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        if self.mounted {
            return None;
        }

        self.generation += 1;
        self.mounted = true;
        self.state = ShellState::Loading;

        debug!(
            generation = self.generation,
            is_admin = self.session.is_admin(),
            user = ?self.session.user(),
            "Dashboard mounted"
        );

        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Applies the settled fetch for `ticket`.
    ///
    /// Success and failure both end in `Ready`; a failure is logged and
    /// yields zero KPIs with empty charts. Tickets from a torn-down mount
    /// are ignored.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: FetchResult<DashboardSummary>,
    ) -> SettleOutcome {
        if !self.mounted || ticket.generation != self.generation {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "Discarding fetch result for a dashboard that is gone"
            );
            return SettleOutcome::Stale;
        }

        let data = match result {
            Ok(summary) => DashboardData::fetched(summary),
            Err(e) => {
                error!(error = %e, code = e.error_code(), "Error fetching dashboard data");
                DashboardData::failed(e)
            }
        };

        debug!(
            total_orders = data.kpis.total_orders,
            total_products = data.kpis.total_products,
            "Dashboard ready"
        );
        self.state = ShellState::Ready(Box::new(data));
        SettleOutcome::Applied
    }

    /// Hides the dashboard, dropping its data and invalidating any
    /// outstanding ticket.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.generation += 1;
        self.state = ShellState::Loading;
        debug!("Dashboard torn down");
    }

    /// Mounts, fetches once from `source` and settles.
    ///
    /// Returns `None` without fetching if the shell was already mounted.
    pub async fn load<S>(&mut self, source: &S) -> Option<SettleOutcome>
    where
        S: MetricsSource + ?Sized,
    {
        let ticket = self.mount()?;
        let result = source.fetch_dashboard_summary().await;
        Some(self.settle(ticket, result))
    }

    /// Composes the cards, charts and menu for the current state.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView::compose(self.state.data(), self.time_range, &self.currency)
    }
}
