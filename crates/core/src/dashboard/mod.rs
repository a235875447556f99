//! Dashboard metrics: payload schema, KPI aggregation and stat cards.
//!
//! This module provides:
//! - The typed `GET /admin/dashboard-data` payload
//! - The pure summary-to-KPI mapping
//! - KPI cards for display

pub mod aggregate;
pub mod cards;
mod lenient;
pub mod types;


pub use aggregate::{KpiSnapshot, aggregate};
pub use cards::{Growth, StatCard, Trend, stat_cards};
pub use types::{CategoryShare, DashboardSummary, ProductRecord, SalesRecord};
