//! Core dashboard logic for Shopdash.
//!
//! This crate contains the presentation model with ZERO HTTP dependencies.
//! Payload schema, KPI aggregation, chart adapters and the shell lifecycle
//! all live here; the client crate supplies the transport.
//!
//! # Modules
//!
//! - `dashboard` - Payload types, KPI aggregation and stat cards
//! - `charts` - Chart adapters and category colors
//! - `nav` - Static admin navigation menu
//! - `shell` - Fetch lifecycle and view composition

pub mod charts;
pub mod dashboard;
pub mod nav;
pub mod shell;

pub use dashboard::{DashboardSummary, KpiSnapshot, aggregate};
pub use shell::{DashboardShell, DashboardView, MetricsSource};
