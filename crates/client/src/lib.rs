//! HTTP transport for the Shopdash admin API.
//!
//! Provides [`MetricsClient`], the one-request metrics client behind the
//! dashboard shell's [`MetricsSource`](shopdash_core::MetricsSource) seam.

pub mod client;

pub use client::{DASHBOARD_PATH, MetricsClient};
