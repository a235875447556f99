//! Shared types, errors, and configuration for Shopdash.
//!
//! This crate provides common types used across all other crates:
//! - Currency display formatting with decimal precision
//! - The admin session handed in by the auth provider
//! - The metrics fetch error type
//! - Configuration management

pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{FetchError, FetchResult};
pub use session::{AdminSession, UserInfo};
