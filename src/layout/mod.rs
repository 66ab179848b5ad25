//! # Layout Module
//!
//! Page geometry and pagination.
//!
//! ## Modules
//!
//! - [`config`]: page size and per-page item capacities
//! - [`plan`]: item slices per physical page

pub mod config;
pub mod plan;

pub use config::PageConfig;
pub use plan::{PageSlice, plan, plan_for};
