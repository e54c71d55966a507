//! Dashboard module
//!
//! Provides an overview page with spending totals, a breakdown by category
//! and the trend over time.

mod aggregation;
mod cards;
mod charts;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
