//! # Basket Analytics
//!
//! Basketball player statistics: derived metrics, rankings and comparison
//! views over a single spreadsheet of box-score totals.
//!
//! ## Architecture
//!
//! - **models**: Player records, field catalogue and the immutable table
//! - **ingest**: Spreadsheet (CSV) loading and header validation
//! - **calculate**: Metric derivation, ranking, selection and summaries
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod ingest;
pub mod models;

pub use models::*;
