#![forbid(unsafe_code)]

//! Core domain model and business logic for the Bmical BMI calculator.
//!
//! This crate provides:
//! - Domain types (unit systems, measurements, categories, results)
//! - The BMI engine (computation and classification)
//! - Static per-category advice catalog
//! - Session-scoped history log with CSV export
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod advice;
pub mod config;
pub mod logging;
pub mod engine;
pub mod history;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use advice::{category_info, CategoryInfo};
pub use config::Config;
pub use engine::{classify, classify_exact, compute_bmi};
pub use history::{HistoryLog, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
