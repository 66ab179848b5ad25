//! # Error Types
//!
//! This module defines error types used throughout the autobill library.

use thiserror::Error;

/// Main error type for autobill operations
#[derive(Debug, Error)]
pub enum BillError {
    /// Form input rejected before rendering
    #[error("Invalid bill: {0}")]
    Validation(String),

    /// Page configuration cannot hold its own capacities
    #[error("Layout error: {0}")]
    Layout(String),

    /// PDF encoding error
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Logo / watermark image error
    #[error("Image error: {0}")]
    Image(String),

    /// Shop profile or other configuration problem
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
