//! Shared types for the BGIC back-office
//!
//! Record models exchanged with the REST API and the unified error type
//! used across the workspace.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
