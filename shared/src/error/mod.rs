//! Unified error system for the back-office form engine
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication / session errors
//! - 4xxx: Document (policy, money receipt) errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::RequiredField);
//!
//! // Create an error with details
//! let err = AppError::out_of_range("OMP number must be between 1 and 9999")
//!     .with_detail("field", "ompNumber");
//! assert_eq!(err.code, ErrorCode::ValueOutOfRange);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
