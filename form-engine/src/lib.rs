//! BGIC form engine - derived fields for the back-office forms
//!
//! Every function here is synchronous and pure: it takes the current form
//! values and returns the dependent ones. Nothing is stored between calls.
//!
//! # Modules
//!
//! ```text
//! form-engine/src/
//! ├── format.rs      # 1,234.50 amount formatting
//! ├── words.rs       # amount in words (Lakh grouping)
//! ├── numbering.rs   # policy / money receipt numbers
//! ├── premium.rs     # stamp, co-insurance, VAT and total
//! ├── travel.rs      # inclusive travel window end date
//! ├── files.rs       # claim document grouping
//! ├── recompute.rs   # one-pass recompute of a whole record
//! ├── input.rs       # raw form input coercion
//! ├── validation.rs  # input-change validation
//! ├── session.rs     # signed-in session context
//! ├── config.rs      # environment configuration
//! └── utils/         # logging
//! ```

pub mod config;
pub mod files;
pub mod format;
pub mod input;
mod money;
pub mod numbering;
pub mod premium;
pub mod recompute;
pub mod session;
pub mod travel;
pub mod utils;
pub mod validation;
pub mod words;

// Re-export public types
pub use config::Config;
pub use files::group_by_category;
pub use format::format_amount;
pub use numbering::{build_mr_number, build_policy_number};
pub use premium::{BusinessClass, ClassRules, apply_class_rules, compute_total};
pub use recompute::{FormEngine, FormPayload, Recompute};
pub use session::SessionContext;
pub use travel::compute_end_date;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use words::amount_to_words;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> AppResult<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())?;
    tracing::info!(environment = %config.environment, "Form engine configured");
    Ok(config)
}
