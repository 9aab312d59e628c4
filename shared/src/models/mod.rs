//! Record models
//!
//! Plain records exchanged between the form engine, the REST API client and
//! the document generator. Payloads use camelCase field names to match the
//! API. The derived fields (`policy_number`, `mr_no`, `total`, `end_date`, ...)
//! are owned by `form-engine` and never edited directly.

pub mod money_receipt;
pub mod policy;
pub mod premium;
pub mod travel;
pub mod uploaded_file;
pub mod user;

// Re-exports
pub use money_receipt::*;
pub use policy::*;
pub use premium::*;
pub use travel::*;
pub use uploaded_file::*;
pub use user::*;
