//! Domain models with validation at construction
//!
//! Submitted sales are validated when converted into [`NewSale`].
//! Invalid input returns ValidationError, not panic.

pub mod sale;
pub mod summary;
pub mod validation;

pub use sale::{NewSale, SaleRecord, SaleSubmission};
pub use summary::FranchiseSummary;
pub use validation::ValidationError;
