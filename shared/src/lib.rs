pub mod error;
pub mod models;
pub mod catalog;
pub mod validation;
pub mod registration;
pub mod proof;
pub mod pdf;
pub mod auth;
pub mod carousel;
pub mod page;
pub mod scene;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use validation::{validate_draft, ValidationError};
pub use registration::{export_file_name, format_long_date, Field, RegistrationDraft};
pub use proof::ProofSheet;
pub use page::{PageAction, PageModel, Variant};

#[cfg(test)]
mod tests;
