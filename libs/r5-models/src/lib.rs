//! FHIR R5 data models
//!
//! Typed records for a subset of FHIR R5 resources and data types, each
//! carrying its structural shape contract through
//! [`Validate`](ferrum_r5_validator::Validate).
//!
//! ```
//! use ferrum_r5_models::{Resource, Validate};
//!
//! let slot = Resource::from_json_str(r#"{"resourceType": "Slot", "status": "free"}"#).unwrap();
//! let err = slot.validate().unwrap_err();
//! assert_eq!(err.to_string(), "field 'Schedule' is required");
//! ```
//!
//! Wire documents use FHIR camelCase keys. Choice groups (`onset[x]`,
//! `value[x]`) are enums flattened into sibling keys. The snake_case
//! document-store rendition is produced by [`document`].

#[macro_use]
mod macros;

pub mod datatypes;
pub mod document;
pub mod error;
pub mod resources;
pub mod value_sets;

pub use datatypes::*;
pub use error::{Error, Result};
pub use resources::*;

pub use ferrum_r5_validator::{
    TypedResource, Validate, ValidationError, ValidationErrorKind, ValidationErrors,
    ValidationMode, ValidationOutcome, Validator, ValidatorConfig,
};
