//! Structural validation for FHIR R5 data models
//!
//! A model tree is validated by walking its fields depth-first in declaration
//! order:
//!
//! - resource kinds check their `resourceType` tag first
//! - required scalars and nodes must be present
//! - repeated fields must meet their minimum cardinality
//! - every populated nested node is validated recursively
//!
//! Each violation carries the path from the root, e.g.
//! `Substance: Strength[0]: ReferenceStrength[0]: field 'StrengthRatio' is required`.
//!
//! [`Validate::validate`] stops at the first violation;
//! [`Validate::validate_all`] gathers all of them. [`Validator`] runs a
//! configured plan and reports a [`ValidationOutcome`] that converts into an
//! `OperationOutcome`.

mod config;
mod context;
mod error;
mod validator;

pub use config::{ValidationPlan, ValidatorConfig, ValidatorConfigBuilder, DEFAULT_MAX_ISSUES};
pub use context::{
    Choice, Flow, Halt, Presence, Validate, ValidationContext, ValidationMode,
};
pub use error::{ConfigError, PathSegment, ValidationError, ValidationErrorKind, ValidationErrors};
pub use validator::{
    IssueCode, IssueSeverity, TypedResource, ValidationIssue, ValidationOutcome, Validator,
};
