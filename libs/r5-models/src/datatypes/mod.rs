//! FHIR R5 data types
//!
//! Data types are backbone-free nodes reused across resources. Primitive
//! types are plain Rust values (`String`, `bool`, `u32`, `f64`); date-like
//! primitives keep their lexical form as `String`.

pub mod extension;
pub mod general;
pub mod metadata;

pub use extension::*;
pub use general::*;
pub use metadata::*;
