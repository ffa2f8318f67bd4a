//! The structural validation protocol.
//!
//! Every model node implements [`Validate::validate_with`] by walking its own
//! fields in declaration order and calling the helpers on
//! [`ValidationContext`]. The context owns the current path and decides, per
//! [`ValidationMode`], whether a reported violation stops the walk.
//!
//! Validation only reads the tree. Callers must not mutate a tree while it is
//! being validated; shared references make concurrent validation of the same
//! tree from several threads safe.

use crate::error::{PathSegment, ValidationError, ValidationErrorKind, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Whether a run stops at the first violation or gathers all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    #[default]
    FailFast,
    Exhaustive,
}

/// Signals that the walk must unwind: fail-fast saw an error, or the issue
/// cap was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt;

/// Result of a (partial) walk. `Err(Halt)` unwinds through `?`.
pub type Flow = Result<(), Halt>;

/// A node with a declared shape contract.
pub trait Validate {
    /// Walk this node's fields, reporting violations into `ctx`.
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow;

    /// Fail-fast validation: the first violation in depth-first declaration
    /// order, or `Ok(())`.
    fn validate(&self) -> Result<(), ValidationError> {
        let mut ctx = ValidationContext::new(ValidationMode::FailFast);
        let _ = self.validate_with(&mut ctx);
        match ctx.into_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Exhaustive validation: every violation with its path.
    fn validate_all(&self) -> Result<(), ValidationErrors> {
        let mut ctx = ValidationContext::new(ValidationMode::Exhaustive);
        let _ = self.validate_with(&mut ctx);
        let errors = ctx.into_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        (**self).validate_with(ctx)
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        (**self).validate_with(ctx)
    }
}

// Primitives terminate recursion.
macro_rules! impl_leaf {
    ($($ty:ty),+) => {
        $(
            impl Validate for $ty {
                fn validate_with(&self, _ctx: &mut ValidationContext) -> Flow {
                    Ok(())
                }
            }
        )+
    };
}

impl_leaf!(String, bool, i32, i64, u32, u64, f64);

/// Scalars that can be checked for presence.
///
/// Strings count as absent when empty; FHIR forbids empty primitive strings.
/// Numbers and booleans are present whenever they are `Some`, so `0` and
/// `false` are legitimate values.
pub trait Presence {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for bool {}
impl Presence for i32 {}
impl Presence for i64 {}
impl Presence for u32 {}
impl Presence for u64 {}
impl Presence for f64 {}

/// A sum type standing in for a FHIR `x[x]` choice group.
pub trait Choice: Validate {
    /// Element name reported when a required group has no alternative set.
    const REQUIRED_NAME: &'static str;
}

/// Mutable state of one validation run.
#[derive(Debug)]
pub struct ValidationContext {
    mode: ValidationMode,
    max_issues: usize,
    path: Vec<PathSegment>,
    errors: Vec<ValidationError>,
}

impl ValidationContext {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            max_issues: usize::MAX,
            path: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Stop collecting once this many violations were recorded.
    pub fn with_max_issues(mut self, max_issues: usize) -> Self {
        self.max_issues = max_issues.max(1);
        self
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Record a violation at the current path.
    pub fn report(&mut self, kind: ValidationErrorKind) -> Flow {
        self.errors
            .push(ValidationError::new(kind).with_context(self.path.clone()));

        if self.mode == ValidationMode::FailFast || self.errors.len() >= self.max_issues {
            Err(Halt)
        } else {
            Ok(())
        }
    }

    /// Run `f` with `segment` appended to the current path.
    pub fn within<F>(&mut self, segment: PathSegment, f: F) -> Flow
    where
        F: FnOnce(&mut Self) -> Flow,
    {
        self.path.push(segment);
        let flow = f(self);
        self.path.pop();
        flow
    }

    /// Descend into a populated child node.
    pub fn node<T: Validate + ?Sized>(&mut self, name: &'static str, value: &T) -> Flow {
        self.within(PathSegment::Field(name), |ctx| value.validate_with(ctx))
    }

    /// The resource-type tag must equal the canonical type name.
    pub fn discriminator(&mut self, expected: &'static str, actual: &str) -> Flow {
        if actual == expected {
            return Ok(());
        }
        self.report(ValidationErrorKind::InvalidDiscriminator {
            expected,
            actual: actual.to_string(),
        })
    }

    /// A required scalar must be present.
    pub fn required_value<T: Presence + ?Sized>(
        &mut self,
        name: &'static str,
        value: Option<&T>,
    ) -> Flow {
        match value {
            Some(v) if v.is_present() => Ok(()),
            _ => self.report(ValidationErrorKind::MissingField { name }),
        }
    }

    /// Shorthand for required string-typed primitives.
    pub fn required_str(&mut self, name: &'static str, value: &Option<String>) -> Flow {
        self.required_value(name, value.as_deref())
    }

    /// A required coded value; value-set enums are present whenever set.
    pub fn required_code<T>(&mut self, name: &'static str, value: &Option<T>) -> Flow {
        match value {
            Some(_) => Ok(()),
            None => self.report(ValidationErrorKind::MissingField { name }),
        }
    }

    /// A required nested node must be present and valid.
    pub fn required_node<T: Validate>(&mut self, name: &'static str, value: &Option<T>) -> Flow {
        match value {
            Some(v) => self.node(name, v),
            None => self.report(ValidationErrorKind::MissingField { name }),
        }
    }

    /// An optional nested node is validated only when present.
    pub fn optional_node<T: Validate>(&mut self, name: &'static str, value: &Option<T>) -> Flow {
        match value {
            Some(v) => self.node(name, v),
            None => Ok(()),
        }
    }

    /// A repeated field: minimum cardinality first, then each element.
    pub fn repeated<T: Validate>(&mut self, name: &'static str, items: &[T], min: usize) -> Flow {
        if items.len() < min {
            self.report(ValidationErrorKind::MinCardinality {
                name,
                min,
                actual: items.len(),
            })?;
        }
        for (idx, item) in items.iter().enumerate() {
            self.within(PathSegment::Index(name, idx), |ctx| item.validate_with(ctx))?;
        }
        Ok(())
    }

    /// A repeated primitive field: only the minimum cardinality applies.
    pub fn repeated_values<T>(&mut self, name: &'static str, items: &[T], min: usize) -> Flow {
        if items.len() < min {
            return self.report(ValidationErrorKind::MinCardinality {
                name,
                min,
                actual: items.len(),
            });
        }
        Ok(())
    }

    /// A required choice group. The populated alternative validates itself
    /// under its own element name.
    pub fn required_choice<T: Choice>(&mut self, value: &Option<T>) -> Flow {
        match value {
            Some(v) => v.validate_with(self),
            None => self.report(ValidationErrorKind::MissingField {
                name: T::REQUIRED_NAME,
            }),
        }
    }

    pub fn optional_choice<T: Choice>(&mut self, value: &Option<T>) -> Flow {
        match value {
            Some(v) => v.validate_with(self),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf {
        code: Option<String>,
    }

    impl Validate for Leaf {
        fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
            ctx.required_str("Code", &self.code)
        }
    }

    struct Branch {
        count: Option<u32>,
        leaves: Vec<Leaf>,
    }

    impl Validate for Branch {
        fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
            ctx.required_value("Count", self.count.as_ref())?;
            ctx.repeated("Leaf", &self.leaves, 1)
        }
    }

    struct Root {
        resource_type: String,
        branch: Option<Branch>,
        extra: Vec<Leaf>,
    }

    impl Validate for Root {
        fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
            ctx.discriminator("Root", &self.resource_type)?;
            ctx.required_node("Branch", &self.branch)?;
            ctx.repeated("Extra", &self.extra, 0)
        }
    }

    fn leaf(code: &str) -> Leaf {
        Leaf {
            code: Some(code.to_string()),
        }
    }

    fn valid_root() -> Root {
        Root {
            resource_type: "Root".to_string(),
            branch: Some(Branch {
                count: Some(0),
                leaves: vec![leaf("a"), leaf("b")],
            }),
            extra: vec![],
        }
    }

    #[test]
    fn test_valid_tree() {
        assert_eq!(valid_root().validate(), Ok(()));
        assert_eq!(valid_root().validate_all(), Ok(()));
    }

    #[test]
    fn test_zero_is_present() {
        let root = valid_root();
        assert_eq!(root.branch.as_ref().and_then(|b| b.count), Some(0));
        assert!(root.validate().is_ok());
    }

    #[test]
    fn test_empty_string_is_missing() {
        let mut root = valid_root();
        root.branch.as_mut().unwrap().leaves[1].code = Some(String::new());

        let err = root.validate().unwrap_err();
        assert_eq!(err.to_string(), "Branch: Leaf[1]: field 'Code' is required");
        assert_eq!(err.path(), "Branch.Leaf[1].Code");
    }

    #[test]
    fn test_missing_required_node() {
        let mut root = valid_root();
        root.branch = None;

        let err = root.validate().unwrap_err();
        assert_eq!(err.to_string(), "field 'Branch' is required");
    }

    #[test]
    fn test_cardinality_boundary() {
        let mut root = valid_root();
        root.branch.as_mut().unwrap().leaves.clear();

        let err = root.validate().unwrap_err();
        assert!(err.is_min_cardinality());
        assert_eq!(err.path(), "Branch.Leaf");

        root.branch.as_mut().unwrap().leaves.push(leaf("x"));
        assert!(root.validate().is_ok());
    }

    #[test]
    fn test_discriminator_checked_first() {
        let mut root = valid_root();
        root.resource_type = "Other".to_string();
        root.branch = None;

        let err = root.validate().unwrap_err();
        assert!(err.is_invalid_discriminator());
    }

    #[test]
    fn test_fail_fast_reports_first_in_declaration_order() {
        let root = Root {
            resource_type: "Root".to_string(),
            branch: Some(Branch {
                count: None,
                leaves: vec![],
            }),
            extra: vec![Leaf { code: None }],
        };

        let err = root.validate().unwrap_err();
        assert_eq!(err.path(), "Branch.Count");
    }

    #[test]
    fn test_exhaustive_collects_all_in_order() {
        let root = Root {
            resource_type: "Root".to_string(),
            branch: Some(Branch {
                count: None,
                leaves: vec![],
            }),
            extra: vec![Leaf { code: None }, leaf("ok"), Leaf { code: None }],
        };

        let errors = root.validate_all().unwrap_err();
        let paths: Vec<String> = errors.iter().map(|e| e.path()).collect();
        assert_eq!(
            paths,
            vec!["Branch.Count", "Branch.Leaf", "Extra[0].Code", "Extra[2].Code"]
        );
    }

    #[test]
    fn test_max_issues_caps_exhaustive_run() {
        let root = Root {
            resource_type: "Root".to_string(),
            branch: Some(Branch {
                count: None,
                leaves: vec![],
            }),
            extra: vec![Leaf { code: None }, Leaf { code: None }],
        };

        let mut ctx = ValidationContext::new(ValidationMode::Exhaustive).with_max_issues(2);
        assert_eq!(root.validate_with(&mut ctx), Err(Halt));
        assert_eq!(ctx.errors().len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let mut root = valid_root();
        root.extra.push(Leaf { code: None });

        let first = root.validate();
        let second = root.validate();
        assert_eq!(first, second);
        assert!(first.is_err());
    }
}
