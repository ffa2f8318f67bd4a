use crate::{
    ConfigError, Flow, Validate, ValidationContext, ValidationError, ValidationErrorKind,
    ValidationErrors, ValidationMode, ValidationPlan, ValidatorConfig,
};
use serde_json::Value;

/// A node that is an independently addressable resource.
pub trait TypedResource: Validate {
    /// The `resourceType` tag as carried by this instance.
    fn resource_type(&self) -> &str;
}

/// Reusable validator - owns the compiled plan
#[derive(Debug, Clone)]
pub struct Validator {
    plan: ValidationPlan,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            plan: ValidationPlan {
                mode: ValidationMode::FailFast,
                max_issues: crate::config::DEFAULT_MAX_ISSUES,
            },
        }
    }
}

impl Validator {
    pub fn new(plan: ValidationPlan) -> Self {
        Self { plan }
    }

    pub fn from_config(config: &ValidatorConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.compile()?))
    }

    pub fn plan(&self) -> &ValidationPlan {
        &self.plan
    }

    /// Run the plan over any node and report the structural errors found.
    pub fn check<T: Validate + ?Sized>(&self, node: &T) -> Result<(), ValidationErrors> {
        let errors = self.run(node);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub fn validate<T: Validate + ?Sized>(&self, node: &T) -> ValidationOutcome {
        ValidationOutcome::from_errors(None, self.run(node))
    }

    pub fn validate_resource<R: TypedResource + ?Sized>(&self, resource: &R) -> ValidationOutcome {
        let resource_type = resource.resource_type();
        let errors = self.run(resource);
        tracing::debug!(
            resource_type,
            mode = ?self.plan.mode,
            issues = errors.len(),
            "Validated resource"
        );
        ValidationOutcome::from_errors(Some(resource_type.to_string()), errors)
    }

    pub fn validate_batch<R: TypedResource>(&self, resources: &[R]) -> Vec<ValidationOutcome> {
        resources
            .iter()
            .map(|r| self.validate_resource(r))
            .collect()
    }

    fn run<T: Validate + ?Sized>(&self, node: &T) -> Vec<ValidationError> {
        let mut ctx =
            ValidationContext::new(self.plan.mode).with_max_issues(self.plan.max_issues);
        let flow: Flow = node.validate_with(&mut ctx);
        if flow.is_err() {
            tracing::trace!(mode = ?self.plan.mode, "Validation halted early");
        }
        ctx.into_errors()
    }
}

/// Validation result for a single resource
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub resource_type: Option<String>,
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationOutcome {
    pub fn success(resource_type: Option<String>) -> Self {
        Self {
            resource_type,
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn from_errors(resource_type: Option<String>, errors: Vec<ValidationError>) -> Self {
        let issues: Vec<ValidationIssue> = errors
            .iter()
            .map(|err| ValidationIssue::from_error(resource_type.as_deref(), err))
            .collect();
        Self {
            resource_type,
            valid: issues.is_empty(),
            issues,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.valid
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error || i.severity == IssueSeverity::Fatal)
            .count()
    }

    pub fn to_operation_outcome(&self) -> Value {
        if self.issues.is_empty() {
            return serde_json::json!({
                "resourceType": "OperationOutcome",
                "issue": [{
                    "severity": "information",
                    "code": IssueCode::Informational.to_string(),
                    "diagnostics": "No issues detected during validation"
                }]
            });
        }

        serde_json::json!({
            "resourceType": "OperationOutcome",
            "issue": self.issues.iter().map(|i| i.to_json()).collect::<Vec<_>>()
        })
    }
}

/// Individual validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: IssueCode,
    pub diagnostics: String,
    pub location: Option<String>,
    pub expression: Option<Vec<String>>,
}

impl ValidationIssue {
    pub fn error(code: IssueCode, diagnostics: String) -> Self {
        Self {
            severity: IssueSeverity::Error,
            code,
            diagnostics,
            location: None,
            expression: None,
        }
    }

    pub fn from_error(resource_type: Option<&str>, err: &ValidationError) -> Self {
        let code = match err.kind() {
            ValidationErrorKind::InvalidDiscriminator { .. } => IssueCode::Invalid,
            ValidationErrorKind::MissingField { .. } => IssueCode::Required,
            ValidationErrorKind::MinCardinality { .. } => IssueCode::Structure,
        };
        let location = match resource_type {
            Some(rt) if !rt.is_empty() => format!("{}.{}", rt, err.path()),
            _ => err.path(),
        };

        Self::error(code, err.to_string())
            .with_location(location.clone())
            .with_expression(vec![location])
    }

    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_expression(mut self, expression: Vec<String>) -> Self {
        self.expression = Some(expression);
        self
    }

    fn to_json(&self) -> Value {
        let mut issue = serde_json::json!({
            "severity": self.severity.to_string().to_lowercase(),
            "code": self.code.to_string(),
            "diagnostics": self.diagnostics,
        });

        if let Some(ref loc) = self.location {
            issue["location"] = serde_json::json!([loc]);
        }

        if let Some(ref expr) = self.expression {
            issue["expression"] = serde_json::json!(expr);
        }

        issue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fatal => write!(f, "Fatal"),
            Self::Error => write!(f, "Error"),
            Self::Warning => write!(f, "Warning"),
            Self::Information => write!(f, "Information"),
        }
    }
}

/// The subset of the FHIR `issue-type` value set structural validation emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    Invalid,
    Structure,
    Required,
    Informational,
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Invalid => "invalid",
            Self::Structure => "structure",
            Self::Required => "required",
            Self::Informational => "informational",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationContext;

    struct Thing {
        resource_type: String,
        name: Option<String>,
        tags: Vec<Tag>,
    }

    struct Tag {
        value: Option<String>,
    }

    impl Validate for Tag {
        fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
            ctx.required_str("Value", &self.value)
        }
    }

    impl Validate for Thing {
        fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
            ctx.discriminator("Thing", &self.resource_type)?;
            ctx.required_str("Name", &self.name)?;
            ctx.repeated("Tag", &self.tags, 1)
        }
    }

    impl TypedResource for Thing {
        fn resource_type(&self) -> &str {
            &self.resource_type
        }
    }

    fn broken() -> Thing {
        Thing {
            resource_type: "Thing".to_string(),
            name: None,
            tags: vec![Tag { value: None }],
        }
    }

    #[test]
    fn test_fail_fast_outcome() {
        let outcome = Validator::default().validate_resource(&broken());

        assert!(outcome.has_errors());
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.issues[0].code, IssueCode::Required);
        assert_eq!(outcome.issues[0].location.as_deref(), Some("Thing.Name"));
    }

    #[test]
    fn test_exhaustive_outcome() {
        let validator = Validator::from_config(&ValidatorConfig::exhaustive()).unwrap();
        let outcome = validator.validate_resource(&broken());

        assert_eq!(outcome.error_count(), 2);
        assert_eq!(
            outcome.issues[1].location.as_deref(),
            Some("Thing.Tag[0].Value")
        );
    }

    #[test]
    fn test_max_issues_respected() {
        let config = ValidatorConfig::builder()
            .mode(ValidationMode::Exhaustive)
            .max_issues(1)
            .build();
        let validator = Validator::from_config(&config).unwrap();

        assert_eq!(validator.check(&broken()).unwrap_err().len(), 1);
    }

    #[test]
    fn test_operation_outcome_conversion() {
        let outcome = Validator::default().validate_resource(&broken());

        let op_outcome = outcome.to_operation_outcome();
        assert_eq!(op_outcome["resourceType"], "OperationOutcome");
        assert_eq!(op_outcome["issue"][0]["severity"], "error");
        assert_eq!(op_outcome["issue"][0]["code"], "required");
        assert_eq!(op_outcome["issue"][0]["expression"][0], "Thing.Name");
    }

    #[test]
    fn test_valid_operation_outcome() {
        let thing = Thing {
            resource_type: "Thing".to_string(),
            name: Some("x".to_string()),
            tags: vec![Tag {
                value: Some("y".to_string()),
            }],
        };
        let outcome = Validator::default().validate_resource(&thing);

        assert!(outcome.valid);
        assert_eq!(
            outcome.to_operation_outcome()["issue"][0]["severity"],
            "information"
        );
    }

    #[test]
    fn test_discriminator_issue_code() {
        let mut thing = broken();
        thing.resource_type = "Other".to_string();
        let outcome = Validator::default().validate_resource(&thing);

        assert_eq!(outcome.issues[0].code, IssueCode::Invalid);
        assert_eq!(
            outcome.issues[0].location.as_deref(),
            Some("Other.ResourceType")
        );
    }
}
