use std::fmt;
use thiserror::Error;

/// One step on the way from the root node to a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A singular field, e.g. `Substance`
    Field(&'static str),
    /// An element of a repeated field, e.g. `Strength[0]`
    Index(&'static str, usize),
}

impl PathSegment {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Field(name) | Self::Index(name, _) => name,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{}", name),
            Self::Index(name, idx) => write!(f, "{}[{}]", name, idx),
        }
    }
}

/// The reason a node failed its shape contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("invalid resourceType: expected '{expected}', got '{actual}'")]
    InvalidDiscriminator {
        expected: &'static str,
        actual: String,
    },

    #[error("field '{name}' is required")]
    MissingField { name: &'static str },

    #[error("field '{name}' must have at least {min} element(s), found {actual}")]
    MinCardinality {
        name: &'static str,
        min: usize,
        actual: usize,
    },
}

impl ValidationErrorKind {
    /// Name of the offending field itself (the leaf of the path).
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidDiscriminator { .. } => "ResourceType",
            Self::MissingField { name } | Self::MinCardinality { name, .. } => name,
        }
    }
}

/// A structural validation failure, qualified by the path to the node that
/// reported it.
///
/// `Display` renders the context chain followed by the reason:
/// `Substance: Strength[0]: ReferenceStrength[0]: field 'StrengthRatio' is required`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    context: Vec<PathSegment>,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            context: Vec::new(),
            kind,
        }
    }

    pub fn missing_field(name: &'static str) -> Self {
        Self::new(ValidationErrorKind::MissingField { name })
    }

    pub fn min_cardinality(name: &'static str, min: usize, actual: usize) -> Self {
        Self::new(ValidationErrorKind::MinCardinality { name, min, actual })
    }

    pub fn invalid_discriminator(expected: &'static str, actual: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidDiscriminator {
            expected,
            actual: actual.into(),
        })
    }

    /// Attach the segments that led to this error.
    pub fn with_context(mut self, context: Vec<PathSegment>) -> Self {
        self.context = context;
        self
    }

    /// Prefix a single segment, as a parent does when propagating a child's error.
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.context.insert(0, segment);
        self
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// Segments from the root down to (but excluding) the offending field.
    pub fn context(&self) -> &[PathSegment] {
        &self.context
    }

    /// Dotted path including the offending field,
    /// e.g. `RouteOfAdministration[0].TargetSpecies[1].Code`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.context {
            path.push_str(&segment.to_string());
            path.push('.');
        }
        path.push_str(self.kind.field());
        path
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::MissingField { .. })
    }

    pub fn is_min_cardinality(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::MinCardinality { .. })
    }

    pub fn is_invalid_discriminator(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::InvalidDiscriminator { .. })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.context {
            write!(f, "{}: ", segment)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ValidationError {}

/// Every violation gathered by an exhaustive run, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} validation error(s), first: {}", .0.len(), first_message(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn first_message(errors: &[ValidationError]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&ValidationError> {
        self.0.first()
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_chains_context() {
        let err = ValidationError::missing_field("StrengthRatio").with_context(vec![
            PathSegment::Field("Substance"),
            PathSegment::Index("Strength", 0),
            PathSegment::Index("ReferenceStrength", 0),
        ]);

        assert_eq!(
            err.to_string(),
            "Substance: Strength[0]: ReferenceStrength[0]: field 'StrengthRatio' is required"
        );
        assert_eq!(
            err.path(),
            "Substance.Strength[0].ReferenceStrength[0].StrengthRatio"
        );
    }

    #[test]
    fn test_within_prefixes() {
        let err = ValidationError::missing_field("Code")
            .within(PathSegment::Index("TargetSpecies", 1))
            .within(PathSegment::Index("RouteOfAdministration", 0));

        assert_eq!(err.path(), "RouteOfAdministration[0].TargetSpecies[1].Code");
    }

    #[test]
    fn test_discriminator_message() {
        let err = ValidationError::invalid_discriminator("AppointmentResponse", "Appointment");
        assert_eq!(
            err.to_string(),
            "invalid resourceType: expected 'AppointmentResponse', got 'Appointment'"
        );
        assert_eq!(err.path(), "ResourceType");
        assert!(err.is_invalid_discriminator());
    }

    #[test]
    fn test_cardinality_message() {
        let err = ValidationError::min_cardinality("ConnectionType", 1, 0);
        assert_eq!(
            err.to_string(),
            "field 'ConnectionType' must have at least 1 element(s), found 0"
        );
    }
}
