//! FHIR R5 resources
//!
//! Each resource kind carries a `resource_type` tag that must equal its
//! canonical name. [`Resource`] dispatches an untyped JSON document to the
//! matching kind by that tag.

mod administrable_product_definition;
mod appointment;
mod bundle;
mod condition;
mod endpoint;
mod ingredient;
mod organization;
mod patient;
mod schedule;

pub use administrable_product_definition::*;
pub use appointment::*;
pub use bundle::*;
pub use condition::*;
pub use endpoint::*;
pub use ingredient::*;
pub use organization::*;
pub use patient::*;
pub use schedule::*;

use crate::error::{Error, Result};
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

macro_rules! resource_kinds {
    ($($kind:ident),+ $(,)?) => {
        /// Any supported resource kind.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Resource {
            $( $kind($kind), )+
        }

        /// Canonical names of every supported resource kind.
        pub const RESOURCE_TYPES: &[&str] = &[$($kind::RESOURCE_TYPE),+];

        impl Resource {
            /// Deserialize a JSON document into the kind named by its
            /// `resourceType`.
            pub fn from_value(value: Value) -> Result<Self> {
                let resource_type = value
                    .as_object()
                    .ok_or(Error::ExpectedObject)?
                    .get("resourceType")
                    .and_then(Value::as_str)
                    .ok_or(Error::MissingResourceType)?
                    .to_string();

                Self::from_value_as(&resource_type, value)
            }

            /// Deserialize a JSON document into a given kind regardless of its
            /// tag. A mismatched tag surfaces later as a discriminator error.
            pub fn from_value_as(resource_type: &str, value: Value) -> Result<Self> {
                if !value.is_object() {
                    return Err(Error::ExpectedObject);
                }
                match resource_type {
                    $( $kind::RESOURCE_TYPE => Ok(Resource::$kind(serde_json::from_value(value)?)), )+
                    other => Err(Error::UnknownResourceType(other.to_string())),
                }
            }

            pub fn resource_type(&self) -> &str {
                match self {
                    $( Resource::$kind(r) => &r.resource_type, )+
                }
            }

            fn as_validate(&self) -> &dyn Validate {
                match self {
                    $( Resource::$kind(r) => r, )+
                }
            }
        }

        $(
            impl From<$kind> for Resource {
                fn from(resource: $kind) -> Self {
                    Resource::$kind(resource)
                }
            }
        )+
    };
}

resource_kinds!(
    AdministrableProductDefinition,
    Appointment,
    AppointmentResponse,
    Bundle,
    Condition,
    Endpoint,
    Ingredient,
    Organization,
    Patient,
    Schedule,
    Slot,
);

impl Resource {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn is_supported(resource_type: &str) -> bool {
        RESOURCE_TYPES.contains(&resource_type)
    }
}

impl Validate for Resource {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        self.as_validate().validate_with(ctx)
    }
}

impl TypedResource for Resource {
    fn resource_type(&self) -> &str {
        Resource::resource_type(self)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Resource::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_on_resource_type() {
        let resource = Resource::from_json_str(
            r#"{"resourceType": "Organization", "name": "Acme"}"#,
        )
        .unwrap();

        assert_eq!(resource.resource_type(), "Organization");
        match &resource {
            Resource::Organization(org) => assert_eq!(org.name.as_deref(), Some("Acme")),
            other => panic!("expected Organization, got {:?}", other),
        }
        assert!(resource.validate().is_ok());
    }

    #[test]
    fn test_unknown_resource_type() {
        let err = Resource::from_value(json!({"resourceType": "Observation"})).unwrap_err();
        assert!(matches!(err, Error::UnknownResourceType(ref t) if t == "Observation"));
    }

    #[test]
    fn test_missing_resource_type() {
        assert!(matches!(
            Resource::from_value(json!({"name": "Acme"})),
            Err(Error::MissingResourceType)
        ));
        assert!(matches!(
            Resource::from_value(json!(["Organization"])),
            Err(Error::ExpectedObject)
        ));
    }

    #[test]
    fn test_forced_kind_reports_tag_mismatch() {
        let value = json!({
            "resourceType": "Appointment",
            "appointment": {"reference": "Appointment/example"},
            "participantStatus": "accepted"
        });

        let resource = Resource::from_value_as("AppointmentResponse", value).unwrap();
        assert_eq!(resource.resource_type(), "Appointment");
        let err = resource.validate().unwrap_err();
        assert!(err.is_invalid_discriminator());
    }

    #[test]
    fn test_serializes_without_wrapper() {
        let resource = Resource::from(Organization::new());
        assert_eq!(
            resource.to_value().unwrap(),
            json!({"resourceType": "Organization"})
        );
    }

    #[test]
    fn test_resource_types_listed() {
        assert_eq!(RESOURCE_TYPES.len(), 11);
        assert!(Resource::is_supported("AdministrableProductDefinition"));
        assert!(!Resource::is_supported("Observation"));
    }

    #[test]
    fn test_bundle_entries_dispatch() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "type": "collection",
            "entry": [
                {"resource": {"resourceType": "Slot"}},
                {"resource": {"resourceType": "Organization"}}
            ]
        }))
        .unwrap();

        let results: Vec<bool> = bundle
            .resources()
            .map(|(_, value)| Resource::from_value(value.clone()).unwrap().validate().is_ok())
            .collect();
        assert_eq!(results, vec![false, true]);
    }
}
