//! FHIR Organization resource

use crate::datatypes::*;
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A formally or informally recognized grouping of people or organizations
/// formed for the purpose of achieving some form of collective action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Resource type - always "Organization"
    #[serde(default)]
    pub resource_type: String,

    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Metadata about the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// A set of rules under which this content was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    /// Language of the resource content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Text summary of the resource, for human interpretation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    /// Contained, inline Resources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Value>,

    /// Additional content defined by implementations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Extensions that cannot be ignored
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Identifies this organization across multiple systems
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// Whether the organization's record is still in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Kind of organization
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub type_: Vec<CodeableConcept>,

    /// Name used for the organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A list of alternate names that the organization is known as, or was known as in the past
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias: Vec<String>,

    /// Additional details about the Organization that could be displayed as further information to identify the Organization beyond its name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Official contact details for the Organization
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<ExtendedContactDetail>,

    /// The organization of which this organization forms a part
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Reference>,

    /// Technical endpoints providing access to services operated for the organization
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoint: Vec<Reference>,

    /// Qualifications, certifications, accreditations, licenses, training, etc. pertaining to the provision of care
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualification: Vec<OrganizationQualification>,
}

/// Qualifications, certifications, accreditations, licenses, training, etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationQualification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// An identifier for this qualification for the organization
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// Coded representation of the qualification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Period during which the qualification is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Organization that regulates and issues the qualification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Reference>,
}

impl Organization {
    pub const RESOURCE_TYPE: &'static str = "Organization";

    pub fn new() -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            ..Self::default()
        }
    }
}

impl Validate for Organization {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.repeated("Type", &self.type_, 0)?;
        ctx.repeated("Contact", &self.contact, 0)?;
        ctx.optional_node("PartOf", &self.part_of)?;
        ctx.repeated("Endpoint", &self.endpoint, 0)?;
        ctx.repeated("Qualification", &self.qualification, 0)
    }
}

impl Validate for OrganizationQualification {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.required_node("Code", &self.code)?;
        ctx.optional_node("Period", &self.period)?;
        ctx.optional_node("Issuer", &self.issuer)
    }
}

impl TypedResource for Organization {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_organization_is_valid() {
        let org = Organization::new();
        assert_eq!(org.active, None);
        assert!(org.validate().is_ok());
    }

    #[test]
    fn test_deserialize_organization() {
        let org: Organization = serde_json::from_value(json!({
            "resourceType": "Organization",
            "id": "hl7",
            "active": true,
            "name": "Health Level Seven International",
            "alias": ["HL7 International"],
            "contact": [{
                "telecom": [{"system": "phone", "value": "(+1) 734-677-7777"}],
                "address": {"line": ["3300 Washtenaw Avenue, Suite 227"], "city": "Ann Arbor"}
            }]
        }))
        .unwrap();

        assert_eq!(org.name.as_deref(), Some("Health Level Seven International"));
        assert_eq!(org.contact[0].telecom.len(), 1);
        assert!(org.validate().is_ok());
    }

    #[test]
    fn test_qualification_requires_code() {
        let mut org = Organization::new();
        org.qualification.push(OrganizationQualification::default());

        let err = org.validate().unwrap_err();
        assert_eq!(err.to_string(), "Qualification[0]: field 'Code' is required");
    }

    #[test]
    fn test_missing_resource_type_is_a_discriminator_error() {
        let org: Organization = serde_json::from_value(json!({"name": "Acme"})).unwrap();

        let err = org.validate().unwrap_err();
        assert!(err.is_invalid_discriminator());
        assert_eq!(
            err.to_string(),
            "invalid resourceType: expected 'Organization', got ''"
        );
    }
}
