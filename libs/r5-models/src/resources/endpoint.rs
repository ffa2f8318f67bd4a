//! FHIR Endpoint resource

use crate::datatypes::*;
use crate::value_sets::EndpointStatus;
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The technical details of an endpoint that can be used for electronic
/// services, such as for web services providing XDS.b, a REST endpoint for
/// another FHIR server, or a s/Mime email address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Resource type - always "Endpoint"
    #[serde(default)]
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Identifies this endpoint across multiple systems
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// active | limited | suspended | error | off | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EndpointStatus>,

    /// Protocol/Profile/Standard to be used with this endpoint connection
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connection_type: Vec<CodeableConcept>,

    /// A name that this endpoint can be identified by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Additional details about the endpoint that could be displayed as further information to identify the description beyond its name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The type of environment(s) exposed at this endpoint
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment_type: Vec<CodeableConcept>,

    /// Organization that manages this endpoint (might not be the organization that exposes the endpoint)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,

    /// Contact details for source (e.g. troubleshooting)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<ContactPoint>,

    /// Interval the endpoint is expected to be operational
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Set of payloads that are provided by this endpoint
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<EndpointPayload>,

    /// The technical base address for connecting to this endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Usage depends on the channel type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<String>,
}

/// Set of payloads that are provided by this endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The type of content that may be used at this endpoint (e.g. XDS Discharge summaries)
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub type_: Vec<CodeableConcept>,

    /// Mimetype to send. If not specified, the content could be anything (including no payload, if the connectionType defined this)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mime_type: Vec<String>,
}

impl Endpoint {
    pub const RESOURCE_TYPE: &'static str = "Endpoint";

    pub fn new(
        status: EndpointStatus,
        connection_type: CodeableConcept,
        address: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            status: Some(status),
            connection_type: vec![connection_type],
            address: Some(address.into()),
            ..Self::default()
        }
    }
}

impl Validate for Endpoint {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.required_code("Status", &self.status)?;
        ctx.repeated("ConnectionType", &self.connection_type, 1)?;
        ctx.repeated("EnvironmentType", &self.environment_type, 0)?;
        ctx.optional_node("ManagingOrganization", &self.managing_organization)?;
        ctx.repeated("Contact", &self.contact, 0)?;
        ctx.optional_node("Period", &self.period)?;
        ctx.repeated("Payload", &self.payload, 0)?;
        ctx.required_str("Address", &self.address)
    }
}

impl Validate for EndpointPayload {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Type", &self.type_, 0)
    }
}

impl TypedResource for Endpoint {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}
