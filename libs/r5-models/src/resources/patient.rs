//! FHIR Patient resource

use crate::datatypes::*;
use crate::value_sets::{AdministrativeGender, LinkType};
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;

choice_type! {
    /// Patient.deceased[x]
    PatientDeceased {
        Boolean(bool) => "deceasedBoolean" as "DeceasedBoolean",
        DateTime(String) => "deceasedDateTime" as "DeceasedDateTime",
    }
}

choice_type! {
    /// Patient.multipleBirth[x]
    PatientMultipleBirth {
        Boolean(bool) => "multipleBirthBoolean" as "MultipleBirthBoolean",
        Integer(i32) => "multipleBirthInteger" as "MultipleBirthInteger",
    }
}

/// Demographics and other administrative information about an individual or
/// animal receiving care or other health-related services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Resource type - always "Patient"
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

    /// An identifier for this patient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// Whether this patient's record is in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// A name associated with the patient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    /// A contact detail for the individual
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,

    /// male | female | other | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// The date of birth for the individual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Indicates if the individual is deceased or not
    #[serde(flatten, deserialize_with = "PatientDeceased::deserialize_flat")]
    pub deceased: Option<PatientDeceased>,

    /// An address for the individual
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,

    /// Marital (civil) status of a patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<CodeableConcept>,

    /// Whether patient is part of a multiple birth
    #[serde(flatten, deserialize_with = "PatientMultipleBirth::deserialize_flat")]
    pub multiple_birth: Option<PatientMultipleBirth>,

    /// Image of the patient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<Attachment>,

    /// A contact party (e.g. guardian, partner, friend) for the patient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<PatientContact>,

    /// A language which may be used to communicate with the patient about his or her health
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub communication: Vec<PatientCommunication>,

    /// Patient's nominated primary care provider
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub general_practitioner: Vec<Reference>,

    /// Organization that is the custodian of the patient record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,

    /// Link to a Patient or RelatedPerson resource that concerns the same actual individual
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<PatientLink>,
}

/// A contact party (e.g. guardian, partner, friend) for the patient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The kind of personal relationship
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationship: Vec<CodeableConcept>,

    /// The kind of functional role
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<CodeableConcept>,

    /// A name associated with the contact person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,

    /// Additional names for the contact person
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_name: Vec<HumanName>,

    /// A contact detail for the person
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,

    /// Address for the contact person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Additional addresses for the contact person
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_address: Vec<Address>,

    /// male | female | other | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// Organization that is associated with the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// The period during which this contact person or organization is valid to be contacted relating to this patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// A language which may be used to communicate with the patient about his or her health
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientCommunication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The language which can be used to communicate with the patient about his or her health
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeableConcept>,

    /// Language preference indicator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
}

/// Link to a Patient or RelatedPerson resource that concerns the same actual individual
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The other patient or related person resource that the link refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Reference>,

    /// replaced-by | replaces | refer | seealso
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<LinkType>,
}

impl Patient {
    pub const RESOURCE_TYPE: &'static str = "Patient";

    pub fn new() -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            ..Self::default()
        }
    }
}

impl Validate for Patient {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.repeated("Name", &self.name, 0)?;
        ctx.repeated("Telecom", &self.telecom, 0)?;
        ctx.optional_choice(&self.deceased)?;
        ctx.repeated("Address", &self.address, 0)?;
        ctx.optional_node("MaritalStatus", &self.marital_status)?;
        ctx.optional_choice(&self.multiple_birth)?;
        ctx.repeated("Photo", &self.photo, 0)?;
        ctx.repeated("Contact", &self.contact, 0)?;
        ctx.repeated("Communication", &self.communication, 0)?;
        ctx.repeated("GeneralPractitioner", &self.general_practitioner, 0)?;
        ctx.optional_node("ManagingOrganization", &self.managing_organization)?;
        ctx.repeated("Link", &self.link, 0)
    }
}

impl Validate for PatientContact {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Relationship", &self.relationship, 0)?;
        ctx.repeated("Role", &self.role, 0)?;
        ctx.optional_node("Name", &self.name)?;
        ctx.repeated("AdditionalName", &self.additional_name, 0)?;
        ctx.repeated("Telecom", &self.telecom, 0)?;
        ctx.optional_node("Address", &self.address)?;
        ctx.repeated("AdditionalAddress", &self.additional_address, 0)?;
        ctx.optional_node("Organization", &self.organization)?;
        ctx.optional_node("Period", &self.period)
    }
}

impl Validate for PatientCommunication {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_node("Language", &self.language)
    }
}

impl Validate for PatientLink {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_node("Other", &self.other)?;
        ctx.required_code("Type", &self.type_)
    }
}

impl TypedResource for Patient {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}
