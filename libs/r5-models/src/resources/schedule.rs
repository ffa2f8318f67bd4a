//! FHIR Schedule and Slot resources

use crate::datatypes::*;
use crate::value_sets::SlotStatus;
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A container for slots of time that may be available for booking appointments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Resource type - always "Schedule"
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

    /// External Ids for this item
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// Whether this schedule is in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// High-level category
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_category: Vec<CodeableConcept>,

    /// Specific service
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_type: Vec<CodeableReference>,

    /// Type of specialty needed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialty: Vec<CodeableConcept>,

    /// Human-readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Resource(s) that availability information is being provided for
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actor: Vec<Reference>,

    /// Period of time covered by schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planning_horizon: Option<Period>,

    /// Comments on availability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Schedule {
    pub const RESOURCE_TYPE: &'static str = "Schedule";

    pub fn new(actor: Reference) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            actor: vec![actor],
            ..Self::default()
        }
    }
}

impl Validate for Schedule {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.repeated("ServiceCategory", &self.service_category, 0)?;
        ctx.repeated("ServiceType", &self.service_type, 0)?;
        ctx.repeated("Specialty", &self.specialty, 0)?;
        ctx.repeated("Actor", &self.actor, 1)?;
        ctx.optional_node("PlanningHorizon", &self.planning_horizon)
    }
}

impl TypedResource for Schedule {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

/// A slot of time on a schedule that may be available for booking appointments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Resource type - always "Slot"
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

    /// External Ids for this item
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// A broad categorization of the service that is to be performed during this appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_category: Vec<CodeableConcept>,

    /// The type of appointments that can be booked into this slot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_type: Vec<CodeableReference>,

    /// The specialty of a practitioner that would be required to perform the service requested in this appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialty: Vec<CodeableConcept>,

    /// The style of appointment or patient that may be booked in the slot (not service type)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub appointment_type: Vec<CodeableConcept>,

    /// The schedule resource that this slot defines an interval of status information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Reference>,

    /// busy | free | busy-unavailable | busy-tentative | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SlotStatus>,

    /// Date/Time that the slot is to begin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Date/Time that the slot is to conclude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    /// This slot has already been overbooked, appointments are unlikely to be accepted for this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overbooked: Option<bool>,

    /// Comments on the slot to describe any extended information. Such as custom constraints on the slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Slot {
    pub const RESOURCE_TYPE: &'static str = "Slot";

    pub fn new(
        schedule: Reference,
        status: SlotStatus,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            schedule: Some(schedule),
            status: Some(status),
            start: Some(start.into()),
            end: Some(end.into()),
            ..Self::default()
        }
    }
}

impl Validate for Slot {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.repeated("ServiceCategory", &self.service_category, 0)?;
        ctx.repeated("ServiceType", &self.service_type, 0)?;
        ctx.repeated("Specialty", &self.specialty, 0)?;
        ctx.repeated("AppointmentType", &self.appointment_type, 0)?;
        ctx.required_node("Schedule", &self.schedule)?;
        ctx.required_code("Status", &self.status)?;
        ctx.required_str("Start", &self.start)?;
        ctx.required_str("End", &self.end)
    }
}

impl TypedResource for Slot {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}
