//! FHIR Appointment and AppointmentResponse resources

use crate::datatypes::*;
use crate::value_sets::{AppointmentResponseStatus, AppointmentStatus, ParticipationStatus};
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A booking of a healthcare event among patient(s), practitioner(s), related
/// person(s) and/or device(s) for a specific date/time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Resource type - always "Appointment"
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

    /// proposed | pending | booked | arrived | fulfilled | cancelled | noshow | entered-in-error | checked-in | waitlist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,

    /// The coded reason for the appointment being cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<CodeableConcept>,

    /// Classification when becoming an encounter
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<CodeableConcept>,

    /// A broad categorization of the service that is to be performed during this appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_category: Vec<CodeableConcept>,

    /// The specific service that is to be performed during this appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_type: Vec<CodeableReference>,

    /// The specialty of a practitioner that would be required to perform the service requested in this appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialty: Vec<CodeableConcept>,

    /// The style of appointment or patient that has been booked in the slot (not service type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<CodeableConcept>,

    /// Reason this appointment is scheduled
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason: Vec<CodeableReference>,

    /// Used to make informed decisions if needing to re-prioritize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    /// Shown on a subject line in a meeting request, or appointment list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Appointment replaced by this Appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replaces: Vec<Reference>,

    /// Connection details of a virtual service (e.g. conference call)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_service: Vec<VirtualServiceDetail>,

    /// Additional information to support the appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_information: Vec<Reference>,

    /// The previous appointment in a series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_appointment: Option<Reference>,

    /// The originating appointment in a recurring set of appointments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originating_appointment: Option<Reference>,

    /// When appointment is to take place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// When appointment is to conclude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    /// Can be less than start/end (e.g. estimate)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_duration: Option<u32>,

    /// Potential date/time interval(s) requested to allocate the appointment within
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requested_period: Vec<Period>,

    /// The slots that this appointment is filling
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slot: Vec<Reference>,

    /// The set of accounts that may be used for billing for this Appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub account: Vec<Reference>,

    /// The date that this appointment was initially created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// When the appointment was cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<String>,

    /// Additional comments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,

    /// Detailed information and instructions for the patient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patient_instruction: Vec<CodeableReference>,

    /// The request this appointment is allocated to assess
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub based_on: Vec<Reference>,

    /// The patient or group associated with the appointment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Participants involved in appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant: Vec<AppointmentParticipant>,

    /// The sequence number in the recurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_id: Option<u32>,

    /// Indicates that this appointment varies from a recurrence pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence_changed: Option<bool>,

    /// Details of the recurrence pattern/template used to generate occurrences
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recurrence_template: Vec<AppointmentRecurrenceTemplate>,
}

/// Participants involved in appointment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentParticipant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Role of participant in the appointment
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub type_: Vec<CodeableConcept>,

    /// Participation period of the actor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// The individual, device, location, or service participating in the appointment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Reference>,

    /// The participant is required to attend (optional when false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// accepted | declined | tentative | needs-action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ParticipationStatus>,
}

/// Details of the recurrence pattern/template used to generate occurrences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecurrenceTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The timezone of the occurrences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<CodeableConcept>,

    /// The frequency of the recurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_type: Option<CodeableConcept>,

    /// The date when the recurrence should end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_occurrence_date: Option<String>,

    /// The number of planned occurrences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence_count: Option<u32>,

    /// Specific dates for a recurring set of appointments (no template)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occurrence_date: Vec<String>,

    /// Information about weekly recurring appointments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_template: Option<AppointmentWeeklyTemplate>,

    /// Information about monthly recurring appointments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_template: Option<AppointmentMonthlyTemplate>,

    /// Information about yearly recurring appointments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_template: Option<AppointmentYearlyTemplate>,

    /// Any dates that should be excluded from the series
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluding_date: Vec<String>,

    /// Any recurrence IDs that should be excluded from the recurrence
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluding_recurrence_id: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentWeeklyTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thursday: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub friday: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturday: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunday: Option<bool>,

    /// Recurs every nth week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_interval: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentMonthlyTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Recurs on a specific day of the month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,

    /// Indicates which week of the month the appointment should occur
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nth_week_of_month: Option<Coding>,

    /// Indicates which day of the week the appointment should occur
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Coding>,

    /// Recurs every nth month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_interval: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentYearlyTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Recurs every nth year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_interval: Option<u32>,
}

impl Appointment {
    pub const RESOURCE_TYPE: &'static str = "Appointment";

    pub fn new(status: AppointmentStatus, participant: AppointmentParticipant) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            status: Some(status),
            participant: vec![participant],
            ..Self::default()
        }
    }
}

impl AppointmentParticipant {
    pub fn new(actor: Reference, status: ParticipationStatus) -> Self {
        Self {
            actor: Some(actor),
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Validate for Appointment {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.required_code("Status", &self.status)?;
        ctx.optional_node("CancellationReason", &self.cancellation_reason)?;
        ctx.repeated("Class", &self.class, 0)?;
        ctx.repeated("ServiceCategory", &self.service_category, 0)?;
        ctx.repeated("ServiceType", &self.service_type, 0)?;
        ctx.repeated("Specialty", &self.specialty, 0)?;
        ctx.optional_node("AppointmentType", &self.appointment_type)?;
        ctx.repeated("Reason", &self.reason, 0)?;
        ctx.optional_node("Priority", &self.priority)?;
        ctx.repeated("Replaces", &self.replaces, 0)?;
        ctx.repeated("VirtualService", &self.virtual_service, 0)?;
        ctx.repeated("SupportingInformation", &self.supporting_information, 0)?;
        ctx.optional_node("PreviousAppointment", &self.previous_appointment)?;
        ctx.optional_node("OriginatingAppointment", &self.originating_appointment)?;
        ctx.repeated("RequestedPeriod", &self.requested_period, 0)?;
        ctx.repeated("Slot", &self.slot, 0)?;
        ctx.repeated("Account", &self.account, 0)?;
        ctx.repeated("Note", &self.note, 0)?;
        ctx.repeated("PatientInstruction", &self.patient_instruction, 0)?;
        ctx.repeated("BasedOn", &self.based_on, 0)?;
        ctx.optional_node("Subject", &self.subject)?;
        ctx.repeated("Participant", &self.participant, 1)?;
        ctx.repeated("RecurrenceTemplate", &self.recurrence_template, 0)
    }
}

impl Validate for AppointmentParticipant {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Type", &self.type_, 0)?;
        ctx.optional_node("Period", &self.period)?;
        ctx.optional_node("Actor", &self.actor)?;
        ctx.required_code("Status", &self.status)
    }
}

impl Validate for AppointmentRecurrenceTemplate {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.optional_node("Timezone", &self.timezone)?;
        ctx.required_node("RecurrenceType", &self.recurrence_type)?;
        ctx.optional_node("WeeklyTemplate", &self.weekly_template)?;
        ctx.optional_node("MonthlyTemplate", &self.monthly_template)?;
        ctx.optional_node("YearlyTemplate", &self.yearly_template)
    }
}

impl Validate for AppointmentWeeklyTemplate {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)
    }
}

impl Validate for AppointmentMonthlyTemplate {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.optional_node("NthWeekOfMonth", &self.nth_week_of_month)?;
        ctx.optional_node("DayOfWeek", &self.day_of_week)?;
        ctx.required_value("MonthInterval", self.month_interval.as_ref())
    }
}

impl Validate for AppointmentYearlyTemplate {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_value("YearInterval", self.year_interval.as_ref())
    }
}

impl TypedResource for Appointment {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

/// A reply to an appointment request for a patient and/or practitioner(s),
/// such as a confirmation or rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    /// Resource type - always "AppointmentResponse"
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

    /// Appointment this response relates to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Reference>,

    /// Indicator for a counter proposal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_new_time: Option<bool>,

    /// Time from appointment, or requested new start time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Time from appointment, or requested new end time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    /// Role of participant in the appointment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant_type: Vec<CodeableConcept>,

    /// Person(s), Location, HealthcareService, or Device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Reference>,

    /// accepted | declined | tentative | needs-action | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_status: Option<AppointmentResponseStatus>,

    /// Additional comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// This response is for all occurrences in a recurring request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,

    /// Original date within a recurring request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence_date: Option<String>,

    /// The recurrence ID of the specific recurring request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_id: Option<u32>,
}

impl AppointmentResponse {
    pub const RESOURCE_TYPE: &'static str = "AppointmentResponse";

    pub fn new(appointment: Reference, participant_status: AppointmentResponseStatus) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            appointment: Some(appointment),
            participant_status: Some(participant_status),
            ..Self::default()
        }
    }
}

impl Validate for AppointmentResponse {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.required_node("Appointment", &self.appointment)?;
        ctx.repeated("ParticipantType", &self.participant_type, 0)?;
        ctx.optional_node("Actor", &self.actor)?;
        ctx.required_code("ParticipantStatus", &self.participant_status)
    }
}

impl TypedResource for AppointmentResponse {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booked() -> Appointment {
        Appointment::new(
            AppointmentStatus::Booked,
            AppointmentParticipant::new(
                Reference::to("Patient/example"),
                ParticipationStatus::Accepted,
            ),
        )
    }

    #[test]
    fn test_booked_appointment_is_valid() {
        assert!(booked().validate().is_ok());
    }

    #[test]
    fn test_participant_status_required() {
        let mut appt = booked();
        appt.participant.push(AppointmentParticipant {
            actor: Some(Reference::to("Practitioner/example")),
            ..AppointmentParticipant::default()
        });

        let err = appt.validate().unwrap_err();
        assert_eq!(err.to_string(), "Participant[1]: field 'Status' is required");
        assert_eq!(err.path(), "Participant[1].Status");
    }

    #[test]
    fn test_appointment_requires_participant() {
        let appt: Appointment = serde_json::from_value(json!({
            "resourceType": "Appointment",
            "status": "proposed"
        }))
        .unwrap();

        let err = appt.validate().unwrap_err();
        assert!(err.is_min_cardinality());
        assert_eq!(err.kind().field(), "Participant");
    }

    #[test]
    fn test_zero_month_interval_is_present() {
        let mut appt = booked();
        appt.recurrence_template.push(AppointmentRecurrenceTemplate {
            recurrence_type: Some(CodeableConcept::from_text("monthly")),
            monthly_template: Some(AppointmentMonthlyTemplate {
                month_interval: Some(0),
                ..AppointmentMonthlyTemplate::default()
            }),
            ..AppointmentRecurrenceTemplate::default()
        });
        assert!(appt.validate().is_ok());

        appt.recurrence_template[0]
            .monthly_template
            .as_mut()
            .unwrap()
            .month_interval = None;
        assert_eq!(
            appt.validate().unwrap_err().to_string(),
            "RecurrenceTemplate[0]: MonthlyTemplate: field 'MonthInterval' is required"
        );
    }

    #[test]
    fn test_recurrence_template_requires_type() {
        let appt: Appointment = serde_json::from_value(json!({
            "resourceType": "Appointment",
            "status": "booked",
            "participant": [{"status": "accepted"}],
            "recurrenceTemplate": [{"yearlyTemplate": {"yearInterval": 1}}]
        }))
        .unwrap();

        assert_eq!(
            appt.validate().unwrap_err().path(),
            "RecurrenceTemplate[0].RecurrenceType"
        );
    }

    #[test]
    fn test_response_with_wrong_resource_type() {
        let mut response = AppointmentResponse::new(
            Reference::to("Appointment/example"),
            AppointmentResponseStatus::Accepted,
        );
        assert!(response.validate().is_ok());

        response.resource_type = "Appointment".to_string();
        let err = response.validate().unwrap_err();
        assert!(err.is_invalid_discriminator());
        assert_eq!(
            err.to_string(),
            "invalid resourceType: expected 'AppointmentResponse', got 'Appointment'"
        );
    }

    #[test]
    fn test_response_requires_appointment_before_status() {
        let response: AppointmentResponse = serde_json::from_value(json!({
            "resourceType": "AppointmentResponse"
        }))
        .unwrap();

        let errors = response.validate_all().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.kind().field()).collect();
        assert_eq!(fields, vec!["Appointment", "ParticipantStatus"]);
    }
}
