//! FHIR Condition resource

use crate::datatypes::*;
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;

choice_type! {
    /// Condition.onset[x]
    ConditionOnset {
        DateTime(String) => "onsetDateTime" as "OnsetDateTime",
        Age(Age) => "onsetAge" as "OnsetAge",
        Period(Period) => "onsetPeriod" as "OnsetPeriod",
        Range(Range) => "onsetRange" as "OnsetRange",
        String(String) => "onsetString" as "OnsetString",
    }
}

choice_type! {
    /// Condition.abatement[x]
    ConditionAbatement {
        DateTime(String) => "abatementDateTime" as "AbatementDateTime",
        Age(Age) => "abatementAge" as "AbatementAge",
        Period(Period) => "abatementPeriod" as "AbatementPeriod",
        Range(Range) => "abatementRange" as "AbatementRange",
        String(String) => "abatementString" as "AbatementString",
    }
}

/// A clinical condition, problem, diagnosis, or other event, situation, issue,
/// or clinical concept that has risen to a level of concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Resource type - always "Condition"
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

    /// External Ids for this condition
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// active | recurrence | relapse | inactive | remission | resolved | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_status: Option<CodeableConcept>,

    /// unconfirmed | provisional | differential | confirmed | refuted | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<CodeableConcept>,

    /// problem-list-item | encounter-diagnosis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,

    /// Subjective severity of condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<CodeableConcept>,

    /// Identification of the condition, problem or diagnosis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Anatomical location, if relevant
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_site: Vec<CodeableConcept>,

    /// Who has the condition?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// The Encounter during which this Condition was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// Estimated or actual date, date-time, or age
    #[serde(flatten, deserialize_with = "ConditionOnset::deserialize_flat")]
    pub onset: Option<ConditionOnset>,

    /// When in resolution/remission
    #[serde(flatten, deserialize_with = "ConditionAbatement::deserialize_flat")]
    pub abatement: Option<ConditionAbatement>,

    /// Date condition was first recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_date: Option<String>,

    /// Who or what participated in the activities related to the condition and how they were involved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant: Vec<ConditionParticipant>,

    /// Stage/grade, usually assessed formally
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stage: Vec<ConditionStage>,

    /// Supporting evidence for the verification status
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<CodeableReference>,

    /// Additional information about the Condition
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
}

/// Who or what participated in the activities related to the condition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionParticipant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Type of involvement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<CodeableConcept>,

    /// Who or what participated in the activities related to the condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Reference>,
}

/// Stage/grade, usually assessed formally
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionStage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Simple summary (disease specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CodeableConcept>,

    /// Formal record of assessment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assessment: Vec<Reference>,

    /// Kind of staging
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
}

impl Condition {
    pub const RESOURCE_TYPE: &'static str = "Condition";

    pub fn new(clinical_status: CodeableConcept, subject: Reference) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            clinical_status: Some(clinical_status),
            subject: Some(subject),
            ..Self::default()
        }
    }
}

impl Validate for Condition {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.required_node("ClinicalStatus", &self.clinical_status)?;
        ctx.optional_node("VerificationStatus", &self.verification_status)?;
        ctx.repeated("Category", &self.category, 0)?;
        ctx.optional_node("Severity", &self.severity)?;
        ctx.optional_node("Code", &self.code)?;
        ctx.repeated("BodySite", &self.body_site, 0)?;
        ctx.required_node("Subject", &self.subject)?;
        ctx.optional_node("Encounter", &self.encounter)?;
        ctx.optional_choice(&self.onset)?;
        ctx.optional_choice(&self.abatement)?;
        ctx.repeated("Participant", &self.participant, 0)?;
        ctx.repeated("Stage", &self.stage, 0)?;
        ctx.repeated("Evidence", &self.evidence, 0)?;
        ctx.repeated("Note", &self.note, 0)
    }
}

impl Validate for ConditionParticipant {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.optional_node("Function", &self.function)?;
        ctx.required_node("Actor", &self.actor)
    }
}

impl Validate for ConditionStage {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.optional_node("Summary", &self.summary)?;
        ctx.repeated("Assessment", &self.assessment, 0)?;
        ctx.optional_node("Type", &self.type_)
    }
}

impl TypedResource for Condition {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn active() -> CodeableConcept {
        CodeableConcept::from_coding(Coding::new(
            "http://terminology.hl7.org/CodeSystem/condition-clinical",
            "active",
        ))
    }

    #[test]
    fn test_condition_with_onset_age() {
        let condition: Condition = serde_json::from_value(json!({
            "resourceType": "Condition",
            "clinicalStatus": {"coding": [{"system": "http://terminology.hl7.org/CodeSystem/condition-clinical", "code": "active"}]},
            "subject": {"reference": "Patient/example"},
            "onsetAge": {"value": 52, "unit": "years", "system": "http://unitsofmeasure.org", "code": "a"},
            "abatementString": "around April 9, 2013"
        }))
        .unwrap();

        match &condition.onset {
            Some(ConditionOnset::Age(age)) => assert_eq!(age.value, Some(52.0)),
            other => panic!("expected onsetAge, got {:?}", other),
        }
        assert_eq!(
            condition.abatement,
            Some(ConditionAbatement::String("around April 9, 2013".to_string()))
        );
        assert!(condition.validate().is_ok());
    }

    #[test]
    fn test_clinical_status_before_subject() {
        let condition: Condition =
            serde_json::from_value(json!({"resourceType": "Condition"})).unwrap();

        let err = condition.validate().unwrap_err();
        assert_eq!(err.to_string(), "field 'ClinicalStatus' is required");

        let errors = condition.validate_all().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.iter().nth(1).unwrap().path(), "Subject");
    }

    #[test]
    fn test_onset_range_error_path() {
        let mut condition = Condition::new(active(), Reference::to("Patient/example"));
        condition.onset = Some(ConditionOnset::Range(Range {
            extension: vec![Extension::default()],
            ..Range::default()
        }));

        let err = condition.validate().unwrap_err();
        assert_eq!(err.to_string(), "OnsetRange: Extension[0]: field 'Url' is required");
    }

    #[test]
    fn test_participant_actor_required() {
        let mut condition = Condition::new(active(), Reference::to("Patient/example"));
        condition.participant.push(ConditionParticipant {
            function: Some(CodeableConcept::from_text("asserter")),
            ..ConditionParticipant::default()
        });

        assert_eq!(condition.validate().unwrap_err().path(), "Participant[0].Actor");
    }
}
