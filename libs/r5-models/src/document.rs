//! Document-store rendition of the models
//!
//! Persistence layers keep the same documents with snake_case keys
//! (`implicit_rules`, `minutes_duration`, `onset_date_time`). The rendition is
//! a key rewrite over the wire JSON, so the schema is shared: values are left
//! untouched and raw payloads (`contained`, bundle entries) are rewritten
//! along with everything else.
//!
//! Primitive extension keys keep their leading underscore (`_birthDate`
//! becomes `_birth_date`).

use crate::error::Result;
use heck::{ToLowerCamelCase, ToSnakeCase};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Store key for a wire key.
pub fn store_key(wire_key: &str) -> String {
    convert_key(wire_key, |k| k.to_snake_case())
}

/// Wire key for a store key.
pub fn wire_key(store_key: &str) -> String {
    convert_key(store_key, |k| k.to_lower_camel_case())
}

/// Serialize a model into its document-store form.
pub fn to_store_document<T: Serialize + ?Sized>(model: &T) -> Result<Value> {
    let wire = serde_json::to_value(model)?;
    Ok(rewrite_keys(wire, &store_key))
}

/// Read a model back from its document-store form.
pub fn from_store_document<T: DeserializeOwned>(document: Value) -> Result<T> {
    let wire = rewrite_keys(document, &wire_key);
    Ok(serde_json::from_value(wire)?)
}

/// Rewrite a wire document into store form without going through a model.
pub fn wire_to_store(document: Value) -> Value {
    rewrite_keys(document, &store_key)
}

/// Rewrite a store document into wire form without going through a model.
pub fn store_to_wire(document: Value) -> Value {
    rewrite_keys(document, &wire_key)
}

fn convert_key(key: &str, convert: impl Fn(&str) -> String) -> String {
    match key.strip_prefix('_') {
        Some(rest) => format!("_{}", convert(rest)),
        None => convert(key),
    }
}

fn rewrite_keys(value: Value, convert: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                out.insert(convert(&key), rewrite_keys(value, convert));
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| rewrite_keys(v, convert)).collect())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{
        Appointment, AppointmentParticipant, Condition, ConditionOnset, Resource,
    };
    use crate::value_sets::{AppointmentStatus, ParticipationStatus};
    use crate::{CodeableConcept, Reference};
    use serde_json::json;

    #[test]
    fn test_key_conversion() {
        assert_eq!(store_key("implicitRules"), "implicit_rules");
        assert_eq!(store_key("minutesDuration"), "minutes_duration");
        assert_eq!(store_key("resourceType"), "resource_type");
        assert_eq!(store_key("_birthDate"), "_birth_date");
        assert_eq!(wire_key("onset_date_time"), "onsetDateTime");
        assert_eq!(wire_key("_birth_date"), "_birthDate");
        assert_eq!(wire_key("div"), "div");
    }

    #[test]
    fn test_appointment_store_document() {
        let mut appt = Appointment::new(
            AppointmentStatus::Booked,
            AppointmentParticipant::new(
                Reference::to("Patient/example"),
                ParticipationStatus::Accepted,
            ),
        );
        appt.minutes_duration = Some(15);
        appt.implicit_rules = Some("http://example.org/rules".to_string());

        let doc = to_store_document(&appt).unwrap();
        assert_eq!(doc["resource_type"], "Appointment");
        assert_eq!(doc["minutes_duration"], 15);
        assert_eq!(doc["implicit_rules"], "http://example.org/rules");
        assert!(doc.get("minutesDuration").is_none());

        let back: Appointment = from_store_document(doc).unwrap();
        assert_eq!(back, appt);
    }

    #[test]
    fn test_choice_keys_in_store_form() {
        let mut condition = Condition::new(
            CodeableConcept::from_text("active"),
            Reference::to("Patient/example"),
        );
        condition.onset = Some(ConditionOnset::DateTime("2012-05-24".to_string()));

        let doc = to_store_document(&condition).unwrap();
        assert_eq!(doc["onset_date_time"], "2012-05-24");

        let back: Condition = from_store_document(doc).unwrap();
        assert_eq!(back.onset, condition.onset);
    }

    #[test]
    fn test_raw_payloads_are_rewritten() {
        let doc = wire_to_store(json!({
            "resourceType": "Bundle",
            "entry": [{"fullUrl": "urn:uuid:1", "resource": {"resourceType": "Patient", "birthDate": "1974-12-25"}}]
        }));

        assert_eq!(doc["entry"][0]["full_url"], "urn:uuid:1");
        assert_eq!(doc["entry"][0]["resource"]["birth_date"], "1974-12-25");

        let resource = Resource::from_value(store_to_wire(doc["entry"][0]["resource"].clone()))
            .unwrap();
        assert_eq!(resource.resource_type(), "Patient");
    }
}
