use super::*;
use ferrum_r5_validator::{Flow, Validate, ValidationContext};
use serde::{Deserialize, Serialize};

choice_type! {
    /// Extension.value[x]
    ///
    /// Covers the primitive types and the general-purpose data types modelled
    /// in this crate. Other alternatives are not read.
    ExtensionValue {
        Base64Binary(String) => "valueBase64Binary" as "ValueBase64Binary",
        Boolean(bool) => "valueBoolean" as "ValueBoolean",
        Canonical(String) => "valueCanonical" as "ValueCanonical",
        Code(String) => "valueCode" as "ValueCode",
        Date(String) => "valueDate" as "ValueDate",
        DateTime(String) => "valueDateTime" as "ValueDateTime",
        Decimal(f64) => "valueDecimal" as "ValueDecimal",
        Id(String) => "valueId" as "ValueId",
        Instant(String) => "valueInstant" as "ValueInstant",
        Integer(i32) => "valueInteger" as "ValueInteger",
        Markdown(String) => "valueMarkdown" as "ValueMarkdown",
        Oid(String) => "valueOid" as "ValueOid",
        PositiveInt(u32) => "valuePositiveInt" as "ValuePositiveInt",
        String(String) => "valueString" as "ValueString",
        Time(String) => "valueTime" as "ValueTime",
        UnsignedInt(u32) => "valueUnsignedInt" as "ValueUnsignedInt",
        Uri(String) => "valueUri" as "ValueUri",
        Url(String) => "valueUrl" as "ValueUrl",
        Uuid(String) => "valueUuid" as "ValueUuid",
        Address(Address) => "valueAddress" as "ValueAddress",
        Age(Age) => "valueAge" as "ValueAge",
        Annotation(Annotation) => "valueAnnotation" as "ValueAnnotation",
        Attachment(Attachment) => "valueAttachment" as "ValueAttachment",
        CodeableConcept(CodeableConcept) => "valueCodeableConcept" as "ValueCodeableConcept",
        CodeableReference(CodeableReference) => "valueCodeableReference" as "ValueCodeableReference",
        Coding(Coding) => "valueCoding" as "ValueCoding",
        ContactPoint(ContactPoint) => "valueContactPoint" as "ValueContactPoint",
        Count(Count) => "valueCount" as "ValueCount",
        Distance(Distance) => "valueDistance" as "ValueDistance",
        Duration(Duration) => "valueDuration" as "ValueDuration",
        HumanName(HumanName) => "valueHumanName" as "ValueHumanName",
        Identifier(Identifier) => "valueIdentifier" as "ValueIdentifier",
        Money(Money) => "valueMoney" as "ValueMoney",
        Period(Period) => "valuePeriod" as "ValuePeriod",
        Quantity(Quantity) => "valueQuantity" as "ValueQuantity",
        Range(Range) => "valueRange" as "ValueRange",
        Ratio(Ratio) => "valueRatio" as "ValueRatio",
        RatioRange(RatioRange) => "valueRatioRange" as "ValueRatioRange",
        Reference(Reference) => "valueReference" as "ValueReference",
    }
}

/// Optional Extensions Element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Nested extensions (complex extensions carry no value[x])
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Identifies the meaning of the extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Value of extension
    #[serde(flatten, deserialize_with = "ExtensionValue::deserialize_flat")]
    pub value: Option<ExtensionValue>,
}

impl Extension {
    pub fn new(url: impl Into<String>, value: ExtensionValue) -> Self {
        Self {
            url: Some(url.into()),
            value: Some(value),
            ..Self::default()
        }
    }
}

impl Validate for Extension {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.required_str("Url", &self.url)?;
        ctx.optional_choice(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_value() {
        let ext: Extension = serde_json::from_value(json!({
            "url": "http://example.org/fhir/StructureDefinition/flag",
            "valueBoolean": false
        }))
        .unwrap();

        assert_eq!(ext.value, Some(ExtensionValue::Boolean(false)));
        assert!(ext.validate().is_ok());
    }

    #[test]
    fn test_complex_value_reports_alternative_name() {
        let ext: Extension = serde_json::from_value(json!({
            "url": "http://example.org/fhir/StructureDefinition/note",
            "valueAnnotation": {"time": "2024-02-01"}
        }))
        .unwrap();

        let err = ext.validate().unwrap_err();
        assert_eq!(err.path(), "ValueAnnotation.Text");
    }

    #[test]
    fn test_nested_extension_without_value() {
        let ext: Extension = serde_json::from_value(json!({
            "url": "http://example.org/fhir/StructureDefinition/complex",
            "extension": [
                {"url": "part", "valueString": "a"},
                {"valueString": "b"}
            ]
        }))
        .unwrap();

        assert!(ext.value.is_none());
        assert_eq!(ext.validate().unwrap_err().path(), "Extension[1].Url");
    }

    #[test]
    fn test_serializes_flat() {
        let ext = Extension::new(
            "http://example.org/fhir/StructureDefinition/dose",
            ExtensionValue::Quantity(Quantity::ucum(5.0, "mg")),
        );

        let value = serde_json::to_value(&ext).unwrap();
        assert_eq!(value["valueQuantity"]["code"], "mg");
        assert!(value.get("value").is_none());
    }
}
