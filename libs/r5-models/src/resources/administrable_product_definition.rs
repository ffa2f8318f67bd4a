//! FHIR AdministrableProductDefinition resource

use crate::datatypes::*;
use crate::value_sets::PublicationStatus;
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;

choice_type! {
    /// AdministrableProductDefinition.property.value[x]
    ProductPropertyValue {
        CodeableConcept(CodeableConcept) => "valueCodeableConcept" as "ValueCodeableConcept",
        Quantity(Quantity) => "valueQuantity" as "ValueQuantity",
        Date(String) => "valueDate" as "ValueDate",
        Boolean(bool) => "valueBoolean" as "ValueBoolean",
        Markdown(String) => "valueMarkdown" as "ValueMarkdown",
        Attachment(Attachment) => "valueAttachment" as "ValueAttachment",
        Reference(Reference) => "valueReference" as "ValueReference",
    }
}

/// A medicinal product in the final form which is suitable for administering
/// to a patient (after any mixing of multiple components, dissolution etc.
/// has been performed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrableProductDefinition {
    /// Resource type - always "AdministrableProductDefinition"
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

    /// An identifier for the administrable product
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// draft | active | retired | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublicationStatus>,

    /// References a product from which one or more of the constituent parts of that product can be prepared and used as described by this administrable product
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub form_of: Vec<Reference>,

    /// The dose form of the final product after necessary reconstitution or processing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrable_dose_form: Option<CodeableConcept>,

    /// The presentation type in which this item is given to a patient. e.g. for a spray - 'puff'
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_of_presentation: Option<CodeableConcept>,

    /// Indicates the specific manufactured items that are part of the 'formOf' product that are used in the preparation of this specific administrable form
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produced_from: Vec<Reference>,

    /// The ingredients of this administrable medicinal product. This is only needed if the ingredients are not specified either using ManufacturedItemDefiniton, or using by incoming references from the Ingredient resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredient: Vec<CodeableConcept>,

    /// A device that is integral to the medicinal product, in effect being considered as an "ingredient" of the medicinal product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Reference>,

    /// A general description of the product, when in its final form, suitable for administration e.g. effervescent blue liquid, to be swallowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Characteristics e.g. a product's onset of action
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property: Vec<AdministrableProductDefinitionProperty>,

    /// The path by which the product is taken into or makes contact with the body
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub route_of_administration: Vec<AdministrableProductDefinitionRouteOfAdministration>,
}

/// Characteristics e.g. a product's onset of action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrableProductDefinitionProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// A code expressing the type of characteristic
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,

    /// A value for the characteristic
    #[serde(flatten, deserialize_with = "ProductPropertyValue::deserialize_flat")]
    pub value: Option<ProductPropertyValue>,

    /// The status of characteristic e.g. assigned or pending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CodeableConcept>,
}

/// The path by which the product is taken into or makes contact with the body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrableProductDefinitionRouteOfAdministration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Coded expression for the route
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// The first dose (dose quantity) administered can be specified for the product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_dose: Option<Quantity>,

    /// The maximum single dose that can be administered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_single_dose: Option<Quantity>,

    /// The maximum dose quantity to be administered in any one 24-h period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_day: Option<Quantity>,

    /// The maximum dose per treatment period that can be administered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_treatment_period: Option<Ratio>,

    /// The maximum treatment period during which the product can be administered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_treatment_period: Option<Duration>,

    /// A species for which this route applies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_species: Vec<AdministrableProductDefinitionTargetSpecies>,
}

/// A species for which this route applies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrableProductDefinitionTargetSpecies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Coded expression for the species
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// A species specific time during which consumption of animal product is not appropriate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub withdrawal_period: Vec<AdministrableProductDefinitionWithdrawalPeriod>,
}

/// A species specific time during which consumption of animal product is not appropriate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrableProductDefinitionWithdrawalPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The type of tissue for which the withdrawal period applies, e.g. meat, milk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tissue: Option<CodeableConcept>,

    /// A value for the time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Quantity>,

    /// Extra information about the withdrawal period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_information: Option<String>,
}

impl AdministrableProductDefinition {
    pub const RESOURCE_TYPE: &'static str = "AdministrableProductDefinition";

    pub fn new(
        status: PublicationStatus,
        route: AdministrableProductDefinitionRouteOfAdministration,
    ) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            status: Some(status),
            route_of_administration: vec![route],
            ..Self::default()
        }
    }
}

impl AdministrableProductDefinitionRouteOfAdministration {
    pub fn new(code: CodeableConcept) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }
}

impl Validate for AdministrableProductDefinition {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Identifier", &self.identifier, 0)?;
        ctx.required_code("Status", &self.status)?;
        ctx.repeated("FormOf", &self.form_of, 0)?;
        ctx.optional_node("AdministrableDoseForm", &self.administrable_dose_form)?;
        ctx.optional_node("UnitOfPresentation", &self.unit_of_presentation)?;
        ctx.repeated("ProducedFrom", &self.produced_from, 0)?;
        ctx.repeated("Ingredient", &self.ingredient, 0)?;
        ctx.optional_node("Device", &self.device)?;
        ctx.repeated("Property", &self.property, 0)?;
        ctx.repeated("RouteOfAdministration", &self.route_of_administration, 1)
    }
}

impl Validate for AdministrableProductDefinitionProperty {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_node("Type", &self.type_)?;
        ctx.optional_choice(&self.value)?;
        ctx.optional_node("Status", &self.status)
    }
}

impl Validate for AdministrableProductDefinitionRouteOfAdministration {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_node("Code", &self.code)?;
        ctx.optional_node("FirstDose", &self.first_dose)?;
        ctx.optional_node("MaxSingleDose", &self.max_single_dose)?;
        ctx.optional_node("MaxDosePerDay", &self.max_dose_per_day)?;
        ctx.optional_node("MaxDosePerTreatmentPeriod", &self.max_dose_per_treatment_period)?;
        ctx.optional_node("MaxTreatmentPeriod", &self.max_treatment_period)?;
        ctx.repeated("TargetSpecies", &self.target_species, 0)
    }
}

impl Validate for AdministrableProductDefinitionTargetSpecies {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_node("Code", &self.code)?;
        ctx.repeated("WithdrawalPeriod", &self.withdrawal_period, 0)
    }
}

impl Validate for AdministrableProductDefinitionWithdrawalPeriod {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_node("Tissue", &self.tissue)?;
        ctx.required_node("Value", &self.value)
    }
}

impl TypedResource for AdministrableProductDefinition {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn oral() -> CodeableConcept {
        CodeableConcept::from_coding(Coding::new("http://example.org/route", "oral"))
    }

    #[test]
    fn test_requires_route_of_administration() {
        let mut product = AdministrableProductDefinition::new(
            PublicationStatus::Active,
            AdministrableProductDefinitionRouteOfAdministration::new(oral()),
        );
        assert!(product.validate().is_ok());

        product.route_of_administration.clear();
        let err = product.validate().unwrap_err();
        assert!(err.is_min_cardinality());
        assert_eq!(err.kind().field(), "RouteOfAdministration");
    }

    #[test]
    fn test_target_species_code_path() {
        let product: AdministrableProductDefinition = serde_json::from_value(json!({
            "resourceType": "AdministrableProductDefinition",
            "status": "active",
            "routeOfAdministration": [{
                "code": {"text": "oral"},
                "targetSpecies": [
                    {"code": {"text": "cattle"}},
                    {"withdrawalPeriod": [{"tissue": {"text": "milk"}, "value": {"value": 4, "unit": "d"}}]}
                ]
            }]
        }))
        .unwrap();

        let err = product.validate().unwrap_err();
        assert_eq!(err.path(), "RouteOfAdministration[0].TargetSpecies[1].Code");
        assert_eq!(
            err.to_string(),
            "RouteOfAdministration[0]: TargetSpecies[1]: field 'Code' is required"
        );
    }

    #[test]
    fn test_withdrawal_period_value_required() {
        let mut route = AdministrableProductDefinitionRouteOfAdministration::new(oral());
        route.target_species.push(AdministrableProductDefinitionTargetSpecies {
            code: Some(CodeableConcept::from_text("pig")),
            withdrawal_period: vec![AdministrableProductDefinitionWithdrawalPeriod {
                tissue: Some(CodeableConcept::from_text("meat")),
                ..AdministrableProductDefinitionWithdrawalPeriod::default()
            }],
            ..AdministrableProductDefinitionTargetSpecies::default()
        });
        let product = AdministrableProductDefinition::new(PublicationStatus::Active, route);

        assert_eq!(
            product.validate().unwrap_err().path(),
            "RouteOfAdministration[0].TargetSpecies[0].WithdrawalPeriod[0].Value"
        );
    }

    #[test]
    fn test_property_value_choice() {
        let product: AdministrableProductDefinition = serde_json::from_value(json!({
            "resourceType": "AdministrableProductDefinition",
            "status": "draft",
            "property": [{"type": {"text": "scored"}, "valueBoolean": true}],
            "routeOfAdministration": [{"code": {"text": "oral"}}]
        }))
        .unwrap();

        assert_eq!(
            product.property[0].value,
            Some(ProductPropertyValue::Boolean(true))
        );
        assert!(product.validate().is_ok());
    }
}
