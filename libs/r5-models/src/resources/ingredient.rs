//! FHIR Ingredient resource

use crate::datatypes::*;
use crate::value_sets::{IngredientManufacturerRole, PublicationStatus};
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;

choice_type! {
    /// Ingredient.substance.strength.presentation[x]
    StrengthPresentation {
        Ratio(Ratio) => "presentationRatio" as "PresentationRatio",
        RatioRange(RatioRange) => "presentationRatioRange" as "PresentationRatioRange",
        CodeableConcept(CodeableConcept) => "presentationCodeableConcept" as "PresentationCodeableConcept",
        Quantity(Quantity) => "presentationQuantity" as "PresentationQuantity",
    }
}

choice_type! {
    /// Ingredient.substance.strength.concentration[x]
    StrengthConcentration {
        Ratio(Ratio) => "concentrationRatio" as "ConcentrationRatio",
        RatioRange(RatioRange) => "concentrationRatioRange" as "ConcentrationRatioRange",
        CodeableConcept(CodeableConcept) => "concentrationCodeableConcept" as "ConcentrationCodeableConcept",
        Quantity(Quantity) => "concentrationQuantity" as "ConcentrationQuantity",
    }
}

choice_type! {
    /// Ingredient.substance.strength.referenceStrength.strength[x]
    ReferenceStrengthValue {
        Ratio(Ratio) => "strengthRatio" as "StrengthRatio",
        RatioRange(RatioRange) => "strengthRatioRange" as "StrengthRatioRange",
        Quantity(Quantity) => "strengthQuantity" as "StrengthQuantity",
    }
}

/// An ingredient of a manufactured item or pharmaceutical product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Resource type - always "Ingredient"
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

    /// An identifier or code by which the ingredient can be referenced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// draft | active | retired | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublicationStatus>,

    /// The product which this ingredient is a constituent part of
    #[serde(rename = "for", default, skip_serializing_if = "Vec::is_empty")]
    pub for_: Vec<Reference>,

    /// Purpose of the ingredient within the product, e.g. active, inactive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Precise action within the drug product, e.g. antioxidant, alkalizing agent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub function: Vec<CodeableConcept>,

    /// A classification of the ingredient according to where in the physical item it tends to be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<CodeableConcept>,

    /// If the ingredient is a known or suspected allergen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergenic_indicator: Option<bool>,

    /// A place for providing any notes that are relevant to the component, e.g. removed during process, adjusted for loss on drying
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// An organization that manufactures this ingredient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manufacturer: Vec<IngredientManufacturer>,

    /// The substance that comprises this ingredient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substance: Option<IngredientSubstance>,
}

/// An organization that manufactures this ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientManufacturer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// allowed | possible | actual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<IngredientManufacturerRole>,

    /// An organization that manufactures this ingredient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Reference>,
}

/// The substance that comprises this ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSubstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// A code or full resource that represents the ingredient substance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableReference>,

    /// The quantity of substance, per presentation, or per volume or mass, and type of quantity
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strength: Vec<IngredientSubstanceStrength>,
}

/// The quantity of substance, per presentation, or per volume or mass, and type of quantity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSubstanceStrength {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The quantity of substance in the unit of presentation
    #[serde(flatten, deserialize_with = "StrengthPresentation::deserialize_flat")]
    pub presentation: Option<StrengthPresentation>,

    /// Text of either the whole presentation strength or a part of it (rest being in Strength.presentation as a ratio)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_presentation: Option<String>,

    /// The strength per unitary volume (or mass)
    #[serde(flatten, deserialize_with = "StrengthConcentration::deserialize_flat")]
    pub concentration: Option<StrengthConcentration>,

    /// Text of either the whole concentration strength or a part of it (rest being in Strength.concentration as a ratio)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_concentration: Option<String>,

    /// A code that indicates if the strength is, for example, based on the ingredient substance as stated or on the substance base (when the ingredient is a salt)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basis: Option<CodeableConcept>,

    /// When strength is measured at a particular point or distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_point: Option<String>,

    /// Where the strength range applies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country: Vec<CodeableConcept>,

    /// Strength expressed in terms of a reference substance
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_strength: Vec<IngredientReferenceStrength>,
}

/// Strength expressed in terms of a reference substance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientReferenceStrength {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Relevant reference substance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substance: Option<CodeableReference>,

    /// Strength expressed in terms of a reference substance
    #[serde(flatten, deserialize_with = "ReferenceStrengthValue::deserialize_flat")]
    pub strength: Option<ReferenceStrengthValue>,

    /// When strength is measured at a particular point or distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_point: Option<String>,

    /// Where the strength range applies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country: Vec<CodeableConcept>,
}

impl Ingredient {
    pub const RESOURCE_TYPE: &'static str = "Ingredient";

    pub fn new(
        status: PublicationStatus,
        role: CodeableConcept,
        substance: IngredientSubstance,
    ) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            status: Some(status),
            role: Some(role),
            substance: Some(substance),
            ..Self::default()
        }
    }
}

impl IngredientSubstance {
    pub fn new(code: CodeableReference) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }
}

impl Validate for Ingredient {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Text", &self.text)?;
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.optional_node("Identifier", &self.identifier)?;
        ctx.required_code("Status", &self.status)?;
        ctx.repeated("For", &self.for_, 0)?;
        ctx.required_node("Role", &self.role)?;
        ctx.repeated("Function", &self.function, 0)?;
        ctx.optional_node("Group", &self.group)?;
        ctx.repeated("Manufacturer", &self.manufacturer, 0)?;
        ctx.required_node("Substance", &self.substance)
    }
}

impl Validate for IngredientManufacturer {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_node("Manufacturer", &self.manufacturer)
    }
}

impl Validate for IngredientSubstance {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_node("Code", &self.code)?;
        ctx.repeated("Strength", &self.strength, 0)
    }
}

impl Validate for IngredientSubstanceStrength {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.optional_choice(&self.presentation)?;
        ctx.optional_choice(&self.concentration)?;
        ctx.optional_node("Basis", &self.basis)?;
        ctx.repeated("Country", &self.country, 0)?;
        ctx.repeated("ReferenceStrength", &self.reference_strength, 0)
    }
}

impl Validate for IngredientReferenceStrength {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_node("Substance", &self.substance)?;
        ctx.required_choice(&self.strength)?;
        ctx.repeated("Country", &self.country, 0)
    }
}

impl TypedResource for Ingredient {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn amoxicillin() -> CodeableReference {
        CodeableReference {
            concept: Some(CodeableConcept::from_coding(Coding::new(
                "http://snomed.info/sct",
                "372687004",
            ))),
            ..CodeableReference::default()
        }
    }

    fn active_role() -> CodeableConcept {
        CodeableConcept::from_coding(Coding::new(
            "http://hl7.org/fhir/ingredient-role",
            "100000072072",
        ))
    }

    #[test]
    fn test_ingredient_with_strength() {
        let ingredient: Ingredient = serde_json::from_value(json!({
            "resourceType": "Ingredient",
            "status": "active",
            "role": {"coding": [{"system": "http://hl7.org/fhir/ingredient-role", "code": "100000072072"}]},
            "substance": {
                "code": {"concept": {"coding": [{"system": "http://snomed.info/sct", "code": "372687004"}]}},
                "strength": [{
                    "presentationRatio": {
                        "numerator": {"value": 250, "unit": "mg"},
                        "denominator": {"value": 1, "unit": "tablet"}
                    },
                    "referenceStrength": [{
                        "substance": {"concept": {"text": "amoxicillin"}},
                        "strengthQuantity": {"value": 250, "unit": "mg"}
                    }]
                }]
            }
        }))
        .unwrap();

        let strength = &ingredient.substance.as_ref().unwrap().strength[0];
        assert!(matches!(strength.presentation, Some(StrengthPresentation::Ratio(_))));
        assert!(strength.concentration.is_none());
        assert!(ingredient.validate().is_ok());
    }

    #[test]
    fn test_reference_strength_requires_strength_value() {
        let mut substance = IngredientSubstance::new(amoxicillin());
        substance.strength.push(IngredientSubstanceStrength {
            reference_strength: vec![IngredientReferenceStrength {
                substance: Some(amoxicillin()),
                ..IngredientReferenceStrength::default()
            }],
            ..IngredientSubstanceStrength::default()
        });
        let ingredient = Ingredient::new(PublicationStatus::Active, active_role(), substance);

        let err = ingredient.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Substance: Strength[0]: ReferenceStrength[0]: field 'StrengthRatio' is required"
        );
        assert_eq!(err.path(), "Substance.Strength[0].ReferenceStrength[0].StrengthRatio");
    }

    #[test]
    fn test_manufacturer_reference_required() {
        let mut ingredient = Ingredient::new(
            PublicationStatus::Active,
            active_role(),
            IngredientSubstance::new(amoxicillin()),
        );
        ingredient.manufacturer.push(IngredientManufacturer {
            role: Some(IngredientManufacturerRole::Actual),
            ..IngredientManufacturer::default()
        });

        assert_eq!(
            ingredient.validate().unwrap_err().path(),
            "Manufacturer[0].Manufacturer"
        );
    }

    #[test]
    fn test_for_keyword_field() {
        let mut ingredient = Ingredient::new(
            PublicationStatus::Draft,
            active_role(),
            IngredientSubstance::new(amoxicillin()),
        );
        ingredient.for_.push(Reference::to("ManufacturedItemDefinition/tablet"));

        let value = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(value["for"][0]["reference"], "ManufacturedItemDefinition/tablet");
    }
}
