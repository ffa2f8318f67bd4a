//! FHIR Bundle resource
//!
//! Entry payloads stay raw JSON. Dispatch them with
//! [`Resource::from_value`](crate::Resource::from_value) when typed access is
//! needed.

use crate::datatypes::*;
use crate::value_sets::{BundleType, HttpVerb, SearchEntryMode};
use ferrum_r5_validator::{Flow, TypedResource, Validate, ValidationContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A container for a collection of resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Resource type - always "Bundle"
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

    /// Persistent identifier for the bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// document | message | transaction | transaction-response | batch | batch-response | history | searchset | collection | subscription-notification
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<BundleType>,

    /// When the bundle was assembled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// If search, the total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    /// Links related to this Bundle
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    /// Entry in the bundle - will have a resource or information
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,

    /// Digital Signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Value>,

    /// Issues with the Bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Value>,
}

/// Links related to this Bundle or entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// See http://www.iana.org/assignments/link-relations/link-relations.xhtml#link-relations-1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,

    /// Reference details for the link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Entry in the bundle - will have a resource or information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Links related to this entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    /// URI for resource (e.g. the absolute URL server address, URI for UUID/OID, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    /// A resource in the bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,

    /// Search related information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<BundleEntrySearch>,

    /// Additional execution information (transaction/batch/history)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BundleEntryRequest>,

    /// Results of execution (transaction/batch/history)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<BundleEntryResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntrySearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// match | include - why this is in the result set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SearchEntryMode>,

    /// Search ranking (between 0 and 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// GET | HEAD | POST | PUT | DELETE | PATCH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpVerb>,

    /// URL for HTTP equivalent of this entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// For managing cache validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_match: Option<String>,

    /// For managing cache currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_modified_since: Option<String>,

    /// For managing update contention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,

    /// For conditional creates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_exist: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Status response code (text optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The location (if the operation returns a location)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// The Etag for the resource (if relevant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Server's date time modified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    /// OperationOutcome with hints and warnings (for batch/transaction)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Value>,
}

impl Bundle {
    pub const RESOURCE_TYPE: &'static str = "Bundle";

    pub fn new(type_: BundleType) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE.to_string(),
            type_: Some(type_),
            ..Self::default()
        }
    }

    /// Entry payloads with their position, skipping entries without one.
    pub fn resources(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.entry
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| entry.resource.as_ref().map(|r| (idx, r)))
    }
}

impl Validate for Bundle {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.discriminator(Self::RESOURCE_TYPE, &self.resource_type)?;
        ctx.optional_node("Meta", &self.meta)?;
        ctx.optional_node("Identifier", &self.identifier)?;
        ctx.required_code("Type", &self.type_)?;
        ctx.repeated("Link", &self.link, 0)?;
        ctx.repeated("Entry", &self.entry, 0)
    }
}

impl Validate for BundleLink {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_str("Relation", &self.relation)?;
        ctx.required_str("Url", &self.url)
    }
}

impl Validate for BundleEntry {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.repeated("Link", &self.link, 0)?;
        ctx.optional_node("Search", &self.search)?;
        ctx.optional_node("Request", &self.request)?;
        ctx.optional_node("Response", &self.response)
    }
}

impl Validate for BundleEntrySearch {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)
    }
}

impl Validate for BundleEntryRequest {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_code("Method", &self.method)?;
        ctx.required_str("Url", &self.url)
    }
}

impl Validate for BundleEntryResponse {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("ModifierExtension", &self.modifier_extension, 0)?;
        ctx.required_str("Status", &self.status)
    }
}

impl TypedResource for Bundle {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_bundle() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "type": "transaction",
            "entry": [
                {
                    "fullUrl": "urn:uuid:61ebe359-bfdc-4613-8bf2-c5e300945f0a",
                    "resource": {"resourceType": "Patient", "active": true},
                    "request": {"method": "POST", "url": "Patient"}
                },
                {
                    "request": {"method": "DELETE", "url": "Patient/234"}
                }
            ]
        }))
        .unwrap();

        assert_eq!(bundle.type_, Some(BundleType::Transaction));
        assert_eq!(bundle.resources().count(), 1);
        assert!(bundle.validate().is_ok());
    }

    #[test]
    fn test_request_url_required() {
        let mut bundle = Bundle::new(BundleType::Batch);
        bundle.entry.push(BundleEntry {
            request: Some(BundleEntryRequest {
                method: Some(HttpVerb::Get),
                ..BundleEntryRequest::default()
            }),
            ..BundleEntry::default()
        });

        assert_eq!(
            bundle.validate().unwrap_err().to_string(),
            "Entry[0]: Request: field 'Url' is required"
        );
    }

    #[test]
    fn test_entry_resource_is_not_validated() {
        let mut bundle = Bundle::new(BundleType::Collection);
        bundle.entry.push(BundleEntry {
            resource: Some(json!({"resourceType": "Slot"})),
            ..BundleEntry::default()
        });

        assert!(bundle.validate().is_ok());
    }

    #[test]
    fn test_bundle_type_required() {
        let bundle: Bundle = serde_json::from_value(json!({"resourceType": "Bundle"})).unwrap();
        assert_eq!(bundle.validate().unwrap_err().path(), "Type");
    }
}
