//! Metadata and special-purpose data types

use super::*;
use crate::value_sets::{DaysOfWeek, NarrativeStatus};
use ferrum_r5_validator::{Flow, Validate, ValidationContext};
use serde::{Deserialize, Serialize};

/// Metadata about a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Version specific identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,

    /// When the resource version last changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Identifies where the resource comes from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Profiles this resource claims to conform to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profile: Vec<String>,

    /// Security Labels applied to this resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<Coding>,

    /// Tags applied to this resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<Coding>,
}

impl Validate for Meta {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("Security", &self.security, 0)?;
        ctx.repeated("Tag", &self.tag, 0)
    }
}

/// Human-readable summary of the resource (essential clinical and business information)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// generated | extensions | additional | empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NarrativeStatus>,

    /// Limited xhtml content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub div: Option<String>,
}

impl Validate for Narrative {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.required_code("Status", &self.status)?;
        ctx.required_str("Div", &self.div)
    }
}

/// Contact information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedContactDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// The type of contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<CodeableConcept>,

    /// Name of an individual to contact
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    /// Contact details (e.g.phone/fax/url)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,

    /// Address for the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// This contact detail is handled/monitored by a specific organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// Period that this contact was valid for usage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl Validate for ExtendedContactDetail {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.optional_node("Purpose", &self.purpose)?;
        ctx.repeated("Name", &self.name, 0)?;
        ctx.repeated("Telecom", &self.telecom, 0)?;
        ctx.optional_node("Address", &self.address)?;
        ctx.optional_node("Organization", &self.organization)?;
        ctx.optional_node("Period", &self.period)
    }
}

choice_type! {
    /// VirtualServiceDetail.address[x]
    VirtualServiceAddress {
        Url(String) => "addressUrl" as "AddressUrl",
        String(String) => "addressString" as "AddressString",
        ContactPoint(ContactPoint) => "addressContactPoint" as "AddressContactPoint",
        ExtendedContactDetail(ExtendedContactDetail) => "addressExtendedContactDetail" as "AddressExtendedContactDetail",
    }
}

/// Virtual Service Contact Details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Channel Type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<Coding>,

    /// Contact address/number
    #[serde(flatten, deserialize_with = "VirtualServiceAddress::deserialize_flat")]
    pub address: Option<VirtualServiceAddress>,

    /// Address to see alternative connection details
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_info: Vec<String>,

    /// Maximum number of participants supported by the virtual service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,

    /// Session Key required by the virtual service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_key: Option<String>,
}

impl Validate for VirtualServiceDetail {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.optional_node("ChannelType", &self.channel_type)?;
        ctx.optional_choice(&self.address)
    }
}

/// Availability data for an {item}
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Times the {item} is available
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_time: Vec<AvailabilityAvailableTime>,

    /// Not available during this time due to provided reason
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_available_time: Vec<AvailabilityNotAvailableTime>,
}

impl Validate for Availability {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.repeated("AvailableTime", &self.available_time, 0)?;
        ctx.repeated("NotAvailableTime", &self.not_available_time, 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityAvailableTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// mon | tue | wed | thu | fri | sat | sun
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<DaysOfWeek>,

    /// Always available? i.e. 24 hour service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_start_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_end_time: Option<String>,
}

impl Validate for AvailabilityAvailableTime {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityNotAvailableTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Reason presented to the user explaining why time not available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Service not available during this period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub during: Option<Period>,
}

impl Validate for AvailabilityNotAvailableTime {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Extension", &self.extension, 0)?;
        ctx.optional_node("During", &self.during)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_narrative_required_fields() {
        let text = Narrative {
            status: Some(NarrativeStatus::Generated),
            ..Narrative::default()
        };
        assert_eq!(text.validate().unwrap_err().to_string(), "field 'Div' is required");

        let text = Narrative {
            div: Some("<div xmlns=\"http://www.w3.org/1999/xhtml\">ok</div>".to_string()),
            ..Narrative::default()
        };
        assert_eq!(
            text.validate().unwrap_err().to_string(),
            "field 'Status' is required"
        );
    }

    #[test]
    fn test_virtual_service_address_choice() {
        let detail: VirtualServiceDetail = serde_json::from_value(json!({
            "channelType": {"system": "http://hl7.org/fhir/virtual-service-type", "code": "zoom"},
            "addressUrl": "https://zoom.us/j/123",
            "maxParticipants": 10
        }))
        .unwrap();

        assert_eq!(
            detail.address,
            Some(VirtualServiceAddress::Url("https://zoom.us/j/123".to_string()))
        );
        assert_eq!(detail.address.as_ref().unwrap().element_name(), "AddressUrl");
        assert!(detail.validate().is_ok());
    }

    #[test]
    fn test_availability_days() {
        let availability: Availability = serde_json::from_value(json!({
            "availableTime": [{"daysOfWeek": ["mon", "wed"], "allDay": true}]
        }))
        .unwrap();

        assert_eq!(
            availability.available_time[0].days_of_week,
            vec![DaysOfWeek::Mon, DaysOfWeek::Wed]
        );
    }
}
