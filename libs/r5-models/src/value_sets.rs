//! Required-binding value sets used by the R5 models.
//!
//! Each set is closed: unknown codes fail deserialization.

value_set! {
    /// [AdministrativeGender](http://hl7.org/fhir/ValueSet/administrative-gender)
    AdministrativeGender {
        Male => "male",
        Female => "female",
        Other => "other",
        Unknown => "unknown",
    }
}

value_set! {
    /// [AddressType](http://hl7.org/fhir/ValueSet/address-type)
    AddressType {
        Postal => "postal",
        Physical => "physical",
        Both => "both",
    }
}

value_set! {
    /// [AddressUse](http://hl7.org/fhir/ValueSet/address-use)
    AddressUse {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Billing => "billing",
    }
}

value_set! {
    /// [AppointmentStatus](http://hl7.org/fhir/ValueSet/appointmentstatus)
    AppointmentStatus {
        Proposed => "proposed",
        Pending => "pending",
        Booked => "booked",
        Arrived => "arrived",
        Fulfilled => "fulfilled",
        Cancelled => "cancelled",
        Noshow => "noshow",
        EnteredInError => "entered-in-error",
        CheckedIn => "checked-in",
        Waitlist => "waitlist",
    }
}

value_set! {
    /// [AppointmentResponseStatus](http://hl7.org/fhir/ValueSet/appointmentresponse-status)
    AppointmentResponseStatus {
        Accepted => "accepted",
        Declined => "declined",
        Tentative => "tentative",
        NeedsAction => "needs-action",
        EnteredInError => "entered-in-error",
    }
}

value_set! {
    /// [BundleType](http://hl7.org/fhir/ValueSet/bundle-type)
    BundleType {
        Document => "document",
        Message => "message",
        Transaction => "transaction",
        TransactionResponse => "transaction-response",
        Batch => "batch",
        BatchResponse => "batch-response",
        History => "history",
        Searchset => "searchset",
        Collection => "collection",
        SubscriptionNotification => "subscription-notification",
    }
}

value_set! {
    /// [ContactPointSystem](http://hl7.org/fhir/ValueSet/contact-point-system)
    ContactPointSystem {
        Phone => "phone",
        Fax => "fax",
        Email => "email",
        Pager => "pager",
        Url => "url",
        Sms => "sms",
        Other => "other",
    }
}

value_set! {
    /// [ContactPointUse](http://hl7.org/fhir/ValueSet/contact-point-use)
    ContactPointUse {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Mobile => "mobile",
    }
}

value_set! {
    /// [DaysOfWeek](http://hl7.org/fhir/ValueSet/days-of-week)
    DaysOfWeek {
        Mon => "mon",
        Tue => "tue",
        Wed => "wed",
        Thu => "thu",
        Fri => "fri",
        Sat => "sat",
        Sun => "sun",
    }
}

value_set! {
    /// [EndpointStatus](http://hl7.org/fhir/ValueSet/endpoint-status)
    EndpointStatus {
        Active => "active",
        Limited => "limited",
        Suspended => "suspended",
        Error => "error",
        Off => "off",
        EnteredInError => "entered-in-error",
    }
}

value_set! {
    /// [HTTPVerb](http://hl7.org/fhir/ValueSet/http-verb)
    HttpVerb {
        Get => "GET",
        Head => "HEAD",
        Post => "POST",
        Put => "PUT",
        Delete => "DELETE",
        Patch => "PATCH",
    }
}

value_set! {
    /// [IdentifierUse](http://hl7.org/fhir/ValueSet/identifier-use)
    IdentifierUse {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
        Old => "old",
    }
}

value_set! {
    /// [IngredientManufacturerRole](http://hl7.org/fhir/ValueSet/ingredient-manufacturer-role)
    IngredientManufacturerRole {
        Allowed => "allowed",
        Possible => "possible",
        Actual => "actual",
    }
}

value_set! {
    /// [LinkType](http://hl7.org/fhir/ValueSet/link-type)
    LinkType {
        ReplacedBy => "replaced-by",
        Replaces => "replaces",
        Refer => "refer",
        Seealso => "seealso",
    }
}

value_set! {
    /// [NameUse](http://hl7.org/fhir/ValueSet/name-use)
    NameUse {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Nickname => "nickname",
        Anonymous => "anonymous",
        Old => "old",
        Maiden => "maiden",
    }
}

value_set! {
    /// [NarrativeStatus](http://hl7.org/fhir/ValueSet/narrative-status)
    NarrativeStatus {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
}

value_set! {
    /// [ParticipationStatus](http://hl7.org/fhir/ValueSet/participationstatus)
    ParticipationStatus {
        Accepted => "accepted",
        Declined => "declined",
        Tentative => "tentative",
        NeedsAction => "needs-action",
    }
}

value_set! {
    /// [PublicationStatus](http://hl7.org/fhir/ValueSet/publication-status)
    PublicationStatus {
        Draft => "draft",
        Active => "active",
        Retired => "retired",
        Unknown => "unknown",
    }
}

value_set! {
    /// [QuantityComparator](http://hl7.org/fhir/ValueSet/quantity-comparator)
    QuantityComparator {
        LessThan => "<",
        LessOrEqual => "<=",
        GreaterOrEqual => ">=",
        GreaterThan => ">",
        Sufficient => "ad",
    }
}

value_set! {
    /// [SearchEntryMode](http://hl7.org/fhir/ValueSet/search-entry-mode)
    SearchEntryMode {
        Match => "match",
        Include => "include",
        Outcome => "outcome",
    }
}

value_set! {
    /// [SlotStatus](http://hl7.org/fhir/ValueSet/slotstatus)
    SlotStatus {
        Busy => "busy",
        Free => "free",
        BusyUnavailable => "busy-unavailable",
        BusyTentative => "busy-tentative",
        EnteredInError => "entered-in-error",
    }
}
