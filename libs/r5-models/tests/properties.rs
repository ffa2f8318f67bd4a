//! Property-based tests over the resource models using QuickCheck

use ferrum_r5_models::document::{from_store_document, to_store_document};
use ferrum_r5_models::value_sets::{ParticipationStatus, SlotStatus};
use ferrum_r5_models::*;
use quickcheck::{QuickCheck, TestResult};

fn participant(idx: usize) -> AppointmentParticipant {
    AppointmentParticipant::new(
        Reference::to(format!("Practitioner/{}", idx)),
        ParticipationStatus::Accepted,
    )
}

#[test]
fn prop_wrong_resource_type_always_fails() {
    fn prop(tag: String) -> TestResult {
        if tag == Organization::RESOURCE_TYPE {
            return TestResult::discard();
        }

        let mut org = Organization::new();
        org.name = Some("Acme".to_string());
        org.resource_type = tag.clone();

        match org.validate() {
            Err(err) => TestResult::from_bool(
                err.kind()
                    == &ValidationErrorKind::InvalidDiscriminator {
                        expected: "Organization",
                        actual: tag,
                    },
            ),
            Ok(()) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

#[test]
fn prop_participant_cardinality_boundary() {
    fn prop(count: u8) -> bool {
        let count = (count % 16) as usize;
        let mut appt = Appointment::new(value_sets::AppointmentStatus::Booked, participant(0));
        appt.participant = (0..count).map(participant).collect();

        let result = appt.validate();
        if count == 0 {
            matches!(
                result.map_err(|e| e.kind().clone()),
                Err(ValidationErrorKind::MinCardinality {
                    name: "Participant",
                    min: 1,
                    actual: 0,
                })
            )
        } else {
            result.is_ok()
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u8) -> bool);
}

#[test]
fn prop_fault_index_is_reported() {
    fn prop(count: u8, broken: u8) -> TestResult {
        let count = (count % 16) as usize + 1;
        let broken = (broken % 16) as usize;
        if broken >= count {
            return TestResult::discard();
        }

        let mut appt = Appointment::new(value_sets::AppointmentStatus::Booked, participant(0));
        appt.participant = (0..count).map(participant).collect();
        appt.participant[broken].status = None;

        match appt.validate() {
            Err(err) => TestResult::from_bool(
                err.path() == format!("Participant[{}].Status", broken),
            ),
            Ok(()) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u8, u8) -> TestResult);
}

#[test]
fn prop_fail_fast_matches_first_exhaustive_error() {
    fn prop(schedule: bool, status: bool, start: bool, end: bool) -> bool {
        let slot = Slot {
            resource_type: Slot::RESOURCE_TYPE.to_string(),
            schedule: schedule.then(|| Reference::to("Schedule/1")),
            status: status.then_some(SlotStatus::Free),
            start: start.then(|| "2024-01-01T09:00:00Z".to_string()),
            end: end.then(|| "2024-01-01T09:30:00Z".to_string()),
            ..Slot::default()
        };

        match (slot.validate(), slot.validate_all()) {
            (Ok(()), Ok(())) => schedule && status && start && end,
            (Err(first), Err(all)) => {
                let missing = [!schedule, !status, !start, !end]
                    .iter()
                    .filter(|m| **m)
                    .count();
                all.first() == Some(&first) && all.len() == missing
            }
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(bool, bool, bool, bool) -> bool);
}

#[test]
fn prop_store_document_preserves_slot() {
    fn prop(comment: String, overbooked: Option<bool>) -> bool {
        let mut slot = Slot::new(
            Reference::to("Schedule/1"),
            SlotStatus::Busy,
            "2024-01-01T09:00:00Z",
            "2024-01-01T09:30:00Z",
        );
        slot.comment = Some(comment);
        slot.overbooked = overbooked;

        let doc = match to_store_document(&slot) {
            Ok(doc) => doc,
            Err(_) => return false,
        };
        from_store_document::<Slot>(doc).map(|back| back == slot).unwrap_or(false)
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(String, Option<bool>) -> bool);
}
