//! The two-step new-trip wizard.
//!
//! One explicit draft struct with pure transition methods, instead of a
//! screenful of independently mutated fields: the stage can only move
//! forward through the validation gate, and only `edit_details` moves it
//! back.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::calendar::DateSelection;
use crate::error::{Error, Result};
use crate::guests::GuestEmailList;

/// Shown when the destination or the dates are missing.
pub const MSG_MISSING_DETAILS: &str = "Fill in all the trip details to continue.";

/// Shown when the destination is present but shorter than 4 characters.
pub const MSG_SHORT_DESTINATION: &str = "The destination must be at least 4 characters.";

const MIN_DESTINATION_CHARS: usize = 4;

/// Which step of the wizard is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TripStage {
    /// Destination and date range
    #[default]
    TripDetails,
    /// Optional guest emails, then confirm
    AddGuests,
}

/// Validated payload handed to the remote service on confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrip {
    /// Where the trip goes
    pub destination: String,
    /// First day, at midnight UTC
    pub starts_at: DateTime<Utc>,
    /// Last day, at midnight UTC
    pub ends_at: DateTime<Utc>,
    /// Guest emails in invite order; may be empty
    pub guest_emails: Vec<String>,
}

/// In-progress state of the new-trip form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripDraft {
    stage: TripStage,
    /// Destination input, as typed
    pub destination: String,
    /// Selected date range
    pub dates: DateSelection,
    /// Invited guest emails
    pub guests: GuestEmailList,
}

impl TripDraft {
    /// A fresh draft at the trip-details step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active wizard step.
    #[must_use]
    pub const fn stage(&self) -> TripStage {
        self.stage
    }

    /// Fold a calendar click into the date selection.
    pub fn select_day(&mut self, day: NaiveDate) {
        self.dates = self.dates.select(day);
    }

    /// Move from trip details to the guest step.
    ///
    /// Fails without changing stage when the details guard rejects the
    /// draft; already being at the guest step is a no-op.
    pub fn advance(&mut self) -> Result<()> {
        self.validate_details()?;
        self.stage = TripStage::AddGuests;
        Ok(())
    }

    /// Go back to the trip-details step to change location or dates.
    pub fn edit_details(&mut self) {
        self.stage = TripStage::TripDetails;
    }

    /// Re-validate the details guard and produce the creation payload.
    ///
    /// The draft itself is untouched, so a failed remote call can retry
    /// from exactly this state.
    pub fn confirm(&self) -> Result<NewTrip> {
        let (starts_at, ends_at) = self.validate_details()?;

        Ok(NewTrip {
            destination: self.destination.trim().to_string(),
            starts_at: midnight_utc(starts_at),
            ends_at: midnight_utc(ends_at),
            guest_emails: self.guests.to_vec(),
        })
    }

    fn validate_details(&self) -> Result<(NaiveDate, NaiveDate)> {
        let destination = self.destination.trim();
        let (Some(starts_at), Some(ends_at)) = (self.dates.starts_at, self.dates.ends_at) else {
            return Err(Error::Validation(MSG_MISSING_DETAILS.to_string()));
        };
        if destination.is_empty() {
            return Err(Error::Validation(MSG_MISSING_DETAILS.to_string()));
        }
        if destination.chars().count() < MIN_DESTINATION_CHARS {
            return Err(Error::Validation(MSG_SHORT_DESTINATION.to_string()));
        }

        Ok((starts_at, ends_at))
    }
}

fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn day(value: &str) -> NaiveDate {
        value.parse().unwrap()
    }

    fn draft_with(destination: &str, start: &str, end: &str) -> TripDraft {
        let mut draft = TripDraft::new();
        draft.destination = destination.to_string();
        draft.select_day(day(start));
        draft.select_day(day(end));
        draft
    }

    fn validation_message(err: &Error) -> &str {
        match err {
            Error::Validation(message) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn advance_rejects_missing_fields_with_the_missing_message() {
        let mut draft = TripDraft::new();
        draft.destination = String::new();
        draft.select_day(day("2024-06-01"));
        draft.select_day(day("2024-06-10"));

        let err = draft.advance().unwrap_err();
        assert_eq!(validation_message(&err), MSG_MISSING_DETAILS);
        assert_eq!(draft.stage(), TripStage::TripDetails);
    }

    #[test]
    fn advance_rejects_short_destination_with_the_short_message() {
        let mut draft = draft_with("NYC", "2024-06-01", "2024-06-10");

        let err = draft.advance().unwrap_err();
        assert_eq!(validation_message(&err), MSG_SHORT_DESTINATION);
        assert_eq!(draft.stage(), TripStage::TripDetails);
    }

    #[test]
    fn advance_rejects_incomplete_dates() {
        let mut draft = TripDraft::new();
        draft.destination = "Paris".to_string();
        draft.select_day(day("2024-06-01"));

        let err = draft.advance().unwrap_err();
        assert_eq!(validation_message(&err), MSG_MISSING_DETAILS);
    }

    #[test]
    fn advance_moves_a_valid_draft_to_the_guest_step() {
        let mut draft = draft_with("Paris", "2024-06-01", "2024-06-10");

        draft.advance().unwrap();
        assert_eq!(draft.stage(), TripStage::AddGuests);
    }

    #[test]
    fn whitespace_destination_counts_as_missing_not_short() {
        let mut draft = draft_with("   ", "2024-06-01", "2024-06-10");

        let err = draft.advance().unwrap_err();
        assert_eq!(validation_message(&err), MSG_MISSING_DETAILS);
    }

    #[test]
    fn edit_details_returns_to_the_first_step_unconditionally() {
        let mut draft = draft_with("Paris", "2024-06-01", "2024-06-10");
        draft.advance().unwrap();

        draft.edit_details();
        assert_eq!(draft.stage(), TripStage::TripDetails);
    }

    #[test]
    fn confirm_produces_the_creation_payload() {
        let mut draft = draft_with("  Paris  ", "2024-06-01", "2024-06-10");
        draft.advance().unwrap();

        let new_trip = draft.confirm().unwrap();
        assert_eq!(new_trip.destination, "Paris");
        assert_eq!(
            new_trip.starts_at,
            "2024-06-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(
            new_trip.ends_at,
            "2024-06-10T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert!(new_trip.guest_emails.is_empty());
    }

    #[test]
    fn confirm_revalidates_after_editing_details() {
        let mut draft = draft_with("Paris", "2024-06-01", "2024-06-10");
        draft.advance().unwrap();

        draft.edit_details();
        draft.destination = "Rio".to_string();
        draft.advance().unwrap_err();

        let err = draft.confirm().unwrap_err();
        assert_eq!(validation_message(&err), MSG_SHORT_DESTINATION);
    }

    #[test]
    fn confirm_carries_the_guest_list_in_invite_order() {
        let mut draft = draft_with("Paris", "2024-06-01", "2024-06-10");
        draft.advance().unwrap();
        draft.guests.add("Bruno@Example.com").unwrap();
        draft.guests.add("ana@example.com").unwrap();

        let new_trip = draft.confirm().unwrap();
        assert_eq!(
            new_trip.guest_emails,
            vec!["bruno@example.com", "ana@example.com"]
        );
    }
}
