//! The guest invite list for a trip.

use crate::error::{Error, Result};
use crate::validate::is_valid_email;

/// Ordered list of unique guest emails.
///
/// Entries are stored lowercase; no two entries are equal under
/// case-insensitive comparison, and insertion order is preserved for
/// display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestEmailList {
    emails: Vec<String>,
}

impl GuestEmailList {
    /// An empty invite list.
    #[must_use]
    pub const fn new() -> Self {
        Self { emails: Vec::new() }
    }

    /// Append a guest email to the end of the list.
    ///
    /// Fails with [`Error::Validation`] when the input is not a plausible
    /// email, and with [`Error::DuplicateGuest`] when the email is already
    /// invited (any case variant). The list is unchanged on failure.
    pub fn add(&mut self, email: &str) -> Result<()> {
        let normalized = email.trim().to_lowercase();
        if !is_valid_email(&normalized) {
            return Err(Error::Validation(
                "The guest email is not valid.".to_string(),
            ));
        }
        if self.contains(&normalized) {
            return Err(Error::DuplicateGuest(normalized));
        }

        self.emails.push(normalized);
        Ok(())
    }

    /// Remove a guest email; removing an absent email is a no-op.
    pub fn remove(&mut self, email: &str) {
        let normalized = email.trim().to_lowercase();
        self.emails.retain(|entry| *entry != normalized);
    }

    /// Whether the email is already invited (case-insensitive).
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        let normalized = email.trim().to_lowercase();
        self.emails.iter().any(|entry| *entry == normalized)
    }

    /// The invited emails, in invite order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.emails
    }

    /// Copy the invited emails out, in invite order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.emails.clone()
    }

    /// Number of invited guests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Whether nobody has been invited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn add_normalizes_to_lowercase_and_preserves_order() {
        let mut guests = GuestEmailList::new();
        guests.add("Bruno@Example.com").unwrap();
        guests.add("ana@example.com").unwrap();

        assert_eq!(guests.as_slice(), ["bruno@example.com", "ana@example.com"]);
    }

    #[test]
    fn adding_the_same_email_in_any_case_is_a_duplicate() {
        let mut guests = GuestEmailList::new();
        guests.add("ana@example.com").unwrap();

        let err = guests.add("ANA@EXAMPLE.COM").unwrap_err();
        match err {
            Error::DuplicateGuest(email) => assert_eq!(email, "ana@example.com"),
            other => panic!("expected duplicate guest error, got {other:?}"),
        }
        assert_eq!(guests.len(), 1);
    }

    #[test]
    fn add_rejects_malformed_emails_and_leaves_the_list_unchanged() {
        let mut guests = GuestEmailList::new();
        let err = guests.add("not-an-email").unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(guests.is_empty());
    }

    #[test]
    fn remove_is_a_noop_for_absent_emails() {
        let mut guests = GuestEmailList::new();
        guests.add("ana@example.com").unwrap();

        guests.remove("bruno@example.com");
        assert_eq!(guests.len(), 1);

        guests.remove("Ana@example.com");
        assert!(guests.is_empty());
    }
}
