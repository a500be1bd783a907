//! Participant model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a trip participant, assigned by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    /// Create a new unique participant ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the string representation of this ID.
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ParticipantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// An invited email address associated with a trip on the remote side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier
    pub id: ParticipantId,
    /// Display name, once the guest has confirmed
    #[serde(default)]
    pub name: Option<String>,
    /// Invited email address
    pub email: String,
    /// Whether the guest confirmed participation
    #[serde(default)]
    pub is_confirmed: bool,
}

impl Participant {
    /// Display label for the participant list; falls back to the email's
    /// local part when no name has been set.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or(&self.email)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: Option<&str>, email: &str) -> Participant {
        Participant {
            id: ParticipantId::new(),
            name: name.map(ToString::to_string),
            email: email.to_string(),
            is_confirmed: false,
        }
    }

    #[test]
    fn display_name_prefers_confirmed_name() {
        let p = participant(Some("Ana"), "ana@example.com");
        assert_eq!(p.display_name(), "Ana");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let p = participant(None, "ana@example.com");
        assert_eq!(p.display_name(), "ana");

        let blank = participant(Some("   "), "bruno@example.com");
        assert_eq!(blank.display_name(), "bruno");
    }
}
