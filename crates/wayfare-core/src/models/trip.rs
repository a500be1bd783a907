//! Trip model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a trip, assigned by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId(Uuid);

impl TripId {
    /// Create a new unique trip ID.
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

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TripId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A trip as held by the remote service.
///
/// The client only ever reads and updates this projection; trips are never
/// deleted from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier
    pub id: TripId,
    /// Where the trip goes
    pub destination: String,
    /// First day of the trip
    pub starts_at: DateTime<Utc>,
    /// Last day of the trip
    pub ends_at: DateTime<Utc>,
    /// Invited guest emails, in invite order; the service may omit this
    #[serde(default)]
    pub guest_emails: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_id_unique() {
        let id1 = TripId::new();
        let id2 = TripId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn trip_id_parse_roundtrip() {
        let id = TripId::new();
        let parsed: TripId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn trip_deserializes_without_guest_emails() {
        let trip: Trip = serde_json::from_str(
            r#"{
                "id": "6e9cf1de-5c8b-4b52-9e79-2c8a5ab706ef",
                "destination": "Paris",
                "starts_at": "2024-06-01T00:00:00Z",
                "ends_at": "2024-06-10T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(trip.destination, "Paris");
        assert!(trip.guest_emails.is_empty());
    }
}
