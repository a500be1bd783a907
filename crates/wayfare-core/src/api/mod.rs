//! Remote trip service client.
//!
//! Platform-agnostic HTTP client for the Wayfare API: trips, activities,
//! links, and participants all live behind one base URL. Failures map to
//! [`Error::Remote`] with the HTTP status and a compacted response body;
//! nothing is retried here.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{DayActivities, Link, Participant, Trip, TripId};
use crate::util::{compact_text, is_http_url};
use crate::wizard::NewTrip;

/// HTTP client for the Wayfare trip service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::Remote(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a trip and return the identifier the service assigned.
    pub async fn create_trip(&self, new_trip: &NewTrip) -> Result<TripId> {
        let response = self
            .client
            .post(format!("{}/trips", self.base_url))
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "destination": new_trip.destination,
                "starts_at": new_trip.starts_at,
                "ends_at": new_trip.ends_at,
                "emails_to_invite": new_trip.guest_emails,
            }))
            .send()
            .await
            .map_err(|error| Error::Remote(format!("Trip creation request failed: {error}")))?;
        let response = ensure_success(response, "Trip creation").await?;

        let payload = response.json::<CreateTripResponse>().await.map_err(|error| {
            Error::Remote(format!("Failed to parse trip creation response: {error}"))
        })?;
        Ok(payload.trip_id)
    }

    /// Fetch a trip by its identifier.
    pub async fn get_trip(&self, id: TripId) -> Result<Trip> {
        let response = self
            .client
            .get(format!("{}/trips/{id}", self.base_url))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|error| Error::Remote(format!("Trip lookup request failed: {error}")))?;
        let response = ensure_success(response, "Trip lookup").await?;

        let payload = response
            .json::<TripResponse>()
            .await
            .map_err(|error| Error::Remote(format!("Failed to parse trip response: {error}")))?;
        Ok(payload.trip)
    }

    /// Update a trip's destination and date range.
    pub async fn update_trip(
        &self,
        id: TripId,
        destination: &str,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<()> {
        let response = self
            .client
            .put(format!("{}/trips/{id}", self.base_url))
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "destination": destination,
                "starts_at": starts_at,
                "ends_at": ends_at,
            }))
            .send()
            .await
            .map_err(|error| Error::Remote(format!("Trip update request failed: {error}")))?;
        ensure_success(response, "Trip update").await?;
        Ok(())
    }

    /// Schedule a new activity on a trip.
    pub async fn create_activity(
        &self,
        trip_id: TripId,
        title: &str,
        occurs_at: DateTime<Utc>,
    ) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/trips/{trip_id}/activities", self.base_url))
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "title": title,
                "occurs_at": occurs_at,
            }))
            .send()
            .await
            .map_err(|error| Error::Remote(format!("Activity creation request failed: {error}")))?;
        ensure_success(response, "Activity creation").await?;
        Ok(())
    }

    /// List a trip's activities, pre-bucketed per day by the service.
    pub async fn list_activities(&self, trip_id: TripId) -> Result<Vec<DayActivities>> {
        let response = self
            .client
            .get(format!("{}/trips/{trip_id}/activities", self.base_url))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|error| Error::Remote(format!("Activity listing request failed: {error}")))?;
        let response = ensure_success(response, "Activity listing").await?;

        let payload = response
            .json::<ActivitiesResponse>()
            .await
            .map_err(|error| Error::Remote(format!("Failed to parse activities response: {error}")))?;
        Ok(payload.activities)
    }

    /// Attach a new link to a trip.
    pub async fn create_link(&self, trip_id: TripId, title: &str, url: &str) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/trips/{trip_id}/links", self.base_url))
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "title": title,
                "url": url,
            }))
            .send()
            .await
            .map_err(|error| Error::Remote(format!("Link creation request failed: {error}")))?;
        ensure_success(response, "Link creation").await?;
        Ok(())
    }

    /// List a trip's links.
    pub async fn list_links(&self, trip_id: TripId) -> Result<Vec<Link>> {
        let response = self
            .client
            .get(format!("{}/trips/{trip_id}/links", self.base_url))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|error| Error::Remote(format!("Link listing request failed: {error}")))?;
        let response = ensure_success(response, "Link listing").await?;

        let payload = response
            .json::<LinksResponse>()
            .await
            .map_err(|error| Error::Remote(format!("Failed to parse links response: {error}")))?;
        Ok(payload.links)
    }

    /// List a trip's participants.
    pub async fn list_participants(&self, trip_id: TripId) -> Result<Vec<Participant>> {
        let response = self
            .client
            .get(format!("{}/trips/{trip_id}/participants", self.base_url))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|error| {
                Error::Remote(format!("Participant listing request failed: {error}"))
            })?;
        let response = ensure_success(response, "Participant listing").await?;

        let payload = response.json::<ParticipantsResponse>().await.map_err(|error| {
            Error::Remote(format!("Failed to parse participants response: {error}"))
        })?;
        Ok(payload.participants)
    }
}

async fn ensure_success(response: reqwest::Response, action: &str) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Remote(format!(
        "{action} failed with HTTP {status}: {}",
        compact_text(&body)
    )))
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Validation(
            "The API base URL must not be empty.".to_string(),
        ));
    }
    if !is_http_url(&base) {
        return Err(Error::Validation(
            "The API base URL must include http:// or https://.".to_string(),
        ));
    }
    Ok(base)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTripResponse {
    trip_id: TripId,
}

#[derive(Debug, Clone, Deserialize)]
struct TripResponse {
    trip: Trip,
}

#[derive(Debug, Clone, Deserialize)]
struct ActivitiesResponse {
    activities: Vec<DayActivities>,
}

#[derive(Debug, Clone, Deserialize)]
struct LinksResponse {
    links: Vec<Link>,
}

#[derive(Debug, Clone, Deserialize)]
struct ParticipantsResponse {
    participants: Vec<Participant>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(ApiClient::new("").is_err());
        assert!(ApiClient::new("example.com").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            ApiClient::new("https://api.example.com/").unwrap().base_url(),
            "https://api.example.com"
        );
    }

    #[test]
    fn create_trip_response_uses_the_service_field_name() {
        let payload: CreateTripResponse = serde_json::from_str(
            r#"{"tripId": "6e9cf1de-5c8b-4b52-9e79-2c8a5ab706ef"}"#,
        )
        .unwrap();
        assert_eq!(
            payload.trip_id.as_str(),
            "6e9cf1de-5c8b-4b52-9e79-2c8a5ab706ef"
        );
    }

    #[test]
    fn activity_listing_parses_day_buckets() {
        let payload: ActivitiesResponse = serde_json::from_str(
            r#"{
                "activities": [
                    {
                        "date": "2024-06-01T00:00:00Z",
                        "activities": [
                            {
                                "id": "0e80aa9f-0ee9-48b5-8c6c-2c0c3e2a7e40",
                                "title": "Breakfast",
                                "occurs_at": "2024-06-01T08:00:00Z"
                            }
                        ]
                    },
                    {
                        "date": "2024-06-02T00:00:00Z",
                        "activities": []
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.activities.len(), 2);
        assert_eq!(payload.activities[0].activities[0].title, "Breakfast");
        assert!(payload.activities[1].activities.is_empty());
    }
}
