//! Day-by-day grouping of trip activities.
//!
//! The remote service stores activities as flat timestamped records (and can
//! hand them back pre-bucketed per day); the trip screen wants them as
//! chronological day sections. "Is this activity already in the past" is a
//! view-time judgement, so the clock is an explicit parameter here rather
//! than a hidden read.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::{Activity, ActivityId, DayActivities};

/// An activity decorated for display within a day section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledActivity {
    /// Unique identifier
    pub id: ActivityId,
    /// What happens
    pub title: String,
    /// When it happens
    pub occurs_at: DateTime<Utc>,
    /// Whether the activity occurred before the clock passed to grouping
    pub is_past: bool,
}

/// All activities of one calendar day, ready for a sectioned list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    /// The calendar day this section covers
    pub date: NaiveDate,
    /// Day of month, for the section header
    pub day_number: u32,
    /// Full weekday name, for the section header
    pub weekday_name: String,
    /// The day's activities, ascending by time
    pub items: Vec<ScheduledActivity>,
}

impl DaySection {
    fn build(date: NaiveDate, mut activities: Vec<Activity>, now: DateTime<Utc>) -> Self {
        activities.sort_by_key(|activity| activity.occurs_at);
        let items = activities
            .into_iter()
            .map(|activity| ScheduledActivity {
                is_past: activity.occurs_at < now,
                id: activity.id,
                title: activity.title,
                occurs_at: activity.occurs_at,
            })
            .collect();

        Self {
            date,
            day_number: date.day(),
            weekday_name: date.format("%A").to_string(),
            items,
        }
    }
}

/// Group a flat, unordered activity list into day sections, ascending by
/// date. Only days that actually carry activities produce a section.
#[must_use]
pub fn group_activities(activities: &[Activity], now: DateTime<Utc>) -> Vec<DaySection> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Activity>> = BTreeMap::new();
    for activity in activities {
        by_day
            .entry(activity.occurs_at.date_naive())
            .or_default()
            .push(activity.clone());
    }

    by_day
        .into_iter()
        .map(|(date, day_activities)| DaySection::build(date, day_activities, now))
        .collect()
}

/// Build day sections from the service's pre-bucketed listing shape.
///
/// The bucket's own date drives the section header; empty buckets are
/// dropped rather than rendered as empty sections.
#[must_use]
pub fn sections_from_day_buckets(buckets: Vec<DayActivities>, now: DateTime<Utc>) -> Vec<DaySection> {
    let mut sections: Vec<DaySection> = buckets
        .into_iter()
        .filter(|bucket| !bucket.activities.is_empty())
        .map(|bucket| DaySection::build(bucket.date.date_naive(), bucket.activities, now))
        .collect();

    sections.sort_by_key(|section| section.date);
    sections
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(value: &str) -> DateTime<Utc> {
        value.parse().unwrap()
    }

    fn activity(title: &str, occurs_at: &str) -> Activity {
        Activity {
            id: ActivityId::new(),
            title: title.to_string(),
            occurs_at: at(occurs_at),
        }
    }

    #[test]
    fn groups_by_calendar_day_in_ascending_order() {
        let activities = vec![
            activity("Museum", "2024-06-02T14:00:00Z"),
            activity("Breakfast", "2024-06-01T08:00:00Z"),
            activity("Beach", "2024-06-02T09:00:00Z"),
        ];

        let sections = group_activities(&activities, at("2024-06-01T00:00:00Z"));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].date, "2024-06-01".parse().unwrap());
        assert_eq!(sections[0].day_number, 1);
        assert_eq!(sections[0].weekday_name, "Saturday");
        assert_eq!(sections[1].date, "2024-06-02".parse().unwrap());

        let day_two_titles: Vec<&str> = sections[1]
            .items
            .iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(day_two_titles, vec!["Beach", "Museum"]);
    }

    #[test]
    fn reflattened_sections_are_a_permutation_of_the_input() {
        let activities = vec![
            activity("A", "2024-06-03T10:00:00Z"),
            activity("B", "2024-06-01T10:00:00Z"),
            activity("C", "2024-06-03T08:00:00Z"),
            activity("D", "2024-06-02T12:00:00Z"),
        ];

        let sections = group_activities(&activities, at("2024-06-02T00:00:00Z"));
        let mut flattened: Vec<ActivityId> = sections
            .iter()
            .flat_map(|section| section.items.iter().map(|item| item.id))
            .collect();
        let mut input_ids: Vec<ActivityId> = activities.iter().map(|item| item.id).collect();

        assert_eq!(flattened.len(), input_ids.len());
        flattened.sort_by_key(ActivityId::as_str);
        input_ids.sort_by_key(ActivityId::as_str);
        assert_eq!(flattened, input_ids);
    }

    #[test]
    fn is_past_reflects_the_explicit_clock() {
        let activities = vec![
            activity("Done", "2024-06-01T08:00:00Z"),
            activity("Upcoming", "2024-06-01T18:00:00Z"),
        ];

        let sections = group_activities(&activities, at("2024-06-01T12:00:00Z"));
        let items = &sections[0].items;

        assert!(items[0].is_past);
        assert!(!items[1].is_past);
    }

    #[test]
    fn days_without_activities_are_never_synthesized() {
        let activities = vec![
            activity("First", "2024-06-01T08:00:00Z"),
            activity("Last", "2024-06-10T08:00:00Z"),
        ];

        let sections = group_activities(&activities, at("2024-06-01T00:00:00Z"));

        assert_eq!(sections.len(), 2);
        assert!(sections.iter().all(|section| !section.items.is_empty()));
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(group_activities(&[], at("2024-06-01T00:00:00Z")).is_empty());
    }

    #[test]
    fn service_buckets_drop_empty_days_and_sort_sections() {
        let buckets = vec![
            DayActivities {
                date: at("2024-06-02T00:00:00Z"),
                activities: vec![
                    activity("Museum", "2024-06-02T14:00:00Z"),
                    activity("Beach", "2024-06-02T09:00:00Z"),
                ],
            },
            DayActivities {
                date: at("2024-06-01T00:00:00Z"),
                activities: vec![],
            },
            DayActivities {
                date: at("2024-05-31T00:00:00Z"),
                activities: vec![activity("Packing", "2024-05-31T20:00:00Z")],
            },
        ];

        let sections = sections_from_day_buckets(buckets, at("2024-06-01T00:00:00Z"));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].date, "2024-05-31".parse().unwrap());
        assert_eq!(sections[1].date, "2024-06-02".parse().unwrap());
        assert_eq!(sections[1].items[0].title, "Beach");
        assert!(sections[0].items[0].is_past);
    }
}
