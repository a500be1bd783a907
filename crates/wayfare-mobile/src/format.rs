//! Display formatting helpers for the mobile screens.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use wayfare_core::Trip;

const MAX_HEADLINE_DESTINATION_CHARS: usize = 14;

/// Single-letter column headers for the calendar grid, Sunday first.
pub const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Header line for the trip screen, e.g. `"Paris from 01 to 10 of Jun"`.
///
/// Long destinations are cut at 14 characters with an ellipsis so the
/// header stays on one line.
pub fn trip_headline(trip: &Trip) -> String {
    let destination = shorten_destination(&trip.destination);
    format!(
        "{destination} from {} to {} of {}",
        trip.starts_at.format("%d"),
        trip.ends_at.format("%d"),
        trip.ends_at.format("%b")
    )
}

fn shorten_destination(destination: &str) -> String {
    let trimmed = destination.trim();
    if trimmed.chars().count() > MAX_HEADLINE_DESTINATION_CHARS {
        let shortened: String = trimmed
            .chars()
            .take(MAX_HEADLINE_DESTINATION_CHARS)
            .collect();
        format!("{shortened}...")
    } else {
        trimmed.to_string()
    }
}

/// Summary for the guest field on the wizard, empty when nobody is invited.
pub fn guest_count_label(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => "1 person invited".to_string(),
        n => format!("{n} people invited"),
    }
}

/// Keep only digits from the hour field, capped at two characters.
pub fn sanitize_hour_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(2)
        .collect()
}

/// Parse the hour field into an hour of day, rejecting values past 23.
pub fn parse_activity_hour(raw: &str) -> Option<u32> {
    let hour: u32 = raw.trim().parse().ok()?;
    (hour <= 23).then_some(hour)
}

/// Combine a picked day and an hour into the activity timestamp.
pub fn activity_occurs_at(day: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    day.and_hms_opt(hour, 0, 0).map(|moment| moment.and_utc())
}

/// Clock label for an activity row, e.g. `"08:00h"`.
pub fn hour_label(occurs_at: DateTime<Utc>) -> String {
    format!("{}h", occurs_at.format("%H:%M"))
}

/// Short label for a picked day, e.g. `"5 of Jun"`.
pub fn short_day_label(day: NaiveDate) -> String {
    format!("{} of {}", day.format("%-d"), day.format("%b"))
}

/// Title for the calendar month header, e.g. `"June 2024"`.
pub fn month_title(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// First day of the previous month.
pub fn previous_month(month: NaiveDate) -> NaiveDate {
    let first = month.with_day(1).unwrap_or(month);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

/// First day of the next month.
pub fn next_month(month: NaiveDate) -> NaiveDate {
    let first = month.with_day(1).unwrap_or(month);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

/// Lay a month out as Sunday-first calendar weeks; `None` cells pad the
/// first and last week so every row has seven columns.
pub fn month_grid(month: NaiveDate) -> Vec<Vec<Option<NaiveDate>>> {
    let Some(first) = month.with_day(1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    for day in first
        .iter_days()
        .take_while(|day| day.month() == first.month())
    {
        cells.push(Some(day));
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells.chunks(7).map(<[Option<NaiveDate>]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wayfare_core::TripId;

    use super::*;

    fn day(value: &str) -> NaiveDate {
        value.parse().unwrap()
    }

    fn trip(destination: &str) -> Trip {
        Trip {
            id: TripId::new(),
            destination: destination.to_string(),
            starts_at: "2024-06-01T00:00:00Z".parse().unwrap(),
            ends_at: "2024-06-10T00:00:00Z".parse().unwrap(),
            guest_emails: Vec::new(),
        }
    }

    #[test]
    fn headline_spells_out_the_trip() {
        assert_eq!(trip_headline(&trip("Paris")), "Paris from 01 to 10 of Jun");
    }

    #[test]
    fn headline_truncates_long_destinations_at_fourteen_chars() {
        assert_eq!(
            trip_headline(&trip("Florianopolis!")),
            "Florianopolis! from 01 to 10 of Jun"
        );
        assert_eq!(
            trip_headline(&trip("Rio de Janeiro, Brazil")),
            "Rio de Janeiro... from 01 to 10 of Jun"
        );
    }

    #[test]
    fn guest_count_label_handles_singular_and_plural() {
        assert_eq!(guest_count_label(0), "");
        assert_eq!(guest_count_label(1), "1 person invited");
        assert_eq!(guest_count_label(3), "3 people invited");
    }

    #[test]
    fn hour_input_keeps_at_most_two_digits() {
        assert_eq!(sanitize_hour_input("1.4"), "14");
        assert_eq!(sanitize_hour_input("0,9"), "09");
        assert_eq!(sanitize_hour_input("1234"), "12");
        assert_eq!(sanitize_hour_input("ten"), "");
    }

    #[test]
    fn activity_hours_stop_at_twenty_three() {
        assert_eq!(parse_activity_hour("0"), Some(0));
        assert_eq!(parse_activity_hour("23"), Some(23));
        assert_eq!(parse_activity_hour("24"), None);
        assert_eq!(parse_activity_hour(""), None);
    }

    #[test]
    fn occurs_at_combines_day_and_hour() {
        let occurs_at = activity_occurs_at(day("2024-06-05"), 14).unwrap();
        assert_eq!(
            occurs_at,
            "2024-06-05T14:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(hour_label(occurs_at), "14:00h");
    }

    #[test]
    fn short_day_label_reads_naturally() {
        assert_eq!(short_day_label(day("2024-06-05")), "5 of Jun");
    }

    #[test]
    fn month_grid_aligns_sunday_first() {
        let weeks = month_grid(day("2024-06-15"));

        assert!(weeks.iter().all(|week| week.len() == 7));
        // June 2024 starts on a Saturday.
        assert_eq!(weeks[0][6], Some(day("2024-06-01")));
        assert!(weeks[0][..6].iter().all(Option::is_none));

        let total_days = weeks.iter().flatten().filter(|cell| cell.is_some()).count();
        assert_eq!(total_days, 30);
    }

    #[test]
    fn month_navigation_steps_whole_months() {
        assert_eq!(next_month(day("2024-06-15")), day("2024-07-01"));
        assert_eq!(previous_month(day("2024-01-15")), day("2023-12-01"));
        assert_eq!(month_title(day("2024-06-15")), "June 2024");
    }
}
