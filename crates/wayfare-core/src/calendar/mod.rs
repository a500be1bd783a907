//! Date-range selection for the trip calendar.
//!
//! Turns a click stream of calendar days into a normalized start/end range
//! plus the set of days to mark as selected. Selection state is an
//! immutable value; every click produces a new one.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Marker attached to a calendar day that belongs to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMark {
    /// Whether the day renders as selected
    pub selected: bool,
}

/// A start/end pair of calendar days, filled in by successive clicks.
///
/// Invariant: when both days are set, `starts_at <= ends_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateSelection {
    /// First day of the range
    pub starts_at: Option<NaiveDate>,
    /// Last day of the range
    pub ends_at: Option<NaiveDate>,
}

impl DateSelection {
    /// An empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            starts_at: None,
            ends_at: None,
        }
    }

    /// Fold one clicked day into the selection.
    ///
    /// A click on an empty or completed selection restarts the range at the
    /// clicked day. A click while only the start is set completes the range,
    /// swapping the two days when the click lands before the start; clicking
    /// the start day again collapses to a one-day range.
    #[must_use]
    pub fn select(self, clicked_day: NaiveDate) -> Self {
        match (self.starts_at, self.ends_at) {
            (Some(starts_at), None) => {
                if clicked_day < starts_at {
                    Self {
                        starts_at: Some(clicked_day),
                        ends_at: Some(starts_at),
                    }
                } else {
                    Self {
                        starts_at: Some(starts_at),
                        ends_at: Some(clicked_day),
                    }
                }
            }
            _ => Self {
                starts_at: Some(clicked_day),
                ends_at: None,
            },
        }
    }

    /// Whether both ends of the range are set.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.starts_at.is_some() && self.ends_at.is_some()
    }

    /// Every day of the selection, start to end inclusive, mapped to its
    /// selected marker. A lone start marks just that day.
    #[must_use]
    pub fn marked_days(&self) -> BTreeMap<NaiveDate, DayMark> {
        let mut marked = BTreeMap::new();
        let Some(starts_at) = self.starts_at else {
            return marked;
        };
        let ends_at = self.ends_at.unwrap_or(starts_at);

        for day in starts_at.iter_days().take_while(|day| *day <= ends_at) {
            marked.insert(day, DayMark { selected: true });
        }
        marked
    }

    /// Human summary of the selection, e.g. `"5 to 12 of June"`.
    ///
    /// Empty when nothing is selected; a lone start renders as
    /// `"5 of June"`. The month is taken from the end of the range.
    #[must_use]
    pub fn range_text(&self) -> String {
        match (self.starts_at, self.ends_at) {
            (Some(starts_at), Some(ends_at)) => format!(
                "{} to {} of {}",
                starts_at.format("%-d"),
                ends_at.format("%-d"),
                ends_at.format("%B")
            ),
            (Some(starts_at), None) => {
                format!("{} of {}", starts_at.format("%-d"), starts_at.format("%B"))
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn day(value: &str) -> NaiveDate {
        value.parse().unwrap()
    }

    #[test]
    fn first_click_sets_start_only() {
        let selection = DateSelection::new().select(day("2024-06-05"));

        assert_eq!(selection.starts_at, Some(day("2024-06-05")));
        assert_eq!(selection.ends_at, None);
        assert!(!selection.is_complete());
    }

    #[test]
    fn second_click_after_start_completes_range() {
        let selection = DateSelection::new()
            .select(day("2024-06-05"))
            .select(day("2024-06-12"));

        assert_eq!(selection.starts_at, Some(day("2024-06-05")));
        assert_eq!(selection.ends_at, Some(day("2024-06-12")));
    }

    #[test]
    fn clicks_in_either_order_yield_the_same_range() {
        let forward = DateSelection::new()
            .select(day("2024-06-05"))
            .select(day("2024-06-12"));
        let backward = DateSelection::new()
            .select(day("2024-06-12"))
            .select(day("2024-06-05"));

        assert_eq!(forward, backward);
        assert_eq!(forward.starts_at, Some(day("2024-06-05")));
        assert_eq!(forward.ends_at, Some(day("2024-06-12")));
    }

    #[test]
    fn clicking_the_start_day_again_collapses_to_one_day() {
        let selection = DateSelection::new()
            .select(day("2024-06-05"))
            .select(day("2024-06-05"));

        assert_eq!(selection.starts_at, Some(day("2024-06-05")));
        assert_eq!(selection.ends_at, Some(day("2024-06-05")));
    }

    #[test]
    fn click_on_completed_range_restarts_at_that_day() {
        let selection = DateSelection::new()
            .select(day("2024-06-05"))
            .select(day("2024-06-12"))
            .select(day("2024-06-20"));

        assert_eq!(selection.starts_at, Some(day("2024-06-20")));
        assert_eq!(selection.ends_at, None);
    }

    #[test]
    fn marked_days_cover_the_range_inclusively_and_nothing_else() {
        let selection = DateSelection::new()
            .select(day("2024-06-28"))
            .select(day("2024-07-02"));
        let marked = selection.marked_days();

        let expected: Vec<NaiveDate> = [
            "2024-06-28",
            "2024-06-29",
            "2024-06-30",
            "2024-07-01",
            "2024-07-02",
        ]
        .iter()
        .map(|value| day(value))
        .collect();

        assert_eq!(marked.keys().copied().collect::<Vec<_>>(), expected);
        assert!(marked.values().all(|mark| mark.selected));
    }

    #[test]
    fn lone_start_marks_a_single_day() {
        let marked = DateSelection::new().select(day("2024-06-05")).marked_days();
        assert_eq!(marked.len(), 1);
        assert!(marked.contains_key(&day("2024-06-05")));
    }

    #[test]
    fn empty_selection_marks_nothing_and_renders_empty_text() {
        let selection = DateSelection::new();
        assert!(selection.marked_days().is_empty());
        assert_eq!(selection.range_text(), "");
    }

    #[test]
    fn range_text_spells_out_the_range() {
        let selection = DateSelection::new()
            .select(day("2024-06-05"))
            .select(day("2024-06-12"));
        assert_eq!(selection.range_text(), "5 to 12 of June");

        let partial = DateSelection::new().select(day("2024-06-05"));
        assert_eq!(partial.range_text(), "5 of June");
    }

    #[test]
    fn range_text_uses_the_end_month_when_the_range_crosses_months() {
        let selection = DateSelection::new()
            .select(day("2024-06-28"))
            .select(day("2024-07-02"));
        assert_eq!(selection.range_text(), "28 to 2 of July");
    }
}
