//! Month calendar grid for picking trip and activity days.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use dioxus::prelude::*;
use wayfare_core::calendar::DayMark;

use crate::format::{month_grid, month_title, next_month, previous_month, WEEKDAY_INITIALS};
use crate::ui::{ButtonVariant, UiButton};

/// Styles for the calendar grid.
pub const CALENDAR_STYLES: &str = r"
.calendar {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.calendar-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 8px;
}

.calendar-title {
    margin: 0;
    font-size: 15px;
    font-weight: 600;
    color: #fafafa;
}

.calendar-week {
    display: flex;
    gap: 4px;
}

.calendar-weekday {
    flex: 1;
    text-align: center;
    font-size: 12px;
    color: #71717a;
}

.calendar-day {
    flex: 1;
    aspect-ratio: 1;
    border: 0;
    border-radius: 8px;
    background: transparent;
    color: #e4e4e7;
    font-size: 14px;
}

.calendar-day:disabled {
    color: #3f3f46;
}

.calendar-day--selected {
    background: #a3e635;
    color: #1a2e05;
    font-weight: 600;
}

.calendar-day--empty {
    flex: 1;
    aspect-ratio: 1;
}
";

/// One month of tappable days.
///
/// Marked days render as selected; days outside the `min_day..=max_day`
/// window are disabled. Month navigation is local state; the pressed day is
/// reported to the caller, who owns the selection.
#[component]
pub fn CalendarGrid(
    initial_month: NaiveDate,
    marked: BTreeMap<NaiveDate, DayMark>,
    min_day: Option<NaiveDate>,
    max_day: Option<NaiveDate>,
    on_day_press: EventHandler<NaiveDate>,
) -> Element {
    let mut cursor = use_signal(|| initial_month);

    let weeks = month_grid(cursor());
    let title = month_title(cursor());

    rsx! {
        div { class: "calendar",
            div { class: "calendar-header",
                UiButton {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| cursor.set(previous_month(cursor())),
                    "<"
                }
                p { class: "calendar-title", "{title}" }
                UiButton {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| cursor.set(next_month(cursor())),
                    ">"
                }
            }

            div { class: "calendar-week",
                for (index, initial) in WEEKDAY_INITIALS.iter().enumerate() {
                    span { key: "{index}", class: "calendar-weekday", "{initial}" }
                }
            }

            for (week_index, week) in weeks.into_iter().enumerate() {
                div { key: "{week_index}", class: "calendar-week",
                    for (cell_index, cell) in week.into_iter().enumerate() {
                        if let Some(day) = cell {
                            {
                                let selected =
                                    marked.get(&day).is_some_and(|mark| mark.selected);
                                let disabled = min_day.is_some_and(|min| day < min)
                                    || max_day.is_some_and(|max| day > max);
                                let class = if selected {
                                    "calendar-day calendar-day--selected"
                                } else {
                                    "calendar-day"
                                };
                                let label = day.format("%-d").to_string();

                                rsx! {
                                    button {
                                        key: "{day}",
                                        r#type: "button",
                                        class: "{class}",
                                        disabled,
                                        onclick: move |_| on_day_press.call(day),
                                        "{label}"
                                    }
                                }
                            }
                        } else {
                            span { key: "empty-{cell_index}", class: "calendar-day calendar-day--empty" }
                        }
                    }
                }
            }
        }
    }
}
