//! Activities pane: the day-sectioned schedule plus the new-activity flow.

use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use dioxus_primitives::scroll_area::{ScrollArea, ScrollDirection, ScrollType};
use dioxus_primitives::toast::{use_toast, ToastOptions};
use wayfare_core::calendar::DateSelection;
use wayfare_core::schedule::{sections_from_day_buckets, DaySection};
use wayfare_core::{ApiClient, Trip};

use crate::calendar_grid::CalendarGrid;
use crate::format::{activity_occurs_at, hour_label, parse_activity_hour, sanitize_hour_input, short_day_label};
use crate::ui::{UiButton, UiField, UiInput, UiModal};

const MSG_MISSING_ACTIVITY_FIELDS: &str = "Fill in all the activity fields.";

/// Which overlay is showing on top of the activities pane.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ActivityOverlay {
    Closed,
    NewActivity,
    Calendar,
}

#[component]
pub fn ActivitiesPane(api: Signal<Option<ApiClient>>, trip: Trip) -> Element {
    let trip_id = trip.id;
    let trip_first_day = trip.starts_at.date_naive();
    let trip_last_day = trip.ends_at.date_naive();

    let mut sections = use_signal(Vec::<DaySection>::new);
    let mut loading_activities = use_signal(|| true);
    let mut overlay = use_signal(|| ActivityOverlay::Closed);
    let mut title_input = use_signal(String::new);
    let mut picked_day = use_signal(|| None::<NaiveDate>);
    let mut hour_input = use_signal(String::new);
    let mut creating = use_signal(|| false);
    let mut status_message = use_signal(|| None::<String>);
    let mut activities_refresh = use_signal(|| 0u64);
    let toasts = use_toast();

    use_future(move || async move {
        let _activities_refresh = activities_refresh();
        let Some(client) = api() else {
            return;
        };

        match client.list_activities(trip_id).await {
            Ok(buckets) => {
                sections.set(sections_from_day_buckets(buckets, Utc::now()));
                status_message.set(None);
            }
            Err(error) => {
                tracing::error!("Failed to load activities: {error}");
                status_message.set(Some(
                    "Could not load the activities. Try again.".to_string(),
                ));
            }
        }
        loading_activities.set(false);
    });

    let mut on_create_activity = move |_| {
        if creating() {
            return;
        }

        let title = title_input().trim().to_string();
        let occurs_at = picked_day()
            .zip(parse_activity_hour(&hour_input()))
            .and_then(|(day, hour)| activity_occurs_at(day, hour));
        let Some(occurs_at) = occurs_at.filter(|_| !title.is_empty()) else {
            status_message.set(Some(MSG_MISSING_ACTIVITY_FIELDS.to_string()));
            return;
        };
        let Some(client) = api() else {
            status_message.set(Some(
                "The remote service is not configured yet.".to_string(),
            ));
            return;
        };

        creating.set(true);
        spawn(async move {
            match client.create_activity(trip_id, &title, occurs_at).await {
                Ok(()) => {
                    toasts.success(
                        "Activity created".to_string(),
                        ToastOptions::new().description("Every guest can see the new activity"),
                    );
                    title_input.set(String::new());
                    picked_day.set(None);
                    hour_input.set(String::new());
                    overlay.set(ActivityOverlay::Closed);
                    status_message.set(None);
                    activities_refresh.set(activities_refresh() + 1);
                }
                Err(error) => {
                    tracing::error!("Activity creation failed: {error}");
                    status_message.set(Some(
                        "Could not create the activity. Try again.".to_string(),
                    ));
                }
            }
            creating.set(false);
        });
    };

    let picked_day_label = picked_day().map(short_day_label).unwrap_or_default();
    let hour_value = hour_input();
    let title_value = title_input();
    let calendar_marked = picked_day()
        .map(|day| {
            DateSelection {
                starts_at: Some(day),
                ends_at: None,
            }
            .marked_days()
        })
        .unwrap_or_default();

    rsx! {
        div {
            style: "flex: 1; display: flex; flex-direction: column; gap: 10px; min-height: 0;",

            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                h2 {
                    style: "margin: 0; font-size: 20px; font-weight: 600; color: #fafafa;",
                    "Activities"
                }
                UiButton {
                    onclick: move |_| overlay.set(ActivityOverlay::NewActivity),
                    "New activity"
                }
            }

            if loading_activities() {
                div {
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; color: #71717a;",
                    "Loading activities..."
                }
            } else if sections.read().is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #71717a;",
                    "No activities scheduled yet."
                }
            } else {
                ScrollArea {
                    direction: ScrollDirection::Vertical,
                    scroll_type: ScrollType::Auto,
                    tabindex: "0",
                    style: "flex: 1; min-height: 0;",

                    for section in sections() {
                        div {
                            key: "{section.date}",
                            style: "display: flex; flex-direction: column; gap: 6px; padding-bottom: 14px;",
                            p {
                                style: "margin: 0; font-size: 17px; font-weight: 600; color: #fafafa;",
                                "Day {section.day_number} "
                                span {
                                    style: "font-size: 13px; font-weight: 400; color: #71717a;",
                                    "{section.weekday_name}"
                                }
                            }

                            for item in section.items {
                                {
                                    let time = hour_label(item.occurs_at);
                                    let row_opacity = if item.is_past { "0.55" } else { "1" };
                                    rsx! {
                                        div {
                                            key: "{item.id}",
                                            style: "
                                                display: flex;
                                                align-items: center;
                                                justify-content: space-between;
                                                gap: 8px;
                                                background: #18181b;
                                                border: 1px solid #27272a;
                                                border-radius: 10px;
                                                padding: 10px 12px;
                                                opacity: {row_opacity};
                                            ",
                                            p {
                                                style: "margin: 0; font-size: 14px; color: #e4e4e7;",
                                                "{item.title}"
                                            }
                                            p {
                                                style: "margin: 0; font-size: 13px; color: #71717a;",
                                                "{time}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        UiModal {
            title: "Create activity",
            subtitle: "Every guest can view the activities",
            open: overlay() == ActivityOverlay::NewActivity,
            onclose: move |()| overlay.set(ActivityOverlay::Closed),

            UiInput {
                r#type: "text",
                placeholder: "Which activity?",
                value: "{title_value}",
                oninput: move |event: Event<FormData>| {
                    title_input.set(event.value());
                },
            }
            div {
                style: "display: flex; gap: 8px;",
                UiField {
                    value: picked_day_label,
                    placeholder: "Date",
                    onpress: move |_| overlay.set(ActivityOverlay::Calendar),
                }
                UiInput {
                    r#type: "text",
                    inputmode: "numeric",
                    placeholder: "Hour",
                    value: "{hour_value}",
                    oninput: move |event: Event<FormData>| {
                        hour_input.set(sanitize_hour_input(&event.value()));
                    },
                }
            }
            UiButton {
                block: true,
                disabled: creating(),
                onclick: move |event| on_create_activity(event),
                if creating() { "Saving activity..." } else { "Save activity" }
            }
        }

        UiModal {
            title: "Select date",
            subtitle: "Select the date of your activity",
            open: overlay() == ActivityOverlay::Calendar,
            onclose: move |()| overlay.set(ActivityOverlay::NewActivity),

            CalendarGrid {
                initial_month: picked_day().unwrap_or(trip_first_day),
                marked: calendar_marked,
                min_day: Some(trip_first_day),
                max_day: Some(trip_last_day),
                on_day_press: move |day| picked_day.set(Some(day)),
            }
            UiButton {
                block: true,
                onclick: move |_| overlay.set(ActivityOverlay::NewActivity),
                "Confirm"
            }
        }
    }
}
