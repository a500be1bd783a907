//! Trip screen: headline, update-trip modal, and the activities/details panes.

use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use wayfare_core::calendar::DateSelection;
use wayfare_core::{ApiClient, Trip, TripId};

use crate::calendar_grid::CalendarGrid;
use crate::format::trip_headline;
use crate::screens::activities::ActivitiesPane;
use crate::screens::details::DetailsPane;
use crate::ui::{ButtonVariant, UiButton, UiField, UiInput, UiModal};

const MSG_UPDATE_DETAILS: &str = "Fill in the trip details correctly.";

/// Which overlay is showing on top of the trip screen.
#[derive(Clone, Copy, PartialEq, Eq)]
enum TripOverlay {
    Closed,
    UpdateTrip,
    Calendar,
}

/// Which pane the bottom bar has selected.
#[derive(Clone, Copy, PartialEq, Eq)]
enum TripPane {
    Activities,
    Details,
}

#[component]
pub fn TripScreen(api: Signal<Option<ApiClient>>, trip_id: TripId) -> Element {
    let mut trip = use_signal(|| None::<Trip>);
    let mut loading_trip = use_signal(|| true);
    let mut pane = use_signal(|| TripPane::Activities);
    let mut overlay = use_signal(|| TripOverlay::Closed);
    let mut destination_input = use_signal(String::new);
    let mut dates = use_signal(DateSelection::new);
    let mut updating = use_signal(|| false);
    let mut status_message = use_signal(|| None::<String>);
    let mut trip_refresh = use_signal(|| 0u64);
    let toasts = use_toast();

    use_future(move || async move {
        let _trip_refresh = trip_refresh();
        let Some(client) = api() else {
            return;
        };

        loading_trip.set(true);
        match client.get_trip(trip_id).await {
            Ok(fetched) => {
                destination_input.set(fetched.destination.clone());
                trip.set(Some(fetched));
                status_message.set(None);
            }
            Err(error) => {
                tracing::error!("Failed to load trip details: {error}");
                status_message.set(Some(
                    "Could not load the trip. Check your connection and try again.".to_string(),
                ));
            }
        }
        loading_trip.set(false);
    });

    let mut on_update_trip = move |_| {
        if updating() {
            return;
        }

        let destination = destination_input().trim().to_string();
        let selection = dates();
        let (Some(starts_at), Some(ends_at)) = (selection.starts_at, selection.ends_at) else {
            status_message.set(Some(MSG_UPDATE_DETAILS.to_string()));
            return;
        };
        if destination.is_empty() {
            status_message.set(Some(MSG_UPDATE_DETAILS.to_string()));
            return;
        }
        let Some(client) = api() else {
            status_message.set(Some(
                "The remote service is not configured yet.".to_string(),
            ));
            return;
        };

        updating.set(true);
        spawn(async move {
            let starts_at = starts_at.and_hms_opt(0, 0, 0).map(|moment| moment.and_utc());
            let ends_at = ends_at.and_hms_opt(0, 0, 0).map(|moment| moment.and_utc());
            let (Some(starts_at), Some(ends_at)) = (starts_at, ends_at) else {
                updating.set(false);
                return;
            };

            match client
                .update_trip(trip_id, &destination, starts_at, ends_at)
                .await
            {
                Ok(()) => {
                    toasts.success(
                        "Trip updated".to_string(),
                        ToastOptions::new().description("The trip details were saved"),
                    );
                    dates.set(DateSelection::new());
                    overlay.set(TripOverlay::Closed);
                    status_message.set(None);
                    trip_refresh.set(trip_refresh() + 1);
                }
                Err(error) => {
                    tracing::error!("Trip update failed: {error}");
                    status_message.set(Some("Could not update the trip. Try again.".to_string()));
                }
            }
            updating.set(false);
        });
    };

    if loading_trip() && trip.read().is_none() {
        return rsx! {
            div {
                style: "
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #71717a;
                ",
                "Loading trip..."
            }
        };
    }

    let headline = trip
        .read()
        .as_ref()
        .map(trip_headline)
        .unwrap_or_else(|| "Trip unavailable".to_string());
    let destination_value = destination_input();
    let dates_value = dates().range_text();
    let calendar_initial = dates()
        .starts_at
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    rsx! {
        div {
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                padding: 48px 16px 16px 16px;
                gap: 12px;
            ",

            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 8px;
                    background: #18181b;
                    border: 1px solid #27272a;
                    border-radius: 12px;
                    padding: 12px;
                ",
                p {
                    style: "margin: 0; font-size: 15px; color: #e4e4e7;",
                    "{headline}"
                }
                UiButton {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| overlay.set(TripOverlay::UpdateTrip),
                    "Edit"
                }
            }

            if let Some(message) = status_message() {
                p {
                    style: "margin: 0; font-size: 13px; color: #f87171;",
                    "{message}"
                }
            }

            if let Some(current_trip) = trip() {
                if pane() == TripPane::Activities {
                    ActivitiesPane { api, trip: current_trip }
                } else {
                    DetailsPane { api, trip_id: current_trip.id }
                }
            }

            div {
                style: "
                    display: flex;
                    gap: 8px;
                    background: #18181b;
                    border: 1px solid #27272a;
                    border-radius: 12px;
                    padding: 10px;
                ",
                UiButton {
                    variant: if pane() == TripPane::Activities {
                        ButtonVariant::Primary
                    } else {
                        ButtonVariant::Secondary
                    },
                    block: true,
                    onclick: move |_| pane.set(TripPane::Activities),
                    "Activities"
                }
                UiButton {
                    variant: if pane() == TripPane::Details {
                        ButtonVariant::Primary
                    } else {
                        ButtonVariant::Secondary
                    },
                    block: true,
                    onclick: move |_| pane.set(TripPane::Details),
                    "Details"
                }
            }
        }

        UiModal {
            title: "Update trip",
            subtitle: "Only the trip creator can edit it",
            open: overlay() == TripOverlay::UpdateTrip,
            onclose: move |()| overlay.set(TripOverlay::Closed),

            UiInput {
                r#type: "text",
                placeholder: "Where to?",
                value: "{destination_value}",
                oninput: move |event: Event<FormData>| {
                    destination_input.set(event.value());
                },
            }
            UiField {
                value: dates_value,
                placeholder: "When?",
                onpress: move |_| overlay.set(TripOverlay::Calendar),
            }
            UiButton {
                block: true,
                disabled: updating(),
                onclick: move |event| on_update_trip(event),
                if updating() { "Updating..." } else { "Update" }
            }
        }

        UiModal {
            title: "Select dates",
            subtitle: "Select the departure and return dates of your trip",
            open: overlay() == TripOverlay::Calendar,
            onclose: move |()| overlay.set(TripOverlay::UpdateTrip),

            CalendarGrid {
                initial_month: calendar_initial,
                marked: dates().marked_days(),
                on_day_press: move |day| {
                    let next = dates().select(day);
                    dates.set(next);
                },
            }
            UiButton {
                block: true,
                onclick: move |_| overlay.set(TripOverlay::UpdateTrip),
                "Confirm"
            }
        }
    }
}
