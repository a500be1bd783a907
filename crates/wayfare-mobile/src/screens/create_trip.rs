//! New-trip wizard: destination and dates, then guest emails, then confirm.

use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use wayfare_core::{ApiClient, TripId, TripStage};

use crate::calendar_grid::CalendarGrid;
use crate::format::guest_count_label;
use crate::trip_store;
use crate::ui::{ButtonVariant, UiButton, UiField, UiInput, UiModal};

/// Which overlay is showing on top of the wizard. Driving both overlays
/// from one enum keeps them mutually exclusive by construction.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CreateTripOverlay {
    Closed,
    Calendar,
    Guests,
}

#[component]
pub fn CreateTripScreen(
    api: Signal<Option<ApiClient>>,
    on_trip_created: EventHandler<TripId>,
) -> Element {
    let mut draft = use_signal(wayfare_core::TripDraft::new);
    let mut email_input = use_signal(String::new);
    let mut overlay = use_signal(|| CreateTripOverlay::Closed);
    let mut creating = use_signal(|| false);
    let mut status_message = use_signal(|| None::<String>);
    let toasts = use_toast();

    let stage = draft.read().stage();
    let today = chrono::Local::now().date_naive();

    let mut on_next = move |_| {
        if creating() {
            return;
        }
        status_message.set(None);

        if draft.read().stage() == TripStage::TripDetails {
            if let Err(error) = draft.write().advance() {
                status_message.set(Some(error.to_string()));
            }
            return;
        }

        let payload = match draft.read().confirm() {
            Ok(payload) => payload,
            Err(error) => {
                status_message.set(Some(error.to_string()));
                return;
            }
        };
        let Some(client) = api() else {
            status_message.set(Some(
                "The remote service is not configured yet.".to_string(),
            ));
            return;
        };

        creating.set(true);
        spawn(async move {
            match client.create_trip(&payload).await {
                Ok(trip_id) => {
                    toasts.success(
                        "Trip created".to_string(),
                        ToastOptions::new().description("Your trip is ready to plan"),
                    );
                    match trip_store::save_active_trip(trip_id) {
                        Ok(()) => on_trip_created.call(trip_id),
                        Err(error) => {
                            tracing::error!("Failed to persist the active trip id: {error}");
                            status_message.set(Some(
                                "The trip was created, but its id could not be saved on this device."
                                    .to_string(),
                            ));
                        }
                    }
                }
                Err(error) => {
                    tracing::error!("Trip creation failed: {error}");
                    status_message.set(Some("Could not create the trip. Try again.".to_string()));
                }
            }
            creating.set(false);
        });
    };

    let mut on_add_email = move |_| {
        let email = email_input();
        match draft.write().guests.add(&email) {
            Ok(()) => {
                email_input.set(String::new());
                status_message.set(None);
            }
            Err(error) => status_message.set(Some(error.to_string())),
        }
    };

    let destination_value = draft.read().destination.clone();
    let guest_summary = guest_count_label(draft.read().guests.len());
    let next_label = if creating() {
        "Creating trip..."
    } else if stage == TripStage::TripDetails {
        "Continue"
    } else {
        "Confirm trip"
    };

    rsx! {
        div {
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                padding: 20px 16px;
                gap: 12px;
            ",

            h1 {
                style: "margin: 0; font-size: 28px; font-weight: 700; color: #a3e635;",
                "wayfare"
            }
            p {
                style: "margin: 0; font-size: 15px; color: #a1a1aa; text-align: center;",
                "Invite your friends and plan your next trip"
            }

            if let Some(message) = status_message() {
                p {
                    style: "margin: 0; font-size: 13px; color: #f87171; text-align: center;",
                    "{message}"
                }
            }

            div {
                style: "
                    width: 100%;
                    max-width: 400px;
                    background: #18181b;
                    border: 1px solid #27272a;
                    border-radius: 14px;
                    padding: 16px;
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                ",

                UiInput {
                    r#type: "text",
                    placeholder: "Where to?",
                    value: "{destination_value}",
                    disabled: stage != TripStage::TripDetails,
                    oninput: move |event: Event<FormData>| {
                        draft.write().destination = event.value();
                    },
                }

                UiField {
                    value: draft.read().dates.range_text(),
                    placeholder: "When?",
                    disabled: stage != TripStage::TripDetails,
                    onpress: move |_| overlay.set(CreateTripOverlay::Calendar),
                }

                if stage == TripStage::AddGuests {
                    div {
                        style: "border-top: 1px solid #27272a; padding-top: 10px;",
                        UiButton {
                            variant: ButtonVariant::Secondary,
                            block: true,
                            onclick: move |_| draft.write().edit_details(),
                            "Change location and date"
                        }
                    }

                    UiField {
                        value: guest_summary,
                        placeholder: "Who's coming along?",
                        onpress: move |_| overlay.set(CreateTripOverlay::Guests),
                    }
                }

                UiButton {
                    block: true,
                    disabled: creating(),
                    onclick: move |event| on_next(event),
                    "{next_label}"
                }
            }

            p {
                style: "margin: 0; font-size: 12px; color: #71717a; text-align: center; max-width: 400px;",
                "By planning your trip with Wayfare you automatically agree to our terms of use and privacy policies."
            }
        }

        UiModal {
            title: "Select dates",
            subtitle: "Select the departure and return dates of your trip",
            open: overlay() == CreateTripOverlay::Calendar,
            onclose: move |()| overlay.set(CreateTripOverlay::Closed),

            CalendarGrid {
                initial_month: draft.read().dates.starts_at.unwrap_or(today),
                marked: draft.read().dates.marked_days(),
                min_day: Some(today),
                on_day_press: move |day| draft.write().select_day(day),
            }
            UiButton {
                block: true,
                onclick: move |_| overlay.set(CreateTripOverlay::Closed),
                "Confirm"
            }
        }

        UiModal {
            title: "Select guests",
            subtitle: "Guests will receive emails to confirm their participation in the trip",
            open: overlay() == CreateTripOverlay::Guests,
            onclose: move |()| overlay.set(CreateTripOverlay::Closed),

            div {
                style: "
                    display: flex;
                    flex-wrap: wrap;
                    gap: 8px;
                    border-bottom: 1px solid #27272a;
                    padding-bottom: 14px;
                ",
                if draft.read().guests.is_empty() {
                    p {
                        style: "margin: 0; font-size: 13px; color: #71717a;",
                        "No email added yet."
                    }
                } else {
                    for email in draft.read().guests.to_vec() {
                        {
                            let removed_email = email.clone();
                            rsx! {
                                div {
                                    key: "{email}",
                                    style: "
                                        display: flex;
                                        align-items: center;
                                        gap: 6px;
                                        background: #27272a;
                                        border-radius: 8px;
                                        padding: 6px 10px;
                                    ",
                                    p {
                                        style: "margin: 0; font-size: 13px; color: #e4e4e7;",
                                        "{email}"
                                    }
                                    UiButton {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| draft.write().guests.remove(&removed_email),
                                        "×"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            UiInput {
                r#type: "email",
                placeholder: "Type the guest's email",
                value: "{email_input}",
                oninput: move |event: Event<FormData>| {
                    email_input.set(event.value().to_lowercase());
                },
            }
            UiButton {
                block: true,
                onclick: move |event| on_add_email(event),
                "Invite"
            }
        }
    }
}
