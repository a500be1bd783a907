//! Application shell: boot, trip resumption, settings, and screen switching.

use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;
use wayfare_core::{ApiClient, TripId};

use crate::calendar_grid::CALENDAR_STYLES;
use crate::config::{
    api_config_source_label, load_runtime_config, resolve_api_config, save_runtime_config,
    MobileRuntimeConfig,
};
use crate::screens::{CreateTripScreen, TripScreen};
use crate::trip_store;
use crate::ui::{ButtonVariant, UiButton, UiInput, UiModal, MOBILE_UI_STYLES};

/// Which top-level screen is active.
#[derive(Clone, Copy, PartialEq, Eq)]
enum MobileScreen {
    CreateTrip,
    Trip(TripId),
}

const TOAST_STYLES: &str = r#"
.toast-container {
    position: fixed;
    inset: auto 12px 12px 12px;
    z-index: 9999;
    pointer-events: none;
}
.toast-list {
    margin: 0;
    padding: 0;
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 8px;
}
.toast {
    pointer-events: auto;
    border-radius: 10px;
    border: 1px solid #3f3f46;
    background: #18181b;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.45);
    padding: 10px 12px;
    color: #fafafa;
    display: flex;
    gap: 10px;
    align-items: flex-start;
}
.toast[data-type='success'] { border-color: #a3e635; }
.toast[data-type='error'] { border-color: #ef4444; }
.toast[data-type='warning'] { border-color: #f59e0b; }
.toast[data-type='info'] { border-color: #3b82f6; }
.toast-content { flex: 1; }
.toast-title { font-size: 13px; font-weight: 700; }
.toast-description { font-size: 12px; color: #a1a1aa; margin-top: 2px; }
.toast-close {
    border: 0;
    background: transparent;
    color: #71717a;
    font-size: 16px;
    line-height: 1;
    padding: 0;
}
"#;

#[component]
pub fn App() -> Element {
    rsx! {
        ToastProvider {
            AppShell {}
        }
    }
}

#[component]
fn AppShell() -> Element {
    let mut api = use_signal(|| None::<ApiClient>);
    let mut screen = use_signal(|| MobileScreen::CreateTrip);
    let mut loading = use_signal(|| true);
    let mut config_message = use_signal(|| None::<String>);
    let mut settings_open = use_signal(|| false);
    let mut api_url_input = use_signal(String::new);
    let mut boot_version = use_signal(|| 0u64);

    use_future(move || async move {
        let _boot_version = boot_version();
        loading.set(true);
        api.set(None);
        screen.set(MobileScreen::CreateTrip);
        api_url_input.set(load_runtime_config().api_base_url.unwrap_or_default());

        let resolved = resolve_api_config();
        let Some(base_url) = resolved.base_url else {
            config_message.set(Some(
                "No trip service configured. Set the API base URL in Settings.".to_string(),
            ));
            loading.set(false);
            return;
        };
        tracing::info!(
            "Using API config from {}",
            api_config_source_label(resolved.source)
        );

        let client = match ApiClient::new(base_url) {
            Ok(client) => client,
            Err(error) => {
                tracing::error!("Invalid API configuration: {error}");
                config_message.set(Some(error.to_string()));
                loading.set(false);
                return;
            }
        };
        config_message.set(None);

        // Resume the previously active trip when it still exists remotely.
        let resumed = match trip_store::load_active_trip() {
            Ok(Some(trip_id)) => match client.get_trip(trip_id).await {
                Ok(_) => Some(trip_id),
                Err(error) => {
                    tracing::warn!("Could not resume the stored trip: {error}");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                // Corrupt local record; drop it so the next launch starts clean.
                tracing::warn!("Could not read the stored trip id: {error}");
                if let Err(clear_error) = trip_store::clear_active_trip() {
                    tracing::warn!("Could not clear the stored trip record: {clear_error}");
                }
                None
            }
        };

        api.set(Some(client));
        if let Some(trip_id) = resumed {
            screen.set(MobileScreen::Trip(trip_id));
        }
        loading.set(false);
    });

    let on_trip_created = move |trip_id: TripId| {
        screen.set(MobileScreen::Trip(trip_id));
    };

    let mut on_save_settings = move |_| {
        let runtime_config = MobileRuntimeConfig::from_raw(Some(api_url_input()));
        if !runtime_config.has_api_config() {
            config_message.set(Some(
                "An API base URL is required to reach the trip service.".to_string(),
            ));
            return;
        }

        match save_runtime_config(&runtime_config) {
            Ok(()) => {
                settings_open.set(false);
                boot_version.set(boot_version() + 1);
            }
            Err(error) => {
                config_message.set(Some(format!("Failed to save settings: {error}")));
            }
        }
    };

    let mut on_clear_settings = move |_| {
        match save_runtime_config(&MobileRuntimeConfig::default()) {
            Ok(()) => {
                api_url_input.set(String::new());
                boot_version.set(boot_version() + 1);
            }
            Err(error) => {
                config_message.set(Some(format!("Failed to clear settings: {error}")));
            }
        }
    };

    let api_url_value = api_url_input();

    rsx! {
        style { "{MOBILE_UI_STYLES}" }
        style { "{CALENDAR_STYLES}" }
        style { "{TOAST_STYLES}" }

        div {
            style: "
                height: 100vh;
                display: flex;
                flex-direction: column;
                background: #09090b;
                color: #fafafa;
                font-family: system-ui, sans-serif;
            ",

            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: flex-end;
                    padding: 8px 12px;
                ",
                UiButton {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| settings_open.set(true),
                    "Settings"
                }
            }

            if let Some(message) = config_message() {
                p {
                    style: "
                        margin: 0;
                        padding: 10px 16px;
                        font-size: 13px;
                        color: #f87171;
                        background: #18181b;
                        border-bottom: 1px solid #27272a;
                    ",
                    "{message}"
                }
            }

            if loading() {
                div {
                    style: "
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #71717a;
                    ",
                    "Loading..."
                }
            } else if let MobileScreen::Trip(trip_id) = screen() {
                TripScreen { api, trip_id }
            } else {
                CreateTripScreen { api, on_trip_created }
            }
        }

        UiModal {
            title: "Settings",
            subtitle: "Where this app finds the trip service",
            open: settings_open(),
            onclose: move |()| settings_open.set(false),

            UiInput {
                r#type: "url",
                placeholder: "https://api.wayfare.app",
                value: "{api_url_value}",
                oninput: move |event: Event<FormData>| {
                    api_url_input.set(event.value());
                },
            }
            div {
                style: "display: flex; gap: 8px;",
                UiButton {
                    block: true,
                    onclick: move |event| on_save_settings(event),
                    "Save"
                }
                UiButton {
                    variant: ButtonVariant::Outline,
                    block: true,
                    onclick: move |event| on_clear_settings(event),
                    "Clear"
                }
            }
        }
    }
}
