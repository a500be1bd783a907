//! Details pane: important links and the guest list.

use dioxus::prelude::*;
use dioxus_primitives::separator::Separator;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use wayfare_core::validate::is_valid_url;
use wayfare_core::{ApiClient, Link, Participant, TripId};

use crate::ui::{ButtonVariant, UiButton, UiInput, UiModal};

const MSG_INVALID_LINK_URL: &str = "The link URL is not valid.";
const MSG_EMPTY_LINK_TITLE: &str = "The link title cannot be empty.";

/// Which overlay is showing on top of the details pane.
#[derive(Clone, Copy, PartialEq, Eq)]
enum DetailsOverlay {
    Closed,
    NewLink,
}

#[component]
pub fn DetailsPane(api: Signal<Option<ApiClient>>, trip_id: TripId) -> Element {
    let mut links = use_signal(Vec::<Link>::new);
    let mut participants = use_signal(Vec::<Participant>::new);
    let mut loading_links = use_signal(|| true);
    let mut loading_participants = use_signal(|| true);
    let mut overlay = use_signal(|| DetailsOverlay::Closed);
    let mut link_title = use_signal(String::new);
    let mut link_url = use_signal(String::new);
    let mut creating_link = use_signal(|| false);
    let mut status_message = use_signal(|| None::<String>);
    let mut links_refresh = use_signal(|| 0u64);
    let toasts = use_toast();

    use_future(move || async move {
        let _links_refresh = links_refresh();
        let Some(client) = api() else {
            return;
        };

        match client.list_links(trip_id).await {
            Ok(fetched) => {
                links.set(fetched);
            }
            Err(error) => {
                tracing::error!("Failed to load links: {error}");
                status_message.set(Some("Could not load the links. Try again.".to_string()));
            }
        }
        loading_links.set(false);
    });

    use_future(move || async move {
        let Some(client) = api() else {
            return;
        };

        match client.list_participants(trip_id).await {
            Ok(fetched) => {
                participants.set(fetched);
            }
            Err(error) => {
                tracing::error!("Failed to load participants: {error}");
                status_message.set(Some(
                    "Could not load the participants. Try again.".to_string(),
                ));
            }
        }
        loading_participants.set(false);
    });

    let mut on_create_link = move |_| {
        if creating_link() {
            return;
        }

        let url = link_url().trim().to_string();
        let title = link_title().trim().to_string();
        if !is_valid_url(&url) {
            status_message.set(Some(MSG_INVALID_LINK_URL.to_string()));
            return;
        }
        if title.is_empty() {
            status_message.set(Some(MSG_EMPTY_LINK_TITLE.to_string()));
            return;
        }
        let Some(client) = api() else {
            status_message.set(Some(
                "The remote service is not configured yet.".to_string(),
            ));
            return;
        };

        creating_link.set(true);
        spawn(async move {
            match client.create_link(trip_id, &title, &url).await {
                Ok(()) => {
                    toasts.success(
                        "Link created".to_string(),
                        ToastOptions::new().description("Every guest can see the new link"),
                    );
                    link_title.set(String::new());
                    link_url.set(String::new());
                    overlay.set(DetailsOverlay::Closed);
                    status_message.set(None);
                    links_refresh.set(links_refresh() + 1);
                }
                Err(error) => {
                    tracing::error!("Link creation failed: {error}");
                    status_message.set(Some("Could not save the link. Try again.".to_string()));
                }
            }
            creating_link.set(false);
        });
    };

    let link_title_value = link_title();
    let link_url_value = link_url();

    rsx! {
        div {
            style: "flex: 1; display: flex; flex-direction: column; gap: 12px; min-height: 0; overflow-y: auto;",

            if let Some(message) = status_message() {
                p {
                    style: "margin: 0; font-size: 13px; color: #f87171;",
                    "{message}"
                }
            }

            h2 {
                style: "margin: 0; font-size: 20px; font-weight: 600; color: #fafafa;",
                "Important links"
            }

            if loading_links() {
                p {
                    style: "margin: 0; font-size: 13px; color: #71717a;",
                    "Loading links..."
                }
            } else if links.read().is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #71717a;",
                    "No link added yet."
                }
            } else {
                for link in links() {
                    div {
                        key: "{link.id}",
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 2px;
                            background: #18181b;
                            border: 1px solid #27272a;
                            border-radius: 10px;
                            padding: 10px 12px;
                        ",
                        p {
                            style: "margin: 0; font-size: 14px; font-weight: 600; color: #e4e4e7;",
                            "{link.title}"
                        }
                        p {
                            style: "
                                margin: 0;
                                font-size: 12px;
                                color: #71717a;
                                overflow: hidden;
                                text-overflow: ellipsis;
                                white-space: nowrap;
                            ",
                            "{link.url}"
                        }
                    }
                }
            }

            UiButton {
                variant: ButtonVariant::Secondary,
                block: true,
                onclick: move |_| overlay.set(DetailsOverlay::NewLink),
                "Add new link"
            }

            Separator {
                decorative: true,
                style: "height: 1px; background: #27272a;",
            }

            h2 {
                style: "margin: 0; font-size: 20px; font-weight: 600; color: #fafafa;",
                "Guests"
            }

            if loading_participants() {
                p {
                    style: "margin: 0; font-size: 13px; color: #71717a;",
                    "Loading guests..."
                }
            } else if participants.read().is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #71717a;",
                    "No guest invited yet."
                }
            } else {
                for participant in participants() {
                    {
                        let display_name = participant.display_name();
                        let confirmation = if participant.is_confirmed {
                            "Confirmed"
                        } else {
                            "Pending"
                        };
                        rsx! {
                            div {
                                key: "{participant.id}",
                                style: "
                                    display: flex;
                                    align-items: center;
                                    justify-content: space-between;
                                    gap: 8px;
                                    background: #18181b;
                                    border: 1px solid #27272a;
                                    border-radius: 10px;
                                    padding: 10px 12px;
                                ",
                                div {
                                    style: "display: flex; flex-direction: column; gap: 2px; min-width: 0;",
                                    p {
                                        style: "margin: 0; font-size: 14px; font-weight: 600; color: #e4e4e7;",
                                        "{display_name}"
                                    }
                                    p {
                                        style: "
                                            margin: 0;
                                            font-size: 12px;
                                            color: #71717a;
                                            overflow: hidden;
                                            text-overflow: ellipsis;
                                            white-space: nowrap;
                                        ",
                                        "{participant.email}"
                                    }
                                }
                                p {
                                    style: "margin: 0; font-size: 12px; color: #71717a;",
                                    "{confirmation}"
                                }
                            }
                        }
                    }
                }
            }
        }

        UiModal {
            title: "Create link",
            subtitle: "Every guest can view the important links",
            open: overlay() == DetailsOverlay::NewLink,
            onclose: move |()| overlay.set(DetailsOverlay::Closed),

            UiInput {
                r#type: "text",
                placeholder: "Link title",
                value: "{link_title_value}",
                oninput: move |event: Event<FormData>| {
                    link_title.set(event.value());
                },
            }
            UiInput {
                r#type: "url",
                placeholder: "URL",
                value: "{link_url_value}",
                oninput: move |event: Event<FormData>| {
                    link_url.set(event.value());
                },
            }
            UiButton {
                block: true,
                disabled: creating_link(),
                onclick: move |event| on_create_link(event),
                if creating_link() { "Saving link..." } else { "Save link" }
            }
        }
    }
}
