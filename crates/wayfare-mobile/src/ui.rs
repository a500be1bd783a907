//! Shared mobile UI primitives aligned with official Dioxus component patterns.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use dioxus::prelude::*;

/// Shared styles for mobile button/input/modal wrappers.
pub const MOBILE_UI_STYLES: &str = r"
.ui-button {
    border-radius: 10px;
    padding: 10px 12px;
    font-size: 13px;
    font-weight: 600;
    border: 1px solid transparent;
    transition: background-color 120ms ease, color 120ms ease, border-color 120ms ease;
}

.ui-button:disabled {
    opacity: 0.55;
}

.ui-button--block {
    width: 100%;
}

.ui-button--primary {
    background: #a3e635;
    color: #1a2e05;
    border-color: #a3e635;
}

.ui-button--secondary {
    background: #27272a;
    color: #e4e4e7;
    border-color: #27272a;
}

.ui-button--outline {
    background: transparent;
    color: #d4d4d8;
    border-color: #3f3f46;
}

.ui-button--ghost {
    background: transparent;
    color: #a1a1aa;
    border-color: transparent;
}

.ui-button--danger {
    background: transparent;
    color: #f87171;
    border-color: #7f1d1d;
}

.ui-input {
    width: 100%;
    border: 1px solid #3f3f46;
    border-radius: 10px;
    padding: 10px 12px;
    font-size: 14px;
    background: #18181b;
    color: #fafafa;
}

.ui-input::placeholder {
    color: #71717a;
}

.ui-field {
    width: 100%;
    border: 1px solid #3f3f46;
    border-radius: 10px;
    padding: 10px 12px;
    font-size: 14px;
    background: #18181b;
    color: #fafafa;
    text-align: left;
}

.ui-field--placeholder {
    color: #71717a;
}

.modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(9, 9, 11, 0.8);
    display: flex;
    align-items: flex-end;
    z-index: 100;
}

.modal-panel {
    width: 100%;
    max-height: 85vh;
    overflow-y: auto;
    background: #18181b;
    border-top: 1px solid #3f3f46;
    border-radius: 16px 16px 0 0;
    padding: 20px 16px;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.modal-title {
    margin: 0;
    font-size: 18px;
    font-weight: 600;
    color: #fafafa;
}

.modal-subtitle {
    margin: 4px 0 0 0;
    font-size: 13px;
    color: #a1a1aa;
}

.modal-close {
    border: 0;
    background: transparent;
    color: #71717a;
    font-size: 20px;
    line-height: 1;
    padding: 0;
}
";

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Secondary => "ui-button--secondary",
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
            Self::Danger => "ui-button--danger",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] block: bool,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut class_name = format!("ui-button {}", variant.class());
    if block {
        class_name.push_str(" ui-button--block");
    }

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiInput(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        input {
            class: "ui-input",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            onchange: move |event| _ = onchange.map(|handler| handler(event)),
            ..attributes,
            {children}
        }
    }
}

/// A button styled as a form field; used for inputs that open an overlay
/// (date pickers, the guest list) instead of accepting keystrokes.
#[component]
pub fn UiField(
    value: String,
    placeholder: String,
    #[props(default)] disabled: bool,
    onpress: EventHandler<MouseEvent>,
) -> Element {
    let (label, class) = if value.is_empty() {
        (placeholder, "ui-field ui-field--placeholder")
    } else {
        (value, "ui-field")
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            disabled,
            onclick: move |event| onpress.call(event),
            "{label}"
        }
    }
}

/// Bottom-sheet overlay with a title, a subtitle, and a close affordance.
///
/// Renders nothing while closed; the caller keeps exactly one overlay open
/// at a time by driving it from a single tagged enum.
#[component]
pub fn UiModal(
    title: String,
    subtitle: String,
    open: bool,
    onclose: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal-panel",
                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 8px;",
                    div {
                        h2 { class: "modal-title", "{title}" }
                        p { class: "modal-subtitle", "{subtitle}" }
                    }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        onclick: move |_| onclose.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
