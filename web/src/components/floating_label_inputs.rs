#![allow(non_snake_case)]

use dioxus::prelude::*;

const INPUT_STYLE: &str = "block py-2.5 px-0 w-full text-sm bg-transparent border-0 border-b-2 focus:outline-none focus:ring-0 peer";
const FLOATING_LABEL_STYLE: &str = "absolute text-sm duration-300 transform -translate-y-6 scale-75 top-3 -z-10 origin-[0] peer-focus:left-0 peer-placeholder-shown:scale-100 peer-placeholder-shown:translate-y-0 peer-focus:scale-75 peer-focus:-translate-y-6";
const STATIC_LABEL_STYLE: &str =
    "absolute text-sm duration-300 transform -translate-y-6 scale-75 top-3 -z-10 origin-[0]";

// Validation is not wired per-field: the form reports a single message for
// any missing field, so the `required` flag only drives the label marker.
fn required_label_style(required: bool) -> &'static str {
    required
        .then_some("after:content-['*'] after:ml-0.5 after:text-red-500")
        .unwrap_or_default()
}

#[component]
pub fn FloatingLabelInputText(
    name: String,
    label: String,
    required: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let required_label_style = required_label_style(required);

    rsx! {
        div {
            class: "relative z-0 grow",
            input {
                r#type: "text",
                name: "{name}",
                id: "{name}",
                class: "{INPUT_STYLE}",
                placeholder: " ",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
            label {
                r#for: "{name}",
                class: "{FLOATING_LABEL_STYLE} {required_label_style}",
                "{label}"
            }
        }
    }
}

#[component]
pub fn FloatingLabelInputDate(
    name: String,
    label: String,
    required: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let required_label_style = required_label_style(required);

    rsx! {
        div {
            class: "relative z-0 grow",
            input {
                r#type: "date",
                name: "{name}",
                id: "{name}",
                class: "{INPUT_STYLE}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
            label {
                r#for: "{name}",
                class: "{STATIC_LABEL_STYLE} {required_label_style}",
                "{label}"
            }
        }
    }
}

#[component]
pub fn FloatingLabelStatusSelect(
    name: String,
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "relative z-0 grow",
            select {
                name: "{name}",
                id: "{name}",
                class: "{INPUT_STYLE} bg-right appearance-none",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),

                option { value: "Pending", "Pending" }
                option { value: "InProgress", "InProgress" }
                option { value: "Completed", "Completed" }
            }
            label {
                r#for: "{name}",
                class: "{STATIC_LABEL_STYLE}",
                "{label}"
            }
        }
    }
}
