#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::model::UI_MODEL;

/// Success and error messages are independent and may both be visible.
#[component]
pub fn AlertZone() -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-2",

            if let Some(message) = UI_MODEL.read().success_message.clone() {
                div {
                    class: "alert alert-success",
                    role: "alert",
                    "{message}"
                }
            }
            if let Some(message) = UI_MODEL.read().error_message.clone() {
                div {
                    class: "alert alert-error",
                    role: "alert",
                    "{message}"
                }
            }
        }
    }
}
