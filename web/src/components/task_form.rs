#![allow(non_snake_case)]

use dioxus::prelude::*;

use taskboard::task::{TaskParameters, TaskStatus};

use crate::{
    components::floating_label_inputs::{
        FloatingLabelInputDate, FloatingLabelInputText, FloatingLabelStatusSelect,
    },
    form::ALL_FIELDS_REQUIRED,
    model::UI_MODEL,
    services::task_service::TaskCommand,
};

#[component]
pub fn TaskForm() -> Element {
    let task_service = use_coroutine_handle::<TaskCommand>();
    let draft = UI_MODEL.read().draft.clone();
    let is_editing = UI_MODEL.read().is_editing();

    rsx! {
        form {
            class: "flex flex-col gap-4",
            onsubmit: move |evt| {
                evt.prevent_default();
                let mut model = UI_MODEL.write();
                // Both messages are dropped before validation runs
                model.clear_messages();
                match TaskParameters::try_from(&model.draft) {
                    Ok(parameters) => task_service.send(TaskCommand::Submit(parameters)),
                    Err(_) => model.error_message = Some(ALL_FIELDS_REQUIRED.to_string()),
                }
            },

            FloatingLabelInputText {
                name: "task-title-input",
                label: "Title",
                required: true,
                value: draft.title.clone(),
                oninput: move |evt: FormEvent| UI_MODEL.write().draft.title = evt.value(),
            }

            FloatingLabelInputText {
                name: "task-description-input",
                label: "Description",
                required: true,
                value: draft.description.clone(),
                oninput: move |evt: FormEvent| UI_MODEL.write().draft.description = evt.value(),
            }

            FloatingLabelInputDate {
                name: "task-due_date-input",
                label: "Due date",
                required: true,
                value: draft.due_date.clone(),
                oninput: move |evt: FormEvent| UI_MODEL.write().draft.due_date = evt.value(),
            }

            FloatingLabelStatusSelect {
                name: "task-status-input",
                label: "Status",
                value: draft.status.to_string(),
                oninput: move |evt: FormEvent| {
                    if let Ok(status) = evt.value().parse::<TaskStatus>() {
                        UI_MODEL.write().draft.status = status;
                    }
                },
            }

            button {
                r#type: "submit",
                class: "btn btn-primary",
                if is_editing {
                    "Update Task"
                } else {
                    "Add Task"
                }
            }
        }
    }
}
