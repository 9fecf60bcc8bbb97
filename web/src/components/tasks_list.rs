#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::error;

use taskboard::task::Task;

use crate::{
    model::UI_MODEL,
    services::task_service::{TaskCommand, TASKS},
    utils::{confirm_dialog, focus_element},
};

#[component]
pub fn TasksList() -> Element {
    rsx! {
        table {
            class: "table w-full",
            thead {
                tr {
                    th { "Title" }
                    th { "Description" }
                    th { "Due Date" }
                    th { "Status" }
                    th { "Actions" }
                }
            }
            tbody {
                if TASKS().is_empty() {
                    tr {
                        td {
                            colspan: "5",
                            class: "text-center text-gray-400",
                            "No tasks yet"
                        }
                    }
                }
                for task in TASKS() {
                    TaskListItem { key: "{task.task_id}", task: task.clone() }
                }
            }
        }
    }
}

#[component]
fn TaskListItem(task: ReadOnlySignal<Task>) -> Element {
    let task_service = use_coroutine_handle::<TaskCommand>();
    let due_date = task().due_date.display_date();
    let status = task().status.to_string();

    rsx! {
        tr {
            td { "{task().title}" }
            td { "{task().description}" }
            td { "{due_date}" }
            td { "{status}" }
            td {
                class: "flex gap-2",
                button {
                    class: "btn btn-sm",
                    onclick: move |_| {
                        UI_MODEL.write().begin_edit(&task());
                        spawn(async move {
                            if let Err(error) = focus_element("task-title-input").await {
                                error!("Error focusing element task-title-input: {error:?}");
                            }
                        });
                    },
                    "Edit"
                }
                button {
                    class: "btn btn-sm btn-error",
                    onclick: move |_| {
                        match confirm_dialog("Delete this task?") {
                            Ok(true) => task_service.send(TaskCommand::Delete(task().task_id)),
                            // Declined: no request, no state change
                            Ok(false) => (),
                            Err(error) => {
                                error!("Error opening the confirmation dialog: {error:?}")
                            }
                        }
                    },
                    "Delete"
                }
            }
        }
    }
}
