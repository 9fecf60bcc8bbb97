#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::debug;

use crate::{
    components::{alert_zone::AlertZone, task_form::TaskForm, tasks_list::TasksList},
    services::task_service::TaskCommand,
};

#[component]
pub fn TasksPage() -> Element {
    debug!("Rendering tasks page");
    let task_service = use_coroutine_handle::<TaskCommand>();

    // Initial load; every later refresh is triggered by the service itself
    use_future(move || async move {
        task_service.send(TaskCommand::Refresh);
    });

    rsx! {
        div {
            class: "max-w-3xl mx-auto flex flex-col gap-6 p-4",

            h1 { class: "text-2xl font-semibold", "Task Management" }
            AlertZone {}
            TaskForm {}
            TasksList {}
        }
    }
}
