#![allow(non_snake_case)]

#[macro_use]
extern crate lazy_static;

use dioxus::prelude::*;
use log::debug;

use config::get_api_base_url;
use model::UI_MODEL;
use pages::tasks_page::TasksPage;
use services::task_service::{task_service, TASKS};

mod components;
mod config;
mod form;
mod model;
mod pages;
mod services;
mod utils;

pub fn App() -> Element {
    let api_base_url = use_memo(|| get_api_base_url().unwrap());
    let _task_service = use_coroutine(move |rx| {
        task_service(rx, api_base_url(), TASKS.signal(), UI_MODEL.signal())
    });

    debug!("Rendering app");
    rsx! {
        document::Stylesheet { href: "https://cdn.jsdelivr.net/npm/daisyui@5/daisyui.css" }

        div {
            class: "min-h-screen bg-base-200 text-base-content text-sm",

            TasksPage {}
        }
    }
}
