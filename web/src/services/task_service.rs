use anyhow::Result;
use dioxus::prelude::*;
use futures_util::StreamExt;
use log::{debug, error};
use reqwest::Method;
use url::Url;

use taskboard::task::{Task, TaskId, TaskParameters};

use crate::{
    model::TaskboardUIModel,
    services::api::{call_api, call_api_no_content},
};

#[derive(Debug)]
pub enum TaskCommand {
    Refresh,
    Submit(TaskParameters),
    Delete(TaskId),
}

pub static TASKS: GlobalSignal<Vec<Task>> = Signal::global(Vec::new);

/// Processes commands sequentially, so mutations are serialized and each
/// successful mutation's refresh has run before the next command starts.
pub async fn task_service(
    mut rx: UnboundedReceiver<TaskCommand>,
    api_base_url: Url,
    mut tasks: Signal<Vec<Task>>,
    mut ui_model: Signal<TaskboardUIModel>,
) {
    loop {
        let msg = rx.next().await;
        match msg {
            Some(TaskCommand::Refresh) => {
                refresh_tasks(&api_base_url, tasks, ui_model).await;
            }
            Some(TaskCommand::Submit(parameters)) => {
                let editing_task_id = ui_model.peek().editing_task_id.clone();
                let is_editing = editing_task_id.is_some();
                let result = match editing_task_id {
                    Some(task_id) => update_task(&api_base_url, task_id, &parameters).await,
                    None => create_task(&api_base_url, &parameters).await,
                };

                match result {
                    Ok(()) => {
                        {
                            let mut model = ui_model.write();
                            model.success_message = Some(
                                if is_editing {
                                    "Task updated successfully."
                                } else {
                                    "Task added successfully."
                                }
                                .to_string(),
                            );
                            model.reset_draft();
                        }
                        refresh_tasks(&api_base_url, tasks, ui_model).await;
                    }
                    Err(error) => {
                        error!("An error occurred while submitting a task: {error:?}");
                        ui_model.write().error_message =
                            Some("Failed to submit task.".to_string());
                    }
                }
            }
            Some(TaskCommand::Delete(task_id)) => match delete_task(&api_base_url, task_id.clone())
                .await
            {
                Ok(()) => {
                    ui_model.write().success_message =
                        Some("Task deleted successfully.".to_string());
                    refresh_tasks(&api_base_url, tasks, ui_model).await;
                }
                Err(error) => {
                    error!("An error occurred while deleting task {task_id}: {error:?}");
                    ui_model.write().error_message = Some("Failed to delete task.".to_string());
                }
            },
            None => {}
        }
    }
}

async fn refresh_tasks(
    api_base_url: &Url,
    mut tasks: Signal<Vec<Task>>,
    mut ui_model: Signal<TaskboardUIModel>,
) {
    let result = list_tasks(api_base_url).await;
    apply_refresh_result(result, &mut tasks.write(), &mut ui_model.write());
}

/// Post-condition of every refresh: on success the collection is replaced
/// wholesale with the server's response, on failure the stale collection is
/// kept and only the error message is set.
fn apply_refresh_result(
    result: Result<Vec<Task>>,
    tasks: &mut Vec<Task>,
    ui_model: &mut TaskboardUIModel,
) {
    match result {
        Ok(new_tasks) => {
            debug!("{} tasks loaded", new_tasks.len());
            *tasks = new_tasks;
        }
        Err(error) => {
            error!("An error occurred while fetching tasks: {error:?}");
            ui_model.error_message = Some("Failed to fetch tasks".to_string());
        }
    }
}

pub(crate) async fn list_tasks(api_base_url: &Url) -> Result<Vec<Task>> {
    // random type as we don't care about the body's type
    call_api(Method::GET, api_base_url, "tasks", None::<i32>).await
}

pub(crate) async fn create_task(api_base_url: &Url, parameters: &TaskParameters) -> Result<()> {
    call_api_no_content(Method::POST, api_base_url, "tasks", Some(parameters)).await
}

pub(crate) async fn update_task(
    api_base_url: &Url,
    task_id: TaskId,
    parameters: &TaskParameters,
) -> Result<()> {
    call_api_no_content(
        Method::PUT,
        api_base_url,
        &format!("tasks/{task_id}"),
        Some(parameters),
    )
    .await
}

pub(crate) async fn delete_task(api_base_url: &Url, task_id: TaskId) -> Result<()> {
    call_api_no_content(
        Method::DELETE,
        api_base_url,
        &format!("tasks/{task_id}"),
        None::<i32>,
    )
    .await
}
