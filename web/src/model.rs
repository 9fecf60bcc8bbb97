use dioxus::prelude::*;

use taskboard::task::{Task, TaskId, TaskStatus};

pub static UI_MODEL: GlobalSignal<TaskboardUIModel> = Signal::global(Default::default);

/// The whole client-side state bag besides the task collection itself:
/// the form draft, the create/edit mode marker and the two status messages.
#[derive(Debug, Default)]
pub struct TaskboardUIModel {
    pub draft: TaskDraft,
    pub editing_task_id: Option<TaskId>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl TaskboardUIModel {
    pub fn clear_messages(&mut self) {
        self.success_message = None;
        self.error_message = None;
    }

    /// Copies a task into the draft and switches to edit mode. Only the
    /// date portion of the due-date timestamp is kept, as that is what the
    /// date input edits. Messages are left untouched.
    pub fn begin_edit(&mut self, task: &Task) {
        self.draft = TaskDraft {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.display_date(),
            status: task.status,
        };
        self.editing_task_id = Some(task.task_id.clone());
    }

    pub fn reset_draft(&mut self) {
        self.draft = TaskDraft::default();
        self.editing_task_id = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing_task_id.is_some()
    }
}

/// Raw form state, kept as the inputs produce it. Turned into typed
/// `TaskParameters` on submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: TaskStatus,
}
