use anyhow::anyhow;

use taskboard::task::TaskParameters;

use crate::model::TaskDraft;

/// The only validation done client-side; everything else is the server's
/// responsibility.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";

impl TryFrom<&TaskDraft> for TaskParameters {
    type Error = anyhow::Error;

    fn try_from(draft: &TaskDraft) -> Result<Self, Self::Error> {
        if draft.title.trim().is_empty() {
            return Err(anyhow!("title is required"));
        }

        if draft.description.trim().is_empty() {
            return Err(anyhow!("description is required"));
        }

        if draft.due_date.is_empty() {
            return Err(anyhow!("due date is required"));
        }

        Ok(TaskParameters {
            // Trimming is validation-only, the values are submitted verbatim
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date.parse()?,
            status: draft.status,
        })
    }
}
