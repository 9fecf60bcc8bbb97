use std::{
    fmt::{self, Display},
    str::FromStr,
};

use chrono::{DateTime, NaiveDate, NaiveDateTime, ParseError, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use typed_id::TypedId;
use uuid::Uuid;

pub type TaskId = TypedId<Uuid, Task>;

/// A task as owned by the server. The client never builds one of these
/// itself, it only deserializes the server's response.
#[serde_as]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: TaskId,
    pub title: String,
    pub description: String,
    #[serde_as(as = "DisplayFromStr")]
    pub due_date: DueDate,
    pub status: TaskStatus,
}

/// Request body shared by the create and update endpoints.
#[serde_as]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskParameters {
    pub title: String,
    pub description: String,
    #[serde_as(as = "DisplayFromStr")]
    pub due_date: DueDate,
    pub status: TaskStatus,
}

#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub enum DueDate {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    DateTimeWithTz(DateTime<Utc>),
}

impl DueDate {
    /// The `%Y-%m-%d` truncation used for editing and display.
    pub fn display_date(&self) -> String {
        match self {
            DueDate::Date(date) => date.format("%Y-%m-%d"),
            DueDate::DateTime(datetime) => datetime.format("%Y-%m-%d"),
            DueDate::DateTimeWithTz(datetime) => datetime.format("%Y-%m-%d"),
        }
        .to_string()
    }
}

impl FromStr for DueDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(DueDate::Date(date));
        }

        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(DueDate::DateTime(datetime));
        }

        DateTime::parse_from_rfc3339(s)
            .map(|datetime| DueDate::DateTimeWithTz(datetime.with_timezone(&Utc)))
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DueDate::Date(date) => date.format("%Y-%m-%d"),
            DueDate::DateTime(datetime) => datetime.format("%Y-%m-%dT%H:%M:%S"),
            DueDate::DateTimeWithTz(datetime) => datetime.format("%Y-%m-%dT%H:%M:%SZ"),
        };
        write!(f, "{}", s)
    }
}

macro_attr! {
    #[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, EnumFromStr!, EnumDisplay!)]
    pub enum TaskStatus {
        Pending,
        InProgress,
        Completed
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    #[rstest]
    fn test_parse_due_date_for_naive_date() {
        assert_eq!(
            "2024-01-01".parse::<DueDate>().unwrap(),
            DueDate::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
    }

    #[rstest]
    fn test_parse_due_date_for_naive_datetime() {
        assert_eq!(
            "2024-05-01T00:00:00".parse::<DueDate>().unwrap(),
            DueDate::DateTime(
                NaiveDate::from_ymd_opt(2024, 5, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            )
        );
    }

    #[rstest]
    fn test_parse_due_date_for_datetime_with_timezone() {
        assert_eq!(
            "2024-05-01T11:43:02.000000Z".parse::<DueDate>().unwrap(),
            DueDate::DateTimeWithTz(
                NaiveDate::from_ymd_opt(2024, 5, 1)
                    .unwrap()
                    .and_hms_opt(11, 43, 2)
                    .unwrap()
                    .and_utc()
            )
        );
    }

    #[rstest]
    fn test_parse_due_date_for_wrong_date_format() {
        assert!("2024-05-01T".parse::<DueDate>().is_err());
    }

    #[rstest]
    #[case::date("2024-05-01", "2024-05-01")]
    #[case::datetime("2024-05-01T00:00:00", "2024-05-01")]
    #[case::datetime_with_timezone("2024-05-01T23:59:59Z", "2024-05-01")]
    fn test_display_date_truncates_to_date_portion(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(input.parse::<DueDate>().unwrap().display_date(), expected);
    }

    #[rstest]
    fn test_task_deserializes_from_wire_format() {
        let task: Task = serde_json::from_value(json!({
            "taskId": "0d8d4517-bfe2-40d2-92bf-e19ab1d4fb62",
            "title": "Buy milk",
            "description": "2%",
            "dueDate": "2024-05-01T00:00:00",
            "status": "InProgress"
        }))
        .unwrap();

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2%");
        assert_eq!(task.due_date.display_date(), "2024-05-01");
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[rstest]
    fn test_task_parameters_serialize_to_wire_format() {
        let parameters = TaskParameters {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            due_date: "2024-01-01".parse().unwrap(),
            status: TaskStatus::Pending,
        };

        assert_eq!(
            serde_json::to_value(&parameters).unwrap(),
            json!({
                "title": "Buy milk",
                "description": "2%",
                "dueDate": "2024-01-01",
                "status": "Pending"
            })
        );
    }

    #[rstest]
    fn test_task_status_parses_from_wire_spelling() {
        assert_eq!(
            "InProgress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(TaskStatus::Completed.to_string(), "Completed");
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }
}
