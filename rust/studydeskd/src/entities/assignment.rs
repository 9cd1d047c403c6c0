use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::seed_date;
use crate::records::validate::{parse_date, require_text};
use crate::records::{Entity, FieldErrors, FormMode, RecordId, SortValue};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl AssignmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    fn rank(self) -> i64 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub subject: String,
    pub priority: Priority,
    pub created_on: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: AssignmentStatus,
    pub subject: String,
    pub priority: Priority,
}

pub struct AssignmentFields {
    title: String,
    description: String,
    due_date: NaiveDate,
    status: AssignmentStatus,
    subject: String,
    priority: Priority,
}

impl Entity for Assignment {
    type Draft = AssignmentDraft;
    type Fields = AssignmentFields;

    const KIND: &'static str = "assignment";
    const LABEL: &'static str = "Assignment";
    const FILTER_FIELDS: &'static [&'static str] = &["status", "subject", "priority"];
    const SORT_KEYS: &'static [&'static str] = &["dueDate", "title", "subject", "priority", "createdOn"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    fn validate(draft: &AssignmentDraft, _mode: FormMode) -> Result<AssignmentFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", "Title", &draft.title);
        let due_date = parse_date(&mut errors, "dueDate", "Due date", &draft.due_date);
        let Some(due_date) = due_date else {
            return Err(errors);
        };
        errors.into_result(AssignmentFields {
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date,
            status: draft.status,
            subject: draft.subject.clone(),
            priority: draft.priority,
        })
    }

    fn assemble(id: RecordId, created_on: NaiveDate, f: AssignmentFields) -> Self {
        Self {
            id,
            title: f.title,
            description: f.description,
            due_date: f.due_date,
            status: f.status,
            subject: f.subject,
            priority: f.priority,
            created_on,
        }
    }

    fn to_draft(&self) -> AssignmentDraft {
        AssignmentDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.format("%Y-%m-%d").to_string(),
            status: self.status,
            subject: self.subject.clone(),
            priority: self.priority,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "subject" => Some(self.subject.as_str()),
            "priority" => Some(self.priority.as_str()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "dueDate" => Some(SortValue::Date(self.due_date)),
            "title" => Some(SortValue::text(&self.title)),
            "subject" => Some(SortValue::text(&self.subject)),
            "priority" => Some(SortValue::Number(self.priority.rank())),
            "createdOn" => Some(SortValue::Date(self.created_on)),
            _ => None,
        }
    }
}

/// Distinct non-empty subjects in store order, for the subject filter.
pub fn subjects(records: &[Assignment]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .filter(|a| !a.subject.trim().is_empty())
        .filter(|a| seen.insert(a.subject.clone()))
        .map(|a| a.subject.clone())
        .collect()
}

pub fn seed() -> Vec<Assignment> {
    let created = seed_date(2023, 11, 1);
    vec![
        Assignment {
            id: 1,
            title: "Math Homework".into(),
            description: "Complete exercises 1-10 on page 45".into(),
            due_date: seed_date(2023, 11, 15),
            status: AssignmentStatus::Pending,
            subject: "Mathematics".into(),
            priority: Priority::High,
            created_on: created,
        },
        Assignment {
            id: 2,
            title: "Science Project".into(),
            description: "Research on renewable energy sources".into(),
            due_date: seed_date(2023, 11, 20),
            status: AssignmentStatus::InProgress,
            subject: "Science".into(),
            priority: Priority::Medium,
            created_on: created,
        },
        Assignment {
            id: 3,
            title: "History Essay".into(),
            description: "Write a 1000-word essay on World War II".into(),
            due_date: seed_date(2023, 11, 10),
            status: AssignmentStatus::Completed,
            subject: "History".into(),
            priority: Priority::Low,
            created_on: created,
        },
    ]
}
