use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::seed_date;
use crate::records::validate::require_text;
use crate::records::{Entity, FieldErrors, FormMode, RecordId, SortDirection, SortSpec, SortValue};

/// `date` is the day the announcement was posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnouncementDraft {
    pub title: String,
    pub description: String,
    pub author: String,
}

impl Entity for Announcement {
    type Draft = AnnouncementDraft;
    type Fields = AnnouncementDraft;

    const KIND: &'static str = "announcement";
    const LABEL: &'static str = "Announcement";
    const FILTER_FIELDS: &'static [&'static str] = &["author"];
    const SORT_KEYS: &'static [&'static str] = &["date", "title", "author"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_on(&self) -> NaiveDate {
        self.date
    }

    fn validate(draft: &AnnouncementDraft, _mode: FormMode) -> Result<AnnouncementDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", "Title", &draft.title);
        require_text(&mut errors, "description", "Description", &draft.description);
        require_text(&mut errors, "author", "Author", &draft.author);
        errors.into_result(draft.clone())
    }

    fn assemble(id: RecordId, created_on: NaiveDate, f: AnnouncementDraft) -> Self {
        Self {
            id,
            title: f.title,
            description: f.description,
            date: created_on,
            author: f.author,
        }
    }

    fn to_draft(&self) -> AnnouncementDraft {
        AnnouncementDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.author.as_str(),
        ]
    }

    fn filter_value(&self, field: &str) -> Option<&str> {
        match field {
            "author" => Some(self.author.as_str()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "date" => Some(SortValue::Date(self.date)),
            "title" => Some(SortValue::text(&self.title)),
            "author" => Some(SortValue::text(&self.author)),
            _ => None,
        }
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::new("date", SortDirection::Desc))
    }
}

pub fn seed() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Welcome to the New Semester".into(),
            description: "We are excited to welcome all students to the new semester. Classes will begin on Monday, and we have many exciting activities planned.".into(),
            date: seed_date(2023, 8, 15),
            author: "Principal Johnson".into(),
        },
        Announcement {
            id: 2,
            title: "Library Hours Update".into(),
            description: "Starting next week, the library will be open until 10 PM on weekdays to accommodate students who need extra study time.".into(),
            date: seed_date(2023, 8, 18),
            author: "Library Department".into(),
        },
        Announcement {
            id: 3,
            title: "Science Fair Registration".into(),
            description: "Registration for the annual science fair is now open. All students interested in participating should sign up by the end of the month.".into(),
            date: seed_date(2023, 8, 20),
            author: "Science Department".into(),
        },
    ]
}
