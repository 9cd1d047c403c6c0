use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::seed_date;
use crate::records::validate::require_text;
use crate::records::{Entity, FieldErrors, FormMode, RecordId, SortValue};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialType {
    #[default]
    Link,
    #[serde(rename = "PDF")]
    Pdf,
    Video,
    Notes,
}

impl MaterialType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Link => "Link",
            Self::Pdf => "PDF",
            Self::Video => "Video",
            Self::Notes => "Notes",
        }
    }
}

/// Type-keyed payload. Only the field that matches the type is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Payload {
    Link {
        url: String,
    },
    #[serde(rename = "PDF", rename_all = "camelCase")]
    Pdf {
        file_name: String,
    },
    Video {
        url: String,
    },
    Notes {
        content: String,
    },
}

impl Payload {
    pub fn kind(&self) -> MaterialType {
        match self {
            Self::Link { .. } => MaterialType::Link,
            Self::Pdf { .. } => MaterialType::Pdf,
            Self::Video { .. } => MaterialType::Video,
            Self::Notes { .. } => MaterialType::Notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub payload: Payload,
    pub created_on: NaiveDate,
}

/// Form state. Every payload input is kept while the user flips between
/// types; `validate` picks the one that matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialDraft {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: MaterialType,
    pub url: String,
    pub content: String,
    pub file_name: String,
}

pub struct MaterialFields {
    title: String,
    description: String,
    payload: Payload,
}

/// What the front end should do when a material card is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum MaterialView {
    #[serde(rename_all = "camelCase")]
    OpenUrl { url: String },
    #[serde(rename_all = "camelCase")]
    OpenFile { file_name: String },
    #[serde(rename_all = "camelCase")]
    ShowNotes { content: String },
}

impl Material {
    pub fn view(&self) -> MaterialView {
        match &self.payload {
            Payload::Link { url } | Payload::Video { url } => MaterialView::OpenUrl { url: url.clone() },
            Payload::Pdf { file_name } => MaterialView::OpenFile {
                file_name: file_name.clone(),
            },
            Payload::Notes { content } => MaterialView::ShowNotes {
                content: content.clone(),
            },
        }
    }
}

impl Entity for Material {
    type Draft = MaterialDraft;
    type Fields = MaterialFields;

    const KIND: &'static str = "material";
    const LABEL: &'static str = "Material";
    const FILTER_FIELDS: &'static [&'static str] = &["type"];
    const SORT_KEYS: &'static [&'static str] = &["createdOn", "title", "type"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// A PDF needs a file name when it is first added; an edit may leave it
    /// blank and keep the file already attached.
    fn validate(draft: &MaterialDraft, mode: FormMode) -> Result<MaterialFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", "Title", &draft.title);
        require_text(&mut errors, "description", "Description", &draft.description);

        let payload = match draft.kind {
            MaterialType::Link => {
                require_text(&mut errors, "url", "URL", &draft.url);
                Payload::Link {
                    url: draft.url.clone(),
                }
            }
            MaterialType::Video => {
                require_text(&mut errors, "url", "URL", &draft.url);
                Payload::Video {
                    url: draft.url.clone(),
                }
            }
            MaterialType::Notes => {
                require_text(&mut errors, "content", "Content", &draft.content);
                Payload::Notes {
                    content: draft.content.clone(),
                }
            }
            MaterialType::Pdf => {
                if mode == FormMode::Create {
                    require_text(&mut errors, "fileName", "File name", &draft.file_name);
                }
                Payload::Pdf {
                    file_name: draft.file_name.clone(),
                }
            }
        };

        errors.into_result(MaterialFields {
            title: draft.title.clone(),
            description: draft.description.clone(),
            payload,
        })
    }

    fn assemble(id: RecordId, created_on: NaiveDate, f: MaterialFields) -> Self {
        Self {
            id,
            title: f.title,
            description: f.description,
            payload: f.payload,
            created_on,
        }
    }

    /// Only a record that already holds a file may keep it by leaving the
    /// name blank. Switching another type to PDF needs a file name.
    fn validate_revision(&self, draft: &MaterialDraft) -> Result<MaterialFields, FieldErrors> {
        let mode = match self.payload {
            Payload::Pdf { .. } => FormMode::Edit,
            _ => FormMode::Create,
        };
        Self::validate(draft, mode)
    }

    fn revise(&self, mut f: MaterialFields) -> Self {
        if let (Payload::Pdf { file_name: next }, Payload::Pdf { file_name: current }) =
            (&mut f.payload, &self.payload)
        {
            if next.trim().is_empty() {
                *next = current.clone();
            }
        }
        Self::assemble(self.id, self.created_on, f)
    }

    fn to_draft(&self) -> MaterialDraft {
        let mut draft = MaterialDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            kind: self.payload.kind(),
            ..MaterialDraft::default()
        };
        match &self.payload {
            Payload::Link { url } | Payload::Video { url } => draft.url = url.clone(),
            Payload::Pdf { file_name } => draft.file_name = file_name.clone(),
            Payload::Notes { content } => draft.content = content.clone(),
        }
        draft
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<&str> {
        match field {
            "type" => Some(self.payload.kind().as_str()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "createdOn" => Some(SortValue::Date(self.created_on)),
            "title" => Some(SortValue::text(&self.title)),
            "type" => Some(SortValue::text(self.payload.kind().as_str())),
            _ => None,
        }
    }
}

pub fn seed() -> Vec<Material> {
    vec![
        Material {
            id: 1,
            title: "React Documentation".into(),
            description: "Official React documentation for learning React concepts".into(),
            payload: Payload::Link {
                url: "https://reactjs.org/docs/getting-started.html".into(),
            },
            created_on: seed_date(2023, 10, 15),
        },
        Material {
            id: 2,
            title: "JavaScript Fundamentals".into(),
            description: "Complete guide to JavaScript fundamentals with examples".into(),
            payload: Payload::Pdf {
                file_name: "javascript-fundamentals.pdf".into(),
            },
            created_on: seed_date(2023, 10, 10),
        },
        Material {
            id: 3,
            title: "CSS Flexbox Guide".into(),
            description: "Visual guide to CSS Flexbox layout with interactive examples".into(),
            payload: Payload::Video {
                url: "https://www.youtube.com/watch?v=JJSoEo8JSnc".into(),
            },
            created_on: seed_date(2023, 10, 5),
        },
        Material {
            id: 4,
            title: "Algorithm Notes".into(),
            description: "My personal notes on algorithms and data structures".into(),
            payload: Payload::Notes {
                content: "Binary Search: Divide and conquer approach for searching in sorted arrays. Time complexity: O(log n). Space complexity: O(1) for iterative approach.".into(),
            },
            created_on: seed_date(2023, 9, 28),
        },
    ]
}
