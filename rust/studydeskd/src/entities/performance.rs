use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::seed_date;
use crate::records::validate::{lenient_string, parse_int_in_range, require_text};
use crate::records::{Entity, FieldErrors, FormMode, RecordId, SortValue};

pub const MIN_GRADE: u8 = 0;
pub const MAX_GRADE: u8 = 100;

/// Colour band for a grade bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeBand {
    Low,
    Medium,
    High,
}

impl GradeBand {
    pub fn of(grade: u8) -> Self {
        if grade < 50 {
            Self::Low
        } else if grade < 80 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: RecordId,
    pub name: String,
    pub grade: u8,
    pub band: GradeBand,
    pub created_on: NaiveDate,
}

impl Subject {
    fn new(id: RecordId, name: &str, grade: u8, created_on: NaiveDate) -> Self {
        let grade = grade.clamp(MIN_GRADE, MAX_GRADE);
        Self {
            id,
            name: name.to_string(),
            grade,
            band: GradeBand::of(grade),
            created_on,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectDraft {
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub grade: String,
}

pub struct SubjectFields {
    name: String,
    grade: u8,
}

impl Entity for Subject {
    type Draft = SubjectDraft;
    type Fields = SubjectFields;

    const KIND: &'static str = "subject";
    const LABEL: &'static str = "Subject";
    const FILTER_FIELDS: &'static [&'static str] = &["band"];
    const SORT_KEYS: &'static [&'static str] = &["name", "grade"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    fn validate(draft: &SubjectDraft, _mode: FormMode) -> Result<SubjectFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", "Subject name", &draft.name);
        let grade = parse_int_in_range(
            &mut errors,
            "grade",
            "Grade",
            &draft.grade,
            i64::from(MIN_GRADE),
            i64::from(MAX_GRADE),
        );
        let grade = grade.and_then(|g| u8::try_from(g).ok()).unwrap_or(MIN_GRADE);
        errors.into_result(SubjectFields {
            name: draft.name.clone(),
            grade,
        })
    }

    fn assemble(id: RecordId, created_on: NaiveDate, f: SubjectFields) -> Self {
        Self::new(id, &f.name, f.grade, created_on)
    }

    fn to_draft(&self) -> SubjectDraft {
        SubjectDraft {
            name: self.name.clone(),
            grade: self.grade.to_string(),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<&str> {
        match field {
            "band" => Some(match self.band {
                GradeBand::Low => "low",
                GradeBand::Medium => "medium",
                GradeBand::High => "high",
            }),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::text(&self.name)),
            "grade" => Some(SortValue::Number(i64::from(self.grade))),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Standing {
    Excellent,
    VeryGood,
    Good,
    Satisfactory,
    NeedsImprovement,
    Concern,
    NoData,
}

impl Standing {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Concern => "Concern",
            Self::NoData => "No Data",
        }
    }
}

/// Mean grade rounded to the nearest integer (halves round up).
/// `None` for an empty set.
pub fn average(subjects: &[Subject]) -> Option<u8> {
    if subjects.is_empty() {
        return None;
    }
    let total: u32 = subjects.iter().map(|s| u32::from(s.grade)).sum();
    let mean = f64::from(total) / subjects.len() as f64;
    Some(mean.round() as u8)
}

pub fn standing(average: Option<u8>) -> Standing {
    match average {
        None => Standing::NoData,
        Some(a) if a >= 90 => Standing::Excellent,
        Some(a) if a >= 80 => Standing::VeryGood,
        Some(a) if a >= 70 => Standing::Good,
        Some(a) if a >= 60 => Standing::Satisfactory,
        Some(a) if a >= 50 => Standing::NeedsImprovement,
        Some(_) => Standing::Concern,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub average: Option<u8>,
    pub standing: Standing,
    pub label: &'static str,
    pub subject_count: usize,
}

pub fn summarize(subjects: &[Subject]) -> Summary {
    let avg = average(subjects);
    let standing = standing(avg);
    Summary {
        average: avg,
        standing,
        label: standing.label(),
        subject_count: subjects.len(),
    }
}

pub fn seed() -> Vec<Subject> {
    let created = seed_date(2023, 9, 1);
    vec![
        Subject::new(1, "Mathematics", 85, created),
        Subject::new(2, "Science", 92, created),
        Subject::new(3, "History", 78, created),
        Subject::new(4, "English Literature", 88, created),
        Subject::new(5, "Art", 95, created),
        Subject::new(6, "Physical Education", 45, created),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects(grades: &[u8]) -> Vec<Subject> {
        grades
            .iter()
            .enumerate()
            .map(|(i, g)| Subject::new(i as u64 + 1, "S", *g, seed_date(2024, 1, 1)))
            .collect()
    }

    #[test]
    fn average_rounds_to_nearest() {
        let s = subjects(&[85, 92, 78, 88, 95]);
        assert_eq!(average(&s), Some(88));
        assert_eq!(standing(average(&s)).label(), "Very Good");
    }

    #[test]
    fn seeded_average_rounds_half_up() {
        // 483 / 6 = 80.5
        assert_eq!(average(&seed()), Some(81));
    }

    #[test]
    fn empty_set_has_no_average() {
        let summary = summarize(&[]);
        assert_eq!(summary.average, None);
        assert_eq!(summary.standing, Standing::NoData);
        assert_eq!(summary.label, "No Data");
    }

    #[test]
    fn standing_steps() {
        assert_eq!(standing(Some(90)), Standing::Excellent);
        assert_eq!(standing(Some(89)), Standing::VeryGood);
        assert_eq!(standing(Some(70)), Standing::Good);
        assert_eq!(standing(Some(60)), Standing::Satisfactory);
        assert_eq!(standing(Some(50)), Standing::NeedsImprovement);
        assert_eq!(standing(Some(49)), Standing::Concern);
        assert_eq!(standing(Some(0)), Standing::Concern);
    }

    #[test]
    fn bands() {
        assert_eq!(GradeBand::of(49), GradeBand::Low);
        assert_eq!(GradeBand::of(50), GradeBand::Medium);
        assert_eq!(GradeBand::of(79), GradeBand::Medium);
        assert_eq!(GradeBand::of(80), GradeBand::High);
    }

    #[test]
    fn grade_outside_range_is_rejected() {
        for raw in ["-1", "101", "abc", ""] {
            let draft = SubjectDraft {
                name: "Art".into(),
                grade: raw.into(),
            };
            let errors = match Subject::validate(&draft, FormMode::Edit) {
                Err(e) => e,
                Ok(_) => panic!("{raw:?} must be rejected"),
            };
            assert!(errors.get("grade").is_some(), "no grade error for {raw:?}");
        }
    }

    #[test]
    fn band_follows_grade_on_revise() {
        let records = seed();
        let pe = &records[5];
        assert_eq!(pe.band, GradeBand::Low);
        let draft = SubjectDraft {
            name: pe.name.clone(),
            grade: "82".into(),
        };
        let fields = match Subject::validate(&draft, FormMode::Edit) {
            Ok(f) => f,
            Err(e) => panic!("valid: {e:?}"),
        };
        let revised = pe.revise(fields);
        assert_eq!(revised.grade, 82);
        assert_eq!(revised.band, GradeBand::High);
    }
}
