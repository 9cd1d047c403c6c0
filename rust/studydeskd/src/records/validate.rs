use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Field name -> human-readable message for every failing field.
/// An empty mapping means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn field_list(&self) -> String {
        self.0.keys().cloned().collect::<Vec<_>>().join(", ")
    }

    /// `Ok(value)` when no field failed.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Records "`label` is required" when `value` is empty or whitespace.
pub fn require_text(errors: &mut FieldErrors, field: &str, label: &str, value: &str) -> bool {
    if is_blank(value) {
        errors.insert(field, format!("{label} is required"));
        return false;
    }
    true
}

/// `local@domain.tld` shape test. No whitespace anywhere, a non-empty local
/// part, and a dotted domain with non-empty labels around the last dot.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn require_email(errors: &mut FieldErrors, field: &str, value: &str) -> bool {
    if !require_text(errors, field, "Email", value) {
        return false;
    }
    if !looks_like_email(value) {
        errors.insert(field, "Invalid email format");
        return false;
    }
    true
}

/// Parses a whole number and rejects anything outside `min..=max`.
/// Out-of-range input is an error here, never clamped.
pub fn parse_int_in_range(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    raw: &str,
    min: i64,
    max: i64,
) -> Option<i64> {
    if !require_text(errors, field, label, raw) {
        return None;
    }
    let n = match raw.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            errors.insert(field, format!("{label} must be a whole number"));
            return None;
        }
    };
    if !(min..=max).contains(&n) {
        errors.insert(field, format!("{label} must be between {min} and {max}"));
        return None;
    }
    Some(n)
}

pub fn parse_date(errors: &mut FieldErrors, field: &str, label: &str, raw: &str) -> Option<NaiveDate> {
    if !require_text(errors, field, label, raw) {
        return None;
    }
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            errors.insert(field, format!("{label} must be a valid date (YYYY-MM-DD)"));
            None
        }
    }
}

/// Form inputs arrive as strings, numbers or null depending on the widget.
/// Drafts keep them as raw text so validation owns the parsing.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(match v {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut errors = FieldErrors::new();
        assert!(!require_text(&mut errors, "title", "Title", "   \t"));
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("student@edu.np"));
        assert!(looks_like_email("  a.b@c.d.e "));
        assert!(!looks_like_email("student@edu"));
        assert!(!looks_like_email("@edu.np"));
        assert!(!looks_like_email("student@.np"));
        assert!(!looks_like_email("student@edu."));
        assert!(!looks_like_email("stu dent@edu.np"));
        assert!(!looks_like_email("student"));
    }

    #[test]
    fn int_range_rejects_instead_of_clamping() {
        let mut errors = FieldErrors::new();
        assert_eq!(parse_int_in_range(&mut errors, "grade", "Grade", "101", 0, 100), None);
        assert_eq!(errors.get("grade"), Some("Grade must be between 0 and 100"));

        let mut errors = FieldErrors::new();
        assert_eq!(parse_int_in_range(&mut errors, "grade", "Grade", "8.5", 0, 100), None);
        assert_eq!(errors.get("grade"), Some("Grade must be a whole number"));

        let mut errors = FieldErrors::new();
        assert_eq!(parse_int_in_range(&mut errors, "grade", "Grade", " 100 ", 0, 100), Some(100));
        assert!(errors.is_empty());
    }

    #[test]
    fn dates_must_be_iso() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            parse_date(&mut errors, "dueDate", "Due date", "2023-11-15"),
            NaiveDate::from_ymd_opt(2023, 11, 15)
        );
        assert!(parse_date(&mut errors, "dueDate", "Due date", "15/11/2023").is_none());
        assert_eq!(
            errors.get("dueDate"),
            Some("Due date must be a valid date (YYYY-MM-DD)")
        );
    }

    #[test]
    fn lenient_string_accepts_numbers_and_null() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(deserialize_with = "lenient_string")]
            v: String,
        }
        let p: Probe = serde_json::from_value(serde_json::json!({ "v": 88 })).expect("number");
        assert_eq!(p.v, "88");
        let p: Probe = serde_json::from_value(serde_json::json!({ "v": null })).expect("null");
        assert_eq!(p.v, "");
    }
}
