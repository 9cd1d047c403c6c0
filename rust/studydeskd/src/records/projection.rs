use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: key.to_string(),
            direction,
        }
    }
}

/// Typed sort key. Dates compare chronologically; text is compared
/// case-insensitively, so callers hand in the folded form via [`SortValue::text`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Number(i64),
    Date(NaiveDate),
    Text(String),
}

impl SortValue {
    pub fn text(s: &str) -> Self {
        Self::Text(s.to_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    pub search_term: String,
    pub filters: BTreeMap<String, String>,
    pub sort_key: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl Query {
    #[cfg(test)]
    pub fn search(term: &str) -> Self {
        Self {
            search_term: term.to_string(),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn filter(mut self, field: &str, value: &str) -> Self {
        self.filters.insert(field.to_string(), value.to_string());
        self
    }

    pub fn sorted(mut self, key: &str, direction: SortDirection) -> Self {
        self.sort_key = Some(key.to_string());
        self.sort_direction = Some(direction);
        self
    }

    /// Rejects filter fields and sort keys the entity does not expose.
    pub fn check<E: Entity>(&self) -> Result<(), String> {
        for field in self.filters.keys() {
            if !E::FILTER_FIELDS.contains(&field.as_str()) {
                return Err(format!(
                    "unknown {} filter: {} (expected one of: {})",
                    E::KIND,
                    field,
                    E::FILTER_FIELDS.join(", ")
                ));
            }
        }
        if let Some(key) = &self.sort_key {
            if !E::SORT_KEYS.contains(&key.as_str()) {
                return Err(format!(
                    "unknown {} sort key: {} (expected one of: {})",
                    E::KIND,
                    key,
                    E::SORT_KEYS.join(", ")
                ));
            }
        }
        Ok(())
    }

    /// Explicit sort from the query, else the entity default.
    pub fn sort_spec<E: Entity>(&self) -> Option<SortSpec> {
        match &self.sort_key {
            Some(key) => Some(SortSpec::new(key, self.sort_direction.unwrap_or_default())),
            None => E::default_sort().map(|mut spec| {
                if let Some(direction) = self.sort_direction {
                    spec.direction = direction;
                }
                spec
            }),
        }
    }
}

fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value == "all"
}

fn matches_search<E: Entity>(record: &E, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn matches_filters<E: Entity>(record: &E, filters: &BTreeMap<String, String>) -> bool {
    filters
        .iter()
        .filter(|(_, wanted)| !is_unconstrained(wanted))
        .all(|(field, wanted)| record.filter_value(field) == Some(wanted.as_str()))
}

/// Visible subset and order of `records` for `query`. Pure: the input slice
/// is never touched, and equal inputs always give the same sequence.
pub fn project<E: Entity>(records: &[E], query: &Query) -> Vec<E> {
    let needle = query.search_term.to_lowercase();
    let mut visible: Vec<E> = records
        .iter()
        .filter(|r| matches_search(*r, &needle) && matches_filters(*r, &query.filters))
        .cloned()
        .collect();

    if let Some(spec) = query.sort_spec::<E>() {
        // `sort_by` is stable; ties keep their store order in both directions.
        visible.sort_by(|a, b| {
            let ord = a.sort_value(&spec.key).cmp(&b.sort_value(&spec.key));
            match spec.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
    visible
}
