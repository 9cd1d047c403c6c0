pub mod announcement;
pub mod assignment;
pub mod material;
pub mod performance;
pub mod profile;

use chrono::NaiveDate;

/// Fixed calendar date for seed records.
pub(crate) fn seed_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
