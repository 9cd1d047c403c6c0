use serde::Serialize;

use crate::entities::announcement::Announcement;
use crate::entities::assignment::{Assignment, AssignmentStatus};
use crate::entities::performance::{summarize, Subject, Summary};
use crate::records::{project, Query, SortDirection};

pub const UPCOMING_LIMIT: usize = 4;
pub const LATEST_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    pub assignments: usize,
    pub pending_assignments: usize,
    pub announcements: usize,
    pub materials: usize,
    pub subjects: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub upcoming: Vec<Assignment>,
    pub latest_announcements: Vec<Announcement>,
    pub performance: Summary,
    pub counts: Counts,
}

pub fn overview(
    assignments: &[Assignment],
    announcements: &[Announcement],
    subjects: &[Subject],
    material_count: usize,
) -> Overview {
    let upcoming = project(
        assignments,
        &Query::default().sorted("dueDate", SortDirection::Asc),
    )
    .into_iter()
    .filter(|a| a.status != AssignmentStatus::Completed)
    .take(UPCOMING_LIMIT)
    .collect();

    let latest_announcements = project(announcements, &Query::default())
        .into_iter()
        .take(LATEST_LIMIT)
        .collect();

    Overview {
        upcoming,
        latest_announcements,
        performance: summarize(subjects),
        counts: Counts {
            assignments: assignments.len(),
            pending_assignments: assignments
                .iter()
                .filter(|a| a.status == AssignmentStatus::Pending)
                .count(),
            announcements: announcements.len(),
            materials: material_count,
            subjects: subjects.len(),
        },
    }
}
