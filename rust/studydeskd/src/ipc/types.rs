use serde::Deserialize;

use crate::config::Config;
use crate::entities::announcement::{self, Announcement};
use crate::entities::assignment::{self, Assignment};
use crate::entities::material::{self, Material};
use crate::entities::performance::{self, Subject};
use crate::entities::profile::ProfileEditor;
use crate::prefs::Preferences;
use crate::records::{Entity, RecordManager, RecordStore};
use crate::session::Session;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Everything the sidecar holds. Each page owns its manager exclusively.
pub struct AppState {
    pub session: Session,
    pub prefs: Preferences,
    pub assignments: RecordManager<Assignment>,
    pub announcements: RecordManager<Announcement>,
    pub materials: RecordManager<Material>,
    pub performance: RecordManager<Subject>,
    pub profile: ProfileEditor,
}

fn manager<E: Entity>(seed: bool, records: fn() -> Vec<E>) -> RecordManager<E> {
    let store = if seed {
        RecordStore::seeded(records())
    } else {
        RecordStore::new()
    };
    RecordManager::new(store)
}

impl AppState {
    /// Drafts and pending deletes belong to whoever opened them; called
    /// whenever the signed-in user changes.
    pub fn close_overlays(&mut self) {
        self.assignments.close_overlays();
        self.announcements.close_overlays();
        self.materials.close_overlays();
        self.performance.close_overlays();
        self.profile.cancel();
    }

    pub fn new(config: &Config) -> Self {
        let prefs = match &config.prefs_path {
            Some(path) => match Preferences::open(path) {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(error = %format!("{e:#}"), "preferences unavailable, keeping them in memory");
                    Preferences::in_memory()
                }
            },
            None => Preferences::in_memory(),
        };
        let seed = !config.no_seed;

        Self {
            session: Session::with_mock_users(config.login_delay()),
            prefs,
            assignments: manager(seed, assignment::seed),
            announcements: manager(seed, announcement::seed),
            materials: manager(seed, material::seed),
            performance: manager(seed, performance::seed),
            profile: ProfileEditor::default(),
        }
    }
}
