pub mod announcements;
pub mod assignments;
pub mod core;
pub mod dashboard;
pub mod materials;
pub mod performance;
pub mod profile;
pub mod records;
pub mod session;

use crate::ipc::error::auth_err;
use crate::ipc::types::{AppState, Request};
use crate::session::AuthError;

/// Everything behind the login screen answers `not_authenticated` until a
/// session exists.
pub fn require_session(state: &AppState, req: &Request) -> Option<serde_json::Value> {
    if state.session.is_authenticated() {
        None
    } else {
        Some(auth_err(&req.id, &AuthError::NotAuthenticated))
    }
}
