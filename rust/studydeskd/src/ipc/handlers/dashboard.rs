use super::require_session;
use crate::dashboard::overview;
use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};

fn handle_overview(state: &mut AppState, req: &Request) -> serde_json::Value {
    let view = overview(
        state.assignments.store.list(),
        state.announcements.store.list(),
        state.performance.store.list(),
        state.materials.store.len(),
    );
    ok(&req.id, serde_json::json!({ "overview": view, "user": state.session.user() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.overview" => Some(
            require_session(state, req).unwrap_or_else(|| handle_overview(state, req)),
        ),
        _ => None,
    }
}
