use serde_json::json;

use super::{records, require_session};
use crate::entities::assignment;
use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};

fn handle_subjects(state: &mut AppState, req: &Request) -> serde_json::Value {
    let subjects = assignment::subjects(state.assignments.store.list());
    ok(&req.id, json!({ "subjects": subjects }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let op = req.method.strip_prefix("assignments.")?;
    if let Some(resp) = require_session(state, req) {
        return Some(resp);
    }
    match op {
        "subjects" => Some(handle_subjects(state, req)),
        _ => records::try_handle(&mut state.assignments, req, op),
    }
}
