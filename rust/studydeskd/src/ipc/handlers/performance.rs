use serde_json::json;

use super::{records, require_session};
use crate::entities::performance::summarize;
use crate::ipc::error::{err, ok, record_err};
use crate::ipc::params::record_id;
use crate::ipc::types::{AppState, Request};
use crate::records::Entity;

fn handle_summary(state: &mut AppState, req: &Request) -> serde_json::Value {
    let summary = summarize(state.performance.store.list());
    ok(&req.id, json!({ "summary": summary }))
}

/// Inline row editor: replaces one subject's grade. Out-of-range input is
/// rejected with a field error, never clamped.
fn handle_set_grade(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = match record_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let grade = match req.params.get("grade") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => return err(&req.id, "bad_params", "missing params.grade", None),
    };

    let mut draft = match state.performance.store.get(id) {
        Ok(subject) => subject.to_draft(),
        Err(e) => return record_err(&req.id, &e),
    };
    draft.grade = grade;

    match state.performance.store.update(id, &draft) {
        Ok(subject) => ok(
            &req.id,
            json!({
                "record": subject,
                "summary": summarize(state.performance.store.list()),
            }),
        ),
        Err(e) => record_err(&req.id, &e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let op = req.method.strip_prefix("performance.")?;
    if let Some(resp) = require_session(state, req) {
        return Some(resp);
    }
    match op {
        "summary" => Some(handle_summary(state, req)),
        "setGrade" => Some(handle_set_grade(state, req)),
        _ => records::try_handle(&mut state.performance, req, op),
    }
}
