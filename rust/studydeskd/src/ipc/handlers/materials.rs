use serde_json::json;

use super::{records, require_session};
use crate::ipc::error::{ok, record_err};
use crate::ipc::params::record_id;
use crate::ipc::types::{AppState, Request};

fn handle_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = match record_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.materials.store.get(id) {
        Ok(material) => ok(&req.id, json!({ "view": material.view() })),
        Err(e) => record_err(&req.id, &e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let op = req.method.strip_prefix("materials.")?;
    if let Some(resp) = require_session(state, req) {
        return Some(resp);
    }
    match op {
        "open" => Some(handle_open(state, req)),
        _ => records::try_handle(&mut state.materials, req, op),
    }
}
