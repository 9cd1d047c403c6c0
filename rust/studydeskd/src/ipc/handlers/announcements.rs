use super::{records, require_session};
use crate::ipc::types::{AppState, Request};

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let op = req.method.strip_prefix("announcements.")?;
    if let Some(resp) = require_session(state, req) {
        return Some(resp);
    }
    records::try_handle(&mut state.announcements, req, op)
}
