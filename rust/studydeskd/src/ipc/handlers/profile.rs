use serde::Deserialize;
use serde_json::json;

use super::require_session;
use crate::entities::profile::ProfileDraft;
use crate::ipc::error::{ok, profile_err};
use crate::ipc::params::{optional, whole};
use crate::ipc::types::{AppState, Request};

fn editor_state(state: &AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "form": &state.profile }))
}

fn handle_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "profile": state.session.user() }))
}

fn handle_open_edit(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(e) = state.profile.open_edit(&state.session) {
        return profile_err(&req.id, &e);
    }
    editor_state(state, req)
}

#[derive(Deserialize)]
struct ChangeParams {
    draft: ProfileDraft,
    #[serde(default)]
    field: Option<String>,
}

fn handle_change(state: &mut AppState, req: &Request) -> serde_json::Value {
    let params: ChangeParams = match whole(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Err(e) = state.profile.change(params.draft, params.field.as_deref()) {
        return profile_err(&req.id, &e);
    }
    editor_state(state, req)
}

fn handle_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let draft: Option<ProfileDraft> = match optional(req, "draft") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.profile.submit(&mut state.session, draft) {
        Ok(profile) => ok(
            &req.id,
            json!({
                "profile": profile,
                "notice": "Profile updated successfully",
                "form": &state.profile,
            }),
        ),
        Err(e) => profile_err(&req.id, &e),
    }
}

fn handle_cancel(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.profile.cancel();
    editor_state(state, req)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let op = req.method.strip_prefix("profile.")?;
    if let Some(resp) = require_session(state, req) {
        return Some(resp);
    }
    match op {
        "get" => Some(handle_get(state, req)),
        "form.openEdit" => Some(handle_open_edit(state, req)),
        "form.change" => Some(handle_change(state, req)),
        "form.submit" => Some(handle_submit(state, req)),
        "form.cancel" => Some(handle_cancel(state, req)),
        "form.state" => Some(editor_state(state, req)),
        _ => None,
    }
}
