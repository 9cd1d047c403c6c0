use serde_json::json;

use crate::ipc::error::{auth_err, ok};
use crate::ipc::params::whole;
use crate::ipc::types::{AppState, Request};
use crate::prefs::REMEMBERED_EMAIL;
use crate::session::LoginForm;

/// Pre-fill for the login screen.
fn handle_restore(state: &mut AppState, req: &Request) -> serde_json::Value {
    let email = state.prefs.get(REMEMBERED_EMAIL);
    ok(
        &req.id,
        json!({
            "email": email.unwrap_or_default(),
            "rememberMe": email.is_some(),
        }),
    )
}

fn handle_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    let form = match whole::<LoginForm>(req) {
        Ok(v) => v.normalized(),
        Err(resp) => return resp,
    };
    let user = match state.session.login(&form) {
        Ok(user) => user.clone(),
        Err(e) => return auth_err(&req.id, &e),
    };
    state.close_overlays();

    let remembered = if form.remember_me {
        state.prefs.set(REMEMBERED_EMAIL, &form.email)
    } else {
        state.prefs.remove(REMEMBERED_EMAIL)
    };
    if let Err(e) = remembered {
        tracing::warn!(error = %format!("{e:#}"), "failed to store remembered email");
    }

    ok(
        &req.id,
        json!({
            "user": user,
            "token": state.session.token().map(|t| t.to_string()),
        }),
    )
}

fn handle_logout(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.session.logout();
    state.close_overlays();
    ok(&req.id, json!({ "isAuthenticated": false }))
}

fn handle_current(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "user": state.session.user(),
            "isAuthenticated": state.session.is_authenticated(),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "session.restore" => Some(handle_restore(state, req)),
        "session.login" => Some(handle_login(state, req)),
        "session.logout" => Some(handle_logout(state, req)),
        "session.current" => Some(handle_current(state, req)),
        _ => None,
    }
}
