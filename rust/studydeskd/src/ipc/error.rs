use serde_json::json;

use crate::entities::profile::ProfileError;
use crate::records::RecordError;
use crate::session::AuthError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Validation failures carry the field mapping; a vanished record is a
/// dismissible notice, not a hard failure.
pub fn record_err(id: &str, e: &RecordError) -> serde_json::Value {
    match e {
        RecordError::Validation(fields) => err(
            id,
            e.code(),
            e.to_string(),
            Some(json!({ "fields": fields })),
        ),
        RecordError::NotFound { kind, id: record_id } => err(
            id,
            e.code(),
            e.to_string(),
            Some(json!({ "kind": kind, "recordId": record_id, "dismissible": true })),
        ),
        RecordError::FormClosed { .. } | RecordError::NothingToConfirm { .. } => {
            err(id, e.code(), e.to_string(), None)
        }
    }
}

pub fn auth_err(id: &str, e: &AuthError) -> serde_json::Value {
    match e {
        AuthError::Validation(fields) => err(
            id,
            e.code(),
            e.to_string(),
            Some(json!({ "fields": fields })),
        ),
        AuthError::InvalidCredentials | AuthError::NotAuthenticated => {
            err(id, e.code(), e.to_string(), None)
        }
    }
}

pub fn profile_err(id: &str, e: &ProfileError) -> serde_json::Value {
    match e {
        ProfileError::Validation(fields) => err(
            id,
            e.code(),
            e.to_string(),
            Some(json!({ "fields": fields })),
        ),
        ProfileError::Auth(inner) => auth_err(id, inner),
        ProfileError::FormClosed => err(id, e.code(), e.to_string(), None),
    }
}
