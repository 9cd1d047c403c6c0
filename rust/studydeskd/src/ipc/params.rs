use serde::de::DeserializeOwned;

use super::error::err;
use super::types::Request;
use crate::records::RecordId;

/// Errors are already wrapped in a response envelope so handlers can return
/// them as-is.
pub type ParamResult<T> = Result<T, serde_json::Value>;

pub fn record_id(req: &Request) -> ParamResult<RecordId> {
    match req.params.get("id") {
        Some(v) => v
            .as_u64()
            .ok_or_else(|| err(&req.id, "bad_params", "params.id must be a positive integer", None)),
        None => Err(err(&req.id, "bad_params", "missing params.id", None)),
    }
}

/// Required object parameter decoded into `T`.
pub fn required<T: DeserializeOwned>(req: &Request, key: &str) -> ParamResult<T> {
    let Some(v) = req.params.get(key) else {
        return Err(err(&req.id, "bad_params", format!("missing params.{key}"), None));
    };
    serde_json::from_value(v.clone())
        .map_err(|e| err(&req.id, "bad_params", format!("invalid params.{key}: {e}"), None))
}

/// Optional parameter; absent and null both decode to `None`.
pub fn optional<T: DeserializeOwned>(req: &Request, key: &str) -> ParamResult<Option<T>> {
    match req.params.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(v) => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|e| err(&req.id, "bad_params", format!("invalid params.{key}: {e}"), None)),
    }
}

/// The whole params object decoded into `T` (an empty object when absent).
pub fn whole<T: DeserializeOwned>(req: &Request) -> ParamResult<T> {
    let v = if req.params.is_null() {
        serde_json::json!({})
    } else {
        req.params.clone()
    };
    serde_json::from_value(v).map_err(|e| err(&req.id, "bad_params", format!("invalid params: {e}"), None))
}
