//! CRUD, form and delete-confirmation methods shared by every record page.
//! Page handlers strip their prefix (`assignments.`, ...) and pass the rest
//! here as `op`.

use serde::Deserialize;
use serde_json::json;

use crate::ipc::error::{err, ok, record_err};
use crate::ipc::params::{optional, record_id, required, whole};
use crate::ipc::types::Request;
use crate::records::{Entity, Query, RecordManager};

fn handle_list<E: Entity>(manager: &RecordManager<E>, req: &Request) -> serde_json::Value {
    let query: Query = match whole(req) {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    if let Err(message) = query.check::<E>() {
        return err(&req.id, "bad_params", message, None);
    }
    let rows = manager.visible(&query);
    let visible = rows.len();
    ok(
        &req.id,
        json!({
            "records": rows,
            "visible": visible,
            "total": manager.store.len(),
            "revision": manager.store.revision(),
        }),
    )
}

fn handle_get<E: Entity>(manager: &RecordManager<E>, req: &Request) -> serde_json::Value {
    let id = match record_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match manager.store.get(id) {
        Ok(record) => ok(&req.id, json!({ "record": record })),
        Err(e) => record_err(&req.id, &e),
    }
}

fn handle_create<E: Entity>(manager: &mut RecordManager<E>, req: &Request) -> serde_json::Value {
    let draft: E::Draft = match required(req, "fields") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match manager.store.create(&draft) {
        Ok(record) => ok(
            &req.id,
            json!({
                "record": record,
                "notice": format!("{} added successfully", E::LABEL),
            }),
        ),
        Err(e) => record_err(&req.id, &e),
    }
}

fn handle_update<E: Entity>(manager: &mut RecordManager<E>, req: &Request) -> serde_json::Value {
    let id = match record_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let draft: E::Draft = match required(req, "fields") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match manager.store.update(id, &draft) {
        Ok(record) => ok(
            &req.id,
            json!({
                "record": record,
                "notice": format!("{} updated successfully", E::LABEL),
            }),
        ),
        Err(e) => record_err(&req.id, &e),
    }
}

fn handle_delete<E: Entity>(manager: &mut RecordManager<E>, req: &Request) -> serde_json::Value {
    let id = match record_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match manager.store.delete(id) {
        Ok(removed) => ok(
            &req.id,
            json!({
                "id": removed.id(),
                "notice": RecordManager::<E>::deleted_notice(),
            }),
        ),
        Err(e) => record_err(&req.id, &e),
    }
}

fn form_state<E: Entity>(manager: &RecordManager<E>, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "form": &manager.form }))
}

fn handle_form_open_create<E: Entity>(
    manager: &mut RecordManager<E>,
    req: &Request,
) -> serde_json::Value {
    manager.form.open_create();
    form_state(manager, req)
}

fn handle_form_open_edit<E: Entity>(
    manager: &mut RecordManager<E>,
    req: &Request,
) -> serde_json::Value {
    let id = match record_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Err(e) = manager.open_edit(id) {
        return record_err(&req.id, &e);
    }
    form_state(manager, req)
}

#[derive(Deserialize)]
#[serde(bound = "D: serde::de::DeserializeOwned")]
struct ChangeParams<D> {
    draft: D,
    #[serde(default)]
    field: Option<String>,
}

fn handle_form_change<E: Entity>(
    manager: &mut RecordManager<E>,
    req: &Request,
) -> serde_json::Value {
    let params: ChangeParams<E::Draft> = match whole(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Err(e) = manager.form.change(params.draft, params.field.as_deref()) {
        return record_err(&req.id, &e);
    }
    form_state(manager, req)
}

fn handle_form_submit<E: Entity>(
    manager: &mut RecordManager<E>,
    req: &Request,
) -> serde_json::Value {
    let draft: Option<E::Draft> = match optional(req, "draft") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match manager.form.submit(&mut manager.store, draft) {
        Ok(done) => ok(
            &req.id,
            json!({
                "record": done.record(),
                "notice": done.notice(),
                "form": &manager.form,
            }),
        ),
        Err(e) => record_err(&req.id, &e),
    }
}

fn handle_form_cancel<E: Entity>(
    manager: &mut RecordManager<E>,
    req: &Request,
) -> serde_json::Value {
    manager.form.cancel();
    form_state(manager, req)
}

fn confirm_state<E: Entity>(manager: &RecordManager<E>, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "confirm": &manager.confirm }))
}

fn handle_confirm_open<E: Entity>(
    manager: &mut RecordManager<E>,
    req: &Request,
) -> serde_json::Value {
    let id = match record_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Err(e) = manager.request_delete(id) {
        return record_err(&req.id, &e);
    }
    confirm_state(manager, req)
}

fn handle_confirm_confirm<E: Entity>(
    manager: &mut RecordManager<E>,
    req: &Request,
) -> serde_json::Value {
    match manager.confirm_delete() {
        Ok(removed) => ok(
            &req.id,
            json!({
                "id": removed.id(),
                "notice": RecordManager::<E>::deleted_notice(),
                "confirm": &manager.confirm,
            }),
        ),
        Err(e) => record_err(&req.id, &e),
    }
}

fn handle_confirm_dismiss<E: Entity>(
    manager: &mut RecordManager<E>,
    req: &Request,
) -> serde_json::Value {
    manager.confirm.dismiss();
    confirm_state(manager, req)
}

pub fn try_handle<E: Entity>(
    manager: &mut RecordManager<E>,
    req: &Request,
    op: &str,
) -> Option<serde_json::Value> {
    match op {
        "list" => Some(handle_list(manager, req)),
        "get" => Some(handle_get(manager, req)),
        "create" => Some(handle_create(manager, req)),
        "update" => Some(handle_update(manager, req)),
        "delete" => Some(handle_delete(manager, req)),
        "form.openCreate" => Some(handle_form_open_create(manager, req)),
        "form.openEdit" => Some(handle_form_open_edit(manager, req)),
        "form.change" => Some(handle_form_change(manager, req)),
        "form.submit" => Some(handle_form_submit(manager, req)),
        "form.cancel" => Some(handle_form_cancel(manager, req)),
        "form.state" => Some(form_state(manager, req)),
        "confirm.open" => Some(handle_confirm_open(manager, req)),
        "confirm.confirm" => Some(handle_confirm_confirm(manager, req)),
        "confirm.dismiss" => Some(handle_confirm_dismiss(manager, req)),
        "confirm.state" => Some(confirm_state(manager, req)),
        _ => None,
    }
}
