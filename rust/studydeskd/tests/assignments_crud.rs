mod test_support;

use serde_json::json;
use test_support::{login, request_err, request_ok, spawn_sidecar, titles};

#[test]
fn search_and_filters_narrow_the_visible_list() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = login(&mut stdin, &mut reader);

    let found = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "assignments.list",
        json!({ "searchTerm": "HISTORY" }),
    );
    assert_eq!(titles(&found), vec!["History Essay"]);
    assert_eq!(found["visible"], json!(1));
    assert_eq!(found["total"], json!(3));

    let pending = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "assignments.list",
        json!({ "filters": { "status": "pending", "subject": "all" } }),
    );
    assert_eq!(titles(&pending), vec!["Math Homework"]);

    let by_due = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "assignments.list",
        json!({ "sortKey": "dueDate", "sortDirection": "desc" }),
    );
    assert_eq!(
        titles(&by_due),
        vec!["Science Project", "Math Homework", "History Essay"]
    );

    let _ = request_err(
        &mut stdin,
        &mut reader,
        "4",
        "assignments.list",
        json!({ "sortKey": "colour" }),
        "bad_params",
    );

    let subjects = request_ok(&mut stdin, &mut reader, "5", "assignments.subjects", json!({}));
    assert_eq!(subjects["subjects"].as_array().map(|a| a.len()), Some(3));
}

#[test]
fn create_update_delete_through_direct_methods() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = login(&mut stdin, &mut reader);

    let created = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "assignments.create",
        json!({ "fields": {
            "title": "Physics Lab",
            "description": "Pendulum timing",
            "dueDate": "2023-12-01",
            "status": "pending",
            "subject": "Physics",
            "priority": "high"
        } }),
    );
    assert_eq!(created["record"]["id"], json!(4));
    assert_eq!(created["notice"], json!("Assignment added successfully"));

    let list = request_ok(&mut stdin, &mut reader, "2", "assignments.list", json!({}));
    assert_eq!(titles(&list).last().map(String::as_str), Some("Physics Lab"));

    let updated = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "assignments.update",
        json!({ "id": 4, "fields": {
            "title": "Physics Lab Report",
            "dueDate": "2023-12-02",
            "status": "completed",
            "subject": "Physics",
            "priority": "low"
        } }),
    );
    assert_eq!(updated["record"]["status"], json!("completed"));
    assert_eq!(updated["record"]["description"], json!(""));

    let _ = request_ok(&mut stdin, &mut reader, "4", "assignments.delete", json!({ "id": 4 }));
    let gone = request_err(
        &mut stdin,
        &mut reader,
        "5",
        "assignments.delete",
        json!({ "id": 4 }),
        "not_found",
    );
    assert_eq!(gone["details"]["dismissible"], json!(true));

    // Ids are never reused.
    let again = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "assignments.create",
        json!({ "fields": { "title": "Reading", "dueDate": "2023-12-05" } }),
    );
    assert_eq!(again["record"]["id"], json!(5));
}

#[test]
fn edit_form_and_confirmed_delete() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = login(&mut stdin, &mut reader);

    let opened = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "assignments.form.openEdit",
        json!({ "id": 2 }),
    );
    assert_eq!(opened["form"]["state"], json!("open"));
    assert_eq!(opened["form"]["draft"]["title"], json!("Science Project"));

    let mut draft = opened["form"]["draft"].clone();
    draft["title"] = json!("");
    let failed = request_err(
        &mut stdin,
        &mut reader,
        "2",
        "assignments.form.submit",
        json!({ "draft": draft }),
        "validation_failed",
    );
    assert_eq!(failed["details"]["fields"]["title"], json!("Title is required"));

    let still_open = request_ok(&mut stdin, &mut reader, "3", "assignments.form.state", json!({}));
    assert_eq!(still_open["form"]["state"], json!("open"));

    draft["title"] = json!("Energy Research");
    let changed = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "assignments.form.change",
        json!({ "draft": draft, "field": "title" }),
    );
    assert!(changed["form"]["errors"].get("title").is_none());

    let saved = request_ok(&mut stdin, &mut reader, "5", "assignments.form.submit", json!({}));
    assert_eq!(saved["record"]["title"], json!("Energy Research"));
    assert_eq!(saved["form"]["state"], json!("closed"));

    let confirm = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "assignments.confirm.open",
        json!({ "id": 1 }),
    );
    assert_eq!(confirm["confirm"]["state"], json!("confirming"));
    let dismissed = request_ok(&mut stdin, &mut reader, "7", "assignments.confirm.dismiss", json!({}));
    assert_eq!(dismissed["confirm"]["state"], json!("closed"));
    let list = request_ok(&mut stdin, &mut reader, "8", "assignments.list", json!({}));
    assert_eq!(list["total"], json!(3));

    let _ = request_ok(&mut stdin, &mut reader, "9", "assignments.confirm.open", json!({ "id": 1 }));
    let deleted = request_ok(&mut stdin, &mut reader, "10", "assignments.confirm.confirm", json!({}));
    assert_eq!(deleted["id"], json!(1));
    assert_eq!(deleted["notice"], json!("Assignment deleted successfully"));
    let list = request_ok(&mut stdin, &mut reader, "11", "assignments.list", json!({}));
    assert_eq!(list["total"], json!(2));
}
