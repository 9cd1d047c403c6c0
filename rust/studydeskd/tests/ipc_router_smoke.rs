mod test_support;

use serde_json::json;
use std::io::{BufRead, Write};
use test_support::{login, request, request_err, request_ok, spawn_sidecar};

#[test]
fn router_dispatch_smoke_covers_handler_families() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let health = request_ok(&mut stdin, &mut reader, "1", "health", json!({}));
    assert_eq!(health["authenticated"], json!(false));
    assert!(health["version"].as_str().is_some());

    let _ = request_ok(&mut stdin, &mut reader, "2", "session.restore", json!({}));
    let _ = login(&mut stdin, &mut reader);

    let methods = [
        ("assignments.list", json!({})),
        ("assignments.subjects", json!({})),
        ("assignments.form.state", json!({})),
        ("assignments.confirm.state", json!({})),
        ("announcements.list", json!({})),
        ("materials.list", json!({})),
        ("materials.open", json!({ "id": 1 })),
        ("performance.list", json!({})),
        ("performance.summary", json!({})),
        ("profile.get", json!({})),
        ("profile.form.state", json!({})),
        ("dashboard.overview", json!({})),
        ("session.current", json!({})),
    ];
    for (i, (method, params)) in methods.iter().enumerate() {
        let id = format!("m{}", i);
        let resp = request(&mut stdin, &mut reader, &id, method, params.clone());
        assert_eq!(resp["ok"], json!(true), "{} failed: {}", method, resp);
    }

    let _ = request_err(
        &mut stdin,
        &mut reader,
        "x",
        "grades.explode",
        json!({}),
        "not_implemented",
    );
}

#[test]
fn pages_require_a_session() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    for (i, method) in [
        "assignments.list",
        "announcements.create",
        "materials.form.openCreate",
        "performance.summary",
        "profile.get",
        "dashboard.overview",
    ]
    .iter()
    .enumerate()
    {
        let _ = request_err(
            &mut stdin,
            &mut reader,
            &format!("a{}", i),
            method,
            json!({}),
            "not_authenticated",
        );
    }

    let _ = login(&mut stdin, &mut reader);
    let _ = request_ok(&mut stdin, &mut reader, "b1", "assignments.list", json!({}));
    let _ = request_ok(&mut stdin, &mut reader, "b2", "session.logout", json!({}));
    let _ = request_err(
        &mut stdin,
        &mut reader,
        "b3",
        "assignments.list",
        json!({}),
        "not_authenticated",
    );
}

#[test]
fn unparsable_line_gets_bad_json_and_loop_continues() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    writeln!(stdin, "{{not json").expect("write garbage");
    stdin.flush().expect("flush");
    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value["ok"], json!(false));
    assert_eq!(value["error"]["code"], json!("bad_json"));

    let _ = request_ok(&mut stdin, &mut reader, "after", "health", json!({}));
}
