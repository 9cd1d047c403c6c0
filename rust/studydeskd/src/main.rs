mod config;
mod dashboard;
mod entities;
mod ipc;
mod prefs;
mod records;
mod session;
mod telemetry;

use std::io::{self, BufRead, Write};

use clap::Parser;

fn main() {
    let config = config::Config::parse();
    telemetry::init_tracing(&config.log_level);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        seeded = !config.no_seed,
        "studydeskd starting"
    );

    let mut state = ipc::AppState::new(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // No id to echo back.
                tracing::warn!(error = %e, "unparsable request line");
                let resp = serde_json::json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() },
                });
                let _ = writeln!(stdout, "{resp}");
                let _ = stdout.flush();
                continue;
            }
        };

        tracing::debug!(id = %req.id, method = %req.method, "request");
        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }

    tracing::info!("stdin closed, exiting");
}
