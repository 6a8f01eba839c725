//! Integration tests for the repulink CLI
//!
//! These run the real binary against a small stub backend served by
//! tiny_http, with HOME pointed at a temp dir so no user config leaks in.

use std::io::{Cursor, Read};
use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use tiny_http::{Header, Method, Request, Response, Server};

/// Helper function to create a repulink command with an isolated home
fn repulink(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("repulink"));
    cmd.env("HOME", home.path())
        .env_remove("REPULINK_API_URL")
        .env_remove("REPULINK_TOKEN")
        .env_remove("REPULINK_USER_ID")
        .env_remove("RUST_LOG");
    cmd
}

/// Nothing listens here; commands that must not touch the network use it
const DEAD_URL: &str = "http://127.0.0.1:1";

// =============================================================================
// STUB BACKEND
// =============================================================================

/// One request as the stub saw it
#[derive(Debug, Clone)]
struct Seen {
    method: String,
    url: String,
    authorization: Option<String>,
    body: String,
}

struct StubBackend {
    url: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl StubBackend {
    fn start() -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = seen.clone();
        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let seen = Seen {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    authorization: request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Authorization"))
                        .map(|h| h.value.to_string()),
                    body,
                };
                let response = route(&request, &seen);
                log.lock().unwrap().push(seen);
                let _ = request.respond(response);
            }
        });

        Self {
            url: format!("http://127.0.0.1:{port}"),
            seen,
        }
    }

    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

fn json_response(status: u16, body: &Value) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(serde_json::to_vec(body).unwrap())
        .with_status_code(status)
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
}

fn interaction(status: &str) -> Value {
    json!({
        "id": "i1",
        "initiator_id": "u2",
        "target_id": "u1",
        "message": "want to pair?",
        "status": status,
        "created_at": "2025-06-01T12:00:00.000000"
    })
}

fn route(request: &Request, seen: &Seen) -> Response<Cursor<Vec<u8>>> {
    if seen.authorization.as_deref() != Some("Bearer tok") {
        return json_response(401, &json!({"detail": "Not authenticated"}));
    }
    let path = seen.url.split('?').next().unwrap_or_default();

    match (request.method(), path) {
        (Method::Get, "/api/v1/users/me") => json_response(
            200,
            &json!({"id": "u1", "email": "alice@example.com", "full_name": "Alice"}),
        ),
        (Method::Get, "/api/v1/users/search") => json_response(
            200,
            &json!({
                "data": [{"id": "u1", "email": "alice@example.com", "full_name": "Alice"}],
                "count": 1
            }),
        ),
        (Method::Post, "/api/v1/endorsements/") => {
            let body: Value = serde_json::from_str(&seen.body).unwrap_or_default();
            let confidence = body["confidence"].as_f64().unwrap_or(-1.0);
            if !(0.0..=1.0).contains(&confidence) {
                return json_response(400, &json!({"detail": "confidence must be between 0 and 1"}));
            }
            json_response(
                200,
                &json!({
                    "id": "e1",
                    "endorser_id": "u1",
                    "endorsed_id": body["endorsed_id"],
                    "confidence": confidence,
                    "created_at": "2025-06-01T12:00:00",
                    "updated_at": "2025-06-01T12:00:00",
                    "user_email": "bob@example.com",
                    "user_full_name": "Bob"
                }),
            )
        },
        (Method::Get, "/api/v1/interactions/users/u1") => {
            json_response(200, &json!([interaction("pending")]))
        },
        (Method::Post, "/api/v1/interactions/i1/respond") => {
            json_response(200, &json!({"message": "Interaction accepted"}))
        },
        _ => json_response(404, &json!({"detail": "Not Found"})),
    }
}

// =============================================================================
// OFFLINE COMMANDS
// =============================================================================

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    repulink(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("endorse"))
        .stdout(predicate::str::contains("interactions"))
        .stdout(predicate::str::contains("rate"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    repulink(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_prints_hint() {
    let home = TempDir::new().unwrap();
    repulink(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("repulink --help"));
}

#[test]
fn test_blank_search_needs_no_backend() {
    let home = TempDir::new().unwrap();
    repulink(&home)
        .args(["search", "   ", "--json", "--api-url", DEAD_URL])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn test_rating_out_of_range_is_rejected() {
    let home = TempDir::new().unwrap();
    repulink(&home)
        .args(["rate", "i1", "9", "--api-url", DEAD_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("9"));
}

#[test]
fn test_respond_needs_a_decision() {
    let home = TempDir::new().unwrap();
    repulink(&home)
        .args(["respond", "i1", "--api-url", DEAD_URL])
        .assert()
        .failure();

    repulink(&home)
        .args(["respond", "i1", "--accept", "--deny", "--api-url", DEAD_URL])
        .assert()
        .failure();
}

#[test]
fn test_config_set_and_show() {
    let home = TempDir::new().unwrap();

    repulink(&home)
        .args(["config", "set-url", "https://repulink.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API URL saved"));

    repulink(&home)
        .args(["config", "set-token", "very-secret"])
        .assert()
        .success();

    assert!(home.path().join(".repulink").join("config.toml").exists());

    repulink(&home)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://repulink.example.com"))
        .stdout(predicate::str::contains("<set>"))
        .stdout(predicate::str::contains("very-secret").not());
}

#[test]
fn test_env_overrides_config_file() {
    let home = TempDir::new().unwrap();
    repulink(&home)
        .args(["config", "set-url", "https://file.example.com"])
        .assert()
        .success();

    repulink(&home)
        .env("REPULINK_API_URL", "https://env.example.com")
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://env.example.com"));
}

#[test]
fn test_unreachable_backend_fails() {
    let home = TempDir::new().unwrap();
    repulink(&home)
        .args(["endorsements", "--token", "tok", "--api-url", DEAD_URL])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());
}

// =============================================================================
// AGAINST THE STUB BACKEND
// =============================================================================

#[test]
fn test_search_sends_token_and_query() {
    let backend = StubBackend::start();
    let home = TempDir::new().unwrap();

    repulink(&home)
        .args(["search", "ali ce", "--json", "--token", "tok", "--api-url", &backend.url])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice@example.com"))
        .stdout(predicate::str::contains("\"count\": 1"));

    let seen = backend.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].url, "/api/v1/users/search?query=ali%20ce");
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer tok"));
}

#[test]
fn test_missing_token_surfaces_detail() {
    let backend = StubBackend::start();
    let home = TempDir::new().unwrap();

    repulink(&home)
        .args(["endorsements", "--api-url", &backend.url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not authenticated"));
}

#[test]
fn test_endorse() {
    let backend = StubBackend::start();
    let home = TempDir::new().unwrap();

    repulink(&home)
        .args(["endorse", "u2", "-c", "0.75", "--json", "--token", "tok", "--api-url", &backend.url])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("Endorsed u2 with confidence 0.75"));

    let seen = backend.seen();
    let body: Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(body, json!({"endorsed_id": "u2", "confidence": 0.75}));
}

#[test]
fn test_endorse_failure_shows_backend_detail() {
    let backend = StubBackend::start();
    let home = TempDir::new().unwrap();

    repulink(&home)
        .args(["endorse", "u2", "-c", "1.5", "--token", "tok", "--api-url", &backend.url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confidence must be between 0 and 1"));
}

#[test]
fn test_failed_mutation_is_reported_once() {
    let backend = StubBackend::start();
    let home = TempDir::new().unwrap();

    let output = repulink(&home)
        .args(["endorse", "u2", "-c", "1.5", "--token", "tok", "--api-url", &backend.url])
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("confidence must be between 0 and 1").count(), 1);
}

#[test]
fn test_interactions_resolve_viewer_from_backend() {
    let backend = StubBackend::start();
    let home = TempDir::new().unwrap();

    repulink(&home)
        .args(["interactions", "--json", "--token", "tok", "--api-url", &backend.url])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"counterpart_id\": \"u2\""))
        .stdout(predicate::str::contains("\"can_respond\": true"));

    let urls: Vec<String> = backend.seen().into_iter().map(|s| s.url).collect();
    assert_eq!(urls, ["/api/v1/users/me", "/api/v1/interactions/users/u1"]);
}

#[test]
fn test_respond_accept() {
    let backend = StubBackend::start();
    let home = TempDir::new().unwrap();

    repulink(&home)
        .args(["respond", "i1", "--accept", "--token", "tok", "--api-url", &backend.url])
        .env("REPULINK_USER_ID", "u1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interaction accepted"));

    let seen = backend.seen();
    let respond = seen.iter().find(|s| s.method == "POST").unwrap();
    assert_eq!(respond.url, "/api/v1/interactions/i1/respond?accept=true");
    assert!(respond.body.is_empty());
}

#[test]
fn test_rate_pending_interaction_is_refused_locally() {
    let backend = StubBackend::start();
    let home = TempDir::new().unwrap();

    repulink(&home)
        .args(["rate", "i1", "-3", "--token", "tok", "--api-url", &backend.url])
        .env("REPULINK_USER_ID", "u1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only accepted interactions can be rated"));

    assert!(backend.seen().iter().all(|s| s.method == "GET"));
}

#[test]
fn test_unknown_interaction_is_refused_locally() {
    let backend = StubBackend::start();
    let home = TempDir::new().unwrap();

    repulink(&home)
        .args(["rate", "i9", "4", "--token", "tok", "--api-url", &backend.url])
        .env("REPULINK_USER_ID", "u1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Interaction 'i9' not found"));

    repulink(&home)
        .args(["respond", "i9", "--deny", "--token", "tok", "--api-url", &backend.url])
        .env("REPULINK_USER_ID", "u1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Interaction 'i9' not found"));

    assert!(backend.seen().iter().all(|s| s.method == "GET"));
}
