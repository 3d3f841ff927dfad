use crate::router::route;
use crate::tests::utils::{day, fixture_state, get, read_body};
use serde_json::Value;

#[test]
fn record_json() {
    let state = fixture_state();
    let resp = route(&get("/api/record?codlocal=45678"), &state, day(2026, 4, 15)).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let json: Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(json["codlocal"], "045678");
    assert_eq!(json["today"], "2026-04-15");
    assert_eq!(json["amounts"]["progress_percent"], 100.0);
    assert_eq!(json["responsible"]["has_account"], Value::Null);
    assert_eq!(json["responsible"]["registration_alert"]["days_remaining"], 7);
    assert_eq!(json["responsible"]["registration_alert"]["urgency"], "critical");
    assert_eq!(json["fam"]["status"]["kind"], "unregistered");
    assert_eq!(json["fam"]["deadlines"][0]["date"], "2026-04-29");
    assert_eq!(json["fam"]["deadlines"][0]["urgency"], "warning");
    assert_eq!(json["pca"]["status"]["kind"], "verified");
    assert_eq!(json["pca"]["deadlines"].as_array().map(Vec::len), Some(0));
}

#[test]
fn other_status_keeps_text() {
    let state = fixture_state();
    let resp = route(&get("/api/record?codlocal=001234"), &state, day(2026, 4, 15)).unwrap();
    let json: Value = serde_json::from_str(&read_body(resp)).unwrap();

    assert_eq!(json["dg"]["status"]["kind"], "other");
    assert_eq!(json["dg"]["status"]["text"], "Pendiente");
    assert_eq!(json["dg"]["verified_at"]["kind"], "unparsed");
    assert_eq!(json["fam"]["first_sent"]["value"], "2026-04-02");
}

#[test]
fn health_check() {
    let state = fixture_state();
    let resp = route(&get("/healthz"), &state, day(2026, 4, 15)).unwrap();
    assert_eq!(read_body(resp), "ok");
}
