use anyhow::Result;
use fcm_request::{
    models::{
        data::Data,
        notification::Notification,
        options::{Options, Priority},
    },
    request::Request,
};
use serde_json::{Value, json};

/// Test: A single string target lands in `to` with no other keys
#[test]
fn test_string_target_builds_to_only() -> Result<()> {
    let body = Request::new("deviceToken123").build_body();

    assert_eq!(Value::Object(body), json!({ "to": "deviceToken123" }));

    Ok(())
}

/// Test: A token list lands in `registration_ids` and `to` stays absent
#[test]
fn test_list_target_builds_registration_ids() -> Result<()> {
    let body = Request::new(vec!["tok1", "tok2"]).build_body();

    assert_eq!(
        Value::Object(body),
        json!({ "registration_ids": ["tok1", "tok2"] })
    );

    Ok(())
}

/// Test: Notification content rides alongside the registration id list
#[test]
fn test_list_target_with_notification() -> Result<()> {
    let body = Request::new(vec!["tok1", "tok2"])
        .with_notification(Notification::new("Hi"))
        .build_body();

    assert_eq!(
        Value::Object(body),
        json!({
            "registration_ids": ["tok1", "tok2"],
            "notification": { "title": "Hi" }
        })
    );

    Ok(())
}

/// Test: Building the body twice yields identical output
#[test]
fn test_build_body_is_idempotent() -> Result<()> {
    let request = Request::new("deviceToken123")
        .with_notification(Notification::new("Hello").with_body("World"))
        .with_options(Options::new().with_priority(Priority::High));

    let first = request.build_body();
    let second = request.build_body();

    assert_eq!(first, second, "build_body must be a pure derivation");

    Ok(())
}

/// Test: An empty data payload is indistinguishable from no data at all
#[test]
fn test_empty_data_payload_is_dropped() -> Result<()> {
    let body = Request::new("deviceToken123")
        .with_data(Data::new())
        .build_body();

    assert!(
        !body.contains_key("data"),
        "empty data must be stripped from the body"
    );

    Ok(())
}

/// Test: Options carrying only falsy values are stripped key by key
#[test]
fn test_falsy_option_values_are_dropped() -> Result<()> {
    let options = Options::new()
        .with_content_available(false)
        .with_dry_run(false)
        .with_time_to_live(0)?;

    let body = Request::new("deviceToken123")
        .with_options(options)
        .build_body();

    assert_eq!(
        Value::Object(body),
        json!({ "to": "deviceToken123" }),
        "false and zero option values must be treated as absent"
    );

    Ok(())
}

/// Test: Data-only messages carry just the data block
#[test]
fn test_data_only_message() -> Result<()> {
    let body = Request::new("deviceToken123")
        .with_data(Data::from_iter([("session", "expired")]))
        .build_body();

    assert_eq!(
        Value::Object(body),
        json!({
            "to": "deviceToken123",
            "data": { "session": "expired" }
        })
    );

    Ok(())
}

/// Test: An empty string target produces an empty body
#[test]
fn test_empty_string_target_produces_empty_body() -> Result<()> {
    let body = Request::new("").build_body();

    assert!(body.is_empty(), "empty `to` must not be emitted");

    Ok(())
}

/// Test: Every supplied component shows up under its reserved key
#[test]
fn test_full_body_assembly() -> Result<()> {
    let notification = Notification::new("Maintenance window")
        .with_body("Tonight at 02:00 UTC")
        .with_sound("default")
        .with_badge(3)
        .with_click_action("OPEN_STATUS_PAGE");

    let mut data = Data::new();
    data.insert("incident_id", "inc_42");
    data.insert("severity", "minor");

    let options = Options::new()
        .with_collapse_key("status")
        .with_priority(Priority::High)
        .with_time_to_live(3600)?;

    let body = Request::new("deviceToken123")
        .with_notification(notification)
        .with_data(data)
        .with_options(options)
        .build_body();

    assert_eq!(
        Value::Object(body),
        json!({
            "to": "deviceToken123",
            "notification": {
                "title": "Maintenance window",
                "body": "Tonight at 02:00 UTC",
                "sound": "default",
                "badge": 3,
                "click_action": "OPEN_STATUS_PAGE"
            },
            "data": {
                "incident_id": "inc_42",
                "severity": "minor"
            },
            "collapse_key": "status",
            "priority": "high",
            "time_to_live": 3600
        })
    );

    Ok(())
}
