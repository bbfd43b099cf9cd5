use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use serde_json::json;

use super::helpers::{BASE_URL, blockout_json, post_json, test_service, test_service_with};

const CHECK: &str = "/api/availability/check";
const SLOTS: &str = "/api/availability/slots";
const OCCURRENCES: &str = "/api/availability/occurrences";

fn tuesday_weekly(pilot_id: uuid::Uuid) -> serde_json::Value {
    blockout_json(
        pilot_id,
        "weekly",
        "2024-01-02T09:00:00Z",
        "2024-01-02T17:00:00Z",
        None,
    )
}

#[tokio::test]
async fn healthcheck_responds() {
    let mut res = TestClient::get(format!("{BASE_URL}/api/app/healthcheck"))
        .send(test_service())
        .await;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert_eq!(res.take_string().await.unwrap(), "OK");
}

#[test_log::test(tokio::test)]
async fn check_weekly_scenario() {
    let blockouts = json!([tuesday_weekly(uuid::Uuid::now_v7())]);

    for (instant, available) in [
        ("2024-01-09T12:00:00Z", false),
        ("2024-01-09T18:00:00Z", true),
        ("2024-01-10T12:00:00Z", true),
    ] {
        let (status, body) = post_json(
            test_service(),
            CHECK,
            &json!({ "blockouts": blockouts, "instant": instant }),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{instant}");
        assert_eq!(body["available"], available, "{instant}");
    }
}

#[test_log::test(tokio::test)]
async fn check_admission_only_considers_the_pilot() {
    let pilot = uuid::Uuid::now_v7();
    let other = uuid::Uuid::now_v7();
    let own = tuesday_weekly(pilot);
    let foreign = blockout_json(
        other,
        "daily",
        "2024-01-01T00:00:00Z",
        "2024-01-01T23:59:00Z",
        None,
    );
    let blockouts = json!([foreign, own.clone()]);

    let (status, body) = post_json(
        test_service(),
        CHECK,
        &json!({
            "blockouts": blockouts,
            "instant": "2024-01-16T10:00:00Z",
            "pilot_id": pilot,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["blocking_blockout_id"], own["id"]);

    // Wednesday is only covered by the other pilot's daily blockout
    let (status, body) = post_json(
        test_service(),
        CHECK,
        &json!({
            "blockouts": blockouts,
            "instant": "2024-01-17T10:00:00Z",
            "pilot_id": pilot,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], true);
}

#[test_log::test(tokio::test)]
async fn configured_windows_timezone_is_used() {
    // 09:00-17:00 New York on weekdays, anchored on Tuesday 2024-01-02
    let weekdays = blockout_json(
        uuid::Uuid::now_v7(),
        "weekdays",
        "2024-01-02T14:00:00Z",
        "2024-01-02T22:00:00Z",
        None,
    );
    let service = || test_service_with("[calendar]\ntimezone = \"Eastern Standard Time\"\n");

    // Friday 2024-01-05 16:30 New York
    let (_, body) = post_json(
        service(),
        CHECK,
        &json!({ "blockouts": [weekdays], "instant": "2024-01-05T21:30:00Z" }),
    )
    .await;
    assert_eq!(body["available"], false);

    // Saturday 2024-01-06 00:30 UTC is still Friday 19:30 New York, outside the window
    let (_, body) = post_json(
        service(),
        CHECK,
        &json!({ "blockouts": [weekdays], "instant": "2024-01-06T00:30:00Z" }),
    )
    .await;
    assert_eq!(body["available"], true);
}

#[tokio::test]
async fn request_timezone_overrides_configuration() {
    let weekdays = blockout_json(
        uuid::Uuid::now_v7(),
        "weekdays",
        "2024-01-02T14:00:00Z",
        "2024-01-02T22:00:00Z",
        None,
    );

    // Saturday 2024-01-06 02:00 UTC is Friday 21:00 in New York, Saturday in UTC
    let instant = "2024-01-06T02:00:00Z";
    let late = blockout_json(
        uuid::Uuid::now_v7(),
        "weekdays",
        "2024-01-02T23:00:00Z",
        "2024-01-03T03:00:00Z",
        None,
    );

    let (_, body) = post_json(
        test_service(),
        CHECK,
        &json!({ "blockouts": [weekdays, late], "instant": instant }),
    )
    .await;
    assert_eq!(body["available"], true);

    let (_, body) = post_json(
        test_service(),
        CHECK,
        &json!({
            "blockouts": [weekdays, late],
            "instant": instant,
            "timezone": "America/New_York",
        }),
    )
    .await;
    assert_eq!(body["available"], false);
    assert_eq!(body["blocking_blockout_id"], late["id"]);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, body) = post_json(
        test_service(),
        CHECK,
        &json!({ "blockouts": "nope", "instant": "yesterday" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn slots_honor_requested_length() {
    let blockouts = json!([blockout_json(
        uuid::Uuid::now_v7(),
        "daily",
        "2024-01-02T09:00:00Z",
        "2024-01-02T17:00:00Z",
        None,
    )]);

    let (status, body) = post_json(
        test_service(),
        SLOTS,
        &json!({ "blockouts": blockouts, "date": "2024-03-01", "slot_minutes": 60 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 24);
    assert_eq!(slots[9]["blocked"], true);
    assert_eq!(slots[17]["blocked"], true);
    assert_eq!(slots[18]["blocked"], false);
    assert_eq!(slots[8]["blocked"], false);
    assert!(slots[8]["blockout_id"].is_null());
}

#[tokio::test]
async fn slots_reject_uneven_length() {
    let (status, body) = post_json(
        test_service(),
        SLOTS,
        &json!({ "blockouts": [], "date": "2024-03-01", "slot_minutes": 7 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("1440"));
}

#[tokio::test]
async fn slots_use_configured_default_length() {
    let (_, body) = post_json(
        test_service_with("[availability]\nslot_minutes = 15\n"),
        SLOTS,
        &json!({ "blockouts": [], "date": "2024-03-01" }),
    )
    .await;

    assert_eq!(body["slots"].as_array().unwrap().len(), 96);
}

#[test_log::test(tokio::test)]
async fn monthly_occurrences_skip_short_months() {
    let monthly = blockout_json(
        uuid::Uuid::now_v7(),
        "monthly",
        "2024-01-31T09:00:00Z",
        "2024-01-31T10:00:00Z",
        None,
    );

    let (status, body) = post_json(
        test_service(),
        OCCURRENCES,
        &json!({
            "blockout": monthly,
            "from": "2024-01-01T00:00:00Z",
            "to": "2024-06-30T23:59:59Z",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let starts: Vec<&str> = body["occurrences"]
        .as_array()
        .unwrap()
        .iter()
        .map(|span| span["start"].as_str().unwrap())
        .collect();
    assert_eq!(
        starts,
        [
            "2024-01-31T09:00:00Z",
            "2024-03-31T09:00:00Z",
            "2024-05-31T09:00:00Z"
        ]
    );
    assert!(body["rrule"].as_str().unwrap().contains("FREQ=MONTHLY"));
}

#[tokio::test]
async fn one_time_occurrence_has_no_rrule() {
    let once = blockout_json(
        uuid::Uuid::now_v7(),
        "none",
        "2024-02-10T08:00:00Z",
        "2024-02-12T18:00:00Z",
        None,
    );

    let (status, body) = post_json(
        test_service(),
        OCCURRENCES,
        &json!({
            "blockout": once,
            "from": "2024-02-01T00:00:00Z",
            "to": "2024-02-28T00:00:00Z",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["occurrences"].as_array().unwrap().len(), 1);
    assert!(body["rrule"].is_null());
}
