use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::{get_json, post_json, test_service};

#[tokio::test]
async fn tier_boundaries() {
    for (hours, tier) in [
        ("0", "bronze"),
        ("49.9", "bronze"),
        ("50", "silver"),
        ("150", "gold"),
        ("999.5", "platinum"),
        ("1000", "diamond"),
    ] {
        let (status, body) =
            get_json(test_service(), &format!("/api/ranking/tier?hours={hours}")).await;

        assert_eq!(status, StatusCode::OK, "{hours}");
        assert_eq!(body["tier"], tier, "{hours}");
    }
}

#[tokio::test]
async fn tier_reports_progress_to_next() {
    let (_, body) = get_json(test_service(), "/api/ranking/tier?hours=400").await;

    assert_eq!(body["tier"], "gold");
    assert_eq!(body["min_hours"], 150.0);
    assert_eq!(body["next_tier"], "platinum");
    assert_eq!(body["hours_to_next_tier"], 100.0);
}

#[test_log::test(tokio::test)]
async fn leaderboard_ties_share_a_rank() {
    let standings = json!([
        { "pilot_id": uuid::Uuid::now_v7(), "display_name": "Nova", "flight_hours": 200.0 },
        { "pilot_id": uuid::Uuid::now_v7(), "display_name": "Kite", "flight_hours": 600.0 },
        { "pilot_id": uuid::Uuid::now_v7(), "display_name": "Aero", "flight_hours": 200.0 },
        { "pilot_id": uuid::Uuid::now_v7(), "display_name": "Wren", "flight_hours": 10.0 },
    ]);

    let (status, body) = post_json(
        test_service(),
        "/api/ranking/leaderboard",
        &json!({ "standings": standings }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let entries = body["entries"].as_array().unwrap();
    let ranked: Vec<(&str, u64, &str)> = entries
        .iter()
        .map(|entry| {
            (
                entry["display_name"].as_str().unwrap(),
                entry["rank"].as_u64().unwrap(),
                entry["tier"].as_str().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        ranked,
        [
            ("Kite", 1, "platinum"),
            ("Aero", 2, "gold"),
            ("Nova", 2, "gold"),
            ("Wren", 4, "bronze"),
        ]
    );
}
