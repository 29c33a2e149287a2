//! Transaction statistics endpoint tests.

mod common;

use common::TestApp;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

fn as_decimal(value: &serde_json::Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("expected decimal string")).unwrap()
}

fn record(day: u32, free: bool, commission: i64, practitioner: i64) -> serde_json::Value {
    json!({
        "occurred_utc": format!("2025-06-{:02}T12:00:00Z", day),
        "is_free_appointment": free,
        "amount_platform_commission": commission,
        "amount_practitioner": practitioner
    })
}

#[tokio::test]
async fn stats_sums_counts_and_amounts() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .post(app.api("/commissions/stats"))
        .json(&json!({
            "records": [
                record(1, true, 0, 80),
                record(2, false, 6, 74),
                record(3, false, 6, 74)
            ]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total_appointments"], 3);
    assert_eq!(body["free_appointments"], 1);
    assert_eq!(body["charged_appointments"], 2);
    assert_eq!(as_decimal(&body["total_commission"]), Decimal::new(12, 0));
    assert_eq!(
        as_decimal(&body["total_practitioner_amount"]),
        Decimal::new(228, 0)
    );
}

#[tokio::test]
async fn stats_honors_inclusive_date_range() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .post(app.api("/commissions/stats"))
        .json(&json!({
            "records": [record(1, false, 6, 74), record(15, false, 6, 74)],
            "from": "2025-06-15T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total_appointments"], 1);
}

#[tokio::test]
async fn stats_of_empty_batch_is_zeroed() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .post(app.api("/commissions/stats"))
        .json(&json!({ "records": [] }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total_appointments"], 0);
    assert_eq!(as_decimal(&body["total_commission"]), Decimal::ZERO);
}
