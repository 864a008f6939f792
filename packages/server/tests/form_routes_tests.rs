//! Integration tests for the form helper routes and health check.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;
use suitability_core::kernel::TestDependencies;
use test_context::test_context;

fn complete_form() -> serde_json::Value {
    json!({
        "fullName": "Jane Smith",
        "dateOfBirth": "1985-04-12",
        "email": "jane@example.com",
        "phone": "612-555-0100",
        "address": "1 Main St, Minneapolis, MN 55401",
        "occupation": "Engineer",
        "annualIncome": 120000,
        "netWorth": 450000,
        "investmentExperience": "Index funds since 2010",
        "riskTolerance": "Medium",
        "investmentGoals": "Retirement",
        "timeHorizon": "20",
        "liquidityNeeds": "Emergency fund only",
        "taxStatus": "Single"
    })
}

// ============================================================================
// Merge
// ============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn merge_keeps_values_the_extraction_leaves_empty(ctx: &TestHarness) {
    let response = ctx
        .post_json(
            "/api/forms/merge",
            json!({
                "form": { "email": "a@b.com", "fullName": "J Smith" },
                "extraction": { "email": "", "fullName": "Jane Smith", "netWorth": null }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "email": "a@b.com", "fullName": "Jane Smith" })
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn merge_twice_equals_merge_once(ctx: &TestHarness) {
    let extraction = json!({ "riskTolerance": "High", "annualIncome": 90000 });

    let once = ctx
        .post_json(
            "/api/forms/merge",
            json!({ "form": { "taxStatus": "Single" }, "extraction": extraction }),
        )
        .await;
    let twice = ctx
        .post_json(
            "/api/forms/merge",
            json!({ "form": once.body, "extraction": extraction }),
        )
        .await;

    assert_eq!(once.status, StatusCode::OK);
    assert_eq!(once.body, twice.body);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn merge_rejects_unknown_fields_with_paths(ctx: &TestHarness) {
    let response = ctx
        .post_json(
            "/api/forms/merge",
            json!({ "form": {}, "extraction": { "favoriteColor": "blue" } }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"][0]["field"], "extraction.favoriteColor");
    assert_eq!(response.body["error"], "Invalid form data");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn merge_with_missing_form_starts_empty(ctx: &TestHarness) {
    let response = ctx
        .post_json(
            "/api/forms/merge",
            json!({ "extraction": { "occupation": "Pilot" } }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "occupation": "Pilot" }));
}

// ============================================================================
// Validate
// ============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn complete_form_validates(ctx: &TestHarness) {
    let response = ctx.post_json("/api/forms/validate", complete_form()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["valid"], true);
    assert_eq!(response.body["form"]["fullName"], "Jane Smith");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_field_is_named(ctx: &TestHarness) {
    let mut form = complete_form();
    form.as_object_mut().unwrap().remove("email");

    let response = ctx.post_json("/api/forms/validate", form).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["valid"], false);
    assert_eq!(
        response.body["errors"],
        json!([{ "field": "email", "message": "is required" }])
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_numeric_income_is_named(ctx: &TestHarness) {
    let mut form = complete_form();
    form["annualIncome"] = json!("lots");

    let response = ctx.post_json("/api/forms/validate", form).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"][0]["field"], "annualIncome");
    assert_eq!(response.body["errors"][0]["message"], "expected a number");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn validate_rejects_non_json(ctx: &TestHarness) {
    let response = ctx.post_raw("/api/forms/validate", "not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

// ============================================================================
// Schema & Health
// ============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn schema_lists_all_fields(ctx: &TestHarness) {
    let response = ctx.get("/api/forms/schema").await;

    assert_eq!(response.status, StatusCode::OK);
    let fields = response.body.as_array().unwrap();
    assert_eq!(fields.len(), 14);
    assert_eq!(
        fields[6],
        json!({
            "name": "annualIncome",
            "label": "Annual Income",
            "kind": "number",
            "description": "Annual income in USD (numeric value)"
        })
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_model(ctx: &TestHarness) {
    let response = ctx.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "healthy", "model": "gpt-4o" }));
}

#[tokio::test]
async fn health_reports_configured_model() {
    let ctx = TestHarness::with_deps(TestDependencies::new().extraction_model("gpt-4o-mini"));

    let response = ctx.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["model"], "gpt-4o-mini");
}
