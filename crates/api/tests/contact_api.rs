//! HTTP-level integration tests for the contact write path: validation,
//! company resolution, full-replacement updates, and PII masking.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;
use vantage_db::repositories::{CompanyRepo, ContactRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_contact_returns_201(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({"first_name": "Jane", "last_name": "Doe", "email": "jane@acme.com"}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Jane");
    assert_eq!(json["last_name"], "Doe");
    assert_eq!(json["email"], "jane@acme.com");
    assert!(json["company_id"].is_null());
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_first_name_writes_nothing(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({"first_name": "", "last_name": "Doe"}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let count = ContactRepo::count(&pool).await.unwrap();
    assert_eq!(count, 0, "failed validation must not write any rows");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_whitespace_last_name_rejected(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({"first_name": "Jane", "last_name": "   "}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ContactRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dangling_company_id_writes_nothing(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({"first_name": "Jane", "last_name": "Doe", "company_id": 999999}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["error"].as_str().unwrap().contains("Invalid company_id"),
        "error must name the dangling reference"
    );

    let count = ContactRepo::count(&pool).await.unwrap();
    assert_eq!(count, 0, "contact must never persist with a dangling company");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_created_from_name(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({"first_name": "Jane", "last_name": "Doe", "company_name": "  Acme Inc  "}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let company_id = json["company_id"].as_i64().expect("contact must be linked");

    // Exactly one company row, with the trimmed name.
    let company = CompanyRepo::find_by_id(&pool, company_id)
        .await
        .unwrap()
        .expect("auto-created company must exist");
    assert_eq!(company.name, "Acme Inc");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_existing_company_name_is_reused(pool: PgPool) {
    let existing = CompanyRepo::create_by_name(&pool, "Acme Inc").await.unwrap();
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({"first_name": "Jane", "last_name": "Doe", "company_name": "Acme Inc"}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["company_id"], existing.id);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "no duplicate company may be created");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_name_match_is_case_sensitive(pool: PgPool) {
    CompanyRepo::create_by_name(&pool, "Acme Inc").await.unwrap();
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    // Different casing is a different company.
    let response = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({"first_name": "Jane", "last_name": "Doe", "company_name": "ACME INC"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_is_full_replacement(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let create_resp = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({
            "first_name": "Jane", "last_name": "Doe",
            "email": "jane@acme.com", "phone": "+1 555 123 4567",
            "company_name": "Acme Inc"
        }),
        &token,
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    // Resubmitting the form without email/phone/company clears them.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/contacts/{id}"),
        serde_json::json!({"first_name": "Janet", "last_name": "Doe"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Janet");
    assert!(json["email"].is_null(), "absent email must be nulled, not kept");
    assert!(json["phone"].is_null());
    assert!(json["company_id"].is_null(), "absent company must unlink");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_string_optionals_stored_as_null(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({
            "first_name": "Jane", "last_name": "Doe",
            "email": "", "description": "   "
        }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["email"].is_null());
    assert!(json["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pii_masked_for_agent(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let agent = common::agent_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let create_resp = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({
            "first_name": "Jane", "last_name": "Doe",
            "email": "jane@acme.com", "phone": "+1 555 123 4567"
        }),
        &admin,
    )
    .await;
    let id = body_json(create_resp).await["id"].as_i64().unwrap();

    // Agents lack contacts:view_pii and see masked values.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/contacts/{id}"), &agent).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "j***@acme.com");
    assert_eq!(json["phone"], "***********4567");

    // Admins see the stored values.
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/contacts/{id}"), &admin).await;
    let json = body_json(response).await;
    assert_eq!(json["email"], "jane@acme.com");
    assert_eq!(json["phone"], "+1 555 123 4567");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_agent_cannot_delete_contact(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let agent = common::agent_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let create_resp = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({"first_name": "Jane", "last_name": "Doe"}),
        &admin,
    )
    .await;
    let id = body_json(create_resp).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/contacts/{id}"), &agent).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/contacts/{id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_contact_returns_404(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/contacts/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
