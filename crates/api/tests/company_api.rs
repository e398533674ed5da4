//! HTTP-level integration tests for the company resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_crud(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "Acme Inc", "website": "https://acme.example", "city": "Pune"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Acme Inc");
    assert_eq!(created["city"], "Pune");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/companies/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/companies/{id}"),
        serde_json::json!({"name": "Acme Incorporated"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Acme Incorporated");
    assert!(json["city"].is_null(), "edit form replaces nullable columns");

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/companies/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/companies/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_name_rejected(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "   "}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_name_conflicts(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "Acme Inc"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "Acme Inc"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_blocked_while_contacts_reference(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    // Create a contact linked to an auto-created company.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/contacts",
        serde_json::json!({"first_name": "Jane", "last_name": "Doe", "company_name": "Acme Inc"}),
        &token,
    )
    .await;
    let contact = body_json(response).await;
    let contact_id = contact["id"].as_i64().unwrap();
    let company_id = contact["company_id"].as_i64().unwrap();

    // Deleting the referenced company conflicts.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/companies/{company_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // After the contact is gone the delete succeeds.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/contacts/{contact_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/companies/{company_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_companies(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    for name in ["Zeta Corp", "Acme Inc"] {
        let app = common::build_test_app(pool.clone());
        post_json_auth(
            app,
            "/api/v1/companies",
            serde_json::json!({"name": name}),
            &token,
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/companies", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Acme Inc", "Zeta Corp"], "listing is name-ordered");
}
