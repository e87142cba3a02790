//! HTTP-level integration tests for `/api/ProductType`.

mod common;

use axum::http::StatusCode;
use boxoffice_core::roles::{ROLE_ADMIN, ROLE_USER};
use common::{body_json, delete_auth, get, post_json, post_json_auth, put_json_auth, token_for};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_types_are_listed_anonymously(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/ProductType").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"id": 1, "name": "Snacks"},
            {"id": 2, "name": "Drinks"},
            {"id": 3, "name": "Combos"}
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_one_is_anonymous(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/ProductType/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Drinks");

    let response = get(common::build_test_app(pool), "/api/ProductType/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_manages_product_types(pool: PgPool) {
    let token = token_for(&pool, "manager", ROLE_ADMIN).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/ProductType",
        json!({"name": "Merchandise"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/ProductType/{id}"),
        json!({"name": "Merch"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Merch");

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/ProductType/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/api/ProductType/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_admin_mutation_returns_403(pool: PgPool) {
    let token = token_for(&pool, "cashier", ROLE_USER).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/ProductType",
        json!({"name": "Merchandise"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(common::build_test_app(pool), "/api/ProductType/1", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_mutation_returns_401(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/ProductType",
        json!({"name": "Merchandise"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_name_returns_409(pool: PgPool) {
    let token = token_for(&pool, "manager", ROLE_ADMIN).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/ProductType",
        json!({"name": "Snacks"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_type_in_use_cannot_be_deleted(pool: PgPool) {
    let token = token_for(&pool, "manager", ROLE_ADMIN).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/Product",
        json!({"name": "Popcorn", "price": 5.5, "productTypeId": 1}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete_auth(common::build_test_app(pool), "/api/ProductType/1", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
