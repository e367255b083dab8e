//! End-to-end handler tests running against the in-memory repositories.

use std::sync::Arc;

use actix_web::{App, test, web};
use serde_json::{Value, json};

use quill_core::ports::{PasswordService, TokenService};
use quill_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

use crate::handlers::configure_routes;
use crate::middleware::error::json_error_handler;
use crate::state::AppState;

fn test_services() -> (Arc<dyn TokenService>, Arc<dyn PasswordService>) {
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
        secret: "test-secret-key".to_string(),
        expiration_hours: 1,
    }));
    let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
    (token_service, password_service)
}

macro_rules! test_app {
    () => {{
        let (token_service, password_service) = test_services();
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .app_data(web::Data::new(token_service))
                .app_data(web::Data::new(password_service))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(configure_routes)
                .default_service(web::route().to(crate::not_found)),
        )
        .await
    }};
}

macro_rules! sign_up {
    ($app:expr, $email:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/users/sign-up")
            .set_json(json!({"email": $email, "password": "secret-password", "name": $name}))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

macro_rules! create_post {
    ($app:expr, $token:expr, $title:expr, $content:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/posts")
            .insert_header(("Authorization", format!("Bearer {}", $token)))
            .set_json(json!({"title": $title, "content": $content}))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

#[actix_rt::test]
async fn test_sign_up_then_sign_in() {
    let app = test_app!();

    let signed_up = sign_up!(app, "jane@example.com", "Jane");
    assert_eq!(signed_up["email"], "jane@example.com");
    assert_eq!(signed_up["name"], "Jane");
    assert!(signed_up["token"].as_str().is_some_and(|t| !t.is_empty()));

    let req = test::TestRequest::post()
        .uri("/api/v1/users/sign-in")
        .set_json(json!({"email": "jane@example.com", "password": "secret-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let signed_in: Value = test::read_body_json(resp).await;
    assert_eq!(signed_in["_id"], signed_up["_id"]);

    // The token embeds the created user's identity.
    let (token_service, _) = test_services();
    let claims = token_service
        .verify_token(signed_in["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.user_id.to_string(), signed_up["_id"].as_str().unwrap());
    assert_eq!(claims.email, "jane@example.com");
}

#[actix_rt::test]
async fn test_sign_in_with_wrong_password() {
    let app = test_app!();
    sign_up!(app, "jane@example.com", "Jane");

    let req = test::TestRequest::post()
        .uri("/api/v1/users/sign-in")
        .set_json(json!({"email": "jane@example.com", "password": "not-the-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
async fn test_sign_up_duplicate_email() {
    let app = test_app!();
    sign_up!(app, "jane@example.com", "Jane");

    let req = test::TestRequest::post()
        .uri("/api/v1/users/sign-up")
        .set_json(json!({"email": "jane@example.com", "password": "other-password", "name": "Other"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email is already registered");
}

#[actix_rt::test]
async fn test_sign_up_invalid_email() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/users/sign-up")
        .set_json(json!({"email": "not-an-email", "password": "secret-password", "name": "Jane"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_post_mutations_require_auth() {
    let app = test_app!();

    // Anonymous caller: 401
    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .set_json(json!({"title": "T", "content": "C"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Credential present but invalid: 403
    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .set_json(json!({"title": "T", "content": "C"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_rt::test]
async fn test_post_crud_with_ownership() {
    let app = test_app!();

    let u = sign_up!(app, "u@example.com", "U");
    let v = sign_up!(app, "v@example.com", "V");
    let u_token = u["token"].as_str().unwrap().to_string();
    let v_token = v["token"].as_str().unwrap().to_string();

    let created = create_post!(app, u_token, "T", "C");
    assert_eq!(created["author"], u["_id"]);
    assert_eq!(created["createdBy"], u["_id"]);
    let post_id = created["id"].as_str().unwrap().to_string();

    // Update by a different authenticated user fails.
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/posts/{post_id}"))
        .insert_header(("Authorization", format!("Bearer {v_token}")))
        .set_json(json!({"content": "hijacked"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    // Update by the author applies only the supplied field.
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/posts/{post_id}"))
        .insert_header(("Authorization", format!("Bearer {u_token}")))
        .set_json(json!({"content": "C2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "T");
    assert_eq!(updated["content"], "C2");

    // Delete by a different user fails; by the author succeeds.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/posts/{post_id}"))
        .insert_header(("Authorization", format!("Bearer {v_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/posts/{post_id}"))
        .insert_header(("Authorization", format!("Bearer {u_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // Soft-deleted posts are gone from reads and from mutation targets.
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/posts/{post_id}"))
        .insert_header(("Authorization", format!("Bearer {u_token}")))
        .set_json(json!({"content": "resurrected"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_list_posts_pagination() {
    let app = test_app!();

    let u = sign_up!(app, "author@example.com", "Author");
    let token = u["token"].as_str().unwrap().to_string();

    for i in 0..7 {
        create_post!(app, token, format!("Post {i}"), "Content");
    }

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let first: Value = test::read_body_json(resp).await;
    assert_eq!(first.as_array().unwrap().len(), 5);
    assert_eq!(first[0]["title"], "Post 0");

    let req = test::TestRequest::get()
        .uri("/api/v1/posts?page=2&size=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let second: Value = test::read_body_json(resp).await;
    assert_eq!(second.as_array().unwrap().len(), 2);
    assert_eq!(second[0]["title"], "Post 5");

    let req = test::TestRequest::get()
        .uri("/api/v1/posts?page=4&size=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let beyond: Value = test::read_body_json(resp).await;
    assert_eq!(beyond.as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_get_post_with_unknown_or_malformed_id() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // An id that doesn't parse can't match any post.
    let req = test::TestRequest::get()
        .uri("/api/v1/posts/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_unmatched_route_and_malformed_body() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/v1/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Not Found");

    // A body missing required fields is a 400 with the standard envelope.
    let req = test::TestRequest::post()
        .uri("/api/v1/users/sign-up")
        .set_json(json!({"email": "jane@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().is_some());
}
