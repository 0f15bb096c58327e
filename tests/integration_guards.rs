mod common;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use serde_json::json;
use tower::ServiceExt;

use common::{SESSION_COOKIE, identity_json, spawn_backend, test_state};
use tutorlink_web::router::init_router;

fn backend_with_identity(role: &'static str) -> axum::Router {
    axum::Router::new()
        .route(
            "/api/auth/me",
            get(move || async move { axum::Json(json!({"data": identity_json(role)})) }),
        )
        .route(
            "/api/tutors/me/availability",
            get(|| async { axum::Json(json!({"data": []})) }),
        )
        .route(
            "/api/bookings/me",
            get(|| async { axum::Json(json!({"data": []})) }),
        )
}

#[tokio::test]
async fn missing_cookie_redirects_to_login_without_backend_call() {
    let me_called = Arc::new(AtomicBool::new(false));
    let flag = me_called.clone();
    let backend = axum::Router::new().route(
        "/api/auth/me",
        get(move || {
            let flag = flag.clone();
            async move {
                flag.store(true, Ordering::SeqCst);
                axum::Json(json!({"data": identity_json("STUDENT")}))
            }
        }),
    );
    let url = spawn_backend(backend).await;
    let app = init_router(test_state(&url));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/dashboard/session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    // The coarse gate answered before any identity check could fire.
    assert!(!me_called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn rejected_identity_redirects_to_login_and_skips_the_handler() {
    let bookings_called = Arc::new(AtomicBool::new(false));
    let flag = bookings_called.clone();
    let backend = axum::Router::new()
        .route(
            "/api/auth/me",
            get(|| async { StatusCode::UNAUTHORIZED }),
        )
        .route(
            "/api/bookings/me",
            get(move || {
                let flag = flag.clone();
                async move {
                    flag.store(true, Ordering::SeqCst);
                    axum::Json(json!({"data": []}))
                }
            }),
        );
    let url = spawn_backend(backend).await;
    let app = init_router(test_state(&url));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/dashboard/bookings")
                .header(header::COOKIE, SESSION_COOKIE)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    assert!(!bookings_called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn wrong_role_redirects_to_unauthorized() {
    let url = spawn_backend(backend_with_identity("STUDENT")).await;
    let app = init_router(test_state(&url));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/tutor/availability")
                .header(header::COOKIE, SESSION_COOKIE)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/unauthorized");
}

#[tokio::test]
async fn matching_role_passes_through() {
    let url = spawn_backend(backend_with_identity("TUTOR")).await;
    let app = init_router(test_state(&url));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/tutor/availability")
                .header(header::COOKIE, SESSION_COOKIE)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_directory_needs_no_cookie() {
    let backend = axum::Router::new().route(
        "/api/tutors",
        get(|| async { axum::Json(json!({"data": []})) }),
    );
    let url = spawn_backend(backend).await;
    let app = init_router(test_state(&url));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/views/tutors")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unreachable_backend_counts_as_not_authenticated() {
    // Nothing listening on this port: the identity check fails at transport
    // level and the guard still answers with a login redirect.
    let app = init_router(test_state("http://127.0.0.1:1"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/users")
                .header(header::COOKIE, SESSION_COOKIE)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}
