// Route table tests against the router the binary serves.

use std::time::{Duration, Instant};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use tokio::task::JoinSet;
use tower::ServiceExt;

use nginx_demo::modules::demo::core::flavor::Flavor;
use nginx_demo::shell::http::router;
use nginx_demo::shell::state::AppState;

fn app() -> Router {
    router(AppState::new(Flavor::Laravel))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[rstest]
#[case("/", "laravel-nginx-demo ok")]
#[case("/work", "laravel-nginx-demo work done")]
#[tokio::test]
async fn it_should_serve_fixed_bodies(#[case] path: &str, #[case] expected: &str) {
    let response = app()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, expected);
}

#[rstest]
#[case("/", "springboot-nginx-demo ok")]
#[case("/work", "springboot-nginx-demo work done")]
#[tokio::test]
async fn it_should_serve_spring_boot_bodies(#[case] path: &str, #[case] expected: &str) {
    let response = router(AppState::new(Flavor::SpringBoot))
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, expected);
}

#[rstest]
#[case("/missing")]
#[case("/work/extra")]
#[case("/index.php")]
#[tokio::test]
async fn it_should_return_404_for_unknown_paths(#[case] path: &str) {
    let response = app()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(Method::POST, "/")]
#[case(Method::DELETE, "/work")]
#[tokio::test]
async fn it_should_return_405_for_other_methods_on_known_paths(
    #[case] method: Method,
    #[case] path: &str,
) {
    let response = app()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn it_should_take_at_least_100ms_for_work() {
    let started = Instant::now();

    let response = app()
        .oneshot(Request::get("/work").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn it_should_overlap_concurrent_work_requests() {
    let app = app();
    let started = Instant::now();

    let mut requests = JoinSet::new();
    for _ in 0..8 {
        let app = app.clone();
        requests.spawn(async move {
            app.oneshot(Request::get("/work").body(Body::empty()).unwrap())
                .await
                .unwrap()
                .status()
        });
    }

    while let Some(status) = requests.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    // Eight sequential delays would need 800ms.
    assert!(started.elapsed() < Duration::from_millis(500));
}
