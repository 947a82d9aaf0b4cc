use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

fn test_router() -> Router {
    base_routes(AnalyzeProxy::new(None).unwrap())
}

async fn json_body(resp: Response) -> AnalysisResponse {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_returns_200() {
    let resp = test_router()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_page_paths_redirect_home() {
    let resp = test_router()
        .oneshot(Request::builder().uri("/no/such/place").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn analyze_post_is_not_redirected() {
    let resp = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "multipart/form-data; boundary=x")
                .body(Body::from("--x--\r\n"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(resp.headers().get(header::LOCATION).is_none());
    assert_eq!(
        json_body(resp).await.into_result(),
        Err(fishcast_client::error::TransportError::Service(
            "Analysis service is not configured".to_owned()
        ))
    );
}

#[tokio::test]
async fn unknown_api_path_is_json_404() {
    let resp = test_router()
        .oneshot(Request::builder().uri("/api/forecast").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, AnalysisResponse::failure("Not found"));
}

#[tokio::test]
async fn non_get_to_unknown_path_is_json_404() {
    let resp = test_router()
        .oneshot(Request::builder().method("POST").uri("/no/such/place").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn analyze_relays_upstream_reply() {
    let upstream = Router::new().route(
        "/analyze",
        post(|headers: HeaderMap, body: Bytes| async move {
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            Json(AnalysisResponse {
                success: true,
                recommendation: Some(format!("{content_type} {} bytes", body.len())),
                ..AnalysisResponse::default()
            })
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, upstream).await });

    let router = base_routes(AnalyzeProxy::new(Some(format!("http://{addr}/analyze"))).unwrap());
    let resp = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "multipart/form-data; boundary=x")
                .body(Body::from("photo"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await.into_result(),
        Ok("multipart/form-data; boundary=x 5 bytes".to_owned())
    );
}
