use super::*;

#[tokio::test]
async fn forward_without_upstream_is_not_configured() {
    let proxy = AnalyzeProxy::new(None).unwrap();
    assert!(!proxy.is_configured());

    let err = proxy.forward(None, Bytes::from_static(b"photo")).await.unwrap_err();

    assert!(matches!(err, AnalyzeError::NotConfigured));
    assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(err.to_string(), "Analysis service is not configured");
}

#[tokio::test]
async fn forward_to_closed_port_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let proxy = AnalyzeProxy::new(Some(format!("http://{addr}/analyze"))).unwrap();
    let content_type = HeaderValue::from_static("multipart/form-data; boundary=x");
    let err = proxy.forward(Some(&content_type), Bytes::from_static(b"photo")).await.unwrap_err();

    assert!(matches!(err, AnalyzeError::Upstream(_)));
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.to_string(), "Analysis service is unavailable");
}

#[tokio::test]
async fn forward_keeps_upstream_error_status() {
    let upstream = axum::Router::new().route(
        "/analyze",
        axum::routing::post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "{\"detail\":\"File must be an image\"}") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, upstream).await });

    let proxy = AnalyzeProxy::new(Some(format!("http://{addr}/analyze"))).unwrap();
    let reply = proxy.forward(None, Bytes::from_static(b"text")).await.unwrap();

    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(reply.body, Bytes::from_static(b"{\"detail\":\"File must be an image\"}"));
}
