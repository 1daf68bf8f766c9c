//! Static server for the built site.

use std::path::Path;

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Router serving `dist_dir`.
///
/// Paths without a matching file get `index.html` with a 200, leaving
/// routing (and the not-found page) to the client.
pub fn create_router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    Router::new()
        .fallback_service(ServeDir::new(dist_dir).fallback(index))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;

    fn dist() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("index.html"), "<!DOCTYPE html><body></body>").expect("index");
        fs::write(dir.path().join("folio.js"), "export {};").expect("js");
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_serves_assets() {
        let dir = dist();
        let (status, body) = get(create_router(dir.path()), "/folio.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export {};");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = dist();
        let (status, body) = get(create_router(dir.path()), "/work/harbor").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<!DOCTYPE html>"));
    }
}
