//! Request dispatch.
//!
//! Validates the method, hands the path to the static file responder, and
//! stamps the CORS headers onto whatever comes back. The CORS step runs
//! last on purpose: the cross-origin contract covers every status code,
//! error responses included.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::handler::{static_files, ServerContext};
use crate::http::{self, cors};

/// Main entry point for HTTP request handling.
///
/// Generic over the body type; request bodies are never read.
pub async fn handle_request<B>(
    req: Request<B>,
    ctx: Arc<ServerContext>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    let mut response = match method {
        &Method::GET | &Method::HEAD => static_files::serve_path(&ctx, path, is_head).await,
        &Method::OPTIONS => http::build_options_response(),
        _ => http::build_405_response(),
    };

    cors::apply(response.headers_mut());
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::fs;
    use std::path::Path;

    fn test_ctx(root: &Path) -> Arc<ServerContext> {
        Arc::new(ServerContext {
            root: root.canonicalize().unwrap(),
            index_files: vec!["index.html".to_string()],
            directory_listing: true,
        })
    }

    fn request(method: Method, path: &str) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(())
            .unwrap()
    }

    fn assert_cors_headers(resp: &Response<Full<Bytes>>) {
        let headers = resp.headers();
        assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
        assert_eq!(
            headers.get("Access-Control-Allow-Methods").unwrap(),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Headers").unwrap(),
            "Content-Type"
        );
    }

    #[tokio::test]
    async fn test_get_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), b"hello").unwrap();
        let ctx = test_ctx(dir.path());

        let resp = handle_request(request(Method::GET, "/index.html"), ctx)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_cors_headers(&resp);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"hello");
    }

    #[tokio::test]
    async fn test_404_still_carries_cors_headers() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(dir.path());

        let resp = handle_request(request(Method::GET, "/missing.txt"), ctx)
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        assert_cors_headers(&resp);
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(dir.path());

        let resp = handle_request(request(Method::OPTIONS, "/"), ctx)
            .await
            .unwrap();
        assert_eq!(resp.status(), 204);
        assert_cors_headers(&resp);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405_with_cors() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(dir.path());

        let resp = handle_request(request(Method::POST, "/"), ctx)
            .await
            .unwrap();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET, HEAD, OPTIONS");
        assert_cors_headers(&resp);
    }

    #[tokio::test]
    async fn test_head_has_empty_body() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), b"hello").unwrap();
        let ctx = test_ctx(dir.path());

        let resp = handle_request(request(Method::HEAD, "/index.html"), ctx)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_cors_headers(&resp);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
