// src/web/embedded.rs
// Embedded UI assets for single-binary distribution

use axum::{
    body::Body,
    http::{header, Request, Response},
    response::IntoResponse,
};
use rust_embed::RustEmbed;
use std::convert::Infallible;
use std::future::{ready, Ready};
use std::task::{Context, Poll};
use tower::Service;

use crate::api::ApiError;

/// Static UI files (index.html, stylesheet, script)
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct Assets;

/// Serve an embedded file, or a JSON 404 when it does not exist
pub fn serve_embedded(path: &str, max_age: u64) -> Response<Body> {
    let Some(content) = Assets::get(path) else {
        return ApiError::not_found(format!("Not found: /static/{path}")).into_response();
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();

    (
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (header::CACHE_CONTROL, format!("public, max-age={max_age}")),
        ],
        Body::from(content.data.into_owned()),
    )
        .into_response()
}

/// Service mounted at /static
#[derive(Clone)]
pub struct EmbeddedAssets {
    max_age: u64,
}

impl EmbeddedAssets {
    pub fn new(max_age: u64) -> Self {
        Self { max_age }
    }
}

impl<B> Service<Request<B>> for EmbeddedAssets
where
    B: Send + 'static,
{
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let path = req.uri().path().trim_start_matches('/');
        ready(Ok(serve_embedded(path, self.max_age)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_index_is_embedded() {
        let response = serve_embedded("index.html", 60);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
            "text/html"
        );
        assert_eq!(
            response.headers()[header::CACHE_CONTROL].to_str().unwrap(),
            "public, max-age=60"
        );
    }

    #[test]
    fn test_script_mime() {
        let response = serve_embedded("app.js", 0);
        let mime = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(mime.contains("javascript"), "{mime}");
    }

    #[test]
    fn test_missing_asset() {
        let response = serve_embedded("nope.txt", 0);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
