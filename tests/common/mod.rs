// Each integration test file is a separate binary; not every helper is used
// in every binary.
#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{http::header, response::Html, routing::get, Router};

pub const OG_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <meta property="og:title" content="Test Title" />
    <meta property="og:description" content="Test Description" />
</head>
<body>
    Hello, World!
</body>
</html>
"#;

/// A 1x1 PNG.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15, 0xc4,
    0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae,
    0x42, 0x60, 0x82,
];

/// Routes:
/// - `/` the two-property OpenGraph page
/// - `/plain` a page without OpenGraph tags
/// - `/missing` a 404 whose body still carries an og:title
/// - `/og.png` a PNG image
pub fn mock_site() -> Router {
    Router::new()
        .route("/", get(|| async { Html(OG_PAGE) }))
        .route(
            "/plain",
            get(|| async { Html("<html><head><title>Plain</title></head></html>") }),
        )
        .route(
            "/missing",
            get(|| async {
                (
                    axum::http::StatusCode::NOT_FOUND,
                    Html(r#"<meta property="og:title" content="Not Found">"#),
                )
            }),
        )
        .route(
            "/og.png",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], TINY_PNG) }),
        )
}

/// Serves `mock_site` on an ephemeral localhost port for the rest of the test.
pub async fn spawn_mock_site() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server addr");
    tokio::spawn(async move {
        axum::serve(listener, mock_site())
            .await
            .expect("mock server");
    });
    addr
}

/// Serves `html` at `/` on an ephemeral localhost port.
pub async fn spawn_page(html: String) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind page server");
    let addr = listener.local_addr().expect("page server addr");
    let app = Router::new().route("/", get(move || async move { Html(html) }));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("page server");
    });
    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    listener.local_addr().expect("probe addr")
}
