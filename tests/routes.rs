//! Drives the router in-process; no listener is bound.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use certigen::build_router;
use certigen::config::Config;
use certigen::state::AppState;

fn app() -> Router {
    build_router(AppState::new(Config::default()))
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_page() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Design Prompt"));
}

#[tokio::test]
async fn test_api_extract_shape() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/extract")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({
                "prompt": "A sleek teal certificate for Jane Doe, issued by Acme Corp"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["fields"]["recipientName"], "Jane Doe");
    assert_eq!(json["fields"]["issuerName"], "Acme Corp");
    assert!(json["fields"].get("date").is_none());
    assert_eq!(json["preferences"]["color"], "teal");
    assert_eq!(json["preferences"]["template"], "modern");
    assert!(json["preferences"].get("font").is_none());
}

#[tokio::test]
async fn test_generate_renders_preview() {
    let response = app()
        .oneshot(form_post(
            "/generate",
            "prompt=Create+an+elegant+gold+certificate+of+excellence+for+John+Smith%2C+issued+by+Tech+Academy+on+June+1%2C+2024",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("Certificate of excellence"));
    assert!(page.contains("John Smith"));
    assert!(page.contains("Issued by Tech Academy"));
    assert!(page.contains("June 1, 2024"));
}

#[tokio::test]
async fn test_generate_blank_prompt_redirects() {
    let response = app()
        .oneshot(form_post("/generate", "prompt=++"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_update_keeps_form_values() {
    let response = app()
        .oneshot(form_post(
            "/update",
            "recipient_name=Ada+Lovelace&title=Certificate+of+Merit&signature=Charles&color=purple&border_width=30",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("Ada Lovelace"));
    assert!(page.contains("Charles"));
    assert!(page.contains(r#"value="purple" checked"#));
    assert!(page.contains("12px"));
}

#[tokio::test]
async fn test_download_html_attachment() {
    let response = app()
        .oneshot(form_post(
            "/download/html",
            "recipient_name=Jane+Doe&issuer_name=Acme+Corp",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Jane-Doe.html\""
    );
    assert!(body_text(response).await.contains("Issued by Acme Corp"));
}

#[tokio::test]
async fn test_download_without_recipient_uses_default_name() {
    let response = app()
        .oneshot(form_post("/download/html", "title=Certificate+of+Merit"))
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"certificate.html\""
    );
}

#[tokio::test]
async fn test_download_name_keeps_leading_whitespace_as_hyphen() {
    let response = app()
        .oneshot(form_post("/download/html", "recipient_name=+Jane+Doe"))
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"-Jane-Doe.html\""
    );
}

#[tokio::test]
async fn test_download_unknown_format_redirects() {
    let response = app()
        .oneshot(form_post("/download/png", "recipient_name=Jane"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
