use std::fs;

use super::*;

struct TestServer {
    base: String,
    _dir: tempfile::TempDir,
}

async fn serve_site() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("recipes")).unwrap();
    fs::create_dir_all(root.join("assets/i18n")).unwrap();
    fs::write(root.join("index.html"), "<h1>Wulkan Kibo</h1>").unwrap();
    fs::write(root.join("recipes/index.html"), "<h1>Recipes</h1>").unwrap();
    fs::write(root.join("about.html"), "<p>African recipes and cooking videos.</p>\n".repeat(100)).unwrap();
    fs::write(root.join("assets/i18n/pl.json"), r#"{"nav":{"home":"Strona główna"}}"#).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(root);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    TestServer { base: format!("http://{addr}"), _dir: dir }
}

#[tokio::test]
async fn healthz_reports_ok() {
    let server = serve_site().await;
    let resp = reqwest::get(format!("{}/healthz", server.base)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn serves_index_for_directories() {
    let server = serve_site().await;
    let root = reqwest::get(format!("{}/", server.base)).await.unwrap().text().await.unwrap();
    assert_eq!(root, "<h1>Wulkan Kibo</h1>");
    let recipes = reqwest::get(format!("{}/recipes/", server.base)).await.unwrap().text().await.unwrap();
    assert_eq!(recipes, "<h1>Recipes</h1>");
}

#[tokio::test]
async fn serves_dictionaries_as_json() {
    let server = serve_site().await;
    let resp = reqwest::get(format!("{}/assets/i18n/pl.json", server.base)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let content_type = resp.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("application/json"), "{content_type}");
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["nav"]["home"], "Strona główna");
}

#[tokio::test]
async fn missing_files_are_not_found() {
    let server = serve_site().await;
    let resp = reqwest::get(format!("{}/assets/i18n/de.json", server.base)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn compresses_when_asked() {
    let server = serve_site().await;
    let resp = reqwest::Client::new()
        .get(format!("{}/about.html", server.base))
        .header(reqwest::header::ACCEPT_ENCODING, "gzip")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers().get(reqwest::header::CONTENT_ENCODING).map(|v| v.to_str().unwrap()), Some("gzip"));
}
