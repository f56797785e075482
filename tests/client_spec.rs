//! End-to-end: the HTTP client and page orchestrator against a live server.

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordmark::api::create_router;
use wordmark::client::*;
use wordmark::config::{ProviderConfig, ServerConfig};

#[derive(Default)]
struct MemoryClipboard {
    text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Upstreams that always serve `word` with a single noun definition.
async fn upstream(word: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/word"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([word])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/v2/entries/en/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "word": word,
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{"definition": "a test word"}]
            }]
        }])))
        .mount(&server)
        .await;
    server
}

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_server(config: ServerConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, create_router(config))
            .await
            .expect("server failed");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn http_api_round_trips_history_cookie() {
    let upstream = upstream("lantern").await;
    let base = spawn_server(ServerConfig::development(ProviderConfig::with_base_url(
        &upstream.uri(),
    )))
    .await;
    let api = HttpWordmarkApi::new(base).expect("Failed to build client");

    assert!(api.read_history().await.unwrap().is_empty());

    let record = api.fetch_word().await.unwrap();
    assert_eq!(record.word, "lantern");
    assert_eq!(record.meanings.len(), 1);

    api.append_history(&[wordmark::models::HistoryEntry::new("lantern", 42)])
        .await
        .unwrap();

    let history = api.read_history().await.unwrap();
    assert_eq!(history, vec![wordmark::models::HistoryEntry::new("lantern", 42)]);
}

#[tokio::test]
async fn page_load_renders_word_and_remembers_it() {
    let upstream = upstream("lantern").await;
    let base = spawn_server(ServerConfig::development(ProviderConfig::with_base_url(
        &upstream.uri(),
    )))
    .await;
    let api = HttpWordmarkApi::new(base).expect("Failed to build client");
    let mut page = Orchestrator::new(api, MemoryClipboard::default());

    page.load().await;
    assert_eq!(page.view().phase, Phase::Ready);
    assert_eq!(page.view().history.len(), 1);

    page.new_word().await;
    let view = page.view();
    assert_eq!(view.phase, Phase::Ready);
    assert_eq!(view.history.len(), 2);
    assert!(view.history.iter().all(|entry| entry.word == "lantern"));

    let rendered = render(view, std::time::Instant::now());
    assert!(rendered.contains("lantern"));
    assert!(rendered.contains("a test word"));
}

#[tokio::test]
async fn page_load_survives_failing_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/word"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;
    let base = spawn_server(ServerConfig::development(ProviderConfig::with_base_url(
        &upstream.uri(),
    )))
    .await;
    let api = HttpWordmarkApi::new(base).expect("Failed to build client");
    let mut page = Orchestrator::new(api, MemoryClipboard::default());

    page.load().await;

    let view = page.view();
    assert_eq!(view.phase, Phase::Ready);
    assert!(view.word.is_none());
    assert!(view.history.is_empty());
}
