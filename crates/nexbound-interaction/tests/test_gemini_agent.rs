use mockito::{Matcher, Server};
use nexbound_core::config::DraftingSettings;
use nexbound_core::draft::{DraftFormFields, DraftingService, Tone};
use nexbound_interaction::{
    EMPTY_RESPONSE_MESSAGE, GENERATION_FAILED_MESSAGE, GeminiDraftingAgent,
    MISSING_API_KEY_MESSAGE,
};
use reqwest::Client;
use tokio::net::TcpListener;

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn request() -> DraftFormFields {
    DraftFormFields::new("Jane", "Acme", "Faster outbound", Tone::Casual)
}

/// Agent talking to `host` directly, ignoring any proxy in the environment.
fn local_agent(host: &str) -> GeminiDraftingAgent {
    let client = Client::builder().no_proxy().build().unwrap();
    let settings = DraftingSettings {
        base_url: format!("{host}/v1beta/models"),
        ..DraftingSettings::default()
    };
    GeminiDraftingAgent::with_client(client, Some("test-key".into()), &settings)
}

#[tokio::test]
async fn test_missing_key_returns_fixed_message() {
    let agent = GeminiDraftingAgent::new(None, &DraftingSettings::default());
    assert_eq!(agent.generate_draft(&request()).await, MISSING_API_KEY_MESSAGE);
}

#[tokio::test]
async fn test_successful_generation_returns_text_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Recipient Name: Jane".into()),
            Matcher::Regex("Tone: casual".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Subject: Quick idea for Acme\n\nHi Jane,"}]}}]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let agent = local_agent(&server.url());
    let draft = agent.generate_draft(&request()).await;

    assert_eq!(draft, "Subject: Quick idea for Acme\n\nHi Jane,");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_becomes_generic_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"code":500,"message":"boom","status":"INTERNAL"}}"#)
        .create_async()
        .await;

    let agent = local_agent(&server.url());
    assert_eq!(agent.generate_draft(&request()).await, GENERATION_FAILED_MESSAGE);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_candidates_report_failed_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[]}"#)
        .create_async()
        .await;

    let agent = local_agent(&server.url());
    assert_eq!(agent.generate_draft(&request()).await, EMPTY_RESPONSE_MESSAGE);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_endpoint_becomes_generic_message() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let agent = local_agent(&format!("http://{addr}"));
    assert_eq!(agent.generate_draft(&request()).await, GENERATION_FAILED_MESSAGE);
}
