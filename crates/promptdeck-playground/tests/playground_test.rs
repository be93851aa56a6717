//! Playground client tests that need no network: configuration
//! predicates, the missing-credential fast path, and wire-shape parsing.

use promptdeck_core::config::PlaygroundConfig;
use promptdeck_playground::{
    ChatMessage, ChatRequest, ChatResponse, CodestralClient, FimRequest, FimResponse,
    OpenRouterClient, FEATURED_MODELS,
};

fn config_with_keys(chat: Option<&str>, fim: Option<&str>) -> PlaygroundConfig {
    PlaygroundConfig {
        chat_api_key: chat.map(str::to_string),
        fim_api_key: fim.map(str::to_string),
        ..PlaygroundConfig::default()
    }
}

#[test]
fn is_configured_requires_a_nonempty_key() {
    let chat = OpenRouterClient::from_config(&config_with_keys(None, None)).unwrap();
    assert!(!chat.is_configured());

    let chat = OpenRouterClient::from_config(&config_with_keys(Some(""), None)).unwrap();
    assert!(!chat.is_configured());

    let chat = OpenRouterClient::from_config(&config_with_keys(Some("sk-test"), None)).unwrap();
    assert!(chat.is_configured());

    let fim = CodestralClient::from_config(&config_with_keys(None, Some("cs-test"))).unwrap();
    assert!(fim.is_configured());
}

#[tokio::test]
async fn missing_chat_credential_fails_before_any_request() {
    let client = OpenRouterClient::from_config(&config_with_keys(None, None)).unwrap();
    let request = ChatRequest::new("openai/gpt-4o", vec![ChatMessage::user("hello")]);

    let err = client.chat_completion(&request).await.unwrap_err();
    assert!(err.to_string().contains("OpenRouter"));
}

#[tokio::test]
async fn missing_fim_credential_fails_before_any_request() {
    let client = CodestralClient::from_config(&config_with_keys(None, None)).unwrap();

    let err = client
        .code_completion(&FimRequest::new("fn main() {"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Codestral"));
}

#[test]
fn chat_response_surfaces_first_choice() {
    let body = r#"{
        "id": "gen-1",
        "model": "openai/gpt-4o",
        "choices": [
            {"message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
            {"message": {"role": "assistant", "content": "second"}}
        ],
        "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16}
    }"#;
    let response: ChatResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.first_content(), Some("first"));
    assert_eq!(response.usage.unwrap().total_tokens, 16);

    let empty: ChatResponse =
        serde_json::from_str(r#"{"id":"gen-2","model":"m","choices":[]}"#).unwrap();
    assert_eq!(empty.first_content(), None);
}

#[test]
fn fim_response_surfaces_first_text() {
    let body = r#"{
        "id": "cmpl-1",
        "model": "codestral-latest",
        "choices": [{"text": "    println!(\"hi\");\n}", "finish_reason": "stop"}]
    }"#;
    let response: FimResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.first_text(), Some("    println!(\"hi\");\n}"));
}

#[test]
fn every_featured_model_names_a_provider() {
    assert_eq!(FEATURED_MODELS.len(), 9);
    for model in FEATURED_MODELS {
        assert!(!model.id.is_empty());
        assert!(!model.provider.is_empty());
    }
}
