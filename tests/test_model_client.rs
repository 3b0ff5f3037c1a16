use cooking_agent::{HttpModelClient, ModelClient, ModelConfig, ModelError, RequestStyle};
use mockito::Matcher;
use serde_json::json;

fn client_for(url: String) -> HttpModelClient {
    let config = ModelConfig {
        api_url: Some(url),
        api_key: Some("test-key".to_string()),
        timeout: 5,
        ..Default::default()
    };
    HttpModelClient::new(&config).unwrap()
}

#[test]
fn test_generate_posts_prompt_with_bearer() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generate")
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"prompt": "hello"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"generated_text": "hi there"}"#)
        .create();

    let client = client_for(format!("{}/generate", server.url()));
    assert!(client.configured());
    assert_eq!(client.generate("hello").unwrap(), "hi there");
    mock.assert();
}

#[test]
fn test_params_merged_into_payload() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generate")
        .match_body(Matcher::Json(
            json!({"prompt": "hello", "max_tokens": 64, "temperature": 0.5}),
        ))
        .with_status(200)
        .with_body(r#"{"choices": [{"text": "ok"}]}"#)
        .create();

    let params = json!({"max_tokens": 64, "temperature": 0.5});
    let client = client_for(format!("{}/generate", server.url()));
    let text = client
        .generate_with_params("hello", params.as_object())
        .unwrap();

    assert_eq!(text, "ok");
    mock.assert();
}

#[test]
fn test_non_success_status_is_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generate")
        .with_status(503)
        .with_body("overloaded")
        .create();

    let client = client_for(format!("{}/generate", server.url()));
    match client.generate("hello") {
        Err(ModelError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    mock.assert();
}

#[test]
fn test_non_json_body_is_error() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/generate")
        .with_status(200)
        .with_body("not json")
        .create();

    let client = client_for(format!("{}/generate", server.url()));
    assert!(matches!(client.generate("hello"), Err(ModelError::Http(_))));
}

#[test]
fn test_connection_refused_is_error() {
    let client = client_for("http://127.0.0.1:1/generate".to_string());
    assert!(matches!(client.generate("hello"), Err(ModelError::Http(_))));
}

#[test]
fn test_generate_github_with_model_path() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/inference/models/gpt-4o")
        .match_header("accept", "application/vnd.github+json")
        .match_header("x-github-api-version", "2022-11-28")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::Json(json!({"input": "hello"})))
        .with_status(200)
        .with_body(r#"{"output": "from github"}"#)
        .create();

    let client = client_for(format!("{}/inference", server.url()));
    let text = client
        .generate_github("hello", Some("/models/gpt-4o"), None)
        .unwrap();

    assert_eq!(text, "from github");
    mock.assert();
}

#[test]
fn test_generate_github_full_endpoint() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat/")
        .match_body(Matcher::Json(json!({"input": "hello"})))
        .with_status(200)
        .with_body(r#"{"result": "direct"}"#)
        .create();

    // trailing slash: the URL is used as-is and the model path is ignored
    let client = client_for(format!("{}/chat/", server.url()));
    let text = client
        .generate_github("hello", Some("models/gpt-4o"), None)
        .unwrap();

    assert_eq!(text, "direct");
    mock.assert();
}

#[test]
fn test_configured_style_used_by_generate() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/base/models/small")
        .match_body(Matcher::Json(json!({"input": "hello"})))
        .with_status(200)
        .with_body(r#"{"text": "styled"}"#)
        .create();

    let client = client_for(format!("{}/base", server.url()))
        .with_style(RequestStyle::github(Some("models/small")));

    assert_eq!(client.generate("hello").unwrap(), "styled");
    mock.assert();
}

#[test]
fn test_no_key_sends_no_authorization() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generate")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"text": "anonymous"}"#)
        .create();

    let config = ModelConfig {
        api_url: Some(format!("{}/generate", server.url())),
        api_key: None,
        timeout: 5,
        ..Default::default()
    };
    let client = HttpModelClient::new(&config).unwrap();

    // not configured for extraction, but a direct call still goes out
    assert!(!client.configured());
    assert_eq!(client.generate("hello").unwrap(), "anonymous");
    mock.assert();
}
