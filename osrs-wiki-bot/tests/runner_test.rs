//! End-to-end tests for [`build_query_service`] and [`execute_query`] against a mockito wiki.
//!
//! Exercises the real `MediaWikiClient` through the service without Telegram or OpenAI.

use mockito::Matcher;
use osrs_wiki_bot::{build_query_service, execute_query, BotConfig, QueryCommand, ResponseStatus};

fn config(wiki_base_url: String) -> BotConfig {
    BotConfig {
        bot_token: None,
        telegram_api_url: None,
        openai_api_key: None,
        openai_base_url: "https://api.openai.com/v1".to_string(),
        ai_model: "gpt-3.5-turbo".to_string(),
        wiki_base_url,
        http_timeout_secs: 5,
        log_file: "logs/test.log".to_string(),
    }
}

/// **Test: A search query goes through the real client and comes back formatted.**
#[tokio::test]
async fn test_search_through_real_client() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("list".into(), "search".into()),
            Matcher::UrlEncoded("srsearch".into(), "abyssal whip".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"query":{"search":[{"title":"Abyssal whip","snippet":"The <span class=\"searchmatch\">abyssal</span> whip"}]}}"#,
        )
        .create_async()
        .await;

    let service = build_query_service(&config(server.url())).unwrap();
    assert!(!service.ai_enabled());

    let response = execute_query(
        &service,
        &QueryCommand::Search {
            query: vec!["abyssal".into(), "whip".into()],
        },
    )
    .await;

    mock.assert_async().await;
    assert_eq!(response.status, ResponseStatus::Ok);
    assert_eq!(response.fields[0].name, "1. Abyssal whip");
    assert_eq!(response.fields[0].value, "The abyssal whip");
    assert_eq!(
        response.fields[0].url.as_deref(),
        Some(format!("{}/Abyssal_whip", server.url()).as_str())
    );
}

/// **Test: A wiki answering 500 yields a TransportFailure response, not a panic or error.**
#[tokio::test]
async fn test_wiki_outage_is_transport_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let service = build_query_service(&config(server.url())).unwrap();
    let response = execute_query(&service, &QueryCommand::Random).await;

    assert_eq!(response.status, ResponseStatus::TransportFailure);
}

/// **Test: With an API key configured the AI flow is enabled.**
#[tokio::test]
async fn test_openai_key_enables_ai() {
    let mut cfg = config("https://oldschool.runescape.wiki".to_string());
    cfg.openai_api_key = Some("sk-test-key-1234567890".to_string());

    let service = build_query_service(&cfg).unwrap();
    assert!(service.ai_enabled());
}
