
use company_scout::headlines::{HeadlineClient, HeadlineQuery};
use company_scout::outcome::ErrorKind;
use serde_json::json;
use std::sync::atomic::Ordering;
use test_utils::{MockNewsApi, acme_news_body};

fn client_with(api_key: Option<&str>, mock: MockNewsApi) -> HeadlineClient {
    HeadlineClient::with_backend(api_key.map(str::to_string), Box::new(mock))
}

#[tokio::test]
async fn test_fetch_headlines_returns_titles_in_rank_order() {
    let client = client_with(Some("news-key"), MockNewsApi::returning(acme_news_body()));

    let headlines = client
        .fetch_headlines(&HeadlineQuery::new("Acme Corp"))
        .await
        .expect("fixture should parse");

    assert_eq!(
        headlines,
        vec![
            "Acme Q1 Earnings",
            "Acme Launches Widget",
            "Acme CEO Interview"
        ]
    );
}

#[tokio::test]
async fn test_zero_results_is_success_not_error() {
    let client = client_with(
        Some("news-key"),
        MockNewsApi::returning(json!({"news_results": []})),
    );

    let headlines = client
        .fetch_headlines(&HeadlineQuery::new("Obscure Sole Proprietor"))
        .await
        .expect("empty news is a valid outcome");

    assert!(headlines.is_empty());
}

#[tokio::test]
async fn test_absent_key_fails_without_network_io() {
    let mock = MockNewsApi::returning(acme_news_body());
    let counter = mock.counter();
    let client = client_with(None, mock);

    let err = client
        .fetch_headlines(&HeadlineQuery::new("Acme Corp"))
        .await
        .expect_err("no credential configured");

    assert_eq!(err.kind, ErrorKind::Config);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_blank_key_fails_without_network_io() {
    let mock = MockNewsApi::returning(acme_news_body());
    let counter = mock.counter();
    let client = client_with(Some("   "), mock);

    let err = client
        .fetch_headlines(&HeadlineQuery::new("Acme Corp"))
        .await
        .expect_err("blank credential");

    assert_eq!(err.kind, ErrorKind::Config);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_transport_failure_maps_to_provider_error() {
    let mock = MockNewsApi::failing("news search request failed with status 500: upstream down");
    let counter = mock.counter();
    let client = client_with(Some("news-key"), mock);

    let err = client
        .fetch_headlines(&HeadlineQuery::new("Acme Corp"))
        .await
        .expect_err("transport failed");

    assert_eq!(err.kind, ErrorKind::Provider);
    assert!(err.message.contains("500"));
    // Exactly one attempt: no internal retry
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_malformed_body_maps_to_provider_error() {
    let client = client_with(
        Some("news-key"),
        MockNewsApi::returning(json!({"news_results": "not a list"})),
    );

    let err = client
        .fetch_headlines(&HeadlineQuery::new("Acme Corp"))
        .await
        .expect_err("malformed payload");

    assert_eq!(err.kind, ErrorKind::Provider);
}

#[tokio::test]
async fn test_result_is_capped_client_side() {
    // Provider ignores the requested cap and sends five items
    let body = json!({
        "news_results": [
            {"title": "one"}, {"title": "two"}, {"title": "three"},
            {"title": "four"}, {"title": "five"},
        ]
    });
    let client = client_with(Some("news-key"), MockNewsApi::returning(body));

    let headlines = client
        .fetch_headlines(&HeadlineQuery::new("Acme Corp").with_max_results(3))
        .await
        .expect("fixture should parse");

    assert_eq!(headlines, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_untitled_items_keep_their_position() {
    let body = json!({
        "news_results": [
            {"title": "first"},
            {"link": "https://news.example/untitled"},
            {"title": "third"},
        ]
    });
    let client = client_with(Some("news-key"), MockNewsApi::returning(body));

    let headlines = client
        .fetch_headlines(&HeadlineQuery::new("Acme Corp"))
        .await
        .expect("fixture should parse");

    assert_eq!(headlines, vec!["first", "", "third"]);
}

#[tokio::test]
async fn test_repeated_calls_with_same_fixture_are_identical() {
    let mock = MockNewsApi::returning(acme_news_body());
    let counter = mock.counter();
    let client = client_with(Some("news-key"), mock);
    let query = HeadlineQuery::new("Acme Corp");

    let first = client.fetch_headlines(&query).await.expect("first call");
    let second = client.fetch_headlines(&query).await.expect("second call");

    assert_eq!(first, second);
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}
