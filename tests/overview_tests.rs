
use company_scout::outcome::ErrorKind;
use company_scout::overview::{OverviewClient, OverviewQuery};
use serde_json::json;
use std::sync::atomic::Ordering;
use test_utils::{MockCompletionApi, overview_body};

const MAX_TOKENS: u32 = 256;

fn client_with(api_key: Option<&str>, mock: MockCompletionApi) -> OverviewClient {
    OverviewClient::with_backend(api_key.map(str::to_string), MAX_TOKENS, Box::new(mock))
}

#[tokio::test]
async fn test_generate_overview_trims_the_first_candidate() {
    let client = client_with(
        Some("ai-key"),
        MockCompletionApi::returning(overview_body("  Acme is a widget manufacturer.  ")),
    );

    let overview = client
        .generate_overview(&OverviewQuery::new("Acme Corp"))
        .await
        .expect("fixture should parse");

    assert_eq!(overview, "Acme is a widget manufacturer.");
}

#[tokio::test]
async fn test_no_candidates_is_an_empty_success() {
    let client = client_with(
        Some("ai-key"),
        MockCompletionApi::returning(json!({"choices": []})),
    );

    let overview = client
        .generate_overview(&OverviewQuery::new("Acme Corp"))
        .await
        .expect("empty completion is a valid outcome");

    assert_eq!(overview, "");
}

#[tokio::test]
async fn test_absent_key_fails_without_network_io() {
    let mock = MockCompletionApi::returning(overview_body("unused"));
    let counter = mock.counter();
    let client = client_with(None, mock);

    let err = client
        .generate_overview(&OverviewQuery::new("Acme Corp"))
        .await
        .expect_err("no credential configured");

    assert_eq!(err.kind, ErrorKind::Config);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_transport_failure_maps_to_provider_error() {
    let mock = MockCompletionApi::failing("completion request failed with status 429: rate limited");
    let counter = mock.counter();
    let client = client_with(Some("ai-key"), mock);

    let err = client
        .generate_overview(&OverviewQuery::new("Acme Corp"))
        .await
        .expect_err("transport failed");

    assert_eq!(err.kind, ErrorKind::Provider);
    assert!(err.message.contains("429"));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_malformed_choices_maps_to_provider_error() {
    let client = client_with(
        Some("ai-key"),
        MockCompletionApi::returning(json!({"choices": {"text": "nope"}})),
    );

    let err = client
        .generate_overview(&OverviewQuery::new("Acme Corp"))
        .await
        .expect_err("malformed payload");

    assert_eq!(err.kind, ErrorKind::Provider);
}

#[tokio::test]
async fn test_prompt_names_the_company_and_cap_is_forwarded() {
    let mock = MockCompletionApi::returning(overview_body("Acme overview."));
    let prompt_probe = mock.prompt_probe();
    let max_tokens_probe = mock.max_tokens_probe();
    let client = client_with(Some("ai-key"), mock);

    client
        .generate_overview(&OverviewQuery::new("Acme Corp"))
        .await
        .expect("fixture should parse");

    let prompt = prompt_probe.lock().clone().expect("one call was made");
    assert!(prompt.contains("Acme Corp"));
    assert!(prompt.contains("industry"));
    assert!(prompt.contains("headquarter"));
    assert_eq!(*max_tokens_probe.lock(), Some(MAX_TOKENS));
}
