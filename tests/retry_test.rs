//! Throttling retry behavior against an HTTP double

mod support;

use std::time::{Duration, Instant};

use charsiu::prelude::*;
use support::{completion_body, fast_policy, test_client};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn throttled_twice_then_succeeds_with_default_backoff() {
    let server = MockServer::start().await;
    // Two throttles, then success; mocks match in mount order
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit reached"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("finally")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), fast_policy(3));
    let start = Instant::now();
    let response = client
        .chat(vec![ChatMessage::user("Hello").build()])
        .await
        .unwrap();

    assert_eq!(response.content, "finally");
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
    // Two waits at the 30ms default
    assert!(start.elapsed() >= Duration::from_millis(60));
}

#[tokio::test]
async fn advisory_retry_after_is_honored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "1")
                .set_body_string("rate limit reached"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), fast_policy(2));
    let start = Instant::now();
    client
        .chat(vec![ChatMessage::user("Hello").build()])
        .await
        .unwrap();

    // The advisory second outweighs the 30ms default
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn persistent_throttling_exhausts_after_max_retries_plus_one_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit reached"))
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), fast_policy(2));
    let error = client
        .chat(vec![ChatMessage::user("Hello").build()])
        .await
        .unwrap_err();

    match error {
        LlmError::ThrottledExceeded {
            attempts,
            last_wait,
            message,
        } => {
            assert_eq!(attempts, 3);
            assert_eq!(last_wait, Duration::from_millis(30));
            assert!(message.contains("429"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn zero_retries_surfaces_throttling_after_the_initial_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit reached"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), fast_policy(0));
    let error = client
        .chat(vec![ChatMessage::user("Hello").build()])
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        LlmError::ThrottledExceeded { attempts: 1, .. }
    ));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
