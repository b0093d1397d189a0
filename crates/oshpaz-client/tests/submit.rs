// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Submission client tests against a mock intake endpoint.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use oshpaz_client::{
    FallbackTransport, PendingOrder, PendingQueue, SubmitClient, SubmitOutcome,
};
use oshpaz_core::{OrderDraft, OshpazError};
use oshpaz_test_utils::sample_draft;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_queue(server: &MockServer, dir: &TempDir) -> (SubmitClient, PendingQueue) {
    let queue = PendingQueue::new(dir.path().join("pending.json"));
    let client = SubmitClient::new(server.uri(), queue.clone())
        .unwrap()
        .with_retry_policy(3, Duration::from_millis(20));
    (client, queue)
}

struct RecordingFallback {
    calls: AtomicUsize,
}

#[async_trait]
impl FallbackTransport for RecordingFallback {
    async fn deliver(&self, _draft: &OrderDraft) -> Result<(), OshpazError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(OshpazError::Channel {
            message: "fallback unavailable".into(),
            source: None,
        })
    }
}

#[tokio::test]
async fn delivered_on_first_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "orderId": "abc-123"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (client, queue) = client_with_queue(&server, &dir);

    let outcome = client.submit(&sample_draft()).await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Delivered {
            order_id: "abc-123".into()
        }
    );
    assert!(queue.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn exhausted_retries_park_the_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"success": false, "error": "Failed to save order"})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (client, queue) = client_with_queue(&server, &dir);

    let started = Instant::now();
    let outcome = client.submit(&sample_draft()).await.unwrap();
    // Waits of 1x and 2x the base delay separate the three attempts.
    assert!(started.elapsed() >= Duration::from_millis(60));
    assert_eq!(outcome, SubmitOutcome::Queued);

    let entries = queue.all().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].retries, 0);
    assert_eq!(entries[0].draft.name, "Ali");
}

#[tokio::test]
async fn fallback_gets_one_try_and_cannot_change_the_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let queue = PendingQueue::new(dir.path().join("pending.json"));
    let fallback = Arc::new(RecordingFallback {
        calls: AtomicUsize::new(0),
    });
    let client = SubmitClient::new(server.uri(), queue.clone())
        .unwrap()
        .with_retry_policy(2, Duration::from_millis(5))
        .with_fallback(fallback.clone());

    let outcome = client.submit(&sample_draft()).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Queued);
    assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
    assert_eq!(queue.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn reconciliation_keeps_only_the_failed_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_partial_json(json!({"name": "Birinchi"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "orderId": "ok-1"})),
        )
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(5)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (client, queue) = client_with_queue(&server, &dir);

    let mut first = sample_draft();
    first.name = "Birinchi".into();
    let mut second = sample_draft();
    second.name = "Ikkinchi".into();
    queue.push(PendingOrder::park(first)).await.unwrap();
    queue.push(PendingOrder::park(second)).await.unwrap();

    let report = client.reconcile().await.unwrap();
    assert_eq!(report.delivered, 1);
    assert_eq!(report.remaining, 1);

    let entries = queue.all().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].draft.name, "Ikkinchi");

    // An empty queue reconciles to a no-op.
    queue.replace(&[]).await.unwrap();
    let report = client.reconcile().await.unwrap();
    assert_eq!(report.delivered, 0);
    assert_eq!(report.remaining, 0);
}
