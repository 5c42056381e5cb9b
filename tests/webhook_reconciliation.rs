use hmac::{Hmac, Mac};
use marketplace_payments::domain::payment::PaymentRecord;
use marketplace_payments::error::OrchestratorError;
use marketplace_payments::repo::payments_repo::PaymentsRepo;
use marketplace_payments::store::RecordStore;
use marketplace_payments::webhook::reconciler::WebhookReconciler;
use marketplace_payments::webhook::signature::DEFAULT_TOLERANCE_SECS;
use sha2::Sha256;

const SECRET: &str = "whsec_test123secret456";

#[tokio::test]
async fn succeeded_event_updates_only_the_matching_record() {
    let reconciler = reconciler_with_records(&["pi_1", "pi_2"]).await;

    let payload = event_payload("payment_intent.succeeded", "pi_1");
    let ack = reconciler
        .handle(payload.as_bytes(), &signed_header(&payload))
        .await
        .unwrap();

    assert!(ack.received);
    let repo = &reconciler.payments_repo;
    assert_eq!(repo.find("pi_1").await.unwrap().status, "succeeded");
    assert_eq!(repo.find("pi_2").await.unwrap().status, "processing");
}

#[tokio::test]
async fn unknown_intent_acknowledges_without_changes() {
    let reconciler = reconciler_with_records(&["pi_1"]).await;

    let payload = event_payload("payment_intent.succeeded", "pi_ghost");
    let ack = reconciler
        .handle(payload.as_bytes(), &signed_header(&payload))
        .await
        .unwrap();

    assert!(ack.received);
    assert_eq!(
        reconciler.payments_repo.find("pi_1").await.unwrap().status,
        "processing"
    );
}

#[tokio::test]
async fn unrecognized_event_type_acknowledges_without_changes() {
    let reconciler = reconciler_with_records(&["pi_1"]).await;

    let payload = event_payload("payment_intent.payment_failed", "pi_1");
    let ack = reconciler
        .handle(payload.as_bytes(), &signed_header(&payload))
        .await
        .unwrap();

    assert!(ack.received);
    assert_eq!(
        reconciler.payments_repo.find("pi_1").await.unwrap().status,
        "processing"
    );
}

#[tokio::test]
async fn wrong_secret_rejects_before_any_mutation() {
    let reconciler = reconciler_with_records(&["pi_1"]).await;

    let payload = event_payload("payment_intent.succeeded", "pi_1");
    let header = header_for(&payload, "whsec_other");
    let err = reconciler
        .handle(payload.as_bytes(), &header)
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestratorError::Signature(_)));
    assert_eq!(
        reconciler.payments_repo.find("pi_1").await.unwrap().status,
        "processing"
    );
}

#[tokio::test]
async fn tampered_body_rejects() {
    let reconciler = reconciler_with_records(&["pi_1", "pi_2"]).await;

    let signed = event_payload("payment_intent.succeeded", "pi_1");
    let tampered = event_payload("payment_intent.succeeded", "pi_2");
    let err = reconciler
        .handle(tampered.as_bytes(), &signed_header(&signed))
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestratorError::Signature(_)));
    assert_eq!(
        reconciler.payments_repo.find("pi_2").await.unwrap().status,
        "processing"
    );
}

#[tokio::test]
async fn stale_timestamp_rejects() {
    let reconciler = reconciler_with_records(&["pi_1"]).await;

    let payload = event_payload("payment_intent.succeeded", "pi_1");
    let old = chrono::Utc::now().timestamp() - DEFAULT_TOLERANCE_SECS - 60;
    let header = format!(
        "t={},v1={}",
        old,
        compute_signature(payload.as_bytes(), SECRET, old)
    );
    let err = reconciler
        .handle(payload.as_bytes(), &header)
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestratorError::Signature(_)));
}

#[tokio::test]
async fn signed_garbage_body_rejects() {
    let reconciler = reconciler_with_records(&[]).await;

    let payload = "not json at all".to_string();
    let err = reconciler
        .handle(payload.as_bytes(), &signed_header(&payload))
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestratorError::Signature(_)));
}

fn compute_signature(payload: &[u8], secret: &str, timestamp: i64) -> String {
    type HmacSha256 = Hmac<Sha256>;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(format!("{timestamp}.").as_bytes());
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

fn header_for(payload: &str, secret: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    format!(
        "t={},v1={}",
        now,
        compute_signature(payload.as_bytes(), secret, now)
    )
}

fn signed_header(payload: &str) -> String {
    header_for(payload, SECRET)
}

fn event_payload(event_type: &str, intent_id: &str) -> String {
    serde_json::json!({
        "id": "evt_1",
        "type": event_type,
        "data": { "object": { "id": intent_id, "object": "payment_intent" } }
    })
    .to_string()
}

async fn reconciler_with_records(intent_ids: &[&str]) -> WebhookReconciler {
    let repo = PaymentsRepo {
        store: RecordStore::new(),
    };
    for id in intent_ids {
        repo.insert(PaymentRecord {
            payment_intent_id: id.to_string(),
            amount_minor: 5000,
            seller_account_id: "acct_seller".to_string(),
            status: "processing".to_string(),
        })
        .await
        .unwrap();
    }

    WebhookReconciler {
        payments_repo: repo,
        signing_secret: SECRET.to_string(),
        tolerance_secs: DEFAULT_TOLERANCE_SECS,
    }
}
