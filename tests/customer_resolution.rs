use marketplace_payments::error::OrchestratorError;
use marketplace_payments::gateways::mock::MockGateway;
use marketplace_payments::service::customer_resolver::CustomerResolver;
use std::sync::Arc;

#[tokio::test]
async fn first_resolve_creates_a_scoped_customer() {
    let mock = Arc::new(MockGateway::new("ALWAYS_SUCCESS"));
    let resolver = resolver_with(mock.clone());

    let customer = resolver
        .resolve("acct_1", "pat@example.com", "Pat", "555-0100", Some("pm_1"))
        .await
        .unwrap();

    assert!(customer.id.starts_with("cus_mock_"));
    assert_eq!(mock.customer_count().await, 1);

    let recorded = &mock.customers().await[0];
    assert_eq!(recorded.account_id, "acct_1");
    assert_eq!(recorded.email, "pat@example.com");
    assert_eq!(recorded.payment_method.as_deref(), Some("pm_1"));
}

#[tokio::test]
async fn repeat_resolve_reuses_the_existing_customer() {
    let mock = Arc::new(MockGateway::new("ALWAYS_SUCCESS"));
    let resolver = resolver_with(mock.clone());

    let first = resolver
        .resolve("acct_1", "pat@example.com", "Pat", "555-0100", Some("pm_1"))
        .await
        .unwrap();
    let second = resolver
        .resolve("acct_1", "pat@example.com", "Different Name", "555-0199", None)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(mock.customer_count().await, 1);
}

#[tokio::test]
async fn existing_gateway_customer_short_circuits_creation() {
    let mock = Arc::new(MockGateway::new("ALWAYS_SUCCESS"));
    let seeded = mock.seed_customer("acct_1", "pat@example.com").await;
    let resolver = resolver_with(mock.clone());

    let resolved = resolver
        .resolve("acct_1", "pat@example.com", "Pat", "555-0100", Some("pm_1"))
        .await
        .unwrap();

    assert_eq!(resolved, seeded);
    assert_eq!(mock.customer_count().await, 1);
}

#[tokio::test]
async fn same_email_under_another_account_creates_again() {
    let mock = Arc::new(MockGateway::new("ALWAYS_SUCCESS"));
    let resolver = resolver_with(mock.clone());

    let under_first = resolver
        .resolve("acct_1", "pat@example.com", "Pat", "555-0100", None)
        .await
        .unwrap();
    let under_second = resolver
        .resolve("acct_2", "pat@example.com", "Pat", "555-0100", None)
        .await
        .unwrap();

    assert_ne!(under_first, under_second);
    assert_eq!(mock.customer_count().await, 2);
}

#[tokio::test]
async fn creation_failure_propagates_as_gateway_error() {
    let resolver = resolver_with(Arc::new(MockGateway::new("REJECT_CUSTOMER")));

    let err = resolver
        .resolve("acct_1", "pat@example.com", "Pat", "555-0100", Some("pm_1"))
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestratorError::Gateway(_)));
}

fn resolver_with(gateway: Arc<MockGateway>) -> CustomerResolver {
    CustomerResolver { gateway }
}
