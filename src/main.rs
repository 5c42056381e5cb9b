use marketplace_payments::config::AppConfig;
use marketplace_payments::gateways::stripe::StripeGateway;
use marketplace_payments::gateways::ConnectGateway;
use marketplace_payments::repo::payments_repo::PaymentsRepo;
use marketplace_payments::repo::sellers_repo::SellersRepo;
use marketplace_payments::service::customer_resolver::CustomerResolver;
use marketplace_payments::service::onboarding::SellerOnboarding;
use marketplace_payments::service::payment_service::{PaymentPolicy, PaymentService};
use marketplace_payments::store::RecordStore;
use marketplace_payments::webhook::reconciler::WebhookReconciler;
use marketplace_payments::webhook::signature::DEFAULT_TOLERANCE_SECS;
use marketplace_payments::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let store = RecordStore::new();
    let sellers_repo = SellersRepo {
        store: store.clone(),
    };
    let payments_repo = PaymentsRepo {
        store: store.clone(),
    };

    let gateway: Arc<dyn ConnectGateway> = Arc::new(StripeGateway {
        base_url: cfg.stripe_base_url.clone(),
        secret_key: cfg.stripe_secret_key.clone(),
        timeout_ms: cfg.gateway_timeout_ms,
        client: reqwest::Client::new(),
    });
    tracing::info!("connect gateway: {}", gateway.name());

    let onboarding = SellerOnboarding {
        sellers_repo,
        gateway: gateway.clone(),
    };
    let customer_resolver = CustomerResolver {
        gateway: gateway.clone(),
    };
    let payment_service = PaymentService {
        payments_repo: payments_repo.clone(),
        resolver: customer_resolver.clone(),
        gateway: gateway.clone(),
        policy: PaymentPolicy {
            amount_minor: cfg.payment_amount_minor,
            application_fee_minor: cfg.platform_fee_minor,
            currency: cfg.payment_currency.clone(),
        },
    };
    let reconciler = WebhookReconciler {
        payments_repo,
        signing_secret: cfg.stripe_webhook_secret.clone(),
        tolerance_secs: DEFAULT_TOLERANCE_SECS,
    };

    let state = AppState {
        onboarding,
        customer_resolver,
        payment_service,
        reconciler,
    };

    let app = marketplace_payments::router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
