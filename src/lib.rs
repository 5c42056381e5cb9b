pub mod config;
pub mod error;
pub mod store;
pub mod domain {
    pub mod payment;
    pub mod seller;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod customers;
        pub mod ops;
        pub mod payments;
        pub mod sellers;
        pub mod webhook;
    }
}
pub mod repo {
    pub mod payments_repo;
    pub mod sellers_repo;
}
pub mod service {
    pub mod customer_resolver;
    pub mod onboarding;
    pub mod payment_service;
}
pub mod webhook {
    pub mod event;
    pub mod reconciler;
    pub mod signature;
}

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub onboarding: service::onboarding::SellerOnboarding,
    pub customer_resolver: service::customer_resolver::CustomerResolver,
    pub payment_service: service::payment_service::PaymentService,
    pub reconciler: webhook::reconciler::WebhookReconciler,
}

/// The full HTTP surface over `state`. The binary serves exactly this router,
/// and the HTTP tests drive it directly, so there is one route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::ops::health))
        .route("/api/sellers", post(http::handlers::sellers::create_seller))
        .route("/api/sellers/:id", get(http::handlers::sellers::get_seller))
        .route(
            "/api/attach-payment-method",
            post(http::handlers::customers::attach_payment_method),
        )
        .route("/api/payment", post(http::handlers::payments::create_payment))
        .route("/webhook", post(http::handlers::webhook::handle_delivery))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
