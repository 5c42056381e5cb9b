#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub stripe_secret_key: String,
    pub stripe_webhook_secret: String,
    pub stripe_base_url: String,
    pub gateway_timeout_ms: u64,
    pub payment_amount_minor: i64,
    pub platform_fee_minor: i64,
    pub payment_currency: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY").unwrap_or_default(),
            stripe_webhook_secret: std::env::var("STRIPE_WEBHOOK_SECRET").unwrap_or_default(),
            stripe_base_url: std::env::var("STRIPE_BASE_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            gateway_timeout_ms: std::env::var("GATEWAY_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(10_000),
            payment_amount_minor: std::env::var("PAYMENT_AMOUNT_MINOR")
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .unwrap_or(5000),
            platform_fee_minor: std::env::var("PLATFORM_FEE_MINOR")
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .unwrap_or(500),
            payment_currency: std::env::var("PAYMENT_CURRENCY")
                .unwrap_or_else(|_| "usd".to_string()),
        }
    }
}
