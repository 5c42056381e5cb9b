use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: Option<EventData>,
}

#[derive(Debug, Deserialize)]
pub struct EventData {
    pub object: EventObject,
}

#[derive(Debug, Deserialize)]
pub struct EventObject {
    #[serde(default)]
    pub id: Option<String>,
}

impl WebhookEvent {
    pub fn object_id(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.object.id.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PaymentIntentSucceeded,
    Other,
}

impl EventKind {
    pub fn from_type(event_type: &str) -> Self {
        match event_type {
            "payment_intent.succeeded" => EventKind::PaymentIntentSucceeded,
            _ => EventKind::Other,
        }
    }
}
