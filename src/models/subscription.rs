use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "subscription_tier", rename_all = "snake_case")]
pub enum SubscriptionTier {
    Free,
    Basic,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "subscription_status", rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Refunded,
    Expired,
}

/// Persisted subscription record, keyed by unique email. The server-side row
/// is the sole authority for access decisions; no client-supplied tier flag
/// is ever trusted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSubscription {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub tier: SubscriptionTier,
    pub status: SubscriptionStatus,
    pub order_id: Option<String>,
    pub product_id: Option<String>,
    pub payment_amount: Option<f64>,
    pub payment_method: Option<String>,
    pub subscription_id: Option<String>,
    pub subscription_plan: Option<String>,
    pub activated_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub refunded_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment provider webhook payload. `event` and `customer` are optional at
/// the serde level so the handler can reject incomplete payloads with a 400
/// instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event: Option<String>,
    /// Provider event id, used as the idempotency key when present.
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    pub customer: Option<WebhookCustomer>,
    pub payment: Option<WebhookPayment>,
    #[serde(default)]
    pub subscription: Option<WebhookSubscription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookCustomer {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayment {
    pub amount: f64,
    pub status: String,
    pub method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookSubscription {
    pub id: String,
    pub status: String,
    pub plan: String,
}
