use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Json,
    routing::post,
    Router,
};
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha2::Sha256;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::WebhookEvent;
use crate::services::subscription_service::{event_transition, idempotency_key};

use super::routes::AppState;

type HmacSha256 = Hmac<Sha256>;

pub fn webhook_routes(state: AppState) -> Router {
    Router::new()
        .route("/payment", post(payment_webhook))
        .with_state(state)
}

/// Constant-time check of the hex HMAC-SHA256 signature over the raw body.
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Payment provider callback. The raw body is authenticated before any JSON
/// parsing; the subscription row is only ever changed from here.
pub async fn payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let signature = headers
        .get("x-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing webhook signature".to_string()))?;

    if !verify_signature(&state.webhook_secret, &body, signature) {
        warn!("webhook rejected: signature mismatch");
        return Err(AppError::Unauthorized("invalid webhook signature".to_string()));
    }

    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("malformed webhook payload: {e}")))?;

    let event_name = event
        .event
        .clone()
        .ok_or_else(|| AppError::Validation("webhook payload missing event".to_string()))?;
    let customer_email = event
        .customer
        .as_ref()
        .map(|c| c.email.clone())
        .ok_or_else(|| AppError::Validation("webhook payload missing customer email".to_string()))?;

    // Providers retry deliveries; a key we have seen before is acknowledged
    // without being re-applied. The key and the state transition commit in
    // one transaction, so a failed transition leaves the key unrecorded and
    // the retry is processed normally. Payloads with no derivable key are
    // processed as-is.
    if event_transition(&event_name).is_some() {
        let key = idempotency_key(&event);
        let applied = state
            .subscriptions
            .apply_transition(key.as_deref(), &event)
            .await?;
        if !applied {
            info!(event = %event_name, email = %customer_email, "duplicate webhook delivery skipped");
            return Ok(Json(json!({ "success": true, "message": "already processed" })));
        }
    } else {
        info!(event = %event_name, "unhandled webhook event acknowledged");
    }

    Ok(Json(json!({ "success": true, "message": "webhook processed" })))
}
