use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::models::UserSubscription;
use crate::services::subscription_service::has_premium_access;

use super::routes::AppState;

pub fn subscription_routes(state: AppState) -> Router {
    Router::new()
        .route("/check", get(check_subscription))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub subscription: Option<UserSubscription>,
    pub has_access: bool,
}

/// Look up the subscription for an email. Lookup failures degrade to a
/// no-access answer so the paywall stays closed instead of erroring.
pub async fn check_subscription(
    State(state): State<AppState>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<CheckResponse>, AppError> {
    if query.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }

    let subscription = match state.subscriptions.find_by_email(&query.email).await {
        Ok(subscription) => subscription,
        Err(e) => {
            error!("subscription lookup failed: {e}");
            None
        }
    };

    let has_access = has_premium_access(subscription.as_ref());
    Ok(Json(CheckResponse {
        subscription,
        has_access,
    }))
}
