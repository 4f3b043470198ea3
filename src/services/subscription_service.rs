use anyhow::{anyhow, Result};
use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use tracing::info;

use crate::models::{
    SubscriptionStatus, SubscriptionTier, UserSubscription, WebhookCustomer, WebhookEvent,
};

/// Premium content requires an active premium subscription; every other
/// tier/status combination is locked out.
pub fn has_premium_access(subscription: Option<&UserSubscription>) -> bool {
    subscription.map_or(false, |s| {
        s.tier == SubscriptionTier::Premium && s.status == SubscriptionStatus::Active
    })
}

/// Tier/status transition for a payment event, or None when the event is
/// unrecognized and must be acknowledged without touching state.
pub fn event_transition(event: &str) -> Option<(SubscriptionTier, SubscriptionStatus)> {
    match event {
        "order.paid" => Some((SubscriptionTier::Premium, SubscriptionStatus::Active)),
        "order.refunded" => Some((SubscriptionTier::Free, SubscriptionStatus::Refunded)),
        "subscription.cancelled" => Some((SubscriptionTier::Free, SubscriptionStatus::Cancelled)),
        _ => None,
    }
}

/// Key used for webhook idempotency. Providers that omit an event id fall
/// back to the order id paired with the event name.
pub fn idempotency_key(event: &WebhookEvent) -> Option<String> {
    if let Some(id) = event.event_id.as_deref() {
        return Some(id.to_string());
    }
    match (event.order_id.as_deref(), event.event.as_deref()) {
        (Some(order_id), Some(name)) => Some(format!("{order_id}:{name}")),
        _ => None,
    }
}

#[derive(Clone)]
pub struct SubscriptionService {
    db: PgPool,
}

impl SubscriptionService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserSubscription>> {
        let subscription = sqlx::query_as::<_, UserSubscription>(
            "SELECT * FROM subscriptions WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(subscription)
    }

    /// Apply a recognized event together with its idempotency key in a single
    /// transaction. Returns false when the key was already recorded (the
    /// caller acknowledges without re-applying). A failed transition rolls
    /// the key back too, so the provider's retry is processed normally.
    pub async fn apply_transition(
        &self,
        event_key: Option<&str>,
        event: &WebhookEvent,
    ) -> Result<bool> {
        let event_name = event
            .event
            .as_deref()
            .ok_or_else(|| anyhow!("webhook event missing event name"))?;

        let mut tx = self.db.begin().await?;

        if let Some(key) = event_key {
            let inserted = sqlx::query(
                "INSERT INTO webhook_events (event_key, received_at) VALUES ($1, $2)
                 ON CONFLICT (event_key) DO NOTHING",
            )
            .bind(key)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

            if inserted.rows_affected() == 0 {
                return Ok(false);
            }
        }

        let customer = event
            .customer
            .as_ref()
            .ok_or_else(|| anyhow!("webhook event missing customer"))?;

        match event_name {
            "order.paid" => Self::activate_premium(&mut tx, event, customer).await?,
            "order.refunded" => Self::mark_refunded(&mut tx, &customer.email).await?,
            "subscription.cancelled" => Self::mark_cancelled(&mut tx, &customer.email).await?,
            other => return Err(anyhow!("unrecognized webhook event '{other}'")),
        }

        tx.commit().await?;

        info!(event = %event_name, email = %customer.email, "subscription transition applied");
        Ok(true)
    }

    /// Upsert the subscription row for a confirmed payment.
    async fn activate_premium(
        conn: &mut PgConnection,
        event: &WebhookEvent,
        customer: &WebhookCustomer,
    ) -> Result<()> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO subscriptions (
                email, name, phone, tier, status,
                order_id, product_id, payment_amount, payment_method,
                subscription_id, subscription_plan,
                activated_at, created_at, updated_at
            )
            VALUES ($1, $2, $3, 'premium', 'active', $4, $5, $6, $7, $8, $9, $10, $10, $10)
            ON CONFLICT (email) DO UPDATE SET
                name = EXCLUDED.name,
                phone = EXCLUDED.phone,
                tier = 'premium',
                status = 'active',
                order_id = EXCLUDED.order_id,
                product_id = EXCLUDED.product_id,
                payment_amount = EXCLUDED.payment_amount,
                payment_method = EXCLUDED.payment_method,
                subscription_id = EXCLUDED.subscription_id,
                subscription_plan = EXCLUDED.subscription_plan,
                activated_at = EXCLUDED.activated_at,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&customer.email)
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&event.order_id)
        .bind(&event.product_id)
        .bind(event.payment.as_ref().map(|p| p.amount))
        .bind(event.payment.as_ref().map(|p| p.method.clone()))
        .bind(event.subscription.as_ref().map(|s| s.id.clone()))
        .bind(event.subscription.as_ref().map(|s| s.plan.clone()))
        .bind(now)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    async fn mark_refunded(conn: &mut PgConnection, email: &str) -> Result<()> {
        let now = Utc::now();
        sqlx::query(
            "UPDATE subscriptions
             SET tier = 'free', status = 'refunded', refunded_at = $2, updated_at = $2
             WHERE email = $1",
        )
        .bind(email)
        .bind(now)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    async fn mark_cancelled(conn: &mut PgConnection, email: &str) -> Result<()> {
        let now = Utc::now();
        sqlx::query(
            "UPDATE subscriptions
             SET tier = 'free', status = 'cancelled', cancelled_at = $2, updated_at = $2
             WHERE email = $1",
        )
        .bind(email)
        .bind(now)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(tier: SubscriptionTier, status: SubscriptionStatus) -> UserSubscription {
        let now = Utc::now();
        UserSubscription {
            email: "maria@example.com".to_string(),
            name: "Maria".to_string(),
            phone: None,
            tier,
            status,
            order_id: None,
            product_id: None,
            payment_amount: None,
            payment_method: None,
            subscription_id: None,
            subscription_plan: None,
            activated_at: None,
            cancelled_at: None,
            refunded_at: None,
            expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn premium_access_requires_premium_and_active() {
        assert!(has_premium_access(Some(&subscription(
            SubscriptionTier::Premium,
            SubscriptionStatus::Active
        ))));
        assert!(!has_premium_access(Some(&subscription(
            SubscriptionTier::Premium,
            SubscriptionStatus::Refunded
        ))));
        assert!(!has_premium_access(Some(&subscription(
            SubscriptionTier::Free,
            SubscriptionStatus::Active
        ))));
        assert!(!has_premium_access(None));
    }

    #[test]
    fn transitions_cover_known_events_only() {
        assert_eq!(
            event_transition("order.paid"),
            Some((SubscriptionTier::Premium, SubscriptionStatus::Active))
        );
        assert_eq!(
            event_transition("order.refunded"),
            Some((SubscriptionTier::Free, SubscriptionStatus::Refunded))
        );
        assert_eq!(
            event_transition("subscription.cancelled"),
            Some((SubscriptionTier::Free, SubscriptionStatus::Cancelled))
        );
        assert_eq!(event_transition("order.updated"), None);
    }

    #[test]
    fn paid_then_refunded_ends_without_access() {
        let (tier, status) = event_transition("order.paid").unwrap();
        let mut sub = subscription(tier, status);
        assert!(has_premium_access(Some(&sub)));

        let (tier, status) = event_transition("order.refunded").unwrap();
        sub.tier = tier;
        sub.status = status;
        assert!(!has_premium_access(Some(&sub)));
    }

    #[test]
    fn idempotency_key_prefers_event_id() {
        let event = WebhookEvent {
            event: Some("order.paid".to_string()),
            event_id: Some("evt_123".to_string()),
            order_id: Some("ord_9".to_string()),
            product_id: None,
            customer: Some(WebhookCustomer {
                email: "maria@example.com".to_string(),
                name: "Maria".to_string(),
                phone: None,
            }),
            payment: None,
            subscription: None,
        };
        assert_eq!(idempotency_key(&event).as_deref(), Some("evt_123"));

        let fallback = WebhookEvent {
            event_id: None,
            ..event.clone()
        };
        assert_eq!(
            idempotency_key(&fallback).as_deref(),
            Some("ord_9:order.paid")
        );

        let missing = WebhookEvent {
            event_id: None,
            order_id: None,
            ..event
        };
        assert_eq!(idempotency_key(&missing), None);
    }
}
