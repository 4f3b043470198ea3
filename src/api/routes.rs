use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::exams::exam_routes;
use super::health::health_check;
use super::nutrition::nutrition_routes;
use super::subscription::subscription_routes;
use super::supplements::supplement_routes;
use super::webhook::webhook_routes;
use super::workouts::workout_routes;
use crate::services::{
    MealPlanService, SubscriptionService, SupplementService, WorkoutPlanService,
};

#[derive(Clone)]
pub struct AppState {
    pub meal_plans: MealPlanService,
    pub workouts: WorkoutPlanService,
    pub supplements: SupplementService,
    pub subscriptions: SubscriptionService,
    pub webhook_secret: String,
}

pub fn create_routes(db: PgPool, webhook_secret: &str) -> Router {
    let state = AppState {
        meal_plans: MealPlanService::new(),
        workouts: WorkoutPlanService::new(),
        supplements: SupplementService::new(),
        subscriptions: SubscriptionService::new(db),
        webhook_secret: webhook_secret.to_string(),
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/nutrition", nutrition_routes(state.clone()))
        .nest("/api/workouts", workout_routes(state.clone()))
        .nest("/api/supplements", supplement_routes(state.clone()))
        .nest("/api/exams", exam_routes())
        .nest("/api/subscription", subscription_routes(state.clone()))
        .nest("/api/webhook", webhook_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
