use axum::{
    extract::State,
    response::Json,
    routing::post,
    Router,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{
    Budget, Gender, Goal, SupplementProtocol, SupplementRecommendation, SupplementSlot,
    TrainingLevel,
};
use crate::services::SupplementService;

use super::routes::AppState;

pub fn supplement_routes(state: AppState) -> Router {
    Router::new()
        .route("/protocol", post(generate_protocol))
        .route("/custom-schedule", post(custom_schedule))
        .route("/reminder", post(reminder))
        .route("/recommendations", post(recommendations))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ProtocolRequest {
    pub goal: Goal,
    pub training_level: TrainingLevel,
    pub training_days: u8,
    #[serde(default)]
    pub budget: Budget,
}

pub async fn generate_protocol(
    State(state): State<AppState>,
    Json(request): Json<ProtocolRequest>,
) -> Result<Json<SupplementProtocol>, AppError> {
    let protocol = state.supplements.generate_protocol(
        request.goal,
        request.training_level,
        request.training_days,
        request.budget,
    );
    Ok(Json(protocol))
}

#[derive(Debug, Deserialize)]
pub struct CustomScheduleRequest {
    pub wake_up_time: String,
    pub workout_time: String,
    pub sleep_time: String,
    pub supplement_ids: Vec<String>,
}

/// Intake times derived from the user's daily routine. Unknown supplement
/// ids are dropped.
pub async fn custom_schedule(
    State(state): State<AppState>,
    Json(request): Json<CustomScheduleRequest>,
) -> Result<Json<Vec<SupplementSlot>>, AppError> {
    let supplements: Vec<_> = request
        .supplement_ids
        .iter()
        .filter_map(|id| state.supplements.catalog().iter().find(|s| &s.id == id))
        .cloned()
        .collect();

    let schedule = SupplementService::custom_schedule(
        &request.wake_up_time,
        &request.workout_time,
        &request.sleep_time,
        &supplements,
    );
    Ok(Json(schedule))
}

#[derive(Debug, Deserialize)]
pub struct ReminderRequest {
    pub schedule: Vec<SupplementSlot>,
    pub current_time: String,
}

pub async fn reminder(
    Json(request): Json<ReminderRequest>,
) -> Result<Json<Option<SupplementSlot>>, AppError> {
    let hit = SupplementService::reminder_for(&request.schedule, &request.current_time);
    Ok(Json(hit.cloned()))
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub goal: Goal,
    pub age: u32,
    pub gender: Gender,
}

pub async fn recommendations(
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<Vec<SupplementRecommendation>>, AppError> {
    Ok(Json(SupplementService::additional_recommendations(
        request.goal,
        request.age,
        request.gender,
    )))
}
