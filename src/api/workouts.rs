use axum::{
    extract::State,
    response::Json,
    routing::post,
    Router,
};
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Exercise, Goal, Progress, TrainingLevel, WorkoutDay, WorkoutPlan};
use crate::services::workout_plan_service::adjust_load;

use super::routes::AppState;

pub fn workout_routes(state: AppState) -> Router {
    Router::new()
        .route("/plan", post(generate_plan))
        .route("/replace", post(replace_exercise))
        .route("/adjust-load", post(adjust_exercise_load))
        .route("/complete-day", post(complete_day))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct WorkoutPlanRequest {
    pub user_id: Uuid,
    pub training_level: TrainingLevel,
    pub goal: Goal,
    /// 0 means "no constraint": the prescription for the level/goal decides.
    #[serde(default)]
    pub days_available: u8,
}

pub async fn generate_plan(
    State(state): State<AppState>,
    Json(request): Json<WorkoutPlanRequest>,
) -> Result<Json<WorkoutPlan>, AppError> {
    let plan = state.workouts.generate_plan(
        request.user_id,
        request.training_level,
        request.goal,
        request.days_available,
        &mut thread_rng(),
    );
    Ok(Json(plan))
}

#[derive(Debug, Deserialize)]
pub struct ReplaceExerciseRequest {
    pub exercise: Exercise,
    pub training_level: TrainingLevel,
}

pub async fn replace_exercise(
    State(state): State<AppState>,
    Json(request): Json<ReplaceExerciseRequest>,
) -> Result<Json<Exercise>, AppError> {
    let replacement = state
        .workouts
        .replace_exercise(&request.exercise, request.training_level, &mut thread_rng())
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "no alternative exercise for muscle group '{}'",
                request.exercise.muscle_group
            ))
        })?;
    Ok(Json(replacement))
}

#[derive(Debug, Deserialize)]
pub struct AdjustLoadRequest {
    pub current_load: String,
    pub progress: Progress,
}

#[derive(Debug, Serialize)]
pub struct AdjustLoadResponse {
    pub load: String,
}

pub async fn adjust_exercise_load(
    Json(request): Json<AdjustLoadRequest>,
) -> Result<Json<AdjustLoadResponse>, AppError> {
    Ok(Json(AdjustLoadResponse {
        load: adjust_load(&request.current_load, request.progress),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CompleteDayRequest {
    pub day: WorkoutDay,
}

/// Flip a day's completion flag and return the day. No validation against
/// exercise state.
pub async fn complete_day(
    Json(request): Json<CompleteDayRequest>,
) -> Result<Json<WorkoutDay>, AppError> {
    let mut day = request.day;
    day.toggle_completed();
    Ok(Json(day))
}
