use axum::{
    extract::State,
    response::Json,
    routing::post,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Food, Gender, Goal, MealPlan, TrainingLevel, UserProfile};

use super::routes::AppState;

pub fn nutrition_routes(state: AppState) -> Router {
    Router::new()
        .route("/plan", post(generate_plan))
        .route("/alternatives", post(food_alternatives))
        .route("/replace", post(replace_food))
        .with_state(state)
}

/// Onboarding profile fields needed to generate a plan. The server assigns
/// the profile id.
#[derive(Debug, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub gender: Gender,
    pub goal: Goal,
    pub training_level: TrainingLevel,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

impl ProfileInput {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            age: self.age,
            weight: self.weight,
            height: self.height,
            gender: self.gender,
            goal: self.goal,
            training_level: self.training_level,
            dietary_restrictions: self.dietary_restrictions,
            is_premium: false,
            created_at: Utc::now(),
        }
    }
}

pub async fn generate_plan(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<MealPlan>, AppError> {
    if input.age == 0 {
        return Err(AppError::Validation("age must be greater than zero".to_string()));
    }

    let plan = state.meal_plans.generate_plan(&input.into_profile());
    Ok(Json(plan))
}

#[derive(Debug, Deserialize)]
pub struct AlternativesRequest {
    pub food_id: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

/// Alternatives share the category of the given food. An unknown food id
/// yields an empty list rather than an error.
pub async fn food_alternatives(
    State(state): State<AppState>,
    Json(request): Json<AlternativesRequest>,
) -> Result<Json<Vec<Food>>, AppError> {
    let alternatives = state
        .meal_plans
        .food_alternatives(&request.food_id, &request.dietary_restrictions);
    Ok(Json(alternatives))
}

#[derive(Debug, Deserialize)]
pub struct ReplaceFoodRequest {
    pub plan: MealPlan,
    pub meal_id: String,
    pub old_food_id: String,
    pub new_food_id: String,
}

/// Swap a food inside a plan and return the plan with recomputed totals.
/// An unknown replacement id returns the plan unchanged.
pub async fn replace_food(
    State(state): State<AppState>,
    Json(request): Json<ReplaceFoodRequest>,
) -> Result<Json<MealPlan>, AppError> {
    let mut plan = request.plan;
    state.meal_plans.replace_food(
        &mut plan,
        &request.meal_id,
        &request.old_food_id,
        &request.new_food_id,
    );
    Ok(Json(plan))
}
