use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::TrainingLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
    Functional,
}

/// Static catalog entry. Generated plans carry annotated copies with
/// sets/reps filled in and load/rest lines prepended to the instructions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    pub muscle_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    pub difficulty: TrainingLevel,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub id: String,
    /// 1-6 day index as laid out by the split template
    pub day_of_week: u8,
    pub name: String,
    pub exercises: Vec<Exercise>,
    /// Minutes; flat heuristic, not derived from sets and rest times
    pub estimated_duration: u32,
    pub completed: bool,
}

impl WorkoutDay {
    /// Flip the completion flag. Not validated against per-exercise state.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: String,
    pub user_id: Uuid,
    pub week_start: DateTime<Utc>,
    pub days: Vec<WorkoutDay>,
}

/// Feedback signal for load adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Progress {
    Easy,
    Perfect,
    Hard,
}
