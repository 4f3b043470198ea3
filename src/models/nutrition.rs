use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Protein,
    Carb,
    Vegetable,
    Fruit,
    Fat,
    Dairy,
}

/// Calories in kcal, macros in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl std::ops::Add for NutritionalInfo {
    type Output = NutritionalInfo;

    fn add(self, other: NutritionalInfo) -> NutritionalInfo {
        NutritionalInfo {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
        }
    }
}

impl std::iter::Sum for NutritionalInfo {
    fn sum<I: Iterator<Item = NutritionalInfo>>(iter: I) -> NutritionalInfo {
        iter.fold(NutritionalInfo::default(), |acc, n| acc + n)
    }
}

/// Static catalog entry; never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub portion: String,
    pub category: FoodCategory,
    pub nutritional_info: NutritionalInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub time: String,
    pub foods: Vec<Food>,
    /// Always the exact sum of `foods`; recomputed from scratch after any change.
    pub total_nutrition: NutritionalInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub meals: Vec<Meal>,
    pub daily_target: NutritionalInfo,
    /// Exact sum over all meals' totals.
    pub daily_total: NutritionalInfo,
}
