use chrono::Utc;
use uuid::Uuid;

use crate::catalog::foods::{food_catalog, whey_shake};
use crate::models::{Food, FoodCategory, Meal, MealPlan, NutritionalInfo, UserProfile};
use crate::services::metabolic::{calculate_daily_calories, calculate_macros, calculate_tmb};

/// Calorie share per meal slot. Shares sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
}

impl MealSlot {
    const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::MorningSnack,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
    ];

    fn id(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::MorningSnack => "snack1",
            MealSlot::Lunch => "lunch",
            MealSlot::AfternoonSnack => "snack2",
            MealSlot::Dinner => "dinner",
        }
    }

    fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Café da Manhã",
            MealSlot::MorningSnack => "Lanche da Manhã",
            MealSlot::Lunch => "Almoço",
            MealSlot::AfternoonSnack => "Lanche da Tarde",
            MealSlot::Dinner => "Jantar",
        }
    }

    fn time(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "07:00",
            MealSlot::MorningSnack => "10:00",
            MealSlot::Lunch => "12:30",
            MealSlot::AfternoonSnack => "16:00",
            MealSlot::Dinner => "19:30",
        }
    }

    fn calorie_share(self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::MorningSnack => 0.10,
            MealSlot::Lunch => 0.30,
            MealSlot::AfternoonSnack => 0.10,
            MealSlot::Dinner => 0.25,
        }
    }
}

/// Sum nutrition over a food list. Derived totals are always recomputed with
/// this, never adjusted incrementally.
pub fn total_nutrition(foods: &[Food]) -> NutritionalInfo {
    foods.iter().map(|f| f.nutritional_info).sum()
}

#[derive(Clone)]
pub struct MealPlanService {
    foods: Vec<Food>,
}

impl Default for MealPlanService {
    fn default() -> Self {
        Self::new()
    }
}

impl MealPlanService {
    pub fn new() -> Self {
        Self {
            foods: food_catalog(),
        }
    }

    /// Remove foods excluded by the user's dietary restrictions.
    ///
    /// Low Carb, Sem Açúcar, Sem Glúten and Sem Amendoim are accepted but have
    /// no exclusion rule (see DESIGN.md).
    pub fn filter_by_restrictions(foods: &[Food], restrictions: &[String]) -> Vec<Food> {
        let vegetarian = restrictions.iter().any(|r| r == "Vegetariano");
        let vegan = restrictions.iter().any(|r| r == "Vegano");
        let lactose_free = restrictions.iter().any(|r| r == "Sem Lactose");
        let no_seafood = restrictions.iter().any(|r| r == "Sem Frutos do Mar");

        foods
            .iter()
            .filter(|food| {
                if vegetarian && ["chicken_breast", "salmon", "tilapia"].contains(&food.id.as_str())
                {
                    return false;
                }
                if vegan
                    && ["chicken_breast", "salmon", "tilapia", "eggs"].contains(&food.id.as_str())
                {
                    return false;
                }
                if lactose_free && food.category == FoodCategory::Dairy {
                    return false;
                }
                if no_seafood && ["salmon", "tilapia"].contains(&food.id.as_str()) {
                    return false;
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Generate a full day's plan from the user's profile.
    pub fn generate_plan(&self, user: &UserProfile) -> MealPlan {
        let tmb = calculate_tmb(user.weight, user.height, user.age as f64, user.gender);
        let daily_calories = calculate_daily_calories(tmb, user.goal, user.training_level);
        let daily_macros = calculate_macros(daily_calories as f64, user.goal);

        let daily_target = NutritionalInfo {
            calories: daily_calories as f64,
            protein: daily_macros.protein,
            carbs: daily_macros.carbs,
            fats: daily_macros.fats,
        };

        let available = Self::filter_by_restrictions(&self.foods, &user.dietary_restrictions);

        let meals: Vec<Meal> = MealSlot::ALL
            .iter()
            .map(|&slot| {
                let share = slot.calorie_share();
                let slot_target = NutritionalInfo {
                    calories: (daily_target.calories * share).round(),
                    protein: (daily_target.protein * share).round(),
                    carbs: (daily_target.carbs * share).round(),
                    fats: (daily_target.fats * share).round(),
                };

                let foods = Self::select_foods_for_slot(&available, slot_target, slot);
                let meal_total = total_nutrition(&foods);

                Meal {
                    id: slot.id().to_string(),
                    name: slot.name().to_string(),
                    time: slot.time().to_string(),
                    foods,
                    total_nutrition: meal_total,
                }
            })
            .collect();

        let daily_total = meals.iter().map(|m| m.total_nutrition).sum();

        MealPlan {
            id: Uuid::new_v4(),
            user_id: user.id,
            date: Utc::now(),
            meals,
            daily_target,
            daily_total,
        }
    }

    // Fixed assignment rule per slot. Preferred foods filtered out by a
    // restriction are simply omitted; the selection does not optimize toward
    // the slot target, it only sums whatever fixed foods survive the filter.
    fn select_foods_for_slot(
        available: &[Food],
        _target: NutritionalInfo,
        slot: MealSlot,
    ) -> Vec<Food> {
        let by_id = |id: &str| available.iter().find(|f| f.id == id).cloned();
        let first_of = |category: FoodCategory| {
            available.iter().find(|f| f.category == category).cloned()
        };

        let mut selected = Vec::new();

        match slot {
            MealSlot::Breakfast => {
                selected.extend(by_id("eggs"));
                selected.extend(by_id("whole_bread"));
                selected.extend(by_id("avocado"));
                selected.extend(by_id("banana"));
            }
            MealSlot::MorningSnack => {
                selected.extend(by_id("apple"));
                selected.extend(by_id("nuts"));
            }
            MealSlot::AfternoonSnack => {
                // Post-workout snack: synthetic shake entry plus oats.
                selected.push(whey_shake());
                selected.extend(by_id("oats"));
            }
            MealSlot::Lunch => {
                selected.extend(by_id("chicken_breast").or_else(|| first_of(FoodCategory::Protein)));
                selected.extend(by_id("sweet_potato").or_else(|| first_of(FoodCategory::Carb)));
                selected.extend(by_id("broccoli").or_else(|| first_of(FoodCategory::Vegetable)));
                selected.extend(by_id("olive_oil"));
            }
            MealSlot::Dinner => {
                selected.extend(
                    by_id("salmon")
                        .or_else(|| by_id("tilapia"))
                        .or_else(|| first_of(FoodCategory::Protein)),
                );
                selected.extend(by_id("brown_rice").or_else(|| first_of(FoodCategory::Carb)));
                selected.extend(by_id("salad").or_else(|| first_of(FoodCategory::Vegetable)));
            }
        }

        selected
    }

    /// Replace a food inside a meal, preserving its position, and recompute
    /// the meal total and the plan's daily total from scratch.
    ///
    /// An unknown replacement id is a silent no-op; callers must treat the
    /// unchanged plan as the failure signal.
    pub fn replace_food(&self, plan: &mut MealPlan, meal_id: &str, old_food_id: &str, new_food_id: &str) {
        let Some(new_food) = self.foods.iter().find(|f| f.id == new_food_id).cloned() else {
            return;
        };

        let Some(meal) = plan.meals.iter_mut().find(|m| m.id == meal_id) else {
            return;
        };

        for food in meal.foods.iter_mut() {
            if food.id == old_food_id {
                *food = new_food.clone();
            }
        }
        meal.total_nutrition = total_nutrition(&meal.foods);
        plan.daily_total = plan.meals.iter().map(|m| m.total_nutrition).sum();
    }

    /// All other catalog foods in the same category, restriction-filtered.
    /// Unknown id yields an empty list.
    pub fn food_alternatives(&self, food_id: &str, restrictions: &[String]) -> Vec<Food> {
        let Some(food) = self.foods.iter().find(|f| f.id == food_id) else {
            return Vec::new();
        };

        let alternatives: Vec<Food> = self
            .foods
            .iter()
            .filter(|f| f.id != food_id && f.category == food.category)
            .cloned()
            .collect();

        Self::filter_by_restrictions(&alternatives, restrictions)
    }

    /// Scale portions proportionally toward a calorie target. Differences
    /// under 10% are left unchanged.
    pub fn adjust_portions(foods: &[Food], target_calories: f64) -> Vec<Food> {
        let current = total_nutrition(foods).calories;
        if current == 0.0 {
            return foods.to_vec();
        }

        let ratio = target_calories / current;
        if (ratio - 1.0).abs() < 0.1 {
            return foods.to_vec();
        }

        foods
            .iter()
            .map(|food| {
                let n = food.nutritional_info;
                Food {
                    nutritional_info: NutritionalInfo {
                        calories: (n.calories * ratio).round(),
                        protein: (n.protein * ratio).round(),
                        carbs: (n.carbs * ratio).round(),
                        fats: (n.fats * ratio).round(),
                    },
                    ..food.clone()
                }
            })
            .collect()
    }
}
