//! Basal metabolic rate, daily calorie target and macro split.
//!
//! Inputs are taken as given: negative or zero body metrics are not rejected,
//! matching the documented behavior of the onboarding flow.

use crate::models::{Gender, Goal, TrainingLevel};

/// Macro targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Basal metabolic rate (TMB) via the Harris-Benedict equation.
pub fn calculate_tmb(weight: f64, height: f64, age: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 88.362 + (13.397 * weight) + (4.799 * height) - (5.677 * age),
        Gender::Female | Gender::Other => {
            447.593 + (9.247 * weight) + (3.098 * height) - (4.330 * age)
        }
    }
}

fn activity_multiplier(level: TrainingLevel) -> f64 {
    // 1.55 is the documented fallback for future level variants.
    match level {
        TrainingLevel::Beginner => 1.375,
        TrainingLevel::Intermediate => 1.55,
        TrainingLevel::Advanced => 1.725,
    }
}

fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => -500.0,
        Goal::MuscleGain => 300.0,
        Goal::Maintenance => 0.0,
        Goal::Endurance => 200.0,
    }
}

/// Daily calorie target: TMB scaled by the activity factor for the training
/// level, plus a flat per-goal adjustment, rounded to the nearest integer.
pub fn calculate_daily_calories(tmb: f64, goal: Goal, level: TrainingLevel) -> i32 {
    let tdee = tmb * activity_multiplier(level);
    (tdee + goal_adjustment(goal)).round() as i32
}

/// Per-goal calorie fractions (protein, carbs, fats). Each row sums to 1.0.
pub fn macro_ratios(goal: Goal) -> (f64, f64, f64) {
    match goal {
        Goal::WeightLoss => (0.35, 0.30, 0.35),
        Goal::MuscleGain => (0.30, 0.45, 0.25),
        Goal::Maintenance => (0.30, 0.40, 0.30),
        Goal::Endurance => (0.25, 0.50, 0.25),
    }
}

/// Macro gram targets: protein and carbs at 4 kcal/g, fats at 9 kcal/g, each
/// rounded independently (gram totals will not re-sum exactly to the input).
pub fn calculate_macros(calories: f64, goal: Goal) -> MacroSplit {
    let (protein, carbs, fats) = macro_ratios(goal);

    MacroSplit {
        protein: ((calories * protein) / 4.0).round(),
        carbs: ((calories * carbs) / 4.0).round(),
        fats: ((calories * fats) / 9.0).round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmb_matches_harris_benedict_male() {
        let tmb = calculate_tmb(78.0, 175.0, 28.0, Gender::Male);
        let expected = 88.362 + 13.397 * 78.0 + 4.799 * 175.0 - 5.677 * 28.0;
        assert!((tmb - expected).abs() < 1e-9);
    }

    #[test]
    fn tmb_matches_harris_benedict_female() {
        let tmb = calculate_tmb(60.0, 165.0, 30.0, Gender::Female);
        let expected = 447.593 + 9.247 * 60.0 + 3.098 * 165.0 - 4.330 * 30.0;
        assert!((tmb - expected).abs() < 1e-9);
    }

    #[test]
    fn other_gender_uses_female_equation() {
        assert_eq!(
            calculate_tmb(60.0, 165.0, 30.0, Gender::Other),
            calculate_tmb(60.0, 165.0, 30.0, Gender::Female)
        );
    }

    #[test]
    fn daily_calories_applies_multiplier_then_adjustment() {
        // 1600 * 1.55 - 500 = 1980
        assert_eq!(
            calculate_daily_calories(1600.0, Goal::WeightLoss, TrainingLevel::Intermediate),
            1980
        );
        // 1600 * 1.375 + 300 = 2500
        assert_eq!(
            calculate_daily_calories(1600.0, Goal::MuscleGain, TrainingLevel::Beginner),
            2500
        );
        // 1600 * 1.725 + 200 = 2960
        assert_eq!(
            calculate_daily_calories(1600.0, Goal::Endurance, TrainingLevel::Advanced),
            2960
        );
    }

    #[test]
    fn macro_ratios_sum_to_one_for_every_goal() {
        for goal in [
            Goal::WeightLoss,
            Goal::MuscleGain,
            Goal::Maintenance,
            Goal::Endurance,
        ] {
            let (p, c, f) = macro_ratios(goal);
            assert!((p + c + f - 1.0).abs() < 1e-9, "{goal:?}");
        }
    }

    #[test]
    fn macros_convert_calorie_shares_to_grams() {
        let macros = calculate_macros(2000.0, Goal::MuscleGain);
        assert_eq!(macros.protein, 150.0); // 2000*0.30/4
        assert_eq!(macros.carbs, 225.0); // 2000*0.45/4
        assert_eq!(macros.fats, 56.0); // 2000*0.25/9 = 55.55 -> 56
    }
}
