use chrono::Utc;
use fitplan::catalog::{
    exercise_catalog, food_catalog, medical_exams, supplement_catalog, DIETARY_RESTRICTIONS,
};
use pretty_assertions::assert_eq;
use fitplan::models::{
    Budget, Gender, Goal, NutritionalInfo, Progress, TrainingLevel, UserProfile,
};
use fitplan::services::supplement_service::SupplementService;
use fitplan::services::workout_plan_service::adjust_load;
use fitplan::services::{MealPlanService, WorkoutPlanService};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

fn profile(goal: Goal, level: TrainingLevel, restrictions: &[&str]) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        age: 31,
        weight: 65.0,
        height: 168.0,
        gender: Gender::Female,
        goal,
        training_level: level,
        dietary_restrictions: restrictions.iter().map(|s| s.to_string()).collect(),
        is_premium: true,
        created_at: Utc::now(),
    }
}

#[test]
fn catalogs_are_complete_and_well_formed() {
    let foods = food_catalog();
    assert_eq!(foods.len(), 55);
    for food in &foods {
        assert!(!food.id.is_empty());
        assert!(food.nutritional_info.calories >= 0.0);
    }

    let exercises = exercise_catalog();
    assert_eq!(exercises.len(), 40);
    assert!(exercises.iter().all(|e| !e.instructions.is_empty()));

    assert_eq!(supplement_catalog().len(), 5);
    assert_eq!(medical_exams().len(), 8);
    assert!(DIETARY_RESTRICTIONS.contains(&"Vegetariano"));
}

#[test]
fn meal_plan_targets_track_profile_changes() {
    let service = MealPlanService::new();

    let cutting = service.generate_plan(&profile(
        Goal::WeightLoss,
        TrainingLevel::Intermediate,
        &[],
    ));
    let bulking = service.generate_plan(&profile(
        Goal::MuscleGain,
        TrainingLevel::Intermediate,
        &[],
    ));

    // Same body, same level: the goal adjustment alone separates the targets
    // by exactly 800 kcal (-500 vs +300).
    assert_eq!(
        bulking.daily_target.calories - cutting.daily_target.calories,
        800.0
    );
}

#[test]
fn restricted_plan_never_contains_excluded_foods() {
    let service = MealPlanService::new();
    let plan = service.generate_plan(&profile(
        Goal::Maintenance,
        TrainingLevel::Beginner,
        &["Vegano", "Sem Lactose"],
    ));

    for meal in &plan.meals {
        for food in &meal.foods {
            assert!(
                !["chicken_breast", "salmon", "tilapia", "eggs"].contains(&food.id.as_str()),
                "{} found in {}",
                food.id,
                meal.id
            );
        }
    }

    // Totals stay exact sums even with foods filtered out.
    let daily: NutritionalInfo = plan.meals.iter().map(|m| m.total_nutrition).sum();
    assert_eq!(plan.daily_total, daily);
}

#[test]
fn workout_plan_respects_level_across_full_week() {
    let service = WorkoutPlanService::new();
    let mut rng = StdRng::seed_from_u64(7);

    let plan = service.generate_plan(
        Uuid::new_v4(),
        TrainingLevel::Beginner,
        Goal::Endurance,
        7,
        &mut rng,
    );

    // Beginner endurance prescribes 4 days regardless of availability.
    assert_eq!(plan.days.len(), 4);
    for day in &plan.days {
        assert!(!day.exercises.is_empty());
        for exercise in &day.exercises {
            assert_ne!(exercise.difficulty, TrainingLevel::Advanced);
            assert_eq!(exercise.reps.as_deref(), Some("15-20"));
        }
    }
}

#[test]
fn seeded_workout_generation_is_deterministic() {
    let service = WorkoutPlanService::new();
    let user_id = Uuid::new_v4();

    let mut first_rng = StdRng::seed_from_u64(99);
    let mut second_rng = StdRng::seed_from_u64(99);
    let first = service.generate_plan(
        user_id,
        TrainingLevel::Intermediate,
        Goal::MuscleGain,
        0,
        &mut first_rng,
    );
    let second = service.generate_plan(
        user_id,
        TrainingLevel::Intermediate,
        Goal::MuscleGain,
        0,
        &mut second_rng,
    );

    let ids = |plan: &fitplan::models::WorkoutPlan| -> Vec<String> {
        plan.days
            .iter()
            .flat_map(|d| d.exercises.iter().map(|e| e.id.clone()))
            .collect()
    };
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn load_progression_round_trip() {
    // A full feedback cycle: too easy, then too hard, formats stay canonical.
    let raised = adjust_load("40-60kg", Progress::Easy);
    assert_eq!(raised, "42-66kg");
    let lowered = adjust_load(&raised, Progress::Hard);
    assert_eq!(lowered, "38-63kg");
}

#[test]
fn supplement_protocol_connects_to_custom_schedule() {
    let service = SupplementService::new();
    let protocol = service.generate_protocol(
        Goal::Endurance,
        TrainingLevel::Intermediate,
        4,
        Budget::Medium,
    );
    assert!(protocol.total_supplements > 0);

    // Re-time the same supplements around the user's routine.
    let supplements: Vec<_> = protocol
        .schedule
        .iter()
        .flat_map(|slot| slot.supplements.iter().map(|s| s.supplement.clone()))
        .collect();
    let schedule = SupplementService::custom_schedule("05:45", "06:30", "22:15", &supplements);

    let pre = schedule.iter().find(|s| s.period == "Pré-Treino").unwrap();
    assert_eq!(pre.time, "06:00");

    let hit = SupplementService::reminder_for(&schedule, "05:50").unwrap();
    assert_eq!(hit.period, pre.period);
}
