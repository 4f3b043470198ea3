use chrono::Utc;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use uuid::Uuid;

use crate::catalog::exercises::exercise_catalog;
use crate::models::{Exercise, Goal, Progress, TrainingLevel, WorkoutDay, WorkoutPlan};

/// Training prescription for one level/goal combination.
#[derive(Debug, Clone, Copy)]
struct WorkoutConfig {
    days_per_week: u8,
    sets_min: u32,
    sets_max: u32,
    reps_range: &'static str,
    rest_seconds: u32,
    exercises_per_muscle: usize,
}

fn workout_config(level: TrainingLevel, goal: Goal) -> WorkoutConfig {
    use Goal::{Endurance, Maintenance, MuscleGain, WeightLoss};
    use TrainingLevel::{Advanced, Beginner, Intermediate};

    let (days_per_week, sets_min, sets_max, reps_range, rest_seconds, exercises_per_muscle) =
        match (level, goal) {
            (Beginner, WeightLoss) => (3, 2, 3, "12-15", 60, 2),
            (Beginner, MuscleGain) => (3, 3, 4, "8-12", 90, 2),
            (Beginner, Maintenance) => (3, 2, 3, "10-12", 60, 2),
            (Beginner, Endurance) => (4, 2, 3, "15-20", 45, 2),
            (Intermediate, WeightLoss) => (4, 3, 4, "12-15", 60, 3),
            (Intermediate, MuscleGain) => (4, 3, 4, "8-12", 90, 3),
            (Intermediate, Maintenance) => (4, 3, 3, "10-12", 75, 3),
            (Intermediate, Endurance) => (5, 3, 4, "15-20", 45, 3),
            (Advanced, WeightLoss) => (5, 3, 5, "12-15", 45, 4),
            (Advanced, MuscleGain) => (5, 4, 5, "6-10", 120, 4),
            (Advanced, Maintenance) => (4, 3, 4, "8-12", 75, 3),
            (Advanced, Endurance) => (6, 3, 4, "15-25", 30, 4),
        };

    WorkoutConfig {
        days_per_week,
        sets_min,
        sets_max,
        reps_range,
        rest_seconds,
        exercises_per_muscle,
    }
}

struct SplitDay {
    day: u8,
    name: &'static str,
    muscle_groups: &'static [&'static str],
}

const SPLIT_3: &[SplitDay] = &[
    SplitDay {
        day: 1,
        name: "Treino A - Corpo Todo",
        muscle_groups: &["Peito", "Costas", "Pernas", "Ombros", "Abdômen"],
    },
    SplitDay {
        day: 3,
        name: "Treino B - Corpo Todo",
        muscle_groups: &["Pernas", "Peito", "Costas", "Bíceps", "Tríceps"],
    },
    SplitDay {
        day: 5,
        name: "Treino C - Corpo Todo",
        muscle_groups: &["Costas", "Ombros", "Pernas", "Abdômen", "Cardiovascular"],
    },
];

const SPLIT_4: &[SplitDay] = &[
    SplitDay {
        day: 1,
        name: "Treino A - Superiores (Push)",
        muscle_groups: &["Peito", "Ombros", "Tríceps", "Abdômen"],
    },
    SplitDay {
        day: 2,
        name: "Treino B - Inferiores",
        muscle_groups: &["Pernas", "Posterior de Coxa", "Panturrilha", "Core"],
    },
    SplitDay {
        day: 4,
        name: "Treino C - Superiores (Pull)",
        muscle_groups: &["Costas", "Bíceps", "Ombros Posteriores", "Abdômen"],
    },
    SplitDay {
        day: 5,
        name: "Treino D - Inferiores",
        muscle_groups: &["Pernas", "Quadríceps", "Panturrilha", "Core"],
    },
];

const SPLIT_5: &[SplitDay] = &[
    SplitDay {
        day: 1,
        name: "Treino A - Push (Empurrar)",
        muscle_groups: &["Peito", "Ombros", "Tríceps"],
    },
    SplitDay {
        day: 2,
        name: "Treino B - Pull (Puxar)",
        muscle_groups: &["Costas", "Bíceps", "Antebraço"],
    },
    SplitDay {
        day: 3,
        name: "Treino C - Pernas",
        muscle_groups: &["Pernas", "Quadríceps", "Posterior de Coxa", "Panturrilha"],
    },
    SplitDay {
        day: 5,
        name: "Treino D - Push (Empurrar)",
        muscle_groups: &["Peito", "Ombros", "Tríceps", "Abdômen"],
    },
    SplitDay {
        day: 6,
        name: "Treino E - Pull (Puxar)",
        muscle_groups: &["Costas", "Bíceps", "Core"],
    },
];

const SPLIT_6: &[SplitDay] = &[
    SplitDay {
        day: 1,
        name: "Treino A - Peito",
        muscle_groups: &["Peito", "Abdômen"],
    },
    SplitDay {
        day: 2,
        name: "Treino B - Costas",
        muscle_groups: &["Costas", "Core"],
    },
    SplitDay {
        day: 3,
        name: "Treino C - Ombros",
        muscle_groups: &["Ombros", "Trapézio", "Abdômen"],
    },
    SplitDay {
        day: 4,
        name: "Treino D - Pernas",
        muscle_groups: &["Pernas", "Quadríceps", "Posterior de Coxa", "Panturrilha"],
    },
    SplitDay {
        day: 5,
        name: "Treino E - Bíceps e Tríceps",
        muscle_groups: &["Bíceps", "Tríceps", "Antebraço"],
    },
    SplitDay {
        day: 6,
        name: "Treino F - Cardio e Core",
        muscle_groups: &["Cardiovascular", "Abdômen", "Core"],
    },
];

fn split_for(days: u8) -> &'static [SplitDay] {
    if days >= 6 {
        SPLIT_6
    } else if days >= 5 {
        SPLIT_5
    } else if days >= 4 {
        SPLIT_4
    } else {
        SPLIT_3
    }
}

/// Suggested working load for an exercise at a given level.
pub fn load_suggestion(exercise_id: &str, level: TrainingLevel) -> &'static str {
    let (beginner, intermediate, advanced) = match exercise_id {
        "bench_press" => ("20-30kg", "40-60kg", "70-100kg+"),
        "squat" => ("20-40kg", "50-80kg", "90-140kg+"),
        "deadlift" => ("30-50kg", "60-100kg", "110-180kg+"),
        "shoulder_press" => ("6-10kg", "12-18kg", "20-30kg+"),
        "barbell_row" => ("20-30kg", "40-60kg", "70-100kg+"),
        "leg_press" => ("40-80kg", "100-160kg", "180-300kg+"),
        "lat_pulldown" => ("20-35kg", "40-60kg", "65-90kg+"),
        "barbell_curl" => ("10-15kg", "20-30kg", "35-50kg+"),
        "tricep_pushdown" => ("15-25kg", "30-45kg", "50-70kg+"),
        _ => ("5-10kg", "12-20kg", "22-35kg+"),
    };
    match level {
        TrainingLevel::Beginner => beginner,
        TrainingLevel::Intermediate => intermediate,
        TrainingLevel::Advanced => advanced,
    }
}

static LOAD_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)-?(\d+)?").unwrap());

/// Adjust a load string after workout feedback.
///
/// Easy raises the range 5-10%, hard lowers it 5-10%, perfect only reformats.
/// A single-value load scales both ends by the min-side factor so it stays a
/// single value. Strings without a leading number pass through unchanged.
pub fn adjust_load(current_load: &str, progress: Progress) -> String {
    let Some(caps) = LOAD_RANGE.captures(current_load) else {
        return current_load.to_string();
    };
    let Ok(min) = caps[1].parse::<f64>() else {
        return current_load.to_string();
    };
    let (max, single) = match caps.get(2).map(|m| m.as_str().parse::<f64>()) {
        Some(Ok(max)) => (max, false),
        Some(Err(_)) | None => (min, true),
    };

    let (min_factor, max_factor) = match progress {
        Progress::Easy => (1.05, 1.10),
        Progress::Hard => (0.90, 0.95),
        Progress::Perfect => (1.0, 1.0),
    };
    let max_factor = if single { min_factor } else { max_factor };

    let new_min = (min * min_factor).round() as i64;
    let new_max = (max * max_factor).round() as i64;

    if new_min == new_max {
        format!("{new_min}kg")
    } else {
        format!("{new_min}-{new_max}kg")
    }
}

#[derive(Clone)]
pub struct WorkoutPlanService {
    exercises: Vec<Exercise>,
}

impl Default for WorkoutPlanService {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutPlanService {
    pub fn new() -> Self {
        Self {
            exercises: exercise_catalog(),
        }
    }

    fn matches_muscle(exercise: &Exercise, muscle_group: &str) -> bool {
        let first_word = exercise
            .muscle_group
            .split(' ')
            .next()
            .unwrap_or(&exercise.muscle_group);
        exercise.muscle_group.contains(muscle_group) || muscle_group.contains(first_word)
    }

    fn allowed_for_level(exercise: &Exercise, level: TrainingLevel) -> bool {
        // Beginners skip advanced movements; everyone else takes the full catalog.
        level != TrainingLevel::Beginner || exercise.difficulty != TrainingLevel::Advanced
    }

    /// Build a weekly plan. `days_available == 0` means "use the prescription";
    /// otherwise the smaller of the two wins.
    pub fn generate_plan(
        &self,
        user_id: Uuid,
        level: TrainingLevel,
        goal: Goal,
        days_available: u8,
        rng: &mut impl Rng,
    ) -> WorkoutPlan {
        let config = workout_config(level, goal);
        let days = if days_available > 0 {
            days_available.min(config.days_per_week)
        } else {
            config.days_per_week
        };
        let split = split_for(days);

        let workout_days: Vec<WorkoutDay> = split
            .iter()
            .take(days as usize)
            .map(|split_day| {
                let mut exercises = Vec::new();

                for muscle_group in split_day.muscle_groups {
                    let mut available: Vec<&Exercise> = self
                        .exercises
                        .iter()
                        .filter(|ex| {
                            Self::matches_muscle(ex, muscle_group)
                                && Self::allowed_for_level(ex, level)
                        })
                        .collect();

                    available.shuffle(rng);
                    for exercise in available.iter().take(config.exercises_per_muscle) {
                        let sets = rng.gen_range(config.sets_min..=config.sets_max);
                        let mut instructions = vec![
                            format!(
                                "Carga sugerida: {}",
                                load_suggestion(&exercise.id, level)
                            ),
                            format!("Descanso: {}s entre séries", config.rest_seconds),
                        ];
                        instructions.extend(exercise.instructions.iter().cloned());

                        exercises.push(Exercise {
                            sets: Some(sets),
                            reps: Some(config.reps_range.to_string()),
                            instructions,
                            ..(*exercise).clone()
                        });
                    }
                }

                let estimated_duration = 10 + (exercises.len() as u32) * 5;

                WorkoutDay {
                    id: format!("{}_day_{}", user_id, split_day.day),
                    day_of_week: split_day.day,
                    name: split_day.name.to_string(),
                    exercises,
                    estimated_duration,
                    completed: false,
                }
            })
            .collect();

        WorkoutPlan {
            id: format!("{}_workout_{}", user_id, Utc::now().timestamp_millis()),
            user_id,
            week_start: Utc::now(),
            days: workout_days,
        }
    }

    /// Pick a random alternative with the exact same muscle group, carrying
    /// over the current prescription. Returns None when nothing qualifies.
    pub fn replace_exercise(
        &self,
        current: &Exercise,
        level: TrainingLevel,
        rng: &mut impl Rng,
    ) -> Option<Exercise> {
        let alternatives: Vec<&Exercise> = self
            .exercises
            .iter()
            .filter(|ex| {
                ex.muscle_group == current.muscle_group
                    && ex.id != current.id
                    && Self::allowed_for_level(ex, level)
            })
            .collect();

        let replacement = alternatives.choose(rng)?;
        Some(Exercise {
            sets: current.sets,
            reps: current.reps.clone(),
            ..(*replacement).clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn plan_uses_prescribed_days_when_availability_unset() {
        let service = WorkoutPlanService::new();
        let plan = service.generate_plan(
            Uuid::new_v4(),
            TrainingLevel::Beginner,
            Goal::WeightLoss,
            0,
            &mut rng(),
        );

        assert_eq!(plan.days.len(), 3);
        let days: Vec<u8> = plan.days.iter().map(|d| d.day_of_week).collect();
        assert_eq!(days, [1, 3, 5]);
    }

    #[test]
    fn availability_caps_but_never_raises_days() {
        let service = WorkoutPlanService::new();

        let capped = service.generate_plan(
            Uuid::new_v4(),
            TrainingLevel::Intermediate,
            Goal::MuscleGain,
            2,
            &mut rng(),
        );
        assert_eq!(capped.days.len(), 2);
        // Two days still come from the 3-day split.
        assert_eq!(capped.days[0].name, "Treino A - Corpo Todo");

        let uncapped = service.generate_plan(
            Uuid::new_v4(),
            TrainingLevel::Intermediate,
            Goal::MuscleGain,
            7,
            &mut rng(),
        );
        assert_eq!(uncapped.days.len(), 4, "prescription wins over availability");
    }

    #[test]
    fn six_day_split_selected_for_advanced_endurance() {
        let service = WorkoutPlanService::new();
        let plan = service.generate_plan(
            Uuid::new_v4(),
            TrainingLevel::Advanced,
            Goal::Endurance,
            7,
            &mut rng(),
        );

        assert_eq!(plan.days.len(), 6);
        assert_eq!(plan.days[5].name, "Treino F - Cardio e Core");
    }

    #[test]
    fn beginner_plans_exclude_advanced_exercises() {
        let service = WorkoutPlanService::new();
        let plan = service.generate_plan(
            Uuid::new_v4(),
            TrainingLevel::Beginner,
            Goal::MuscleGain,
            0,
            &mut rng(),
        );

        for day in &plan.days {
            for exercise in &day.exercises {
                assert_ne!(exercise.difficulty, TrainingLevel::Advanced, "{}", exercise.id);
            }
        }
    }

    #[test]
    fn sets_stay_within_prescription_and_duration_matches_count() {
        let service = WorkoutPlanService::new();
        let plan = service.generate_plan(
            Uuid::new_v4(),
            TrainingLevel::Advanced,
            Goal::MuscleGain,
            0,
            &mut rng(),
        );

        for day in &plan.days {
            assert_eq!(day.estimated_duration, 10 + day.exercises.len() as u32 * 5);
            for exercise in &day.exercises {
                let sets = exercise.sets.unwrap();
                assert!((4..=5).contains(&sets));
                assert_eq!(exercise.reps.as_deref(), Some("6-10"));
                assert!(exercise.instructions[0].starts_with("Carga sugerida: "));
                assert_eq!(exercise.instructions[1], "Descanso: 120s entre séries");
            }
        }
    }

    #[test]
    fn day_completion_is_a_plain_toggle() {
        let service = WorkoutPlanService::new();
        let mut plan = service.generate_plan(
            Uuid::new_v4(),
            TrainingLevel::Beginner,
            Goal::Maintenance,
            0,
            &mut rng(),
        );

        let day = &mut plan.days[0];
        assert!(!day.completed);
        day.toggle_completed();
        assert!(day.completed);
        day.toggle_completed();
        assert!(!day.completed);
    }

    #[test]
    fn day_ids_embed_user_and_split_day() {
        let service = WorkoutPlanService::new();
        let user_id = Uuid::new_v4();
        let plan = service.generate_plan(
            user_id,
            TrainingLevel::Beginner,
            Goal::Maintenance,
            0,
            &mut rng(),
        );

        assert_eq!(plan.days[1].id, format!("{user_id}_day_3"));
    }

    #[test]
    fn load_suggestions_fall_back_to_default_table() {
        assert_eq!(load_suggestion("bench_press", TrainingLevel::Beginner), "20-30kg");
        assert_eq!(load_suggestion("bench_press", TrainingLevel::Advanced), "70-100kg+");
        assert_eq!(load_suggestion("plank", TrainingLevel::Intermediate), "12-20kg");
    }

    #[test]
    fn adjust_load_scales_ranges() {
        assert_eq!(adjust_load("40-60kg", Progress::Easy), "42-66kg");
        assert_eq!(adjust_load("40-60kg", Progress::Hard), "36-57kg");
        assert_eq!(adjust_load("40-60kg", Progress::Perfect), "40-60kg");
    }

    #[test]
    fn adjust_load_keeps_single_values_single() {
        assert_eq!(adjust_load("50kg", Progress::Hard), "45kg");
        assert_eq!(adjust_load("50kg", Progress::Easy), "53kg");
        assert_eq!(adjust_load("50kg", Progress::Perfect), "50kg");
    }

    #[test]
    fn adjust_load_passes_through_malformed_strings() {
        assert_eq!(adjust_load("peso corporal", Progress::Easy), "peso corporal");
    }

    #[test]
    fn adjust_load_collapses_equal_bounds() {
        assert_eq!(adjust_load("10-10kg", Progress::Perfect), "10kg");
    }

    #[test]
    fn replace_exercise_matches_muscle_group_exactly() {
        let service = WorkoutPlanService::new();
        let catalog = exercise_catalog();
        let bench = catalog.iter().find(|e| e.id == "bench_press").unwrap();
        let mut current = bench.clone();
        current.sets = Some(4);
        current.reps = Some("8-12".to_string());

        let mut r = rng();
        let replacement = service
            .replace_exercise(&current, TrainingLevel::Intermediate, &mut r)
            .unwrap();

        assert_ne!(replacement.id, "bench_press");
        assert_eq!(replacement.muscle_group, "Peito");
        assert_eq!(replacement.sets, Some(4));
        assert_eq!(replacement.reps.as_deref(), Some("8-12"));
    }

    #[test]
    fn replace_exercise_returns_none_without_alternatives() {
        let service = WorkoutPlanService::new();
        let catalog = exercise_catalog();
        // "Corpo Todo" has a single exercise (burpees).
        let burpees = catalog.iter().find(|e| e.id == "burpees").unwrap();

        let mut r = rng();
        assert!(service
            .replace_exercise(burpees, TrainingLevel::Advanced, &mut r)
            .is_none());
    }

    #[test]
    fn beginner_replacement_never_suggests_advanced() {
        let service = WorkoutPlanService::new();
        let catalog = exercise_catalog();
        let pushup = catalog.iter().find(|e| e.id == "pushup").unwrap();

        let mut r = rng();
        for _ in 0..20 {
            if let Some(replacement) =
                service.replace_exercise(pushup, TrainingLevel::Beginner, &mut r)
            {
                assert_ne!(replacement.difficulty, TrainingLevel::Advanced);
            }
        }
    }
}
