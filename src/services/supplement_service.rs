use crate::catalog::supplements::supplement_catalog;
use crate::models::{
    Budget, Gender, Goal, ScheduledSupplement, Supplement, SupplementProtocol,
    SupplementRecommendation, SupplementSlot, TrainingLevel,
};

const MINUTES_PER_DAY: i32 = 24 * 60;

fn time_to_minutes(time: &str) -> Option<i32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

fn minutes_to_time(minutes: i32) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

fn monthly_cost(supplement_id: &str) -> u32 {
    match supplement_id {
        "whey" => 120,
        "creatine" => 50,
        "omega3" => 40,
        "multivitamin" => 35,
        "bcaa" => 80,
        _ => 0,
    }
}

fn schedule_slot(
    time: String,
    period: &str,
    tag: &str,
    supplements: &[Supplement],
) -> SupplementSlot {
    SupplementSlot {
        time,
        period: period.to_string(),
        supplements: supplements
            .iter()
            .enumerate()
            .map(|(i, s)| ScheduledSupplement {
                schedule_id: format!("{}_{}_{}", s.id, tag, i),
                supplement: s.clone(),
            })
            .collect(),
    }
}

fn with_timing<'a>(supplements: &'a [Supplement], timing: &str) -> Vec<Supplement> {
    supplements
        .iter()
        .filter(|s| s.timing.iter().any(|t| t == timing))
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct SupplementService {
    catalog: Vec<Supplement>,
}

impl Default for SupplementService {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplementService {
    pub fn new() -> Self {
        Self {
            catalog: supplement_catalog(),
        }
    }

    pub fn catalog(&self) -> &[Supplement] {
        &self.catalog
    }

    fn goal_supplements(goal: Goal) -> &'static [&'static str] {
        match goal {
            Goal::MuscleGain => &["whey", "creatine", "bcaa"],
            Goal::WeightLoss => &["whey", "omega3"],
            Goal::Maintenance => &["whey"],
            Goal::Endurance => &["bcaa", "whey"],
        }
    }

    fn level_supplements(level: TrainingLevel) -> &'static [&'static str] {
        match level {
            TrainingLevel::Beginner => &[],
            TrainingLevel::Intermediate => &["bcaa"],
            TrainingLevel::Advanced => &["bcaa", "creatine"],
        }
    }

    /// Build a daily supplement protocol for the goal/level/budget combination.
    ///
    /// Candidate order is essentials, then goal picks, then level picks, with
    /// first-seen deduplication; the budget cap is applied to that order, so a
    /// low budget keeps the essentials.
    pub fn generate_protocol(
        &self,
        goal: Goal,
        level: TrainingLevel,
        training_days: u8,
        budget: Budget,
    ) -> SupplementProtocol {
        let mut candidate_ids: Vec<&str> = Vec::new();
        for id in ["multivitamin", "omega3"]
            .into_iter()
            .chain(Self::goal_supplements(goal).iter().copied())
            .chain(Self::level_supplements(level).iter().copied())
        {
            if !candidate_ids.contains(&id) {
                candidate_ids.push(id);
            }
        }

        let cap = match budget {
            Budget::Low => 3,
            Budget::Medium => 5,
            Budget::High => candidate_ids.len(),
        };
        candidate_ids.truncate(cap);

        let supplements: Vec<Supplement> = candidate_ids
            .iter()
            .filter_map(|id| self.catalog.iter().find(|s| s.id == *id).cloned())
            .collect();

        let morning = with_timing(&supplements, "Café da manhã");
        let pre_workout = with_timing(&supplements, "Pré-treino");
        let post_workout = with_timing(&supplements, "Pós-treino");
        let dinner = with_timing(&supplements, "Jantar");

        let mut schedule = Vec::new();
        if !morning.is_empty() {
            schedule.push(schedule_slot(
                "07:00".to_string(),
                "Café da Manhã",
                "morning",
                &morning,
            ));
        }
        if !pre_workout.is_empty() && training_days > 0 {
            schedule.push(schedule_slot(
                "10:00".to_string(),
                "Pré-Treino",
                "pre",
                &pre_workout,
            ));
        }
        if !post_workout.is_empty() && training_days > 0 {
            schedule.push(schedule_slot(
                "12:00".to_string(),
                "Pós-Treino",
                "post",
                &post_workout,
            ));
        }
        if !dinner.is_empty() {
            schedule.push(schedule_slot(
                "19:30".to_string(),
                "Jantar",
                "dinner",
                &dinner,
            ));
        }

        let estimated_monthly_cost = supplements.iter().map(|s| monthly_cost(&s.id)).sum();
        let total_supplements = schedule.iter().map(|slot| slot.supplements.len()).sum();

        SupplementProtocol {
            schedule,
            total_supplements,
            estimated_monthly_cost,
        }
    }

    /// Derive intake times from the user's daily anchors. A slot whose anchor
    /// time fails to parse is dropped; derived times wrap around midnight.
    pub fn custom_schedule(
        wake_up_time: &str,
        workout_time: &str,
        sleep_time: &str,
        supplements: &[Supplement],
    ) -> Vec<SupplementSlot> {
        let mut schedule = Vec::new();

        let breakfast = with_timing(supplements, "Café da manhã");
        if !breakfast.is_empty() {
            if let Some(wake_up) = time_to_minutes(wake_up_time) {
                schedule.push(schedule_slot(
                    minutes_to_time(wake_up + 30),
                    "Café da Manhã",
                    "breakfast",
                    &breakfast,
                ));
            }
        }

        let pre_workout = with_timing(supplements, "Pré-treino");
        let post_workout = with_timing(supplements, "Pós-treino");
        if let Some(workout) = time_to_minutes(workout_time) {
            if !pre_workout.is_empty() {
                schedule.push(schedule_slot(
                    minutes_to_time(workout - 30),
                    "Pré-Treino",
                    "pre",
                    &pre_workout,
                ));
            }
            // Workouts are assumed to run 90 minutes.
            if !post_workout.is_empty() {
                schedule.push(schedule_slot(
                    minutes_to_time(workout + 90),
                    "Pós-Treino",
                    "post",
                    &post_workout,
                ));
            }
        }

        let dinner = with_timing(supplements, "Jantar");
        if !dinner.is_empty() {
            if let Some(sleep) = time_to_minutes(sleep_time) {
                schedule.push(schedule_slot(
                    minutes_to_time(sleep - 180),
                    "Jantar",
                    "dinner",
                    &dinner,
                ));
            }
        }

        schedule
    }

    /// First slot within 15 minutes of the given clock time, if any.
    pub fn reminder_for<'a>(
        schedule: &'a [SupplementSlot],
        current_time: &str,
    ) -> Option<&'a SupplementSlot> {
        let current = time_to_minutes(current_time)?;
        schedule.iter().find(|slot| {
            time_to_minutes(&slot.time)
                .map(|t| (current - t).abs() <= 15)
                .unwrap_or(false)
        })
    }

    /// Extra supplement suggestions keyed on common deficiencies.
    pub fn additional_recommendations(
        goal: Goal,
        age: u32,
        gender: Gender,
    ) -> Vec<SupplementRecommendation> {
        let mut recommendations = Vec::new();
        let recommend = |list: &mut Vec<SupplementRecommendation>, supplement: &str, reason: &str| {
            list.push(SupplementRecommendation {
                supplement: supplement.to_string(),
                reason: reason.to_string(),
            });
        };

        if age > 30 {
            recommend(
                &mut recommendations,
                "Vitamina D3",
                "Importante para saúde óssea e imunidade, especialmente após os 30 anos",
            );
        }
        if matches!(goal, Goal::MuscleGain | Goal::Endurance) {
            recommend(
                &mut recommendations,
                "Magnésio",
                "Auxilia na recuperação muscular e qualidade do sono",
            );
        }
        if gender == Gender::Male && goal == Goal::MuscleGain {
            recommend(
                &mut recommendations,
                "Zinco",
                "Importante para produção de testosterona e recuperação",
            );
        }
        if gender == Gender::Female && age > 25 {
            recommend(
                &mut recommendations,
                "Colágeno",
                "Beneficia pele, cabelos, unhas e articulações",
            );
        }
        if matches!(goal, Goal::Endurance | Goal::WeightLoss) {
            recommend(
                &mut recommendations,
                "Cafeína (Pré-treino)",
                "Aumenta energia, foco e performance no treino",
            );
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_for_muscle_gain_advanced_high_budget() {
        let service = SupplementService::new();
        let protocol = service.generate_protocol(
            Goal::MuscleGain,
            TrainingLevel::Advanced,
            5,
            Budget::High,
        );

        // Candidates: multivitamin, omega3, whey, creatine, bcaa (deduped).
        assert_eq!(protocol.estimated_monthly_cost, 35 + 40 + 120 + 50 + 80);

        let periods: Vec<&str> = protocol.schedule.iter().map(|s| s.period.as_str()).collect();
        assert_eq!(
            periods,
            ["Café da Manhã", "Pré-Treino", "Pós-Treino", "Jantar"]
        );
        let times: Vec<&str> = protocol.schedule.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, ["07:00", "10:00", "12:00", "19:30"]);

        let scheduled: usize = protocol.schedule.iter().map(|s| s.supplements.len()).sum();
        assert_eq!(protocol.total_supplements, scheduled);
    }

    #[test]
    fn low_budget_keeps_first_three_candidates() {
        let service = SupplementService::new();
        let protocol = service.generate_protocol(
            Goal::MuscleGain,
            TrainingLevel::Advanced,
            5,
            Budget::Low,
        );

        // multivitamin + omega3 + whey.
        assert_eq!(protocol.estimated_monthly_cost, 35 + 40 + 120);
    }

    #[test]
    fn rest_weeks_skip_workout_slots() {
        let service = SupplementService::new();
        let protocol = service.generate_protocol(
            Goal::MuscleGain,
            TrainingLevel::Advanced,
            0,
            Budget::High,
        );

        for slot in &protocol.schedule {
            assert!(
                slot.period != "Pré-Treino" && slot.period != "Pós-Treino",
                "{}",
                slot.period
            );
        }
    }

    #[test]
    fn schedule_ids_carry_slot_tag_and_index() {
        let service = SupplementService::new();
        let protocol = service.generate_protocol(
            Goal::MuscleGain,
            TrainingLevel::Advanced,
            5,
            Budget::High,
        );

        let morning = &protocol.schedule[0];
        for (i, entry) in morning.supplements.iter().enumerate() {
            assert_eq!(
                entry.schedule_id,
                format!("{}_morning_{}", entry.supplement.id, i)
            );
        }
    }

    #[test]
    fn custom_schedule_derives_times_from_anchors() {
        let supplements = supplement_catalog();
        let schedule =
            SupplementService::custom_schedule("06:30", "17:00", "23:00", &supplements);

        let by_period = |p: &str| schedule.iter().find(|s| s.period == p).unwrap();
        assert_eq!(by_period("Café da Manhã").time, "07:00");
        assert_eq!(by_period("Pré-Treino").time, "16:30");
        assert_eq!(by_period("Pós-Treino").time, "18:30");
        assert_eq!(by_period("Jantar").time, "20:00");
    }

    #[test]
    fn custom_schedule_wraps_past_midnight() {
        let supplements = supplement_catalog();
        let schedule =
            SupplementService::custom_schedule("06:30", "23:30", "01:00", &supplements);

        let by_period = |p: &str| schedule.iter().find(|s| s.period == p).unwrap();
        // 23:30 + 90min wraps to 01:00; 01:00 - 180min wraps to 22:00.
        assert_eq!(by_period("Pós-Treino").time, "01:00");
        assert_eq!(by_period("Jantar").time, "22:00");
    }

    #[test]
    fn custom_schedule_drops_slots_with_bad_anchors() {
        let supplements = supplement_catalog();
        let schedule =
            SupplementService::custom_schedule("bogus", "17:00", "23:00", &supplements);

        assert!(schedule.iter().all(|s| s.period != "Café da Manhã"));
        assert!(schedule.iter().any(|s| s.period == "Pré-Treino"));
    }

    #[test]
    fn reminder_matches_within_fifteen_minutes() {
        let supplements = supplement_catalog();
        let schedule =
            SupplementService::custom_schedule("06:30", "17:00", "23:00", &supplements);

        let hit = SupplementService::reminder_for(&schedule, "16:20").unwrap();
        assert_eq!(hit.period, "Pré-Treino");

        assert!(SupplementService::reminder_for(&schedule, "14:00").is_none());
    }

    #[test]
    fn recommendations_follow_profile_rules() {
        let recs =
            SupplementService::additional_recommendations(Goal::MuscleGain, 35, Gender::Male);
        let names: Vec<&str> = recs.iter().map(|r| r.supplement.as_str()).collect();
        assert_eq!(names, ["Vitamina D3", "Magnésio", "Zinco"]);

        let recs =
            SupplementService::additional_recommendations(Goal::WeightLoss, 28, Gender::Female);
        let names: Vec<&str> = recs.iter().map(|r| r.supplement.as_str()).collect();
        assert_eq!(names, ["Colágeno", "Cafeína (Pré-treino)"]);

        let recs =
            SupplementService::additional_recommendations(Goal::Maintenance, 22, Gender::Other);
        assert!(recs.is_empty());
    }
}
