use serde::{Deserialize, Serialize};

use super::user::Goal;

/// Static catalog entry. Timing labels are the Portuguese slot names the
/// scheduler matches against ("Café da manhã", "Pré-treino", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplement {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub timing: Vec<String>,
    pub benefits: Vec<String>,
    pub recommended_for: Vec<Goal>,
}

/// A supplement placed into a schedule slot, with its synthesized id
/// (`{supplement_id}_{slot_tag}_{index}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledSupplement {
    #[serde(flatten)]
    pub supplement: Supplement,
    pub schedule_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementSlot {
    pub time: String,
    pub period: String,
    pub supplements: Vec<ScheduledSupplement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementProtocol {
    pub schedule: Vec<SupplementSlot>,
    /// Number of slot placements, not distinct supplements.
    pub total_supplements: usize,
    /// Flat per-supplement estimate, not weighted by slot count.
    pub estimated_monthly_cost: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Default for Budget {
    fn default() -> Self {
        Budget::Medium
    }
}

/// Advisory (supplement, reason) pair from the static recommendation rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementRecommendation {
    pub supplement: String,
    pub reason: String,
}
