use serde::{Deserialize, Serialize};

/// Recommended medical exam from the static advisory catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalExam {
    pub id: String,
    pub name: String,
    pub description: String,
    pub frequency: String,
    pub recommended_for: Vec<String>,
}
