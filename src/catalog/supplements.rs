use crate::models::{Goal, Supplement};

fn supplement(
    id: &str,
    name: &str,
    dosage: &str,
    timing: &[&str],
    benefits: &[&str],
    recommended_for: &[Goal],
) -> Supplement {
    Supplement {
        id: id.to_string(),
        name: name.to_string(),
        dosage: dosage.to_string(),
        timing: timing.iter().map(|s| s.to_string()).collect(),
        benefits: benefits.iter().map(|s| s.to_string()).collect(),
        recommended_for: recommended_for.to_vec(),
    }
}

/// The supplement catalog used by the protocol generator.
pub fn supplement_catalog() -> Vec<Supplement> {
    use Goal::{Endurance, Maintenance, MuscleGain, WeightLoss};

    vec![
        supplement(
            "whey",
            "Whey Protein",
            "30g (1 scoop)",
            &["Pós-treino", "Café da manhã"],
            &["Recuperação muscular", "Síntese proteica", "Praticidade"],
            &[MuscleGain, WeightLoss, Maintenance],
        ),
        supplement(
            "creatine",
            "Creatina",
            "5g",
            &["Pós-treino"],
            &["Força", "Ganho de massa", "Performance"],
            &[MuscleGain, Endurance],
        ),
        supplement(
            "omega3",
            "Ômega 3",
            "1-2 cápsulas",
            &["Café da manhã", "Jantar"],
            &["Saúde cardiovascular", "Anti-inflamatório", "Recuperação"],
            &[WeightLoss, MuscleGain, Maintenance, Endurance],
        ),
        supplement(
            "multivitamin",
            "Multivitamínico",
            "1 cápsula",
            &["Café da manhã"],
            &["Imunidade", "Energia", "Saúde geral"],
            &[WeightLoss, MuscleGain, Maintenance, Endurance],
        ),
        supplement(
            "bcaa",
            "BCAA",
            "5g",
            &["Pré-treino", "Intra-treino"],
            &["Recuperação", "Reduz fadiga", "Preserva massa muscular"],
            &[MuscleGain, Endurance],
        ),
    ]
}
