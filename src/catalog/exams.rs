use crate::models::MedicalExam;

fn exam(id: &str, name: &str, description: &str, frequency: &str, recommended_for: &[&str]) -> MedicalExam {
    MedicalExam {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        frequency: frequency.to_string(),
        recommended_for: recommended_for.iter().map(|s| s.to_string()).collect(),
    }
}

/// Advisory catalog of recommended medical exams.
pub fn medical_exams() -> Vec<MedicalExam> {
    vec![
        exam(
            "hemogram",
            "Hemograma Completo",
            "Avalia células sanguíneas e detecta anemia, infecções e outros problemas",
            "Anual",
            &["Todos"],
        ),
        exam(
            "lipid_profile",
            "Perfil Lipídico",
            "Mede colesterol total, HDL, LDL e triglicerídeos",
            "Anual",
            &["Todos"],
        ),
        exam(
            "glucose",
            "Glicemia em Jejum",
            "Avalia níveis de açúcar no sangue",
            "Anual",
            &["Todos"],
        ),
        exam(
            "thyroid",
            "Função Tireoidiana (TSH, T3, T4)",
            "Avalia funcionamento da tireoide",
            "Anual",
            &["Todos"],
        ),
        exam(
            "vitamin_d",
            "Vitamina D",
            "Mede níveis de vitamina D no organismo",
            "Anual",
            &["Praticantes de atividade física"],
        ),
        exam(
            "testosterone",
            "Testosterona Total e Livre",
            "Avalia níveis hormonais",
            "Anual",
            &["Homens praticantes de musculação"],
        ),
        exam(
            "liver",
            "Função Hepática (TGO, TGP)",
            "Avalia saúde do fígado",
            "Anual",
            &["Usuários de suplementos"],
        ),
        exam(
            "kidney",
            "Função Renal (Creatinina, Ureia)",
            "Avalia saúde dos rins",
            "Anual",
            &["Dieta hiperproteica"],
        ),
    ]
}
