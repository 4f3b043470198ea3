use crate::models::{Exercise, ExerciseCategory, TrainingLevel};

fn exercise(
    id: &str,
    name: &str,
    category: ExerciseCategory,
    muscle_group: &str,
    difficulty: TrainingLevel,
    instructions: &[&str],
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        category,
        muscle_group: muscle_group.to_string(),
        sets: None,
        reps: None,
        difficulty,
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
    }
}

/// The full exercise catalog used by the workout plan generator.
pub fn exercise_catalog() -> Vec<Exercise> {
    use ExerciseCategory::{Cardio, Strength};
    use TrainingLevel::{Advanced, Beginner, Intermediate};

    vec![
        // Chest
        exercise("bench_press", "Supino Reto", Strength, "Peito", Intermediate, &[
            "Deite no banco com os pés firmes no chão",
            "Segure a barra com pegada média (largura dos ombros)",
            "Desça controladamente até o peito",
            "Empurre explosivamente para cima",
        ]),
        exercise("incline_press", "Supino Inclinado", Strength, "Peito Superior", Intermediate, &[
            "Ajuste o banco em 30-45 graus",
            "Mesma técnica do supino reto",
            "Foque na contração do peito superior",
        ]),
        exercise("dumbbell_press", "Supino com Halteres", Strength, "Peito", Beginner, &[
            "Deite no banco com halteres",
            "Empurre para cima até extensão completa",
            "Desça controladamente",
        ]),
        exercise("cable_fly", "Crucifixo no Cross", Strength, "Peito", Intermediate, &[
            "Posicione-se no centro do cross",
            "Braços levemente flexionados",
            "Traga as mãos à frente em movimento de abraço",
        ]),
        exercise("pushup", "Flexão de Braço", Strength, "Peito", Beginner, &[
            "Posição de prancha com mãos na largura dos ombros",
            "Desça até o peito quase tocar o chão",
            "Empurre para cima",
        ]),
        exercise("dips", "Paralelas", Strength, "Peito e Tríceps", Advanced, &[
            "Segure nas barras paralelas",
            "Incline o tronco para frente",
            "Desça até 90 graus e empurre para cima",
        ]),
        // Back
        exercise("pullup", "Barra Fixa", Strength, "Costas", Advanced, &[
            "Pegada pronada na largura dos ombros",
            "Puxe até o queixo passar a barra",
            "Desça controladamente",
        ]),
        exercise("barbell_row", "Remada Curvada", Strength, "Costas", Intermediate, &[
            "Incline o tronco a 45 graus",
            "Puxe a barra até o abdômen",
            "Contraia as escápulas",
        ]),
        exercise("lat_pulldown", "Puxada Frontal", Strength, "Dorsais", Beginner, &[
            "Sente-se e ajuste as coxas",
            "Puxe a barra até o peito",
            "Controle a subida",
        ]),
        exercise("seated_row", "Remada Sentado", Strength, "Costas", Beginner, &[
            "Sente-se com pés apoiados",
            "Puxe o cabo até o abdômen",
            "Mantenha as costas retas",
        ]),
        exercise("deadlift", "Levantamento Terra", Strength, "Costas e Posterior", Advanced, &[
            "Pés na largura dos ombros",
            "Segure a barra com pegada mista ou pronada",
            "Levante mantendo as costas retas",
            "Empurre pelos calcanhares",
        ]),
        exercise("face_pull", "Puxada Alta para o Rosto", Strength, "Trapézio e Ombros", Beginner, &[
            "Use corda no cabo alto",
            "Puxe em direção ao rosto",
            "Abra os cotovelos para os lados",
        ]),
        // Legs
        exercise("squat", "Agachamento Livre", Strength, "Pernas", Intermediate, &[
            "Barra nas costas, pés na largura dos ombros",
            "Desça até coxas paralelas ao chão",
            "Empurre pelos calcanhares",
        ]),
        exercise("leg_press", "Leg Press 45°", Strength, "Pernas", Beginner, &[
            "Pés na largura dos ombros",
            "Desça até 90 graus",
            "Empurre explosivamente",
        ]),
        exercise("leg_extension", "Cadeira Extensora", Strength, "Quadríceps", Beginner, &[
            "Sente-se e ajuste o apoio",
            "Estenda as pernas completamente",
            "Contraia o quadríceps no topo",
        ]),
        exercise("leg_curl", "Mesa Flexora", Strength, "Posterior de Coxa", Beginner, &[
            "Deite de bruços",
            "Flexione as pernas trazendo calcanhares aos glúteos",
            "Contraia no topo",
        ]),
        exercise("lunges", "Afundo", Strength, "Pernas", Intermediate, &[
            "Dê um passo à frente",
            "Desça até joelho traseiro quase tocar o chão",
            "Empurre pela perna da frente",
        ]),
        exercise("calf_raise", "Panturrilha em Pé", Strength, "Panturrilha", Beginner, &[
            "Fique na ponta dos pés",
            "Suba o máximo possível",
            "Desça controladamente",
        ]),
        exercise("romanian_deadlift", "Levantamento Terra Romeno", Strength, "Posterior de Coxa", Intermediate, &[
            "Segure a barra com pegada pronada",
            "Desça a barra deslizando pelas pernas",
            "Mantenha joelhos levemente flexionados",
        ]),
        // Shoulders
        exercise("shoulder_press", "Desenvolvimento com Halteres", Strength, "Ombros", Intermediate, &[
            "Sentado, halteres na altura dos ombros",
            "Empurre para cima até extensão completa",
            "Desça controladamente",
        ]),
        exercise("military_press", "Desenvolvimento Militar", Strength, "Ombros", Intermediate, &[
            "Em pé ou sentado com barra",
            "Empurre a barra acima da cabeça",
            "Desça até a altura do queixo",
        ]),
        exercise("lateral_raise", "Elevação Lateral", Strength, "Ombros Laterais", Beginner, &[
            "Braços ao lado do corpo",
            "Eleve lateralmente até altura dos ombros",
            "Desça controladamente",
        ]),
        exercise("front_raise", "Elevação Frontal", Strength, "Ombros Frontais", Beginner, &[
            "Braços à frente do corpo",
            "Eleve até altura dos ombros",
            "Alterne os braços",
        ]),
        exercise("rear_delt_fly", "Crucifixo Inverso", Strength, "Ombros Posteriores", Beginner, &[
            "Incline o tronco para frente",
            "Abra os braços lateralmente",
            "Contraia as escápulas",
        ]),
        // Biceps
        exercise("barbell_curl", "Rosca Direta", Strength, "Bíceps", Beginner, &[
            "Cotovelos fixos ao lado do corpo",
            "Flexione os braços trazendo a barra ao peito",
            "Contraia o bíceps no topo",
        ]),
        exercise("hammer_curl", "Rosca Martelo", Strength, "Bíceps e Antebraço", Beginner, &[
            "Pegada neutra (palmas frente a frente)",
            "Flexione alternadamente",
            "Mantenha cotovelos estáveis",
        ]),
        exercise("preacher_curl", "Rosca Scott", Strength, "Bíceps", Intermediate, &[
            "Apoie os braços no banco Scott",
            "Flexione até contração máxima",
            "Desça controladamente",
        ]),
        exercise("concentration_curl", "Rosca Concentrada", Strength, "Bíceps", Beginner, &[
            "Sentado, cotovelo apoiado na coxa",
            "Flexione o braço completamente",
            "Foque na contração",
        ]),
        // Triceps
        exercise("tricep_pushdown", "Tríceps Pulley", Strength, "Tríceps", Beginner, &[
            "Cotovelos fixos ao lado do corpo",
            "Empurre a barra para baixo",
            "Contraia o tríceps no final do movimento",
        ]),
        exercise("overhead_extension", "Tríceps Francês", Strength, "Tríceps", Intermediate, &[
            "Segure o halter acima da cabeça",
            "Desça atrás da cabeça flexionando cotovelos",
            "Estenda os braços completamente",
        ]),
        exercise("close_grip_press", "Supino Fechado", Strength, "Tríceps", Intermediate, &[
            "Pegada mais fechada que o supino normal",
            "Desça a barra até o peito",
            "Empurre focando no tríceps",
        ]),
        exercise("tricep_dips", "Mergulho para Tríceps", Strength, "Tríceps", Intermediate, &[
            "Corpo mais vertical que no mergulho para peito",
            "Desça até 90 graus",
            "Empurre focando no tríceps",
        ]),
        // Abs
        exercise("crunches", "Abdominal Tradicional", Strength, "Abdômen", Beginner, &[
            "Deite de costas, joelhos flexionados",
            "Eleve o tronco contraindo o abdômen",
            "Desça controladamente",
        ]),
        exercise("plank", "Prancha", Strength, "Core", Beginner, &[
            "Apoie antebraços e pés no chão",
            "Mantenha o corpo reto",
            "Contraia o abdômen",
        ]),
        exercise("leg_raises", "Elevação de Pernas", Strength, "Abdômen Inferior", Intermediate, &[
            "Deite de costas",
            "Eleve as pernas até 90 graus",
            "Desça sem tocar o chão",
        ]),
        exercise("russian_twist", "Rotação Russa", Strength, "Oblíquos", Intermediate, &[
            "Sentado com pés elevados",
            "Gire o tronco de um lado para o outro",
            "Segure peso para maior intensidade",
        ]),
        // Cardio
        exercise("running", "Corrida", Cardio, "Cardiovascular", Beginner, &[
            "Mantenha ritmo constante",
            "Respire de forma controlada",
            "Aumente intensidade gradualmente",
        ]),
        exercise("cycling", "Bicicleta", Cardio, "Cardiovascular", Beginner, &[
            "Ajuste o banco corretamente",
            "Mantenha cadência constante",
            "Varie a resistência",
        ]),
        exercise("jump_rope", "Pular Corda", Cardio, "Cardiovascular", Intermediate, &[
            "Pule com a ponta dos pés",
            "Mantenha cotovelos próximos ao corpo",
            "Respire ritmicamente",
        ]),
        exercise("burpees", "Burpees", Cardio, "Corpo Todo", Advanced, &[
            "Agache e apoie as mãos no chão",
            "Jogue as pernas para trás",
            "Faça uma flexão",
            "Volte e pule",
        ]),
    ]
}
