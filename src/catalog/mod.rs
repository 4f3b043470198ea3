// Static reference catalogs. Loaded once per service, never mutated at runtime.

pub mod exams;
pub mod exercises;
pub mod foods;
pub mod supplements;

pub use exams::medical_exams;
pub use exercises::exercise_catalog;
pub use foods::food_catalog;
pub use supplements::supplement_catalog;

/// Dietary restrictions the onboarding flow offers. Low Carb, Sem Açúcar,
/// Sem Glúten and Sem Amendoim are selectable but have no filtering effect
/// in the meal generator (intentionally left as-is, see DESIGN.md).
pub const DIETARY_RESTRICTIONS: [&str; 8] = [
    "Vegetariano",
    "Vegano",
    "Sem Lactose",
    "Sem Glúten",
    "Sem Frutos do Mar",
    "Sem Amendoim",
    "Low Carb",
    "Sem Açúcar",
];
