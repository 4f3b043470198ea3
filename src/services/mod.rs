pub mod meal_plan_service;
pub mod metabolic;
pub mod subscription_service;
pub mod supplement_service;
pub mod workout_plan_service;

pub use meal_plan_service::MealPlanService;
pub use subscription_service::SubscriptionService;
pub use supplement_service::SupplementService;
pub use workout_plan_service::WorkoutPlanService;
