pub mod meal;
pub mod metrics;
pub mod user;

pub use meal::{Meal, MealPatch};
pub use metrics::MealMetrics;
pub use user::{User, UserResolution};
