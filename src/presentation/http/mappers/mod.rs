use chrono::SecondsFormat;
use poem::http::StatusCode;
use serde_json::Value;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        errors::DomainError,
        models::{Meal, MealMetrics, User},
    },
    presentation::http::responses::{MealDto, MealMetricsDto, UserDto},
};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
    }
}

pub fn map_meal(meal: &Meal) -> MealDto {
    MealDto {
        id: meal.id,
        user_id: meal.user_id,
        name: meal.name.clone(),
        description: meal.description.clone(),
        date_time: meal.date_time.to_rfc3339_opts(SecondsFormat::Millis, true),
        is_inside_diet: meal.is_inside_diet,
    }
}

pub fn map_metrics(metrics: &MealMetrics) -> MealMetricsDto {
    MealMetricsDto {
        total_meals: metrics.total_meals,
        meals_inside_diet: metrics.meals_inside_diet,
        meals_outside_diet: metrics.meals_outside_diet,
        best_inside_diet_sequence: metrics.best_inside_diet_sequence,
    }
}

/// Only a JSON boolean counts as a diet flag.
pub fn diet_flag(value: Option<&Value>) -> Option<bool> {
    value.and_then(Value::as_bool)
}

/// A path segment that isn't a UUID can't name any stored meal.
pub fn parse_meal_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::meal_not_found())
}

pub fn map_domain_error(err: DomainError) -> poem::Error {
    let status = match &err {
        DomainError::Validation(_) | DomainError::IdentityRequired => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) | DomainError::UnknownIdentity => StatusCode::NOT_FOUND,
        DomainError::Other(inner) => {
            error!(error = %inner, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    poem::Error::from_string(err.to_string(), status)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn only_booleans_are_diet_flags() {
        assert_eq!(diet_flag(Some(&json!(true))), Some(true));
        assert_eq!(diet_flag(Some(&json!(false))), Some(false));
        assert_eq!(diet_flag(Some(&json!("true"))), None);
        assert_eq!(diet_flag(Some(&json!(1))), None);
        assert_eq!(diet_flag(None), None);
    }

    #[test]
    fn error_statuses() {
        let cases = [
            (DomainError::validation("x"), StatusCode::BAD_REQUEST),
            (DomainError::IdentityRequired, StatusCode::BAD_REQUEST),
            (DomainError::meal_not_found(), StatusCode::NOT_FOUND),
            (DomainError::UnknownIdentity, StatusCode::NOT_FOUND),
            (
                DomainError::Other(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(map_domain_error(err).status(), status);
        }
    }

    #[test]
    fn malformed_meal_id_reads_as_not_found() {
        assert!(matches!(
            parse_meal_id("1700000000000"),
            Err(DomainError::NotFound(_))
        ));
    }
}
