use serde::{Deserialize, Serialize};

use super::meal::Meal;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealMetrics {
    pub total_meals: u32,
    pub meals_inside_diet: u32,
    pub meals_outside_diet: u32,
    pub best_inside_diet_sequence: u32,
}

impl MealMetrics {
    /// Aggregates one user's meals. The streak is measured in chronological order,
    /// whatever order the meals were recorded in.
    pub fn from_meals(meals: &[Meal]) -> Self {
        let total_meals = meals.len() as u32;
        let meals_inside_diet = meals.iter().filter(|m| m.is_inside_diet).count() as u32;

        // stable: meals sharing a timestamp keep their recorded order
        let mut ordered: Vec<&Meal> = meals.iter().collect();
        ordered.sort_by_key(|m| m.date_time);

        let mut best = 0;
        let mut current = 0;
        for meal in ordered {
            if meal.is_inside_diet {
                current += 1;
                if current > best {
                    best = current;
                }
            } else {
                current = 0;
            }
        }

        Self {
            total_meals,
            meals_inside_diet,
            meals_outside_diet: total_meals - meals_inside_diet,
            best_inside_diet_sequence: best,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn meal(day: u32, is_inside_diet: bool) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            name: format!("meal {day}"),
            description: String::new(),
            date_time: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
            is_inside_diet,
        }
    }

    #[test]
    fn no_meals_yields_zeroes() {
        assert_eq!(MealMetrics::from_meals(&[]), MealMetrics::default());
    }

    #[test]
    fn longest_run_in_chronological_order() {
        let flags = [true, true, false, true, true, true, false];
        let meals: Vec<Meal> = flags
            .iter()
            .enumerate()
            .map(|(i, flag)| meal(i as u32 + 1, *flag))
            .collect();

        let metrics = MealMetrics::from_meals(&meals);
        assert_eq!(
            metrics,
            MealMetrics {
                total_meals: 7,
                meals_inside_diet: 5,
                meals_outside_diet: 2,
                best_inside_diet_sequence: 3,
            }
        );
    }

    #[test]
    fn backfilled_meals_are_sorted_before_scanning() {
        let meals = vec![meal(3, true), meal(1, true), meal(2, false)];
        let metrics = MealMetrics::from_meals(&meals);
        assert_eq!(metrics.total_meals, 3);
        assert_eq!(metrics.meals_inside_diet, 2);
        assert_eq!(metrics.meals_outside_diet, 1);
        assert_eq!(metrics.best_inside_diet_sequence, 1);
    }

    #[test]
    fn run_reaching_the_end_counts() {
        let meals = vec![meal(1, false), meal(2, true), meal(3, true)];
        assert_eq!(MealMetrics::from_meals(&meals).best_inside_diet_sequence, 2);
    }

    #[test]
    fn all_outside_diet_has_no_streak() {
        let meals = vec![meal(1, false), meal(2, false)];
        let metrics = MealMetrics::from_meals(&meals);
        assert_eq!(metrics.meals_outside_diet, 2);
        assert_eq!(metrics.best_inside_diet_sequence, 0);
    }

    #[test]
    fn equal_timestamps_keep_recorded_order() {
        let first = meal(1, true);
        let second = meal(1, false);
        let third = meal(2, true);
        assert_eq!(first.date_time, second.date_time);

        // recorded order: in, out, in -> best 1
        let metrics = MealMetrics::from_meals(&[first.clone(), second.clone(), third.clone()]);
        assert_eq!(metrics.best_inside_diet_sequence, 1);

        // recorded order: out, in, in -> the tie resolves to out first, best 2
        let metrics = MealMetrics::from_meals(&[second, first, third]);
        assert_eq!(metrics.best_inside_diet_sequence, 2);
    }
}
