use serde::{Deserialize, Serialize};

use crate::models::Meal;

/// The ordered list of meals for one session.
///
/// Serializes as `{"meals": [...]}`, the on-disk document shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    meals: Vec<Meal>,
}

impl Catalog {
    /// Create a catalog from a list of meals, keeping their order.
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Append a meal. Names are not required to be unique.
    pub fn add(&mut self, meal: Meal) {
        self.meals.push(meal);
    }

    /// Remove the first meal equal to `meal`. Absent meals are a no-op.
    pub fn remove(&mut self, meal: &Meal) -> bool {
        match self.meals.iter().position(|m| m == meal) {
            Some(idx) => {
                self.meals.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove the meal at `index`, if any.
    pub fn remove_at(&mut self, index: usize) -> Option<Meal> {
        if index < self.meals.len() {
            Some(self.meals.remove(index))
        } else {
            None
        }
    }

    /// Find the index of the first meal with this name (case-insensitive).
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.meals
            .iter()
            .position(|m| m.name().to_lowercase() == wanted)
    }

    /// Meal names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.meals.iter().map(Meal::name).collect()
    }

    /// Name for a meal the user left unnamed: `Meal:<n>` with the smallest
    /// `n` not already taken in this catalog.
    pub fn placeholder_name(&self) -> String {
        (1..)
            .map(|n| format!("Meal:{}", n))
            .find(|candidate| self.meals.iter().all(|m| m.name() != candidate))
            .unwrap_or_default()
    }

    /// Combined price of every meal.
    pub fn total_price(&self) -> f64 {
        self.meals.iter().map(Meal::total_price).sum()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Meal::with_ingredients("Breakfast", vec![Ingredient::new("Egg", "pc", 2.0, 0.5)]),
            Meal::with_ingredients(
                "Lunch",
                vec![
                    Ingredient::new("Rice", "g", 150.0, 0.004),
                    Ingredient::new("Beans", "can", 1.0, 0.9),
                ],
            ),
        ])
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut catalog = sample_catalog();
        catalog.add(Meal::new("Dinner"));
        catalog.add(Meal::new("Dinner"));
        assert_eq!(catalog.names(), vec!["Breakfast", "Lunch", "Dinner", "Dinner"]);
    }

    #[test]
    fn test_remove_absent_meal_is_noop() {
        let mut catalog = sample_catalog();
        let before = catalog.clone();

        assert!(!catalog.remove(&Meal::new("Brunch")));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_remove_present_meal() {
        let mut catalog = sample_catalog();
        let lunch = catalog.meals()[1].clone();

        assert!(catalog.remove(&lunch));
        assert_eq!(catalog.names(), vec!["Breakfast"]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut catalog = sample_catalog();
        assert!(catalog.remove_at(5).is_none());
        assert_eq!(catalog.len(), 2);

        let removed = catalog.remove_at(0).unwrap();
        assert_eq!(removed.name(), "Breakfast");
        assert_eq!(catalog.names(), vec!["Lunch"]);
    }

    #[test]
    fn test_position_by_name_case_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.position_by_name("lunch"), Some(1));
        assert_eq!(catalog.position_by_name("BREAKFAST"), Some(0));
        assert_eq!(catalog.position_by_name("dinner"), None);
    }

    #[test]
    fn test_placeholder_name_skips_taken_names() {
        let mut catalog = Catalog::default();
        assert_eq!(catalog.placeholder_name(), "Meal:1");

        catalog.add(Meal::new("Meal:1"));
        catalog.add(Meal::new("Meal:3"));
        assert_eq!(catalog.placeholder_name(), "Meal:2");
    }
}
