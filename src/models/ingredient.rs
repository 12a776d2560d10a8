use serde::{Deserialize, Serialize};

/// A priced component of a meal.
///
/// `amount` and `price_per_unit` are both expressed in `unit`. No sign or
/// format validation is applied; zero and negative values are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    name: String,
    unit: String,
    amount: f64,
    price_per_unit: f64,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        amount: f64,
        price_per_unit: f64,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            amount,
            price_per_unit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    /// Buying price of the amount used: amount × price per unit.
    #[inline]
    pub fn price(&self) -> f64 {
        self.amount * self.price_per_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn test_price_is_amount_times_unit_price() {
        let egg = Ingredient::new("Egg", "pc", 2.0, 0.5);
        assert_float_absolute_eq!(egg.price(), 1.0);

        let flour = Ingredient::new("Flour", "kg", 0.25, 1.8);
        assert_float_absolute_eq!(flour.price(), 0.45);
    }

    #[test]
    fn test_zero_amount_costs_nothing() {
        let salt = Ingredient::new("Salt", "g", 0.0, 0.02);
        assert_eq!(salt.price(), 0.0);
    }

    #[test]
    fn test_negative_values_are_kept() {
        let refund = Ingredient::new("Deposit", "bottle", 2.0, -0.25);
        assert_eq!(refund.price_per_unit(), -0.25);
        assert_float_absolute_eq!(refund.price(), -0.5);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let egg = Ingredient::new("Egg", "pc", 2.0, 0.5);
        let value = serde_json::to_value(&egg).unwrap();
        assert_eq!(value["name"], "Egg");
        assert_eq!(value["unit"], "pc");
        assert_eq!(value["amount"], 2.0);
        assert_eq!(value["pricePerUnit"], 0.5);
    }
}
