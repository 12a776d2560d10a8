use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::Ingredient;

/// A named, ordered combination of ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    name: String,

    #[serde(default)]
    ingredients: Vec<Ingredient>,
}

impl Meal {
    /// Create a meal with no ingredients.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
        }
    }

    /// Create a meal from an ordered list of ingredients.
    pub fn with_ingredients(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Append an ingredient. Duplicates are allowed.
    pub fn add(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Remove the first ingredient equal to `ingredient`.
    ///
    /// Returns `false` and leaves the meal untouched if there is none.
    pub fn remove(&mut self, ingredient: &Ingredient) -> bool {
        match self.ingredients.iter().position(|i| i == ingredient) {
            Some(idx) => {
                self.ingredients.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Sum of all ingredient prices; 0 for an empty meal.
    pub fn total_price(&self) -> f64 {
        self.ingredients.iter().map(Ingredient::price).sum()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Render the meal as an HTML table.
    ///
    /// Four rows: the meal name, ingredient names, "amount unit" per
    /// ingredient and prices followed by the total. Names are inserted
    /// as-is, without escaping.
    pub fn to_html_table(&self) -> String {
        let columns = self.ingredients.len() + 2;
        let mut table = String::from("<table>\n");

        let _ = writeln!(
            table,
            "<tr><th colspan=\"{}\">{}</th></tr>",
            columns, self.name
        );

        table.push_str("<tr><td>Ingredients:</td>");
        for ing in &self.ingredients {
            let _ = write!(table, "<td>{}</td>", ing.name());
        }
        table.push_str("<td>Total</td></tr>\n");

        table.push_str("<tr><td>Amount:</td>");
        for ing in &self.ingredients {
            let _ = write!(table, "<td>{} {}</td>", format_amount(ing.amount()), ing.unit());
        }
        table.push_str("<td>n.a</td></tr>\n");

        table.push_str("<tr><td>Price:</td>");
        for ing in &self.ingredients {
            let _ = write!(table, "<td>{}</td>", format_price(ing.price()));
        }
        let _ = writeln!(table, "<td>{}</td></tr>", format_price(self.total_price()));

        table.push_str("</table>");
        table
    }
}

/// Format an amount with the shortest representation (`2`, `0.5`).
pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}

/// Format a price rounded to cents, keeping at least one decimal (`1.0`, `0.45`).
pub fn format_price(price: f64) -> String {
    let rounded = (price * 100.0).round() / 100.0;
    // Avoid printing "-0.0" for tiny negative values.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:?}", rounded)
}
