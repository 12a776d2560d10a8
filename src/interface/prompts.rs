use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Ingredient, Meal};
use crate::state::Catalog;

/// Minimum similarity for a meal name to be suggested.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions offered at once.
const MAX_SUGGESTIONS: usize = 5;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowDetails,
    ShowNames,
    AddMeal,
    RemoveMeal,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::ShowDetails,
        MenuChoice::ShowNames,
        MenuChoice::AddMeal,
        MenuChoice::RemoveMeal,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ShowDetails => "Show details of all meals",
            MenuChoice::ShowNames => "Show current meals",
            MenuChoice::AddMeal => "Add a meal",
            MenuChoice::RemoveMeal => "Remove a meal",
            MenuChoice::Exit => "Exit app",
        }
    }
}

/// Prompt for the next main menu action.
pub fn prompt_menu_choice() -> Result<MenuChoice> {
    let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();

    let selection = Select::new()
        .with_prompt("Please choose an option")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuChoice::ALL
        .get(selection)
        .copied()
        .unwrap_or(MenuChoice::Exit))
}

/// Prompt for a new meal and its ingredients.
///
/// An empty name falls back to the catalog's placeholder name.
pub fn prompt_meal(catalog: &Catalog) -> Result<Meal> {
    let name: String = Input::new()
        .with_prompt("What is the new meal's name?")
        .allow_empty(true)
        .interact_text()?;

    let name = match name.trim() {
        "" => catalog.placeholder_name(),
        trimmed => trimmed.to_string(),
    };
    let mut meal = Meal::new(name);

    loop {
        let question = if meal.is_empty() {
            "Would you like to add an ingredient?"
        } else {
            "Would you like to add another ingredient?"
        };
        if !prompt_yes_no(question, true)? {
            break;
        }
        meal.add(prompt_ingredient()?);
    }

    Ok(meal)
}

/// Prompt for the four fields of an ingredient.
///
/// Numeric fields re-prompt until a number is entered.
pub fn prompt_ingredient() -> Result<Ingredient> {
    let name: String = Input::new()
        .with_prompt("What is the ingredient's name?")
        .interact_text()?;

    let unit: String = Input::new()
        .with_prompt("What measuring unit will you use for the ingredient?")
        .interact_text()?;

    let amount: f64 = Input::new()
        .with_prompt(format!("How much of the ingredient is to be used? (in {})", unit))
        .validate_with(finite_number)
        .interact_text()?;

    let price_per_unit: f64 = Input::new()
        .with_prompt(format!("How much does 1 {} of {} cost?", unit, name))
        .validate_with(finite_number)
        .interact_text()?;

    Ok(Ingredient::new(name, unit, amount, price_per_unit))
}

/// Reject `inf` and `NaN`, which parse as numbers but cannot be saved.
pub fn finite_number(value: &f64) -> std::result::Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err("Please enter a finite number".to_string())
    }
}

/// Let the user pick a meal from the catalog.
///
/// Returns `None` if the catalog is empty or the user cancels.
pub fn prompt_meal_choice(catalog: &Catalog, prompt: &str) -> Result<Option<usize>> {
    if catalog.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<&str> = catalog.names();
    options.push("Cancel");

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < catalog.len()).then_some(selection))
}

/// Catalog indices whose names resemble `input`, best match first.
pub fn fuzzy_meal_matches(catalog: &Catalog, input: &str) -> Vec<(usize, f64)> {
    let input = input.to_lowercase();

    let mut candidates: Vec<(usize, f64)> = catalog
        .meals()
        .iter()
        .enumerate()
        .map(|(i, m)| (i, jaro_winkler(&m.name().to_lowercase(), &input)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(MAX_SUGGESTIONS);
    candidates
}

/// Resolve a meal name typed by the user to a catalog index.
///
/// Exact (case-insensitive) matches are taken directly; otherwise close
/// names are offered for confirmation.
pub fn resolve_meal_name(catalog: &Catalog, input: &str) -> Result<Option<usize>> {
    let input = input.trim();
    if let Some(idx) = catalog.position_by_name(input) {
        return Ok(Some(idx));
    }

    let candidates = fuzzy_meal_matches(catalog, input);
    match candidates.as_slice() {
        [] => {
            println!("No matching meal found for '{}'", input);
            Ok(None)
        }
        [(idx, _)] => {
            let name = catalog.meals()[*idx].name();
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", name), true)?;
            Ok(confirm.then_some(*idx))
        }
        _ => {
            let mut options: Vec<&str> = candidates
                .iter()
                .map(|(i, _)| catalog.meals()[*i].name())
                .collect();
            options.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(candidates.get(selection).map(|(i, _)| *i))
        }
    }
}

/// Wait for the user to press enter.
pub fn prompt_continue() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("Please press enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Meal::new("Pancakes"),
            Meal::new("Pasta"),
            Meal::new("Porridge"),
        ])
    }

    #[test]
    fn test_fuzzy_matches_close_names() {
        let matches = fuzzy_meal_matches(&catalog(), "pancake");
        assert_eq!(matches.first().map(|(i, _)| *i), Some(0));
    }

    #[test]
    fn test_fuzzy_matches_sorted_by_score() {
        let matches = fuzzy_meal_matches(&catalog(), "pasta");
        assert_eq!(matches[0].0, 1);
        assert!(matches.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_fuzzy_ignores_unrelated_names() {
        assert!(fuzzy_meal_matches(&catalog(), "xyz").is_empty());
    }

    #[test]
    fn test_finite_number_rejects_inf_and_nan() {
        assert!(finite_number(&2.5).is_ok());
        assert!(finite_number(&-0.0).is_ok());
        assert!(finite_number(&f64::MAX).is_ok());

        for text in ["inf", "-infinity", "NaN"] {
            let parsed: f64 = text.parse().unwrap();
            assert!(finite_number(&parsed).is_err(), "{} was accepted", text);
        }
    }

    #[test]
    fn test_menu_labels_are_distinct() {
        let mut labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), MenuChoice::ALL.len());
    }
}
