use crate::models::format_price;
use crate::report::RenderOutcome;
use crate::state::Catalog;

/// Display the names of all meals.
pub fn display_meal_names(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No meals saved yet.");
        return;
    }

    println!("Currently saved meals:");
    println!();
    for name in catalog.names() {
        println!("\t- {}", name);
    }
    println!();
}

/// Display every meal with its ingredient count and total price.
pub fn display_meal_summary(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No meals saved yet.");
        return;
    }

    let max_name_len = catalog
        .meals()
        .iter()
        .map(|m| m.name().len())
        .max()
        .unwrap_or(10);

    println!();
    println!("=== Meals ({}) ===", catalog.len());
    println!();

    for (i, meal) in catalog.meals().iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>2} ingredients | {:>8}",
            i + 1,
            meal.name(),
            meal.len(),
            format_price(meal.total_price()),
            width = max_name_len
        );
    }

    println!();
    println!("Total: {}", format_price(catalog.total_price()));
    println!();
}

/// Report what a render pass did.
pub fn display_render_outcome(outcome: &RenderOutcome) {
    for name in &outcome.rendered {
        println!("Successfully prepared output for {}", name);
    }
    for name in &outcome.skipped {
        println!(
            "Output for {} couldn't be prepared (no placeholder was found in the html file)",
            name
        );
    }
}
