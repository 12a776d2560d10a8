mod ingredient;
mod meal;

pub use ingredient::Ingredient;
pub use meal::{format_amount, format_price, Meal};
