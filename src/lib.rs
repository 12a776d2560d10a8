pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod report;
pub mod state;

pub use error::{MealError, Result};
pub use models::{Ingredient, Meal};
pub use state::Catalog;
