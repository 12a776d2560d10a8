pub mod prompts;
pub mod render;

pub use prompts::{
    finite_number, fuzzy_meal_matches, prompt_continue, prompt_ingredient, prompt_meal,
    prompt_meal_choice, prompt_menu_choice, prompt_yes_no, resolve_meal_name, MenuChoice,
};
pub use render::{display_meal_names, display_meal_summary, display_render_outcome};
