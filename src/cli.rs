use clap::{Parser, Subcommand};

/// meal_cost — Price your meals from their ingredients and render an HTML report.
#[derive(Parser, Debug)]
#[command(name = "meal_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved meals JSON file.
    #[arg(short, long, default_value = "data/meals.json")]
    pub data: String,

    /// Path to the HTML template containing the `$meal` placeholder.
    #[arg(short, long, default_value = "templates/page-template.html")]
    pub template: String,

    /// Path the HTML report is written to.
    #[arg(short, long, default_value = "output/page.html")]
    pub output: String,

    /// Do not open the report after rendering it.
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu to view, add, and remove meals.
    Menu,

    /// Render the HTML report for all saved meals.
    Report,

    /// Print saved meals with their total prices.
    List,

    /// Remove a saved meal by name.
    Remove {
        /// Name of the meal (close matches are suggested).
        name: String,
    },

    /// Create an empty meals file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["meal_cost"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.data, "data/meals.json");
        assert_eq!(cli.template, "templates/page-template.html");
        assert_eq!(cli.output, "output/page.html");
        assert!(!cli.no_open);
    }

    #[test]
    fn test_remove_takes_name() {
        let cli = Cli::parse_from(["meal_cost", "--data", "x.json", "remove", "Soup"]);
        assert_eq!(cli.data, "x.json");
        assert!(matches!(cli.command, Some(Command::Remove { name }) if name == "Soup"));
    }
}
