use clap::Parser;
use log::{info, LevelFilter};

use meal_cost_rs::cli::{Cli, Command};
use meal_cost_rs::error::Result;
use meal_cost_rs::interface::{
    display_meal_names, display_meal_summary, display_render_outcome, prompt_continue,
    prompt_meal, prompt_meal_choice, prompt_menu_choice, prompt_yes_no, resolve_meal_name,
    MenuChoice,
};
use meal_cost_rs::report::{open_report, write_report};
use meal_cost_rs::state::{init_catalog, load_catalog, save_catalog, Catalog};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(mut cli: Cli) -> Result<()> {
    let command = cli.command.take().unwrap_or_default();

    match command {
        Command::Menu => cmd_menu(&cli),
        Command::Report => cmd_report(&cli),
        Command::List => cmd_list(&cli),
        Command::Remove { name } => cmd_remove(&cli, &name),
        Command::Init { force } => cmd_init(&cli, force),
    }
}

/// Interactive menu. The catalog is loaded once and saved on exit.
fn cmd_menu(cli: &Cli) -> Result<()> {
    let mut catalog = load_catalog(&cli.data)?;
    println!("Successfully loaded {} meals.", catalog.len());
    println!("Welcome, and thank you for using meal_cost!");

    loop {
        println!();
        match prompt_menu_choice()? {
            MenuChoice::ShowDetails => {
                // A failed render is reported; the session goes on.
                if let Err(e) = render_and_show(cli, &catalog) {
                    eprintln!("Could not prepare output: {}", e);
                }
                prompt_continue()?;
            }
            MenuChoice::ShowNames => {
                display_meal_names(&catalog);
                prompt_continue()?;
            }
            MenuChoice::AddMeal => {
                let meal = prompt_meal(&catalog)?;
                println!("Added {} ({} ingredients).", meal.name(), meal.len());
                catalog.add(meal);
            }
            MenuChoice::RemoveMeal => {
                if catalog.is_empty() {
                    println!("No meals to remove.");
                    continue;
                }
                if let Some(idx) = prompt_meal_choice(&catalog, "Which meal should be removed?")? {
                    if let Some(meal) = catalog.remove_at(idx) {
                        println!("Removed {}.", meal.name());
                    }
                }
            }
            MenuChoice::Exit => break,
        }
    }

    println!();
    println!("Exiting...");
    save_catalog(&cli.data, &catalog)?;
    println!("Successfully saved {} meals.", catalog.len());

    Ok(())
}

/// Render the report once.
fn cmd_report(cli: &Cli) -> Result<()> {
    let catalog = load_catalog(&cli.data)?;
    render_and_show(cli, &catalog)
}

/// Print the saved meals with their totals.
fn cmd_list(cli: &Cli) -> Result<()> {
    let catalog = load_catalog(&cli.data)?;
    display_meal_summary(&catalog);
    Ok(())
}

/// Remove a meal by name, suggesting close matches.
fn cmd_remove(cli: &Cli, name: &str) -> Result<()> {
    let mut catalog = load_catalog(&cli.data)?;

    let Some(idx) = resolve_meal_name(&catalog, name)? else {
        println!("Nothing removed.");
        return Ok(());
    };

    let target = catalog.meals()[idx].name().to_string();
    if !prompt_yes_no(&format!("Remove '{}'?", target), true)? {
        println!("Nothing removed.");
        return Ok(());
    }

    catalog.remove_at(idx);
    save_catalog(&cli.data, &catalog)?;
    println!("Removed {}. {} meals left.", target, catalog.len());
    Ok(())
}

/// Create an empty data file.
fn cmd_init(cli: &Cli, force: bool) -> Result<()> {
    init_catalog(&cli.data, force)?;
    println!("Created empty meals file at {}", cli.data);
    Ok(())
}

fn render_and_show(cli: &Cli, catalog: &Catalog) -> Result<()> {
    let outcome = write_report(&cli.template, &cli.output, catalog)?;
    display_render_outcome(&outcome);

    if catalog.is_empty() {
        println!("No meals saved yet; the template was written unchanged.");
    }

    if cli.no_open {
        println!("Report written to {}", cli.output);
    } else if let Err(e) = open_report(&cli.output) {
        eprintln!("Failed to open report: {}", e);
        eprintln!("Open {} manually.", cli.output);
    } else {
        info!("opened {}", cli.output);
    }
    Ok(())
}
