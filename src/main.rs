//! Template Gallery - Terminal-based template catalog browser
//!
//! Browse a catalog of website starter templates in the terminal:
//! filter by category, search titles and descriptions, mark favorites,
//! and open live demos or source repositories in the browser.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tplgal::cli::{CategoriesArgs, ListArgs};
use tplgal::config::Config;
use tplgal::constants::APP_BINARY_NAME;
use tplgal::registry::Registry;
use tplgal::tui;

/// Template Gallery - Terminal-based template catalog browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a registry file (JSON or TOML); defaults to the built-in catalog
    #[arg(value_name = "FILE")]
    registry_path: Option<PathBuf>,

    /// Headless subcommand; omit to launch the interactive browser
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Headless commands for scripting and automation
#[derive(Subcommand, Debug)]
enum Commands {
    /// List templates matching the given filters
    List(ListArgs),
    /// List the category and technology taxonomy
    Categories(CategoriesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let result = match command {
            Commands::List(args) => args.execute(),
            Commands::Categories(args) => args.execute(),
        };
        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code() as i32);
        }
        return Ok(());
    }

    let registry = resolve_registry(cli.registry_path.as_deref())?;

    // Load or create default config
    let config = Config::load().unwrap_or_else(|_| Config::default());

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(registry, config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}

/// Resolve which registry the TUI should browse.
///
/// An explicit FILE argument wins, then a path configured in the user
/// config, then the built-in catalog.
fn resolve_registry(path: Option<&std::path::Path>) -> Result<Registry> {
    if let Some(path) = path {
        // Validate the file path before attempting to load
        if !path.exists() {
            eprintln!("Error: Registry file not found: {}", path.display());
            eprintln!();
            eprintln!("Please provide a valid path to a JSON or TOML registry file.");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {APP_BINARY_NAME} my_templates.json");
            eprintln!("  {APP_BINARY_NAME} path/to/registry.toml");
            eprintln!();
            eprintln!("To browse the built-in catalog, run {APP_BINARY_NAME} with no arguments.");
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {APP_BINARY_NAME} --help");
            std::process::exit(1);
        }

        // Check if the file has a reasonable extension
        if let Some(ext) = path.extension() {
            if ext != "json" && ext != "toml" {
                eprintln!(
                    "Warning: Expected a JSON or TOML file, but got: {}",
                    path.display()
                );
                eprintln!();
            }
        }

        return Registry::load(path);
    }

    if let Some(configured) = Config::load().ok().and_then(|c| c.registry.path) {
        return Registry::load(&configured);
    }

    Registry::builtin()
}
