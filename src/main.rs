use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use garage_register::app::App;
use garage_register::config::Config;
use garage_register::form::catalog::{find_category, SERVICE_CATALOG};
use garage_register::form::RegistrationPayload;
use garage_register::logging;
use garage_register::ui::keybindings::all_shortcuts_grouped;

#[derive(Parser)]
#[command(name = "garage-register")]
#[command(about = "Terminal wizard for registering a garage as a service partner")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print completed registration payloads as JSON on exit
    #[arg(long)]
    print_payload: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the services a garage can offer
    Services {
        /// Only show one category (case-insensitive)
        #[arg(short = 'g', long)]
        category: Option<String>,
    },

    /// Show keyboard shortcuts
    Keys,

    /// Print the effective configuration as TOML
    Config {
        /// Also write it to the user config file
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Services { category }) => cmd_services(category.as_deref())?,
        Some(Commands::Keys) => cmd_keys(),
        Some(Commands::Config { save }) => cmd_config(&config, save)?,
        None => {
            let completed = run_tui(config, logging_handle.log_file_path).await?;
            if cli.print_payload {
                print_payloads(&completed)?;
            }
        }
    }

    Ok(())
}

async fn run_tui(
    config: Config,
    log_file_path: Option<PathBuf>,
) -> Result<Vec<RegistrationPayload>> {
    let mut app = App::new(config);
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result.map(|()| app.into_completed())
}

fn print_payloads(payloads: &[RegistrationPayload]) -> Result<()> {
    if payloads.is_empty() {
        eprintln!("No registration was completed");
        return Ok(());
    }

    for payload in payloads {
        let json =
            serde_json::to_string_pretty(payload).context("Failed to serialize payload")?;
        println!("{json}");
    }
    Ok(())
}

fn cmd_services(category: Option<&str>) -> Result<()> {
    let categories: Vec<_> = match category {
        Some(name) => match find_category(name) {
            Some(found) => vec![found],
            None => {
                let known: Vec<_> = SERVICE_CATALOG.iter().map(|c| c.name).collect();
                bail!("Unknown category '{}'. Known: {}", name, known.join(", "));
            }
        },
        None => SERVICE_CATALOG.iter().collect(),
    };

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({} services)", category.name, category.services.len());
        println!("{}", "─".repeat(60));
        for service in category.services {
            println!("  {:<36} {}", service.id, service.label);
        }
    }

    Ok(())
}

fn cmd_keys() {
    for (context, categories) in all_shortcuts_grouped() {
        println!("{}", context.display_name());
        println!("{}", "─".repeat(60));
        for (category, shortcuts) in categories {
            println!("  {}", category.display_name());
            for shortcut in shortcuts {
                println!("    {} {}", shortcut.key_display_padded(), shortcut.description);
            }
        }
        println!();
    }
}

fn cmd_config(config: &Config, save: bool) -> Result<()> {
    print!("{}", config.to_toml()?);
    if save {
        config.save()?;
        if let Some(path) = Config::user_config_path() {
            eprintln!("Saved to {}", path.display());
        }
    }
    Ok(())
}
