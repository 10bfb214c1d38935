use clap::Parser;
use colored::Colorize;

use pomoclock::cli::args::{Cli, Commands};
use pomoclock::cli::commands;
use pomoclock::config::{ColorSetting, Config, Paths};
use pomoclock::error::PomoError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();

    let mut paths = Paths::default();
    if let Some(config_file) = cli.config {
        paths = paths.with_config_file(config_file);
    }

    let output = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let config = Config::load_from_path(&paths.config_file)?;
            pomoclock::logging::init(config.logging.level, &config.log_file(&paths))?;
            pomoclock::tui::run(&config)?;
            String::new()
        }
        Commands::Config(args) => {
            // A broken config file must not stop `config path` or `config init`
            if let Ok(config) = Config::load_from_path(&paths.config_file) {
                match config.ui.color {
                    ColorSetting::Always => colored::control::set_override(true),
                    ColorSetting::Never => colored::control::set_override(false),
                    ColorSetting::Auto => {}
                }
            }
            commands::config(&paths, args.command)?
        }
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
