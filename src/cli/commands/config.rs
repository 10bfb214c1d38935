//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomoError;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read, parsed, or written.
pub fn config(paths: &Paths, cmd: ConfigCommands) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show { output } => show(paths, output),
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init(paths, force),
    }
}

fn show(paths: &Paths, format: OutputFormat) -> Result<String, PomoError> {
    let config = Config::load_from_path(&paths.config_file)?;

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&config)
            .map_err(|e| PomoError::Parse(format!("Failed to serialize config: {e}"))),
        OutputFormat::Pretty => Ok(format_pretty(&config, paths)),
    }
}

fn format_pretty(config: &Config, paths: &Paths) -> String {
    let sound = config
        .audio
        .sound_file
        .as_ref()
        .map_or_else(|| "terminal bell".to_string(), |p| p.display().to_string());
    let player = config
        .audio
        .player
        .clone()
        .unwrap_or_else(|| crate::audio::default_player().to_string());

    let mut lines = vec![
        format!("{} {}", "Config:".bold(), paths.config_file.display()),
        String::new(),
        "audio".cyan().bold().to_string(),
        format!(
            "  enabled        {}",
            if config.audio.enabled {
                "yes".green()
            } else {
                "no".red()
            }
        ),
        format!("  sound          {sound}"),
    ];
    if config.audio.sound_file.is_some() {
        lines.push(format!("  player         {player}"));
    }
    lines.extend([
        "ui".cyan().bold().to_string(),
        format!("  color          {:?}", config.ui.color).to_lowercase(),
        "logging".cyan().bold().to_string(),
        format!("  level          {:?}", config.logging.level).to_lowercase(),
        format!("  file           {}", config.log_file(paths).display()),
    ]);

    lines.join("\n")
}

fn init(paths: &Paths, force: bool) -> Result<String, PomoError> {
    let path = &paths.config_file;
    if path.exists() && !force {
        return Err(PomoError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    if path.starts_with(&paths.root) {
        paths.ensure_dirs()?;
    } else if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Config::default().save_to_path(path)?;

    Ok(format!("{} {}", "Wrote".green(), path.display()))
}
