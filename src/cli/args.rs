use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomoclock")]
#[command(about = "A 25 + 5 Pomodoro clock for the terminal")]
#[command(long_about = "pomoclock - A 25 + 5 Pomodoro clock for the terminal

Alternates a work session and a break, counting down each one and sounding
a cue when a phase runs out. Lengths start at 25 and 5 minutes and can be
adjusted between 1 and 60 while the clock is stopped.

KEYS:
  space / p        Start or pause
  r                Reset to 25 + 5
  [ / ]            Break length down / up
  - / +            Session length down / up
  ?                Show key help
  q / Esc          Quit

CONFIGURATION:
  ~/.pomoclock/config.yaml (see 'pomoclock config init')")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    ///
    /// Defaults to ~/.pomoclock/config.yaml.
    #[arg(long, env = "POMOCLOCK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the clock (the default when no command is given)
    Run,

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    ///
    /// Example: pomoclock completions bash > ~/.bash_completion.d/pomoclock
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_clock() {
        let cli = Cli::try_parse_from(["pomoclock"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_show_json() {
        let cli = Cli::try_parse_from(["pomoclock", "config", "show", "-o", "json"]).unwrap();
        match cli.command {
            Some(Commands::Config(args)) => match args.command {
                ConfigCommands::Show { output } => assert_eq!(output, OutputFormat::Json),
                _ => panic!("expected show"),
            },
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["pomoclock", "config", "path", "--config", "/tmp/c.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.yaml")));
    }
}
