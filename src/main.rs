//! Reliefdesk CLI - relief camp and aid distribution tracking
//!
//! Usage: reliefdesk [--data-dir PATH] [--json] [-v] <COMMAND>

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use reliefdesk::config::{self, ConfigWarning, OutputFormat};
use reliefdesk::presentation::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = config::load_or_default(Some(&cwd))?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    init_tracing(cli.verbose, &config.log.level);
    for warning in &warnings {
        eprintln!("{}", format_warning(warning));
    }

    commands::run(cli.command, &config)
}

/// `RELIEF_LOG` wins, then `-v` count, then the configured level.
fn init_tracing(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_env("RELIEF_LOG").unwrap_or_else(|_| {
        let level = match verbose {
            0 => configured,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn format_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "Warning: unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => format!("Warning: unknown config key '{}' in {}", warning.key, location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_warning_with_suggestion() {
        let warning = ConfigWarning {
            key: "data_dri".to_string(),
            file: PathBuf::from("reliefdesk.toml"),
            line: Some(2),
            suggestion: Some("data_dir".to_string()),
        };
        assert_eq!(
            format_warning(&warning),
            "Warning: unknown config key 'data_dri' in reliefdesk.toml:2 (did you mean 'data_dir'?)"
        );
    }

    #[test]
    fn test_format_warning_without_line() {
        let warning = ConfigWarning {
            key: "colour".to_string(),
            file: PathBuf::from("reliefdesk.toml"),
            line: None,
            suggestion: None,
        };
        assert_eq!(
            format_warning(&warning),
            "Warning: unknown config key 'colour' in reliefdesk.toml"
        );
    }
}
