use std::path;
use std::process;

use anyhow::Context;
use anyhow::Result;
use clap_complete::Shell;
use kissing_term::application::cli;
use kissing_term::configuration::{Config, ConfigKey};
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::filter::LevelFilter;

mod embedded_ui;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

/// Opens the log file, creating its directory when needed.
fn log_writer(log_file: &path::Path) -> Result<RollingFileAppender> {
    let directory = log_file
        .parent()
        .map(|e| e.to_path_buf())
        .unwrap_or_else(|| path::PathBuf::from("."));
    let file_name = log_file
        .file_name()
        .context("log-file must name a file")?
        .to_string_lossy()
        .to_string();

    let writer = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&directory)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    Ok(writer)
}

fn init_tracing() -> Result<()> {
    let writer = log_writer(&path::PathBuf::from(Config::get(ConfigKey::LogFile)))?;

    let level = Config::get(ConfigKey::LogLevel)
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(writer)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cmd = cli::build();
    let matches = cmd.clone().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(shell) = subcmd_matches.get_one::<Shell>("shell").copied() {
                cli::print_completions(shell);
            }
            return Ok(());
        }
        Some(("config", subcmd_matches)) => {
            Config::load(&cmd, vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("default", _)) => println!("{}", Config::serialize_default(&cmd)),
                Some(("path", _)) => println!("{}", Config::get(ConfigKey::ConfigFile)),
                _ => {}
            }
            return Ok(());
        }
        Some(("query", subcmd_matches)) => {
            Config::load(&cmd, vec![&matches, subcmd_matches]).await?;
            init_tracing()?;

            let text = subcmd_matches
                .get_one::<String>("query-dimension")
                .cloned()
                .unwrap_or_default();
            let report = cli::query_once(&text, Config::mode());
            if report.is_error() {
                eprintln!("{report}");
                process::exit(1);
            }
            println!("{report}");
            return Ok(());
        }
        _ => {}
    }

    Config::load(&cmd, vec![&matches]).await?;
    init_tracing()?;

    embedded_ui::run().await
}
