#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;

use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::Shell;
use strum::VariantNames;

use crate::configuration::ConfigKey;
use crate::domain::models::DisplayMode;
use crate::domain::models::Report;
use crate::domain::services::SessionController;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn arg_config_file() -> Arg {
    Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("KISSING_CONFIG_FILE")
        .num_args(1)
        .help("Path to configuration file")
        .global(true)
}

fn arg_mode() -> Arg {
    Arg::new(ConfigKey::Mode.to_string())
        .short('m')
        .long(ConfigKey::Mode.to_string())
        .env("KISSING_MODE")
        .num_args(1)
        .help("Display mode used for the first query")
        .value_parser(PossibleValuesParser::new(DisplayMode::VARIANTS.iter().copied()))
        .global(true)
}

fn arg_dimension() -> Arg {
    Arg::new(ConfigKey::Dimension.to_string())
        .short('d')
        .long(ConfigKey::Dimension.to_string())
        .env("KISSING_DIMENSION")
        .num_args(1)
        .allow_hyphen_values(true)
        .help("Dimension submitted when the terminal starts")
}

fn arg_log_file() -> Arg {
    Arg::new(ConfigKey::LogFile.to_string())
        .long(ConfigKey::LogFile.to_string())
        .env("KISSING_LOG_FILE")
        .num_args(1)
        .help("File the structured log is written to")
        .global(true)
}

fn arg_log_level() -> Arg {
    Arg::new(ConfigKey::LogLevel.to_string())
        .long(ConfigKey::LogLevel.to_string())
        .env("KISSING_LOG_LEVEL")
        .num_args(1)
        .help("Minimum level written to the log file")
        .value_parser(PossibleValuesParser::new(LOG_LEVELS))
        .global(true)
}

fn subcommand_query() -> Command {
    Command::new("query")
        .about("Prints the report for a single dimension and exits")
        .arg(
            Arg::new("query-dimension")
                .value_name("DIMENSION")
                .required(true)
                .allow_hyphen_values(true)
                .help("Dimension to look up"),
        )
}

fn subcommand_config() -> Command {
    Command::new("config")
        .about("Configuration file options")
        .subcommand_required(true)
        .subcommand(Command::new("default").about("Outputs the default configuration file"))
        .subcommand(Command::new("path").about("Returns the path of the configuration file"))
}

fn subcommand_completions() -> Command {
    Command::new("completions")
        .about("Generates shell completions")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .required(true)
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .help("Shell to generate completions for"),
        )
}

pub fn build() -> Command {
    Command::new("kissing")
        .about("Kissing numbers and Kabatiansky–Levenshtein bounds in your terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(arg_config_file())
        .arg(arg_mode())
        .arg(arg_dimension())
        .arg(arg_log_file())
        .arg(arg_log_level())
        .subcommand(subcommand_query())
        .subcommand(subcommand_config())
        .subcommand(subcommand_completions())
}

pub fn print_completions(shell: Shell) {
    let mut cmd = build();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Runs a single submission through a fresh session.
pub fn query_once(text: &str, mode: DisplayMode) -> Report {
    let mut controller = SessionController::new(Default::default(), mode);
    controller.submit_dimension(text);

    controller.current_report().clone()
}
