use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;

use super::*;
use crate::application::cli;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
#[serial]
async fn it_loads_defaults_without_a_config_file() -> Result<()> {
    let cmd = cli::build();
    let matches = cmd
        .clone()
        .try_get_matches_from(["kissing", "--config-file", "/nonexistent/kissing.toml"])?;

    Config::load(&cmd, vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ConfigFile), "/nonexistent/kissing.toml");
    assert_eq!(Config::get(ConfigKey::Mode), "exact");
    assert_eq!(Config::get(ConfigKey::LogLevel), "info");
    assert_eq!(Config::mode(), DisplayMode::Exact);
    assert_eq!(Config::dimension(), None);
    assert!(Config::get(ConfigKey::LogFile).ends_with("kissing.log"));

    Ok(())
}

#[tokio::test]
#[serial]
async fn it_reads_values_from_the_config_file() -> Result<()> {
    let file = config_file("mode = \"asymptotic\"\ndimension = 24\nlog-level = \"debug\"\n");
    let path = file.path().to_string_lossy().to_string();
    let cmd = cli::build();
    let matches = cmd
        .clone()
        .try_get_matches_from(["kissing", "--config-file", &path])?;

    Config::load(&cmd, vec![&matches]).await?;

    assert_eq!(Config::mode(), DisplayMode::Asymptotic);
    assert_eq!(Config::dimension(), Some("24".to_string()));
    assert_eq!(Config::get(ConfigKey::LogLevel), "debug");

    Ok(())
}

#[tokio::test]
#[serial]
async fn it_prefers_arguments_over_the_config_file() -> Result<()> {
    let file = config_file("mode = \"asymptotic\"\ndimension = 24\n");
    let path = file.path().to_string_lossy().to_string();
    let cmd = cli::build();
    let matches = cmd.clone().try_get_matches_from([
        "kissing",
        "--config-file",
        &path,
        "--mode",
        "exact",
        "--dimension",
        "7",
    ])?;

    Config::load(&cmd, vec![&matches]).await?;

    assert_eq!(Config::mode(), DisplayMode::Exact);
    assert_eq!(Config::dimension(), Some("7".to_string()));

    Ok(())
}

#[tokio::test]
#[serial]
async fn it_rejects_invalid_values_in_the_config_file() -> Result<()> {
    let file = config_file("mode = \"sideways\"\n");
    let path = file.path().to_string_lossy().to_string();
    let cmd = cli::build();
    let matches = cmd
        .clone()
        .try_get_matches_from(["kissing", "--config-file", &path])?;

    let res = Config::load(&cmd, vec![&matches]).await;

    let err = res.unwrap_err().to_string();
    assert!(err.contains("invalid value for key 'mode': sideways"));
    assert!(err.contains("exact, asymptotic"));

    Ok(())
}

#[tokio::test]
#[serial]
async fn it_rejects_integer_values_outside_possible_values() -> Result<()> {
    let file = config_file("mode = 1\n");
    let path = file.path().to_string_lossy().to_string();
    let cmd = cli::build();
    let matches = cmd
        .clone()
        .try_get_matches_from(["kissing", "--config-file", &path])?;

    let res = Config::load(&cmd, vec![&matches]).await;

    let err = res.unwrap_err().to_string();
    assert!(err.contains("invalid value for key 'mode': 1"));

    Ok(())
}

#[test]
#[serial]
fn it_serializes_the_default_config() {
    let toml_str = Config::serialize_default(&cli::build());

    assert!(toml_str.contains("# dimension = \"\""));
    assert!(toml_str.contains("log-level = \"info\""));
    assert!(toml_str.contains(
        "# Display mode used for the first query [possible values: exact, asymptotic]\nmode = \"exact\""
    ));
    assert!(!toml_str.contains("config-file"));
    assert!(toml_str.parse::<toml_edit::Document>().is_ok());
}
