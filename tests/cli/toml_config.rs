//! CLI TOML configuration tests
//!
//! Tests for configuration file loading and the precedence of the command
//! line over the file.

use clap::Parser;
use containerkit::app::cli::args::*;
use containerkit::containers::api::ContainerError;
use std::io::Write;
use tempfile::NamedTempFile;
use toml::Table;

fn stress_section(threads: i64, items_per_thread: i64) -> Table {
    let mut stress = Table::new();
    stress.insert("threads".to_string(), toml::Value::Integer(threads));
    stress.insert(
        "items_per_thread".to_string(),
        toml::Value::Integer(items_per_thread),
    );
    stress.insert("capacity".to_string(), toml::Value::Integer(4));
    stress.insert("timeout_ms".to_string(), toml::Value::Integer(75));

    let mut config = Table::new();
    config.insert("stress".to_string(), toml::Value::Table(stress));
    config
}

#[test]
fn test_config_fills_unset_stress_options() {
    let mut args = Args::try_parse_from(["containerkit", "stress"]).unwrap();
    Args::apply_toml_values(&mut args, &stress_section(3, 40)).unwrap();

    match args.command {
        Some(Command::Stress {
            threads,
            items_per_thread,
            ..
        }) => {
            assert_eq!(threads, Some(3));
            assert_eq!(items_per_thread, Some(40));
        }
        other => panic!("Expected stress command, got {:?}", other),
    }
}

#[test]
fn test_cli_overrides_config() {
    let mut args = Args::try_parse_from(["containerkit", "stress", "-t", "12"]).unwrap();
    Args::apply_toml_values(&mut args, &stress_section(3, 40)).unwrap();

    match args.command {
        Some(Command::Stress {
            threads,
            items_per_thread,
            ..
        }) => {
            assert_eq!(threads, Some(12), "Command line must win over the file");
            assert_eq!(items_per_thread, Some(40));
        }
        other => panic!("Expected stress command, got {:?}", other),
    }
}

#[test]
fn test_config_fills_backpressure_options() {
    let mut args = Args::try_parse_from(["containerkit", "backpressure"]).unwrap();
    Args::apply_toml_values(&mut args, &stress_section(3, 40)).unwrap();

    match args.command {
        Some(Command::Backpressure {
            capacity,
            timeout_ms,
            ..
        }) => {
            assert_eq!(capacity, Some(4));
            assert_eq!(timeout_ms, Some(75));
        }
        other => panic!("Expected backpressure command, got {:?}", other),
    }
}

#[test]
fn test_logging_section() {
    let mut logging = Table::new();
    logging.insert("level".to_string(), toml::Value::String("debug".to_string()));
    logging.insert("format".to_string(), toml::Value::String("ext".to_string()));
    logging.insert("file".to_string(), toml::Value::String("none".to_string()));
    let mut config = Table::new();
    config.insert("logging".to_string(), toml::Value::Table(logging));

    let mut args = Args::try_parse_from(["containerkit", "-o", "json", "stress"]).unwrap();
    Args::apply_toml_values(&mut args, &config).unwrap();

    assert_eq!(args.log_level, Some("debug".to_string()));
    assert_eq!(args.log_format, Some("json".to_string()));
    assert_eq!(args.effective_log_file(), None);
}

#[test]
fn test_wrong_field_type_is_a_configuration_error() {
    let mut logging = Table::new();
    logging.insert("color".to_string(), toml::Value::String("yes".to_string()));
    let mut config = Table::new();
    config.insert("logging".to_string(), toml::Value::Table(logging));

    let mut args = Args::default();
    let error = Args::apply_toml_values(&mut args, &config).unwrap_err();

    assert!(matches!(error, ContainerError::Configuration { .. }));
    assert!(error.to_string().contains("logging.color"));
}

#[test]
fn test_unknown_sections_are_ignored() {
    let mut config = Table::new();
    config.insert("extra".to_string(), toml::Value::Boolean(true));

    let mut args = Args::default();
    assert!(Args::apply_toml_values(&mut args, &config).is_ok());
}

#[tokio::test]
async fn test_load_explicit_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"warn\"\n\n[stress]\nthreads = 2").unwrap();

    let mut args = Args::try_parse_from([
        "containerkit".to_string(),
        "--config-file".to_string(),
        file.path().display().to_string(),
        "stress".to_string(),
    ])
    .unwrap();

    let config = args
        .load_config_file()
        .await
        .unwrap()
        .expect("Explicit config file should load");
    Args::apply_toml_values(&mut args, &config).unwrap();

    assert_eq!(args.log_level, Some("warn".to_string()));
    match args.command {
        Some(Command::Stress { threads, .. }) => assert_eq!(threads, Some(2)),
        other => panic!("Expected stress command, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_config_file_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[stress\nthreads = ").unwrap();

    let args = Args {
        config_file: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    let error = args.load_config_file().await.unwrap_err();
    assert!(error.to_string().contains("Error parsing configuration file"));
}
