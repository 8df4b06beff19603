//! Argument validation tests
//!
//! Validation runs on the merged arguments, so bad values from a
//! configuration file are caught as well as bad flags.

use clap::Parser;
use containerkit::app::cli::args::*;
use containerkit::core::error_handling::ContextualError;
use toml::Table;

#[test]
fn test_parsed_commands_validate() {
    for argv in [
        vec!["containerkit", "stress"],
        vec!["containerkit", "backpressure", "--capacity", "1"],
        vec!["containerkit", "heap-sort", "-r", "3", "-1"],
    ] {
        let args = Args::try_parse_from(&argv).unwrap();
        assert!(args.validate().is_ok(), "{:?} should validate", argv);
    }
}

#[test]
fn test_zero_threads_is_rejected() {
    let args = Args::try_parse_from(["containerkit", "stress", "-t", "0"]).unwrap();
    let error = args.validate().unwrap_err();

    assert!(error.is_user_actionable());
    assert_eq!(error.user_message(), Some("threads must be at least 1"));
}

#[test]
fn test_zero_threads_from_config_is_rejected() {
    let mut stress = Table::new();
    stress.insert("threads".to_string(), toml::Value::Integer(0));
    let mut config = Table::new();
    config.insert("stress".to_string(), toml::Value::Table(stress));

    let mut args = Args::try_parse_from(["containerkit", "stress"]).unwrap();
    Args::apply_toml_values(&mut args, &config).unwrap();

    assert!(args.validate().is_err());
}

#[test]
fn test_unknown_log_level_from_config_is_rejected() {
    let mut logging = Table::new();
    logging.insert(
        "level".to_string(),
        toml::Value::String("chatty".to_string()),
    );
    let mut config = Table::new();
    config.insert("logging".to_string(), toml::Value::Table(logging));

    let mut args = Args::try_parse_from(["containerkit", "stress"]).unwrap();
    Args::apply_toml_values(&mut args, &config).unwrap();

    let error = args.validate().unwrap_err();
    assert!(error.to_string().contains("Unknown log level 'chatty'"));
}

#[test]
fn test_zero_backpressure_capacity_is_rejected() {
    let args =
        Args::try_parse_from(["containerkit", "backpressure", "--capacity", "0"]).unwrap();
    assert!(args.validate().is_err());
}
