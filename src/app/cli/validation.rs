//! CLI argument validation
//!
//! Runs after the configuration file has been applied, so it also catches
//! bad values that came from the file rather than the command line.

use super::args::{Args, Command};
use crate::containers::api::{ContainerError, ContainerResult};
use crate::core::logging::{LOG_FORMATS, LOG_LEVELS};

impl Args {
    /// Validate merged arguments for consistency and constraints
    pub fn validate(&self) -> ContainerResult<()> {
        self.validate_logging()?;
        self.validate_command()?;
        Ok(())
    }

    fn validate_logging(&self) -> ContainerResult<()> {
        if let Some(level) = self.log_level.as_deref() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ContainerError::Configuration {
                    message: format!(
                        "Unknown log level '{}'. Expected one of: {}",
                        level,
                        LOG_LEVELS.join(", ")
                    ),
                });
            }
        }
        if let Some(format) = self.log_format.as_deref() {
            if !LOG_FORMATS.contains(&format) {
                return Err(ContainerError::Configuration {
                    message: format!(
                        "Unknown log format '{}'. Expected one of: {}",
                        format,
                        LOG_FORMATS.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }

    fn validate_command(&self) -> ContainerResult<()> {
        match &self.command {
            Some(Command::Stress {
                threads: Some(0), ..
            }) => Err(ContainerError::Configuration {
                message: "threads must be at least 1".to_string(),
            }),
            Some(Command::Backpressure {
                capacity: Some(0), ..
            }) => Err(ContainerError::Configuration {
                message: "capacity must be at least 1; a zero-capacity queue never accepts a push"
                    .to_string(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Args::default().validate().is_ok());
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let args = Args {
            log_level: Some("DEBUG".to_string()),
            ..Args::default()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let args = Args {
            log_format: Some("xml".to_string()),
            ..Args::default()
        };

        let error = args.validate().unwrap_err();
        assert!(error.to_string().contains("Unknown log format 'xml'"));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let args = Args {
            command: Some(Command::Backpressure {
                capacity: Some(0),
                items: 10,
                timeout_ms: None,
                consumer_delay_us: 0,
                json: false,
            }),
            ..Args::default()
        };

        let error = args.validate().unwrap_err();
        assert!(error.to_string().contains("capacity must be at least 1"));
    }
}
