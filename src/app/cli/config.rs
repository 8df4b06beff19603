//! TOML configuration file parsing and loading
//!
//! ```toml
//! [logging]
//! level = "debug"        # trace | debug | info | warn | error | off
//! format = "ext"         # text | ext | json
//! file = "containerkit.log"
//! color = false
//!
//! [stress]
//! threads = 8
//! items_per_thread = 1000
//! capacity = 16
//! timeout_ms = 250
//! ```
//!
//! Precedence is defaults, then the configuration file, then the command
//! line: a value from the file only fills an option the command line left
//! unset.

use super::args::{Args, Command};
use crate::containers::api::{ContainerError, ContainerResult};
use std::path::PathBuf;

pub const CONFIG_DIR_NAME: &str = "containerkit";
pub const CONFIG_FILE_NAME: &str = "containerkit.toml";

pub const DEFAULT_THREADS: usize = 8;
pub const DEFAULT_ITEMS_PER_THREAD: usize = 1000;
pub const DEFAULT_CAPACITY: usize = 16;

fn config_error(message: String) -> ContainerError {
    ContainerError::Configuration { message }
}

impl Args {
    /// `<config dir>/containerkit/containerkit.toml`, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read the configuration file as a raw TOML table
    ///
    /// An explicit `--config-file` must exist. The default file is optional;
    /// `Ok(None)` means there was nothing to load.
    pub async fn load_config_file(&self) -> ContainerResult<Option<toml::Table>> {
        let path = match &self.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(config_error(format!(
                        "The specified configuration file does not exist: {}",
                        path.display()
                    )));
                }
                path.clone()
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
            config_error(format!(
                "Error reading configuration file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config = toml::from_str::<toml::Table>(&contents).map_err(|e| {
            config_error(format!(
                "Error parsing configuration file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(config))
    }

    /// Apply TOML configuration values to Args
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> ContainerResult<()> {
        if let Some(logging) = Self::section(config, "logging")? {
            if args.log_level.is_none() {
                args.log_level = Self::string_field(logging, "logging", "level")?;
            }
            if args.log_format.is_none() {
                args.log_format = Self::string_field(logging, "logging", "format")?;
            }
            if args.log_file.is_none() {
                args.log_file = Self::string_field(logging, "logging", "file")?.map(PathBuf::from);
            }
            if !args.color && !args.no_color {
                match Self::bool_field(logging, "logging", "color")? {
                    Some(true) => args.color = true,
                    Some(false) => args.no_color = true,
                    None => {}
                }
            }
        }

        if let Some(stress) = Self::section(config, "stress")? {
            let threads = Self::count_field(stress, "stress", "threads")?;
            let items_per_thread = Self::count_field(stress, "stress", "items_per_thread")?;
            let capacity = Self::count_field(stress, "stress", "capacity")?;
            let timeout_ms = Self::count_field(stress, "stress", "timeout_ms")?;

            match &mut args.command {
                Some(Command::Stress {
                    threads: cli_threads,
                    items_per_thread: cli_items,
                    ..
                }) => {
                    *cli_threads = cli_threads.or(threads);
                    *cli_items = cli_items.or(items_per_thread);
                }
                Some(Command::Backpressure {
                    capacity: cli_capacity,
                    timeout_ms: cli_timeout,
                    ..
                }) => {
                    *cli_capacity = cli_capacity.or(capacity);
                    *cli_timeout = cli_timeout.or(timeout_ms.map(|ms| ms as u64));
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn section<'a>(config: &'a toml::Table, name: &str) -> ContainerResult<Option<&'a toml::Table>> {
        match config.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_table()
                .map(Some)
                .ok_or_else(|| config_error(format!("[{}] must be a table", name))),
        }
    }

    fn string_field(table: &toml::Table, section: &str, key: &str) -> ContainerResult<Option<String>> {
        match table.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| config_error(format!("{}.{} must be a string", section, key))),
        }
    }

    fn bool_field(table: &toml::Table, section: &str, key: &str) -> ContainerResult<Option<bool>> {
        match table.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| config_error(format!("{}.{} must be true or false", section, key))),
        }
    }

    fn count_field(table: &toml::Table, section: &str, key: &str) -> ContainerResult<Option<usize>> {
        match table.get(key) {
            None => Ok(None),
            Some(value) => match value.as_integer() {
                Some(n) if n >= 0 => Ok(Some(n as usize)),
                _ => Err(config_error(format!(
                    "{}.{} must be a non-negative integer",
                    section, key
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stress_args() -> Args {
        Args {
            command: Some(Command::Stress {
                container: None,
                threads: None,
                items_per_thread: None,
                json: false,
            }),
            ..Args::default()
        }
    }

    #[test]
    fn test_default_config_path_names_the_crate() {
        if let Some(path) = Args::default_config_path() {
            assert!(path.ends_with("containerkit/containerkit.toml"));
        }
    }

    #[test]
    fn test_section_must_be_a_table() {
        let config: toml::Table = toml::from_str("logging = \"loud\"").unwrap();
        let mut args = Args::default();

        let error = Args::apply_toml_values(&mut args, &config).unwrap_err();
        assert!(error.to_string().contains("[logging] must be a table"));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let config: toml::Table = toml::from_str("[stress]\nthreads = -2").unwrap();
        let mut args = stress_args();

        let error = Args::apply_toml_values(&mut args, &config).unwrap_err();
        assert!(error.to_string().contains("stress.threads"));
    }

    #[test]
    fn test_config_color_false_disables_color() {
        let config: toml::Table = toml::from_str("[logging]\ncolor = false").unwrap();
        let mut args = Args::default();

        Args::apply_toml_values(&mut args, &config).unwrap();
        assert!(args.no_color);
        assert!(!args.use_color());
    }

    #[tokio::test]
    async fn test_missing_explicit_config_file_is_an_error() {
        let args = Args {
            config_file: Some(PathBuf::from("/definitely/not/here/containerkit.toml")),
            ..Args::default()
        };

        let error = args.load_config_file().await.unwrap_err();
        assert!(matches!(error, ContainerError::Configuration { .. }));
        assert!(error.to_string().contains("does not exist"));
    }
}
