//! Core CLI arguments structure
//!
//! Configuration loading and validation live in `config` and `validation`.

use crate::core::version::long_version;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strum_macros::{Display, EnumIter};

// Global options apply to every subcommand. Options left unset on the
// command line may be filled from the configuration file.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "containerkit")]
#[command(about = "Concurrency exercises for the containerkit containers")]
#[command(version = env!("CARGO_PKG_VERSION"), long_version = long_version())]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Force colored output (overrides TTY detection)
    #[arg(short = 'g', long = "color", action = ArgAction::SetTrue, global = true)]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, conflicts_with = "color", global = true)]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"], global = true)]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"], global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push unique values from many threads into a thread-safe container, then pop them from many threads
    Stress {
        /// Container to exercise (default: every kind in turn)
        #[arg(short = 'k', long = "container", value_enum, value_name = "KIND")]
        container: Option<ContainerKind>,

        /// Number of pushing threads, and of popping threads
        #[arg(short = 't', long = "threads", value_name = "COUNT")]
        threads: Option<usize>,

        /// Values pushed by each thread
        #[arg(short = 'n', long = "items-per-thread", value_name = "COUNT")]
        items_per_thread: Option<usize>,

        /// Print the report as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Run one producer and one consumer over a bounded blocking queue
    Backpressure {
        /// Queue capacity
        #[arg(long = "capacity", value_name = "COUNT")]
        capacity: Option<usize>,

        /// Values to produce
        #[arg(short = 'n', long = "items", value_name = "COUNT", default_value_t = 1000)]
        items: usize,

        /// Give up on a single push after this many milliseconds
        #[arg(long = "timeout-ms", value_name = "MILLIS")]
        timeout_ms: Option<u64>,

        /// Consumer pause after each pop, in microseconds
        #[arg(long = "consumer-delay-us", value_name = "MICROS", default_value_t = 0)]
        consumer_delay_us: u64,

        /// Print the report as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Sort integers by pushing them through the heap priority queue
    HeapSort {
        /// Pop smallest first instead of largest first
        #[arg(short = 'r', long = "reverse")]
        reverse: bool,

        /// Integers to sort
        #[arg(value_name = "VALUES", required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

/// Thread-safe containers the stress command can exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ContainerKind {
    Queue,
    Stack,
    List,
    Set,
    Heap,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to colorize output: explicit flags first, then TTY detection
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else {
            self.color || std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    }

    /// The log file, unless disabled with the magic values `none` or `-`
    pub fn effective_log_file(&self) -> Option<&str> {
        let path = self.log_file.as_deref()?.to_str()?;
        if path.eq_ignore_ascii_case("none") || path == "-" {
            None
        } else {
            Some(path)
        }
    }
}
