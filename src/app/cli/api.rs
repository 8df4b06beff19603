//! Public API exports for the CLI module

pub use super::args::{Args, Command, ContainerKind};
pub use super::config::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CAPACITY, DEFAULT_ITEMS_PER_THREAD,
    DEFAULT_THREADS,
};
