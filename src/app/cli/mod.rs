//! CLI module containing argument parsing, configuration and validation

pub mod api;
pub mod args;
pub mod config;
pub mod validation;
