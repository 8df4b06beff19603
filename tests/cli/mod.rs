//! CLI Integration Test Modules

pub mod argument_parsing;
pub mod toml_config;
pub mod validation;
