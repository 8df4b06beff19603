//! Core services shared by every container module and the binary

pub mod cancel;
pub mod error_handling;
pub mod logging;
pub mod sync;
pub mod version;
