pub mod app;
pub mod compare;
pub mod containers;
pub mod core;
pub mod list;
pub mod map;
pub mod queue;
pub mod set;
pub mod stack;
pub mod sync;
