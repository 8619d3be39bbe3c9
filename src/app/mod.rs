// Application layer: front ends over the core operations.

pub mod commands;
#[cfg(feature = "cli")]
pub mod interactive;
