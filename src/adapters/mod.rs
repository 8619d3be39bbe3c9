// Adapters layer: concrete implementations of the domain ports.

pub mod estimator;
pub mod storage;
