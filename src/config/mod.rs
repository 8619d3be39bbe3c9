#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;

#[cfg(feature = "cli")]
pub use cli::{AnalyzeArgs, Cli, Command, GenerateArgs};
pub use profile::TargetProfile;
