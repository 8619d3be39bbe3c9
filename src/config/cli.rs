use crate::app::commands::ReportFormat;
use crate::config::profile::TargetProfile;
use crate::domain::model::SeedInputs;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "passprobe", version)]
#[command(about = "Password Strength Analyzer & Wordlist Generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Analyze password strength
    Analyze(AnalyzeArgs),
    /// Generate a wordlist
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    pub password: String,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Personal words (name, username, ...) the estimator should treat as guessable
    #[arg(long = "user-input", value_name = "WORD")]
    pub user_inputs: Vec<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    #[arg(short, long)]
    pub name: Option<String>,

    /// Date of birth, YYYY-MM-DD
    #[arg(short, long)]
    pub dob: Option<String>,

    #[arg(short, long)]
    pub pet: Option<String>,

    #[arg(short, long)]
    pub color: Option<String>,

    /// Output file [default: custom_wordlist.txt]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Do not append years
    #[arg(long)]
    pub no_years: bool,

    /// Last year of the appended range [default: current year]
    #[arg(long, value_name = "YEAR")]
    pub reference_year: Option<i32>,

    /// TOML file describing the target; flags override its values
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,
}

impl GenerateArgs {
    /// Merge the optional profile with explicit flags and validate the result.
    pub fn resolve(self) -> Result<SeedInputs> {
        let mut seeds = match &self.profile {
            Some(path) => {
                tracing::info!("Loading target profile from {}", path.display());
                let profile = TargetProfile::from_file(path)?;
                profile.validate()?;
                profile.into_seeds()
            }
            None => SeedInputs::default(),
        };

        if let Some(name) = self.name {
            seeds.name = name;
        }
        if let Some(dob) = self.dob {
            seeds.dob = dob;
        }
        if let Some(pet) = self.pet {
            seeds.pet_name = pet;
        }
        if let Some(color) = self.color {
            seeds.favorite_color = color;
        }
        if let Some(output) = self.output {
            seeds.output_path = output;
        }
        if self.no_years {
            seeds.append_years = false;
        }
        if self.reference_year.is_some() {
            seeds.reference_year = self.reference_year;
        }

        seeds.validate()?;
        Ok(seeds)
    }
}
