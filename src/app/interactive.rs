//! Prompt-driven front end used when no subcommand is given.

use crate::adapters::estimator::ZxcvbnEstimator;
use crate::app::commands::{analyze_password, generate_wordlist, ReportFormat};
use crate::domain::model::{SeedInputs, DEFAULT_OUTPUT_FILE};
use crate::utils::error::ProbeError;
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Analyze,
    Generate,
    Quit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Analyze => "🔍 Password Analyzer",
            MenuChoice::Generate => "📝 Wordlist Generator",
            MenuChoice::Quit => "🚪 Quit",
        };
        f.write_str(label)
    }
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

pub fn run() -> anyhow::Result<()> {
    println!("Launching interactive mode... (use --help for CLI options)");

    loop {
        let choice = Select::new(
            "What would you like to do?",
            vec![MenuChoice::Analyze, MenuChoice::Generate, MenuChoice::Quit],
        )
        .prompt();

        let outcome = match choice {
            Ok(MenuChoice::Analyze) => analyze_form(),
            Ok(MenuChoice::Generate) => generate_form(),
            Ok(MenuChoice::Quit) => break,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        // Esc 只取消目前的表單，回到選單
        match outcome {
            Err(e) if is_cancel(&e) => continue,
            other => other?,
        }
    }

    Ok(())
}

fn analyze_form() -> Result<(), InquireError> {
    let password = Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_display_toggle_enabled()
        .with_help_message("Ctrl+R to show/hide")
        .without_confirmation()
        .prompt()?;

    match analyze_password(ZxcvbnEstimator::new(), &password, ReportFormat::Text) {
        Ok(report) => println!("\n{}\n", report),
        Err(e) => eprintln!("❌ Error: {}", e),
    }
    Ok(())
}

fn generate_form() -> Result<(), InquireError> {
    let name = Text::new("Name:").prompt()?;
    let dob = Text::new("Date of Birth (YYYY-MM-DD):").prompt()?;
    let pet_name = Text::new("Pet Name:").prompt()?;
    let favorite_color = Text::new("Favorite Color:").prompt()?;
    let output_path = Text::new("Output File:")
        .with_default(DEFAULT_OUTPUT_FILE)
        .prompt()?;
    let append_years = Confirm::new("Append Years?").with_default(true).prompt()?;

    let seeds = SeedInputs {
        name,
        dob,
        pet_name,
        favorite_color,
        append_years,
        output_path,
        reference_year: None,
    };

    match generate_wordlist(&seeds) {
        Ok(summary) => println!("\n{}\n", summary),
        Err(ProbeError::MissingInputError { message }) => println!("{}", message),
        Err(e) => {
            tracing::error!("Wordlist generation failed: {}", e);
            eprintln!("❌ Error: {}", e.user_friendly_message());
        }
    }
    Ok(())
}
