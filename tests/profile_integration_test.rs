#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use passprobe::config::{Cli, Command, GenerateArgs};
use passprobe::{generate_wordlist, ProbeError};
use tempfile::TempDir;

fn generate_args(argv: &[&str]) -> GenerateArgs {
    let mut full = vec!["passprobe", "generate"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        Some(Command::Generate(args)) => args,
        other => panic!("expected generate, got {:?}", other),
    }
}

#[test]
fn test_profile_file_drives_generation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = temp_dir.path().to_str().unwrap().replace('\\', "/");
    let output_path = format!("{}/out/alice.txt", temp_path);

    let profile_path = temp_dir.path().join("alice.toml");
    std::fs::write(
        &profile_path,
        format!(
            r#"
[target]
name = "Alice"
pet_name = "Rex"

[output]
path = "{}"
reference_year = 2024
"#,
            output_path
        ),
    )?;

    let seeds = generate_args(&["--profile", profile_path.to_str().unwrap()]).resolve()?;
    assert_eq!(seeds.output_path, output_path);
    assert_eq!(seeds.reference_year, Some(2024));

    let summary = generate_wordlist(&seeds)?;
    let content = std::fs::read_to_string(&output_path)?;
    assert_eq!(content.lines().count(), summary.word_count);
    assert!(content.lines().any(|l| l == "Alice2024"));
    Ok(())
}

#[test]
fn test_flags_override_profile() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let profile_path = temp_dir.path().join("target.toml");
    std::fs::write(
        &profile_path,
        "[target]\nname = \"Alice\"\npet_name = \"Rex\"\n\n[output]\nappend_years = true\nreference_year = 2020\n",
    )?;

    let seeds = generate_args(&[
        "--profile",
        profile_path.to_str().unwrap(),
        "--pet",
        "Milo",
        "--no-years",
        "--reference-year",
        "2024",
    ])
    .resolve()?;

    assert_eq!(seeds.name, "Alice");
    assert_eq!(seeds.pet_name, "Milo");
    assert!(!seeds.append_years);
    assert_eq!(seeds.reference_year, Some(2024));
    assert_eq!(seeds.output_path, "custom_wordlist.txt");
    Ok(())
}

#[test]
fn test_missing_profile_file() {
    let err = generate_args(&["--profile", "/definitely/not/here.toml"])
        .resolve()
        .unwrap_err();
    assert!(matches!(err, ProbeError::IoError(_)));
}

#[test]
fn test_reference_year_out_of_range() {
    let err = generate_args(&["--name", "Alice", "--reference-year", "42"])
        .resolve()
        .unwrap_err();
    assert!(matches!(err, ProbeError::InvalidConfigValueError { .. }));
}
