use clap::Parser;
use passprobe::app::interactive;
use passprobe::config::{AnalyzeArgs, Cli, Command, GenerateArgs};
use passprobe::utils::error::ErrorSeverity;
use passprobe::utils::logger;
use passprobe::{analyze_password, generate_wordlist, ProbeError, ZxcvbnEstimator};

fn run_analyze(args: AnalyzeArgs) -> passprobe::Result<()> {
    let estimator = ZxcvbnEstimator::with_user_inputs(args.user_inputs);
    let output = analyze_password(estimator, &args.password, args.format)?;
    println!("{}", output);
    Ok(())
}

fn run_generate(args: GenerateArgs) -> passprobe::Result<()> {
    let seeds = args.resolve()?;
    tracing::debug!("Resolved seeds: {:?}", seeds);

    let summary = generate_wordlist(&seeds)?;
    println!("{}", summary);
    Ok(())
}

fn exit_with(e: ProbeError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    let result = match cli.command {
        Some(Command::Analyze(args)) => run_analyze(args),
        Some(Command::Generate(args)) => run_generate(args),
        None => {
            if let Err(e) = interactive::run() {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        exit_with(e);
    }
}
