mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::catalog::SearchArgs;
use commands::maturity::MaturityArgs;
use commands::recommend::RecommendArgs;
use commands::risk::ClassifyRiskArgs;

/// Goal-based deposit and installment-savings recommendations
#[derive(Parser)]
#[command(
    name = "fingrow",
    version,
    about = "Goal-based deposit and installment-savings recommendations",
    long_about = "Recommends deposit (lump-sum) and installment-savings products for a \
                  savings goal, plans a combined deposit + savings allocation, and \
                  classifies investor risk from an onboarding survey. All money math \
                  uses decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend products and an optimal combination for a savings goal
    Recommend(RecommendArgs),
    /// Classify investor risk from survey answers
    ClassifyRisk(ClassifyRiskArgs),
    /// Print the onboarding survey questionnaire
    Questionnaire,
    /// Search deposit and savings catalogs by keyword
    Search(SearchArgs),
    /// Project the maturity value of a deposit or installment plan
    Maturity(MaturityArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Recommend(args) => commands::recommend::run_recommend(args),
        Commands::ClassifyRisk(args) => commands::risk::run_classify_risk(args),
        Commands::Questionnaire => commands::risk::run_questionnaire(),
        Commands::Search(args) => commands::catalog::run_search(args),
        Commands::Maturity(args) => commands::maturity::run_maturity(args),
        Commands::Version => {
            println!("fingrow {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
