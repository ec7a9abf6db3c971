//! Baymax command-line interface

use anyhow::Result;
use baymax::cli::config::{CommandContext, ConnectionArgs};
use baymax::cli::output::{self, OutputFormat};
use baymax::cli::{ai_summary, discharge, order, patients, repl, summary, upload};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Baymax clinical dashboard
#[derive(Parser)]
#[command(name = "baymax")]
#[command(author, version, about = "Baymax clinical dashboard client", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, pretty, table); the terminal view by default
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List patients
    Patients,

    /// Show a patient's clinical summary
    Summary {
        /// Patient number, file name or "Last, First" (default: first patient)
        #[arg(short, long)]
        patient: Option<String>,
    },

    /// Check a new drug order for interactions
    Order {
        /// Drug name
        drug: String,

        /// Patient number, file name or "Last, First" (default: first patient)
        #[arg(short, long)]
        patient: Option<String>,
    },

    /// Check discharge eligibility
    Discharge {
        /// Patient number, file name or "Last, First" (default: first patient)
        #[arg(short, long)]
        patient: Option<String>,
    },

    /// Generate an AI summary
    AiSummary {
        /// Patient number, file name or "Last, First" (default: first patient)
        #[arg(short, long)]
        patient: Option<String>,
    },

    /// Upload a patient record (.json)
    Upload {
        /// Record file
        file: PathBuf,
    },

    /// Start the interactive dashboard
    Dashboard,
}

#[tokio::main]
async fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    env_logger::init_from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    );

    if let Err(e) = run(cli).await {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext {
        connection: cli.connection,
        output_format: OutputFormat::from_option(cli.format.as_deref()),
        output_file: cli.output,
    };

    match cli.command {
        Commands::Patients => patients::list(ctx).await,
        Commands::Summary { patient } => summary::show(ctx, patient).await,
        Commands::Order { drug, patient } => order::submit(ctx, patient, drug).await,
        Commands::Discharge { patient } => discharge::evaluate(ctx, patient).await,
        Commands::AiSummary { patient } => ai_summary::generate(ctx, patient).await,
        Commands::Upload { file } => upload::upload(ctx, file).await,
        Commands::Dashboard => {
            repl::run(repl::ReplConfig {
                connection: ctx.connection,
            })
            .await
        }
    }
}
