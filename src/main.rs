use clap::{Parser, Subcommand};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print the full result bundle as JSON instead of tables
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encounter summary: DPS, fails and MVP
    Log(cmd::ReportArgs),
    /// MVP ranking
    Mvp(cmd::mvp::MvpArgs),
    /// Weighted fail ranking
    Fail(cmd::ReportArgs),
    /// Support ranking
    Support(cmd::ReportArgs),
    /// Mechanic success ranking
    Mechs(cmd::ReportArgs),
    /// Raw extractor output
    Debug(cmd::debug::DebugArgs),
    /// Score several reports in parallel
    Batch(cmd::batch::BatchArgs),
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let json = cli.json;
    let result = match cli.command {
        Commands::Log(args) => cmd::log::run(args, json),
        Commands::Mvp(args) => cmd::mvp::run(args, json),
        Commands::Fail(args) => cmd::fail::run(args, json),
        Commands::Support(args) => cmd::support::run(args, json),
        Commands::Mechs(args) => cmd::mechs::run(args, json),
        Commands::Debug(args) => cmd::debug::run(args, json),
        Commands::Batch(args) => cmd::batch::run(args, json),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
