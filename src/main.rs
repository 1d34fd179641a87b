use anyhow::Result;
use clap::{Parser, Subcommand};
use orcid_publications::{fetch, normalize};

#[derive(Parser)]
#[command(name = "orcid-publications")]
#[command(about = "Fetch public works from ORCID and write a publications JSON document")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    fetch: fetch::FetchArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch works from the ORCID public API and write the document (default)
    Fetch(fetch::FetchArgs),
    /// Build the document from a saved works response instead of the network
    Normalize(normalize::NormalizeArgs),
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command.unwrap_or(Commands::Fetch(cli.fetch)) {
        Commands::Fetch(args) => fetch::run(args),
        Commands::Normalize(args) => normalize::run(args),
    }
}
