use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use shipfinder_catalog::{Catalog, Crew, Engine, ShipQuery, Size, Weapon};
use shipfinder_flow::{run_session, FlowConfig, NarrowingSession};

mod prompter;
mod render;

#[derive(Parser)]
#[command(name = "shipfinder")]
#[command(about = "Conversational spaceship catalog search", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Load the catalog from a JSON file instead of the builtin seed fleet
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// TOML file with flow tuning (e.g. feedback_threshold)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Narrow down to a ship through an interactive question flow
    Find,

    /// One-shot partial-match search with explicit criteria
    Match(MatchArgs),

    /// Print the catalog
    Ships(OutputArgs),
}

#[derive(Args)]
struct MatchArgs {
    /// Ship size (small, mid, large)
    #[arg(long)]
    size: Option<String>,

    /// Engine type, repeatable (e.g. --engine warp --engine impulse)
    #[arg(long = "engine")]
    engines: Vec<String>,

    /// Weapon type, repeatable
    #[arg(long = "weapon")]
    weapons: Vec<String>,

    /// Crew alignment (allied, hostile)
    #[arg(long)]
    crew: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let config = match &cli.config {
        Some(path) => FlowConfig::from_toml_path(path)?,
        None => FlowConfig::default(),
    };

    match cli.command {
        Commands::Find => run_find(catalog, config).await,
        Commands::Match(args) => run_match(&catalog, &args),
        Commands::Ships(output) => run_ships(&catalog, &output),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .init();
}

async fn run_find(catalog: Catalog, config: FlowConfig) -> Result<()> {
    let session = NarrowingSession::new(Arc::new(catalog), config);
    let mut prompter = prompter::ConsolePrompter::new();
    // The driver reports the outcome through the prompter either way.
    run_session(session, &mut prompter).await?;
    Ok(())
}

fn run_match(catalog: &Catalog, args: &MatchArgs) -> Result<()> {
    let query = build_query(args)?;
    log::debug!("one-shot match with {query:?}");
    let matches = catalog.find_matches(&query);
    if matches.is_empty() {
        bail!("no ships match the given criteria");
    }
    render::print_matches(&matches, args.output.json)
}

fn run_ships(catalog: &Catalog, output: &OutputArgs) -> Result<()> {
    // The wildcard query returns every record with its surrogate id attached.
    let matches = catalog.find_matches(&ShipQuery::new());
    render::print_matches(&matches, output.json)
}

fn build_query(args: &MatchArgs) -> Result<ShipQuery> {
    let mut query = ShipQuery::new();
    if let Some(raw) = &args.size {
        query.size = Some(raw.parse::<Size>()?);
    }
    for raw in &args.engines {
        query.add_engine(raw.parse::<Engine>()?);
    }
    for raw in &args.weapons {
        query.add_weapon(raw.parse::<Weapon>()?);
    }
    if let Some(raw) = &args.crew {
        query.crew = Some(raw.parse::<Crew>()?);
    }
    Ok(query)
}
