use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pokemap_arena::{ArenaConfig, Reply, open_session, play_out, play_turn, start_game, start_teams};
use pokemap_battle::Creature;
use pokemap_protocol::{StartResponse, parse_catalog};
use pokemap_team::{TeamInitializer, creatures_from_catalog};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Start PokeMap games and play battle turns over JSON")]
struct Cli {
    /// Path to arena.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample starting teams from a catalog file.
    Start(StartArgs),
    /// Play one turn from a turn request document.
    Turn(TurnArgs),
    /// Confirm squad picks from a start document and emit the first turn request.
    Select(SelectArgs),
    /// Start a game and play it to the end.
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct CatalogArgs {
    /// JSON array of catalog entries
    #[arg(long)]
    catalog: PathBuf,
    /// Seed for team sampling; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct StartArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Args)]
struct TurnArgs {
    /// Request document; stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct SelectArgs {
    /// Start document; stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Species numbers of the chosen units
    #[arg(long, value_delimiter = ',', required = true)]
    picks: Vec<u32>,
}

#[derive(Args)]
struct SimulateArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
    /// Species numbers of the chosen units; the first offered ones when omitted
    #[arg(long, value_delimiter = ',')]
    picks: Vec<u32>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = ArenaConfig::load(cli.config.as_deref())?;
    init_logging(&config);

    match cli.command {
        Commands::Start(args) => handle_start(&config, args),
        Commands::Turn(args) => handle_turn(&config, args),
        Commands::Select(args) => handle_select(&config, args),
        Commands::Simulate(args) => handle_simulate(&config, args),
    }
}

/// `RUST_LOG` wins over the configured level; logs go to stderr
fn init_logging(config: &ArenaConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn handle_start(config: &ArenaConfig, args: StartArgs) -> Result<ExitCode> {
    let pool = load_pool(&args.catalog.catalog)?;
    let initializer = TeamInitializer::from_config(&config.teams);
    let reply = start_game(&pool, &initializer, &mut rng(args.catalog.seed));
    Ok(emit(reply))
}

fn handle_turn(config: &ArenaConfig, args: TurnArgs) -> Result<ExitCode> {
    let body = read_input(args.input.as_deref())?;
    Ok(emit(play_turn(&body, &config.rules)))
}

fn handle_select(config: &ArenaConfig, args: SelectArgs) -> Result<ExitCode> {
    let body = read_input(args.input.as_deref())?;
    let start: StartResponse =
        serde_json::from_str(&body).context("start document is not valid JSON")?;
    let request = open_session(&start, &args.picks, config.teams.squad_size)?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(ExitCode::SUCCESS)
}

fn handle_simulate(config: &ArenaConfig, args: SimulateArgs) -> Result<ExitCode> {
    let pool = load_pool(&args.catalog.catalog)?;
    let initializer = TeamInitializer::from_config(&config.teams);
    let teams = start_teams(&pool, &initializer, &mut rng(args.catalog.seed))?;

    let picks = if args.picks.is_empty() {
        teams
            .user
            .units
            .iter()
            .take(initializer.squad_size)
            .filter_map(|u| u.species_id())
            .collect()
    } else {
        args.picks
    };
    info!(?picks, "squad chosen");

    let session = teams.into_session(&picks, initializer.squad_size)?;
    let (transcript, _) = play_out(session, &config.rules)?;
    println!("{}", serde_json::to_string_pretty(&transcript)?);
    Ok(ExitCode::SUCCESS)
}

fn load_pool(path: &Path) -> Result<Vec<Creature>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog =
        parse_catalog(&data).with_context(|| format!("invalid catalog {}", path.display()))?;
    for skipped in &catalog.skipped {
        warn!(index = skipped.index, reason = %skipped.reason, "skipping catalog document");
    }
    let pool = creatures_from_catalog(&catalog.entries);
    info!(
        documents = catalog.entries.len() + catalog.skipped.len(),
        usable = pool.len(),
        "catalog loaded"
    );
    Ok(pool)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("failed to read stdin")?;
            Ok(body)
        }
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Print the reply body; non-success statuses fail the process
fn emit(reply: Reply) -> ExitCode {
    println!("{}", reply.body);
    if reply.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
