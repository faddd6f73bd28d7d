//! Balance data compiler binary.
//!
//! Run with: `cargo run -p balance-compiler -- <command>`
//!
//! ```bash
//! # Build every dataset into ./mechanics
//! cargo run -p balance-compiler -- all
//!
//! # Rebuild one weapon with strict validation
//! cargo run -p balance-compiler -- --strict weapon commonRustySword
//! ```

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Dataset, Entity, GlobalArgs, List, Project};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Compile balance content into client datasets
#[derive(Parser)]
#[command(name = "balance")]
#[command(about = "Game balance data compiler", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Build every dataset in dependency order
    All,

    /// Publish the attribute catalog
    Attributes,

    /// Publish the item catalog
    Items,

    /// Publish the quest catalog
    Quests,

    /// Extract skill and weapon level requirements from the workbook
    Requirements,

    /// Generate player level mechanics (requires `requirements`)
    Player,

    /// Generate one enemy
    Enemy(Entity),

    /// Generate one weapon
    Weapon(Entity),

    /// Generate one skill
    Skill(Entity),

    /// List authored entities or built datasets
    List(List),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for BALANCE_* overrides)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging();

    let config = cli.global.resolve()?;
    let project = Project::open(config)?;

    match cli.command {
        Command::All => Dataset::All.execute(&project),
        Command::Attributes => Dataset::Attributes.execute(&project),
        Command::Items => Dataset::Items.execute(&project),
        Command::Quests => Dataset::Quests.execute(&project),
        Command::Requirements => Dataset::Requirements.execute(&project),
        Command::Player => Dataset::Player.execute(&project),
        Command::Enemy(cmd) => cmd.enemy(&project),
        Command::Weapon(cmd) => cmd.weapon(&project),
        Command::Skill(cmd) => cmd.skill(&project),
        Command::List(cmd) => cmd.execute(&project),
    }
}

/// Logs to stderr, filtered by `RUST_LOG` with `info` as the floor.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
