use std::time::Duration;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use sea_battle::{
    init_logging, run_session, FirstMove, Rules, SessionOptions, FLEET, PLACEMENT_BUDGET,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (overrides SEA_BATTLE_LOG).
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Clone, Debug)]
struct RulesArgs {
    /// Side length of the board.
    #[arg(long, default_value_t = sea_battle::BOARD_SIZE)]
    size: usize,
    /// Vessel lengths, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = FLEET)]
    fleet: Vec<usize>,
    /// Placement attempts per fleet before starting over.
    #[arg(long, default_value_t = PLACEMENT_BUDGET)]
    budget: usize,
}

impl From<RulesArgs> for Rules {
    fn from(args: RulesArgs) -> Self {
        Rules {
            board_size: args.size,
            fleet: args.fleet,
            placement_budget: args.budget,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[command(flatten)]
        rules: RulesArgs,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Who fires first.
        #[arg(long, value_enum, default_value_t = FirstMove::Random)]
        first: FirstMove,
        /// Pause before each computer shot, in milliseconds.
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
        /// Print the rules before the game starts.
        #[arg(long)]
        rules_text: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let command = cli.command.unwrap_or_else(|| Commands::Play {
        rules: RulesArgs {
            size: sea_battle::BOARD_SIZE,
            fleet: FLEET.to_vec(),
            budget: PLACEMENT_BUDGET,
        },
        seed: None,
        first: FirstMove::Random,
        delay_ms: 0,
        rules_text: true,
    });

    match command {
        Commands::Play {
            rules,
            seed,
            first,
            delay_ms,
            rules_text,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let opts = SessionOptions {
                rules: rules.into(),
                seed,
                first,
                computer_delay: Duration::from_millis(delay_ms),
                show_rules: rules_text,
            };
            let result = run_session(&opts)?;
            log::info!("game over after {} moves", result.moves);
        }
    }
    Ok(())
}
