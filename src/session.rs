#![cfg(feature = "std")]
//! Entry points wiring the rules engine to a console.
//!
//! Nothing runs on load; [`run_session`] and [`simulate`] are called
//! explicitly by the binaries.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::core::{random_board, Rules, ShotOutcome};
use crate::game::{Game, Side, Turn};
use crate::player::cli::coord_to_string;
use crate::player::{CliSource, Player, RandomSource};
use crate::ui::BoardView;

/// The human always sits on the first side, the computer on the second.
pub const HUMAN: Side = Side::First;
pub const COMPUTER: Side = Side::Second;

/// Who opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FirstMove {
    Human,
    Computer,
    #[default]
    Random,
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub rules: Rules,
    /// Fixes board layouts, the opening side and the computer's shots.
    pub seed: Option<u64>,
    pub first: FirstMove,
    /// Pause before each computer shot.
    pub computer_delay: Duration,
    pub show_rules: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            seed: None,
            first: FirstMove::Random,
            computer_delay: Duration::ZERO,
            show_rules: false,
        }
    }
}

/// How a finished session went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    pub winner: Side,
    pub moves: usize,
}

impl SessionResult {
    pub fn human_won(&self) -> bool {
        self.winner == HUMAN
    }
}

fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn side_name(side: Side) -> &'static str {
    if side == HUMAN {
        "You"
    } else {
        "Computer"
    }
}

fn greet<O: Write>(out: &mut O) -> io::Result<()> {
    writeln!(out, "╔══════════════════════════════════════╗")?;
    writeln!(out, "║            W E L C O M E             ║")?;
    writeln!(out, "║         to the game SEA BATTLE       ║")?;
    writeln!(out, "╚══════════════════════════════════════╝")
}

fn print_rules<O: Write>(out: &mut O, rules: &Rules) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────")?;
    writeln!(
        out,
        " Both fleets are placed at random on a {n}x{n} board.",
        n = rules.board_size
    )?;
    writeln!(
        out,
        " Each side has {} vessels of lengths {:?}.",
        rules.fleet_size(),
        rules.fleet
    )?;
    writeln!(out, " Vessels never touch, not even at a corner.")?;
    writeln!(out, " Goal: sink every enemy vessel.")?;
    writeln!(out, " Input format: row column, e.g. 2 5")?;
    writeln!(out, " A hit (X) earns another shot, a miss (T) passes the turn.")?;
    writeln!(out, " Cells around a sunk vessel are marked as misses.")?;
    writeln!(out, "────────────────────────────────────────")
}

fn print_boards<O: Write>(out: &mut O, game: &Game) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(28))?;
    writeln!(out, "Your board:")?;
    writeln!(out, "{}", BoardView(game.board(HUMAN)))?;
    writeln!(out, "{}", "-".repeat(28))?;
    writeln!(out, "Computer's board:")?;
    writeln!(out, "{}", BoardView(game.board(COMPUTER)))
}

fn announce<O: Write>(out: &mut O, turn: &Turn) -> io::Result<()> {
    if turn.side == COMPUTER {
        writeln!(out, "Computer fires at: {}", coord_to_string(turn.shot.target))?;
    }
    match turn.shot.outcome {
        ShotOutcome::Hit => writeln!(out, "Vessel hit!"),
        ShotOutcome::Sunk => writeln!(out, "Vessel destroyed!"),
        ShotOutcome::Miss => writeln!(out, "Miss!"),
    }
}

/// Play one human-vs-computer game, with `human` supplying the human's
/// targets and all narration going to `out`.
pub fn play<R, W, O>(
    opts: &SessionOptions,
    human: CliSource<R, W>,
    out: &mut O,
) -> anyhow::Result<SessionResult>
where
    R: BufRead + 'static,
    W: Write + 'static,
    O: Write,
{
    opts.rules.validate()?;
    let mut rng = rng_from(opts.seed);

    let human_board = random_board(&opts.rules, &mut rng);
    let mut computer_board = random_board(&opts.rules, &mut rng);
    computer_board.set_concealed(true);

    let first = match opts.first {
        FirstMove::Human => HUMAN,
        FirstMove::Computer => COMPUTER,
        FirstMove::Random => Side::random(&mut rng),
    };
    let computer = RandomSource::new(SmallRng::seed_from_u64(rng.random()))
        .with_delay(opts.computer_delay);
    let players = [Player::new("You", human), Player::new("Computer", computer)];
    let mut game = Game::new(players, [human_board, computer_board], first);
    log::info!("session started, {} moves first", side_name(first));

    greet(out)?;
    if opts.show_rules {
        print_rules(out, &opts.rules)?;
    }

    let winner = loop {
        print_boards(out, &game)?;
        writeln!(out, "{}", "-".repeat(28))?;
        if game.active() == HUMAN {
            writeln!(out, "Your turn!")?;
        } else {
            writeln!(out, "Computer's turn!")?;
        }
        out.flush()?;
        let turn = game.step()?;
        announce(out, &turn)?;
        if let Some(winner) = turn.winner {
            break winner;
        }
    };

    print_boards(out, &game)?;
    writeln!(out, "{}", "-".repeat(28))?;
    if winner == HUMAN {
        writeln!(out, "You won!")?;
    } else {
        writeln!(out, "Computer won!")?;
    }
    out.flush()?;
    Ok(SessionResult {
        winner,
        moves: game.moves(),
    })
}

/// Play on the terminal: standard input for moves, standard output for
/// everything else.
pub fn run_session(opts: &SessionOptions) -> anyhow::Result<SessionResult> {
    let mut stdout = io::stdout();
    play(opts, CliSource::stdio(), &mut stdout)
}

/// Outcome of a computer-vs-computer game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimReport {
    pub seed: u64,
    pub first: Side,
    pub winner: Side,
    pub moves: usize,
    /// Accepted shots per side.
    pub shots: [usize; 2],
    /// Refused targets per side.
    pub rejected: [usize; 2],
    /// Vessels each side sank.
    pub sunk: [usize; 2],
}

/// Play a full computer-vs-computer game. The same `seed` always produces
/// the same report.
pub fn simulate(rules: &Rules, seed: u64) -> anyhow::Result<SimReport> {
    rules.validate()?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let boards = [random_board(rules, &mut rng), random_board(rules, &mut rng)];
    let first = Side::random(&mut rng);
    let players = [
        Player::new("computer 1", RandomSource::seeded(rng.random())),
        Player::new("computer 2", RandomSource::seeded(rng.random())),
    ];
    let mut game = Game::new(players, boards, first);
    let winner = game.run()?;
    let moves = game.moves();
    let (players, boards) = game.into_parts();
    Ok(SimReport {
        seed,
        first,
        winner,
        moves,
        shots: [players[0].shots_fired(), players[1].shots_fired()],
        rejected: [players[0].rejected_shots(), players[1].rejected_shots()],
        sunk: [boards[1].destroyed(), boards[0].destroyed()],
    })
}
