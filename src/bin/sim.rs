use sea_battle::{init_logging, simulate, Rules, Side};
use serde_json::json;

/// Play `<games>` seeded computer-vs-computer games and print a JSON summary.
fn main() -> anyhow::Result<()> {
    init_logging(None);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let rules = Rules::default();
    let mut wins = [0usize; 2];
    let mut total_moves = 0usize;
    let mut reports = Vec::new();
    for i in 0..games {
        let report = simulate(&rules, seed.wrapping_add(i))?;
        wins[report.winner.index()] += 1;
        total_moves += report.moves;
        reports.push(report);
    }

    let average_moves = if games == 0 {
        0.0
    } else {
        total_moves as f64 / games as f64
    };
    let result = json!({
        "games": games,
        "wins": {
            "first": wins[Side::First.index()],
            "second": wins[Side::Second.index()],
        },
        "average_moves": average_moves,
        "reports": reports,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
