use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    random_board, simulate, Game, GameStatus, Player, RandomSource, Rules, ShotOutcome, Side,
};

fn ai_game(seed: u64) -> Game {
    let rules = Rules::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    let boards = [random_board(&rules, &mut rng), random_board(&rules, &mut rng)];
    let players = [
        Player::new("ai 1", RandomSource::seeded(seed.wrapping_add(1))),
        Player::new("ai 2", RandomSource::seeded(seed.wrapping_add(2))),
    ];
    Game::new(players, boards, Side::random(&mut rng))
}

#[test]
fn test_ai_vs_ai_game() {
    let fleet = Rules::default().fleet_size();
    for seed in 0..20 {
        let mut game = ai_game(seed);
        let mut turns = 0;
        loop {
            turns += 1;
            let active = game.active();
            let turn = game.step().unwrap();
            assert_eq!(turn.side, active);

            // miss hands over the turn, hit or sink keeps it
            match turn.shot.outcome {
                ShotOutcome::Miss => assert_eq!(game.active(), active.opponent()),
                ShotOutcome::Hit | ShotOutcome::Sunk => assert_eq!(game.active(), active),
            }

            let defeated = [Side::First, Side::Second]
                .into_iter()
                .filter(|&s| game.board(s).destroyed() == fleet)
                .count();
            match turn.winner {
                None => assert_eq!(defeated, 0),
                Some(w) => {
                    assert_eq!(defeated, 1);
                    assert!(game.board(w.opponent()).is_defeated());
                    assert!(!game.board(w).is_defeated());
                    break;
                }
            }
            assert!(turns < 10_000, "game took too many turns");
        }
        assert!(matches!(game.status(), GameStatus::Won(_)));
    }
}

#[test]
fn test_run_matches_status() {
    let mut game = ai_game(77);
    let winner = game.run().unwrap();
    assert_eq!(game.status(), GameStatus::Won(winner));
    assert_eq!(
        game.board(winner.opponent()).destroyed(),
        Rules::default().fleet_size()
    );
    let shots = game.player(Side::First).shots_fired() + game.player(Side::Second).shots_fired();
    assert_eq!(shots, game.moves());
}

#[test]
fn test_simulation_report() {
    let rules = Rules::default();
    for seed in [1, 2, 3] {
        let report = simulate(&rules, seed).unwrap();
        assert_eq!(report.seed, seed);
        assert_eq!(report.sunk[report.winner.index()], rules.fleet_size());
        // a random shooter cannot need more accepted shots than there are cells
        let cells = rules.board_size * rules.board_size;
        assert!(report.shots.iter().all(|&s| s <= cells));
    }
}

#[test]
fn test_simulation_json_shape() {
    let report = simulate(&Rules::default(), 9).unwrap();
    let v: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert!(v["winner"].is_string());
    assert_eq!(v["shots"].as_array().map(|a| a.len()), Some(2));
}
