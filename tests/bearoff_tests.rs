//! Bear-off eligibility and win detection tests.

use gammon::core::Color;
use gammon::rules::{Phase, ScenarioBuilder, OFF};

#[test]
fn test_bear_off_blocked_by_checker_outside_home() {
    let game = ScenarioBuilder::new()
        .place(22, Color::White, 1)
        .unwrap()
        .place(18, Color::White, 1)
        .unwrap()
        .borne_off(Color::White, 13)
        .to_move(Color::White)
        .distances(&[3])
        .build();

    assert!(!game.can_bear_off(Color::White));
    assert!(!game.is_legal_move(22, OFF));
}

#[test]
fn test_bear_off_blocked_by_bar() {
    let game = ScenarioBuilder::new()
        .place(22, Color::White, 1)
        .unwrap()
        .on_bar(Color::White, 1)
        .borne_off(Color::White, 13)
        .to_move(Color::White)
        .distances(&[3])
        .build();

    assert!(!game.can_bear_off(Color::White));
    assert!(!game.is_legal_move(22, OFF));
}

#[test]
fn test_bear_off_with_full_home_board() {
    // All fifteen white checkers in 19..=24, a 3 available.
    let mut game = ScenarioBuilder::new()
        .place(19, Color::White, 3)
        .unwrap()
        .place(20, Color::White, 3)
        .unwrap()
        .place(21, Color::White, 3)
        .unwrap()
        .place(22, Color::White, 2)
        .unwrap()
        .place(23, Color::White, 2)
        .unwrap()
        .place(24, Color::White, 2)
        .unwrap()
        .to_move(Color::White)
        .distances(&[3])
        .build();

    assert!(game.can_bear_off(Color::White));
    assert!(game.is_legal_move(22, OFF));

    assert!(game.execute_move(22, OFF));
    assert_eq!(game.home(Color::White).len(), 1);
    assert_eq!(game.board().unwrap().count_at(22), 1);
    assert!(game.available_distances().is_empty());
}

#[test]
fn test_bear_off_requires_exact_die() {
    // A 5 does not bear off from point 22; only a 3 does.
    let game = ScenarioBuilder::new()
        .place(22, Color::White, 1)
        .unwrap()
        .borne_off(Color::White, 14)
        .to_move(Color::White)
        .distances(&[5])
        .build();

    assert!(game.can_bear_off(Color::White));
    assert!(!game.is_legal_move(22, OFF));
}

#[test]
fn test_white_bear_off_distances() {
    let game = ScenarioBuilder::new()
        .place(19, Color::White, 1)
        .unwrap()
        .place(24, Color::White, 1)
        .unwrap()
        .borne_off(Color::White, 13)
        .to_move(Color::White)
        .distances(&[6, 1])
        .build();

    // 25 - 19 = 6, 25 - 24 = 1.
    assert!(game.is_legal_move(19, OFF));
    assert!(game.is_legal_move(24, OFF));
}

#[test]
fn test_black_bear_off_distances() {
    let game = ScenarioBuilder::new()
        .place(6, Color::Black, 1)
        .unwrap()
        .place(1, Color::Black, 1)
        .unwrap()
        .borne_off(Color::Black, 13)
        .to_move(Color::Black)
        .distances(&[6, 1])
        .build();

    // Black's bear-off distance is the point number itself.
    assert!(game.is_legal_move(6, OFF));
    assert!(game.is_legal_move(1, OFF));
    assert!(!game.is_legal_move(6, 25 - 6));
}

#[test]
fn test_fifteenth_checker_wins() {
    let mut game = ScenarioBuilder::new()
        .place(24, Color::White, 1)
        .unwrap()
        .borne_off(Color::White, 14)
        .to_move(Color::White)
        .distances(&[1, 4])
        .build();

    assert!(!game.is_finished());
    assert!(game.execute_move(24, OFF));

    assert!(game.is_finished());
    assert_eq!(game.phase(), Phase::Finished);
    let winner = game.winner().unwrap();
    assert_eq!(winner.color(), Color::White);

    // Terminal: leftover distances buy nothing, rolling and moving refuse,
    // read accessors keep working.
    assert_eq!(game.available_distances(), &[4]);
    assert!(!game.has_any_legal_move());
    assert!(game.roll().is_none());
    assert!(game.board().is_some());

    game.end_turn();
    assert_eq!(game.phase(), Phase::Finished);
}

#[test]
fn test_black_wins_symmetrically() {
    let mut game = ScenarioBuilder::new()
        .place(3, Color::Black, 1)
        .unwrap()
        .borne_off(Color::Black, 14)
        .to_move(Color::Black)
        .distances(&[3])
        .build();

    assert!(game.execute_move(3, OFF));
    assert!(game.is_finished());
    assert_eq!(game.winner().unwrap().color(), Color::Black);
    assert_eq!(game.home(Color::Black).len(), 15);
}

#[test]
fn test_moves_within_home_board_still_allowed() {
    // Eligibility to bear off does not force bearing off.
    let mut game = ScenarioBuilder::new()
        .place(19, Color::White, 2)
        .unwrap()
        .borne_off(Color::White, 13)
        .to_move(Color::White)
        .distances(&[3])
        .build();

    assert!(game.is_legal_move(19, 22));
    assert!(game.execute_move(19, 22));
    assert_eq!(game.board().unwrap().count_at(22), 1);
}
