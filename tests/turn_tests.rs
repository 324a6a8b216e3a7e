//! Turn flow integration tests: upkeep, income growth, upgrade budgets.

use std::sync::Arc;

use defend_the_fort::cards::{standard_catalog, starter_deck};
use defend_the_fort::core::{GameError, MatchConfig, PlayerId};
use defend_the_fort::entities::Monster;
use defend_the_fort::game::{Game, GameBuilder, GamePhase, Player, Scenario};

const ANN: PlayerId = PlayerId::FIRST;
const BEA: PlayerId = PlayerId::SECOND;

fn new_game() -> Game {
    let config = MatchConfig::default();
    Game::with_players(
        config.clone(),
        [Player::new(ANN, "Ann", &config), Player::new(BEA, "Bea", &config)],
    )
}

/// End turns until `turn` begins for the first seat.
fn advance_to(game: &mut Game, turn: u32) {
    while game.turn_number() < turn {
        let current = game.current_player();
        game.end_turn(current).unwrap();
    }
}

#[test]
fn test_actions_rejected_before_start() {
    let mut game = new_game();
    assert_eq!(game.phase(), GamePhase::Setup);
    assert_eq!(game.end_turn(ANN), Err(GameError::NotStarted));
    assert_eq!(game.upgrade_weapon(ANN, 0), Err(GameError::NotStarted));
    assert!(game.legal_actions(ANN).is_empty());
}

#[test]
fn test_income_rises_every_third_turn() {
    let mut game = new_game();
    game.start().unwrap();

    let mut increases = Vec::new();
    while game.turn_number() < 7 {
        let current = game.current_player();
        let outcome = game.end_turn(current).unwrap();
        if outcome.income_increased {
            increases.push(outcome.turn_number);
        }
    }

    assert_eq!(increases, vec![3, 6]);
    assert_eq!(game.player(ANN).stars_per_turn, 5);
    assert_eq!(game.player(BEA).stars_per_turn, 5);
}

#[test]
fn test_income_unchanged_on_turns_one_two_four_five() {
    let mut game = new_game();
    game.start().unwrap();

    advance_to(&mut game, 2);
    assert_eq!(game.player(ANN).stars_per_turn, 3);
    advance_to(&mut game, 3);
    assert_eq!(game.player(ANN).stars_per_turn, 4);
    advance_to(&mut game, 4);
    assert_eq!(game.player(ANN).stars_per_turn, 4);
    advance_to(&mut game, 5);
    assert_eq!(game.player(BEA).stars_per_turn, 4);
}

#[test]
fn test_upkeep_pays_income_and_fort_bonus() {
    let config = MatchConfig::default();
    let mut bea = Player::new(BEA, "Bea", &config);
    bea.fort.star_generation = 2;
    let mut game = Game::with_players(config.clone(), [Player::new(ANN, "Ann", &config), bea]);
    game.start().unwrap();
    assert_eq!(game.player(ANN).stars, 5);

    game.end_turn(ANN).unwrap();
    assert_eq!(game.player(BEA).stars, 2 + 3 + 2);
    // Off-turn players earn nothing.
    assert_eq!(game.player(ANN).stars, 5);
}

#[test]
fn test_turn_start_draws_one_card() {
    let mut game = GameBuilder::new(Arc::new(standard_catalog()))
        .player("Ann", starter_deck())
        .player("Bea", starter_deck())
        .build()
        .unwrap();
    assert_eq!(game.player(ANN).hand.len(), 4);
    assert_eq!(game.player(ANN).deck.len(), 16);

    let outcome = game.start().unwrap();
    assert!(outcome.drawn.is_some());
    assert_eq!(game.player(ANN).hand.len(), 5);
    assert_eq!(game.player(BEA).hand.len(), 4);

    game.end_turn(ANN).unwrap();
    assert_eq!(game.player(BEA).hand.len(), 5);
}

#[test]
fn test_upgrade_budget_resets_each_turn() {
    let mut game = Scenario::new(MatchConfig::default())
        .seat(ANN, |p| {
            p.stars = 20;
            p.monster_field.place(0, Monster::token("Unit", ANN, 2, 0, 6)).unwrap();
        })
        .build();

    game.upgrade_weapon(ANN, 0).unwrap();
    assert_eq!(game.upgrade_weapon(ANN, 0), Err(GameError::UpgradeCapReached));
    game.upgrade_armor(ANN, 0).unwrap();

    advance_to(&mut game, 2);
    let outcome = game.upgrade_weapon(ANN, 0).unwrap();
    assert_eq!(game.player(ANN).monster_field.get(0).unwrap().weapon_level, 2);
    assert_eq!(outcome.stars_left, game.player(ANN).stars);
}

#[test]
fn test_same_seed_same_opening_hands() {
    let build = |seed| {
        GameBuilder::new(Arc::new(standard_catalog()))
            .seed(seed)
            .player("Ann", starter_deck())
            .player("Bea", starter_deck())
            .build()
            .unwrap()
    };
    let ids = |game: &Game, player| {
        game.player(player)
            .hand
            .iter()
            .map(|c| c.card_id().clone())
            .collect::<Vec<_>>()
    };

    let a = build(7);
    let b = build(7);
    assert_eq!(ids(&a, ANN), ids(&b, ANN));
    assert_eq!(ids(&a, BEA), ids(&b, BEA));
}
