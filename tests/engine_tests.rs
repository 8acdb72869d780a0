//! Turn engine tests.
//!
//! These tests drive the engine through the public API:
//! - Game setup layout
//! - Playing, buying and attacking
//! - Rejected commands leaving the snapshot untouched
//! - Win detection

use market_duel::cards::{catalog, Card};
use market_duel::core::{Command, EngineError, Personality};
use market_duel::rules::{TurnPhase, Verdict};
use market_duel::zones::Zone;
use market_duel::{api, Game};

fn fresh(seed: u64) -> Game {
    api::new_game(Personality::Aggressive, seed).expect("standard game should build")
}

/// A new game deals the market row, the supplement and both opening hands.
#[test]
fn test_new_game_layout() {
    let game = fresh(42);

    assert_eq!(game.market.deck.len(), 4);
    assert_eq!(game.market.active.len(), 5);
    assert_eq!(game.market.supplement.len(), 1);
    assert_eq!(game.human.deck.len(), 5);
    assert_eq!(game.human.hand.len(), 5);
    assert_eq!(game.opponent.deck.len(), 5);
    assert_eq!(game.opponent.hand.len(), 5);
    assert_eq!(game.phase(), TurnPhase::AwaitingHumanAction);
}

/// Playing one card moves it to active and adds its values.
#[test]
fn test_play_single_card() {
    let game = fresh(42);
    let card = game.human.hand.get(0).cloned().expect("opening hand");

    let (game, result) = api::apply_command(&game, Command::PlayCard(0));

    assert!(result.is_ok());
    assert_eq!(game.human.hand.len(), 4);
    assert_eq!(game.human.active.len(), 1);
    assert_eq!(game.human.money, card.money());
    assert_eq!(game.human.attack, card.attack());
}

/// Buying from the row spends money and refills from the market deck.
#[test]
fn test_buy_refills_row() {
    let mut game = fresh(42);
    game.human.money = 10;
    let mut row: Vec<_> = game.market.active.iter().cloned().collect();
    row[0] = catalog::swordsman();
    game.market.active = Zone::from_cards(row);

    let (game, result) = api::apply_command(&game, Command::BuyCard(0));

    assert!(result.is_ok());
    assert_eq!(game.human.money, 7);
    assert_eq!(game.human.discard.len(), 1);
    assert_eq!(game.human.discard.top(), Some(&catalog::swordsman()));
    assert_eq!(game.market.active.len(), 5);
    assert_eq!(game.market.deck.len(), 3);
    assert_eq!(game.market.active_size, 5);
}

/// Buying with an empty market deck shrinks the row for good.
#[test]
fn test_buy_shrinks_row_when_deck_empty() {
    let mut game = fresh(42);
    game.human.money = 10;
    game.market.deck = Zone::new();

    let (game, result) = api::apply_command(&game, Command::BuyCard(0));

    assert!(result.is_ok());
    assert_eq!(game.market.active.len(), 4);
    assert_eq!(game.market.active_size, 4);

    let status = result.expect("buy succeeded");
    assert_eq!(status.central.available_cards.len(), 4);
    assert_eq!(status.central.supplement_card[0].card_index, 4);
}

/// A purchase the player cannot afford is rejected and nothing changes.
#[test]
fn test_insufficient_money_leaves_state_unchanged() {
    let mut game = fresh(42);
    game.human.money = 1;
    let mut row: Vec<_> = game.market.active.iter().cloned().collect();
    row[0] = catalog::crossbowman();
    game.market.active = Zone::from_cards(row);

    let (next, result) = api::apply_command(&game, Command::BuyCard(0));

    match result {
        Err(err @ EngineError::InsufficientMoney { .. }) => {
            let message = err.to_string();
            assert!(message.contains("costs 3"));
            assert!(message.contains("only have 1"));
        }
        other => panic!("expected InsufficientMoney, got {other:?}"),
    }
    assert_eq!(next, game);
}

/// Attack drains the accumulator and can end the game.
#[test]
fn test_attack_wins_game() {
    let mut game = fresh(42);
    game.human.attack = 1000;

    let (game, result) = api::apply_command(&game, Command::Attack);

    assert!(result.is_ok());
    assert_eq!(game.opponent.health, -970);
    assert_eq!(game.human.attack, 0);
    assert_eq!(api::evaluate_end(&game), Verdict::HumanWins);
    assert_eq!(game.phase(), TurnPhase::GameOver(Verdict::HumanWins));

    let (after, result) = api::apply_command(&game, Command::PlayAll);
    assert_eq!(
        result,
        Err(EngineError::GameOver {
            verdict: Verdict::HumanWins
        })
    );
    assert_eq!(after, game);
}

/// End turn runs the opponent: it attacks with its whole hand and, with no
/// money, buys nothing.
#[test]
fn test_end_turn_runs_opponent() {
    let mut game = fresh(42);
    game.opponent.hand = Zone::from_cards(vec![catalog::squire(); 5]);
    let market_before = game.market.clone();

    let (game, result) = api::apply_command(&game, Command::EndTurn);

    assert!(result.is_ok());
    assert_eq!(game.human.health, 25);
    assert_eq!(game.opponent.hand.len(), 5);
    assert!(game.opponent.active.is_empty());
    assert_eq!(game.opponent.discard.len(), 5);
    assert!(game.opponent.discard.iter().all(|c| *c == catalog::squire()));
    assert_eq!(game.market, market_before);
    assert_eq!(game.turn, 1);
}

/// The supplement is bought through the index just past the row.
#[test]
fn test_supplement_purchase() {
    let mut game = fresh(42);
    game.human.money = 4;

    let (game, result) = api::apply_command(&game, Command::BuyCard(5));
    assert!(result.is_ok());
    assert_eq!(game.human.money, 2);
    assert!(game.market.supplement.is_empty());
    assert_eq!(game.market.active.len(), 5);

    let (next, result) = api::apply_command(&game, Command::BuyCard(5));
    assert_eq!(result, Err(EngineError::InsufficientSupplement));
    assert_eq!(next, game);
}

/// Indices past the supplement slot are invalid.
#[test]
fn test_out_of_range_buy_index() {
    let mut game = fresh(42);
    game.human.money = 50;

    let (next, result) = api::apply_command(&game, Command::BuyCard(6));

    assert_eq!(result, Err(EngineError::invalid_index(6)));
    assert_eq!(next, game);
}

/// Unknown actions and bad indices are rejected at the boundary.
#[test]
fn test_request_parsing_errors() {
    let game = fresh(42);

    let (next, result) = api::play_turn(&game, "dance", None);
    assert!(matches!(result, Err(EngineError::InvalidAction { .. })));
    assert_eq!(next, game);

    let (_, result) = api::play_turn(&game, "C", None);
    assert!(matches!(result, Err(EngineError::InvalidCardIndex { .. })));

    let (_, result) = api::play_turn(&game, "B", Some(&serde_json::json!("two")));
    assert!(matches!(result, Err(EngineError::InvalidCardIndex { .. })));

    let (_, result) = api::play_turn(&game, "buy_card", Some(&serde_json::json!(-1)));
    assert!(matches!(result, Err(EngineError::InvalidCardIndex { .. })));
}

/// A full human turn through letter codes.
#[test]
fn test_full_turn_with_letter_codes() {
    let game = fresh(9);

    let (game, result) = api::play_turn(&game, "P", None);
    let status = result.expect("play all");
    assert!(status.player.hand.is_empty());
    assert_eq!(status.player.active.len(), 5);
    assert_eq!(status.player.values.money, game.human.money);

    let (game, result) = api::play_turn(&game, "A", None);
    assert!(result.is_ok());
    assert_eq!(game.human.attack, 0);

    let (game, result) = api::play_turn(&game, "E", None);
    assert!(result.is_ok());
    assert_eq!(game.human.hand.len(), 5);
    assert_eq!(game.card_count(), 30);
}

/// Both players at or below zero: the opponent is credited with the win.
#[test]
fn test_simultaneous_knockout() {
    let mut game = fresh(42);
    game.human.health = 0;
    game.opponent.health = 0;

    assert_eq!(api::evaluate_end(&game), Verdict::OpponentWins);
}

/// The acquisitive opponent is configured through its parsed token.
#[test]
fn test_personality_from_token() {
    let personality = Personality::parse("Q").expect("valid token");
    let game = api::new_game(personality, 1).expect("standard game should build");

    assert_eq!(game.personality, Personality::Acquisitive);
    assert!(Personality::parse("x").is_err());
}

/// Card values whose totals do not fit the accumulators are rejected
/// instead of crashing, even when they arrive through a snapshot.
#[test]
fn test_accumulator_overflow_is_rejected() {
    let mut game = fresh(42);
    game.human.hand = Zone::from_cards(vec![
        Card::new("Hoard", 0, 0, u32::MAX),
        Card::new("Hoard", 0, 0, 1),
    ]);
    game.opponent.hand = Zone::from_cards(vec![
        Card::new("Siege", 0, u32::MAX, 0),
        Card::new("Siege", 0, 1, 0),
    ]);
    let game = Game::from_json(&game.to_json().unwrap()).unwrap();

    let (next, result) = api::apply_command(&game, Command::PlayAll);
    assert_eq!(result, Err(EngineError::Overflow { stat: "money" }));
    assert_eq!(next, game);

    let (next, result) = api::apply_command(&game, Command::EndTurn);
    assert_eq!(result, Err(EngineError::Overflow { stat: "attack" }));
    assert_eq!(next, game);

    // A single oversized card on its own still plays
    let (next, result) = api::apply_command(&game, Command::PlayCard(0));
    assert!(result.is_ok());
    assert_eq!(next.human.money, u32::MAX);
}
