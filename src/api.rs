//! The engine's external surface.
//!
//! Callers hold a `Game` snapshot (usually serialized between requests) and
//! pass it in by reference. Every command returns the next snapshot together
//! with its outcome. A rejected command returns the input snapshot unchanged,
//! including its RNG position.
//!
//! ```
//! use market_duel::api;
//! use market_duel::core::{Command, Personality};
//! use market_duel::rules::Verdict;
//!
//! let game = api::new_game(Personality::Aggressive, 42).unwrap();
//!
//! let (game, result) = api::apply_command(&game, Command::PlayAll);
//! let status = result.unwrap();
//! assert!(status.player.hand.is_empty());
//!
//! let (game, result) = api::apply_command(&game, Command::BuyCard(99));
//! assert!(result.is_err());
//! assert_eq!(api::evaluate_end(&game), Verdict::InProgress);
//! ```

use serde_json::Value;
use tracing::{info, warn};

use crate::core::{
    Command, EngineError, EngineResult, Game, GameBuilder, GameRng, Personality, RulesConfig,
    Shuffler,
};
use crate::rules::{self, DuelRules, RulesEngine, StatusView, Verdict};

/// Outcome of one command: the status view on success.
pub type CommandResult = Result<StatusView, EngineError>;

/// Create and deal a standard game.
pub fn new_game(personality: Personality, seed: u64) -> EngineResult<Game> {
    new_game_with_config(personality, RulesConfig::default(), seed)
}

/// Create and deal a game from custom rules.
pub fn new_game_with_config(
    personality: Personality,
    config: RulesConfig,
    seed: u64,
) -> EngineResult<Game> {
    let game = GameBuilder::new()
        .personality(personality)
        .config(config)
        .build(seed)?;
    info!("New game created with seed {}", seed);
    Ok(game)
}

/// Apply one command using the snapshot's own RNG.
pub fn apply_command(game: &Game, command: Command) -> (Game, CommandResult) {
    let mut rng = GameRng::from_state(&game.rng);
    let (mut next, result) = apply_command_with(game, command, &mut rng);
    if result.is_ok() {
        next.rng = rng.state();
    }
    (next, result)
}

/// Apply one command with a caller-supplied shuffler.
///
/// The snapshot's RNG state is not advanced; use `apply_command` for that.
pub fn apply_command_with<S: Shuffler>(
    game: &Game,
    command: Command,
    shuffler: &mut S,
) -> (Game, CommandResult) {
    let mut next = game.clone();
    match DuelRules::new().apply_command(&mut next, &command, shuffler) {
        Ok(()) => {
            let status = rules::project_status(&next);
            (next, Ok(status))
        }
        Err(err) => {
            warn!("Rejected {}: {}", command, err);
            (game.clone(), Err(err))
        }
    }
}

/// Parse a loosely-typed request and apply it.
///
/// `action` may be a letter code or long name; `card_index` may be a JSON
/// number or string.
pub fn play_turn(game: &Game, action: &str, card_index: Option<&Value>) -> (Game, CommandResult) {
    match Command::from_request(action, card_index) {
        Ok(command) => apply_command(game, command),
        Err(err) => {
            warn!("Rejected request {:?}: {}", action, err);
            (game.clone(), Err(err))
        }
    }
}

/// Read-only status view.
#[must_use]
pub fn project_status(game: &Game) -> StatusView {
    rules::project_status(game)
}

/// Derive the verdict.
#[must_use]
pub fn evaluate_end(game: &Game) -> Verdict {
    rules::evaluate_end(game)
}
