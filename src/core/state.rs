//! Game state: the full snapshot passed between the engine and its caller.
//!
//! ## Game
//!
//! Complete game state:
//! - Opponent personality
//! - Shared market
//! - Both players (health, accumulators, zones)
//! - Completed turn count
//! - RNG position, so shuffles continue deterministically after a reload
//!
//! The caller does not keep a game resident between commands. It stores a
//! serialized snapshot (`to_json` or `to_bytes`), restores it for the next
//! command and stores the result. Round trips are exact.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::{Personality, RulesConfig};
use super::error::EngineResult;
use super::player::{Player, Seat};
use super::rng::{GameRng, GameRngState, Shuffler};
use crate::rules::TurnPhase;
use crate::zones::{Market, Zone};

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// How the scripted opponent ranks equal-cost purchases.
    pub personality: Personality,

    /// Shared market.
    pub market: Market,

    /// The human player.
    pub human: Player,

    /// The scripted opponent.
    pub opponent: Player,

    /// Completed rounds (one human turn plus one opponent turn each).
    pub turn: u32,

    /// RNG position for future shuffles.
    pub rng: GameRngState,
}

impl Game {
    /// Get a player by seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Opponent => &self.opponent,
        }
    }

    /// Deal opening hands: players draw alternately, human first.
    pub fn start<S: Shuffler>(&mut self, shuffler: &mut S) -> EngineResult<()> {
        for _ in 0..self.human.hand_size.max(self.opponent.hand_size) {
            if self.human.hand.len() < self.human.hand_size as usize {
                self.human.draw_card(shuffler)?;
            }
            if self.opponent.hand.len() < self.opponent.hand_size as usize {
                self.opponent.draw_card(shuffler)?;
            }
        }
        info!(
            "Game started against {} opponent, market row {:?}",
            self.personality,
            self.market.active.iter().map(|c| c.name()).collect::<Vec<_>>()
        );
        Ok(())
    }

    /// Current turn phase, derived from the verdict.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        crate::rules::phase(self)
    }

    /// Total cards across the market and both players.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.market.card_count() + self.human.card_count() + self.opponent.card_count()
    }

    // === Snapshots ===

    /// Encode as a JSON snapshot.
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON snapshot.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as a compact binary snapshot.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Builder for creating a new `Game`.
///
/// ```
/// use market_duel::core::{GameBuilder, Personality};
///
/// let game = GameBuilder::new()
///     .personality(Personality::Acquisitive)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.human.hand.len(), 5);
/// assert_eq!(game.market.active.len(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    personality: Personality,
    config: RulesConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn personality(mut self, personality: Personality) -> Self {
        self.personality = personality;
        self
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Build and deal a game shuffled by a `GameRng` seeded with `seed`.
    pub fn build(self, seed: u64) -> EngineResult<Game> {
        let mut rng = GameRng::new(seed);
        let mut game = self.build_with(&mut rng)?;
        game.rng = rng.state();
        Ok(game)
    }

    /// Build and deal a game using any shuffler.
    ///
    /// The snapshot's RNG state is seeded with 0; use `build` when the game
    /// will continue through `GameRng`.
    pub fn build_with<S: Shuffler>(self, shuffler: &mut S) -> EngineResult<Game> {
        let config = self.config;
        config.validate()?;

        let mut market_deck = Zone::from_cards(config.market_cards.iter().cloned());
        market_deck.shuffle(shuffler);
        let market = Market::new(
            market_deck,
            Zone::from_cards(config.supplement.iter().cloned()),
            config.market_row_size,
        );

        let mut human_deck = Zone::from_cards(config.starter_deck.iter().cloned());
        human_deck.shuffle(shuffler);
        let mut opponent_deck = Zone::from_cards(config.starter_deck.iter().cloned());
        opponent_deck.shuffle(shuffler);

        let mut game = Game {
            personality: self.personality,
            market,
            human: Player::new(config.starting_health, config.hand_size, human_deck),
            opponent: Player::new(config.starting_health, config.hand_size, opponent_deck),
            turn: 0,
            rng: GameRng::new(0).state(),
        };
        game.start(shuffler)?;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog;
    use crate::core::EngineError;

    #[test]
    fn test_new_game_layout() {
        let game = GameBuilder::new().build(42).unwrap();

        assert_eq!(game.personality, Personality::Aggressive);
        assert_eq!(game.market.deck.len(), 4);
        assert_eq!(game.market.active.len(), 5);
        assert_eq!(game.market.active_size, 5);
        assert_eq!(game.market.supplement.len(), 1);
        assert_eq!(game.human.deck.len(), 5);
        assert_eq!(game.human.hand.len(), 5);
        assert_eq!(game.opponent.deck.len(), 5);
        assert_eq!(game.opponent.hand.len(), 5);
        assert_eq!(game.human.health, 30);
        assert_eq!(game.turn, 0);
        assert_eq!(game.card_count(), 30);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = GameBuilder::new().build(7).unwrap();
        let b = GameBuilder::new().build(7).unwrap();
        let c = GameBuilder::new().build(8).unwrap();

        assert_eq!(a, b);
        assert_ne!(a.market, c.market);
    }

    #[test]
    fn test_rng_state_advances() {
        let game = GameBuilder::new().build(7).unwrap();
        assert_eq!(game.rng.seed, 7);
        assert!(game.rng.word_pos > 0);
    }

    #[test]
    fn test_build_rejects_bad_config() {
        let result = GameBuilder::new()
            .config(RulesConfig::new().with_starter_deck(vec![catalog::serf()]))
            .build(1);

        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_player_by_seat() {
        let mut game = GameBuilder::new().build(3).unwrap();
        game.opponent.health = 12;

        assert_eq!(game.player(Seat::Opponent).health, 12);
        assert_eq!(game.player(Seat::Human).health, 30);
    }

    #[test]
    fn test_json_round_trip() {
        let game = GameBuilder::new().personality(Personality::Acquisitive).build(11).unwrap();

        let json = game.to_json().unwrap();
        let restored = Game::from_json(&json).unwrap();

        assert_eq!(game, restored);
    }

    #[test]
    fn test_bytes_round_trip() {
        let game = GameBuilder::new().build(11).unwrap();

        let bytes = game.to_bytes().unwrap();
        let restored = Game::from_bytes(&bytes).unwrap();

        assert_eq!(game, restored);
    }

    #[test]
    fn test_bad_snapshot() {
        assert!(matches!(Game::from_json("{}"), Err(EngineError::Snapshot(_))));
        assert!(matches!(Game::from_bytes(&[1, 2, 3]), Err(EngineError::Snapshot(_))));
    }
}
