//! Game configuration types.
//!
//! - `Personality`: How the scripted opponent breaks buying ties
//! - `RulesConfig`: Starting values and card lists for a new game
//!
//! The defaults reproduce the standard game: 30 health, 5-card hands,
//! a 5-card market row over a 9-card market deck, one Levy supplement and
//! a starter deck of 7 Serfs and 3 Squires.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use crate::cards::{catalog, Card};

/// Opponent personality.
///
/// Both personalities buy the most expensive affordable card; they differ
/// only in how equal-cost candidates are ranked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    /// Prefers the higher-attack card on cost ties.
    #[default]
    Aggressive,
    /// Prefers the higher-money card on cost ties.
    Acquisitive,
}

impl Personality {
    /// Parse a personality token from the outside world.
    ///
    /// Accepts the single-letter codes (`A`, `Q`) and the long names in
    /// either case, including the historical "acquisative" spelling.
    pub fn parse(token: &str) -> EngineResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "a" | "aggressive" => Ok(Self::Aggressive),
            "q" | "acquisitive" | "acquisative" => Ok(Self::Acquisitive),
            _ => Err(EngineError::invalid_action(token)),
        }
    }

    /// Tie-break score for a card of the same cost.
    #[must_use]
    pub fn preference(self, card: &Card) -> u32 {
        if self.is_aggressive() {
            card.attack()
        } else {
            card.money()
        }
    }

    #[must_use]
    pub fn is_aggressive(self) -> bool {
        self == Self::Aggressive
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aggressive => write!(f, "aggressive"),
            Self::Acquisitive => write!(f, "acquisitive"),
        }
    }
}

/// Complete rules configuration for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Health both players start with.
    pub starting_health: i32,

    /// Cards drawn at the start of the game and after every turn.
    pub hand_size: u32,

    /// Width of the market row dealt at setup (the initial `active_size`).
    pub market_row_size: u32,

    /// Cards shuffled into the market deck.
    pub market_cards: Vec<Card>,

    /// Cards in the supplement pile.
    pub supplement: Vec<Card>,

    /// Full starter deck, given to each player.
    pub starter_deck: Vec<Card>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_health: 30,
            hand_size: 5,
            market_row_size: 5,
            market_cards: catalog::market_deck(),
            supplement: vec![catalog::levy()],
            starter_deck: catalog::starter_deck(),
        }
    }
}

impl RulesConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: u32) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_market_row_size(mut self, size: u32) -> Self {
        self.market_row_size = size;
        self
    }

    #[must_use]
    pub fn with_market_cards(mut self, cards: Vec<Card>) -> Self {
        self.market_cards = cards;
        self
    }

    #[must_use]
    pub fn with_supplement(mut self, cards: Vec<Card>) -> Self {
        self.supplement = cards;
        self
    }

    #[must_use]
    pub fn with_starter_deck(mut self, cards: Vec<Card>) -> Self {
        self.starter_deck = cards;
        self
    }

    /// Check that a game can be dealt from this configuration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.starting_health <= 0 {
            return Err(EngineError::invalid_config("starting health must be positive"));
        }
        if self.hand_size == 0 {
            return Err(EngineError::invalid_config("hand size must be positive"));
        }
        if self.starter_deck.len() < self.hand_size as usize {
            return Err(EngineError::invalid_config(format!(
                "starter deck has {} cards but hand size is {}",
                self.starter_deck.len(),
                self.hand_size
            )));
        }
        if self.market_cards.len() < self.market_row_size as usize {
            return Err(EngineError::invalid_config(format!(
                "market deck has {} cards but the row needs {}",
                self.market_cards.len(),
                self.market_row_size
            )));
        }
        Ok(())
    }
}
