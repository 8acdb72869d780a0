//! Card records.
//!
//! A `Card` is an immutable `{name, cost, attack, money}` record. Cards are
//! fungible by value: two Serfs compare equal, but each one occupies its own
//! slot in whatever zone holds it.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

/// A tradeable card.
///
/// Fields are private so a card cannot change after creation. Negative
/// values are ruled out by the unsigned types; an empty name is rejected
/// by the constructors and by deserialization.
///
/// ## Example
///
/// ```
/// use market_duel::cards::Card;
///
/// let knight = Card::new("Knight", 5, 6, 0);
///
/// assert_eq!(knight.cost(), 5);
/// assert_eq!(knight.attack(), 6);
/// assert!(Card::try_new("", 1, 1, 1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    name: String,
    cost: u32,
    attack: u32,
    money: u32,
}

/// Unvalidated wire form of a card.
#[derive(Deserialize)]
struct CardFields {
    name: String,
    cost: u32,
    attack: u32,
    money: u32,
}

impl TryFrom<CardFields> for Card {
    type Error = EngineError;

    fn try_from(fields: CardFields) -> Result<Self, Self::Error> {
        Card::try_new(fields.name, fields.cost, fields.attack, fields.money)
    }
}

impl Card {
    /// Create a card, rejecting an empty name.
    pub fn try_new(name: impl Into<String>, cost: u32, attack: u32, money: u32) -> EngineResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::InvalidCard {
                reason: "card name must not be empty".to_string(),
            });
        }
        Ok(Self {
            name,
            cost,
            attack,
            money,
        })
    }

    /// Create a card from known-good values.
    ///
    /// Panics if the name is empty.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u32, attack: u32, money: u32) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "Card name must not be empty");
        Self {
            name,
            cost,
            attack,
            money,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price to buy this card from the market.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Attack added when the card is played.
    #[must_use]
    pub fn attack(&self) -> u32 {
        self.attack
    }

    /// Money added when the card is played.
    #[must_use]
    pub fn money(&self) -> u32 {
        self.money
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name {} costing {} with attack {} and money {}",
            self.name, self.cost, self.attack, self.money
        )
    }
}
