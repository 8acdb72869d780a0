//! The shared market.
//!
//! The market owns the central deck, the active row of purchasable cards
//! and the supplement pile. Buying from the row triggers the attrition
//! rule: the row is refilled from the central deck while it lasts, and
//! once the deck is gone every purchase permanently shrinks `active_size`.
//! The market is exhausted when `active_size` reaches zero.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::zone::Zone;
use crate::cards::Card;
use crate::core::{EngineError, EngineResult};

/// A purchasable position in the market, resolved from a raw index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketSlot {
    /// A card in the active row.
    Row(usize),
    /// The top of the supplement pile, addressed by index `active.len()`.
    Supplement,
}

/// Shared market state.
///
/// Invariant: `active.len() <= active_size`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MarketFields")]
pub struct Market {
    /// Face-down central deck that refills the row.
    pub deck: Zone,

    /// The row of purchasable cards.
    pub active: Zone,

    /// Maximum row width. Shrinks once the deck runs out.
    pub active_size: u32,

    /// Special cards bought through the slot just past the row.
    pub supplement: Zone,
}

/// Unvalidated wire form of a market.
#[derive(Deserialize)]
struct MarketFields {
    deck: Zone,
    active: Zone,
    active_size: u32,
    supplement: Zone,
}

impl TryFrom<MarketFields> for Market {
    type Error = EngineError;

    fn try_from(fields: MarketFields) -> Result<Self, Self::Error> {
        if fields.active.len() > fields.active_size as usize {
            return Err(EngineError::Snapshot(format!(
                "market row holds {} cards but has only {} slots",
                fields.active.len(),
                fields.active_size
            )));
        }
        Ok(Self {
            deck: fields.deck,
            active: fields.active,
            active_size: fields.active_size,
            supplement: fields.supplement,
        })
    }
}

impl Market {
    /// Create a market from an already-shuffled deck and deal the row.
    ///
    /// Deals `row_size` cards (or as many as the deck holds) from the top of
    /// the deck onto the row.
    #[must_use]
    pub fn new(mut deck: Zone, supplement: Zone, row_size: u32) -> Self {
        let mut active = Zone::new();
        for _ in 0..row_size {
            match deck.draw() {
                Some(card) => active.push(card),
                None => break,
            }
        }

        Self {
            deck,
            active,
            active_size: row_size,
            supplement,
        }
    }

    /// Index that addresses the supplement for the current row.
    ///
    /// Not stable across purchases: it changes whenever the row shrinks.
    #[must_use]
    pub fn supplement_index(&self) -> usize {
        self.active.len()
    }

    /// Resolve a raw index into a market slot.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<MarketSlot> {
        match index.cmp(&self.active.len()) {
            std::cmp::Ordering::Less => Some(MarketSlot::Row(index)),
            std::cmp::Ordering::Equal => Some(MarketSlot::Supplement),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// The card currently offered at a slot.
    pub fn offered(&self, slot: MarketSlot) -> EngineResult<&Card> {
        match slot {
            MarketSlot::Row(i) => self.active.get(i).ok_or_else(|| EngineError::invalid_index(i)),
            MarketSlot::Supplement => self.supplement.top().ok_or(EngineError::InsufficientSupplement),
        }
    }

    /// Buy the card at `slot` with `budget` money available.
    ///
    /// Validates before mutating: on error the market is unchanged. On
    /// success the card is removed (refilling or shrinking the row for row
    /// purchases) and returned; the caller pays `card.cost()`.
    pub fn buy(&mut self, slot: MarketSlot, budget: u32) -> EngineResult<Card> {
        let offered = self.offered(slot)?;
        if offered.cost() > budget {
            return Err(EngineError::InsufficientMoney {
                card: offered.name().to_string(),
                cost: offered.cost(),
                available: budget,
            });
        }

        match slot {
            MarketSlot::Row(i) => {
                let card = self.active.take(i).ok_or_else(|| EngineError::invalid_index(i))?;
                info!("Card bought {}", card);
                self.refill_or_shrink();
                Ok(card)
            }
            MarketSlot::Supplement => {
                let card = self.supplement.draw().ok_or(EngineError::InsufficientSupplement)?;
                info!("Supplement bought {}", card);
                Ok(card)
            }
        }
    }

    /// Replace a card bought from the row.
    ///
    /// Draws a replacement from the central deck if one is left; otherwise
    /// the row permanently loses a slot.
    pub fn refill_or_shrink(&mut self) {
        match self.deck.draw() {
            Some(card) => {
                debug!("Market row refilled with {}", card.name());
                self.active.push(card);
            }
            None => {
                self.active_size = self.active_size.saturating_sub(1);
                info!("Market deck empty, row shrinks to {}", self.active_size);
            }
        }
    }

    /// No row slots remain: the game ends on health.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.active_size == 0
    }

    /// Cards held anywhere in the market.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.active.len() + self.supplement.len()
    }
}
