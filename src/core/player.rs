//! Players and seats.
//!
//! ## Seat
//!
//! The two positions at the table: the human and the scripted opponent.
//!
//! ## Player
//!
//! Health, the money and attack accumulators, and the four zones a player
//! owns. Both seats use the same type and the same rules.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{EngineError, EngineResult};
use super::rng::Shuffler;
use crate::cards::Card;
use crate::zones::Zone;

/// One of the two positions at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    Human,
    Opponent,
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "Player"),
            Self::Opponent => write!(f, "Computer"),
        }
    }
}

/// Per-player state.
///
/// `health` may go negative. `money` and `attack` are accumulators: playing
/// cards adds to them, and only buying (money) or attacking (attack) takes
/// them back down. Drawing and ending a turn never reset them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerFields")]
pub struct Player {
    pub health: i32,

    /// Draw pile (top = end).
    pub deck: Zone,

    pub hand: Zone,

    /// Cards played this turn.
    pub active: Zone,

    pub discard: Zone,

    /// Cards drawn after each turn.
    pub hand_size: u32,

    pub money: u32,

    pub attack: u32,
}

/// Unvalidated wire form of a player.
#[derive(Deserialize)]
struct PlayerFields {
    health: i32,
    deck: Zone,
    hand: Zone,
    active: Zone,
    discard: Zone,
    hand_size: u32,
    money: u32,
    attack: u32,
}

impl TryFrom<PlayerFields> for Player {
    type Error = EngineError;

    fn try_from(fields: PlayerFields) -> Result<Self, Self::Error> {
        if fields.hand_size == 0 {
            return Err(EngineError::Snapshot("hand size must be positive".to_string()));
        }
        Ok(Self {
            health: fields.health,
            deck: fields.deck,
            hand: fields.hand,
            active: fields.active,
            discard: fields.discard,
            hand_size: fields.hand_size,
            money: fields.money,
            attack: fields.attack,
        })
    }
}

impl Player {
    /// Create a player holding `deck` as their draw pile.
    ///
    /// Panics if `hand_size` is zero.
    #[must_use]
    pub fn new(health: i32, hand_size: u32, deck: Zone) -> Self {
        assert!(hand_size > 0, "Hand size must be positive");

        Self {
            health,
            deck,
            hand: Zone::new(),
            active: Zone::new(),
            discard: Zone::new(),
            hand_size,
            money: 0,
            attack: 0,
        }
    }

    /// Draw one card into the hand.
    ///
    /// An empty deck is replaced by the shuffled discard pile first (the
    /// empty deck becomes the new discard pile). Fails only when both are
    /// empty.
    pub fn draw_card<S: Shuffler>(&mut self, shuffler: &mut S) -> EngineResult<()> {
        if self.deck.is_empty() {
            if self.discard.is_empty() {
                return Err(EngineError::EmptyZone { zone: "deck" });
            }
            debug!("Reshuffling {} discarded cards into the deck", self.discard.len());
            self.discard.shuffle(shuffler);
            std::mem::swap(&mut self.deck, &mut self.discard);
        }

        let card = self.deck.draw().ok_or(EngineError::EmptyZone { zone: "deck" })?;
        self.hand.push(card);
        Ok(())
    }

    /// Draw `hand_size` cards.
    pub fn draw_hand<S: Shuffler>(&mut self, shuffler: &mut S) -> EngineResult<()> {
        for _ in 0..self.hand_size {
            self.draw_card(shuffler)?;
        }
        Ok(())
    }

    /// Accumulator values after adding `money` and `attack`.
    ///
    /// `None` stands for a total that already overflowed.
    fn accumulated(&self, money: Option<u32>, attack: Option<u32>) -> EngineResult<(u32, u32)> {
        let money = money
            .and_then(|m| self.money.checked_add(m))
            .ok_or(EngineError::Overflow { stat: "money" })?;
        let attack = attack
            .and_then(|a| self.attack.checked_add(a))
            .ok_or(EngineError::Overflow { stat: "attack" })?;
        Ok((money, attack))
    }

    /// Play the card at `index` from hand, adding its values to the accumulators.
    ///
    /// The player is unchanged on error.
    pub fn play_card(&mut self, index: usize) -> EngineResult<Card> {
        let card = self.hand.get(index).ok_or_else(|| EngineError::invalid_index(index))?;
        let (money, attack) = self.accumulated(Some(card.money()), Some(card.attack()))?;
        let card = self.hand.take(index).ok_or_else(|| EngineError::invalid_index(index))?;

        self.money = money;
        self.attack = attack;
        self.active.push(card.clone());
        Ok(card)
    }

    /// Play every card in hand, in hand order.
    ///
    /// Returns the number of cards played. The player is unchanged on error.
    pub fn play_all(&mut self) -> EngineResult<usize> {
        let (money, attack) = self.accumulated(self.hand.total_money(), self.hand.total_attack())?;

        let played = self.hand.len();
        self.money = money;
        self.attack = attack;
        for card in std::mem::take(&mut self.hand).iter() {
            self.active.push(card.clone());
        }
        Ok(played)
    }

    /// Reduce health by `amount`. Health is not clamped at zero.
    pub fn take_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(amount);
    }

    /// Put a newly acquired card on the discard pile.
    pub fn gain(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// End-of-turn cleanup: hand and active cards to discard, then draw a
    /// fresh hand.
    pub fn cleanup<S: Shuffler>(&mut self, shuffler: &mut S) -> EngineResult<()> {
        self.hand.move_all_to(&mut self.discard);
        self.active.move_all_to(&mut self.discard);
        self.draw_hand(shuffler)
    }

    /// Cards held across all four zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hand.len() + self.active.len() + self.discard.len()
    }
}
