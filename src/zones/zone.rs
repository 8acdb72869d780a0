//! Ordered card collections.
//!
//! Every pile in the game (decks, hands, active cards, discard piles, the
//! market row, the supplement) is a `Zone`. For deck-like zones the top is
//! the end of the sequence: `push` places a card on top and `draw` takes it
//! back off.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Shuffler;

/// An ordered sequence of cards.
///
/// Backed by `im::Vector` so cloning a whole game snapshot is cheap.
///
/// ## Usage
///
/// ```
/// use market_duel::cards::catalog;
/// use market_duel::zones::Zone;
///
/// let mut deck = Zone::from_cards(vec![catalog::serf(), catalog::squire()]);
///
/// // Draw from the top (the last card pushed)
/// assert_eq!(deck.draw(), Some(catalog::squire()));
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zone {
    cards: Vector<Card>,
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a zone from cards listed bottom to top.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top (display order for hands and rows).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// The card `draw` would return.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove and return the card at `index`, shifting later cards down.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Move every card onto `dest`, taking from the top of this zone first.
    ///
    /// Returns the number of cards moved.
    pub fn move_all_to(&mut self, dest: &mut Zone) -> usize {
        let mut moved = 0;
        while let Some(card) = self.draw() {
            dest.push(card);
            moved += 1;
        }
        moved
    }

    /// Shuffle the zone in place.
    pub fn shuffle<S: Shuffler>(&mut self, shuffler: &mut S) {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        shuffler.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Sum of money over every card in the zone, or `None` if it overflows.
    #[must_use]
    pub fn total_money(&self) -> Option<u32> {
        self.cards
            .iter()
            .try_fold(0u32, |sum, card| sum.checked_add(card.money()))
    }

    /// Sum of attack over every card in the zone, or `None` if it overflows.
    #[must_use]
    pub fn total_attack(&self) -> Option<u32> {
        self.cards
            .iter()
            .try_fold(0u32, |sum, card| sum.checked_add(card.attack()))
    }
}

impl FromIterator<Card> for Zone {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}
