//! The standard card set.
//!
//! Market cards are bought from the central row; Serfs and Squires make up
//! each player's starter deck; the Levy is the single supplement card.

use super::card::Card;

pub fn thug() -> Card {
    Card::new("Thug", 1, 2, 0)
}

pub fn crossbowman() -> Card {
    Card::new("Crossbowman", 3, 4, 0)
}

pub fn baker() -> Card {
    Card::new("Baker", 2, 0, 3)
}

pub fn knight() -> Card {
    Card::new("Knight", 5, 6, 0)
}

pub fn catapault() -> Card {
    Card::new("Catapault", 6, 7, 0)
}

pub fn swordsman() -> Card {
    Card::new("Swordsman", 3, 4, 0)
}

pub fn thief() -> Card {
    Card::new("Thief", 1, 1, 1)
}

pub fn archer() -> Card {
    Card::new("Archer", 2, 3, 0)
}

pub fn tailor() -> Card {
    Card::new("Tailor", 3, 0, 4)
}

pub fn levy() -> Card {
    Card::new("Levy", 2, 1, 2)
}

pub fn serf() -> Card {
    Card::new("Serf", 0, 0, 1)
}

pub fn squire() -> Card {
    Card::new("Squire", 0, 1, 0)
}

/// The nine cards of the market deck, unshuffled.
#[must_use]
pub fn market_deck() -> Vec<Card> {
    vec![
        thug(),
        crossbowman(),
        baker(),
        knight(),
        catapault(),
        swordsman(),
        thief(),
        archer(),
        tailor(),
    ]
}

/// Seven Serfs followed by three Squires, unshuffled.
#[must_use]
pub fn starter_deck() -> Vec<Card> {
    std::iter::repeat_with(serf)
        .take(7)
        .chain(std::iter::repeat_with(squire).take(3))
        .collect()
}
