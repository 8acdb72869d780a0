//! Read-only status projection.
//!
//! `project_status` builds the view a UI needs after every command: both
//! players' health, hands (with indices), active cards and accumulators,
//! the market row (with indices) and the supplement (at index
//! `row length`), plus the fixed list of command shapes the human may send.

use serde::Serialize;

use crate::cards::Card;
use crate::core::{Game, Player, Seat};
use crate::zones::Market;

/// A card together with the index a command would use to address it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexedCard {
    pub card_index: usize,
    #[serde(flatten)]
    pub card: Card,
}

/// Accumulator values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Values {
    pub money: u32,
    pub attack: u32,
}

/// One player's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub health: i32,
    pub hand: Vec<IndexedCard>,
    pub active: Vec<Card>,
    pub values: Values,
}

/// The market's purchasable cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarketView {
    pub available_cards: Vec<IndexedCard>,
    /// Empty once the supplement is bought.
    pub supplement_card: Vec<IndexedCard>,
}

/// The shape of a command the human may send.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ActionShape {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_index: Option<&'static str>,
}

/// Full status view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub player: PlayerView,
    pub computer: PlayerView,
    pub central: MarketView,
    pub next_action: Vec<ActionShape>,
}

/// The command shapes listed in every status view.
pub const NEXT_ACTIONS: [ActionShape; 5] = [
    ActionShape { action: "play_all", card_index: None },
    ActionShape { action: "play_that_card", card_index: Some("[0-n]") },
    ActionShape { action: "buy_card", card_index: Some("[0-n]") },
    ActionShape { action: "attack", card_index: None },
    ActionShape { action: "end_turn", card_index: None },
];

fn indexed<'a>(cards: impl Iterator<Item = &'a Card>, offset: usize) -> Vec<IndexedCard> {
    cards
        .enumerate()
        .map(|(i, card)| IndexedCard {
            card_index: offset + i,
            card: card.clone(),
        })
        .collect()
}

fn player_view(player: &Player) -> PlayerView {
    PlayerView {
        health: player.health,
        hand: indexed(player.hand.iter(), 0),
        active: player.active.iter().cloned().collect(),
        values: Values {
            money: player.money,
            attack: player.attack,
        },
    }
}

fn market_view(market: &Market) -> MarketView {
    MarketView {
        available_cards: indexed(market.active.iter(), 0),
        supplement_card: indexed(market.supplement.top().into_iter(), market.supplement_index()),
    }
}

/// Project the read-only status view. Never mutates the game.
#[must_use]
pub fn project_status(game: &Game) -> StatusView {
    StatusView {
        player: player_view(game.player(Seat::Human)),
        computer: player_view(game.player(Seat::Opponent)),
        central: market_view(&game.market),
        next_action: NEXT_ACTIONS.to_vec(),
    }
}
