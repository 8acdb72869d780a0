//! The scripted opponent.
//!
//! Policies are trait-based so the opponent can be swapped:
//! - `OpponentPolicy`: Plays one complete opponent turn
//! - `GreedyBuyer`: The standard opponent (play everything, attack, buy
//!   the most expensive affordable card until nothing is affordable)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use crate::cards::Card;
use crate::core::{EngineError, EngineResult, Game, Personality, Shuffler};
use crate::zones::{Market, MarketSlot};

/// What happened during an opponent turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentReport {
    /// Damage dealt to the human.
    pub attack: u32,
    /// Money generated by the played hand.
    pub money: u32,
    /// Cards bought, in purchase order.
    pub purchases: Vec<Card>,
}

/// Policy for the opponent's turn.
///
/// Runs only as the tail of the human's `end_turn`, and must leave the
/// opponent with a fresh hand.
pub trait OpponentPolicy {
    fn take_turn<S: Shuffler>(&self, game: &mut Game, shuffler: &mut S) -> EngineResult<OpponentReport>;
}

/// The standard deterministic opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBuyer;

/// A purchasable card seen while building the candidate list.
#[derive(Clone, Copy, Debug)]
struct Candidate<'a> {
    slot: MarketSlot,
    card: &'a Card,
}

impl GreedyBuyer {
    /// Pick the next purchase for `money`, or `None` when nothing is affordable.
    ///
    /// Candidates are the supplement (first) followed by the row in order.
    /// Highest cost wins; equal costs go to the personality's preferred
    /// stat; remaining ties go to the earliest candidate.
    #[must_use]
    pub fn choose(market: &Market, money: u32, personality: Personality) -> Option<MarketSlot> {
        let mut candidates: SmallVec<[Candidate<'_>; 6]> = SmallVec::new();
        if let Some(card) = market.supplement.top().filter(|c| c.cost() <= money) {
            candidates.push(Candidate {
                slot: MarketSlot::Supplement,
                card,
            });
        }
        for (i, card) in market.active.iter().enumerate() {
            if card.cost() <= money {
                candidates.push(Candidate {
                    slot: MarketSlot::Row(i),
                    card,
                });
            }
        }

        let mut best: Option<Candidate<'_>> = None;
        for candidate in candidates {
            let better = match best {
                None => true,
                Some(current) => {
                    let (cost, best_cost) = (candidate.card.cost(), current.card.cost());
                    cost > best_cost
                        || (cost == best_cost
                            && personality.preference(candidate.card)
                                > personality.preference(current.card))
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        best.map(|c| c.slot)
    }
}

impl OpponentPolicy for GreedyBuyer {
    fn take_turn<S: Shuffler>(&self, game: &mut Game, shuffler: &mut S) -> EngineResult<OpponentReport> {
        // Play the whole hand into turn-local counters
        let opponent = &mut game.opponent;
        let mut report = OpponentReport {
            attack: opponent.hand.total_attack().ok_or(EngineError::Overflow { stat: "attack" })?,
            money: opponent.hand.total_money().ok_or(EngineError::Overflow { stat: "money" })?,
            purchases: Vec::new(),
        };
        while let Some(card) = opponent.hand.draw() {
            opponent.active.push(card);
        }
        info!(
            "Computer player values attack {}, money {}",
            report.attack, report.money
        );

        game.human.take_damage(report.attack);
        info!(
            "Computer attacking with strength {}, player health now {}",
            report.attack, game.human.health
        );

        let mut money = report.money;
        while money > 0 {
            let Some(slot) = Self::choose(&game.market, money, game.personality) else {
                break;
            };
            let card = game.market.buy(slot, money)?;
            money -= card.cost();
            game.opponent.gain(card.clone());
            report.purchases.push(card);
        }
        if report.purchases.is_empty() {
            info!("Computer bought nothing with {} money", report.money);
        }

        game.opponent.cleanup(shuffler)?;
        info!("Computer turn ending");
        Ok(report)
    }
}
