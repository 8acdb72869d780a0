//! The turn engine.
//!
//! `RulesEngine` validates and applies one human command. Implementations
//! may leave the game partially updated on error; `api::apply_command`
//! works on a copy so callers never observe that.
//!
//! ## Key Types
//!
//! - `RulesEngine`: Trait for applying commands and deriving the verdict
//! - `DuelRules`: The standard rules, generic over the opponent policy

use tracing::{debug, info};

use super::opponent::{GreedyBuyer, OpponentPolicy};
use super::verdict::{evaluate_end, Verdict};
use crate::core::{Command, EngineError, EngineResult, Game, Shuffler};
use crate::zones::MarketSlot;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_command`: Must be deterministic given the shuffler
/// - `verdict`: Must not mutate the game
/// - `legal_commands`: Return empty once the game is over
pub trait RulesEngine {
    /// Apply one human command to the game.
    fn apply_command<S: Shuffler>(
        &self,
        game: &mut Game,
        command: &Command,
        shuffler: &mut S,
    ) -> EngineResult<()>;

    /// Derive the current verdict.
    fn verdict(&self, game: &Game) -> Verdict {
        evaluate_end(game)
    }

    /// Enumerate the concrete commands that pass validation right now.
    fn legal_commands(&self, game: &Game) -> Vec<Command>;
}

/// Standard two-player rules.
#[derive(Clone, Debug, Default)]
pub struct DuelRules<P: OpponentPolicy = GreedyBuyer> {
    policy: P,
}

impl DuelRules {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: OpponentPolicy> DuelRules<P> {
    /// Use a different opponent policy.
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Get the opponent policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn buy(game: &mut Game, index: usize) -> EngineResult<()> {
        let slot = game
            .market
            .slot(index)
            .ok_or_else(|| EngineError::invalid_index(index))?;
        let card = game.market.buy(slot, game.human.money)?;
        game.human.money -= card.cost();
        debug!("Player money now {}", game.human.money);
        game.human.gain(card);
        Ok(())
    }

    fn attack(game: &mut Game) {
        let attack = game.human.attack;
        game.opponent.take_damage(attack);
        game.human.attack = 0;
        info!(
            "Player attacking with strength {}, computer health now {}",
            attack, game.opponent.health
        );
    }

    fn end_turn<S: Shuffler>(&self, game: &mut Game, shuffler: &mut S) -> EngineResult<()> {
        game.human.cleanup(shuffler)?;
        info!(
            "Player turn ending, health {} vs computer {}",
            game.human.health, game.opponent.health
        );

        let report = self.policy.take_turn(game, shuffler)?;
        debug!("Computer bought {} cards", report.purchases.len());

        game.turn += 1;
        info!("Turn {} complete", game.turn);
        Ok(())
    }
}

impl<P: OpponentPolicy> RulesEngine for DuelRules<P> {
    fn apply_command<S: Shuffler>(
        &self,
        game: &mut Game,
        command: &Command,
        shuffler: &mut S,
    ) -> EngineResult<()> {
        let verdict = evaluate_end(game);
        if verdict.is_terminal() {
            return Err(EngineError::GameOver { verdict });
        }

        debug!("Applying {}", command);
        match *command {
            Command::PlayAll => {
                let played = game.human.play_all()?;
                debug!(
                    "Played {} cards, money {}, attack {}",
                    played, game.human.money, game.human.attack
                );
            }
            Command::PlayCard(index) => {
                let card = game.human.play_card(index)?;
                debug!("Played {}", card);
            }
            Command::BuyCard(index) => Self::buy(game, index)?,
            Command::Attack => Self::attack(game),
            Command::EndTurn => self.end_turn(game, shuffler)?,
        }
        Ok(())
    }

    fn legal_commands(&self, game: &Game) -> Vec<Command> {
        if evaluate_end(game).is_terminal() {
            return Vec::new();
        }

        let mut commands = vec![Command::PlayAll];
        commands.extend((0..game.human.hand.len()).map(Command::PlayCard));

        let market = &game.market;
        let budget = game.human.money;
        for index in 0..=market.supplement_index() {
            let affordable = market
                .slot(index)
                .and_then(|slot: MarketSlot| market.offered(slot).ok())
                .is_some_and(|card| card.cost() <= budget);
            if affordable {
                commands.push(Command::BuyCard(index));
            }
        }

        commands.push(Command::Attack);
        commands.push(Command::EndTurn);
        commands
    }
}
