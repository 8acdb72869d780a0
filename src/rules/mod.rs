//! Game rules.
//!
//! - `engine`: Validates and applies human commands
//! - `opponent`: The scripted opponent turn
//! - `verdict`: End-of-game evaluation
//! - `status`: Read-only status projection

pub mod engine;
pub mod opponent;
pub mod status;
pub mod verdict;

pub use engine::{DuelRules, RulesEngine};
pub use opponent::{GreedyBuyer, OpponentPolicy, OpponentReport};
pub use status::{project_status, ActionShape, IndexedCard, MarketView, PlayerView, StatusView};
pub use verdict::{evaluate_end, phase, TurnPhase, Verdict};
