//! Card system: the card record and the standard card set.
//!
//! ## Key Types
//!
//! - `Card`: Immutable `{name, cost, attack, money}` record
//! - `catalog`: Named constructors for every card in the standard game

pub mod card;
pub mod catalog;

pub use card::Card;
