//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: Ordered card collection (deck, hand, active, discard, market row)
//! - `Market`: Shared central deck, active row and supplement
//! - `MarketSlot`: A purchasable market position resolved from a raw index

pub mod market;
pub mod zone;

pub use market::{Market, MarketSlot};
pub use zone::Zone;
