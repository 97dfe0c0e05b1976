//! Core blackjack rules and probability math. Keep this crate free of IO and
//! platform concerns.

pub mod dealer;
pub mod deck;
pub mod ev;
pub mod hand;
pub mod rng;
pub mod strategy;

pub use dealer::*;
pub use deck::*;
pub use ev::*;
pub use hand::*;
pub use rng::*;
pub use strategy::*;
