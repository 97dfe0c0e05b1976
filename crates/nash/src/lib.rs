//! Two-party zero-sum matrix games and mixed-strategy equilibrium search.

pub mod game;
pub mod solve;

pub use game::*;
pub use solve::*;
