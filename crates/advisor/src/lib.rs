//! Seeded advice engine combining sampled play and equilibrium search over
//! the core blackjack API.

mod config;
mod error;
mod payoff;
mod recommend;
mod report;
mod simulate;

pub use config::*;
pub use error::*;
pub use payoff::*;
pub use recommend::*;
pub use report::*;
pub use simulate::*;
