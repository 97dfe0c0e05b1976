use crate::{draw_card, RngState, ACE_VALUE, BLACKJACK, CARD_VALUES};
use serde::{Deserialize, Serialize};

/// The dealer stands on every total of 17 or more, soft 17 included.
pub const DEALER_STAND: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerOutcome {
    Total(u32),
    Bust,
}

/// Exact distribution of the dealer's final outcome, built by enumerating
/// every draw sequence from a starting total. Probabilities over
/// {17, 18, 19, 20, 21, bust} sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DealerDistribution {
    totals: [f64; 5],
    bust: f64,
}

impl DealerDistribution {
    pub fn for_upcard(upcard: u32) -> Self {
        Self::from_total(upcard, u32::from(upcard == ACE_VALUE))
    }

    /// Enumerate from an in-progress dealer hand: `total` counts any soft
    /// aces as 11 and `soft_aces` says how many can still demote.
    pub fn from_total(total: u32, soft_aces: u32) -> Self {
        let mut dist = Self {
            totals: [0.0; 5],
            bust: 0.0,
        };
        descend(total, soft_aces, 1.0, &mut dist);
        dist
    }

    /// Probability the dealer settles on exactly `final_total` (17..=21).
    pub fn total(&self, final_total: u32) -> f64 {
        if (DEALER_STAND..=BLACKJACK).contains(&final_total) {
            self.totals[(final_total - DEALER_STAND) as usize]
        } else {
            0.0
        }
    }

    pub fn bust(&self) -> f64 {
        self.bust
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (DealerOutcome, f64)> + '_ {
        self.totals
            .iter()
            .enumerate()
            .map(|(offset, mass)| (DealerOutcome::Total(DEALER_STAND + offset as u32), *mass))
            .chain(std::iter::once((DealerOutcome::Bust, self.bust)))
    }

    fn record(&mut self, total: u32, mass: f64) {
        if total > BLACKJACK {
            self.bust += mass;
        } else {
            self.totals[(total - DEALER_STAND) as usize] += mass;
        }
    }
}

/// Demote soft aces one at a time while the total busts.
fn settle_aces(mut total: u32, mut soft_aces: u32) -> (u32, u32) {
    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    (total, soft_aces)
}

/// Each branch carries 1/13 of its parent's mass, so leaves at different
/// depths keep their true probability and the marginals stay exact.
fn descend(total: u32, soft_aces: u32, mass: f64, dist: &mut DealerDistribution) {
    let (total, soft_aces) = settle_aces(total, soft_aces);
    if total >= DEALER_STAND {
        dist.record(total, mass);
        return;
    }
    let branch = mass / CARD_VALUES.len() as f64;
    for card in CARD_VALUES {
        descend(total + card, soft_aces + u32::from(card == ACE_VALUE), branch, dist);
    }
}

/// Play one dealer hand to completion by drawing from the shoe. Shares the
/// soft-ace reduction with the enumeration above so sampling and the exact
/// distribution describe the same dealer.
pub fn dealer_final(upcard: u32, rng: &mut RngState) -> DealerOutcome {
    let mut total = upcard;
    let mut soft_aces = u32::from(upcard == ACE_VALUE);
    loop {
        let settled = settle_aces(total, soft_aces);
        total = settled.0;
        soft_aces = settled.1;
        if total > BLACKJACK {
            return DealerOutcome::Bust;
        }
        if total >= DEALER_STAND {
            return DealerOutcome::Total(total);
        }
        let card = draw_card(rng);
        total += card;
        if card == ACE_VALUE {
            soft_aces += 1;
        }
    }
}
