use crate::{draw_card, Action, DealerDistribution, DealerOutcome, Hand, RngState, BLACKJACK, CARD_VALUES};
use serde::Serialize;

/// Net result of one settled round, before any stake multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win,
    Loss,
    Push,
}

impl RoundOutcome {
    pub fn payoff(self) -> f64 {
        match self {
            RoundOutcome::Win => 1.0,
            RoundOutcome::Loss => -1.0,
            RoundOutcome::Push => 0.0,
        }
    }
}

/// Compare a standing player total against a finished dealer hand. The
/// player must not be busted here; a dealer bust is an outright win.
pub fn settle(player_total: u32, dealer: DealerOutcome) -> RoundOutcome {
    match dealer {
        DealerOutcome::Bust => RoundOutcome::Win,
        DealerOutcome::Total(dealer_total) => {
            if player_total > dealer_total {
                RoundOutcome::Win
            } else if player_total < dealer_total {
                RoundOutcome::Loss
            } else {
                RoundOutcome::Push
            }
        }
    }
}

/// Resolve one sampled round for the given action. Hit and double down
/// draw exactly one card and lose outright past 21; the caller applies the
/// doubled stake.
pub fn play_action(
    player_total: u32,
    action: Action,
    dealer: DealerOutcome,
    rng: &mut RngState,
) -> RoundOutcome {
    match action {
        Action::Stand => settle(player_total, dealer),
        Action::Hit | Action::DoubleDown => {
            let total = player_total + draw_card(rng);
            if total > BLACKJACK {
                RoundOutcome::Loss
            } else {
                settle(total, dealer)
            }
        }
    }
}

/// Exact EV of standing, composed from the dealer distribution.
pub fn ev_stand(player_total: u32, dist: &DealerDistribution) -> f64 {
    if player_total > BLACKJACK {
        return -1.0;
    }
    dist.outcomes()
        .map(|(dealer, prob)| prob * settle(player_total, dealer).payoff())
        .sum()
}

/// Exact EV of drawing one card and standing on whatever it makes.
pub fn ev_hit(player_total: u32, dist: &DealerDistribution) -> f64 {
    let draw = 1.0 / CARD_VALUES.len() as f64;
    CARD_VALUES
        .iter()
        .map(|card| {
            let total = player_total + card;
            if total > BLACKJACK {
                -draw
            } else {
                draw * ev_stand(total, dist)
            }
        })
        .sum()
}

/// Expected value of each candidate action, in units of the initial bet.
/// Double down settles at twice the bet; when doubling is not allowed its
/// entry is negative infinity so no selection rule can favor it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvTable {
    pub stand: f64,
    pub hit: f64,
    pub double_down: f64,
}

impl EvTable {
    pub fn get(&self, action: Action) -> f64 {
        match action {
            Action::Stand => self.stand,
            Action::Hit => self.hit,
            Action::DoubleDown => self.double_down,
        }
    }
}

/// Closed-form EV table for a hand. Double down draws the same single card
/// a hit would, so its EV is exactly twice the hit EV.
pub fn exact_evs(hand: &Hand) -> EvTable {
    let dist = DealerDistribution::for_upcard(hand.dealer_upcard);
    let stand = ev_stand(hand.player_sum, &dist);
    let hit = ev_hit(hand.player_sum, &dist);
    let double_down = if hand.can_double_down {
        2.0 * hit
    } else {
        f64::NEG_INFINITY
    };
    EvTable {
        stand,
        hit,
        double_down,
    }
}
