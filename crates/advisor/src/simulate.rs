use crate::{AdvisorConfig, EvMode};
use rayon::prelude::*;
use ventuno_core::{dealer_final, exact_evs, play_action, Action, EvTable, Hand, RngState, RoundOutcome};

/// Win, loss and push counts for one candidate action.
#[derive(Debug, Clone, Copy, Default)]
struct ActionTally {
    wins: u64,
    losses: u64,
    pushes: u64,
}

impl ActionTally {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win => self.wins += 1,
            RoundOutcome::Loss => self.losses += 1,
            RoundOutcome::Push => self.pushes += 1,
        }
    }

    fn merge(&mut self, other: &ActionTally) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.pushes += other.pushes;
    }

    fn trials(&self) -> u64 {
        self.wins + self.losses + self.pushes
    }

    /// Win rate minus loss rate, scaled by the stake on the line.
    fn ev(&self, stake: f64) -> f64 {
        let total = self.trials();
        if total == 0 {
            return 0.0;
        }
        stake * (self.wins as f64 - self.losses as f64) / total as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct HandTallies {
    stand: ActionTally,
    hit: ActionTally,
    double_down: ActionTally,
}

impl HandTallies {
    fn merge(&mut self, other: &HandTallies) {
        self.stand.merge(&other.stand);
        self.hit.merge(&other.hit);
        self.double_down.merge(&other.double_down);
    }
}

/// One dealer hand is sampled per trial and settled against every
/// candidate action, so the action estimates share their dealer draws.
fn run_batch(hand: &Hand, trials: u32, rng: &mut RngState) -> HandTallies {
    let mut tallies = HandTallies::default();
    for _ in 0..trials {
        let dealer = dealer_final(hand.dealer_upcard, rng);
        tallies
            .stand
            .record(play_action(hand.player_sum, Action::Stand, dealer, rng));
        tallies
            .hit
            .record(play_action(hand.player_sum, Action::Hit, dealer, rng));
        if hand.can_double_down {
            tallies
                .double_down
                .record(play_action(hand.player_sum, Action::DoubleDown, dealer, rng));
        }
    }
    tallies
}

fn batch_trials(total: u32, batches: u32, batch: u32) -> u32 {
    let base = total / batches;
    let remainder = total % batches;
    base + u32::from(batch < remainder)
}

/// Monte Carlo EV table. Trials are split into batches that run on the
/// rayon pool, each batch with its own generator derived from the
/// configured seed, so results do not depend on thread scheduling.
pub fn sample_evs(hand: &Hand, config: &AdvisorConfig) -> EvTable {
    let batches = config.batches.max(1);
    let tallies = (0..batches)
        .into_par_iter()
        .map(|batch| {
            let mut rng = RngState::from_seed(config.seed.wrapping_add(u64::from(batch)));
            run_batch(hand, batch_trials(config.trials, batches, batch), &mut rng)
        })
        .reduce(HandTallies::default, |mut left, right| {
            left.merge(&right);
            left
        });

    let stand = tallies.stand.ev(1.0);
    let hit = tallies.hit.ev(1.0);
    let double_down = if hand.can_double_down {
        tallies.double_down.ev(2.0)
    } else {
        f64::NEG_INFINITY
    };
    EvTable {
        stand,
        hit,
        double_down,
    }
}

/// EV table for a hand under the configured estimation mode.
pub fn estimate_evs(hand: &Hand, config: &AdvisorConfig) -> EvTable {
    match config.mode {
        EvMode::Sampled => sample_evs(hand, config),
        EvMode::Exact => exact_evs(hand),
    }
}
