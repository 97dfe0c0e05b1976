use crate::{action_rows, build_game, estimate_evs, AdviceReport, AdvisorConfig, AdvisorError};
use serde::Serialize;
use ventuno_core::{basic_strategy, Action, EvTable, Hand, HandState};
use ventuno_nash::enumerate_equilibria;

/// One advice line on the wire. `double_down_probability` is present only
/// on equilibrium advice for hands allowed to double.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub recommendation: String,
    pub reasoning: String,
    pub hit_probability: f64,
    pub stand_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_down_probability: Option<f64>,
}

/// A full advice response. Hands that are already decided get one flat
/// verdict; live hands carry the equilibrium and rule-table lines side by
/// side, never merged into one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Advice {
    Settled(Recommendation),
    Weighed {
        mixed: Recommendation,
        normal: Recommendation,
    },
}

/// Advise on a hand with the configured estimator.
pub fn advise(hand: &Hand, config: &AdvisorConfig) -> Result<Advice, AdvisorError> {
    Ok(advise_report(hand, config)?.advice)
}

/// Advise on a hand and keep the run's inputs and EV table alongside the
/// advice. Totals of 21 and busts settle before any estimation happens.
pub fn advise_report(hand: &Hand, config: &AdvisorConfig) -> Result<AdviceReport, AdvisorError> {
    let started = std::time::Instant::now();
    hand.validate()?;
    let (evs, advice) = match hand.state() {
        HandState::TwentyOne => (None, Advice::Settled(natural_verdict())),
        HandState::Busted => (None, Advice::Settled(busted_verdict())),
        HandState::Playable => {
            let evs = estimate_evs(hand, config);
            let mixed = mixed_recommendation(hand, &evs)?;
            let normal = rules_recommendation(hand);
            (Some(evs), Advice::Weighed { mixed, normal })
        }
    };
    Ok(AdviceReport {
        seed: config.seed,
        mode: config.mode.label(),
        trials: config.trials,
        hand: *hand,
        evs,
        advice,
        elapsed_ms: started.elapsed().as_millis() as u64,
    })
}

/// Equilibrium advice for a live hand. When several equilibria exist the
/// last enumerated one is kept; among equally likely actions the earliest
/// in {Stand, Hit, Double Down} order wins.
pub fn mixed_recommendation(hand: &Hand, evs: &EvTable) -> Result<Recommendation, AdvisorError> {
    let game = build_game(hand, evs)?;
    let equilibria = enumerate_equilibria(&game)?;
    let equilibrium = equilibria
        .into_iter()
        .last()
        .ok_or_else(|| AdvisorError::Solver("no equilibrium found".to_string()))?;

    let weights = &equilibrium.row_strategy;
    let mut best = 0;
    for (row, weight) in weights.iter().enumerate() {
        if *weight > weights[best] {
            best = row;
        }
    }
    let action = action_rows(hand)[best];

    Ok(Recommendation {
        recommendation: action.label().to_string(),
        reasoning: equilibrium_reasoning(action).to_string(),
        hit_probability: round3(weights[1]),
        stand_probability: round3(weights[0]),
        double_down_probability: hand.can_double_down.then(|| round3(weights[2])),
    })
}

/// Rule-table advice for a live hand. Probabilities are the indicator of
/// the chosen action.
pub fn rules_recommendation(hand: &Hand) -> Recommendation {
    let (action, reasoning) = basic_strategy(hand);
    Recommendation {
        recommendation: action.label().to_string(),
        reasoning,
        hit_probability: if action == Action::Hit { 1.0 } else { 0.0 },
        stand_probability: if action == Action::Stand { 1.0 } else { 0.0 },
        double_down_probability: None,
    }
}

fn natural_verdict() -> Recommendation {
    Recommendation {
        recommendation: "stand".to_string(),
        reasoning: "You have 21! Always stand with 21.".to_string(),
        hit_probability: 0.0,
        stand_probability: 1.0,
        double_down_probability: None,
    }
}

fn busted_verdict() -> Recommendation {
    Recommendation {
        recommendation: "bust".to_string(),
        reasoning: "You have busted with a sum over 21.".to_string(),
        hit_probability: 0.0,
        stand_probability: 0.0,
        double_down_probability: None,
    }
}

fn equilibrium_reasoning(action: Action) -> &'static str {
    match action {
        Action::Stand => "Standing has the highest expected value and is statistically safer.",
        Action::Hit => "Hitting offers a better chance of winning based on Nash equilibrium.",
        Action::DoubleDown => "Double Down is recommended as it provides the best expected value.",
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
