use crate::ACE_VALUE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The best hand total; anything above it busts.
pub const BLACKJACK: u32 = 21;

/// One hand at decision time, as described by the caller. Missing wire
/// fields default to zero/false rather than failing the request. Requests
/// spell the upcard `dealer_sum`; the alias keeps that contract while
/// reports use the domain name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    #[serde(default)]
    pub player_sum: u32,
    #[serde(default, alias = "dealer_sum")]
    pub dealer_upcard: u32,
    #[serde(default)]
    pub has_ace: bool,
    #[serde(default)]
    pub can_double_down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandState {
    /// Exactly 21: always stand, nothing to weigh.
    TwentyOne,
    /// Over 21: the hand is already lost.
    Busted,
    /// Anything else goes through estimation and the solver.
    Playable,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("dealer upcard {0} out of range")]
    DealerUpcard(u32),
    #[error("unknown card rank: {0}")]
    UnknownRank(String),
    #[error("empty card list")]
    NoCards,
}

impl Hand {
    /// Sums are unsigned by construction; only the upcard has an upper bound
    /// (no single card is worth more than an ace).
    pub fn validate(&self) -> Result<(), HandError> {
        if self.dealer_upcard > ACE_VALUE {
            return Err(HandError::DealerUpcard(self.dealer_upcard));
        }
        Ok(())
    }

    pub fn state(&self) -> HandState {
        if self.player_sum == BLACKJACK {
            HandState::TwentyOne
        } else if self.player_sum > BLACKJACK {
            HandState::Busted
        } else {
            HandState::Playable
        }
    }

    /// A hand is soft while an ace can still count as 11 without busting.
    pub fn is_soft(&self) -> bool {
        self.has_ace && self.player_sum <= BLACKJACK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Stand,
    Hit,
    DoubleDown,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Stand, Action::Hit, Action::DoubleDown];

    /// Wire label, as the boundary spells it.
    pub fn label(self) -> &'static str {
        match self {
            Action::Stand => "Stand",
            Action::Hit => "Hit",
            Action::DoubleDown => "Double Down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_classifies_totals() {
        let hand = Hand {
            player_sum: 21,
            ..Hand::default()
        };
        assert_eq!(hand.state(), HandState::TwentyOne);
        let hand = Hand {
            player_sum: 22,
            ..Hand::default()
        };
        assert_eq!(hand.state(), HandState::Busted);
        let hand = Hand {
            player_sum: 16,
            ..Hand::default()
        };
        assert_eq!(hand.state(), HandState::Playable);
    }

    #[test]
    fn soft_requires_a_live_ace() {
        let hand = Hand {
            player_sum: 18,
            has_ace: true,
            ..Hand::default()
        };
        assert!(hand.is_soft());
        let hand = Hand {
            player_sum: 18,
            has_ace: false,
            ..Hand::default()
        };
        assert!(!hand.is_soft());
        let hand = Hand {
            player_sum: 25,
            has_ace: true,
            ..Hand::default()
        };
        assert!(!hand.is_soft());
    }

    #[test]
    fn validate_bounds_the_upcard() {
        let hand = Hand {
            dealer_upcard: 11,
            ..Hand::default()
        };
        assert_eq!(hand.validate(), Ok(()));
        let hand = Hand {
            dealer_upcard: 12,
            ..Hand::default()
        };
        assert_eq!(hand.validate(), Err(HandError::DealerUpcard(12)));
    }

    #[test]
    fn missing_wire_fields_default() {
        let hand: Hand = serde_json::from_str("{}").unwrap();
        assert_eq!(hand, Hand::default());
        let hand: Hand = serde_json::from_str(r#"{"player_sum":16,"has_ace":true}"#).unwrap();
        assert_eq!(hand.player_sum, 16);
        assert!(hand.has_ace);
        assert!(!hand.can_double_down);
    }

    #[test]
    fn requests_spell_the_upcard_dealer_sum() {
        let hand: Hand = serde_json::from_str(
            r#"{"player_sum":16,"dealer_sum":10,"has_ace":false,"can_double_down":true}"#,
        )
        .unwrap();
        assert_eq!(hand.player_sum, 16);
        assert_eq!(hand.dealer_upcard, 10);
        assert!(!hand.has_ace);
        assert!(hand.can_double_down);
        // The domain spelling stays accepted for report round-trips.
        let hand: Hand = serde_json::from_str(r#"{"dealer_upcard":7}"#).unwrap();
        assert_eq!(hand.dealer_upcard, 7);
    }

    #[test]
    fn action_labels_match_the_wire() {
        assert_eq!(Action::Stand.label(), "Stand");
        assert_eq!(Action::Hit.label(), "Hit");
        assert_eq!(Action::DoubleDown.label(), "Double Down");
        assert_eq!(Action::ALL.len(), 3);
    }
}
