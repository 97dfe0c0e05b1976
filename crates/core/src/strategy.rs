//! Fixed basic-strategy tables. These answer from rules alone and never
//! look at the deck, so they are the deterministic half of every advice
//! response.

use crate::{Action, Hand};

/// Table lookup for hands without an ace counted as 11.
pub fn hard_hand(player_sum: u32, dealer_value: u32) -> (Action, String) {
    if player_sum >= 17 {
        return (
            Action::Stand,
            format!("You have {player_sum}. Basic strategy recommends standing on 17 or higher."),
        );
    }
    if player_sum <= 8 {
        return (
            Action::Hit,
            format!("You have {player_sum}. Basic strategy recommends hitting on 8 or lower."),
        );
    }
    match player_sum {
        9 => {
            if (3..=6).contains(&dealer_value) {
                (
                    Action::DoubleDown,
                    format!("You have 9 against dealer's {dealer_value}. Consider doubling down."),
                )
            } else {
                (
                    Action::Hit,
                    format!(
                        "You have 9 against dealer's {dealer_value}. Basic strategy recommends hitting."
                    ),
                )
            }
        }
        10 | 11 => (
            Action::DoubleDown,
            format!("You have {player_sum} against dealer's {dealer_value}. Ideally double down"),
        ),
        12 => {
            if (4..=6).contains(&dealer_value) {
                (
                    Action::Stand,
                    format!(
                        "You have 12 against dealer's {dealer_value}. Basic strategy recommends standing."
                    ),
                )
            } else {
                (
                    Action::Hit,
                    format!(
                        "You have 12 against dealer's {dealer_value}. Basic strategy recommends hitting."
                    ),
                )
            }
        }
        // 13 through 16.
        _ => {
            if (2..=6).contains(&dealer_value) {
                (
                    Action::Stand,
                    format!(
                        "You have {player_sum} against dealer's {dealer_value}. Basic strategy recommends standing."
                    ),
                )
            } else {
                (
                    Action::Hit,
                    format!(
                        "You have {player_sum} against dealer's {dealer_value}. Basic strategy recommends hitting."
                    ),
                )
            }
        }
    }
}

/// Table lookup for hands with an ace still counted as 11.
pub fn soft_hand(player_sum: u32, dealer_value: u32) -> (Action, String) {
    if player_sum <= 17 {
        return if (3..=6).contains(&dealer_value) {
            (
                Action::DoubleDown,
                format!(
                    "You have soft {player_sum} against dealer's {dealer_value}. Consider doubling down."
                ),
            )
        } else {
            (
                Action::Hit,
                format!(
                    "You have soft {player_sum} against dealer's {dealer_value}. Basic strategy recommends hitting."
                ),
            )
        };
    }
    if player_sum == 18 {
        return if matches!(dealer_value, 2 | 7 | 8) {
            (
                Action::Stand,
                format!(
                    "You have soft 18 against dealer's {dealer_value}. Basic strategy recommends standing."
                ),
            )
        } else if (3..=6).contains(&dealer_value) {
            (
                Action::DoubleDown,
                format!("You have soft 18 against dealer's {dealer_value}. Consider doubling down."),
            )
        } else {
            (
                Action::Hit,
                format!(
                    "You have soft 18 against dealer's {dealer_value}. Basic strategy recommends hitting."
                ),
            )
        };
    }
    (
        Action::Stand,
        format!("You have soft {player_sum}. Basic strategy recommends standing on soft 19 or higher."),
    )
}

/// Route a hand to the right sub-table. The tables may answer Double Down
/// even when the hand disallows it; callers decide whether to keep that.
pub fn basic_strategy(hand: &Hand) -> (Action, String) {
    if hand.is_soft() {
        soft_hand(hand.player_sum, hand.dealer_upcard)
    } else {
        hard_hand(hand.player_sum, hand.dealer_upcard)
    }
}
