use crate::{HandError, RngState};

/// Card values of the infinite shoe. Ten-valued cards (10, J, Q, K) appear
/// four times so a uniform index draw carries their 4/13 weight. Enumeration
/// and sampling must both read this one table.
pub const CARD_VALUES: [u32; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11];

/// An ace enters a hand as 11 and is demoted to 1 by soft-ace reduction.
pub const ACE_VALUE: u32 = 11;

/// Draw one card value from the shoe. The shoe never depletes.
pub fn draw_card(rng: &mut RngState) -> u32 {
    CARD_VALUES[rng.pick_index(CARD_VALUES.len())]
}

/// Table value of a single rank string: face cards are 10, the ace is 11.
pub fn card_value(rank: &str) -> Result<u32, HandError> {
    match rank {
        "10" | "J" | "Q" | "K" => Ok(10),
        "A" => Ok(ACE_VALUE),
        other => other
            .parse::<u32>()
            .ok()
            .filter(|value| (2..=9).contains(value))
            .ok_or_else(|| HandError::UnknownRank(other.to_string())),
    }
}

/// Fold a card list into a hand total. Aces count 11 until the total busts,
/// then demote to 1 one at a time. The flag reports whether an ace is still
/// counted as 11, i.e. whether the hand is soft.
pub fn hand_total(ranks: &[&str]) -> Result<(u32, bool), HandError> {
    if ranks.is_empty() {
        return Err(HandError::NoCards);
    }
    let mut total = 0;
    let mut soft_aces = 0u32;
    for rank in ranks {
        let value = card_value(rank)?;
        total += value;
        if value == ACE_VALUE {
            soft_aces += 1;
        }
        while total > crate::BLACKJACK && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
    }
    Ok((total, soft_aces > 0))
}
