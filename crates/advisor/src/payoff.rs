use ventuno_core::{Action, EvTable, Hand};
use ventuno_nash::{GameError, MatrixGame};

/// Actions open to the player, in the row order the solver sees.
pub fn action_rows(hand: &Hand) -> Vec<Action> {
    let mut rows = vec![Action::Stand, Action::Hit];
    if hand.can_double_down {
        rows.push(Action::DoubleDown);
    }
    rows
}

/// Rescale so the best EV becomes 1 when it is positive. A best EV of
/// zero or below passes through untouched, which also keeps a degenerate
/// all-losses table away from a division by zero.
pub fn normalize_evs(evs: &[f64]) -> Vec<f64> {
    let best = evs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if best > 0.0 {
        evs.iter().map(|ev| ev / best).collect()
    } else {
        evs.to_vec()
    }
}

/// Build the two-column zero-sum game the equilibrium step consumes. Both
/// columns repeat the player's EV, so the second party's choice never
/// moves the payoff.
pub fn build_game(hand: &Hand, evs: &EvTable) -> Result<MatrixGame, GameError> {
    let values: Vec<f64> = action_rows(hand)
        .into_iter()
        .map(|action| evs.get(action))
        .collect();
    let rows = normalize_evs(&values)
        .into_iter()
        .map(|ev| vec![ev, ev])
        .collect();
    MatrixGame::zero_sum(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_the_double_down_flag() {
        let hand = Hand {
            player_sum: 11,
            dealer_upcard: 6,
            has_ace: false,
            can_double_down: true,
        };
        assert_eq!(
            action_rows(&hand),
            vec![Action::Stand, Action::Hit, Action::DoubleDown]
        );
        assert_eq!(
            action_rows(&Hand {
                can_double_down: false,
                ..hand
            }),
            vec![Action::Stand, Action::Hit]
        );
    }

    #[test]
    fn positive_best_scales_to_one() {
        assert_eq!(normalize_evs(&[0.5, 0.25]), vec![1.0, 0.5]);
    }

    #[test]
    fn zero_or_losing_best_passes_through() {
        assert_eq!(normalize_evs(&[0.0, -0.3]), vec![0.0, -0.3]);
        assert_eq!(normalize_evs(&[-0.2, -0.5]), vec![-0.2, -0.5]);
    }

    #[test]
    fn game_duplicates_columns() {
        let hand = Hand {
            player_sum: 9,
            dealer_upcard: 5,
            has_ace: false,
            can_double_down: true,
        };
        let evs = EvTable {
            stand: -0.1,
            hit: 0.2,
            double_down: 0.4,
        };
        let game = build_game(&hand, &evs).unwrap();
        assert_eq!(game.row_count(), 3);
        assert_eq!(game.column_count(), 2);
        assert!(game.is_column_degenerate());
        assert_eq!(game.payoff(2, 0), 1.0);
        assert_eq!(game.payoff(1, 0), 0.5);
        assert_eq!(game.payoff(0, 0), game.payoff(0, 1));
    }

    #[test]
    fn sentinel_never_reaches_the_solver() {
        let hand = Hand {
            player_sum: 16,
            dealer_upcard: 10,
            has_ace: false,
            can_double_down: false,
        };
        let evs = EvTable {
            stand: -0.54,
            hit: -0.48,
            double_down: f64::NEG_INFINITY,
        };
        let game = build_game(&hand, &evs).unwrap();
        assert_eq!(game.row_count(), 2);
    }
}
