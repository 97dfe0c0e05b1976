use crate::MatrixGame;
use thiserror::Error;

/// Iteration budget used when callers do not pick their own.
pub const DEFAULT_ITERATIONS: u32 = 200_000;
/// Largest duality gap accepted from the iterative solver.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("fictitious play left a duality gap of {gap} after {iterations} iterations")]
    NoConvergence { iterations: u32, gap: f64 },
}

/// A mixed-strategy profile for both parties. `value` is the expected
/// payoff to the first party when both follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibrium {
    pub row_strategy: Vec<f64>,
    pub column_strategy: Vec<f64>,
    pub value: f64,
}

/// Enumerate equilibria of a zero-sum game.
///
/// Column-degenerate games get their exact pure equilibria, one per row
/// attaining the best payoff, listed in row order. Every other game is
/// solved numerically by fictitious play and contributes one approximate
/// equilibrium.
pub fn enumerate_equilibria(game: &MatrixGame) -> Result<Vec<Equilibrium>, SolveError> {
    if game.is_column_degenerate() {
        return Ok(pure_row_equilibria(game));
    }
    let equilibrium = fictitious_play(game, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE)?;
    Ok(vec![equilibrium])
}

/// When no row's payoff depends on the column, the second party is
/// irrelevant and every best row is a pure equilibrium. The column player
/// is indifferent and reported as uniform.
fn pure_row_equilibria(game: &MatrixGame) -> Vec<Equilibrium> {
    let values: Vec<f64> = (0..game.row_count())
        .map(|row| game.payoff(row, 0))
        .collect();
    let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let columns = game.column_count();
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| **value == best)
        .map(|(row, value)| {
            let mut row_strategy = vec![0.0; game.row_count()];
            row_strategy[row] = 1.0;
            Equilibrium {
                row_strategy,
                column_strategy: vec![1.0 / columns as f64; columns],
                value: *value,
            }
        })
        .collect()
}

/// Approximate an equilibrium by iterated best response against the
/// opponent's empirical play. The averaged strategies of a zero-sum game
/// converge; the remaining duality gap bounds their distance from optimal.
pub fn fictitious_play(
    game: &MatrixGame,
    iterations: u32,
    tolerance: f64,
) -> Result<Equilibrium, SolveError> {
    let mut row_counts = vec![0.0; game.row_count()];
    let mut column_counts = vec![0.0; game.column_count()];
    row_counts[0] = 1.0;
    column_counts[0] = 1.0;

    for _ in 0..iterations {
        let row = best_row_response(game, &column_counts);
        let column = best_column_response(game, &row_counts);
        row_counts[row] += 1.0;
        column_counts[column] += 1.0;
    }

    let total: f64 = row_counts.iter().sum();
    let row_strategy: Vec<f64> = row_counts.iter().map(|count| count / total).collect();
    let column_strategy: Vec<f64> = column_counts.iter().map(|count| count / total).collect();

    let attack = (0..game.row_count())
        .map(|row| weighted_row(game, row, &column_strategy))
        .fold(f64::NEG_INFINITY, f64::max);
    let defense = (0..game.column_count())
        .map(|column| weighted_column(game, column, &row_strategy))
        .fold(f64::INFINITY, f64::min);
    let gap = attack - defense;
    if gap > tolerance {
        return Err(SolveError::NoConvergence { iterations, gap });
    }

    let value = column_strategy
        .iter()
        .enumerate()
        .map(|(column, weight)| weight * weighted_column(game, column, &row_strategy))
        .sum();
    Ok(Equilibrium {
        row_strategy,
        column_strategy,
        value,
    })
}

fn weighted_row(game: &MatrixGame, row: usize, column_weights: &[f64]) -> f64 {
    column_weights
        .iter()
        .enumerate()
        .map(|(column, weight)| weight * game.payoff(row, column))
        .sum()
}

fn weighted_column(game: &MatrixGame, column: usize, row_weights: &[f64]) -> f64 {
    row_weights
        .iter()
        .enumerate()
        .map(|(row, weight)| weight * game.payoff(row, column))
        .sum()
}

fn best_row_response(game: &MatrixGame, column_weights: &[f64]) -> usize {
    let mut best = 0;
    let mut best_value = weighted_row(game, 0, column_weights);
    for row in 1..game.row_count() {
        let value = weighted_row(game, row, column_weights);
        if value > best_value {
            best = row;
            best_value = value;
        }
    }
    best
}

fn best_column_response(game: &MatrixGame, row_weights: &[f64]) -> usize {
    let mut best = 0;
    let mut best_value = weighted_column(game, 0, row_weights);
    for column in 1..game.column_count() {
        let value = weighted_column(game, column, row_weights);
        if value < best_value {
            best = column;
            best_value = value;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pennies() -> MatrixGame {
        MatrixGame::zero_sum(vec![vec![1.0, -1.0], vec![-1.0, 1.0]]).unwrap()
    }

    #[test]
    fn degenerate_game_picks_the_best_row() {
        let game =
            MatrixGame::zero_sum(vec![vec![0.2, 0.2], vec![0.5, 0.5], vec![-0.1, -0.1]]).unwrap();
        let equilibria = enumerate_equilibria(&game).unwrap();
        assert_eq!(equilibria.len(), 1);
        let eq = &equilibria[0];
        assert_eq!(eq.row_strategy, vec![0.0, 1.0, 0.0]);
        assert_eq!(eq.value, 0.5);
        let mass: f64 = eq.row_strategy.iter().sum();
        assert!((mass - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tied_rows_enumerate_in_row_order() {
        let game =
            MatrixGame::zero_sum(vec![vec![0.5, 0.5], vec![0.5, 0.5], vec![0.1, 0.1]]).unwrap();
        let equilibria = enumerate_equilibria(&game).unwrap();
        assert_eq!(equilibria.len(), 2);
        assert_eq!(equilibria[0].row_strategy[0], 1.0);
        assert_eq!(equilibria[1].row_strategy[1], 1.0);
    }

    #[test]
    fn matching_pennies_mixes_evenly() {
        let eq = fictitious_play(&pennies(), DEFAULT_ITERATIONS, DEFAULT_TOLERANCE).unwrap();
        assert!((eq.row_strategy[0] - 0.5).abs() < 0.05);
        assert!((eq.column_strategy[0] - 0.5).abs() < 0.05);
        assert!(eq.value.abs() < 0.05);
        let mass: f64 = eq.row_strategy.iter().sum();
        assert!((mass - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rock_paper_scissors_mixes_evenly() {
        let game = MatrixGame::zero_sum(vec![
            vec![0.0, -1.0, 1.0],
            vec![1.0, 0.0, -1.0],
            vec![-1.0, 1.0, 0.0],
        ])
        .unwrap();
        let equilibria = enumerate_equilibria(&game).unwrap();
        assert_eq!(equilibria.len(), 1);
        for weight in &equilibria[0].row_strategy {
            assert!((weight - 1.0 / 3.0).abs() < 0.05);
        }
    }

    #[test]
    fn starved_iterations_report_no_convergence() {
        let err = fictitious_play(&pennies(), 10, 1e-9).unwrap_err();
        assert!(matches!(
            err,
            SolveError::NoConvergence { iterations: 10, .. }
        ));
    }

    #[test]
    fn single_cell_game_solves_immediately() {
        let game = MatrixGame::zero_sum(vec![vec![0.25]]).unwrap();
        let eq = fictitious_play(&game, 0, 1e-9).unwrap();
        assert_eq!(eq.row_strategy, vec![1.0]);
        assert_eq!(eq.value, 0.25);
    }
}
