use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game has no payoff entries")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("payoff at ({row}, {column}) is not finite")]
    NonFinite { row: usize, column: usize },
}

/// Two-party zero-sum game in normal form. Only the first party's payoffs
/// are stored; the second party's are their exact negation.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGame {
    rows: Vec<Vec<f64>>,
}

impl MatrixGame {
    /// Validate a payoff matrix: rectangular, non-empty and finite.
    pub fn zero_sum(rows: Vec<Vec<f64>>) -> Result<Self, GameError> {
        let expected = rows.first().map(Vec::len).ok_or(GameError::Empty)?;
        if expected == 0 {
            return Err(GameError::Empty);
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(GameError::Ragged {
                    row,
                    found: values.len(),
                    expected,
                });
            }
            for (column, value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(GameError::NonFinite { row, column });
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// First party's payoff for a pure strategy pair.
    pub fn payoff(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// Second party's payoff for the same pair.
    pub fn opponent_payoff(&self, row: usize, column: usize) -> f64 {
        -self.rows[row][column]
    }

    /// True when no row's payoff depends on the column. Games built by
    /// duplicating a payoff vector across columns have this shape, and the
    /// second party's choice carries no information in them.
    pub fn is_column_degenerate(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().all(|value| *value == row[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_ragged_input() {
        assert!(matches!(MatrixGame::zero_sum(vec![]), Err(GameError::Empty)));
        assert!(matches!(
            MatrixGame::zero_sum(vec![vec![]]),
            Err(GameError::Empty)
        ));
        let err = MatrixGame::zero_sum(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            err,
            Err(GameError::Ragged {
                row: 1,
                found: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn rejects_non_finite_payoffs() {
        let err = MatrixGame::zero_sum(vec![vec![0.5, f64::NEG_INFINITY]]);
        assert!(matches!(
            err,
            Err(GameError::NonFinite { row: 0, column: 1 })
        ));
    }

    #[test]
    fn payoffs_negate_for_the_opponent() {
        let game = MatrixGame::zero_sum(vec![vec![1.5, -0.25], vec![0.0, 2.0]]).unwrap();
        assert_eq!(game.row_count(), 2);
        assert_eq!(game.column_count(), 2);
        assert_eq!(game.payoff(0, 1), -0.25);
        assert_eq!(game.opponent_payoff(0, 1), 0.25);
    }

    #[test]
    fn detects_duplicated_columns() {
        let flat = MatrixGame::zero_sum(vec![vec![0.3, 0.3], vec![-0.1, -0.1]]).unwrap();
        assert!(flat.is_column_degenerate());
        let pennies = MatrixGame::zero_sum(vec![vec![1.0, -1.0], vec![-1.0, 1.0]]).unwrap();
        assert!(!pennies.is_column_degenerate());
    }
}
