//! The error type shared by every labyrinth crate.

use std::fmt;

use crate::geom::Point;

/// Errors returned by grid access, maze generation and path queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Invalid configuration: grid dimensions, walker placement or budget.
    Config(String),
    /// A coordinate lies outside the grid.
    OutOfBounds { pos: Point, size: Point },
    /// A path endpoint is not an open cell.
    InvalidCell(Point),
    /// Source and target are not connected.
    Unreachable { source: Point, target: Point },
    /// A carving or relaxation loop did not converge within its budget.
    BudgetExhausted { steps: u64 },
}

impl MazeError {
    /// Shorthand for [`MazeError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "invalid maze configuration: {msg}"),
            Self::OutOfBounds { pos, size } => {
                write!(f, "cell {pos} is outside the {}x{} grid", size.x, size.y)
            }
            Self::InvalidCell(p) => write!(f, "cell {p} is not open"),
            Self::Unreachable { source, target } => {
                write!(f, "no path from {source} to {target}")
            }
            Self::BudgetExhausted { steps } => {
                write!(f, "gave up after {steps} steps without converging")
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = MazeError::OutOfBounds {
            pos: Point::new(7, 1),
            size: Point::new(5, 5),
        };
        assert_eq!(e.to_string(), "cell (7, 1) is outside the 5x5 grid");
        assert_eq!(
            MazeError::InvalidCell(Point::new(1, 1)).to_string(),
            "cell (1, 1) is not open"
        );
        assert_eq!(
            MazeError::config("columns must be positive").to_string(),
            "invalid maze configuration: columns must be positive"
        );
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(MazeError::BudgetExhausted { steps: 3 });
        assert!(e.to_string().contains("3 steps"));
    }
}
