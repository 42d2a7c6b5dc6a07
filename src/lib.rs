//! Countdown solver - A library for the numbers round of the Countdown game show
//!
//! Given a target and a handful of source numbers, finds every expression built
//! from `+`, `-`, `x` and `/` over a subset of the numbers whose value is closest
//! to the target. Every intermediate value has to be a positive integer.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::{
    Calculation, CountdownSolver, DependencyTable, Solution, SolverConfig, SolverError,
};
pub use utils::{UtilsError, validate_numbers};

/// Find the calculations closest to `target` using the default solver
///
/// The numbers may be given in any order. Results using fewer numbers are
/// listed first.
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` is empty
/// * `numbers` contains a zero
///
/// # Examples
///
/// ```
/// use countdown_solver::solve;
///
/// let solution = solve(15, &[7, 5, 3]).unwrap();
/// assert_eq!(solution.difference(), 0);
/// assert_eq!(solution.results()[0].to_string(), "15 = 5 x 3");
/// ```
pub fn solve(target: i64, numbers: &[u64]) -> Result<Solution, SolverError> {
    CountdownSolver::default().solve(target, numbers)
}
