use log::info;

use crate::solver::errors::SolverError;
use crate::solver::scanner::scan;
use crate::solver::solution::Solution;
use crate::solver::table::DependencyTable;
use crate::utils::validate_numbers;

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Build groups of the same size on the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Finds the calculations closest to a target
pub struct CountdownSolver {
    config: SolverConfig,
}

impl CountdownSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Builds every group and calculation for `numbers`, in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` is empty or contains a zero.
    pub fn build_table(&self, numbers: &[u64]) -> Result<DependencyTable, SolverError> {
        validate_numbers(numbers)?;

        let mut source = numbers.to_vec();
        source.sort_unstable_by(|a, b| b.cmp(a));

        info!(
            "Building dependency table for {:?} ({})",
            source,
            if self.config.parallel {
                "parallel"
            } else {
                "sequential"
            }
        );
        DependencyTable::build(source, self.config.parallel)
    }

    /// # Errors
    ///
    /// Returns an error if `numbers` is empty or contains a zero.
    pub fn solve(&self, target: i64, numbers: &[u64]) -> Result<Solution, SolverError> {
        let table = self.build_table(numbers)?;
        let solution = scan(&table, target);
        info!(
            "Found {} results at difference {} from {}",
            solution.results().len(),
            solution.difference(),
            target
        );
        Ok(solution)
    }
}

impl Default for CountdownSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
