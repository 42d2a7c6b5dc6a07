use log::debug;

use crate::solver::calculation::Calculation;
use crate::solver::solution::Solution;
use crate::solver::table::DependencyTable;

/// Absolute distance between a result and the target
pub fn distance(result: u64, target: i64) -> u64 {
    match u64::try_from(target) {
        Ok(target) => result.abs_diff(target),
        Err(_) => result.saturating_add(target.unsigned_abs()),
    }
}

/// Running minimum over calculations, keeping every one tied for the best diff.
///
/// Starts at the target's own magnitude, the distance reached with no numbers.
#[derive(Debug, Clone)]
pub struct BestResults {
    target: i64,
    difference: u64,
    results: Vec<Calculation>,
}

impl BestResults {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            difference: target.unsigned_abs(),
            results: Vec::new(),
        }
    }

    pub fn observe(&mut self, calculation: &Calculation) {
        let diff = distance(calculation.result(), self.target);
        if diff < self.difference {
            self.difference = diff;
            self.results.clear();
            self.results.push(calculation.clone());
        } else if diff == self.difference {
            self.results.push(calculation.clone());
        }
    }

    pub fn difference(&self) -> u64 {
        self.difference
    }

    pub fn into_solution(self) -> Solution {
        Solution::new(self.target, self.difference, self.results)
    }
}

/// Walks the table in creation order, so results using fewer numbers come first.
pub fn scan(table: &DependencyTable, target: i64) -> Solution {
    let best = table.walk().fold(BestResults::new(target), |mut best, calculation| {
        best.observe(calculation);
        best
    });

    debug!(
        "Closest difference to {} is {} with {} results",
        target,
        best.difference(),
        best.results.len()
    );
    best.into_solution()
}
