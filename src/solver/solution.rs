use std::fmt;

use crate::solver::calculation::Calculation;

/// Closest calculations found for a target, ordered fewer numbers first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    target: i64,
    difference: u64,
    results: Vec<Calculation>,
}

impl Solution {
    pub fn new(target: i64, difference: u64, results: Vec<Calculation>) -> Self {
        Self {
            target,
            difference,
            results,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Distance between the target and every result
    pub fn difference(&self) -> u64 {
        self.difference
    }

    pub fn results(&self) -> &[Calculation] {
        &self.results
    }

    pub fn is_exact(&self) -> bool {
        self.difference == 0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "The closest results differ from {} by {}. They are:",
            self.target, self.difference
        )?;
        writeln!(f)?;
        for calculation in &self.results {
            writeln!(f, "{}", calculation)?;
        }
        Ok(())
    }
}
