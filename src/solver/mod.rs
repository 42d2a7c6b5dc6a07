mod calculation;
mod engine;
mod errors;
mod scanner;
mod solution;
mod table;

pub use calculation::{Calculation, apply};
pub use engine::{CountdownSolver, SolverConfig};
pub use errors::SolverError;
pub use scanner::{BestResults, distance, scan};
pub use solution::Solution;
pub use table::{DependencyTable, Group, GroupId, Partition};
