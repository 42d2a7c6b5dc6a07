//! Combinatorial helpers shared by the solver

mod binomial;
mod complement;
mod errors;
mod validation;

pub use binomial::{HalfBinomials, half_binomial};
pub use complement::complement;
pub use errors::UtilsError;
pub use validation::validate_numbers;
