//! Expression trees and their rendering

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
