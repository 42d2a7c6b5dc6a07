use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::expression::{Expression, Operator};

/// An expression over some source numbers together with its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    result: u64,
    expression: Arc<Expression>,
}

impl Calculation {
    pub fn singleton(value: u64) -> Self {
        Self {
            result: value,
            expression: Arc::new(Expression::Number(value)),
        }
    }

    pub fn result(&self) -> u64 {
        self.result
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn is_singleton(&self) -> bool {
        self.expression.is_number()
    }

    /// Appends every valid combination of `first` and `second` to `out`.
    ///
    /// The operand with the larger result always goes on the left; on a tie
    /// `first` stays on the left.
    pub fn generate(first: &Calculation, second: &Calculation, out: &mut Vec<Calculation>) {
        let (larger, smaller) = if first.result < second.result {
            (second, first)
        } else {
            (first, second)
        };

        for operator in Operator::ALL {
            if let Some(result) = apply(operator, larger.result, smaller.result) {
                out.push(Calculation {
                    result,
                    expression: Arc::new(Expression::binary(
                        operator,
                        Arc::clone(&larger.expression),
                        Arc::clone(&smaller.expression),
                    )),
                });
            }
        }
    }
}

/// Result of `x <operator> y` for `x >= y`, or `None` when the combination is
/// pruned: zero or negative differences, multiplying or dividing by one,
/// inexact quotients and `u64` overflow.
pub fn apply(operator: Operator, x: u64, y: u64) -> Option<u64> {
    let result = match operator {
        Operator::Add => x.checked_add(y),
        Operator::Sub => return (x > y).then(|| x - y),
        Operator::Mul if x > 1 && y > 1 => x.checked_mul(y),
        Operator::Mul => return None,
        Operator::Div if y > 1 && x % y == 0 => return Some(x / y),
        Operator::Div => return None,
    };

    if result.is_none() {
        trace!("Skipping {} {} {}: overflow", x, operator, y);
    }
    result
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.result, self.expression)
    }
}
