use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Bare numbers never need parentheses, compound operands always do
        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            if expr.is_number() {
                write!(f, "{}", expr)
            } else {
                write!(f, "({})", expr)
            }
        }

        fn write_binary(
            f: &mut fmt::Formatter,
            left: &Expression,
            operator: Operator,
            right: &Expression,
        ) -> fmt::Result {
            write_operand(f, left)?;
            write!(f, " {} ", operator)?;
            write_operand(f, right)
        }

        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Add(l, r) => write_binary(f, l, Operator::Add, r),
            Expression::Sub(l, r) => write_binary(f, l, Operator::Sub, r),
            Expression::Mul(l, r) => write_binary(f, l, Operator::Mul, r),
            Expression::Div(l, r) => write_binary(f, l, Operator::Div, r),
        }
    }
}
