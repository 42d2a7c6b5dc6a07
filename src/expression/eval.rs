use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Recomputes the expression, requiring every intermediate value to be a
    /// positive integer.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - A number or a subtraction is not positive
    /// - A divisor is zero or does not divide exactly
    /// - An addition or multiplication overflows
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => l
                .evaluate()?
                .checked_add(r.evaluate()?)
                .ok_or(ExpressionError::Overflow),
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if left > right {
                    Ok(left - right)
                } else {
                    Err(ExpressionError::NonPositiveResult)
                }
            }
            Expression::Mul(l, r) => l
                .evaluate()?
                .checked_mul(r.evaluate()?)
                .ok_or(ExpressionError::Overflow),
            Expression::Div(l, r) => {
                let dividend = l.evaluate()?;
                let divisor = r.evaluate()?;
                if divisor == 0 {
                    Err(ExpressionError::DivisionByZero)
                } else if dividend % divisor != 0 {
                    Err(ExpressionError::InexactDivision { dividend, divisor })
                } else {
                    Ok(dividend / divisor)
                }
            }
        };

        match result {
            Ok(0) => Err(ExpressionError::NonPositiveResult),
            Ok(value) => Ok(value),
            Err(e) => {
                trace!("Evaluation of {} failed: {}", self, e);
                Err(e)
            }
        }
    }
}
