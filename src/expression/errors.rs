use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Intermediate result is not positive")]
    NonPositiveResult,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division of {dividend} by {divisor} is not exact")]
    InexactDivision { dividend: u64, divisor: u64 },
    #[error("Intermediate result overflows")]
    Overflow,
}
