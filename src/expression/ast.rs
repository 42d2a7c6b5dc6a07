use std::sync::Arc;

/// Arithmetic operators allowed between two intermediate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Generation order of the operators for every pair of operands
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => 'x',
            Operator::Div => '/',
        }
    }
}

/// Represents an expression built from source numbers.
///
/// Subtrees are shared, so combining two existing expressions never copies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(u64),
    Add(Arc<Expression>, Arc<Expression>),
    Sub(Arc<Expression>, Arc<Expression>),
    Mul(Arc<Expression>, Arc<Expression>),
    Div(Arc<Expression>, Arc<Expression>),
}

impl Expression {
    pub fn binary(operator: Operator, left: Arc<Expression>, right: Arc<Expression>) -> Self {
        match operator {
            Operator::Add => Expression::Add(left, right),
            Operator::Sub => Expression::Sub(left, right),
            Operator::Mul => Expression::Mul(left, right),
            Operator::Div => Expression::Div(left, right),
        }
    }

    /// Operator and operands of a compound expression, `None` for a bare number
    pub fn operands(&self) -> Option<(Operator, &Expression, &Expression)> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(l, r) => Some((Operator::Add, l.as_ref(), r.as_ref())),
            Expression::Sub(l, r) => Some((Operator::Sub, l.as_ref(), r.as_ref())),
            Expression::Mul(l, r) => Some((Operator::Mul, l.as_ref(), r.as_ref())),
            Expression::Div(l, r) => Some((Operator::Div, l.as_ref(), r.as_ref())),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Expression::Number(_))
    }

    /// Source numbers used by the expression, left to right
    pub fn numbers(&self) -> Vec<u64> {
        let mut numbers = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr.operands() {
                None => {
                    if let Expression::Number(n) = expr {
                        numbers.push(*n);
                    }
                }
                Some((_, left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        numbers
    }

    pub fn number_count(&self) -> usize {
        match self.operands() {
            None => 1,
            Some((_, left, right)) => left.number_count() + right.number_count(),
        }
    }
}
