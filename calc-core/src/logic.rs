use derivative::Derivative;

use crate::{
    calculation::{Calc, Calculation, Value, evaluate_both},
    error::Result,
};

/// Logical negation. A failing operand is returned unchanged.
#[derive(Clone)]
pub struct Not {
    operand: Calc<bool>,
}

impl Not {
    pub fn new(operand: Calc<bool>) -> Self {
        Self { operand }
    }
}

impl Calculation<bool> for Not {
    fn evaluate(&self) -> Result<bool> {
        let value = self
            .operand
            .evaluate()
            .inspect_err(|_| tracing::trace!("negated operand failed"))?;
        Ok(!value)
    }
}

/// Compares two operands for equality.
///
/// Both operands are always evaluated; any failures come back as one
/// aggregate, first operand first.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Equals<T: Value> {
    lhs: Calc<T>,
    rhs: Calc<T>,
}

impl<T: Value> Equals<T> {
    pub fn new(lhs: Calc<T>, rhs: Calc<T>) -> Self {
        Self { lhs, rhs }
    }
}

impl<T: Value> Calculation<bool> for Equals<T> {
    fn evaluate(&self) -> Result<bool> {
        let (lhs, rhs) = evaluate_both(&self.lhs, &self.rhs)?;
        Ok(lhs == rhs)
    }
}

/// Evaluates `condition`, then exactly one of the two branches.
///
/// A failing condition is returned unchanged and neither branch runs. The
/// branch that was not selected is never evaluated.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Conditional<T: Value> {
    condition: Calc<bool>,
    if_true: Calc<T>,
    if_false: Calc<T>,
}

impl<T: Value> Conditional<T> {
    pub fn new(condition: Calc<bool>, if_true: Calc<T>, if_false: Calc<T>) -> Self {
        Self {
            condition,
            if_true,
            if_false,
        }
    }
}

impl<T: Value> Calculation<T> for Conditional<T> {
    fn evaluate(&self) -> Result<T> {
        let condition = self
            .condition
            .evaluate()
            .inspect_err(|_| tracing::trace!("condition failed, skipping both branches"))?;
        if condition {
            self.if_true.evaluate()
        } else {
            self.if_false.evaluate()
        }
    }
}
