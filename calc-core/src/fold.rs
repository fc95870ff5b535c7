use derivative::Derivative;

use crate::{
    calculation::{Calc, Calculation, Value, evaluate_all},
    error::Result,
};

/// A reducing step that is a plain function pointer, as used by the built-in folds.
pub type Reducer<T> = fn(T, T) -> Result<T>;

/// Generalized left fold over a list of operands.
///
/// Evaluation proceeds in three phases:
///
/// 1. The initial value is evaluated. If it fails, that failure is returned
///    unchanged and no operand is evaluated.
/// 2. Every operand is evaluated in order, regardless of earlier failures. If
///    any failed, all failures are returned as one aggregate and `reduce` is
///    never called.
/// 3. The values are folded left to right starting from the initial value.
///    The first failure of `reduce` is returned as-is and folding stops.
#[derive(Derivative)]
#[derivative(Clone(bound = "F: Clone"))]
pub struct ReduceLeft<T: Value, F> {
    reduce: F,
    initial: Calc<T>,
    operands: Vec<Calc<T>>,
}

impl<T: Value, F: Fn(T, T) -> Result<T>> ReduceLeft<T, F> {
    pub fn new(reduce: F, initial: Calc<T>, operands: impl IntoIterator<Item = Calc<T>>) -> Self {
        Self {
            reduce,
            initial,
            operands: operands.into_iter().collect(),
        }
    }

    pub fn operands(&self) -> &[Calc<T>] {
        &self.operands
    }
}

impl<T: Value, F: Fn(T, T) -> Result<T>> Calculation<T> for ReduceLeft<T, F> {
    fn evaluate(&self) -> Result<T> {
        let initial = self.initial.evaluate().inspect_err(|_| {
            tracing::trace!(
                operands = self.operands.len(),
                "initial value failed, skipping operands"
            );
        })?;

        let values = evaluate_all(&self.operands)?;

        values
            .into_iter()
            .enumerate()
            .try_fold(initial, |acc, (step, next)| {
                (self.reduce)(acc, next)
                    .inspect_err(|err| tracing::debug!(step, %err, "reducing step failed"))
            })
    }
}
