use std::{fmt::Debug, rc::Rc};

use either::Either;
use itertools::Itertools;

use crate::error::{CalcError, ErrorAggregate, Result};

mod sealed {
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for i64 {}
}

/// A result type of a calculation: `bool` or `i64`.
///
/// [`Default`] gives the zero value, which is what an unset [`Variable`](crate::Variable) holds.
pub trait Value: sealed::Sealed + Copy + Default + Debug + PartialEq + 'static {}

impl Value for bool {}
impl Value for i64 {}

/// A deferred computation producing a `T` or a failure.
///
/// Nothing is cached: every call to [`evaluate`](Calculation::evaluate)
/// recomputes the value from the current state of its inputs.
pub trait Calculation<T: Value> {
    fn evaluate(&self) -> Result<T>;
}

/// Shared handle to a calculation, used to hold operands.
pub type Calc<T> = Rc<dyn Calculation<T>>;

impl<T: Value, C: Calculation<T> + ?Sized> Calculation<T> for Rc<C> {
    fn evaluate(&self) -> Result<T> {
        (**self).evaluate()
    }
}

pub trait CalculationExt<T: Value>: Calculation<T> + Sized + 'static {
    /// Moves the calculation behind a shared [`Calc`] handle.
    fn shared(self) -> Calc<T> {
        Rc::new(self)
    }
}

impl<T: Value, C: Calculation<T> + 'static> CalculationExt<T> for C {}

/// Evaluates every operand in order, even after a failure.
///
/// All failures are returned together as an [`ErrorAggregate`].
pub(crate) fn evaluate_all<'a, T: Value>(
    operands: impl IntoIterator<Item = &'a Calc<T>>,
) -> Result<Vec<T>> {
    let (failures, values): (Vec<CalcError>, Vec<T>) = operands
        .into_iter()
        .partition_map(|operand| match operand.evaluate() {
            Ok(value) => Either::Right(value),
            Err(err) => Either::Left(err),
        });

    check(failures)?;
    Ok(values)
}

/// Two-operand form of [`evaluate_all`], for operands of different types.
pub(crate) fn evaluate_both<A: Value, B: Value>(lhs: &Calc<A>, rhs: &Calc<B>) -> Result<(A, B)> {
    let (lhs, rhs) = (lhs.evaluate(), rhs.evaluate());
    let failures = [lhs.as_ref().err(), rhs.as_ref().err()];

    check(failures.into_iter().flatten().cloned())?;
    Ok((lhs?, rhs?))
}

fn check(failures: impl IntoIterator<Item = CalcError>) -> Result<()> {
    match ErrorAggregate::from_failures(failures) {
        Some(aggregate) => {
            tracing::debug!(failures = aggregate.len(), "aggregating operand failures");
            Err(aggregate.into())
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;
    use crate::{Constant, Failing, test_utils::counted};

    #[test]
    fn evaluate_all_keeps_going_after_failures() {
        let (first, first_count) = counted(Failing::msg("one").shared());
        let (second, second_count) = counted(Constant(4_i64).shared());
        let (third, third_count) = counted(Failing::msg("three").shared());

        let err = evaluate_all(&[first, second, third]).unwrap_err();

        assert_eq!(
            (first_count.get(), second_count.get(), third_count.get()),
            (1, 1, 1)
        );
        assert_eq!(err.to_string(), "multiple errors: one; three");
    }

    #[test]
    fn evaluate_both_in_operand_order() -> Result<()> {
        let (lhs, rhs) = evaluate_both(&Constant(7_i64).shared(), &Constant(true).shared())?;

        assert_eq!((lhs, rhs), (7, true));
        Ok(())
    }

    #[test]
    fn evaluate_all_of_nothing() {
        assert!(evaluate_all::<i64>(&[]).is_ok_and(|values| values.is_empty()));
    }

    #[test]
    fn evaluate_both_reports_one_failure_as_aggregate() {
        let err = evaluate_both::<i64, bool>(
            &Constant(1_i64).shared(),
            &Failing::msg("rhs").shared(),
        )
        .unwrap_err();

        assert_eq!(err.causes().map(<[_]>::len), Some(1));
    }
}
