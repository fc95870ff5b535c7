use delegate::delegate;
use derivative::Derivative;

use crate::{
    calculation::{Calc, Calculation, CalculationExt, Value, evaluate_both},
    error::{CalcError, Result},
    fold::{ReduceLeft, Reducer},
    leaf::Constant,
};

/// Applies a pure function to two operands.
///
/// Both operands are always evaluated and failures are aggregated, as for
/// [`Equals`](crate::Equals).
#[derive(Derivative)]
#[derivative(Clone(bound = "F: Clone"))]
pub struct BinaryOp<T: Value, F> {
    op: F,
    lhs: Calc<T>,
    rhs: Calc<T>,
}

impl<T: Value, F: Fn(T, T) -> T> BinaryOp<T, F> {
    pub fn new(op: F, lhs: Calc<T>, rhs: Calc<T>) -> Self {
        Self { op, lhs, rhs }
    }
}

impl<T: Value, F: Fn(T, T) -> T> Calculation<T> for BinaryOp<T, F> {
    fn evaluate(&self) -> Result<T> {
        let (lhs, rhs) = evaluate_both(&self.lhs, &self.rhs)?;
        Ok((self.op)(lhs, rhs))
    }
}

/// `lhs - rhs`, wrapping on overflow.
pub fn difference(lhs: Calc<i64>, rhs: Calc<i64>) -> BinaryOp<i64, fn(i64, i64) -> i64> {
    BinaryOp::new(i64::wrapping_sub as fn(i64, i64) -> i64, lhs, rhs)
}

/// `-1`, `0` or `1` depending on the sign of the operand. A failing operand is
/// returned unchanged.
#[derive(Clone)]
pub struct Signum {
    operand: Calc<i64>,
}

impl Signum {
    pub fn new(operand: Calc<i64>) -> Self {
        Self { operand }
    }
}

impl Calculation<i64> for Signum {
    fn evaluate(&self) -> Result<i64> {
        let value = self
            .operand
            .evaluate()
            .inspect_err(|_| tracing::trace!("signum operand failed"))?;
        Ok(value.signum())
    }
}

fn add(acc: i64, next: i64) -> Result<i64> {
    Ok(acc.wrapping_add(next))
}

fn multiply(acc: i64, next: i64) -> Result<i64> {
    Ok(acc.wrapping_mul(next))
}

fn checked_add(acc: i64, next: i64) -> Result<i64> {
    acc.checked_add(next).ok_or(CalcError::Overflow("addition"))
}

fn checked_multiply(acc: i64, next: i64) -> Result<i64> {
    acc.checked_mul(next).ok_or(CalcError::Overflow("multiplication"))
}

/// Sum of all operands, `0` when there are none. Overflow wraps.
///
/// Every operand is evaluated even if some fail; failures are aggregated.
#[derive(Clone)]
pub struct Sum(ReduceLeft<i64, Reducer<i64>>);

impl Sum {
    pub fn new(operands: impl IntoIterator<Item = Calc<i64>>) -> Self {
        Sum(ReduceLeft::new(add as Reducer<i64>, Constant(0).shared(), operands))
    }
}

impl Calculation<i64> for Sum {
    delegate! {
        to self.0 {
            fn evaluate(&self) -> Result<i64>;
        }
    }
}

/// Product of all operands, `1` when there are none. Overflow wraps.
///
/// Every operand is evaluated even if some fail; failures are aggregated.
#[derive(Clone)]
pub struct Product(ReduceLeft<i64, Reducer<i64>>);

impl Product {
    pub fn new(operands: impl IntoIterator<Item = Calc<i64>>) -> Self {
        Product(ReduceLeft::new(multiply as Reducer<i64>, Constant(1).shared(), operands))
    }
}

impl Calculation<i64> for Product {
    delegate! {
        to self.0 {
            fn evaluate(&self) -> Result<i64>;
        }
    }
}

/// Like [`Sum`], but fails with [`CalcError::Overflow`] instead of wrapping.
pub fn checked_sum(
    operands: impl IntoIterator<Item = Calc<i64>>,
) -> ReduceLeft<i64, Reducer<i64>> {
    ReduceLeft::new(checked_add as Reducer<i64>, Constant(0).shared(), operands)
}

/// Like [`Product`], but fails with [`CalcError::Overflow`] instead of wrapping.
pub fn checked_product(
    operands: impl IntoIterator<Item = Calc<i64>>,
) -> ReduceLeft<i64, Reducer<i64>> {
    ReduceLeft::new(checked_multiply as Reducer<i64>, Constant(1).shared(), operands)
}
