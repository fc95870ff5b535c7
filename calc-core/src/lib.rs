#![warn(clippy::all, rust_2018_idioms)]

//! Deferred boolean and integer calculations.
//!
//! Calculations are composed into trees and evaluated on demand with
//! [`Calculation::evaluate`]. Nothing is cached, so a tree reading a
//! [`Variable`] always sees its current value.
//!
//! Every combinator has a fixed failure policy. [`Not`], [`Signum`],
//! [`Conditional`] and the initial value and reducing step of [`ReduceLeft`]
//! stop at the first failure and return it unchanged. [`Equals`],
//! [`BinaryOp`], [`Sum`], [`Product`] and the operands of [`ReduceLeft`] are
//! all evaluated regardless, and their failures are returned together as an
//! [`ErrorAggregate`].

pub mod arith;
pub mod calculation;
pub mod error;
pub mod failing;
pub mod fold;
pub mod leaf;
pub mod logic;

#[cfg(test)]
mod test_utils;

pub use self::{
    arith::{BinaryOp, Product, Signum, Sum, checked_product, checked_sum, difference},
    calculation::{Calc, Calculation, CalculationExt, Value},
    error::{CalcError, ErrorAggregate, Result},
    failing::Failing,
    fold::{ReduceLeft, Reducer},
    leaf::{Constant, Variable},
    logic::{Conditional, Equals, Not},
};
