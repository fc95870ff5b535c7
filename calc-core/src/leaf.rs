use std::{cell::Cell, rc::Rc};

use derivative::Derivative;
use derive_more::From;

use crate::{
    calculation::{Calculation, Value},
    error::Result,
};

/// A fixed value. Never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, From)]
pub struct Constant<T>(pub T);

impl Constant<bool> {
    pub const TRUE: Self = Constant(true);
    pub const FALSE: Self = Constant(false);
}

impl<T: Value> Calculation<T> for Constant<T> {
    fn evaluate(&self) -> Result<T> {
        Ok(self.0)
    }
}

/// An externally settable cell, read at evaluation time. Never fails.
///
/// Cloning yields another handle to the same cell, so the owner can keep one
/// handle to [`set`](Variable::set) while the graph holds others. The cell is
/// not synchronized.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Default(bound = ""), Debug(bound = ""))]
pub struct Variable<T: Value>(Rc<Cell<T>>);

impl<T: Value> Variable<T> {
    /// Creates a variable holding the zero value of `T`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: T) -> Self {
        Variable(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> T {
        self.0.get()
    }

    pub fn set(&self, value: T) {
        tracing::trace!(?value, "set variable");
        self.0.set(value);
    }
}

impl<T: Value> Calculation<T> for Variable<T> {
    fn evaluate(&self) -> Result<T> {
        Ok(self.get())
    }
}
