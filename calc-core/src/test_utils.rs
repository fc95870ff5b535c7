use std::{cell::Cell, rc::Rc};

use crate::{
    calculation::{Calc, Calculation, CalculationExt, Value},
    error::{CalcError, Result},
    leaf::Constant,
};

/// Records how many times the wrapped calculation was evaluated.
struct Counted<T: Value> {
    inner: Calc<T>,
    count: Rc<Cell<usize>>,
}

impl<T: Value> Calculation<T> for Counted<T> {
    fn evaluate(&self) -> Result<T> {
        self.count.set(self.count.get() + 1);
        self.inner.evaluate()
    }
}

/// Wraps `inner` and returns a handle to its evaluation count.
pub(crate) fn counted<T: Value>(inner: Calc<T>) -> (Calc<T>, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let counted = Counted {
        inner,
        count: count.clone(),
    }
    .shared();
    (counted, count)
}

pub(crate) fn constants(values: &[i64]) -> Vec<Calc<i64>> {
    values
        .iter()
        .map(|&value| Constant(value).shared())
        .collect()
}

pub(crate) fn error_contains(err: &CalcError, needles: &[&str]) {
    let message = err.to_string();
    for needle in needles {
        assert!(
            message.contains(needle),
            "expected error {message:?} to contain {needle:?}"
        );
    }
}
