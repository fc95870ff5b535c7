use crate::{
    calculation::{Calculation, Value},
    error::{CalcError, Result},
};

/// A calculation of any result type that always fails with the given error.
///
/// Useful for exercising the failure paths of combinators in tests.
#[derive(Debug, Clone)]
pub struct Failing {
    error: CalcError,
}

impl Failing {
    pub fn new(error: impl Into<CalcError>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(CalcError::msg(message))
    }

    pub fn error(&self) -> &CalcError {
        &self.error
    }
}

impl<T: Value> Calculation<T> for Failing {
    fn evaluate(&self) -> Result<T> {
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fails_for_both_result_types() {
        let failing = Failing::new("broken");

        let as_bool: Result<bool> = failing.evaluate();
        let as_int: Result<i64> = failing.evaluate();

        assert_eq!(as_bool.unwrap_err().to_string(), "broken");
        assert_eq!(as_int.unwrap_err().to_string(), "broken");
        assert_eq!(failing.error().to_string(), "broken");
    }

    #[test]
    fn fails_on_every_evaluation() {
        let failing = Failing::new(CalcError::Overflow("addition"));

        for _ in 0..3 {
            let result: Result<i64> = failing.evaluate();
            assert!(matches!(result, Err(CalcError::Overflow("addition"))));
        }
    }
}
