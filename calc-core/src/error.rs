use std::{error::Error as StdError, sync::Arc};

use itertools::Itertools;
use thiserror::Error;

pub type Result<T, E = CalcError> = std::result::Result<T, E>;

/// A failure produced while evaluating a calculation.
///
/// Combinators that stop at the first failure return it unchanged, while
/// combinators that evaluate all their operands wrap every failure into an
/// [`ErrorAggregate`]. Use [`CalcError::causes`] to tell the two apart.
#[derive(Debug, Clone, Error)]
pub enum CalcError {
    #[error("{0}")]
    Message(String),

    #[error("{0}")]
    External(Arc<dyn StdError + Send + Sync>),

    #[error("integer overflow in {0}")]
    Overflow(&'static str),

    #[error(transparent)]
    Aggregate(#[from] ErrorAggregate),
}

impl CalcError {
    pub fn msg(message: impl Into<String>) -> Self {
        CalcError::Message(message.into())
    }

    pub fn external(err: impl StdError + Send + Sync + 'static) -> Self {
        CalcError::External(Arc::new(err))
    }

    /// The underlying failures, if this is an aggregate.
    pub fn causes(&self) -> Option<&[CalcError]> {
        match self {
            CalcError::Aggregate(aggregate) => Some(aggregate.causes()),
            _ => None,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, CalcError::Aggregate(_))
    }
}

impl From<String> for CalcError {
    fn from(message: String) -> Self {
        CalcError::Message(message)
    }
}

impl From<&str> for CalcError {
    fn from(message: &str) -> Self {
        CalcError::Message(message.to_owned())
    }
}

/// An ordered, non-empty collection of failures, in the order they were
/// detected.
#[derive(Debug, Clone, Error)]
#[error("multiple errors: {}", .causes.iter().join("; "))]
pub struct ErrorAggregate {
    causes: Vec<CalcError>,
}

impl ErrorAggregate {
    /// Returns `None` when there is nothing to aggregate.
    pub fn from_failures(failures: impl IntoIterator<Item = CalcError>) -> Option<Self> {
        let causes: Vec<CalcError> = failures.into_iter().collect();
        (!causes.is_empty()).then_some(ErrorAggregate { causes })
    }

    pub fn causes(&self) -> &[CalcError] {
        &self.causes
    }

    pub fn len(&self) -> usize {
        self.causes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    pub fn into_causes(self) -> Vec<CalcError> {
        self.causes
    }
}

impl IntoIterator for ErrorAggregate {
    type Item = CalcError;
    type IntoIter = std::vec::IntoIter<CalcError>;

    fn into_iter(self) -> Self::IntoIter {
        self.causes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorAggregate {
    type Item = &'a CalcError;
    type IntoIter = std::slice::Iter<'a, CalcError>;

    fn into_iter(self) -> Self::IntoIter {
        self.causes.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct Disk;

    impl fmt::Display for Disk {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "disk on fire")
        }
    }

    impl StdError for Disk {}

    #[test]
    fn empty_aggregate_is_none() {
        assert!(ErrorAggregate::from_failures(Vec::new()).is_none());
    }

    #[test]
    fn aggregate_renders_in_detection_order() {
        let aggregate =
            ErrorAggregate::from_failures(["first".into(), CalcError::external(Disk), "last".into()])
                .unwrap();

        assert_eq!(aggregate.len(), 3);
        assert_eq!(
            aggregate.to_string(),
            "multiple errors: first; disk on fire; last"
        );
    }

    #[test]
    fn single_cause_stays_an_aggregate() {
        let err: CalcError = ErrorAggregate::from_failures([CalcError::msg("alone")])
            .unwrap()
            .into();

        assert!(err.is_aggregate());
        assert_eq!(err.causes().map(<[_]>::len), Some(1));
        assert_ne!(err.to_string(), CalcError::msg("alone").to_string());
    }

    #[test]
    fn single_failures_expose_no_causes() {
        assert!(CalcError::msg("plain").causes().is_none());
        assert!(CalcError::Overflow("addition").causes().is_none());
        assert_eq!(
            CalcError::Overflow("addition").to_string(),
            "integer overflow in addition"
        );
    }
}
