//! Error types for rational construction and arithmetic.

use thiserror::Error;

/// Broad classification of a [`RatioError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input violated a precondition of the operation.
    Argument,
    /// The operation is not defined for the receiver's current value.
    State,
}

/// Errors signaled by rational construction and arithmetic.
///
/// Nothing in this crate recovers from these: each one is returned to the
/// immediate caller exactly as raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum RatioError {
    /// A denominator of zero was supplied, directly or as the result of an
    /// arithmetic formula (e.g. dividing by a zero-valued rational).
    #[error("denominator must not be zero")]
    ZeroDenominator,

    /// A binary operation was called without an operand.
    #[error("missing operand for `{0}`")]
    MissingOperand(&'static str),

    /// `gcd` was called with `a <= 0` or `b < 0`.
    #[error("gcd requires a > 0 and b >= 0")]
    GcdDomain,

    /// Attempted to invert a rational whose numerator is zero.
    #[error("cannot invert a rational with a zero numerator")]
    InvertZero,
}

impl RatioError {
    /// Returns whether this is an argument error or a state error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RatioError::ZeroDenominator
            | RatioError::MissingOperand(_)
            | RatioError::GcdDomain => ErrorKind::Argument,
            RatioError::InvertZero => ErrorKind::State,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::Argument`.
    #[inline]
    pub fn is_argument(&self) -> bool {
        self.kind() == ErrorKind::Argument
    }

    /// Shorthand for `self.kind() == ErrorKind::State`.
    #[inline]
    pub fn is_state(&self) -> bool {
        self.kind() == ErrorKind::State
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(RatioError::ZeroDenominator.kind(), ErrorKind::Argument);
        assert_eq!(RatioError::MissingOperand("add").kind(), ErrorKind::Argument);
        assert_eq!(RatioError::GcdDomain.kind(), ErrorKind::Argument);
        assert_eq!(RatioError::InvertZero.kind(), ErrorKind::State);
        assert!(RatioError::InvertZero.is_state());
        assert!(!RatioError::InvertZero.is_argument());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RatioError::MissingOperand("div").to_string(),
            "missing operand for `div`"
        );
        assert_eq!(
            RatioError::ZeroDenominator.to_string(),
            "denominator must not be zero"
        );
    }
}
