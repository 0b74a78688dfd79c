//! Trait system for generic rational arithmetic over primitive signed integers.
//!
//! # Architecture
//!
//! The trait system uses two levels:
//!
//! - [`RatioInteger`]: the signed integer types a rational can be built from
//! - [`Rational`]: the rational capability itself
//!
//! An implementor of [`Rational`] supplies only the two accessors and the
//! primitive [`construct`](Rational::construct). Negation, inversion and the
//! four binary operations are provided on top of those three, so every
//! implementor gets the same arithmetic and keeps its own normalization rules
//! (whatever `construct` does to the raw pair is what the result looks like).
//!
//! # Example
//!
//! ```
//! use exact_ratio::{Rational, SimplifiedRational};
//!
//! let half = SimplifiedRational::new(1, 2)?;
//! let third = SimplifiedRational::new(1, 3)?;
//!
//! let sum = half.add(Some(&third))?;
//! assert_eq!(sum, SimplifiedRational::new(5, 6)?);
//! # Ok::<(), exact_ratio::RatioError>(())
//! ```

use core::fmt::{Debug, Display};
use core::hash::Hash;

use num_traits::{PrimInt, Signed, WrappingNeg};
use tracing::trace;

use crate::error::RatioError;

/// Integer type suitable for use as the numerator and denominator of a
/// rational.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`. Arithmetic
/// uses the primitive operators, so overflow panics in debug builds and wraps
/// in release builds.
pub trait RatioInteger:
    PrimInt + Signed + WrappingNeg + Debug + Display + Hash + 'static
{
    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// Absolute value that wraps instead of overflowing: `MIN` maps to itself.
    #[inline]
    fn wrapping_abs(self) -> Self {
        if self < Self::ZERO {
            self.wrapping_neg()
        } else {
            self
        }
    }
}

/// Macro to implement RatioInteger for primitive signed integers.
macro_rules! impl_ratio_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl RatioInteger for $type {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_ratio_integer!(i8, i16, i32, i64, i128, isize);

/// The rational capability.
///
/// Concrete types implement [`numerator`](Rational::numerator),
/// [`denominator`](Rational::denominator) and
/// [`construct`](Rational::construct); the arithmetic below is derived from
/// those alone. Each operation computes the raw cross-multiplied pair and
/// hands it to `Self::construct`, so the result is always of the receiver's
/// own type and follows its normalization rules.
///
/// The binary operations take their operand as `Option<&R>` where `R` is any
/// rational over the same integer type. Passing `None` fails with
/// [`RatioError::MissingOperand`].
pub trait Rational: Sized {
    /// Integer type of the numerator and denominator.
    type Int: RatioInteger;

    /// The numerator of this rational.
    fn numerator(&self) -> Self::Int;

    /// The denominator of this rational. Never zero.
    fn denominator(&self) -> Self::Int;

    /// Builds a new value of the implementing type from a raw pair.
    ///
    /// # Errors
    ///
    /// [`RatioError::ZeroDenominator`] if `denominator` is zero.
    fn construct(numerator: Self::Int, denominator: Self::Int) -> Result<Self, RatioError>;

    /// `negate(n / d) = -n / d`
    fn negate(&self) -> Result<Self, RatioError> {
        Self::construct(-self.numerator(), self.denominator())
    }

    /// `invert(n / d) = d / n`
    ///
    /// # Errors
    ///
    /// [`RatioError::InvertZero`] (a state error) if the numerator is zero.
    fn invert(&self) -> Result<Self, RatioError> {
        let numerator = self.numerator();
        let denominator = self.denominator();
        if numerator == <Self::Int as RatioInteger>::ZERO {
            trace!(?denominator, "refusing to invert a zero-valued rational");
            return Err(RatioError::InvertZero);
        }
        Self::construct(denominator, numerator)
    }

    /// `(n1 / d1) + (n2 / d2) = ((n1 * d2) + (n2 * d1)) / (d1 * d2)`
    fn add<R>(&self, that: Option<&R>) -> Result<Self, RatioError>
    where
        R: Rational<Int = Self::Int>,
    {
        let [n1, d1, n2, d2] = operands(self, that, "add")?;
        Self::construct(n1 * d2 + n2 * d1, d1 * d2)
    }

    /// `(n1 / d1) - (n2 / d2) = ((n1 * d2) - (n2 * d1)) / (d1 * d2)`
    fn sub<R>(&self, that: Option<&R>) -> Result<Self, RatioError>
    where
        R: Rational<Int = Self::Int>,
    {
        let [n1, d1, n2, d2] = operands(self, that, "sub")?;
        Self::construct(n1 * d2 - n2 * d1, d1 * d2)
    }

    /// `(n1 / d1) * (n2 / d2) = (n1 * n2) / (d1 * d2)`
    fn mul<R>(&self, that: Option<&R>) -> Result<Self, RatioError>
    where
        R: Rational<Int = Self::Int>,
    {
        let [n1, d1, n2, d2] = operands(self, that, "mul")?;
        Self::construct(n1 * n2, d1 * d2)
    }

    /// `(n1 / d1) / (n2 / d2) = (n1 * d2) / (d1 * n2)`
    ///
    /// # Errors
    ///
    /// Dividing by a zero-valued rational yields a zero raw denominator, which
    /// `construct` rejects with [`RatioError::ZeroDenominator`].
    fn div<R>(&self, that: Option<&R>) -> Result<Self, RatioError>
    where
        R: Rational<Int = Self::Int>,
    {
        let [n1, d1, n2, d2] = operands(self, that, "div")?;
        Self::construct(n1 * d2, d1 * n2)
    }
}

/// Unpacks `[n1, d1, n2, d2]` for a binary operation.
#[inline]
fn operands<L, R>(
    this: &L,
    that: Option<&R>,
    op: &'static str,
) -> Result<[L::Int; 4], RatioError>
where
    L: Rational,
    R: Rational<Int = L::Int>,
{
    let Some(that) = that else {
        trace!(op, "binary operation called without an operand");
        return Err(RatioError::MissingOperand(op));
    };
    Ok([
        this.numerator(),
        this.denominator(),
        that.numerator(),
        that.denominator(),
    ])
}
