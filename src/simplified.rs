//! Rational values kept in lowest terms.

use core::fmt;

use num_traits::ToPrimitive;
use tracing::trace;

use crate::error::RatioError;
use crate::ratio_trait::{RatioInteger, Rational};

/// Greatest common divisor by Euclidean remainder reduction.
///
/// # Errors
///
/// [`RatioError::GcdDomain`] if `a <= 0` or `b < 0`.
///
/// # Examples
///
/// ```
/// use exact_ratio::gcd;
///
/// assert_eq!(gcd(10, 4), Ok(2));
/// assert_eq!(gcd(7, 0), Ok(7));
/// assert!(gcd(0, 4).is_err());
/// ```
pub fn gcd<T: RatioInteger>(a: T, b: T) -> Result<T, RatioError> {
    if a <= T::ZERO || b < T::ZERO {
        trace!(?a, ?b, "gcd operands out of range");
        return Err(RatioError::GcdDomain);
    }

    let (mut a, mut b) = (a, b);
    while b != T::ZERO {
        let rem = a % b;
        a = b;
        b = rem;
    }
    Ok(a)
}

/// Reduces a `(numerator, denominator)` pair to lowest terms.
///
/// A zero numerator collapses to `(0, 1)`, or `(0, -1)` when the denominator
/// is negative. Otherwise both parts are divided by the gcd of their absolute
/// values, which leaves the signs of each part untouched: `simplify(3, -4)` is
/// `(3, -4)`.
///
/// # Errors
///
/// [`RatioError::ZeroDenominator`] if `denominator` is zero.
/// [`RatioError::GcdDomain`] if either non-zero part is `T::MIN`, whose
/// absolute value does not fit in `T`.
///
/// # Examples
///
/// ```
/// use exact_ratio::simplify;
///
/// assert_eq!(simplify(10, 100), Ok((1, 10)));
/// assert_eq!(simplify(0, 10), Ok((0, 1)));
/// assert_eq!(simplify(0, -10), Ok((0, -1)));
/// assert_eq!(simplify(6, -9), Ok((2, -3)));
/// ```
pub fn simplify<T: RatioInteger>(numerator: T, denominator: T) -> Result<(T, T), RatioError> {
    if denominator == T::ZERO {
        trace!(?numerator, "cannot simplify a zero denominator");
        return Err(RatioError::ZeroDenominator);
    }

    if numerator == T::ZERO {
        return Ok(if denominator > T::ZERO {
            (T::ZERO, T::ONE)
        } else {
            (T::ZERO, -T::ONE)
        });
    }

    let g = gcd(numerator.wrapping_abs(), denominator.wrapping_abs())?;
    Ok((numerator / g, denominator / g))
}

/// A rational number stored in lowest terms.
///
/// # Invariants
///
/// - The denominator is never zero.
/// - A non-zero numerator shares no factor greater than 1 with the
///   denominator.
/// - The sign of each part is kept as supplied: `3/-4` is stored as
///   `(3, -4)` and `-3/-4` as `(-3, -4)`. Only [`Display`](fmt::Display)
///   folds the sign into the numerator.
/// - A zero numerator keeps its denominator verbatim (`0/7` stays `(0, 7)`).
///
/// Equality is structural: two values are equal when their stored numerators
/// and denominators are equal.
///
/// # Examples
///
/// ```
/// use exact_ratio::{Rational, SimplifiedRational};
///
/// let r = SimplifiedRational::new(6, 8)?;
/// assert_eq!(r.numerator(), 3);
/// assert_eq!(r.denominator(), 4);
///
/// assert_eq!(SimplifiedRational::new(3, -4)?.to_string(), "-3/4");
/// assert_eq!(SimplifiedRational::new(-3, -4)?.to_string(), "3/4");
/// # Ok::<(), exact_ratio::RatioError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "(T, T)",
        into = "(T, T)",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct SimplifiedRational<T: RatioInteger> {
    numer: T,
    denom: T,
}

impl<T: RatioInteger> SimplifiedRational<T> {
    /// Create a rational reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// [`RatioError::ZeroDenominator`] if `denominator` is zero, and
    /// [`RatioError::GcdDomain`] if a part of a non-zero value is `T::MIN`.
    pub fn new(numerator: T, denominator: T) -> Result<Self, RatioError> {
        if denominator == T::ZERO {
            trace!(?numerator, "rejected zero denominator");
            return Err(RatioError::ZeroDenominator);
        }

        if numerator == T::ZERO {
            return Ok(Self {
                numer: numerator,
                denom: denominator,
            });
        }

        let (numer, denom) = simplify(numerator, denominator)?;
        Ok(Self { numer, denom })
    }

    /// Create a rational representing 0 (`0/1`).
    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            numer: T::ZERO,
            denom: T::ONE,
        }
    }

    /// Create a rational representing 1 (`1/1`).
    #[inline(always)]
    pub fn one() -> Self {
        Self {
            numer: T::ONE,
            denom: T::ONE,
        }
    }

    /// Check if the rational is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer == T::ZERO
    }

    /// Check if the value is strictly positive, whichever part carries the sign.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && (self.numer < T::ZERO) == (self.denom < T::ZERO)
    }

    /// Check if the value is strictly negative, whichever part carries the sign.
    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && (self.numer < T::ZERO) != (self.denom < T::ZERO)
    }

    /// Check if the rational represents an integer.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.is_zero() || self.denom == T::ONE || self.denom == -T::ONE
    }

    /// Approximate conversion to f64.
    ///
    /// Returns `None` only if a part cannot be represented as `f64`.
    ///
    /// ```
    /// use exact_ratio::SimplifiedRational;
    ///
    /// let r = SimplifiedRational::new(3, -4)?;
    /// assert_eq!(r.to_f64(), Some(-0.75));
    /// # Ok::<(), exact_ratio::RatioError>(())
    /// ```
    pub fn to_f64(&self) -> Option<f64> {
        Some(self.numer.to_f64()? / self.denom.to_f64()?)
    }

    /// Consume the value and return the stored `(numerator, denominator)`.
    #[inline]
    pub fn into_pair(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

impl<T: RatioInteger> Rational for SimplifiedRational<T> {
    type Int = T;

    #[inline(always)]
    fn numerator(&self) -> T {
        self.numer
    }

    #[inline(always)]
    fn denominator(&self) -> T {
        self.denom
    }

    fn construct(numerator: T, denominator: T) -> Result<Self, RatioError> {
        Self::new(numerator, denominator)
    }
}

impl<T: RatioInteger> fmt::Display for SimplifiedRational<T> {
    /// Writes `numerator/denominator` with the sign moved onto the numerator.
    ///
    /// Both parts are negated with wrapping, so a `T::MIN` denominator is
    /// written unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom < T::ZERO {
            write!(
                f,
                "{}/{}",
                self.numer.wrapping_neg(),
                self.denom.wrapping_neg()
            )
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T: RatioInteger> Default for SimplifiedRational<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RatioInteger> From<T> for SimplifiedRational<T> {
    /// `n` becomes `n/1`, already in lowest terms.
    fn from(n: T) -> Self {
        Self {
            numer: n,
            denom: T::ONE,
        }
    }
}

impl<T: RatioInteger> TryFrom<(T, T)> for SimplifiedRational<T> {
    type Error = RatioError;

    fn try_from((numerator, denominator): (T, T)) -> Result<Self, RatioError> {
        Self::new(numerator, denominator)
    }
}

impl<T: RatioInteger> From<SimplifiedRational<T>> for (T, T) {
    fn from(r: SimplifiedRational<T>) -> Self {
        r.into_pair()
    }
}
