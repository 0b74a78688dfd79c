//! Exact rational arithmetic over fixed-width signed integers.
//!
//! This library provides the [`Rational`] capability, which derives negation,
//! inversion, addition, subtraction, multiplication and division from a
//! numerator accessor, a denominator accessor and a primitive constructor, and
//! [`SimplifiedRational<T>`], a value type that keeps every result in lowest
//! terms.
//!
//! # Features
//!
//! - **Generic over integer width**: `i8` through `i128` and `isize`
//! - **Shared arithmetic**: any type implementing [`Rational`] gets all six
//!   operations for free
//! - **No rounding**: results are exact until the integer type overflows
//! - **Explicit errors**: zero denominators, missing operands and inverting
//!   zero are reported through [`RatioError`] instead of panicking
//! - **Optional serde support** behind the `serde` feature
//!
//! Overflow of the underlying integer is not handled specially: it panics in
//! debug builds and wraps in release builds, exactly like the primitive
//! operators.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use exact_ratio::{Rational, SimplifiedRational};
//!
//! let a = SimplifiedRational::new(1, 2)?;
//! let b = SimplifiedRational::new(1, 3)?;
//!
//! let sum = a.add(Some(&b))?;
//! assert_eq!(sum, SimplifiedRational::new(5, 6)?);
//!
//! let quotient = a.div(Some(&a))?;
//! assert_eq!(quotient, SimplifiedRational::one());
//! # Ok::<(), exact_ratio::RatioError>(())
//! ```
//!
//! ## Sign Convention
//!
//! Simplification divides both parts by their gcd and leaves each sign where
//! it was. Only the string form moves the sign onto the numerator:
//!
//! ```
//! use exact_ratio::{Rational, SimplifiedI32};
//!
//! let r = SimplifiedI32::new(6, -8)?;
//! assert_eq!((r.numerator(), r.denominator()), (3, -4));
//! assert_eq!(r.to_string(), "-3/4");
//! # Ok::<(), exact_ratio::RatioError>(())
//! ```
//!
//! ## Errors
//!
//! ```
//! use exact_ratio::{ErrorKind, RatioError, Rational, SimplifiedI64};
//!
//! let zero = SimplifiedI64::new(0, 5)?;
//! assert_eq!(zero.invert(), Err(RatioError::InvertZero));
//!
//! let one = SimplifiedI64::one();
//! let err = one.div(Some(&zero)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Argument);
//!
//! assert_eq!(
//!     one.add::<SimplifiedI64>(None),
//!     Err(RatioError::MissingOperand("add"))
//! );
//! # Ok::<(), exact_ratio::RatioError>(())
//! ```

pub mod error;
pub mod ratio_trait;
pub mod simplified;

pub use crate::error::{ErrorKind, RatioError};
pub use crate::ratio_trait::{RatioInteger, Rational};
pub use crate::simplified::{gcd, simplify, SimplifiedRational};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Simplified rational using 32-bit integers.
pub type SimplifiedI32 = SimplifiedRational<i32>;

/// Simplified rational using 64-bit integers.
pub type SimplifiedI64 = SimplifiedRational<i64>;

/// Simplified rational using 128-bit integers.
pub type SimplifiedI128 = SimplifiedRational<i128>;
