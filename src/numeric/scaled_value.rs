// ============================================================================
// Scaled Value
// Immutable f64-backed decimal wrapper with directional scale rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding policy applied by [`ScaledValue::set_scale`].
///
/// The two directional modes act on the *magnitude* of the value: they
/// branch on sign so that "down" always moves toward zero and "up" always
/// moves away from it, regardless of which side of zero the value is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Reduce the magnitude (floor for positive values, ceiling for negative)
    TowardZero,
    /// Increase the magnitude (ceiling for positive values, floor for negative)
    AwayFromZero,
    /// Round to the nearest value; exact halves round away from zero
    #[default]
    Nearest,
}

/// Immutable decimal-like value backed by an `f64`.
///
/// Every operation returns a new value. Arithmetic is total over the
/// floating-point domain: NaN and infinities propagate per IEEE-754 and
/// division by zero yields an infinity (or NaN for `0/0`) rather than an
/// error. This permissiveness is deliberate; callers that need a finite
/// result round with [`set_scale`](Self::set_scale) and check the boundary
/// conversions.
///
/// # Example
/// ```ignore
/// use scaled_decimal::numeric::{RoundingMode, ScaledValue};
///
/// let gross = ScaledValue::from_integer(10);
/// let rate = ScaledValue::from_integer(3);
/// let per_part = gross.div_scaled(rate, 2, RoundingMode::Nearest); // 3.33
/// ```
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct ScaledValue(f64);

impl ScaledValue {
    /// Zero value
    pub const ZERO: Self = Self(0.0);

    /// One (1.0)
    pub const ONE: Self = Self(1.0);

    /// Ten (10.0)
    pub const TEN: Self = Self(10.0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an integer value.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self(value as f64)
    }

    /// Create from a raw floating-point value.
    #[inline]
    pub const fn from_float(value: f64) -> Self {
        Self(value)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the backing floating-point value.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.0
    }

    /// Get the integer part, truncated toward zero.
    ///
    /// `integer_part(2.9) == 2`, `integer_part(-2.9) == -2`. Values outside
    /// the `i64` range saturate; NaN becomes 0 (standard `as` cast rules).
    #[inline]
    pub fn integer_part(self) -> i64 {
        self.0.trunc() as i64
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    // ========================================================================
    // Scale Rounding
    // ========================================================================

    /// Round to `scale` decimal digits under the given policy.
    ///
    /// Computes `factor = 10^scale`, scales the value up, applies the
    /// policy's floor/ceiling/round to the scaled value, and divides back.
    /// A zero or negative `scale` is allowed and rounds to whole units,
    /// tens, hundreds, and so on. NaN and infinities pass through.
    #[inline]
    pub fn set_scale(self, scale: i32, mode: RoundingMode) -> Self {
        let factor = 10f64.powi(scale);
        let scaled = self.0 * factor;

        let rounded = match mode {
            RoundingMode::TowardZero => {
                if self.0 < 0.0 {
                    scaled.ceil()
                } else {
                    scaled.floor()
                }
            },
            RoundingMode::AwayFromZero => {
                if self.0 < 0.0 {
                    scaled.floor()
                } else {
                    scaled.ceil()
                }
            },
            RoundingMode::Nearest => scaled.round(),
        };

        Self(rounded / factor)
    }

    /// Divide and round the quotient to `scale` decimal digits.
    ///
    /// The plain [`Div`] operator is the unrounded variant.
    #[inline]
    pub fn div_scaled(self, rhs: Self, scale: i32, mode: RoundingMode) -> Self {
        (self / rhs).set_scale(scale, mode)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Strict ordering by numeric value.
    ///
    /// `Greater` iff `self > other`, `Less` iff `self < other`, otherwise
    /// `Equal`. NaN is greater than nothing and less than nothing, so it
    /// compares `Equal` to everything; this matches the permissive
    /// three-way comparison of the reference semantics.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.0 > other.0 {
            Ordering::Greater
        } else if self.0 < other.0 {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render with exactly `decimals` digits after the point.
    pub fn format_fixed(self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.0)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for ScaledValue {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for ScaledValue {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for ScaledValue {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for ScaledValue {
    type Output = Self;

    /// Unrounded division. Division by zero yields an infinity (or NaN
    /// for `0/0`) per IEEE-754.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for ScaledValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ScaledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaledValue({})", self.0)
    }
}

impl fmt::Display for ScaledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for ScaledValue {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// Accepts anything `f64` parsing accepts, including `inf` and `NaN`;
    /// the wrapper stays permissive at this edge too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        s.parse::<f64>()
            .map(Self)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for ScaledValue {
    /// Convert from `rust_decimal::Decimal`, rounding to the nearest
    /// representable `f64`.
    fn from(d: rust_decimal::Decimal) -> Self {
        use rust_decimal::prelude::ToPrimitive;

        // Every Decimal fits in the f64 range
        Self(d.to_f64().unwrap_or(f64::NAN))
    }
}

impl ScaledValue {
    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for display and interchange at API boundaries.
    ///
    /// # Errors
    /// `NotFinite` if the value is NaN or infinite.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;

        rust_decimal::Decimal::from_f64(self.0).ok_or(NumericError::NotFinite)
    }
}

// ============================================================================
// Tests
// ============================================================================
