// ============================================================================
// Scaled Decimal Library
// Float-backed decimal wrapper with directional scale rounding
// ============================================================================

//! # Scaled Decimal
//!
//! A minimal decimal-like wrapper around `f64` with arithmetic, three-way
//! comparison, and decimal-scale rounding under three policies, plus a
//! sample German wage-tax calculation built on it.
//!
//! ## Features
//!
//! - **Total arithmetic**: NaN and infinities propagate per IEEE-754;
//!   division by zero never errors
//! - **Directional rounding**: toward-zero and away-from-zero policies act
//!   on the magnitude, plus a nearest mode with halves away from zero
//! - **Negative scales**: rounding to tens, hundreds, and beyond
//! - **Boundary conversions**: `rust_decimal` and string parsing at the
//!   API edges
//!
//! ## Example
//!
//! ```rust
//! use scaled_decimal::prelude::*;
//!
//! let calculator = WageTaxCalculator::default();
//! let result = calculator.calculate(&TaxInput {
//!     wage: ScaledValue::from_integer(5_000_000), // 50,000.00 EUR in cents
//!     period: PaymentPeriod::Year,
//!     tax_class: TaxClass::I,
//! });
//!
//! let hundred = ScaledValue::from_integer(100);
//! assert_eq!((result.total() / hundred).format_fixed(2), "11343.00");
//! ```

pub mod numeric;
pub mod tax;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{NumericError, NumericResult, RoundingMode, ScaledValue};
    pub use crate::tax::{
        PaymentPeriod, TariffParameters, TaxClass, TaxInput, TaxResult, WageTaxCalculator,
    };
}
