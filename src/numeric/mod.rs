// ============================================================================
// Numeric Module
// Float-backed decimal arithmetic with directional scale rounding
// ============================================================================
//
// This module provides:
// - ScaledValue: an immutable f64-backed decimal wrapper
// - RoundingMode: the three scale-rounding policies
// - NumericError: error type for parsing and boundary conversions
//
// Design principles:
// - All arithmetic is total: NaN/Inf propagate per IEEE-754, division by
//   zero yields an infinity, nothing validates or panics
// - The directional rounding policies act on the magnitude of the value,
//   branching on sign
// - Only parsing and rust_decimal conversion can fail

mod errors;
mod scaled_value;

pub use errors::{NumericError, NumericResult};
pub use scaled_value::{RoundingMode, ScaledValue};
