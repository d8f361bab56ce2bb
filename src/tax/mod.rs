// ============================================================================
// Tax Module
// Sample wage-tax calculation driving the scaled-decimal arithmetic
// ============================================================================
//
// A compact German wage-tax (Lohnsteuer) computation: annualize the period
// wage, apply class allowances, run the progressive tariff, add the
// solidarity surcharge, and prorate back to the payment period. Every
// intermediate rounding follows the official pseudo-code's convention of
// rounding toward zero.
//
// This is deliberately a subset: no church tax, no registered allowances,
// no insurance deductions, no factor method.

mod calculator;
mod config;

pub use calculator::{PaymentPeriod, TaxClass, TaxInput, TaxResult, WageTaxCalculator};
pub use config::TariffParameters;
