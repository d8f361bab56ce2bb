// ============================================================================
// Wage Tax Calculator
// Annualize, apply the tariff, prorate back to the payment period
// ============================================================================

use super::config::TariffParameters;
use crate::numeric::{RoundingMode, ScaledValue};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Payment period of the submitted wage (LZZ input codes 1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaymentPeriod {
    Year,
    Month,
    Week,
    Day,
}

impl PaymentPeriod {
    /// Decode the numeric wire code used by the official interface.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PaymentPeriod::Year),
            2 => Some(PaymentPeriod::Month),
            3 => Some(PaymentPeriod::Week),
            4 => Some(PaymentPeriod::Day),
            _ => None,
        }
    }

    /// The numeric wire code.
    pub const fn code(self) -> u8 {
        match self {
            PaymentPeriod::Year => 1,
            PaymentPeriod::Month => 2,
            PaymentPeriod::Week => 3,
            PaymentPeriod::Day => 4,
        }
    }

    /// Convert a period wage in cents to an annual wage in euros.
    ///
    /// A week counts as 7/360 of a year and a day as 1/360, as in the
    /// official pseudo-code. The result is cut toward zero at two decimals.
    fn annualize(self, wage_cents: ScaledValue) -> ScaledValue {
        let hundred = ScaledValue::from_integer(100);
        match self {
            PaymentPeriod::Year => wage_cents.div_scaled(hundred, 2, RoundingMode::TowardZero),
            PaymentPeriod::Month => (wage_cents * ScaledValue::from_integer(12)).div_scaled(
                hundred,
                2,
                RoundingMode::TowardZero,
            ),
            PaymentPeriod::Week => (wage_cents * ScaledValue::from_integer(360)).div_scaled(
                ScaledValue::from_integer(700),
                2,
                RoundingMode::TowardZero,
            ),
            PaymentPeriod::Day => (wage_cents * ScaledValue::from_integer(360)).div_scaled(
                hundred,
                2,
                RoundingMode::TowardZero,
            ),
        }
    }

    /// Convert an annual amount in euros to this period's share in whole
    /// cents, cut toward zero.
    fn prorate(self, annual_euros: ScaledValue) -> ScaledValue {
        let cents = annual_euros * ScaledValue::from_integer(100);
        match self {
            PaymentPeriod::Year => cents.set_scale(0, RoundingMode::TowardZero),
            PaymentPeriod::Month => cents.div_scaled(
                ScaledValue::from_integer(12),
                0,
                RoundingMode::TowardZero,
            ),
            PaymentPeriod::Week => (cents * ScaledValue::from_integer(7)).div_scaled(
                ScaledValue::from_integer(360),
                0,
                RoundingMode::TowardZero,
            ),
            PaymentPeriod::Day => cents.div_scaled(
                ScaledValue::from_integer(360),
                0,
                RoundingMode::TowardZero,
            ),
        }
    }
}

/// German wage-tax class (STKL input code 1-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaxClass {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl TaxClass {
    /// Decode the numeric wire code used by the official interface.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(TaxClass::I),
            2 => Some(TaxClass::II),
            3 => Some(TaxClass::III),
            4 => Some(TaxClass::IV),
            5 => Some(TaxClass::V),
            6 => Some(TaxClass::VI),
            _ => None,
        }
    }

    /// The numeric wire code.
    pub const fn code(self) -> u8 {
        match self {
            TaxClass::I => 1,
            TaxClass::II => 2,
            TaxClass::III => 3,
            TaxClass::IV => 4,
            TaxClass::V => 5,
            TaxClass::VI => 6,
        }
    }

    /// Class III is taxed with income splitting.
    fn uses_splitting(self) -> bool {
        matches!(self, TaxClass::III)
    }

    /// Annual lump-sum allowances in euros. Class VI (second employment)
    /// gets none; class II additionally gets the single-parent relief.
    fn allowances(self, params: &TariffParameters) -> ScaledValue {
        match self {
            TaxClass::VI => ScaledValue::ZERO,
            TaxClass::II => {
                params.employee_lump_sum
                    + params.special_expenses_lump_sum
                    + params.single_parent_relief
            },
            _ => params.employee_lump_sum + params.special_expenses_lump_sum,
        }
    }
}

/// Input for one wage-tax calculation.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxInput {
    /// Gross wage for the payment period, in cents (RE4)
    pub wage: ScaledValue,
    /// Payment period the wage covers (LZZ)
    pub period: PaymentPeriod,
    /// Wage-tax class (STKL)
    pub tax_class: TaxClass,
}

/// Result of one wage-tax calculation, in cents per payment period.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxResult {
    /// Wage tax for the period (LSTLZZ)
    pub wage_tax: ScaledValue,
    /// Solidarity surcharge for the period (SOLZLZZ)
    pub solidarity_surcharge: ScaledValue,
}

impl TaxResult {
    /// Combined deduction for the period, in cents.
    pub fn total(&self) -> ScaledValue {
        self.wage_tax + self.solidarity_surcharge
    }
}

/// Wage-tax calculator for a fixed set of tariff parameters.
///
/// Stateless beyond its parameters; one instance can serve any number of
/// calculations.
#[derive(Debug, Clone, Default)]
pub struct WageTaxCalculator {
    params: TariffParameters,
}

impl WageTaxCalculator {
    /// Create a calculator with explicit tariff parameters.
    pub fn new(params: TariffParameters) -> Self {
        Self { params }
    }

    /// The tariff parameters in use.
    pub fn params(&self) -> &TariffParameters {
        &self.params
    }

    /// Compute wage tax and solidarity surcharge for one input.
    pub fn calculate(&self, input: &TaxInput) -> TaxResult {
        let annual_wage = input.period.annualize(input.wage);
        let taxable =
            (annual_wage - input.tax_class.allowances(&self.params)).max(ScaledValue::ZERO);

        let (annual_tax, exemption) = if input.tax_class.uses_splitting() {
            let two = ScaledValue::from_integer(2);
            let half_tax = self.tariff(taxable / two);
            (half_tax * two, self.params.solidarity_exemption * two)
        } else {
            (self.tariff(taxable), self.params.solidarity_exemption)
        };

        let surcharge = self.solidarity_surcharge(annual_tax, exemption);

        tracing::debug!(
            "wage tax: annual wage {} -> taxable {} -> tax {} + surcharge {}",
            annual_wage,
            taxable,
            annual_tax,
            surcharge
        );

        TaxResult {
            wage_tax: input.period.prorate(annual_tax),
            solidarity_surcharge: input.period.prorate(surcharge),
        }
    }

    /// Progressive income-tax tariff on an annual taxable income in euros.
    ///
    /// The income is truncated to whole euros before zone selection and
    /// the zone result is cut toward zero to whole euros, matching the
    /// official pseudo-code's ROUND_DOWN at both edges.
    fn tariff(&self, taxable: ScaledValue) -> ScaledValue {
        let p = &self.params;
        let x = taxable.set_scale(0, RoundingMode::TowardZero);

        if x.compare(&p.basic_allowance) != Ordering::Greater {
            return ScaledValue::ZERO;
        }

        let ten_thousand = ScaledValue::from_integer(10_000);
        let tax = if x.compare(&p.first_progression_end) != Ordering::Greater {
            let y = (x - p.basic_allowance) / ten_thousand;
            (p.first_progression_quadratic * y + p.first_progression_linear) * y
        } else if x.compare(&p.second_progression_end) != Ordering::Greater {
            let z = (x - p.first_progression_end) / ten_thousand;
            (p.second_progression_quadratic * z + p.second_progression_linear) * z
                + p.second_progression_constant
        } else if x.compare(&p.first_proportional_end) != Ordering::Greater {
            p.first_proportional_rate * x - p.first_proportional_offset
        } else {
            p.top_proportional_rate * x - p.top_proportional_offset
        };

        tax.set_scale(0, RoundingMode::TowardZero)
    }

    /// Solidarity surcharge on an annual tax amount, in euros.
    ///
    /// 5.5% of the tax, capped inside the mitigation zone at 11.9% of the
    /// amount above the exemption. Nothing is due at or below the
    /// exemption.
    fn solidarity_surcharge(&self, annual_tax: ScaledValue, exemption: ScaledValue) -> ScaledValue {
        if annual_tax.compare(&exemption) != Ordering::Greater {
            return ScaledValue::ZERO;
        }

        let p = &self.params;
        let hundred = ScaledValue::from_integer(100);
        let full = (annual_tax * p.solidarity_rate_percent).div_scaled(
            hundred,
            2,
            RoundingMode::TowardZero,
        );
        let capped = ((annual_tax - exemption) * p.solidarity_margin_percent).div_scaled(
            hundred,
            2,
            RoundingMode::TowardZero,
        );

        full.min(capped)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(wage_cents: i64, period: PaymentPeriod, tax_class: TaxClass) -> TaxResult {
        WageTaxCalculator::default().calculate(&TaxInput {
            wage: ScaledValue::from_integer(wage_cents),
            period,
            tax_class,
        })
    }

    #[test]
    fn test_period_codes() {
        assert_eq!(PaymentPeriod::from_code(2), Some(PaymentPeriod::Month));
        assert_eq!(PaymentPeriod::from_code(5), None);
        assert_eq!(PaymentPeriod::Week.code(), 3);

        assert_eq!(TaxClass::from_code(3), Some(TaxClass::III));
        assert_eq!(TaxClass::from_code(0), None);
        assert_eq!(TaxClass::VI.code(), 6);
    }

    #[test]
    fn test_annual_wage_class_one() {
        // 50,000.00 EUR yearly, class I: taxable 48,764 -> 11,343 EUR tax,
        // below the surcharge exemption
        let result = calc(5_000_000, PaymentPeriod::Year, TaxClass::I);
        assert_eq!(result.wage_tax.to_f64(), 1_134_300.0);
        assert_eq!(result.solidarity_surcharge.to_f64(), 0.0);
        assert_eq!(result.total().to_f64(), 1_134_300.0);
    }

    #[test]
    fn test_below_basic_allowance_is_untaxed() {
        let result = calc(100_000, PaymentPeriod::Year, TaxClass::I);
        assert_eq!(result.wage_tax.to_f64(), 0.0);
        assert_eq!(result.solidarity_surcharge.to_f64(), 0.0);
    }

    #[test]
    fn test_first_progression_zone() {
        // Taxable exactly 12,000 EUR lands in the first progression zone
        let wage = (12_000 + 1_236) * 100;
        let result = calc(wage, PaymentPeriod::Year, TaxClass::I);
        assert_eq!(result.wage_tax.to_f64(), 26_100.0);
    }

    #[test]
    fn test_top_zone_with_full_surcharge() {
        // Taxable 300,000 EUR: top zone, surcharge at the full 5.5% rate
        let wage = (300_000 + 1_236) * 100;
        let result = calc(wage, PaymentPeriod::Year, TaxClass::I);
        assert_eq!(result.wage_tax.to_f64(), 11_732_800.0);
        assert_eq!(result.solidarity_surcharge.to_f64(), 645_304.0);
    }

    #[test]
    fn test_surcharge_mitigation_zone_cap() {
        // Annual tax just above the exemption: the 11.9% marginal cap wins
        // over the 5.5% full rate
        let result = calc(19_230, PaymentPeriod::Day, TaxClass::I);
        assert_eq!(result.wage_tax.to_f64(), 5_338.0);
        assert_eq!(result.solidarity_surcharge.to_f64(), 74.0);
    }

    #[test]
    fn test_surcharge_above_mitigation_zone() {
        let result = calc(12_000_000, PaymentPeriod::Year, TaxClass::I);
        assert_eq!(result.wage_tax.to_f64(), 4_054_400.0);
        assert_eq!(result.solidarity_surcharge.to_f64(), 222_992.0);
    }

    #[test]
    fn test_monthly_period_prorates_down() {
        // 4,166.66 EUR monthly annualizes to 49,999.92 and prorates back
        // with the toward-zero cut
        let result = calc(416_666, PaymentPeriod::Month, TaxClass::I);
        assert_eq!(result.wage_tax.to_f64(), 94_525.0);
        assert_eq!(result.solidarity_surcharge.to_f64(), 0.0);
    }

    #[test]
    fn test_weekly_and_daily_periods() {
        let weekly = calc(96_153, PaymentPeriod::Week, TaxClass::I);
        assert_eq!(weekly.wage_tax.to_f64(), 21_651.0);

        let daily = calc(19_230, PaymentPeriod::Day, TaxClass::I);
        assert_eq!(daily.wage_tax.to_f64(), 5_338.0);
    }

    #[test]
    fn test_class_three_splitting() {
        // Splitting halves the progression: well below twice the
        // single-rate amount
        let split = calc(5_000_000, PaymentPeriod::Year, TaxClass::III);
        let single = calc(5_000_000, PaymentPeriod::Year, TaxClass::I);
        assert_eq!(split.wage_tax.to_f64(), 664_000.0);
        assert!(split.wage_tax.to_f64() < single.wage_tax.to_f64());
    }

    #[test]
    fn test_class_two_single_parent_relief() {
        let relieved = calc(5_000_000, PaymentPeriod::Year, TaxClass::II);
        let single = calc(5_000_000, PaymentPeriod::Year, TaxClass::I);
        assert_eq!(relieved.wage_tax.to_f64(), 985_600.0);
        assert!(relieved.wage_tax.to_f64() < single.wage_tax.to_f64());
    }

    #[test]
    fn test_class_six_gets_no_allowances() {
        let second_job = calc(5_000_000, PaymentPeriod::Year, TaxClass::VI);
        let first_job = calc(5_000_000, PaymentPeriod::Year, TaxClass::I);
        assert_eq!(second_job.wage_tax.to_f64(), 1_181_600.0);
        assert!(second_job.wage_tax.to_f64() > first_job.wage_tax.to_f64());
    }

    #[test]
    fn test_tax_is_monotonic_in_wage() {
        let mut previous = -1.0;
        for wage in [0, 1_000_000, 2_500_000, 5_000_000, 10_000_000, 50_000_000] {
            let result = calc(wage, PaymentPeriod::Year, TaxClass::I);
            assert!(result.wage_tax.to_f64() >= previous);
            previous = result.wage_tax.to_f64();
        }
    }

    #[test]
    fn test_custom_parameters() {
        // Doubling the basic allowance pushes a mid income out of tax
        let mut params = TariffParameters::germany_2022();
        params.basic_allowance = ScaledValue::from_integer(60_000);
        let calculator = WageTaxCalculator::new(params);

        let result = calculator.calculate(&TaxInput {
            wage: ScaledValue::from_integer(5_000_000),
            period: PaymentPeriod::Year,
            tax_class: TaxClass::I,
        });
        assert_eq!(result.wage_tax.to_f64(), 0.0);
        assert_eq!(calculator.params().basic_allowance.to_f64(), 60_000.0);
    }
}
