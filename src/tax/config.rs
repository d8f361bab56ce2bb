// ============================================================================
// Tariff Configuration
// Year-dependent constants for the wage-tax computation
// ============================================================================

use crate::numeric::ScaledValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constants of one assessment year's income-tax tariff.
///
/// The progressive tariff is piecewise: a zero zone up to the basic
/// allowance, two polynomial progression zones, and two linear zones.
/// All monetary bounds are in whole euros.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TariffParameters {
    /// Basic allowance (Grundfreibetrag); income up to here is untaxed
    pub basic_allowance: ScaledValue,
    /// Upper bound of the first progression zone
    pub first_progression_end: ScaledValue,
    /// Upper bound of the second progression zone
    pub second_progression_end: ScaledValue,
    /// Upper bound of the first proportional zone
    pub first_proportional_end: ScaledValue,

    /// Quadratic coefficient of the first progression zone
    pub first_progression_quadratic: ScaledValue,
    /// Linear coefficient of the first progression zone
    pub first_progression_linear: ScaledValue,
    /// Quadratic coefficient of the second progression zone
    pub second_progression_quadratic: ScaledValue,
    /// Linear coefficient of the second progression zone
    pub second_progression_linear: ScaledValue,
    /// Constant term of the second progression zone
    pub second_progression_constant: ScaledValue,
    /// Marginal rate of the first proportional zone (e.g. 0.42)
    pub first_proportional_rate: ScaledValue,
    /// Subtrahend of the first proportional zone
    pub first_proportional_offset: ScaledValue,
    /// Marginal rate of the top proportional zone (e.g. 0.45)
    pub top_proportional_rate: ScaledValue,
    /// Subtrahend of the top proportional zone
    pub top_proportional_offset: ScaledValue,

    /// Employee lump-sum allowance (Arbeitnehmer-Pauschbetrag)
    pub employee_lump_sum: ScaledValue,
    /// Special-expenses lump sum (Sonderausgaben-Pauschbetrag)
    pub special_expenses_lump_sum: ScaledValue,
    /// Relief amount for single parents (tax class II)
    pub single_parent_relief: ScaledValue,

    /// Annual tax amount below which no solidarity surcharge is due
    pub solidarity_exemption: ScaledValue,
    /// Regular surcharge rate in percent (5.5)
    pub solidarity_rate_percent: ScaledValue,
    /// Marginal rate in percent inside the mitigation zone (11.9)
    pub solidarity_margin_percent: ScaledValue,
}

impl TariffParameters {
    /// Tariff constants for Germany, assessment year 2022
    /// (§32a EStG as amended by the Steuerentlastungsgesetz 2022).
    pub fn germany_2022() -> Self {
        Self {
            basic_allowance: ScaledValue::from_integer(10_347),
            first_progression_end: ScaledValue::from_integer(14_926),
            second_progression_end: ScaledValue::from_integer(58_596),
            first_proportional_end: ScaledValue::from_integer(277_825),

            first_progression_quadratic: ScaledValue::from_float(1_088.67),
            first_progression_linear: ScaledValue::from_integer(1_400),
            second_progression_quadratic: ScaledValue::from_float(206.43),
            second_progression_linear: ScaledValue::from_integer(2_397),
            second_progression_constant: ScaledValue::from_float(869.32),
            first_proportional_rate: ScaledValue::from_float(0.42),
            first_proportional_offset: ScaledValue::from_float(9_336.45),
            top_proportional_rate: ScaledValue::from_float(0.45),
            top_proportional_offset: ScaledValue::from_float(17_671.20),

            employee_lump_sum: ScaledValue::from_integer(1_200),
            special_expenses_lump_sum: ScaledValue::from_integer(36),
            single_parent_relief: ScaledValue::from_integer(4_008),

            solidarity_exemption: ScaledValue::from_integer(16_956),
            solidarity_rate_percent: ScaledValue::from_float(5.5),
            solidarity_margin_percent: ScaledValue::from_float(11.9),
        }
    }
}

impl Default for TariffParameters {
    fn default() -> Self {
        Self::germany_2022()
    }
}
