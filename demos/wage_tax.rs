// ============================================================================
// Wage Tax Example
// ============================================================================

use scaled_decimal::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Wage Tax Example (Germany 2022) ===\n");

    let calculator = WageTaxCalculator::default();
    let hundred = ScaledValue::from_integer(100);

    // Wire codes as the official interface takes them: LZZ=1 (year), STKL=1
    let period = PaymentPeriod::from_code(1).unwrap();
    let tax_class = TaxClass::from_code(1).unwrap();

    let result = calculator.calculate(&TaxInput {
        wage: ScaledValue::from_integer(5_000_000), // 50,000.00 EUR in cents
        period,
        tax_class,
    });

    let total = (result.total() / hundred).format_fixed(2);
    println!("Annual gross 50,000.00 EUR, class I:");
    println!("  wage tax:  {} EUR", (result.wage_tax / hundred).format_fixed(2));
    println!("  surcharge: {} EUR", (result.solidarity_surcharge / hundred).format_fixed(2));
    println!("  total:     {} EUR\n", total);

    // Same wage across the tax classes
    println!("Class comparison at 50,000.00 EUR / year:");
    for code in 1u8..=6 {
        let tax_class = TaxClass::from_code(code).unwrap();
        let result = calculator.calculate(&TaxInput {
            wage: ScaledValue::from_integer(5_000_000),
            period: PaymentPeriod::Year,
            tax_class,
        });
        println!(
            "  class {:?}: {} EUR",
            tax_class,
            (result.total() / hundred).format_fixed(2)
        );
    }

    // Monthly payroll run
    println!("\nMonthly gross 4,166.66 EUR, class I:");
    let monthly = calculator.calculate(&TaxInput {
        wage: ScaledValue::from_integer(416_666),
        period: PaymentPeriod::Month,
        tax_class: TaxClass::I,
    });
    println!(
        "  deduction per month: {} EUR",
        (monthly.total() / hundred).format_fixed(2)
    );
}
