// ============================================================================
// Basic Usage Example
// ============================================================================

use money_words::prelude::*;
use rust_decimal::Decimal;

fn main() {
    println!("=== Money Words Example ===\n");

    // Whole numbers
    println!("Numerals:");
    for n in [0u32, 15, 40, 115, 100_000, 2_000_000_000] {
        println!("  {:>13} -> {}", n, words(n));
    }

    // Dollar amounts
    println!("\nAmounts:");
    let formatter = MonetaryFormatter::english();
    for amount in ["0.00", "1.00", "0.01", "1.566", "1357256.32"] {
        let decimal: Decimal = amount.parse().unwrap();
        match formatter.to_words(decimal) {
            Ok(text) => println!("  {:>13} -> {}", amount, text),
            Err(err) => println!("  {:>13} -> error: {}", amount, err),
        }
    }

    // Out of range
    println!("\n=== Range Checks ===");
    let capped = MonetaryFormatterBuilder::new()
        .with_max_amount(Decimal::from(1000))
        .build()
        .unwrap();
    for amount in ["999.99", "1000.01", "-5"] {
        let decimal: Decimal = amount.parse().unwrap();
        match capped.to_words(decimal) {
            Ok(text) => println!("  {:>13} -> {}", amount, text),
            Err(err) => println!("  {:>13} -> error: {}", amount, err),
        }
    }
}
