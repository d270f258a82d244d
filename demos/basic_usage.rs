// ============================================================================
// Basic Usage Example
// ============================================================================

use cents_money::prelude::*;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    if let Err(err) = cents_money::init_logging(tracing::Level::TRACE) {
        eprintln!("logging disabled: {err}");
    }

    println!("=== Cents Money Example ===\n");

    println!("Parsing literals...");
    for literal in ["$10.05", "1,234,234.23", "-$123423423.05", "($7.5)", "-0"] {
        let m = Money::parse(literal)?;
        println!("  {:>18} -> {:>16} ({} cents)", literal, m, m.as_cents());
    }

    println!("\nRejected literals...");
    for literal in ["ten dollars", "$1.23456", ""] {
        match Money::parse(literal) {
            Ok(m) => println!("  {literal:?} unexpectedly parsed as {m}"),
            Err(err) => println!("  {literal:?}: {err}"),
        }
    }

    println!("\nArithmetic...");
    let mut balance = Money::from_cents(534);
    balance.add(-600);
    println!("  $5.34 - $6.00 = {balance}");

    println!("\nPresentation...");
    let large = Money::from_cents(-12342342305);
    for (name, config) in [
        ("canonical", DisplayConfig::canonical()),
        ("grouped", DisplayConfig::grouped()),
        ("accounting", DisplayConfig::accounting()),
    ] {
        println!("  {:>10}: {}", name, large.format_with(&config));
    }

    println!("\nNullable column...");
    let mut column = NullMoney::default();
    for raw in [None, Some(&b"$10.05"[..]), Some(&b"oops"[..])] {
        let value = ExternalValue::from(raw);
        match column.scan(&value) {
            Ok(()) => println!("  scanned {:?} -> {} (valid={})", value, column, column.is_valid()),
            Err(err) => println!("  scanned {:?} -> error: {} (valid={})", value, err, column.is_valid()),
        }
        println!("  stored as {:?}", column.value()?);
    }

    Ok(())
}
