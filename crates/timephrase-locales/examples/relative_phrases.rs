//! Demonstration of relative time phrases across the built-in locales
//!
//! Run with `cargo run -p timephrase-locales --example relative_phrases`.

use timephrase_locales::{get_locale, registered_aliases, Registry, Timeframe};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Relative Phrase Demo ===\n");

    demo_every_locale()?;
    demo_plural_agreement()?;
    demo_name_tables()?;

    Ok(())
}

fn demo_every_locale() -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Every Locale");
    println!("===============");

    for definition in Registry::global()?.definitions() {
        let locale = get_locale(definition.primary_alias())?;
        println!(
            "{:<22} {:<18} | {:<22} | {}",
            locale.name(),
            locale.describe(Timeframe::Now, 0),
            locale.describe(Timeframe::Hours, -3),
            locale.describe(Timeframe::Month, 1),
        );
    }

    println!("\nAliases: {}\n", registered_aliases().join(", "));
    Ok(())
}

fn demo_plural_agreement() -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Plural Agreement");
    println!("===================");

    let russian = get_locale("ru")?;
    let ukrainian = get_locale("uk_UA")?;
    for n in [1, 2, 5, 11, 21, 22, 25, 101] {
        println!(
            "{:>4}: {:<20} {}",
            n,
            russian.describe(Timeframe::Days, -n),
            ukrainian.describe(Timeframe::Days, n),
        );
    }

    println!();
    Ok(())
}

fn demo_name_tables() -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Name Tables");
    println!("==============");

    let swedish = get_locale("sv")?;
    for month in 1..=12 {
        let name = swedish.month_name(month)?;
        println!(
            "{:>2} {:<10} {:<4} -> {:?} ({})",
            month,
            name,
            swedish.month_abbreviation(month)?,
            swedish.month_number(name),
            swedish.ordinal_number(u64::from(month)),
        );
    }

    Ok(())
}
