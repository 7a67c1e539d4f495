//! Page 2: projectedValue
//! Example: Any date format, defaulting to "EEEE, MMM d, yyyy"
//!
//! Run with: cargo run --example p2_formatted_date

use chrono::NaiveDate;
use property_wrappers::models::Person;
use property_wrappers::{FormattedDate, Result};

fn main() -> Result<()> {
    let Some(born) = NaiveDate::from_ymd_opt(2021, 1, 5) else {
        return Ok(());
    };

    println!("=== Default Pattern ===");
    let me = Person::new("Stewart", born, FormattedDate::default());
    println!("{:<20} -> {}", FormattedDate::DEFAULT_PATTERN, me.birth_date.project());

    println!("\n=== Custom Patterns ===");
    // Usage: the pattern is checked once when the policy is built.
    for pattern in ["yyyy-MM-dd", "d MMMM yy", "'Week-year' YYYY", "EEE MM/dd"] {
        let me = Person::new("Stewart", born, FormattedDate::new(pattern)?);
        println!("{:<20} -> {}", pattern, me.birth_date.project());
    }

    println!("\n=== Rejected Patterns ===");
    for pattern in ["yyyy QQQ", "dd 'of MMM"] {
        match FormattedDate::new(pattern) {
            Ok(_) => println!("{pattern:<20} -> accepted"),
            Err(err) => println!("{pattern:<20} -> {err}"),
        }
    }

    Ok(())
}
