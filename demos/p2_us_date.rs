//! Page 2: projectedValue
//! Example: Always print dates in the US format
//!
//! Run with: cargo run --example p2_us_date

use chrono::{Local, NaiveDate};
use property_wrappers::models::Person;
use property_wrappers::UsDate;

fn main() {
    println!("=== Projection vs Value ===");
    // Usage: project() is the derived String, get() is the date itself.
    let me = Person::new("Stewart", Local::now().date_naive(), UsDate);
    println!("project(): {}", me.birth_date.project());
    println!("get():     {}", me.birth_date.get());

    println!("\n=== A Known Date ===");
    if let Some(date) = NaiveDate::from_ymd_opt(2021, 1, 5) {
        let me = Person::new("Stewart", date, UsDate);
        println!("{} -> {}", me.birth_date, me.birth_date.project());
    }
}
