//! Page 1: wrappedValue
//! Example: Trimmed strings, on read and on write
//!
//! Run with: cargo run --example p1_trimmed

use property_wrappers::models::Name;
use property_wrappers::Trimmed;

fn main() {
    println!("=== Trim on Read (default) ===");
    // Usage: the raw text is kept; every read returns a trimmed copy.
    let me = Name::new("   Stewart  ", "  Lynch  ", Trimmed::default());
    println!("{}", me.full());
    println!("stored first name: {:?}", me.first_name.stored());

    println!("\n=== Trim on Write ===");
    let me = Name::new("   Stewart  ", "  Lynch  ", Trimmed::on_write());
    println!("{}", me.full());
    println!("stored first name: {:?}", me.first_name.stored());
}
