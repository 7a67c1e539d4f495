//! Page 1: wrappedValue
//! Example: Introducing Property Wrappers
//!
//! Run with: cargo run --example p1_all_caps

use property_wrappers::models::Name;
use property_wrappers::{AllCaps, WrappedField};

fn main() {
    println!("=== AllCaps Field ===");
    // Usage: the policy upper-cases on construction and on every set.
    let mut me = Name::new("Stewart", "Lynch", AllCaps);
    println!("{}", me.full());

    me.first_name.set("sammy".to_string());
    println!("after set(\"sammy\"): {}", me.full());

    println!("\n=== Standalone Field ===");
    let city = WrappedField::new("vancouver".to_string(), AllCaps);
    println!("stored: {:?}", city.stored());
    println!("get():  {}", city.get());
}
