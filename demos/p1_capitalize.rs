//! Page 1: wrappedValue
//! Example: Capitalize properties by hand
//!
//! Run with: cargo run --example p1_capitalize

use property_wrappers::models::PlainName;

fn main() {
    println!("=== Upper-casing Without a Wrapper ===");
    // Usage: every constructor and setter has to remember to call to_uppercase.
    let mut me = PlainName::new("Stewart", "Lynch");
    println!("{} {}", me.first_name(), me.last_name());

    me.set_first_name("stew");
    println!("after set_first_name(\"stew\"): {} {}", me.first_name(), me.last_name());

    println!("\nForget one setter and lower-case text slips in.");
    println!("The next example moves the rule into the field itself.");
}
