//! Page 1: wrappedValue
//! Example: Clamping a score into a range
//!
//! Run with: cargo run --example p1_in_range

use property_wrappers::models::Exam;
use property_wrappers::{Clamped, Percent};

fn main() {
    println!("=== Fixed Range 0...100 ===");
    // Usage: out-of-range scores are silently clamped, never rejected.
    let mut physics = Exam::new("Stewart", -5, Percent);
    println!("Exam(score: -5).score = {}", physics.score);

    physics.score.set(150);
    println!("after set(150): {}", physics.score);

    println!("\n=== Configurable Range 10...80 ===");
    match Clamped::new(10, 80) {
        Ok(bounds) => {
            let mut chemistry = Exam::new("Stewart", 10, bounds);
            println!("Exam(score: 10).score = {} (bounds are inclusive)", chemistry.score);
            chemistry.score.set(0);
            println!("after set(0): {}", chemistry.score);
        }
        Err(err) => println!("error: {err}"),
    }

    println!("\n=== Inverted Bounds ===");
    match Clamped::new(80, 10) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("Clamped::new(80, 10) -> {err}"),
    }
}
