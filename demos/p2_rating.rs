//! Page 2: projectedValue
//! Example: Display ratings as a string of emoji
//!
//! Run with: cargo run --example p2_rating

use property_wrappers::models::Review;
use property_wrappers::Rating;

fn main() {
    println!("=== Default Symbols ===");
    // Usage: ambiance uses the default star, food its own plate symbol.
    let earls = Review::new("Earls", 5, 4);
    println!("{} ambiance: {}", earls.name, earls.ambiance.project());
    println!("{} food:     {}", earls.name, earls.food.project());

    println!("\n=== Custom Symbols ===");
    let mut cactus = Review::with_symbols("Cactus Club", 3, 2, Rating::new("✨"), Rating::new("🍕"));
    println!("{} ambiance: {}", cactus.name, cactus.ambiance.project());
    cactus.food.set(0);
    println!("{} food after set(0): {:?}", cactus.name, cactus.food.project());
}
