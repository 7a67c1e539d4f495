//! Page 1: wrappedValue
//! Example: Clamping any numeric type
//!
//! Run with: cargo run --example p1_generic_range

use property_wrappers::{Clamped, Numeric, Result, WrappedField};
use std::fmt::Display;

fn show<T: Numeric + Display>(label: &str, min: T, max: T, inputs: &[T]) -> Result<()> {
    let mut field = WrappedField::new(inputs[0], Clamped::new(min, max)?);
    for &input in inputs {
        field.set(input);
        println!("{label} [{min}, {max}] set({input}) -> {}", field.get());
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("=== Same Wrapper, Different Numbers ===");
    // Usage: Clamped<T> works for any T: Copy + PartialOrd + arithmetic.
    show("f64", 0.5, 1.0, &[0.8, 0.2, 3.5])?;
    show("i64", -10_i64, 10, &[-50, 7, 99])?;
    show("u8", 1_u8, 5, &[0, 3, 200])?;
    show("f32", 0.0_f32, 1.0, &[f32::NAN, 0.25])?;
    Ok(())
}
