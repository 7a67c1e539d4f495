//! # Custom Property Wrappers
//!
//! A property wrapper puts a layer between the code that stores a field and
//! the code that uses it. This crate shows the pattern in Rust with a single
//! generic type, [`WrappedField<T, P>`], and a set of small policies.
//!
//! ## Page 1: wrappedValue
//! - Upper-casing by hand with setters (`PlainName`)
//! - Upper-casing on every write ([`AllCaps`])
//! - Trimming whitespace on every read ([`Trimmed`])
//! - Clamping to `0...100` ([`Percent`])
//! - Clamping to configurable bounds, for any numeric type ([`Clamped`])
//!
//! ## Page 2: projectedValue
//! - A date that projects as `MM-dd-yyyy` ([`UsDate`])
//! - A date that projects with any pattern ([`FormattedDate`])
//! - A rating that projects as a row of emoji ([`Rating`])
//!
//! Run the pages with `cargo run --bin playground`, or one snippet at a time
//! with `cargo run --example <name>`.

pub mod config;
pub mod error;
pub mod field;
pub mod logging;
pub mod models;
pub mod numeric;
pub mod pages;
pub mod policies;

pub use config::PlaygroundConfig;
pub use error::{Result, WrapperError};
pub use field::{Correction, Policy, Project, WrappedField};
pub use numeric::Numeric;
pub use policies::{AllCaps, Clamped, FormattedDate, Percent, Rating, Trimmed, UsDate};
