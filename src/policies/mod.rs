//! Ready-made policies, one per tutorial example.
//!
//! | Policy          | Corrects                 | Projects                   |
//! |-----------------|--------------------------|----------------------------|
//! | `AllCaps`       | upper-case, on write     | -                          |
//! | `Trimmed`       | trim, on read by default | -                          |
//! | `Percent`       | clamp to `0..=100`       | -                          |
//! | `Clamped<T>`    | clamp to `[min, max]`    | -                          |
//! | `UsDate`        | -                        | `MM-dd-yyyy`               |
//! | `FormattedDate` | -                        | any Unicode date pattern   |
//! | `Rating`        | -                        | symbol repeated per point  |

mod date;
pub mod date_pattern;
mod range;
mod rating;
mod text;

pub use date::{FormattedDate, UsDate};
pub use range::{Clamped, Percent};
pub use rating::Rating;
pub use text::{AllCaps, Trimmed};
