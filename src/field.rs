//! The wrapped field itself.
//!
//! A [`WrappedField`] owns one value and routes every read and write through a
//! [`Policy`]. The policy decides *when* to correct (on write or on read) and
//! *how* (its [`Policy::correct`] function). Policies that also implement
//! [`Project`] give the field a derived, read-only view via
//! [`WrappedField::project`]. Fields whose policy has no projection simply
//! don't have the method.
//!
//! ```
//! use property_wrappers::{AllCaps, WrappedField};
//!
//! let mut first_name = WrappedField::new("Stewart".to_string(), AllCaps);
//! assert_eq!(first_name.get(), "STEWART");
//!
//! first_name.set("lynch".to_string());
//! assert_eq!(first_name.get(), "LYNCH");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use tracing::trace;

/// When a policy applies its correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correction {
    /// Correct the value before storing it. The stored value is always normalized.
    #[default]
    OnWrite,
    /// Store the raw value and correct a copy on every read.
    OnRead,
}

/// Configures how a [`WrappedField`] treats its value.
///
/// `correct` must be pure and idempotent: `correct(correct(x)) == correct(x)`.
pub trait Policy<T> {
    fn correction(&self) -> Correction {
        Correction::OnWrite
    }

    fn correct(&self, value: T) -> T {
        value
    }
}

/// A derived, read-only representation of a field's value.
pub trait Project<T>: Policy<T> {
    type Output;

    fn project(&self, value: &T) -> Self::Output;
}

/// A value that can only be read and written through its policy.
///
/// Equality compares what `get` returns, so two trim-on-read fields holding
/// `"  a"` and `"a "` are equal.
#[derive(Clone)]
pub struct WrappedField<T, P> {
    value: T,
    policy: P,
}

impl<T, P: Policy<T>> WrappedField<T, P> {
    /// Wrap `value`, correcting it first if the policy corrects on write.
    pub fn new(value: T, policy: P) -> Self {
        let value = Self::admit(&policy, value);
        WrappedField { value, policy }
    }

    /// Replace the stored value. Never fails.
    pub fn set(&mut self, value: T) {
        self.value = Self::admit(&self.policy, value);
    }

    /// The raw stored value, before any read-side correction.
    pub fn stored(&self) -> &T {
        &self.value
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    fn admit(policy: &P, value: T) -> T {
        match policy.correction() {
            Correction::OnWrite => {
                trace!(correction = ?Correction::OnWrite, "admitting value");
                policy.correct(value)
            }
            Correction::OnRead => value,
        }
    }
}

impl<T: Clone, P: Policy<T>> WrappedField<T, P> {
    /// The value as callers see it.
    ///
    /// For read-side policies the correction is applied to a copy; the stored
    /// value is left untouched.
    pub fn get(&self) -> T {
        match self.policy.correction() {
            Correction::OnWrite => self.value.clone(),
            Correction::OnRead => {
                trace!("correcting value on read");
                self.policy.correct(self.value.clone())
            }
        }
    }
}

impl<T, P: Project<T>> WrappedField<T, P> {
    /// The policy's projection of the current stored value.
    pub fn project(&self) -> P::Output {
        self.policy.project(&self.value)
    }
}

impl<T: Default, P: Policy<T> + Default> Default for WrappedField<T, P> {
    fn default() -> Self {
        WrappedField::new(T::default(), P::default())
    }
}

impl<T, P> PartialEq for WrappedField<T, P>
where
    T: Clone + PartialEq,
    P: Policy<T> + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.policy == other.policy && self.get() == other.get()
    }
}

impl<T, P> Eq for WrappedField<T, P>
where
    T: Clone + Eq,
    P: Policy<T> + Eq,
{
}

impl<T, P> fmt::Debug for WrappedField<T, P>
where
    T: Clone + fmt::Debug,
    P: Policy<T> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedField")
            .field("value", &self.get())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T, P> fmt::Display for WrappedField<T, P>
where
    T: Clone + fmt::Display,
    P: Policy<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

/// Serializes as the value a reader would see, like the field itself.
impl<T, P> Serialize for WrappedField<T, P>
where
    T: Clone + Serialize,
    P: Policy<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}
