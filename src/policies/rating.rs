use serde::{Deserialize, Serialize};

use crate::field::{Policy, Project};

/// Projects an integer rating as a row of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Rating {
    symbol: String,
}

impl Rating {
    pub const DEFAULT_SYMBOL: &'static str = "⭐";

    pub fn new(symbol: impl Into<String>) -> Self {
        Rating {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::new(Self::DEFAULT_SYMBOL)
    }
}

impl From<String> for Rating {
    fn from(symbol: String) -> Self {
        Rating { symbol }
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> String {
        rating.symbol
    }
}

impl Policy<i32> for Rating {}

impl Project<i32> for Rating {
    type Output = String;

    /// Negative ratings project to nothing, like zero.
    fn project(&self, value: &i32) -> String {
        let count = usize::try_from(*value).unwrap_or(0);
        self.symbol.repeat(count)
    }
}
