use serde::{Deserialize, Serialize};

use crate::field::{Correction, Policy};

/// Upper-cases text on every write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllCaps;

impl Policy<String> for AllCaps {
    fn correct(&self, value: String) -> String {
        value.to_uppercase()
    }
}

/// Strips leading and trailing whitespace (newlines included).
///
/// By default the raw text is stored and trimmed on every read, so the
/// original stays available through [`WrappedField::stored`]. Use
/// [`Trimmed::on_write`] to trim once at write time instead.
///
/// [`WrappedField::stored`]: crate::WrappedField::stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trimmed {
    #[serde(default = "read_side")]
    correction: Correction,
}

fn read_side() -> Correction {
    Correction::OnRead
}

impl Trimmed {
    pub fn on_read() -> Self {
        Trimmed {
            correction: Correction::OnRead,
        }
    }

    pub fn on_write() -> Self {
        Trimmed {
            correction: Correction::OnWrite,
        }
    }
}

impl Default for Trimmed {
    fn default() -> Self {
        Self::on_read()
    }
}

impl Policy<String> for Trimmed {
    fn correction(&self) -> Correction {
        self.correction
    }

    fn correct(&self, value: String) -> String {
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_owned()
        }
    }
}
