//! Human-readable game references
//!
//! A reference is a display label, not a security token. Collisions are
//! possible and tolerated.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const REFERENCE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Upper-cased prefix of a random v4 UUID, e.g. `3DB2C149E8`
    #[must_use]
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex[..REFERENCE_LEN].to_uppercase())
    }

    /// Wrap an existing label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
