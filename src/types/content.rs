//! Canonical encoded content

use std::fmt;

use serde::{Deserialize, Serialize};

/// The exact text that gets drawn into the QR symbol.
///
/// Produced only by the encoder; there is no mutable access to the inner string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedContent(String);

impl EncodedContent {
    pub(crate) fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EncodedContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
