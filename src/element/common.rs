use serde::{Deserialize, Serialize};

/// Colour as authored: a CSS-style name (`"blue"`) or `#rrggbb`.
///
/// Kept verbatim so drawings round-trip exactly; only the renderer interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRef(String);

impl ColorRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for ColorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Font family name for text labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontRef(String);

impl FontRef {
    pub fn new(family: impl Into<String>) -> Self {
        Self(family.into())
    }

    pub fn family(&self) -> &str {
        &self.0
    }

    pub fn is_monospace(&self) -> bool {
        matches!(self.0.as_str(), "monospace" | "Courier" | "Menlo")
    }
}

impl From<&str> for FontRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
