use serde::{Deserialize, Serialize};

/// A `{ key, value }` pair rendered as a dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub key: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}
