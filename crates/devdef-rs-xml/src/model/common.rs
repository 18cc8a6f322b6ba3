// crates/devdef-rs-xml/src/model/common.rs

//! Small building blocks shared by several elements.

use serde::{Deserialize, Serialize};

/// An element whose only payload is its text content, e.g. `<device-name>ESX3CM</device-name>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct TextElement {
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl From<&str> for TextElement {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

/// An element carrying a single `value` attribute.
///
/// Used for `<can-bitrate value="125"/>` and all flashloader reset wait times.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ValueAttribute {
    #[serde(rename = "@value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ValueAttribute {
    pub fn new(value: impl ToString) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }
}
