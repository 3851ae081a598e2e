//! Domain types for the topic data file.
//!
//! Field names follow the JSON document (`linkGroups` is camelCase there).
//! Required fields have no serde default, so a record missing one fails to
//! deserialize instead of rendering blank.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// One entry of the topic list, rendered as a collapsible section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub title: String,
    /// Inserted verbatim; may contain inline markup.
    pub description: String,
    /// Display label, used as-is (no date parsing).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Render the section expanded.
    #[serde(default, deserialize_with = "null_as_false", skip_serializing_if = "is_false")]
    pub current: bool,
    /// Leave the topic out of the page entirely.
    #[serde(default, deserialize_with = "null_as_false", skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_groups: Vec<LinkGroup>,
}

impl Topic {
    /// Minimal topic with only the required fields set.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: None,
            current: false,
            hidden: false,
            note: None,
            link_groups: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Flags may be written as `null`; that reads as unset.
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Link groups
// ---------------------------------------------------------------------------

/// A titled sub-list of links inside a topic body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkGroup {
    pub title: String,
    /// Required, but may be empty.
    pub links: Vec<Link>,
}

/// A single anchor: `url` is the target, `text` the visible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub text: String,
}

impl Link {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self { url: url.into(), text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
