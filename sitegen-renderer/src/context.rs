//! Render contexts — serializable payloads built from [`Topic`] and
//! [`LinkGroup`].
//!
//! Optional fields are flattened to what the templates expect: `date` is
//! always a string (empty when absent), and the rendered link groups are
//! passed in as one pre-joined block.

use serde::Serialize;

use sitegen_core::types::{Link, LinkGroup, Topic};

use crate::error::RenderError;

/// Payload for `topic.html.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct TopicContext {
    pub title: String,
    pub description: String,
    pub date: String,
    pub current: bool,
    pub note: Option<String>,
    /// Output of the link group renderer; empty when the topic has none.
    pub link_groups: String,
}

/// Payload for `link_group.html.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct LinkGroupContext {
    pub title: String,
    pub links: Vec<LinkContext>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkContext {
    pub url: String,
    pub text: String,
}

impl TopicContext {
    /// Build a [`TopicContext`] from a topic and its already-rendered groups.
    pub fn from_topic(topic: &Topic, link_groups: String) -> Self {
        TopicContext {
            title: topic.title.clone(),
            description: topic.description.clone(),
            date: topic.date.clone().unwrap_or_default(),
            current: topic.current,
            note: topic.note.clone(),
            link_groups,
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

impl LinkGroupContext {
    pub fn from_group(group: &LinkGroup) -> Self {
        LinkGroupContext {
            title: group.title.clone(),
            links: group.links.iter().map(LinkContext::from).collect(),
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

impl From<&Link> for LinkContext {
    fn from(link: &Link) -> Self {
        LinkContext { url: link.url.clone(), text: link.text.clone() }
    }
}
