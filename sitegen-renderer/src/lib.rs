//! # sitegen-renderer
//!
//! Tera-based fragment renderer: turns [`Topic`](sitegen_core::Topic)
//! records into `<details>` blocks and splices them into a page template.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sitegen_core::Topic;
//! use sitegen_renderer::{page, Renderer};
//!
//! fn render(topics: &[Topic], template: &str) -> Option<String> {
//!     let renderer = Renderer::new().ok()?;
//!     let block = page::render_topics_block(&renderer, topics).ok()?;
//!     Some(page::substitute_marker(template, "<!-- TOPICS -->", &block.html))
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod page;

pub use context::{LinkGroupContext, TopicContext};
pub use engine::Renderer;
pub use error::RenderError;
pub use page::{render_topics_block, substitute_marker, TopicsBlock};
