//! # sitegen-build
//!
//! Build orchestration and atomic output writing.
//!
//! Call [`run`] with a site root to read `topics.json` and `template.html`
//! and write `index.html`, or [`build_site`] with an explicit
//! [`SiteLayout`](sitegen_core::SiteLayout).

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::BuildError;
pub use pipeline::{build_site, run, BuildSummary};
pub use writer::WriteResult;
