//! sitegen core library — topic types, site layout, data loading, errors.
//!
//! - [`types`] — [`Topic`], [`LinkGroup`], [`Link`]
//! - [`layout`] — [`SiteLayout`], the fixed file names of a site root
//! - [`data`] — parse and load the topic list
//! - [`error`] — [`DataError`]

pub mod data;
pub mod error;
pub mod layout;
pub mod types;

pub use error::DataError;
pub use layout::SiteLayout;
pub use types::{Link, LinkGroup, Topic};
