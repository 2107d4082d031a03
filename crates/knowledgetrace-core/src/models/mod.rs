//! Domain models for the KnowledgeTrace catalog.
//!
//! - [`Project`]: a thesis or student project as published by the platform API.
//! - [`FilterCriteria`]: the caller's current filter and sort selection.
//! - [`SortKey`] and [`Visibility`]: listing options.

mod criteria;
mod project;

pub use criteria::*;
pub use project::*;
