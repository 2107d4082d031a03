//! Catalog core for KnowledgeTrace.
//!
//! Pure functions over an in-memory collection of [`Project`] records:
//!
//! - [`filter()`]: multi-criteria selection (Thesis Finder, Home search)
//! - [`sort()`]: stable listing order
//! - [`related_to`]: weighted similarity ranking (Related Projects)
//! - [`other_works_by`]: same-author works (Author Profile)
//!
//! [`browse`] chains visibility, filtering and sorting for a listing page,
//! and [`facets()`] derives the filter options a collection offers.
//!
//! Nothing here performs I/O or mutates its input. Every result borrows from
//! the slice it was computed from.

pub mod authorship;
pub mod error;
pub mod facets;
pub mod filter;
pub mod listing;
pub mod models;
pub mod relevance;
pub mod sort;
pub mod text;

pub use authorship::{other_works_by, works_by_author, AuthorIdentity, DEFAULT_AUTHOR_LIMIT};
pub use error::CoreError;
pub use facets::{facets, status_summary, Facets, StatusSummary};
pub use filter::filter;
pub use listing::browse;
pub use models::*;
pub use relevance::{rank_related, related_to, score, ScoredProject, DEFAULT_RELATED_LIMIT};
pub use sort::sort;
