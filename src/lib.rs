//! KnowledgeTrace catalog tooling.
//!
//! The pure engines live in [`knowledgetrace_core`]; this crate adds the
//! operator surface around them: loading a catalog export, user
//! configuration, text rendering and the `kt` command line.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod render;
