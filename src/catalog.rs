//! Loading the project collection exported from the platform API.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use knowledgetrace_core::Project;
use serde_json::Value;
use thiserror::Error;

/// Lookup errors against a loaded catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("project not found: {0}")]
    NotFound(String),
}

/// The full project collection held in memory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Parse an export: either a bare array of projects or the API's list
    /// envelope `{ "projects": [...] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut export: Value =
            serde_json::from_str(json).context("Failed to parse catalog export")?;
        let list = if export.get("projects").is_some() {
            export["projects"].take()
        } else {
            export
        };
        let projects: Vec<Project> =
            serde_json::from_value(list).context("Catalog export is not a list of projects")?;
        Ok(Self::new(projects))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog = Self::from_json(&content)
            .with_context(|| format!("Invalid catalog file {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            projects = catalog.projects.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Result<&Project, CatalogError> {
        self.projects
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
