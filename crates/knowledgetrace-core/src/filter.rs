//! Multi-criteria filtering for the Thesis Finder and Home search.
//!
//! Criteria combine with AND across dimensions and OR within a list
//! dimension. A project missing the field an active criterion targets never
//! matches that criterion.

use crate::models::{FilterCriteria, Project};
use crate::text::{contains_folded, fold, plain_text};

/// Criteria with every value trimmed and folded once, ahead of the scan.
pub(crate) struct Prepared {
    keywords: Option<String>,
    tech_stack: Vec<String>,
    tags: Vec<String>,
    author: Option<String>,
    supervisor: Option<String>,
    year: Option<String>,
}

impl Prepared {
    pub(crate) fn new(criteria: &FilterCriteria) -> Self {
        Self {
            keywords: folded_text(&criteria.keywords),
            tech_stack: folded_list(&criteria.tech_stack),
            tags: folded_list(&criteria.tags),
            author: folded_text(&criteria.author),
            supervisor: folded_text(&criteria.supervisor),
            // Year compares exactly, so only trimming applies.
            year: Some(criteria.year.trim().to_string()).filter(|y| !y.is_empty()),
        }
    }

    pub(crate) fn matches(&self, project: &Project) -> bool {
        self.keywords.as_deref().map_or(true, |k| matches_keywords(project, k))
            && any_shared(&project.tech_stack, &self.tech_stack)
            && any_shared(&project.tags, &self.tags)
            && self
                .author
                .as_deref()
                .map_or(true, |a| field_contains(project.author.as_deref(), a))
            && self
                .supervisor
                .as_deref()
                .map_or(true, |s| field_contains(project.supervisor.as_deref(), s))
            && self
                .year
                .as_deref()
                .map_or(true, |y| project.year_text().is_some_and(|py| py == y))
    }
}

/// Select the projects that satisfy every active criterion, preserving input
/// order.
///
/// `criteria.sort_by` is ignored here; see [`crate::sort`].
pub fn filter<'a>(projects: &'a [Project], criteria: &FilterCriteria) -> Vec<&'a Project> {
    let prepared = Prepared::new(criteria);
    let kept: Vec<&Project> = projects.iter().filter(|p| prepared.matches(p)).collect();

    tracing::debug!(
        input = projects.len(),
        kept = kept.len(),
        active = criteria.active_count(),
        "filtered projects"
    );
    kept
}

/// Whether a single project satisfies `criteria`.
pub fn matches(project: &Project, criteria: &FilterCriteria) -> bool {
    Prepared::new(criteria).matches(project)
}

fn matches_keywords(project: &Project, needle: &str) -> bool {
    contains_folded(&project.title, needle)
        || project
            .abstract_text
            .as_deref()
            .is_some_and(|html| contains_folded(&plain_text(html), needle))
        || project
            .description
            .as_deref()
            .is_some_and(|html| contains_folded(&plain_text(html), needle))
        || field_contains(project.author.as_deref(), needle)
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| contains_folded(value, needle))
}

/// An empty `wanted` list places no constraint.
fn any_shared(values: &[String], wanted: &[String]) -> bool {
    wanted.is_empty() || values.iter().any(|v| wanted.contains(&fold(v)))
}

fn folded_text(value: &str) -> Option<String> {
    Some(fold(value)).filter(|v| !v.is_empty())
}

fn folded_list(values: &[String]) -> Vec<String> {
    values.iter().filter_map(|v| folded_text(v)).collect()
}
