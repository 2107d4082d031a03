//! Filter options and review counts derived from a collection.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Project, ProjectStatus};
use crate::sort::compare_titles;
use crate::text::fold;

/// Distinct values available to each filter dimension.
///
/// Values are de-duplicated ignoring case; the first spelling seen is kept.
/// Text facets are ordered like titles, years newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub tech_stack: Vec<String>,
    pub tags: Vec<String>,
    pub supervisors: Vec<String>,
    pub years: Vec<String>,
}

pub fn facets<'a, I>(projects: I) -> Facets
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut tech = Distinct::default();
    let mut tags = Distinct::default();
    let mut supervisors = Distinct::default();
    let mut years = Distinct::default();

    for project in projects {
        project.tech_stack.iter().for_each(|v| tech.push(v));
        project.tags.iter().for_each(|v| tags.push(v));
        if let Some(s) = &project.supervisor {
            supervisors.push(s);
        }
        if let Some(y) = project.year_text() {
            years.push(&y);
        }
    }

    let mut years = years.values;
    years.sort_by(|a, b| compare_years(b, a));

    Facets {
        tech_stack: tech.sorted(),
        tags: tags.sorted(),
        supervisors: supervisors.sorted(),
        years,
    }
}

/// Per-status counts for the review dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    pub draft: usize,
    pub other: usize,
}

impl StatusSummary {
    pub fn total(&self) -> usize {
        self.approved + self.pending + self.rejected + self.draft + self.other
    }
}

pub fn status_summary<'a, I>(projects: I) -> StatusSummary
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .fold(StatusSummary::default(), |mut summary, project| {
            match project.status {
                ProjectStatus::Approved => summary.approved += 1,
                ProjectStatus::Pending => summary.pending += 1,
                ProjectStatus::Rejected => summary.rejected += 1,
                ProjectStatus::Draft => summary.draft += 1,
                ProjectStatus::Other(_) => summary.other += 1,
            }
            summary
        })
}

#[derive(Default)]
struct Distinct {
    seen: HashSet<String>,
    values: Vec<String>,
}

impl Distinct {
    fn push(&mut self, value: &str) {
        let key = fold(value);
        if key.is_empty() || !self.seen.insert(key) {
            return;
        }
        self.values.push(value.trim().to_string());
    }

    fn sorted(mut self) -> Vec<String> {
        self.values.sort_by(|a, b| compare_titles(a, b));
        self.values
    }
}

/// Numeric years compare numerically and sort after non-numeric labels.
fn compare_years(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Ok(_), Err(_)) => Ordering::Greater,
        (Err(_), Ok(_)) => Ordering::Less,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_numeric_first_when_descending() {
        let mut years = vec!["2023".to_string(), "n/a".to_string(), "2024".to_string()];
        years.sort_by(|a, b| compare_years(b, a));
        assert_eq!(years, vec!["2024", "2023", "n/a"]);
    }
}
