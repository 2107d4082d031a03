//! Related-project ranking.
//!
//! A candidate's score is the weighted overlap with the reference project:
//! shared tech-stack values weigh [`TECH_WEIGHT`], shared tags
//! [`TAG_WEIGHT`], and a shared supervisor adds [`SUPERVISOR_BONUS`] once.
//! Overlaps are counted over distinct case-insensitive values, so duplicate
//! entries on either side never inflate the score.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::Project;
use crate::text::{eq_ignore_case, fold};

pub const TECH_WEIGHT: u32 = 3;
pub const TAG_WEIGHT: u32 = 2;
pub const SUPERVISOR_BONUS: u32 = 1;

/// Number of related projects shown by default.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// A candidate together with its relevance score.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredProject<'a> {
    pub project: &'a Project,
    pub score: u32,
}

/// Score `candidate` against `reference`. Status and identity are not
/// considered here; see [`rank_related`].
pub fn score(reference: &Project, candidate: &Project) -> u32 {
    let tech = shared_count(&reference.tech_stack, &candidate.tech_stack);
    let tags = shared_count(&reference.tags, &candidate.tags);
    let supervisor = match (&reference.supervisor, &candidate.supervisor) {
        (Some(a), Some(b)) if !fold(a).is_empty() && eq_ignore_case(a, b) => SUPERVISOR_BONUS,
        _ => 0,
    };
    tech * TECH_WEIGHT + tags * TAG_WEIGHT + supervisor
}

/// Rank approved candidates by relevance to `reference`, best first.
///
/// The reference itself (matched by id) and zero-score candidates are
/// dropped. Equal scores keep their input order. At most `limit` entries are
/// returned.
pub fn rank_related<'a>(
    reference: &Project,
    candidates: &'a [Project],
    limit: usize,
) -> Vec<ScoredProject<'a>> {
    let mut scored: Vec<ScoredProject<'a>> = candidates
        .iter()
        .filter(|c| c.id != reference.id && c.is_published())
        .map(|project| ScoredProject {
            project,
            score: score(reference, project),
        })
        .filter(|s| s.score > 0)
        .collect();

    // Stable, so ties stay in input order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);

    tracing::debug!(
        reference = %reference.id,
        candidates = candidates.len(),
        returned = scored.len(),
        limit,
        "ranked related projects"
    );
    scored
}

/// The projects most related to `reference`, best first.
pub fn related_to<'a>(reference: &Project, candidates: &'a [Project], limit: usize) -> Vec<&'a Project> {
    rank_related(reference, candidates, limit)
        .into_iter()
        .map(|s| s.project)
        .collect()
}

fn shared_count(a: &[String], b: &[String]) -> u32 {
    let left = distinct(a);
    let shared = distinct(b).intersection(&left).count();
    u32::try_from(shared).unwrap_or(u32::MAX)
}

fn distinct(values: &[String]) -> HashSet<String> {
    values
        .iter()
        .map(|v| fold(v))
        .filter(|v| !v.is_empty())
        .collect()
}
