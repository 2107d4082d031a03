//! The listing pipeline: visibility gate, then filter, then sort.

use crate::filter::Prepared;
use crate::models::{FilterCriteria, Project, Visibility};
use crate::sort::sort;

/// Derive the displayed listing from the full collection.
///
/// Recomputed from scratch on every call; the caller re-invokes it whenever
/// the collection or the criteria change.
pub fn browse<'a>(
    projects: &'a [Project],
    criteria: &FilterCriteria,
    visibility: Visibility,
) -> Vec<&'a Project> {
    let prepared = Prepared::new(criteria);
    let visible = projects
        .iter()
        .filter(|p| visibility == Visibility::Review || p.is_published())
        .filter(|p| prepared.matches(p));
    let listing = sort(visible, criteria.sort_by);

    tracing::debug!(
        input = projects.len(),
        shown = listing.len(),
        ?visibility,
        sort = %criteria.sort_by,
        "built listing"
    );
    listing
}
