//! Stable listing order.
//!
//! Title ordering is case-insensitive first. Titles that differ only in
//! case are then ordered lowercase-first at the first differing character,
//! and identical titles keep their input order.

use std::cmp::Ordering;

use crate::models::{Project, SortKey};

/// Return a new, stably sorted view of `projects`.
pub fn sort<'a, I>(projects: I, key: SortKey) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut sorted: Vec<&Project> = projects.into_iter().collect();
    sorted.sort_by(|a, b| compare(a, b, key));
    tracing::trace!(count = sorted.len(), key = %key, "sorted projects");
    sorted
}

/// The comparator behind [`sort`].
pub fn compare(a: &Project, b: &Project, key: SortKey) -> Ordering {
    match key {
        SortKey::DateDesc => newest_first(a, b),
        SortKey::DateAsc => newest_first(b, a),
        SortKey::TitleAsc => compare_titles(&a.title, &b.title),
        SortKey::TitleDesc => compare_titles(&b.title, &a.title),
    }
}

/// Recency descending. Missing timestamps compare as the earliest instant,
/// so they land last.
pub fn newest_first(a: &Project, b: &Project) -> Ordering {
    // `None < Some(_)` for Option, which is the earliest-instant rule.
    b.recency().cmp(&a.recency())
}

/// Case-insensitive title comparison with a lowercase-first case tie-break.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let primary = a.chars().flat_map(char::to_lowercase);
    let other = b.chars().flat_map(char::to_lowercase);
    primary.cmp(other).then_with(|| case_tiebreak(a, b))
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}
