//! "More by this author" aggregation.
//!
//! Two works share an author when their author ids are equal, or when their
//! author names are equal ignoring case. Either condition is enough; the
//! name comparison still runs when both sides carry ids that differ.

use crate::models::Project;
use crate::sort::newest_first;
use crate::text::eq_ignore_case;

/// Number of other works shown by default.
pub const DEFAULT_AUTHOR_LIMIT: usize = 5;

/// The identity used to match works to an author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorIdentity<'a> {
    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
}

impl<'a> AuthorIdentity<'a> {
    pub fn of(project: &'a Project) -> Self {
        Self {
            id: non_blank(project.author_id.as_deref()),
            name: non_blank(project.author.as_deref()),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        non_blank(self.id).is_none() && non_blank(self.name).is_none()
    }

    /// Whether `project` was written by this author.
    pub fn wrote(&self, project: &Project) -> bool {
        let same_id = matches!(
            (non_blank(self.id), non_blank(project.author_id.as_deref())),
            (Some(a), Some(b)) if a == b
        );
        let same_name = matches!(
            (non_blank(self.name), non_blank(project.author.as_deref())),
            (Some(a), Some(b)) if eq_ignore_case(a, b)
        );
        same_id || same_name
    }
}

/// Blank ids and names carry no identity.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Other approved works by the author of `reference`, newest first.
pub fn other_works_by<'a>(
    reference: &Project,
    candidates: &'a [Project],
    limit: usize,
) -> Vec<&'a Project> {
    let author = AuthorIdentity::of(reference);
    let works = collect_works(
        author,
        candidates.iter().filter(|c| c.id != reference.id),
        limit,
    );

    tracing::debug!(
        reference = %reference.id,
        candidates = candidates.len(),
        returned = works.len(),
        limit,
        "collected other works by author"
    );
    works
}

/// Approved works by `author`, newest first. Used by the author profile,
/// where no single project is the reference.
pub fn works_by_author<'a>(
    author: AuthorIdentity<'_>,
    candidates: &'a [Project],
    limit: usize,
) -> Vec<&'a Project> {
    collect_works(author, candidates.iter(), limit)
}

fn collect_works<'a>(
    author: AuthorIdentity<'_>,
    candidates: impl Iterator<Item = &'a Project>,
    limit: usize,
) -> Vec<&'a Project> {
    if author.is_anonymous() {
        return Vec::new();
    }
    let mut works: Vec<&Project> = candidates
        .filter(|c| c.is_published() && author.wrote(c))
        .collect();
    works.sort_by(|a, b| newest_first(a, b));
    works.truncate(limit);
    works
}
