use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The ordering applied to a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first; undated projects last.
    #[default]
    DateDesc,
    /// Oldest first; undated projects first.
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [Self::DateDesc, Self::DateAsc, Self::TitleAsc, Self::TitleDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date-desc" => Ok(Self::DateDesc),
            "date-asc" => Ok(Self::DateAsc),
            "title-asc" => Ok(Self::TitleAsc),
            "title-desc" => Ok(Self::TitleDesc),
            other => Err(CoreError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which lifecycle states a listing may show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Approved projects only (public pages).
    #[default]
    Public,
    /// Every status (admin review dashboard).
    Review,
}

impl FromStr for Visibility {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "public" => Ok(Self::Public),
            "review" => Ok(Self::Review),
            other => Err(CoreError::UnknownVisibility(other.to_string())),
        }
    }
}

/// The active filter and sort selection for a listing.
///
/// A value object: callers build a new one whenever the selection changes and
/// pass it to [`crate::filter`] or [`crate::browse`]. Blank strings and empty
/// lists place no constraint on their dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub tech_stack: Vec<String>,
    pub tags: Vec<String>,
    pub author: String,
    pub supervisor: String,
    pub year: String,
    pub keywords: String,
    pub sort_by: SortKey,
}

impl FilterCriteria {
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_tech<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tech.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_supervisor(mut self, supervisor: impl Into<String>) -> Self {
        self.supervisor = supervisor.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Number of dimensions that currently constrain the result.
    pub fn active_count(&self) -> usize {
        let lists = [&self.tech_stack, &self.tags]
            .into_iter()
            .filter(|values| values.iter().any(|v| !v.trim().is_empty()))
            .count();
        let texts = [&self.author, &self.supervisor, &self.year, &self.keywords]
            .into_iter()
            .filter(|value| !value.trim().is_empty())
            .count();
        lists + texts
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}
