use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Opaque, non-empty project identifier assigned by the platform API.
///
/// Accepts both the `id` and the document-store style `_id` key on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        Self::try_from(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(CoreError::InvalidProjectId);
        }
        Ok(Self(value))
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A thesis or student project submitted to the showcase.
///
/// The record is resolved once when it crosses into the core (usually by
/// deserializing an API payload). Loose inputs such as `null` lists, numeric
/// years or blank strings are normalized here so the engines never have to
/// second-guess a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: ProjectId,
    pub title: String,
    /// Rich-text abstract; may contain HTML markup.
    #[serde(
        rename = "abstract",
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Scalar>,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Scalar>,
}

impl Project {
    /// Create a minimal pending project. Mostly useful for fixtures and for
    /// callers assembling records by hand.
    pub fn new(id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            abstract_text: None,
            description: None,
            tech_stack: Vec::new(),
            tags: Vec::new(),
            author: None,
            author_id: None,
            supervisor: None,
            year: None,
            status: ProjectStatus::default(),
            created_at: None,
            date: None,
        }
    }

    /// Whether the project is eligible for public listings and aggregate views.
    pub fn is_published(&self) -> bool {
        self.status == ProjectStatus::Approved
    }

    /// The year coerced to its string form, the way filters compare it.
    pub fn year_text(&self) -> Option<String> {
        self.year.as_ref().map(Scalar::to_string)
    }

    /// The recency timestamp: `createdAt` when present, otherwise `date`.
    ///
    /// A present but unparseable `createdAt` does not fall back to `date`;
    /// both that case and a missing value yield `None`, which orders as the
    /// earliest possible instant.
    pub fn recency(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_ref()
            .or(self.date.as_ref())
            .and_then(Scalar::to_timestamp)
    }
}

/// The lifecycle state of a submission.
///
/// Only `Approved` is publicly visible. Any status string the platform sends
/// that is not one of the known values is preserved as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Approved,
    #[default]
    Pending,
    Rejected,
    Draft,
    Other(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Draft => "draft",
            Self::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "approved" => Self::Approved,
            "pending" => Self::Pending,
            "rejected" => Self::Rejected,
            "draft" => Self::Draft,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loosely typed JSON scalar, used for fields the API sends as either a
/// number or a string (`year`, `createdAt`, `date`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Interpret the scalar as a timestamp.
    ///
    /// Numbers are epoch milliseconds. Strings may be RFC 3339, a naive
    /// `YYYY-MM-DDTHH:MM:SS[.fff]` (taken as UTC), or a bare `YYYY-MM-DD`
    /// (UTC midnight).
    pub fn to_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Int(ms) => Utc.timestamp_millis_opt(*ms).single(),
            Self::Float(ms) if ms.is_finite() => Utc.timestamp_millis_opt(*ms as i64).single(),
            Self::Float(_) => None,
            Self::Text(s) => parse_timestamp(s),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s.trim()),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn status_or_pending<'de, D>(deserializer: D) -> Result<ProjectStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(ProjectStatus::from).unwrap_or_default())
}

fn list_or_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_api_payload() {
        let project: Project = serde_json::from_value(json!({
            "_id": "64f1",
            "title": "Thesis Finder",
            "abstract": "<p>Search</p>",
            "techStack": ["React", "Node"],
            "tags": null,
            "author": "  ",
            "authorId": "u1",
            "year": 2024,
            "status": "approved",
            "createdAt": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(project.id.as_str(), "64f1");
        assert_eq!(project.tech_stack, vec!["React", "Node"]);
        assert!(project.tags.is_empty());
        assert!(project.author.is_none());
        assert_eq!(project.year_text().as_deref(), Some("2024"));
        assert!(project.is_published());
    }

    #[test]
    fn test_rejects_empty_id() {
        let result = serde_json::from_value::<Project>(json!({ "id": "", "title": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_status_is_not_published() {
        let project: Project =
            serde_json::from_value(json!({ "id": "1", "title": "x", "status": "archived" }))
                .unwrap();
        assert_eq!(project.status, ProjectStatus::Other("archived".to_string()));
        assert!(!project.is_published());
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let project: Project = serde_json::from_value(json!({ "id": "1", "title": "x" })).unwrap();
        assert_eq!(project.status, ProjectStatus::Pending);

        let project: Project =
            serde_json::from_value(json!({ "id": "1", "title": "x", "status": null })).unwrap();
        assert_eq!(project.status, ProjectStatus::Pending);
    }

    #[test]
    fn test_timestamp_forms() {
        let rfc = Scalar::from("2024-01-02T03:04:05+02:00").to_timestamp().unwrap();
        assert_eq!(rfc.to_rfc3339(), "2024-01-02T01:04:05+00:00");

        let naive = Scalar::from("2024-01-02T03:04:05.250").to_timestamp().unwrap();
        assert_eq!(naive.timestamp_subsec_millis(), 250);

        let day = Scalar::from("2024-01-02").to_timestamp().unwrap();
        assert_eq!(day.to_rfc3339(), "2024-01-02T00:00:00+00:00");

        let millis = Scalar::Int(0).to_timestamp().unwrap();
        assert_eq!(millis.to_rfc3339(), "1970-01-01T00:00:00+00:00");

        assert!(Scalar::from("not a date").to_timestamp().is_none());
    }

    #[test]
    fn test_invalid_created_at_does_not_fall_back_to_date() {
        let mut project = Project::new(ProjectId::new("1").unwrap(), "x");
        project.date = Some(Scalar::from("2024-01-01"));
        assert!(project.recency().is_some());

        project.created_at = Some(Scalar::from("garbage"));
        assert!(project.recency().is_none());
    }
}
