use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::RecordError;

/// Category assigned to records that carry none.
pub const DEFAULT_CATEGORY: &str = "other";

/// Name given to reconstructed entries whose heading is blank.
pub const UNTITLED_PROJECT: &str = "Untitled project";

/// Substrings that mark a link as pointing to a code host.
pub const CODE_HOST_TOKENS: &[&str] = &["github", "gitlab", "bitbucket", "codeberg"];

// ============================================================================
// Aggregate
// ============================================================================

/// One normalized portfolio project.
///
/// Constructed only through [`ProjectDto`] (or [`Project::new`]), so
/// `category` is never blank and `tags` never contains blank entries.
///
/// A catalog entry without a name is dropped: nothing identifies it. An
/// entry rebuilt from page markup is already visible to the reader, so a
/// blank heading there becomes [`UNTITLED_PROJECT`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProjectDto")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "github", skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    pub featured: bool,
}

impl Project {
    /// Minimal record; blank categories fall back to [`DEFAULT_CATEGORY`].
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        let name = non_blank(Some(name.into())).unwrap_or_else(|| UNTITLED_PROJECT.to_string());
        Self {
            name,
            description: String::new(),
            category: normalize_category(Some(category.into())),
            tags: Vec::new(),
            image: None,
            url: None,
            repository_url: None,
            featured: false,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = normalize_tags(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_string();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// The single link a card shows.
    ///
    /// A repository link wins when it points to a code host; otherwise the
    /// generic url, and only then a repository link on an unknown host.
    pub fn primary_link(&self) -> Option<&str> {
        match (self.repository_url.as_deref(), self.url.as_deref()) {
            (Some(repo), _) if is_code_host(repo) => Some(repo),
            (_, Some(url)) => Some(url),
            (repo, None) => repo,
        }
    }

    /// Image source, empty when the record has none.
    pub fn image_src(&self) -> &str {
        self.image.as_deref().unwrap_or_default()
    }
}

pub fn is_code_host(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    CODE_HOST_TOKENS.iter().any(|token| lower.contains(token))
}

// ============================================================================
// DTO
// ============================================================================

/// Lenient wire shape of a catalog entry: every field optional.
///
/// A field of the wrong type reads as absent, and non-string tags are
/// skipped; only the entry itself has to be an object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, alias = "repositoryUrl", deserialize_with = "lenient_text")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub featured: Option<bool>,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_tags<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// `true`, `"true"`, `"1"`, `"yes"` and non-zero numbers are set.
fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => Some(flag),
        Value::String(s) => Some(matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes"
        )),
        Value::Number(n) => Some(n.as_f64().is_some_and(|v| v != 0.0)),
        _ => None,
    })
}

impl TryFrom<ProjectDto> for Project {
    type Error = RecordError;

    fn try_from(dto: ProjectDto) -> Result<Self, Self::Error> {
        let name = non_blank(dto.name).ok_or(RecordError::MissingName)?;
        Ok(Self {
            name,
            description: dto
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            category: normalize_category(dto.category),
            tags: normalize_tags(dto.tags.unwrap_or_default()),
            image: non_blank(dto.image),
            url: non_blank(dto.url),
            repository_url: non_blank(dto.github),
            featured: dto.featured.unwrap_or(false),
        })
    }
}

/// Normalize one raw JSON entry.
pub fn normalize_value(value: Value) -> Result<Project, RecordError> {
    if !value.is_object() {
        return Err(RecordError::Invalid("entry is not an object".to_string()));
    }
    let dto: ProjectDto =
        serde_json::from_value(value).map_err(|e| RecordError::Invalid(e.to_string()))?;
    Project::try_from(dto)
}

/// Normalize a fetched sequence, dropping entries that cannot become records.
///
/// Order of the surviving entries is preserved.
pub fn normalize_records(values: Vec<Value>) -> Vec<Project> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match normalize_value(value) {
            Ok(project) => Some(project),
            Err(e) => {
                log::warn!("skipping catalog entry #{index}: {e}");
                None
            }
        })
        .collect()
}

pub(crate) fn normalize_category(category: Option<String>) -> String {
    non_blank(category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

pub(crate) fn normalize_tags<I: IntoIterator<Item = String>>(tags: I) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
