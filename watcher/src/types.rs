//! Shape checks for the review API response.

use serde::Deserialize;
use serde_json::Value;

/// One homework entry from the review API. Both fields may be absent on the
/// wire; what that means is decided downstream, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeworkRecord {
    /// Submission name
    #[serde(default)]
    pub homework_name: Option<String>,
    /// Review status code, looked up in the verdict catalog
    #[serde(default)]
    pub status: Option<String>,
}

/// The response body did not have the agreed shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body or one of its parts had the wrong JSON type.
    #[error("{0}")]
    Shape(String),
    /// A required key is absent.
    #[error("response has no `{0}` key")]
    MissingKey(&'static str),
}

/// Checks the decoded response body and pulls out the homework entries,
/// newest first.
///
/// An empty list is a valid answer: nothing changed since the requested
/// timestamp. Extraction never mutates the body, so running it twice over
/// the same response yields the same records.
pub fn extract_homeworks(response: &Value) -> Result<Vec<HomeworkRecord>, ValidationError> {
    let fields = response
        .as_object()
        .filter(|fields| !fields.is_empty())
        .ok_or_else(|| ValidationError::Shape("response is not a non-empty JSON object".into()))?;
    let homeworks = fields
        .get("homeworks")
        .ok_or(ValidationError::MissingKey("homeworks"))?;
    let entries = homeworks
        .as_array()
        .ok_or_else(|| ValidationError::Shape("`homeworks` is not an array".into()))?;
    entries
        .iter()
        .map(|entry| {
            HomeworkRecord::deserialize(entry)
                .map_err(|err| ValidationError::Shape(format!("bad homework entry: {err}")))
        })
        .collect()
}
