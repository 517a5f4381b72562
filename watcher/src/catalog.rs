//! Fixed catalog of review status codes and the message built from them.

use crate::types::HomeworkRecord;

/// Every status code the review API is allowed to emit, paired with the
/// verdict line shown to the student. The wording is product text and goes
/// into notifications verbatim.
pub const HOMEWORK_VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Looks up the verdict line for a status code.
pub fn verdict(code: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, text)| *text)
}

/// A record carried a status code outside the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("homework status {code:?} is not in the verdict catalog")]
pub struct UnknownStatusError {
    /// The unrecognized code, or `None` when the record had no status at all
    pub code: Option<String>,
}

/// Renders the notification text for one homework record.
///
/// A missing submission name is tolerated and shows up as a `null`
/// placeholder; a missing or unrecognized status is an error, because
/// inventing a verdict would misinform the student.
pub fn render_status(record: &HomeworkRecord) -> Result<String, UnknownStatusError> {
    let verdict = record
        .status
        .as_deref()
        .and_then(verdict)
        .ok_or_else(|| UnknownStatusError {
            code: record.status.clone(),
        })?;
    let name = record.homework_name.as_deref().unwrap_or("null");
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}
