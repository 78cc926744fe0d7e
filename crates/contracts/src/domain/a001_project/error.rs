use thiserror::Error;

/// Why a single catalog candidate could not be used.
///
/// Every variant only advances the acquisition chain; none of them is
/// reported past [`acquire`](super::acquire).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceFailure {
    #[error("source unreachable: {0}")]
    Unreachable(String),
    #[error("invalid status: {0}")]
    InvalidStatus(u16),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("payload is not a sequence")]
    NotASequence,
}

/// Why a raw catalog entry was dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("entry has no name")]
    MissingName,
    #[error("entry is not a project object: {0}")]
    Invalid(String),
}
