use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Failures that abort a whole extraction call.
///
/// Row-level mismatches never show up here: rows that don't fit their
/// schema are skipped and unparseable numbers become zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The input carries no markup at all (blank, or plain text).
    #[error("fragment is not parseable as markup")]
    MarkupParse,

    /// A required singleton fragment (e.g. the header block) is absent.
    #[error("required fragment `{selector}` not found")]
    StructureNotFound { selector: String },

    /// The boosted creature header did not yield the named field.
    #[error("boosted creature is malformed: missing {field}")]
    BoostedCreatureMalformed { field: &'static str },

    /// Requested highscore page is beyond what the page advertises.
    #[error("requested page {requested} is out of range (total pages: {total})")]
    PageOutOfRange { requested: u32, total: u32 },
}

impl ExtractError {
    pub fn structure_not_found(selector: impl Into<String>) -> Self {
        ExtractError::StructureNotFound {
            selector: selector.into(),
        }
    }

    /// True for errors caused by caller input rather than by the page shape.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ExtractError::PageOutOfRange { .. })
    }
}
