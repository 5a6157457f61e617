use thiserror::Error;

use crate::post::PostId;

/// Construction and insertion time failures. A lookup that finds nothing is
/// not an error, it returns `None` from the collection accessors.
#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("Unknown author tag '{0}'")]
    UnknownAuthor(String),

    #[error("Unsupported code language '{0}'")]
    UnsupportedLanguage(String),

    #[error("Unknown image sizing '{0}'")]
    UnknownSizing(String),

    #[error("Unknown box kind '{0}'")]
    UnknownBoxKind(String),

    #[error("Invalid image source '{0}'")]
    InvalidImageSource(String),

    #[error("Duplicate post id {0}")]
    DuplicateId(PostId),
}
