use std::path::PathBuf;

use thiserror::Error;

use osmrel_model::ElementKind;

/// A required top-level attribute was absent, or an element of a kind
/// that has no tabular shape reached the shaper. Both indicate a
/// data-integrity problem in the source and abort the run rather than
/// emitting a partial row.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("{kind} element {id} is missing required attribute {attribute:?}")]
    MissingAttribute {
        kind: ElementKind,
        id: String,
        attribute: &'static str,
    },
    #[error("{kind} elements have no tabular shape")]
    UnsupportedKind { kind: ElementKind },
}

/// Errors constructing a street-suffix correction table.
#[derive(Debug, Error)]
pub enum CorrectionsError {
    #[error(
        "canonical suffix {value:?} is also a correction key; \
         the table would not be idempotent"
    )]
    CanonicalIsKey { value: String },
    #[error("failed to read corrections file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse corrections file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
