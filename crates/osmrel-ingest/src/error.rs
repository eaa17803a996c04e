use std::path::PathBuf;

use thiserror::Error;

use osmrel_model::ElementKind;

/// Errors raised while streaming elements out of the source document.
///
/// All of these are fatal for a run: a document that cannot be parsed
/// cannot be partially trusted, so the pipeline aborts rather than
/// resynchronizing mid-stream.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed document: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed attribute list: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
    #[error("invalid escape sequence in attribute value: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("attribute value is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("document ended inside an open {kind} element")]
    TruncatedElement { kind: ElementKind },
}

pub type Result<T> = std::result::Result<T, IngestError>;
