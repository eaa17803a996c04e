//! Streaming reader over an OSM XML document.
//!
//! The reader yields one [`RawElement`] at a time for a caller-selected
//! set of element kinds and never materializes more than the current
//! element's subtree. Event buffers are reused and cleared after every
//! event, so peak memory is bounded by the largest single element, not
//! the document.
//!
//! The sequence is forward-only and restartable from the start only:
//! construct a new reader to rewind.
//!
//! # Usage
//!
//! ```ignore
//! use osmrel_ingest::OsmReader;
//!
//! let reader = OsmReader::from_path("map.osm")?;
//! for element in reader {
//!     let element = element?;
//!     // shape, validate, write
//! }
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

use osmrel_model::{ElementKind, RawElement, RawTag};

use crate::error::{IngestError, Result};

/// Lazy, forward-only iterator of top-level elements.
#[derive(Debug)]
pub struct OsmReader<R: BufRead> {
    reader: Reader<R>,
    kinds: Vec<ElementKind>,
    /// Reused event buffer; cleared after every event.
    buf: Vec<u8>,
    /// Scratch buffer for child events and skipped subtrees.
    child_buf: Vec<u8>,
    /// Set after the first error or end-of-document; the iterator is fused.
    done: bool,
}

impl OsmReader<BufReader<File>> {
    /// Open a document from disk, yielding nodes and ways.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> OsmReader<R> {
    /// Wrap an already-open source, yielding nodes and ways.
    pub fn from_reader(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            kinds: vec![ElementKind::Node, ElementKind::Way],
            buf: Vec::new(),
            child_buf: Vec::new(),
            done: false,
        }
    }

    /// Restrict the yielded element kinds. Unselected kinds are skipped
    /// subtree-wise without being materialized.
    #[must_use]
    pub fn with_kinds(mut self, kinds: &[ElementKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    fn next_element(&mut self) -> Result<Option<RawElement>> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Eof => return Ok(None),
                Event::Start(start) => {
                    match element_kind(&start) {
                        Some(kind) if self.kinds.contains(&kind) => {
                            let mut element = RawElement::new(kind);
                            read_attributes(&start, &mut element.attributes)?;
                            self.collect_children(&mut element)?;
                            trace!(kind = %element.kind, id = element.id(), "element read");
                            return Ok(Some(element));
                        }
                        Some(_) => {
                            // An element kind the caller did not select
                            // (typically relation): skip its whole subtree.
                            let end = start.to_end().into_owned();
                            self.child_buf.clear();
                            self.reader
                                .read_to_end_into(end.name(), &mut self.child_buf)?;
                        }
                        // Containers such as the document root: descend.
                        None => {}
                    }
                }
                Event::Empty(start) => {
                    if let Some(kind) = element_kind(&start) {
                        if self.kinds.contains(&kind) {
                            let mut element = RawElement::new(kind);
                            read_attributes(&start, &mut element.attributes)?;
                            trace!(kind = %element.kind, id = element.id(), "element read");
                            return Ok(Some(element));
                        }
                    }
                }
                // Prologue, whitespace, comments, and closing tags of
                // containers we descended into.
                _ => {}
            }
        }
    }

    /// Consume events until the element's closing tag, accumulating its
    /// `tag` and `nd` children. Unknown nested subtrees are skipped.
    fn collect_children(&mut self, element: &mut RawElement) -> Result<()> {
        let end_name = element.kind.as_str().as_bytes().to_vec();
        loop {
            self.child_buf.clear();
            match self.reader.read_event_into(&mut self.child_buf)? {
                Event::Eof => {
                    return Err(IngestError::TruncatedElement {
                        kind: element.kind,
                    });
                }
                Event::Empty(child) => read_child(&child, element)?,
                Event::Start(child) => {
                    // Known children in non-self-closing form and foreign
                    // subtrees alike are drained to their end tag.
                    read_child(&child, element)?;
                    let end = child.to_end().into_owned();
                    let mut skip_buf = Vec::new();
                    self.reader.read_to_end_into(end.name(), &mut skip_buf)?;
                }
                Event::End(end) => {
                    if end.name().as_ref() == end_name.as_slice() {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for OsmReader<R> {
    type Item = Result<RawElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_element() {
            Ok(Some(element)) => Some(Ok(element)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

/// Classify a start tag as one of the top-level element kinds.
fn element_kind(start: &BytesStart<'_>) -> Option<ElementKind> {
    match start.name().as_ref() {
        b"node" => Some(ElementKind::Node),
        b"way" => Some(ElementKind::Way),
        b"relation" => Some(ElementKind::Relation),
        _ => None,
    }
}

/// Decode all attributes of a tag into owned key/value pairs.
fn read_attributes(
    start: &BytesStart<'_>,
    out: &mut std::collections::BTreeMap<String, String>,
) -> Result<()> {
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = str::from_utf8(attribute.key.as_ref())?.to_string();
        let value = decode_value(attribute.value.as_ref())?;
        out.insert(key, value);
    }
    Ok(())
}

/// Record one `tag` or `nd` child on the element; other child names are
/// left untouched.
fn read_child(child: &BytesStart<'_>, element: &mut RawElement) -> Result<()> {
    match child.name().as_ref() {
        b"tag" => {
            let mut key = None;
            let mut value = None;
            for attribute in child.attributes() {
                let attribute = attribute?;
                match attribute.key.as_ref() {
                    b"k" => key = Some(decode_value(attribute.value.as_ref())?),
                    b"v" => value = Some(decode_value(attribute.value.as_ref())?),
                    _ => {}
                }
            }
            if let (Some(key), Some(value)) = (key, value) {
                element.tags.push(RawTag { key, value });
            }
        }
        b"nd" => {
            for attribute in child.attributes() {
                let attribute = attribute?;
                if attribute.key.as_ref() == b"ref" {
                    element
                        .node_refs
                        .push(decode_value(attribute.value.as_ref())?);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Raw attribute bytes to an owned string with XML entities resolved.
fn decode_value(raw: &[u8]) -> Result<String> {
    let text = str::from_utf8(raw)?;
    Ok(unescape(text)?.into_owned())
}
