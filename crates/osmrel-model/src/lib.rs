pub mod element;
pub mod processing;
pub mod rows;
pub mod table;

pub use element::{ElementKind, RawElement, RawTag};
pub use processing::{PipelineOptions, PipelineSummary};
pub use rows::{DEFAULT_TAG_TYPE, NodeRow, ShapedElement, TagRow, WayNodeRow, WayRow};
pub use table::Table;
