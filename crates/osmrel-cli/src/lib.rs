//! CLI library components for the OSM-to-relational transpiler.

pub mod audit;
pub mod logging;
pub mod pipeline;
