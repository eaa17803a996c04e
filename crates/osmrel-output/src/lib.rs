pub mod writers;

pub use writers::{OutputError, TableWriters};
