//! Pure field-normalization functions: no I/O during correction, no
//! state beyond the authored correction table.

mod keys;
mod street;

pub use keys::split_namespaced_key;
pub use street::{CorrectionTable, correct_street_suffix};
