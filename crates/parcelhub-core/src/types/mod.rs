//! Small value helpers shared across the ParcelHub workspace.

pub mod numeric;

pub use numeric::{optional_positive_int, required_positive_int};
