//! Value objects - immutable domain primitives

mod pr_status;

pub use pr_status::{PrStatus, PrStatusParseError};
