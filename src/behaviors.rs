//! Built-in behaviors.
//!
//! - `PassThrough`: Identity, useful as a placeholder chain member
//! - `Logger`: Emits a `tracing` event on every read and write
//! - `Trimmer`: Strips surrounding whitespace from strings
//! - `Clamper`: Silently restricts ordered values to a closed range
//! - `Validator`: Rejects ordered values outside a closed range
//! - `Mapper`: Applies a caller-supplied pure function
//! - `AuditRecorder`: Keeps a bounded history of committed values

mod clamper;
mod logger;
mod mapper;
mod pass_through;
mod recorder;
mod trimmer;
mod validator;

pub use clamper::Clamper;
pub use logger::Logger;
pub use mapper::Mapper;
pub use pass_through::PassThrough;
pub use recorder::{AuditRecorder, DEFAULT_HISTORY_CAPACITY};
pub use trimmer::Trimmer;
pub use validator::Validator;

use std::cmp::Ordering;
use std::fmt;

use crate::{ConfigurationError, ConfigurationErrorKind};

/// Where a value falls relative to a closed range `[lower, upper]`.
///
/// Values that cannot be compared with the bounds (for example `NaN`) are
/// reported as below the range.
pub(crate) fn locate<T: PartialOrd>(value: &T, lower: &T, upper: &T) -> Ordering {
    match value.partial_cmp(lower) {
        Some(Ordering::Less) | None => Ordering::Less,
        _ => match value.partial_cmp(upper) {
            Some(Ordering::Greater) | None => Ordering::Greater,
            _ => Ordering::Equal,
        },
    }
}

/// Rejects bounds that are inverted or not mutually comparable.
pub(crate) fn check_bounds<T: PartialOrd + fmt::Debug>(
    lower: &T,
    upper: &T,
) -> Result<(), ConfigurationError> {
    if lower <= upper {
        Ok(())
    } else {
        Err(ConfigurationError::new(
            ConfigurationErrorKind::InvertedBounds,
            format!("lower bound {:?} is not at or below upper bound {:?}", lower, upper),
        ))
    }
}
