use std::cmp::Ordering;
use std::fmt;

use super::{check_bounds, locate};
use crate::{Behavior, ConfigurationError};

/// Silently restricts values to the closed range `[lower, upper]`.
///
/// Out-of-range writes are corrected to the nearest bound rather than
/// rejected. Values already in range pass through unchanged. Values that
/// cannot be ordered against the bounds (such as `f64::NAN`) are replaced by
/// the lower bound, so the stored value is always inside the range.
///
/// The initial value is clamped too.
///
/// # Examples
///
/// ```
/// use mediated_field::{Clamper, MediatedValue};
///
/// let mut speed = MediatedValue::builder("speed", 100.0)
///     .with(Clamper::new(0.0, 100.0).expect("ordered bounds"))
///     .build()
///     .expect("valid configuration");
///
/// speed.set(25.0);
/// assert_eq!(speed.get(), 25.0);
///
/// speed.set(125.0);
/// assert_eq!(speed.get(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clamper<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + fmt::Debug> Clamper<T> {
    /// Creates a clamper for `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationErrorKind::InvertedBounds` if `lower > upper`
    /// or the bounds cannot be compared.
    pub fn new(lower: T, upper: T) -> Result<Self, ConfigurationError> {
        check_bounds(&lower, &upper)?;
        Ok(Self { lower, upper })
    }
}

impl<T> Clamper<T> {
    /// Returns the lower bound.
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> &T {
        &self.upper
    }
}

impl<T: PartialOrd + Clone + Send + 'static> Behavior<T> for Clamper<T> {
    fn name(&self) -> &'static str {
        "clamper"
    }

    fn transform(&self, value: T) -> T {
        match locate(&value, &self.lower, &self.upper) {
            Ordering::Less => self.lower.clone(),
            Ordering::Greater => self.upper.clone(),
            Ordering::Equal => value,
        }
    }
}
