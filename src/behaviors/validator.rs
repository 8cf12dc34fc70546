use std::cmp::Ordering;
use std::fmt;

use super::{check_bounds, locate};
use crate::{Behavior, ConfigurationError, ValidationError, ValidationErrorKind};

/// Rejects values outside the closed range `[lower, upper]`.
///
/// The strict counterpart of [`Clamper`](crate::Clamper): instead of
/// correcting an out-of-range write, it vetoes it. A rejected write leaves
/// the stored value untouched and is reported by
/// [`MediatedValue::try_set`](crate::MediatedValue::try_set).
///
/// A validator placed after a transforming behavior sees the transformed
/// value, so `[Clamper, Validator]` never rejects anything inside the
/// clamper's range.
///
/// # Examples
///
/// ```
/// use mediated_field::{MediatedValue, Validator, ValidationErrorKind};
///
/// let mut credits = MediatedValue::builder("credits", 0)
///     .with(Validator::new(0, 30).expect("ordered bounds"))
///     .build()
///     .expect("valid configuration");
///
/// assert!(credits.try_set(12).is_ok());
/// let err = credits.try_set(-1).unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::BelowMinimum);
/// assert_eq!(credits.get(), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Validator<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + fmt::Debug> Validator<T> {
    /// Creates a validator for `[lower, upper]`.
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

impl<T: PartialOrd + Clone + Send + 'static> Behavior<T> for Validator<T> {
    fn name(&self) -> &'static str {
        "validator"
    }

    fn validate(&self, value: &T) -> Result<(), ValidationError<T>> {
        match locate(value, &self.lower, &self.upper) {
            Ordering::Less => Err(ValidationError::new(
                ValidationErrorKind::BelowMinimum,
                value.clone(),
                self.lower.clone(),
            )),
            Ordering::Greater => Err(ValidationError::new(
                ValidationErrorKind::AboveMaximum,
                value.clone(),
                self.upper.clone(),
            )),
            Ordering::Equal => Ok(()),
        }
    }
}
