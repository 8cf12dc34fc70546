use std::fmt;

/// Error returned when a behavior chain is configured incorrectly.
///
/// Configuration is checked once, when a behavior or a [`MediatedValue`]
/// is constructed. A chain that builds successfully never produces a
/// configuration error later on.
///
/// [`MediatedValue`]: crate::MediatedValue
///
/// # Examples
///
/// ```
/// use mediated_field::{Clamper, ConfigurationErrorKind};
///
/// let err = Clamper::new(10, 0).unwrap_err();
/// assert_eq!(err.kind(), ConfigurationErrorKind::InvertedBounds);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    kind: ConfigurationErrorKind,
    message: String,
}

impl ConfigurationError {
    /// Creates a new configuration error.
    pub fn new(kind: ConfigurationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ConfigurationErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for ConfigurationError {}

/// Kind of configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationErrorKind {
    /// A range was given with its lower bound above its upper bound.
    InvertedBounds,
    /// An audit history was given a capacity of zero.
    ZeroCapacity,
    /// A mediated value was built without any behavior.
    EmptyChain,
    /// The initial value was rejected by a validating behavior.
    RejectedInitialValue,
}

impl fmt::Display for ConfigurationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds => write!(f, "inverted bounds"),
            Self::ZeroCapacity => write!(f, "zero capacity"),
            Self::EmptyChain => write!(f, "empty behavior chain"),
            Self::RejectedInitialValue => write!(f, "rejected initial value"),
        }
    }
}

/// Error returned when a write is rejected by a [`Validator`](crate::Validator).
///
/// Carries the value that was rejected (after any transforms that ran
/// before the validator) and the bound it violated.
///
/// # Examples
///
/// ```
/// use mediated_field::{MediatedValue, ValidationErrorKind};
///
/// let mut speed = MediatedValue::builder("speed", 50)
///     .validated(0, 100)
///     .build()
///     .expect("valid configuration");
///
/// let err = speed.try_set(140).unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::AboveMaximum);
/// assert_eq!(*err.rejected(), 140);
/// assert_eq!(*err.bound(), 100);
/// assert_eq!(speed.get(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError<T> {
    kind: ValidationErrorKind,
    rejected: T,
    bound: T,
}

impl<T> ValidationError<T> {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, rejected: T, bound: T) -> Self {
        Self {
            kind,
            rejected,
            bound,
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the value that was rejected.
    pub fn rejected(&self) -> &T {
        &self.rejected
    }

    /// Returns the bound that the rejected value violated.
    pub fn bound(&self) -> &T {
        &self.bound
    }

    /// Consumes the error and returns the rejected value.
    pub fn into_rejected(self) -> T {
        self.rejected
    }
}

impl<T: fmt::Debug> fmt::Display for ValidationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "validation failed ({}): {:?} violates bound {:?}",
            self.kind, self.rejected, self.bound
        )
    }
}

impl<T: fmt::Debug> std::error::Error for ValidationError<T> {}

/// Which side of a range a rejected value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Value was below the lower bound.
    BelowMinimum,
    /// Value was above the upper bound.
    AboveMaximum,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum => write!(f, "below minimum"),
            Self::AboveMaximum => write!(f, "above maximum"),
        }
    }
}
