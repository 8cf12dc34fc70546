use std::fmt;

use crate::{
    AuditRecorder, Behavior, Clamper, ConfigurationError, Logger, Mapper, MediatedValue, Trimmer,
    Validator,
};

/// The composition root for a [`MediatedValue`].
///
/// `FieldBuilder` attaches behaviors in the order they are declared; that
/// order is the chain order for the lifetime of the value. Configuration
/// errors from the convenience methods are held until [`build`](Self::build),
/// which reports the first one.
///
/// # Examples
///
/// ```
/// use mediated_field::{MediatedValue, ConfigurationErrorKind};
///
/// let username = MediatedValue::builder("username", "  ben ".to_string())
///     .logged()
///     .trimmed()
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(username.projected().behaviors(), vec!["logger", "trimmer"]);
///
/// let err = MediatedValue::builder("speed", 10)
///     .clamped(100, 0)
///     .build()
///     .unwrap_err();
/// assert_eq!(err.kind(), ConfigurationErrorKind::InvertedBounds);
/// ```
pub struct FieldBuilder<T> {
    name: String,
    initial: T,
    behaviors: Vec<Box<dyn Behavior<T>>>,
    error: Option<ConfigurationError>,
}

impl<T> FieldBuilder<T> {
    /// Creates a builder for a field named `name` holding `initial`.
    pub fn new(name: impl Into<String>, initial: T) -> Self {
        Self {
            name: name.into(),
            initial,
            behaviors: Vec::new(),
            error: None,
        }
    }

    /// Appends a behavior to the end of the chain.
    pub fn with(mut self, behavior: impl Behavior<T> + 'static) -> Self {
        self.behaviors.push(Box::new(behavior));
        self
    }

    /// Appends the behavior if it was configured correctly, otherwise records the error.
    fn with_configured<B>(self, behavior: Result<B, ConfigurationError>) -> Self
    where
        B: Behavior<T> + 'static,
    {
        match behavior {
            Ok(behavior) => self.with(behavior),
            Err(err) => self.fail(err),
        }
    }

    /// Records a configuration error. Only the first one is kept.
    fn fail(mut self, err: ConfigurationError) -> Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }

    /// Appends a [`Mapper`] running `map` on every incoming value.
    pub fn mapped(self, name: &'static str, map: impl Fn(T) -> T + Send + 'static) -> Self
    where
        T: 'static,
    {
        self.with(Mapper::new(name, map))
    }

    /// Appends an [`AuditRecorder`] keeping the `capacity` most recent writes.
    pub fn audited(self, capacity: usize) -> Self
    where
        T: Clone + Send + 'static,
    {
        self.with_configured(AuditRecorder::new(capacity))
    }

    /// Validates the configuration and builds the mediated value.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error recorded while building, or any
    /// error from [`MediatedValue::new`].
    pub fn build(self) -> Result<MediatedValue<T>, ConfigurationError>
    where
        T: 'static,
    {
        if let Some(err) = self.error {
            return Err(err);
        }
        MediatedValue::new(self.name, self.initial, self.behaviors)
    }
}

impl<T: fmt::Debug> FieldBuilder<T> {
    /// Appends a [`Logger`] that includes values in its events.
    pub fn logged(self) -> Self {
        self.with(Logger::new())
    }

    /// Appends a [`Logger`] that omits values from its events.
    pub fn logged_redacted(self) -> Self {
        self.with(Logger::redacted())
    }
}

impl<T: PartialOrd + Clone + fmt::Debug + Send + 'static> FieldBuilder<T> {
    /// Appends a [`Clamper`] for `[lower, upper]`.
    pub fn clamped(self, lower: T, upper: T) -> Self {
        self.with_configured(Clamper::new(lower, upper))
    }

    /// Appends a [`Validator`] for `[lower, upper]`.
    pub fn validated(self, lower: T, upper: T) -> Self {
        self.with_configured(Validator::new(lower, upper))
    }
}

impl FieldBuilder<String> {
    /// Appends a [`Trimmer`].
    pub fn trimmed(self) -> Self {
        self.with(Trimmer)
    }
}
