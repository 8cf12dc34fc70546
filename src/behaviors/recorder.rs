use std::fmt;
use std::num::NonZeroUsize;

use crate::audit::{AuditEntry, AuditLog, Clock, SystemClock};
use crate::{Behavior, ConfigurationError, ConfigurationErrorKind};

/// Number of entries an [`AuditRecorder`] keeps when built with `Default`.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Records every committed write in a bounded [`AuditLog`].
///
/// Each write appends `(now, new value)`; once `capacity` entries are held,
/// the oldest is evicted. Reads are not recorded, and neither is the initial
/// value. The history is reachable through
/// [`MediatedValue::projected`](crate::MediatedValue::projected).
///
/// # Examples
///
/// ```
/// use mediated_field::{AuditRecorder, MediatedValue};
///
/// let mut balance = MediatedValue::builder("balance", 100.0)
///     .with(AuditRecorder::new(10).expect("non-zero capacity"))
///     .build()
///     .expect("valid configuration");
///
/// balance.update(|b| b + 15.0);
/// balance.update(|b| b + 27.0);
/// balance.update(|b| b - 75.0);
///
/// let history = balance.projected().history().expect("audited field");
/// assert_eq!(history.values(), vec![115.0, 142.0, 67.0]);
/// ```
pub struct AuditRecorder<T> {
    log: AuditLog<T>,
    clock: Box<dyn Clock>,
}

impl<T> AuditRecorder<T> {
    /// Creates a recorder that keeps the `capacity` most recent writes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationErrorKind::ZeroCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, ConfigurationError> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            ConfigurationError::new(
                ConfigurationErrorKind::ZeroCapacity,
                "audit history capacity must be greater than 0",
            )
        })?;
        Ok(Self::with_capacity(capacity))
    }

    /// Creates a recorder from an already-validated capacity.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            log: AuditLog::new(capacity),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Returns the recorded history.
    pub fn log(&self) -> &AuditLog<T> {
        &self.log
    }
}

impl<T> Default for AuditRecorder<T> {
    fn default() -> Self {
        let capacity = NonZeroUsize::new(DEFAULT_HISTORY_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(capacity)
    }
}

impl<T: fmt::Debug> fmt::Debug for AuditRecorder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditRecorder")
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + Send + 'static> Behavior<T> for AuditRecorder<T> {
    fn name(&self) -> &'static str {
        "audit_recorder"
    }

    fn after_set(&mut self, _field: &str, _old: &T, new: &T) {
        let entry = AuditEntry::new(self.clock.now(), new.clone());
        self.log.append(entry);
    }

    fn history(&self) -> Option<&AuditLog<T>> {
        Some(&self.log)
    }
}
