use std::fmt;

use crate::Behavior;

/// Emits a structured `tracing` event for every read and write.
///
/// Events are logged at `INFO` with the fields `field` (the mediated value's
/// name) and `op` (`"get"` or `"set"`). By default the values involved are
/// included; [`Logger::redacted`] omits them for fields holding sensitive
/// data.
///
/// The logger never alters values.
///
/// # Examples
///
/// ```
/// use mediated_field::{Logger, MediatedValue};
///
/// let mut grade = MediatedValue::builder("grade", 75.0)
///     .with(Logger::new())
///     .build()
///     .expect("valid configuration");
///
/// grade.set(90.0); // INFO setting the value field="grade" op="set" old=75.0 new=90.0
/// assert_eq!(grade.get(), 90.0); // INFO getting the value field="grade" op="get" value=90.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    show_values: bool,
}

impl Logger {
    /// Creates a logger that includes values in its events.
    pub fn new() -> Self {
        Self { show_values: true }
    }

    /// Creates a logger that records only the field name and operation.
    pub fn redacted() -> Self {
        Self { show_values: false }
    }

    /// Returns true if values are included in events.
    pub fn shows_values(&self) -> bool {
        self.show_values
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> Behavior<T> for Logger {
    fn name(&self) -> &'static str {
        "logger"
    }

    fn before_get(&self, field: &str, current: &T) {
        if self.show_values {
            tracing::info!(field = %field, op = "get", value = ?current, "getting the value");
        } else {
            tracing::info!(field = %field, op = "get", "getting the value");
        }
    }

    fn after_set(&mut self, field: &str, old: &T, new: &T) {
        if self.show_values {
            tracing::info!(field = %field, op = "set", old = ?old, new = ?new, "setting the value");
        } else {
            tracing::info!(field = %field, op = "set", "setting the value");
        }
    }
}
