use std::any::Any;

use crate::{audit::AuditLog, ValidationError};

/// A unit of mediation attached to a [`MediatedValue`](crate::MediatedValue).
///
/// Every read and write of a mediated value passes through its behavior
/// chain in declared order. A behavior may reshape values on the way in,
/// veto them, or observe accesses for side effects. All hooks have
/// defaults, so an implementation overrides only what it needs.
///
/// # Hook order
///
/// On construction, for each behavior in chain order: [`on_init`](Self::on_init),
/// then [`validate`](Self::validate).
///
/// On `set`, for each behavior in chain order: [`transform`](Self::transform),
/// then [`validate`](Self::validate). If every behavior accepts, the value is
/// committed once, and then every [`after_set`](Self::after_set) fires in
/// chain order.
///
/// On `get`, every [`before_get`](Self::before_get) fires in chain order and
/// the stored value is returned unchanged.
///
/// # Invariants
///
/// Implementations MUST:
/// - Keep `transform` pure: same input, same output, no side effects
/// - Never panic in any hook for well-formed input
/// - Only produce side effects from `before_get` and `after_set`
///
/// Behaviors are `Send` and `'static`, so a mediated value can move between
/// threads or sit behind a `Mutex`.
///
/// # Examples
///
/// ```
/// use mediated_field::{Behavior, MediatedValue};
///
/// struct Rounded;
///
/// impl Behavior<f64> for Rounded {
///     fn name(&self) -> &'static str {
///         "rounded"
///     }
///
///     fn transform(&self, value: f64) -> f64 {
///         value.round()
///     }
/// }
///
/// let mut grade = MediatedValue::builder("grade", 74.6)
///     .with(Rounded)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(grade.get(), 75.0);
/// grade.set(89.4);
/// assert_eq!(grade.get(), 89.0);
/// ```
pub trait Behavior<T>: AsAny + Send {
    /// Short identifier used in log events and introspection.
    fn name(&self) -> &'static str;

    /// Normalizes the initial value. Defaults to [`transform`](Self::transform).
    fn on_init(&self, value: T) -> T {
        self.transform(value)
    }

    /// Reshapes an incoming value before it reaches the next behavior.
    fn transform(&self, value: T) -> T {
        value
    }

    /// Accepts or rejects a value after this behavior's transform.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the value must not be committed.
    fn validate(&self, _value: &T) -> Result<(), ValidationError<T>> {
        Ok(())
    }

    /// Observes a read of the current value.
    fn before_get(&self, _field: &str, _current: &T) {}

    /// Observes a committed write.
    fn after_set(&mut self, _field: &str, _old: &T, _new: &T) {}

    /// Returns the audit history this behavior maintains, if any.
    fn history(&self) -> Option<&AuditLog<T>> {
        None
    }
}

/// Upcast to [`Any`] so a chain member can be recovered by its concrete type.
///
/// Implemented for every `'static` type; behaviors never implement it by hand.
/// [`Projection::behavior`](crate::Projection::behavior) relies on it.
pub trait AsAny: Any {
    /// Returns `self` as a `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<B: Any> AsAny for B {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
