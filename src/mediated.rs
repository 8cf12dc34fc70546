use std::fmt;

use crate::{
    audit::AuditLog, Behavior, ConfigurationError, ConfigurationErrorKind, FieldBuilder,
    ValidationError,
};

/// A value whose every read and write passes through an ordered behavior chain.
///
/// `MediatedValue<T>` is the explicit stand-in for an intercepted struct
/// field. The owning struct keeps one per field and routes accesses through
/// [`get`](Self::get) and [`set`](Self::set); the rest of the struct's code
/// never sees the chain.
///
/// # Guarantees
///
/// - The chain is fixed at construction and runs in declared order.
/// - The initial value is normalized by the chain before it is stored.
/// - Each successful `set` commits exactly one new value; side effects
///   (`after_set`) run only after the commit.
/// - A write rejected by a validating behavior commits nothing and fires no
///   side effects.
/// - `get` never changes the stored value.
///
/// # Threading
///
/// There is no internal locking. `set` takes `&mut self`, so interleaved
/// writes are impossible without an external lock around the whole value.
/// Every behavior is `Send`, so `MediatedValue<T>` is `Send` whenever `T` is
/// and can be shared as `Arc<Mutex<MediatedValue<T>>>`.
///
/// # Examples
///
/// ```
/// use mediated_field::MediatedValue;
///
/// let mut speed = MediatedValue::builder("speed", 100.0)
///     .logged()
///     .clamped(0.0, 100.0)
///     .audited(10)
///     .build()
///     .expect("valid configuration");
///
/// speed.set(25.0);
/// speed.set(125.0);
///
/// assert_eq!(speed.get(), 100.0);
/// assert_eq!(
///     speed.projected().history().map(|h| h.values()),
///     Some(vec![25.0, 100.0])
/// );
/// ```
pub struct MediatedValue<T> {
    name: String,
    current: T,
    behaviors: Vec<Box<dyn Behavior<T>>>,
}

impl<T: 'static> MediatedValue<T> {
    /// Starts building a mediated value named `name` holding `initial`.
    pub fn builder(name: impl Into<String>, initial: T) -> FieldBuilder<T> {
        FieldBuilder::new(name, initial)
    }

    /// Wraps `initial` in the given behavior chain.
    ///
    /// Each behavior normalizes the initial value in chain order, and each
    /// validating behavior must accept the result.
    ///
    /// # Errors
    ///
    /// - `ConfigurationErrorKind::EmptyChain` if `behaviors` is empty
    /// - `ConfigurationErrorKind::RejectedInitialValue` if a behavior rejects
    ///   the normalized initial value
    pub fn new(
        name: impl Into<String>,
        initial: T,
        behaviors: Vec<Box<dyn Behavior<T>>>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();

        if behaviors.is_empty() {
            return Err(ConfigurationError::new(
                ConfigurationErrorKind::EmptyChain,
                format!("field `{}` has no behaviors", name),
            ));
        }

        let mut value = initial;
        for behavior in &behaviors {
            value = behavior.on_init(value);
            if let Err(err) = behavior.validate(&value) {
                return Err(ConfigurationError::new(
                    ConfigurationErrorKind::RejectedInitialValue,
                    format!(
                        "initial value of `{}` rejected by {} ({})",
                        name,
                        behavior.name(),
                        err.kind()
                    ),
                ));
            }
        }

        let chain: Vec<&'static str> = behaviors.iter().map(|b| b.name()).collect();
        tracing::debug!(field = %name, chain = ?chain, "mediated value constructed");

        Ok(Self {
            name,
            current: value,
            behaviors,
        })
    }

    /// Returns the field name used in log events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the stored value without running any behavior.
    pub fn raw(&self) -> &T {
        &self.current
    }

    /// Returns a read-only view of the chain and its accumulated state.
    pub fn projected(&self) -> Projection<'_, T> {
        Projection { value: self }
    }

    /// Writes a value through the chain, returning any rejection.
    ///
    /// The value is passed through every behavior's `transform` and
    /// `validate` in order. If all accept, it replaces the stored value and
    /// every behavior's `after_set` runs in order with the old and new values.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised. The stored value is left
    /// unchanged and no `after_set` hook runs.
    pub fn try_set(&mut self, value: T) -> Result<(), ValidationError<T>> {
        let mut value = value;
        for behavior in &self.behaviors {
            value = behavior.transform(value);
            behavior.validate(&value)?;
        }

        let old = std::mem::replace(&mut self.current, value);
        for behavior in &mut self.behaviors {
            behavior.after_set(&self.name, &old, &self.current);
        }
        Ok(())
    }

    /// Writes a value through the chain.
    ///
    /// Identical to [`try_set`](Self::try_set) except that a rejected write
    /// is logged at `WARN` and otherwise dropped.
    pub fn set(&mut self, value: T) {
        if let Err(err) = self.try_set(value) {
            tracing::warn!(field = %self.name, reason = %err.kind(), "write rejected");
        }
    }

    /// Consumes the wrapper and returns the stored value.
    pub fn into_inner(self) -> T {
        self.current
    }
}

impl<T: Clone + 'static> MediatedValue<T> {
    /// Reads the value through the chain.
    ///
    /// Every behavior's `before_get` runs in order; the value itself is
    /// never changed by a read.
    pub fn get(&self) -> T {
        for behavior in &self.behaviors {
            behavior.before_get(&self.name, &self.current);
        }
        self.current.clone()
    }

    /// Reads the value, applies `f`, and writes the result back.
    ///
    /// Equivalent to `let v = self.get(); self.set(f(v))`, so both read and
    /// write side effects fire.
    pub fn update(&mut self, f: impl FnOnce(T) -> T) {
        let current = self.get();
        self.set(f(current));
    }

    /// Fallible counterpart of [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` if the updated value is rejected.
    pub fn try_update(&mut self, f: impl FnOnce(T) -> T) -> Result<(), ValidationError<T>> {
        let current = self.get();
        self.try_set(f(current))
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for MediatedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediatedValue")
            .field("name", &self.name)
            .field("current", &self.current)
            .field(
                "behaviors",
                &self.behaviors.iter().map(|b| b.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Read-only view into a [`MediatedValue`]'s chain.
///
/// Obtained from [`MediatedValue::projected`]. Exposes accumulated behavior
/// state, such as audit history, without any way to mutate it.
pub struct Projection<'a, T> {
    value: &'a MediatedValue<T>,
}

impl<'a, T: 'static> Projection<'a, T> {
    /// Returns the field name.
    pub fn name(&self) -> &'a str {
        &self.value.name
    }

    /// Returns the stored value without running any behavior.
    pub fn raw(&self) -> &'a T {
        &self.value.current
    }

    /// Returns the behavior names in chain order.
    pub fn behaviors(&self) -> Vec<&'static str> {
        self.value.behaviors.iter().map(|b| b.name()).collect()
    }

    /// Returns the history of the first audit-keeping behavior in the chain.
    pub fn history(&self) -> Option<&'a AuditLog<T>> {
        self.histories().next()
    }

    /// Returns the history of every audit-keeping behavior, in chain order.
    pub fn histories(&self) -> impl Iterator<Item = &'a AuditLog<T>> + 'a {
        let value: &'a MediatedValue<T> = self.value;
        value.behaviors.iter().filter_map(|b| b.history())
    }

    /// Returns the first behavior in the chain whose concrete type is `B`.
    ///
    /// This is how state kept by a caller-defined behavior is read back
    /// without mutating it.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediated_field::{Clamper, MediatedValue};
    ///
    /// let speed = MediatedValue::builder("speed", 50)
    ///     .clamped(0, 100)
    ///     .build()
    ///     .expect("valid configuration");
    ///
    /// let clamper = speed.projected().behavior::<Clamper<i32>>();
    /// assert_eq!(clamper.map(|c| *c.upper()), Some(100));
    /// ```
    pub fn behavior<B: Behavior<T>>(&self) -> Option<&'a B>
    where
        T: 'static,
    {
        let value: &'a MediatedValue<T> = self.value;
        value
            .behaviors
            .iter()
            .find_map(|b| (**b).as_any().downcast_ref::<B>())
    }
}

impl<T> Clone for Projection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Projection<'_, T> {}
