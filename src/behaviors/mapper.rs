use std::fmt;

use crate::Behavior;

/// Applies a caller-supplied pure function to every incoming value.
///
/// Covers one-off normalizations that do not deserve their own behavior
/// type (rounding, case folding, unit conversion). The function runs on the
/// initial value too.
///
/// # Examples
///
/// ```
/// use mediated_field::{Mapper, MediatedValue};
///
/// let mut tag = MediatedValue::builder("tag", "Rust".to_string())
///     .with(Mapper::new("lowercase", |s: String| s.to_lowercase()))
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(tag.get(), "rust");
/// tag.set("MACROS".to_string());
/// assert_eq!(tag.get(), "macros");
/// ```
pub struct Mapper<T> {
    name: &'static str,
    map: Box<dyn Fn(T) -> T + Send>,
}

impl<T> Mapper<T> {
    /// Creates a mapper identified by `name` in logs and introspection.
    pub fn new(name: &'static str, map: impl Fn(T) -> T + Send + 'static) -> Self {
        Self {
            name,
            map: Box::new(map),
        }
    }
}

impl<T> fmt::Debug for Mapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper").field("name", &self.name).finish()
    }
}

impl<T: 'static> Behavior<T> for Mapper<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn transform(&self, value: T) -> T {
        (self.map)(value)
    }
}
