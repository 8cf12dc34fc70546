use crate::Behavior;

/// Strips leading and trailing whitespace from string values.
///
/// Applies to the initial value as well as every write, so a field built
/// with a `Trimmer` never holds surrounding whitespace. Interior whitespace
/// is preserved.
///
/// # Examples
///
/// ```
/// use mediated_field::{MediatedValue, Trimmer};
///
/// let username = MediatedValue::builder("username", "ben   ".to_string())
///     .with(Trimmer)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(username.get(), "ben");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Trimmer;

impl Behavior<String> for Trimmer {
    fn name(&self) -> &'static str {
        "trimmer"
    }

    fn transform(&self, value: String) -> String {
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_string()
        }
    }
}
