use crate::Behavior;

/// A behavior that does nothing.
///
/// Useful as the sole member of a chain when a field should be routed
/// through a [`MediatedValue`](crate::MediatedValue) without any mediation yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl<T> Behavior<T> for PassThrough {
    fn name(&self) -> &'static str {
        "pass_through"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_through_is_identity() {
        assert_eq!(Behavior::<i32>::transform(&PassThrough, 5), 5);
        assert_eq!(
            Behavior::<String>::on_init(&PassThrough, " x ".to_string()),
            " x "
        );
        assert!(Behavior::<i32>::history(&PassThrough).is_none());
    }
}
