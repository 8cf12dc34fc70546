//! Integration property tests for mediated-field.
//!
//! These tests validate chain-level invariants across arbitrary write
//! sequences using property-based testing.

use mediated_field::{MediatedValue, ValidationErrorKind};
use proptest::prelude::*;

// Strategy: Generate an ordered pair of bounds
fn arb_bounds() -> impl Strategy<Value = (i32, i32)> {
    (any::<i32>(), any::<i32>()).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

// Strategy: Generate strings with optional surrounding whitespace
fn arb_padded_string() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[ \\t\\n]{0,4}").unwrap(),
        prop::string::string_regex("[a-z0-9 ]{0,12}").unwrap(),
        prop::string::string_regex("[ \\t\\n]{0,4}").unwrap(),
    )
        .prop_map(|(pre, body, post)| format!("{}{}{}", pre, body, post))
}

proptest! {
    /// Property: A clamped field always reads back a value within bounds,
    /// and in-range writes are stored unchanged
    #[test]
    fn proptest_clamped_reads_stay_in_range(
        (lo, hi) in arb_bounds(),
        initial in any::<i32>(),
        writes in prop::collection::vec(any::<i32>(), 1..32)
    ) {
        let mut field = MediatedValue::builder("n", initial)
            .clamped(lo, hi)
            .build()
            .unwrap();
        prop_assert!(lo <= field.get() && field.get() <= hi);

        for w in writes {
            field.set(w);
            let read = field.get();
            prop_assert!(lo <= read && read <= hi);
            if lo <= w && w <= hi {
                prop_assert_eq!(read, w);
            }
        }
    }

    /// Property: A trimmed field never holds surrounding whitespace and
    /// re-setting its own value is a no-op
    #[test]
    fn proptest_trimmed_field_idempotent(initial in arb_padded_string(), input in arb_padded_string()) {
        let mut field = MediatedValue::builder("s", initial.clone())
            .trimmed()
            .build()
            .unwrap();
        prop_assert_eq!(field.get(), initial.trim());

        field.set(input.clone());
        let once = field.get();
        prop_assert_eq!(once.as_str(), input.trim());

        field.set(once.clone());
        prop_assert_eq!(field.get(), once);
    }

    /// Property: An audited field keeps exactly the most recent `capacity`
    /// writes, oldest first
    #[test]
    fn proptest_audit_history_is_fifo(
        capacity in 1usize..12,
        writes in prop::collection::vec(any::<i64>(), 0..40)
    ) {
        let mut field = MediatedValue::builder("n", 0i64)
            .audited(capacity)
            .build()
            .unwrap();

        for w in &writes {
            field.set(*w);
        }

        let history = field.projected().history().unwrap();
        let keep = writes.len().min(capacity);
        prop_assert_eq!(history.len(), keep);
        prop_assert_eq!(history.values(), writes[writes.len() - keep..].to_vec());
        prop_assert!(history
            .snapshot()
            .windows(2)
            .all(|w| w[0].recorded_at() <= w[1].recorded_at()));
    }

    /// Property: A validated field either commits the write unchanged or
    /// rejects it and keeps the previous value
    #[test]
    fn proptest_validated_field_commits_or_keeps(
        writes in prop::collection::vec(-50i32..150, 1..32)
    ) {
        let mut field = MediatedValue::builder("pct", 50)
            .validated(0, 100)
            .build()
            .unwrap();

        for w in writes {
            let before = field.get();
            match field.try_set(w) {
                Ok(()) => prop_assert_eq!(field.get(), w),
                Err(err) => {
                    prop_assert_eq!(field.get(), before);
                    prop_assert_eq!(*err.rejected(), w);
                    let expected = if w < 0 {
                        ValidationErrorKind::BelowMinimum
                    } else {
                        ValidationErrorKind::AboveMaximum
                    };
                    prop_assert_eq!(err.kind(), expected);
                }
            }
        }
    }

    /// Property: Reads never change the stored value
    #[test]
    fn proptest_get_is_value_idempotent(initial in any::<i32>(), reads in 1usize..10) {
        let field = MediatedValue::builder("n", initial)
            .logged()
            .audited(3)
            .build()
            .unwrap();

        for _ in 0..reads {
            prop_assert_eq!(field.get(), initial);
        }
        prop_assert!(field.projected().history().unwrap().is_empty());
    }

    /// Property: Chain order is observable when transforms do not commute
    #[test]
    fn proptest_map_then_clamp_differs_from_clamp_then_map(value in 100i32..1000) {
        let mut double_then_clamp = MediatedValue::builder("x", 0)
            .mapped("double", |x: i32| x.saturating_mul(2))
            .clamped(0, 100)
            .build()
            .unwrap();
        let mut clamp_then_double = MediatedValue::builder("x", 0)
            .clamped(0, 100)
            .mapped("double", |x: i32| x.saturating_mul(2))
            .build()
            .unwrap();

        double_then_clamp.set(value);
        clamp_then_double.set(value);

        prop_assert_eq!(double_then_clamp.get(), 100);
        prop_assert_eq!(clamp_then_double.get(), 200);
    }
}
