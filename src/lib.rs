//! Composable mediation for struct fields.
//!
//! This crate lets a struct route reads and writes of a field through an
//! ordered chain of behaviors, so side effects and normalization happen
//! transparently:
//! - **Transformation**: trimming, clamping, arbitrary pure mappings
//! - **Validation**: rejecting out-of-range writes with a typed error
//! - **Observation**: structured logging and bounded audit history
//!
//! # Core Types
//!
//! - [`MediatedValue<T>`]: Owns one value and its behavior chain
//! - [`Behavior<T>`]: The hook contract every chain member implements
//! - [`FieldBuilder<T>`]: Declares a chain in order and validates it once
//! - [`Projection`]: Read-only view of chain state such as audit history or
//!   a caller-defined behavior
//! - [`audit::AuditLog<T>`]: Bounded, oldest-first record of committed values
//!
//! # Examples
//!
//! ```
//! use mediated_field::MediatedValue;
//!
//! struct Player {
//!     speed: MediatedValue<f64>,
//! }
//!
//! let mut player = Player {
//!     speed: MediatedValue::builder("speed", 100.0)
//!         .clamped(0.0, 100.0)
//!         .audited(10)
//!         .build()
//!         .expect("valid configuration"),
//! };
//!
//! player.speed.set(25.0);
//! player.speed.set(125.0);
//!
//! assert_eq!(player.speed.get(), 100.0);
//! assert_eq!(
//!     player.speed.projected().history().map(|h| h.len()),
//!     Some(2)
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod behavior;
mod behaviors;
mod builder;
mod error;
mod mediated;

#[cfg(test)]
mod test_utils;

pub use behavior::{AsAny, Behavior};
pub use behaviors::{
    AuditRecorder, Clamper, Logger, Mapper, PassThrough, Trimmer, Validator,
    DEFAULT_HISTORY_CAPACITY,
};
pub use builder::FieldBuilder;
pub use error::{ConfigurationError, ConfigurationErrorKind, ValidationError, ValidationErrorKind};
pub use mediated::{MediatedValue, Projection};
