//! Bounded audit history for mediated fields.
//!
//! This module provides:
//! - `AuditLog`: Capacity-bounded, oldest-first record of past values
//! - `AuditEntry`: A single timestamped value in that record
//! - `Clock`: Source of timestamps, with `SystemClock` and `ManualClock`
//!
//! An `AuditLog` is owned by an [`AuditRecorder`](crate::AuditRecorder) and
//! can only be appended to by it. Callers read it through
//! [`MediatedValue::projected`](crate::MediatedValue::projected).

mod clock;
mod log;

pub use clock::{Clock, ManualClock, SystemClock};
pub use log::{AuditEntry, AuditLog};
