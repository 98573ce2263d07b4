// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting gallery activity.
//!
//! Store operations, load failures and persistence warnings are captured as
//! structured events in a memory-bounded log and can be exported as a JSON
//! report.
//!
//! # Architecture
//!
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Bounded event log, with JSON export

mod collector;
mod events;

pub use crate::domain::diagnostics::BufferCapacity;
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
