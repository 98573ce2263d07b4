// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for gallery events.
//!
//! The collector keeps the most recent events up to its [`BufferCapacity`].
//! The store is single-threaded, so events are pushed directly without a channel.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{BufferCapacity, DiagnosticEvent, DiagnosticEventKind, UserAction};
use crate::error::Result;

/// Exported report layout.
#[derive(Debug, Serialize)]
struct DiagnosticReport<'a> {
    generated_at: DateTime<Utc>,
    collection_started_at: DateTime<Utc>,
    event_count: usize,
    events: Vec<&'a DiagnosticEvent>,
}

/// Central collector for diagnostic events.
///
/// ```
/// use gallery_lens::diagnostics::{BufferCapacity, DiagnosticsCollector, UserAction};
///
/// let mut collector = DiagnosticsCollector::new(BufferCapacity::new(10));
/// for id in 0..12 {
///     collector.log_action(UserAction::SelectImage { id });
/// }
/// assert_eq!(collector.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    events: VecDeque<DiagnosticEvent>,
    capacity: BufferCapacity,
    collection_started_at: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity,
            collection_started_at: Utc::now(),
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        self.push(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.push(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.push(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        if self.events.len() >= self.capacity.value() {
            self.events.pop_front();
        }
        self.events.push_back(DiagnosticEvent::new(kind));
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.events.back()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.value()
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let report = DiagnosticReport {
            generated_at: Utc::now(),
            collection_started_at: self.collection_started_at,
            event_count: self.events.len(),
            events: self.events.iter().collect(),
        };
        serde_json::to_string_pretty(&report)
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.export_json()?)?;
        Ok(())
    }
}
