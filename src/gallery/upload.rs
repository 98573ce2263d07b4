// SPDX-License-Identifier: MPL-2.0
//! Mock upload flow.
//!
//! An [`UploadForm`] holds what the user typed. Converting it yields an
//! [`ImageDraft`] with placeholder URLs and fresh counters; the store assigns
//! the id when the draft is added.

use crate::domain::gallery::ImageDraft;
use chrono::{DateTime, Utc};

const DEFAULT_AUTHOR: &str = "Usuário";
const DEFAULT_ALT: &str = "Imagem enviada";
const DEFAULT_CATEGORY: &str = "Geral";
const UPLOAD_BASE_URL: &str = "https://picsum.photos/seed/upload";
const UPLOAD_RESOLUTION: &str = "800x600";
const UPLOAD_SIZE: &str = "2500 KB";

/// User-entered upload fields. Blank fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub author: String,
    pub alt: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl UploadForm {
    /// Converts the form using the current time.
    #[must_use]
    pub fn into_draft(self) -> ImageDraft {
        self.into_draft_at(Utc::now())
    }

    /// Converts the form as if it were submitted at `submitted_at`.
    ///
    /// The placeholder URLs are seeded with the submission time in
    /// milliseconds.
    #[must_use]
    pub fn into_draft_at(self, submitted_at: DateTime<Utc>) -> ImageDraft {
        let seed = submitted_at.timestamp_millis();
        ImageDraft {
            src: format!("{UPLOAD_BASE_URL}{seed}/800/600"),
            thumbnail: format!("{UPLOAD_BASE_URL}{seed}/300/300"),
            author: or_default(self.author, DEFAULT_AUTHOR),
            alt: or_default(self.alt, DEFAULT_ALT),
            tags: self.tags,
            category: or_default(self.category, DEFAULT_CATEGORY),
            likes: 0,
            views: 0,
            is_favorite: false,
            created_at: submitted_at,
            resolution: UPLOAD_RESOLUTION.to_string(),
            size: UPLOAD_SIZE.to_string(),
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}
