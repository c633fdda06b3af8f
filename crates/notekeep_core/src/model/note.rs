//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical persisted note record.
//! - Normalize user input (drafts and patches) before it reaches the store.
//!
//! # Invariants
//! - `id` and `created_at` never change after creation.
//! - `title` is never blank; `DEFAULT_TITLE` replaces blank input.
//! - `content` holds no blank lines.
//! - `tags` holds no blank values and no exact duplicates.

use crate::model::color::NoteColor;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Title assigned when a note is saved without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Opaque stable identifier for a note.
///
/// Kept as a string alias: seeded and previously persisted notes carry ids
/// that are not UUIDs.
pub type NoteId = String;

/// Canonical note record. Field names on the wire are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// One entry per displayed line.
    pub content: Vec<String>,
    pub color: NoteColor,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub tags: Vec<String>,
}

impl Note {
    /// Adds one tag after trimming.
    ///
    /// Returns `false` when the tag is blank or already present
    /// (case-sensitive).
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let trimmed = tag.trim();
        if trimmed.is_empty() || self.has_tag(trimmed) {
            return false;
        }
        self.tags.push(trimmed.to_string());
        true
    }

    /// Removes an exact tag. Returns whether it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|existing| existing != tag);
        self.tags.len() != before
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    /// Re-applies the input invariants to a record read from storage.
    ///
    /// Blank titles become `DEFAULT_TITLE`; blank lines and blank or
    /// duplicate tags are dropped. `id`, `color` and `created_at` are kept.
    pub fn normalized(self) -> Self {
        Self {
            title: normalize_title(Some(self.title.as_str())),
            content: normalize_content(self.content),
            tags: normalize_tags(self.tags),
            ..self
        }
    }
}

/// Input for creating a note. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: Option<Vec<String>>,
    pub color: Option<NoteColor>,
    pub tags: Option<Vec<String>>,
}

impl NoteDraft {
    /// Builds a draft from raw editor input: title plus a multi-line body.
    pub fn from_text(title: &str, body: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            content: Some(split_lines(body)),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content<I, T>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.content = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns whether both title and content are blank after trimming.
    pub fn is_blank(&self) -> bool {
        let title_blank = self
            .title
            .as_deref()
            .map_or(true, |title| title.trim().is_empty());
        let content_blank = self
            .content
            .as_ref()
            .map_or(true, |lines| lines.iter().all(|line| line.trim().is_empty()));
        title_blank && content_blank
    }

    /// Materializes a note with a fresh id and creation time.
    ///
    /// Returns `None` when the draft is blank.
    pub fn into_note(self, created_at: i64) -> Option<Note> {
        if self.is_blank() {
            return None;
        }

        Some(Note {
            id: new_note_id(),
            title: normalize_title(self.title.as_deref()),
            content: normalize_content(self.content.unwrap_or_default()),
            color: self.color.unwrap_or_default(),
            created_at,
            tags: normalize_tags(self.tags.unwrap_or_default()),
        })
    }
}

/// Partial update for an existing note. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<Vec<String>>,
    pub color: Option<NoteColor>,
    pub tags: Option<Vec<String>>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_content<I, T>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.content = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.color.is_none() && self.tags.is_none()
    }

    /// Overwrites the present fields on `note`. `id` and `created_at` are
    /// never touched.
    ///
    /// Returns whether any field actually changed value.
    pub fn apply_to(self, note: &mut Note) -> bool {
        let mut changed = false;
        if let Some(title) = self.title {
            changed |= replace_if_different(&mut note.title, normalize_title(Some(title.as_str())));
        }
        if let Some(content) = self.content {
            changed |= replace_if_different(&mut note.content, normalize_content(content));
        }
        if let Some(color) = self.color {
            changed |= replace_if_different(&mut note.color, color);
        }
        if let Some(tags) = self.tags {
            changed |= replace_if_different(&mut note.tags, normalize_tags(tags));
        }
        changed
    }
}

/// Generates a fresh opaque note id.
pub fn new_note_id() -> NoteId {
    Uuid::new_v4().to_string()
}

/// Current wall-clock time in epoch milliseconds.
///
/// Falls back to `0` if the system clock reports a pre-epoch time.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Splits raw multi-line text into non-blank content lines.
pub fn split_lines(body: &str) -> Vec<String> {
    normalize_content(body.lines().map(str::to_string))
}

fn replace_if_different<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn normalize_title(title: Option<&str>) -> String {
    match title.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_TITLE.to_string(),
    }
}

fn normalize_content(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn normalize_tags(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() || unique.iter().any(|existing| existing == trimmed) {
            continue;
        }
        unique.push(trimmed.to_string());
    }
    unique
}
