//! JSON wire format for the stored collection.
//!
//! The stored value is a JSON array of
//! `{id, title, content[], color, createdAt, tags[]}` records.

use crate::model::note::{Note, NoteId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Stored value could not be turned into a valid collection.
#[derive(Debug)]
pub enum CodecError {
    /// Malformed JSON or a record that does not fit the note schema.
    Json(serde_json::Error),
    /// Two records share one id.
    DuplicateId(NoteId),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid stored notes: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate note id in stored notes: `{id}`"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes the collection in order.
pub fn encode_notes(notes: &[Note]) -> CodecResult<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Parses a stored collection and checks id uniqueness.
pub fn decode_notes(raw: &str) -> CodecResult<Vec<Note>> {
    let notes: Vec<Note> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(notes.len());
    for note in &notes {
        if !seen.insert(note.id.as_str()) {
            return Err(CodecError::DuplicateId(note.id.clone()));
        }
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::{decode_notes, encode_notes, CodecError};
    use crate::model::color::NoteColor;

    #[test]
    fn decodes_camel_case_records() {
        let raw = r#"[{"id":"17","title":"Plan","content":["a","b"],"color":"bg-blue-200","createdAt":1700000000000,"tags":["x"]}]"#;
        let notes = decode_notes(raw).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "17");
        assert_eq!(notes[0].color, NoteColor::Blue);
        assert_eq!(notes[0].created_at, 1_700_000_000_000);
    }

    #[test]
    fn encoded_form_uses_wire_field_names() {
        let raw = r#"[{"id":"1","title":"t","content":[],"color":"bg-white","createdAt":5,"tags":[]}]"#;
        let encoded = encode_notes(&decode_notes(raw).unwrap()).unwrap();
        assert!(encoded.contains("\"createdAt\":5"));
        assert!(encoded.contains("\"color\":\"bg-white\""));
    }

    #[test]
    fn rejects_unknown_color_and_duplicate_ids() {
        let unknown = r#"[{"id":"1","title":"t","content":[],"color":"bg-pink-900","createdAt":0,"tags":[]}]"#;
        assert!(matches!(decode_notes(unknown), Err(CodecError::Json(_))));

        let dup = r#"[
            {"id":"1","title":"a","content":[],"color":"bg-white","createdAt":0,"tags":[]},
            {"id":"1","title":"b","content":[],"color":"bg-white","createdAt":0,"tags":[]}
        ]"#;
        assert!(matches!(decode_notes(dup), Err(CodecError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(decode_notes("{\"notes\":[]}").is_err());
        assert!(decode_notes("not json").is_err());
    }
}
