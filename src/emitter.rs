//! Emission dispatch and the payload type shared by every emitter.

use crate::delimited;
use crate::error::Result;
use crate::fixed_width;
use crate::projector::ProjectedRow;
use crate::spreadsheet;
use crate::template::{FormatKind, Template};

/// The emitted output of one export: text for the line-based formats, a
/// binary buffer with a declared MIME type for the spreadsheet format.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Binary { bytes: Vec<u8>, mime: &'static str },
}

impl Payload {
    /// The raw bytes, ready to write to a file.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Binary { bytes, .. } => bytes,
        }
    }

    /// The payload's MIME type.
    pub fn mime(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text/plain",
            Payload::Binary { mime, .. } => mime,
        }
    }

    /// The payload as text, if it is a text format.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Binary { .. } => None,
        }
    }
}

/// Emits the payload for a template over already-projected rows.
///
/// Dispatch is an exhaustive match over [`FormatKind`], so a new format
/// kind fails to compile until it gets an emitter.
pub fn emit(rows: &[ProjectedRow], template: &Template) -> Result<Payload> {
    match template.format {
        FormatKind::Delimited { delimiter } => {
            Ok(Payload::Text(delimited::emit(rows, template, delimiter)?))
        }
        FormatKind::FixedWidth => Ok(Payload::Text(fixed_width::emit(rows, template)?)),
        FormatKind::Spreadsheet => spreadsheet::emit(rows, template),
    }
}
