//! Byte-faithful text documents
//!
//! Manifests are edited as plain text. A [`TextDocument`] remembers the
//! details that decoding throws away (a UTF-8 byte-order mark and the newline
//! convention) so that writing an unmodified document reproduces the
//! original bytes.

use std::path::{Path, PathBuf};

use crate::{Result, io};

/// UTF-8 byte-order mark.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Newline convention of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineStyle {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl NewlineStyle {
    /// Detect the convention: any `\r\n` wins, otherwise `\n`.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// The literal line terminator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// A text file loaded for in-place editing.
#[derive(Debug, Clone)]
pub struct TextDocument {
    path: PathBuf,
    /// Text as decoded at load time (for is_modified tracking)
    original: String,
    text: String,
    newline: NewlineStyle,
    has_bom: bool,
}

impl TextDocument {
    /// Load a document from disk.
    ///
    /// Decoding never fails: invalid UTF-8 sequences are replaced with
    /// U+FFFD.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = io::read_bytes(path)?;
        Ok(Self::from_bytes(path, &data))
    }

    /// Build a document from raw bytes as if it had been read from `path`.
    pub fn from_bytes(path: impl Into<PathBuf>, data: &[u8]) -> Self {
        let (has_bom, body) = match data.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, data),
        };
        let text = String::from_utf8_lossy(body).into_owned();
        let newline = NewlineStyle::detect(&text);

        Self {
            path: path.into(),
            original: text.clone(),
            text,
            newline,
            has_bom,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn newline(&self) -> NewlineStyle {
        self.newline
    }

    pub fn has_bom(&self) -> bool {
        self.has_bom
    }

    /// Whether the text differs from what was loaded.
    pub fn is_modified(&self) -> bool {
        self.text != self.original
    }

    /// Serialize to the exact bytes that [`save`](Self::save) writes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.text.len() + BOM.len());
        if self.has_bom {
            data.extend_from_slice(BOM);
        }
        data.extend_from_slice(self.text.as_bytes());
        data
    }

    /// Write the document back to its path.
    pub fn save(&self) -> Result<()> {
        io::write_atomic(&self.path, &self.to_bytes())?;
        tracing::info!(path = %self.path.display(), "saved document");
        Ok(())
    }
}
