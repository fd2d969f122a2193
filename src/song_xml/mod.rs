//! XML song documents
//!
//! The song XML is the authoring source of truth for one arrangement. This
//! module reads the parts arrangement construction needs (tuning, tone list,
//! comments) and writes corrected tone entries back.
//!
//! # Architecture
//!
//! ```text
//! song.xml
//!   ↓ [parse with roxmltree]
//! SongDocument { tuning, tones, comments, source }
//!   ↓ [tone reconciliation mutates `tones`]
//!   ↓ [stream `source` through quick-xml, patching <tone> attributes]
//! song.xml (rewritten)
//! ```
//!
//! Re-serialization streams the original text and only rewrites `<tone>`
//! elements of the root-level `<tones>` list whose `name` or `id` changed.
//! Such a tag is re-emitted with double-quoted attributes in canonical
//! spacing; all other markup (comments, a leading byte-order mark, unchanged
//! tones) is copied through verbatim.

pub mod parser;
pub mod writer;

use crate::errors::SongXmlError;
use crate::models::tuning::TuningStrings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub type SongXmlResult<T> = Result<T, SongXmlError>;

/// One `<tone>` entry of the XML tone list
#[derive(Debug, Clone, PartialEq)]
pub struct XmlTone {
    pub name: String,
    /// Ordinal slot (0-3)
    pub id: i32,
    pub time: Option<f64>,
}

/// How a document is written back to disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Truncate and rewrite the file in place
    #[default]
    Overwrite,
    /// Write a sibling temp file, then rename it over the original
    Atomic,
}

/// A loaded XML song document
#[derive(Debug, Clone)]
pub struct SongDocument {
    path: PathBuf,
    source: String,
    /// Text of `<arrangement>`, if present
    pub arrangement: Option<String>,
    pub tuning: TuningStrings,
    /// `None` when the document has no `<tones>` element
    pub tones: Option<Vec<XmlTone>>,
    /// Comment nodes in document order
    pub comments: Vec<String>,
}

impl SongDocument {
    /// Load and parse the document at `path`
    pub fn load(path: impl AsRef<Path>) -> SongXmlResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SongXmlError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(source, path)
    }

    /// Parse `source` as if it had been read from `path`
    pub fn parse(source: String, path: impl Into<PathBuf>) -> SongXmlResult<Self> {
        let parsed = parser::parse_song(&source)?;
        Ok(SongDocument {
            path: path.into(),
            source,
            arrangement: parsed.arrangement,
            tuning: parsed.tuning,
            tones: parsed.tones,
            comments: parsed.comments,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the document with the current tone entries
    pub fn to_xml_string(&self) -> SongXmlResult<String> {
        writer::patch_tones(&self.source, self.tones.as_deref())
    }

    /// Write the document back to the path it was loaded from
    pub fn save(&self, mode: WriteMode) -> SongXmlResult<()> {
        self.save_to(&self.path, mode)
    }

    pub fn save_to(&self, path: &Path, mode: WriteMode) -> SongXmlResult<()> {
        let xml = self.to_xml_string()?;
        writer::write_file(path, xml.as_bytes(), mode)?;
        log::info!("Wrote song XML {} ({:?})", path.display(), mode);
        Ok(())
    }

    /// Read only the comments of a document
    pub fn read_comments(path: impl AsRef<Path>) -> SongXmlResult<Vec<String>> {
        Ok(Self::load(path)?.comments)
    }
}
