//! Writing tone corrections back with quick-xml
//!
//! The source text is streamed event by event. `<tone>` elements of the
//! root-level `<tones>` list get their `name` and `id` attributes replaced
//! from the matching `XmlTone` (by position); every other event is copied
//! through. A leading byte-order mark is kept.

use crate::errors::SongXmlError;
use crate::song_xml::{SongXmlResult, WriteMode, XmlTone};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;
use std::path::Path;

const BOM: char = '\u{FEFF}';

/// Depth of a direct child of the document root
const TONE_LIST_DEPTH: usize = 2;

/// Re-serialize `source` with `tones` applied to its `<tone>` elements
pub fn patch_tones(source: &str, tones: Option<&[XmlTone]>) -> SongXmlResult<String> {
    let body = source.strip_prefix(BOM).unwrap_or(source);
    let mut out = Vec::with_capacity(source.len());
    out.extend_from_slice(source[..source.len() - body.len()].as_bytes());

    let mut reader = Reader::from_str(body);
    let mut writer = Writer::new(out);

    let mut depth = 0usize;
    let mut tones_depth: Option<usize> = None;
    // Only the first root-level <tones> is the tone list
    let mut tone_list_seen = false;
    let mut tone_index = 0usize;

    loop {
        let event = reader.read_event().map_err(|e| {
            SongXmlError::InvalidXml(format!("at position {}: {}", reader.buffer_position(), e))
        })?;

        let event = match event {
            Event::Eof => break,
            Event::Start(e) => {
                depth += 1;
                if is_tone(&e, depth, tones_depth) {
                    let patched = patch_tone(e, tones.and_then(|t| t.get(tone_index)))?;
                    tone_index += 1;
                    Event::Start(patched)
                } else {
                    if is_tone_list(&e, depth, tone_list_seen) {
                        tone_list_seen = true;
                        tones_depth = Some(depth);
                    }
                    Event::Start(e)
                }
            }
            Event::Empty(e) => {
                if is_tone(&e, depth + 1, tones_depth) {
                    let patched = patch_tone(e, tones.and_then(|t| t.get(tone_index)))?;
                    tone_index += 1;
                    Event::Empty(patched)
                } else {
                    if is_tone_list(&e, depth + 1, tone_list_seen) {
                        tone_list_seen = true;
                    }
                    Event::Empty(e)
                }
            }
            Event::End(e) => {
                if tones_depth == Some(depth) {
                    tones_depth = None;
                }
                depth = depth.saturating_sub(1);
                Event::End(e)
            }
            other => other,
        };

        writer
            .write_event(event)
            .map_err(|e| SongXmlError::Write(e.to_string()))?;
    }

    String::from_utf8(writer.into_inner()).map_err(|e| SongXmlError::Write(e.to_string()))
}

/// The first `<tones>` directly under the root
fn is_tone_list(e: &BytesStart, depth: usize, seen: bool) -> bool {
    !seen && depth == TONE_LIST_DEPTH && e.name().as_ref() == b"tones"
}

/// A `<tone>` one level below the open `<tones>`
fn is_tone(e: &BytesStart, depth: usize, tones_depth: Option<usize>) -> bool {
    e.name().as_ref() == b"tone" && tones_depth.map_or(false, |d| depth == d + 1)
}

fn patch_tone<'a>(original: BytesStart<'a>, tone: Option<&XmlTone>) -> SongXmlResult<BytesStart<'a>> {
    let tone = match tone {
        Some(tone) => tone,
        None => return Ok(original),
    };

    let mut current_name = None;
    let mut current_id = None;
    for attr in original.attributes() {
        let attr = attr.map_err(|e| SongXmlError::InvalidXml(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => current_name = Some(attr.unescape_value().map_err(|e| SongXmlError::InvalidXml(e.to_string()))?.into_owned()),
            b"id" => current_id = Some(String::from_utf8_lossy(&attr.value).trim().to_string()),
            _ => {}
        }
    }

    let id = tone.id.to_string();
    let unchanged = current_name.as_deref() == Some(tone.name.as_str())
        && current_id.as_deref().unwrap_or("0") == id;
    if unchanged {
        return Ok(original);
    }

    let mut patched = BytesStart::new("tone");
    let (mut wrote_name, mut wrote_id) = (false, false);
    for attr in original.attributes() {
        let attr = attr.map_err(|e| SongXmlError::InvalidXml(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => {
                patched.push_attribute(("name", tone.name.as_str()));
                wrote_name = true;
            }
            b"id" => {
                patched.push_attribute(("id", id.as_str()));
                wrote_id = true;
            }
            _ => patched.push_attribute(attr),
        }
    }
    if !wrote_id {
        patched.push_attribute(("id", id.as_str()));
    }
    if !wrote_name {
        patched.push_attribute(("name", tone.name.as_str()));
    }

    Ok(patched.into_owned())
}

/// Write `bytes` to `path`, replacing any existing content
pub fn write_file(path: &Path, bytes: &[u8], mode: WriteMode) -> SongXmlResult<()> {
    let io_err = |source| SongXmlError::Io {
        path: path.to_path_buf(),
        source,
    };

    match mode {
        WriteMode::Overwrite => std::fs::write(path, bytes).map_err(io_err),
        WriteMode::Atomic => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
            temp.write_all(bytes).map_err(io_err)?;
            temp.flush().map_err(io_err)?;
            temp.persist(path).map_err(|e| io_err(e.error))?;
            Ok(())
        }
    }
}
