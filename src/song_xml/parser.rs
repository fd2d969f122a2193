//! Reading song XML with roxmltree

use crate::errors::SongXmlError;
use crate::models::tuning::TuningStrings;
use crate::song_xml::{SongXmlResult, XmlTone};
use roxmltree::{Document, Node};
use std::str::FromStr;

/// The parts of a song document arrangement construction reads
#[derive(Debug, Clone, Default)]
pub struct ParsedSong {
    pub arrangement: Option<String>,
    pub tuning: TuningStrings,
    pub tones: Option<Vec<XmlTone>>,
    pub comments: Vec<String>,
}

/// Parse song XML text
pub fn parse_song(xml: &str) -> SongXmlResult<ParsedSong> {
    let doc = Document::parse(xml).map_err(|e| SongXmlError::InvalidXml(e.to_string()))?;

    let root = doc.root_element();
    match root.tag_name().name() {
        "song" => {}
        // Vocal tracks carry lyrics only
        "vocals" => {
            return Ok(ParsedSong {
                comments: read_comments(&doc),
                ..ParsedSong::default()
            })
        }
        other => return Err(SongXmlError::UnexpectedRoot(other.to_string())),
    }

    let arrangement = get_child(root, "arrangement")
        .and_then(|n| n.text())
        .map(|text| text.trim().to_string());

    let tuning = match get_child(root, "tuning") {
        Some(node) => parse_tuning(node)?,
        None => TuningStrings::default(),
    };

    let tones = match get_child(root, "tones") {
        Some(node) => Some(parse_tones(node)?),
        None => None,
    };

    Ok(ParsedSong {
        arrangement,
        tuning,
        tones,
        comments: read_comments(&doc),
    })
}

/// Comment text in document order, prolog included
pub fn read_comments(doc: &Document) -> Vec<String> {
    doc.root()
        .descendants()
        .filter(|n| n.is_comment())
        .filter_map(|n| n.text())
        .map(str::to_string)
        .collect()
}

fn parse_tuning(node: Node) -> SongXmlResult<TuningStrings> {
    let mut offsets = [0i16; 6];
    for (index, offset) in offsets.iter_mut().enumerate() {
        let attribute = format!("string{}", index);
        if let Some(value) = parse_attribute::<i16>(node, &attribute)? {
            *offset = value;
        }
    }
    Ok(TuningStrings::new(offsets))
}

fn parse_tones(node: Node) -> SongXmlResult<Vec<XmlTone>> {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().name() == "tone")
        .map(|tone| {
            Ok(XmlTone {
                name: tone.attribute("name").unwrap_or_default().to_string(),
                id: parse_attribute::<i32>(tone, "id")?.unwrap_or(0),
                time: parse_attribute::<f64>(tone, "time")?,
            })
        })
        .collect()
}

fn get_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.tag_name().name() == name)
}

fn parse_attribute<T: FromStr>(node: Node, attribute: &str) -> SongXmlResult<Option<T>> {
    match node.attribute(attribute) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| SongXmlError::InvalidValue {
            element: node.tag_name().name().to_string(),
            attribute: attribute.to_string(),
            value: raw.to_string(),
        }),
    }
}
