//! Glyph source data as handed over by the stroke-font collaborator

use crate::error::GlyphSourceError;
use crate::path::Path;
use serde::{Deserialize, Serialize};

/// One raw drawing primitive of a stroke glyph
///
/// Deserializes from `{"type": "line" | "path" | "polyline", ...}` as well as
/// the compact `{"t": "L" | "P", ...}` records of pre-built stroke data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "RawPrimitive")]
pub enum GlyphPrimitive {
    /// A single straight stroke
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// SVG-style path data
    Path { d: String },
    /// Flat list of coordinates, `x0 y0 x1 y1 ...`
    Polyline { points: Vec<f64> },
}

#[derive(Deserialize)]
struct RawPrimitive {
    #[serde(alias = "t")]
    #[serde(rename = "type")]
    kind: String,
    x1: Option<f64>,
    y1: Option<f64>,
    x2: Option<f64>,
    y2: Option<f64>,
    d: Option<String>,
    points: Option<RawPoints>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoints {
    List(Vec<f64>),
    Text(String),
}

impl TryFrom<RawPrimitive> for GlyphPrimitive {
    type Error = GlyphSourceError;

    fn try_from(raw: RawPrimitive) -> Result<Self, Self::Error> {
        let kind = raw.kind;
        let field = |value: Option<f64>, name: &'static str| {
            value.ok_or_else(|| GlyphSourceError::MissingField {
                kind: kind.clone(),
                field: name,
            })
        };

        match kind.as_str() {
            "line" | "L" => Ok(GlyphPrimitive::Line {
                x1: field(raw.x1, "x1")?,
                y1: field(raw.y1, "y1")?,
                x2: field(raw.x2, "x2")?,
                y2: field(raw.y2, "y2")?,
            }),
            "path" | "P" => raw
                .d
                .map(|d| GlyphPrimitive::Path { d })
                .ok_or_else(|| GlyphSourceError::MissingField {
                    kind: kind.clone(),
                    field: "d",
                }),
            "polyline" => {
                let points = match raw.points {
                    Some(RawPoints::List(points)) => points,
                    Some(RawPoints::Text(text)) => parse_point_list(&text)?,
                    None => {
                        return Err(GlyphSourceError::MissingField {
                            kind: kind.clone(),
                            field: "points",
                        })
                    },
                };
                Ok(GlyphPrimitive::Polyline { points })
            },
            _ => Err(GlyphSourceError::UnknownPrimitive(kind.clone())),
        }
    }
}

/// Read an SVG `points` attribute: numbers split by whitespace or commas
pub fn parse_point_list(text: &str) -> Result<Vec<f64>, GlyphSourceError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| GlyphSourceError::InvalidCoordinate(token.to_string()))
        })
        .collect()
}

/// An outline glyph from the font fallback
///
/// The path is in font units with y growing downwards and the baseline at
/// y = 0, exactly as an outline extractor hands it over.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineGlyph {
    pub path: Path,
    pub advance_width: f64,
    pub units_per_em: f64,
    pub ascender: f64,
}
