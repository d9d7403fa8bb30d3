use std::fmt;
use std::str::FromStr;

use egui::Pos2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::ColorRef;

/// One step of a freehand path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Pos2),
    LineTo(Pos2),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid path command: {0:?}")]
pub struct ParsePathCommandError(String);

/// SVG-like text form: `M x y` or `L x y`
impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
        }
    }
}

impl FromStr for PathCommand {
    type Err = ParsePathCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePathCommandError(s.to_owned());

        let mut parts = s.split_whitespace();
        let verb = parts.next().ok_or_else(invalid)?;
        let x: f32 = parts.next().and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
        let y: f32 = parts.next().and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        match verb {
            "M" => Ok(PathCommand::MoveTo(Pos2::new(x, y))),
            "L" => Ok(PathCommand::LineTo(Pos2::new(x, y))),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for PathCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PathCommand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Freehand ink stroke.
///
/// Only the stroke recorder appends to a stroke, and only while the drag that
/// created it is still in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    segments: Vec<PathCommand>,
    color: ColorRef,
}

impl Stroke {
    /// Start a stroke at `start`
    pub fn new(start: Pos2, color: impl Into<ColorRef>) -> Self {
        Self {
            segments: vec![PathCommand::MoveTo(start)],
            color: color.into(),
        }
    }

    pub fn from_segments(segments: Vec<PathCommand>, color: impl Into<ColorRef>) -> Self {
        Self {
            segments,
            color: color.into(),
        }
    }

    pub fn segments(&self) -> &[PathCommand] {
        &self.segments
    }

    pub fn color(&self) -> &ColorRef {
        &self.color
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn line_to(&mut self, point: Pos2) {
        self.segments.push(PathCommand::LineTo(point));
    }

    /// Split the path into connected polylines, one per `MoveTo`.
    pub fn polylines(&self) -> Vec<Vec<Pos2>> {
        let mut lines: Vec<Vec<Pos2>> = Vec::new();
        for segment in &self.segments {
            match segment {
                PathCommand::MoveTo(p) => lines.push(vec![*p]),
                PathCommand::LineTo(p) => match lines.last_mut() {
                    Some(current) => current.push(*p),
                    None => lines.push(vec![*p]),
                },
            }
        }
        lines
    }
}
