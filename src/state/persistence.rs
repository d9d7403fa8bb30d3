use egui::Pos2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::element::{
    Circle, ColorRef, FontRef, Line, PathCommand, Rectangle, Star, Stroke, TextLabel,
};
use crate::image::ImageRef;
use crate::scene::Scene;
use crate::storage::{KeyValueStore, StorageError};

/// Ink colour for stored strokes that carry none
pub const DEFAULT_STROKE_COLOR: &str = "#06d6a0";

/// Prefix shared by every drawing key
pub const DRAWING_KEY_PREFIX: &str = "drawing";

/// Errors that can occur while saving or loading drawings
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Malformed drawing data: {0}")]
    MalformedData(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    #[error("No drawing named {0:?}")]
    NotFound(String),
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::MalformedData(err.to_string())
    }
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

// Wire records. Field names are part of the stored format.

#[derive(Debug, Serialize, Deserialize)]
struct CircleRecord {
    cx: f32,
    cy: f32,
    r: f32,
    color: ColorRef,
}

#[derive(Debug, Serialize, Deserialize)]
struct RectangleRecord {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    r: f32,
    color: ColorRef,
}

#[derive(Debug, Serialize, Deserialize)]
struct PointRecord {
    x: f32,
    y: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineRecord {
    p1: PointRecord,
    p2: PointRecord,
    color: ColorRef,
    stroke_width: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StarRecord {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    svg_ref: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextRecord {
    text: String,
    x: f32,
    y: f32,
    font: FontRef,
    color: ColorRef,
    font_size: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct StrokeRecord {
    segments: Vec<PathCommand>,
    #[serde(default)]
    color: Option<ColorRef>,
}

/// A whole drawing as stored. Absent arrays read as empty.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DrawingRecord {
    #[serde(default)]
    circles: Vec<CircleRecord>,
    #[serde(default)]
    rectangles: Vec<RectangleRecord>,
    #[serde(default)]
    lines: Vec<LineRecord>,
    #[serde(default)]
    stars: Vec<StarRecord>,
    #[serde(default)]
    texts: Vec<TextRecord>,
    #[serde(default)]
    strokes: Vec<StrokeRecord>,
}

impl From<&PointRecord> for Pos2 {
    fn from(p: &PointRecord) -> Self {
        Pos2::new(p.x, p.y)
    }
}

impl From<Pos2> for PointRecord {
    fn from(p: Pos2) -> Self {
        PointRecord { x: p.x, y: p.y }
    }
}

fn require_finite(what: &str, index: usize, field: &str, value: f32) -> PersistenceResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PersistenceError::MalformedData(format!(
            "{what}[{index}].{field} must be finite, got {value}"
        )))
    }
}

fn require_positive(what: &str, index: usize, field: &str, value: f32) -> PersistenceResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PersistenceError::MalformedData(format!(
            "{what}[{index}].{field} must be positive, got {value}"
        )))
    }
}

impl DrawingRecord {
    /// Check every number the record carries. JSON has no encoding for
    /// NaN or infinity, so a record that fails here cannot round-trip.
    fn validate(&self) -> PersistenceResult<()> {
        for (i, c) in self.circles.iter().enumerate() {
            require_finite("circles", i, "cx", c.cx)?;
            require_finite("circles", i, "cy", c.cy)?;
            require_positive("circles", i, "r", c.r)?;
        }
        for (i, r) in self.rectangles.iter().enumerate() {
            require_finite("rectangles", i, "x", r.x)?;
            require_finite("rectangles", i, "y", r.y)?;
            require_positive("rectangles", i, "width", r.width)?;
            require_positive("rectangles", i, "height", r.height)?;
            require_finite("rectangles", i, "r", r.r)?;
        }
        for (i, l) in self.lines.iter().enumerate() {
            let coords = [
                ("p1.x", l.p1.x),
                ("p1.y", l.p1.y),
                ("p2.x", l.p2.x),
                ("p2.y", l.p2.y),
            ];
            for (field, value) in coords {
                require_finite("lines", i, field, value)?;
            }
            require_positive("lines", i, "strokeWidth", l.stroke_width)?;
        }
        for (i, s) in self.stars.iter().enumerate() {
            require_finite("stars", i, "x", s.x)?;
            require_finite("stars", i, "y", s.y)?;
            require_positive("stars", i, "width", s.width)?;
            require_positive("stars", i, "height", s.height)?;
        }
        for (i, t) in self.texts.iter().enumerate() {
            require_finite("texts", i, "x", t.x)?;
            require_finite("texts", i, "y", t.y)?;
            require_finite("texts", i, "fontSize", t.font_size)?;
        }
        for (i, s) in self.strokes.iter().enumerate() {
            for command in &s.segments {
                let (PathCommand::MoveTo(p) | PathCommand::LineTo(p)) = command;
                require_finite("strokes", i, "segments", p.x)?;
                require_finite("strokes", i, "segments", p.y)?;
            }
        }
        Ok(())
    }

    fn from_scene(scene: &Scene) -> Self {
        Self {
            circles: scene
                .items::<Circle>()
                .iter()
                .map(|c| CircleRecord {
                    cx: c.center.x,
                    cy: c.center.y,
                    r: c.radius,
                    color: c.color.clone(),
                })
                .collect(),
            rectangles: scene
                .items::<Rectangle>()
                .iter()
                .map(|r| RectangleRecord {
                    x: r.origin.x,
                    y: r.origin.y,
                    width: r.width,
                    height: r.height,
                    r: r.corner_radius,
                    color: r.color.clone(),
                })
                .collect(),
            lines: scene
                .items::<Line>()
                .iter()
                .map(|l| LineRecord {
                    p1: l.p1.into(),
                    p2: l.p2.into(),
                    color: l.color.clone(),
                    stroke_width: l.stroke_width,
                })
                .collect(),
            stars: scene
                .items::<Star>()
                .iter()
                .map(|s| StarRecord {
                    x: s.origin.x,
                    y: s.origin.y,
                    width: s.width,
                    height: s.height,
                    svg_ref: s.image.key().to_owned(),
                })
                .collect(),
            texts: scene
                .items::<TextLabel>()
                .iter()
                .map(|t| TextRecord {
                    text: t.text.clone(),
                    x: t.origin.x,
                    y: t.origin.y,
                    font: t.font.clone(),
                    color: t.color.clone(),
                    font_size: t.font_size,
                })
                .collect(),
            strokes: scene
                .strokes()
                .iter()
                .map(|s| StrokeRecord {
                    segments: s.segments().to_vec(),
                    color: Some(s.color().clone()),
                })
                .collect(),
        }
    }

    /// Convert into a scene, rejecting records that break entity invariants.
    fn into_scene(self) -> PersistenceResult<Scene> {
        self.validate()?;

        let circles = self
            .circles
            .into_iter()
            .map(|c| Circle::new(Pos2::new(c.cx, c.cy), c.r, c.color))
            .collect();

        let rectangles = self
            .rectangles
            .into_iter()
            .map(|r| Rectangle::new(Pos2::new(r.x, r.y), r.width, r.height, r.r, r.color))
            .collect();

        let lines = self
            .lines
            .into_iter()
            .map(|l| Line::new((&l.p1).into(), (&l.p2).into(), l.color, l.stroke_width))
            .collect();

        let stars = self
            .stars
            .into_iter()
            .map(|s| {
                Star::with_image(
                    Pos2::new(s.x, s.y),
                    s.width,
                    s.height,
                    ImageRef::from_key(&s.svg_ref),
                )
            })
            .collect();

        let texts = self
            .texts
            .into_iter()
            .map(|t| TextLabel::new(t.text, Pos2::new(t.x, t.y), t.font, t.color, t.font_size))
            .collect();

        let strokes = self
            .strokes
            .into_iter()
            .map(|s| {
                let color = s.color.unwrap_or_else(|| ColorRef::new(DEFAULT_STROKE_COLOR));
                Stroke::from_segments(s.segments, color)
            })
            .collect();

        Ok(Scene::from_parts(circles, rectangles, lines, stars, texts, strokes))
    }
}

/// Encode a scene. Every collection is written, empty or not.
///
/// Fails with `MalformedData` if the scene holds a value the decoder would
/// reject (a size scaled to zero, a coordinate scaled to infinity).
pub fn serialize(scene: &Scene) -> PersistenceResult<Vec<u8>> {
    let record = DrawingRecord::from_scene(scene);
    record.validate()?;
    Ok(serde_json::to_vec(&record)?)
}

/// Decode a scene, failing with `MalformedData` on anything that is not a
/// well-formed drawing record.
pub fn deserialize(bytes: &[u8]) -> PersistenceResult<Scene> {
    let record: DrawingRecord = serde_json::from_slice(bytes)?;
    record.into_scene()
}

/// What a save did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The key did not exist and was written fresh
    Created,
    /// The scene was appended to an existing drawing
    Merged,
    /// The stored drawing was overwritten with the scene
    Replaced,
}

/// Named drawings on top of a key-value store.
#[derive(Debug)]
pub struct DrawingRepository<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> DrawingRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, DRAWING_KEY_PREFIX)
    }

    pub fn with_prefix(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Keys of all stored drawings, sorted
    pub fn list(&self) -> PersistenceResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .store
            .list_keys()?
            .into_iter()
            .filter(|key| key.starts_with(&self.prefix))
            .collect();
        keys.sort();
        Ok(keys)
    }

    pub fn exists(&self, key: &str) -> PersistenceResult<bool> {
        Ok(self.store.get(key)?.is_some())
    }

    pub fn load(&self, key: &str) -> PersistenceResult<Scene> {
        let bytes = self
            .store
            .get(key)?
            .ok_or_else(|| PersistenceError::NotFound(key.to_owned()))?;
        deserialize(&bytes)
    }

    /// Save `scene` under `key`.
    ///
    /// If the key already holds a drawing, the new objects are appended after
    /// the stored ones (per collection) instead of replacing them. The merged
    /// result is written with a single `set`, so a failure leaves the stored
    /// drawing as it was.
    pub fn save(&mut self, key: &str, scene: &Scene) -> PersistenceResult<SaveOutcome> {
        match self.store.get(key)? {
            Some(existing) => {
                let mut merged = deserialize(&existing)?;
                merged.append(scene.clone());
                self.store.set(key, &serialize(&merged)?)?;
                log::info!("Merged drawing into {}", key);
                Ok(SaveOutcome::Merged)
            }
            None => {
                self.store.set(key, &serialize(scene)?)?;
                log::info!("Saved new drawing {}", key);
                Ok(SaveOutcome::Created)
            }
        }
    }

    /// Overwrite `key` with `scene`, used when the scene was loaded from
    /// that key and already holds everything stored there.
    pub fn replace(&mut self, key: &str, scene: &Scene) -> PersistenceResult<SaveOutcome> {
        let existed = self.exists(key)?;
        self.store.set(key, &serialize(scene)?)?;
        if existed {
            log::info!("Rewrote drawing {}", key);
            Ok(SaveOutcome::Replaced)
        } else {
            log::info!("Saved new drawing {}", key);
            Ok(SaveOutcome::Created)
        }
    }

    pub fn delete(&mut self, key: &str) -> PersistenceResult<()> {
        self.store.remove(key)?;
        log::info!("Deleted drawing {}", key);
        Ok(())
    }
}
