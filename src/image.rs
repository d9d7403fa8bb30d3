use std::f32::consts::{PI, TAU};
use std::sync::{Arc, OnceLock};

use egui::{Pos2, Rect};

/// Key of the built-in star icon
pub const STAR_IMAGE_KEY: &str = "star";

const STAR_POINTS: usize = 5;
const STAR_INNER_RATIO: f32 = 0.382;

/// Decoded vector image: a closed outline in unit space (0..1 on both axes).
#[derive(Debug, Clone, PartialEq)]
pub struct VectorImage {
    outline: Vec<Pos2>,
}

impl VectorImage {
    fn star() -> Self {
        let center = Pos2::new(0.5, 0.5);
        let outline = (0..STAR_POINTS * 2)
            .map(|i| {
                let radius = if i % 2 == 0 { 0.5 } else { 0.5 * STAR_INNER_RATIO };
                let angle = -PI / 2.0 + i as f32 * TAU / (STAR_POINTS * 2) as f32;
                Pos2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect();
        Self { outline }
    }

    pub fn outline(&self) -> &[Pos2] {
        &self.outline
    }

    /// Outline stretched to fill `target`
    pub fn fit_to(&self, target: Rect) -> Vec<Pos2> {
        self.outline
            .iter()
            .map(|p| {
                Pos2::new(
                    target.min.x + p.x * target.width(),
                    target.min.y + p.y * target.height(),
                )
            })
            .collect()
    }
}

static STAR_IMAGE: OnceLock<VectorImage> = OnceLock::new();

/// Handle to a shared, read-only vector image.
///
/// Every star on the canvas holds one of these; the image itself is decoded
/// once per process on first use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    key: Arc<str>,
}

impl ImageRef {
    pub fn star() -> Self {
        Self::from_key(STAR_IMAGE_KEY)
    }

    pub fn from_key(key: &str) -> Self {
        Self { key: Arc::from(key) }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Look up the decoded image. Unknown keys (e.g. from a newer build)
    /// resolve to `None` and are drawn as a placeholder.
    pub fn resolve(&self) -> Option<&'static VectorImage> {
        match &*self.key {
            STAR_IMAGE_KEY => Some(STAR_IMAGE.get_or_init(VectorImage::star)),
            _ => None,
        }
    }
}
