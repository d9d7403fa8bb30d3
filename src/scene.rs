use log::debug;

use crate::element::{Circle, Drawable, Line, Rectangle, ShapeKind, Star, Stroke, TextLabel};
use crate::error::{SceneError, SceneResult};

/// Everything on the canvas.
///
/// Each kind has its own collection; position in the collection is z-order
/// within that kind (index 0 is drawn first). Strokes are kept separately and
/// are never selectable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    circles: Vec<Circle>,
    rectangles: Vec<Rectangle>,
    lines: Vec<Line>,
    stars: Vec<Star>,
    texts: Vec<TextLabel>,
    strokes: Vec<Stroke>,
}

/// Per-kind typed access into a [`Scene`].
pub trait SceneItem: Drawable + Clone + Sized {
    const KIND: ShapeKind;

    fn collection(scene: &Scene) -> &Vec<Self>;
    fn collection_mut(scene: &mut Scene) -> &mut Vec<Self>;
}

macro_rules! scene_item {
    ($ty:ty, $kind:expr, $field:ident) => {
        impl SceneItem for $ty {
            const KIND: ShapeKind = $kind;

            fn collection(scene: &Scene) -> &Vec<Self> {
                &scene.$field
            }

            fn collection_mut(scene: &mut Scene) -> &mut Vec<Self> {
                &mut scene.$field
            }
        }
    };
}

scene_item!(Circle, ShapeKind::Circle, circles);
scene_item!(Rectangle, ShapeKind::Rectangle, rectangles);
scene_item!(Line, ShapeKind::Line, lines);
scene_item!(Star, ShapeKind::Star, stars);
scene_item!(TextLabel, ShapeKind::Text, texts);

/// Borrowed view handed to the renderer each frame, back to front per kind.
#[derive(Debug, Clone, Copy)]
pub struct DrawList<'a> {
    pub circles: &'a [Circle],
    pub rectangles: &'a [Rectangle],
    pub lines: &'a [Line],
    pub stars: &'a [Star],
    pub texts: &'a [TextLabel],
    pub strokes: &'a [Stroke],
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from already-validated collections.
    pub fn from_parts(
        circles: Vec<Circle>,
        rectangles: Vec<Rectangle>,
        lines: Vec<Line>,
        stars: Vec<Star>,
        texts: Vec<TextLabel>,
        strokes: Vec<Stroke>,
    ) -> Self {
        Self {
            circles,
            rectangles,
            lines,
            stars,
            texts,
            strokes,
        }
    }

    /// Append to the kind's collection; the new item is topmost.
    pub fn add<T: SceneItem>(&mut self, item: T) -> usize {
        let items = T::collection_mut(self);
        items.push(item);
        let index = items.len() - 1;
        debug!("Added {} at index {}", T::KIND, index);
        index
    }

    pub fn get<T: SceneItem>(&self, index: usize) -> SceneResult<&T> {
        let items = T::collection(self);
        items.get(index).ok_or(SceneError::IndexOutOfRange {
            kind: T::KIND,
            index,
            count: items.len(),
        })
    }

    /// Overwrite the item at `index` in place, keeping its z-position.
    pub fn replace<T: SceneItem>(&mut self, index: usize, item: T) -> SceneResult<()> {
        let items = T::collection_mut(self);
        let count = items.len();
        match items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(SceneError::IndexOutOfRange {
                kind: T::KIND,
                index,
                count,
            }),
        }
    }

    pub fn items<T: SceneItem>(&self) -> &[T] {
        T::collection(self)
    }

    /// Remove the object at `index`.
    ///
    /// Later objects of the same kind shift down by one, so any selection
    /// pointing past `index` now names a different object.
    pub fn remove(&mut self, kind: ShapeKind, index: usize) -> SceneResult<()> {
        fn remove_from<T>(items: &mut Vec<T>, kind: ShapeKind, index: usize) -> SceneResult<()> {
            if index >= items.len() {
                return Err(SceneError::IndexOutOfRange {
                    kind,
                    index,
                    count: items.len(),
                });
            }
            items.remove(index);
            Ok(())
        }

        match kind {
            ShapeKind::Circle => remove_from(&mut self.circles, kind, index),
            ShapeKind::Rectangle => remove_from(&mut self.rectangles, kind, index),
            ShapeKind::Line => remove_from(&mut self.lines, kind, index),
            ShapeKind::Star => remove_from(&mut self.stars, kind, index),
            ShapeKind::Text => remove_from(&mut self.texts, kind, index),
        }
    }

    pub fn clear(&mut self, kind: ShapeKind) {
        match kind {
            ShapeKind::Circle => self.circles.clear(),
            ShapeKind::Rectangle => self.rectangles.clear(),
            ShapeKind::Line => self.lines.clear(),
            ShapeKind::Star => self.stars.clear(),
            ShapeKind::Text => self.texts.clear(),
        }
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        match kind {
            ShapeKind::Circle => self.circles.len(),
            ShapeKind::Rectangle => self.rectangles.len(),
            ShapeKind::Line => self.lines.len(),
            ShapeKind::Star => self.stars.len(),
            ShapeKind::Text => self.texts.len(),
        }
    }

    /// Empty every collection, strokes included.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
            && self.rectangles.is_empty()
            && self.lines.is_empty()
            && self.stars.is_empty()
            && self.texts.is_empty()
            && self.strokes.is_empty()
    }

    /// Objects of one kind in insertion order, as trait objects.
    pub fn drawables(&self, kind: ShapeKind) -> Box<dyn Iterator<Item = &dyn Drawable> + '_> {
        match kind {
            ShapeKind::Circle => Box::new(self.circles.iter().map(|c| c as &dyn Drawable)),
            ShapeKind::Rectangle => Box::new(self.rectangles.iter().map(|r| r as &dyn Drawable)),
            ShapeKind::Line => Box::new(self.lines.iter().map(|l| l as &dyn Drawable)),
            ShapeKind::Star => Box::new(self.stars.iter().map(|s| s as &dyn Drawable)),
            ShapeKind::Text => Box::new(self.texts.iter().map(|t| t as &dyn Drawable)),
        }
    }

    pub fn drawable_mut(&mut self, kind: ShapeKind, index: usize) -> SceneResult<&mut dyn Drawable> {
        let count = self.count(kind);
        let item: Option<&mut dyn Drawable> = match kind {
            ShapeKind::Circle => self.circles.get_mut(index).map(|c| c as &mut dyn Drawable),
            ShapeKind::Rectangle => self.rectangles.get_mut(index).map(|r| r as &mut dyn Drawable),
            ShapeKind::Line => self.lines.get_mut(index).map(|l| l as &mut dyn Drawable),
            ShapeKind::Star => self.stars.get_mut(index).map(|s| s as &mut dyn Drawable),
            ShapeKind::Text => self.texts.get_mut(index).map(|t| t as &mut dyn Drawable),
        };
        item.ok_or(SceneError::IndexOutOfRange { kind, index, count })
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub(crate) fn begin_stroke(&mut self, stroke: Stroke) -> usize {
        self.strokes.push(stroke);
        self.strokes.len() - 1
    }

    pub(crate) fn last_stroke_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    /// Concatenate `other` after this scene, collection by collection.
    pub fn append(&mut self, other: Scene) {
        let Scene {
            circles,
            rectangles,
            lines,
            stars,
            texts,
            strokes,
        } = other;
        self.circles.extend(circles);
        self.rectangles.extend(rectangles);
        self.lines.extend(lines);
        self.stars.extend(stars);
        self.texts.extend(texts);
        self.strokes.extend(strokes);
    }

    pub fn draw_list(&self) -> DrawList<'_> {
        DrawList {
            circles: &self.circles,
            rectangles: &self.rectangles,
            lines: &self.lines,
            stars: &self.stars,
            texts: &self.texts,
            strokes: &self.strokes,
        }
    }
}
