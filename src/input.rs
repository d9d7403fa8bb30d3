use egui::{Pos2, Rect, Response};

/// Drag motion shorter than this is dropped before it reaches the recorder
pub const MIN_DRAG_DISTANCE: f32 = 1.0;

/// Gesture events delivered to the editor, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Tap(Pos2),
    DragStart(Pos2),
    DragUpdate(Pos2),
    DragEnd,
}

/// Converts egui pointer interaction on the canvas into [`InputEvent`]s.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_drag_pos: Option<Pos2>,
    min_drag_distance: f32,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_drag_pos: None,
            min_drag_distance: MIN_DRAG_DISTANCE,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Screen position to canvas-local position
    pub fn to_canvas(&self, screen: Pos2) -> Pos2 {
        (screen - self.canvas_rect.min).to_pos2()
    }

    pub fn tap(&mut self, screen: Pos2) -> InputEvent {
        InputEvent::Tap(self.to_canvas(screen))
    }

    pub fn drag_start(&mut self, screen: Pos2) -> InputEvent {
        let pos = self.to_canvas(screen);
        self.last_drag_pos = Some(pos);
        InputEvent::DragStart(pos)
    }

    /// A drag update, or `None` if the pointer has not moved far enough
    /// since the last reported point.
    pub fn drag_move(&mut self, screen: Pos2) -> Option<InputEvent> {
        let pos = self.to_canvas(screen);
        match self.last_drag_pos {
            Some(last) if last.distance(pos) < self.min_drag_distance => None,
            _ => {
                self.last_drag_pos = Some(pos);
                Some(InputEvent::DragUpdate(pos))
            }
        }
    }

    pub fn drag_end(&mut self) -> InputEvent {
        self.last_drag_pos = None;
        InputEvent::DragEnd
    }

    /// Collect this frame's events from the canvas response
    pub fn process_response(&mut self, response: &Response) -> Vec<InputEvent> {
        self.set_canvas_rect(response.rect);
        let mut events = Vec::new();
        let pointer = response.interact_pointer_pos();

        if response.clicked() {
            if let Some(pos) = pointer {
                events.push(self.tap(pos));
            }
        }

        if response.drag_started() {
            if let Some(pos) = pointer {
                events.push(self.drag_start(pos));
            }
        } else if response.dragged() {
            if let Some(event) = pointer.and_then(|pos| self.drag_move(pos)) {
                events.push(event);
            }
        }

        if response.drag_stopped() {
            events.push(self.drag_end());
        }

        events
    }
}
