mod stroke_recorder;

pub use stroke_recorder::{RecorderState, StrokeRecorder};
