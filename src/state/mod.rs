pub mod context;
pub mod naming;
pub mod persistence;

pub use context::{EditorContext, SaveReport};
pub use naming::NamePool;
pub use persistence::{
    DrawingRepository,
    PersistenceError,
    PersistenceResult,
    SaveOutcome,
};
