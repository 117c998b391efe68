mod lifecycle;
mod session;
mod viewport;

pub use lifecycle::{LifecycleController, RunState};
pub use session::Session;
pub use viewport::{Viewport, DEFAULT_CELL_SIZE, MAX_CELL_SIZE, MIN_CELL_SIZE};
