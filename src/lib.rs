// Domain layer - grid storage, rules and the stepping engine
pub mod domain;

// Application layer - session state and cadence
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Field, Grid, MirrorMode, RuleConfig, RuleEngine, RuleKind, mirror, presets};
pub use application::{LifecycleController, RunState, Session, Viewport};
pub use ui::Button;
