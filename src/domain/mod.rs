mod cell;
mod config;
mod engine;
mod error;
mod field;
mod grid;
mod patterns;
mod rules;
mod strategy;
mod symmetry;

pub use cell::{Age, CellState, Level};
pub use config::{
    BlurParams, RuleConfig, clamp_generations, clamp_step_interval, MAX_GENERATIONS,
    MAX_STEP_INTERVAL_MS, MIN_GENERATIONS, MIN_STEP_INTERVAL_MS,
};
pub use engine::RuleEngine;
pub use error::{EngineError, Result};
pub use field::{Field, Fill, NEUTRAL_LEVEL};
pub use grid::{Frame, Grid, InitPolicy};
pub use patterns::{Pattern, presets};
pub use rules::{BoxBlur, LifeAging, Rule, RuleKind};
pub use strategy::{Strategy, PARALLEL_THRESHOLD};
pub use symmetry::{MirrorMode, mirror};
