//! Rule configuration passed into every step.
//!
//! The engine never reads controls itself; the control panel builds one of
//! these and hands it over.

use super::error::{EngineError, Result};
use super::rules::RuleKind;
use super::symmetry::MirrorMode;

pub const MIN_GENERATIONS: u32 = 1;
pub const MAX_GENERATIONS: u32 = 64;
pub const MIN_STEP_INTERVAL_MS: u32 = 1;
pub const MAX_STEP_INTERVAL_MS: u32 = 750;

/// Diffusion parameters for the box-blur rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurParams {
    /// Offset of the four axis samples
    pub distance: u32,
    /// Blend factor from current value toward the blurred mean
    pub ratio: f32,
    /// Constant added after blending; negated while the pointer is active
    pub drift: f32,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            distance: 2,
            ratio: 0.8,
            drift: 0.0,
        }
    }
}

impl BlurParams {
    /// Drift term for this step
    pub fn drift_for(&self, pointer_active: bool) -> f32 {
        if pointer_active { -self.drift } else { self.drift }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RuleConfig {
    pub rule_kind: RuleKind,
    /// Age cap for life cells, in `[1, 64]`
    pub max_generations: u32,
    pub mirror_mode: MirrorMode,
    /// Minimum time between automatic steps, in `[1, 750]`
    pub step_interval_ms: u32,
    pub blur: BlurParams,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            rule_kind: RuleKind::LifeAging,
            max_generations: 3,
            mirror_mode: MirrorMode::None,
            step_interval_ms: 30,
            blur: BlurParams::default(),
        }
    }
}

impl RuleConfig {
    pub fn with_rule_kind(mut self, rule_kind: RuleKind) -> Self {
        self.rule_kind = rule_kind;
        self
    }

    /// Set the age cap, clamped to `[1, 64]`
    pub fn with_max_generations(mut self, max_generations: u32) -> Self {
        self.max_generations = clamp_generations(max_generations);
        self
    }

    pub fn with_mirror_mode(mut self, mirror_mode: MirrorMode) -> Self {
        self.mirror_mode = mirror_mode;
        self
    }

    /// Set the step interval, clamped to `[1, 750]` ms
    pub fn with_step_interval_ms(mut self, step_interval_ms: u32) -> Self {
        self.step_interval_ms = clamp_step_interval(step_interval_ms);
        self
    }

    pub fn with_blur(mut self, blur: BlurParams) -> Self {
        self.blur = blur;
        self
    }

    /// Check the values a step depends on
    pub fn validate(&self) -> Result<()> {
        if self.max_generations == 0 {
            return Err(EngineError::DimensionMismatch {
                reason: "max_generations must be at least 1",
            });
        }
        let blur = &self.blur;
        if !blur.ratio.is_finite() || !(0.0..=1.0).contains(&blur.ratio) {
            return Err(EngineError::DimensionMismatch {
                reason: "blur ratio must lie in [0, 1]",
            });
        }
        if !blur.drift.is_finite() {
            return Err(EngineError::DimensionMismatch {
                reason: "blur drift must be finite",
            });
        }
        if blur.distance == 0 {
            return Err(EngineError::DimensionMismatch {
                reason: "blur distance must be at least 1",
            });
        }
        Ok(())
    }
}

pub fn clamp_generations(value: u32) -> u32 {
    value.clamp(MIN_GENERATIONS, MAX_GENERATIONS)
}

pub fn clamp_step_interval(value: u32) -> u32 {
    value.clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS)
}
