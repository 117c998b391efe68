//! Double-buffered step function.
//!
//! A step reads the active buffer, writes every cell of the shadow buffer,
//! then swaps exactly once. New values never leak into the same pass.

use rayon::prelude::*;

use super::config::RuleConfig;
use super::error::{EngineError, Result};
use super::field::Field;
use super::grid::Grid;
use super::rules::{BoxBlur, LifeAging, Rule, RuleKind};
use super::strategy::Strategy;

#[derive(Clone, Copy, Debug, Default)]
pub struct RuleEngine {
    strategy: Strategy,
}

impl RuleEngine {
    pub const fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Advance the field one generation with no pointer activity
    pub fn step(&self, field: &mut Field, config: &RuleConfig) -> Result<()> {
        self.step_with_pointer(field, config, false)
    }

    /// Advance the field one generation.
    /// `pointer_active` flips the sign of the diffusion drift term.
    pub fn step_with_pointer(
        &self,
        field: &mut Field,
        config: &RuleConfig,
        pointer_active: bool,
    ) -> Result<()> {
        config.validate()?;
        match (field, config.rule_kind) {
            (Field::Life(grid), RuleKind::LifeAging) => {
                self.advance(grid, &LifeAging::new(config.max_generations));
            }
            (Field::Blur(grid), RuleKind::BoxBlur) => {
                self.advance(grid, &BoxBlur::new(config.blur, pointer_active));
            }
            (field, kind) => {
                log::debug!("refusing {} step on a {} field", kind.name(), field.kind().name());
                return Err(EngineError::DimensionMismatch {
                    reason: "rule kind does not match the field's cell domain",
                });
            }
        }
        Ok(())
    }

    /// Run one full pass of `rule` into the shadow buffer, then swap
    pub fn advance<R: Rule>(&self, grid: &mut Grid<R::Cell>, rule: &R) {
        let (width, height) = grid.dimensions();
        let parallel = self.strategy.runs_parallel(width as usize * height as usize);
        {
            let (frame, shadow) = grid.split_for_step();
            let row_len = width as usize;
            if parallel {
                // rayon joins every row before returning, so the swap below
                // never observes a half-written shadow
                shadow.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = rule.evolve(&frame, x as u32, y as u32);
                    }
                });
            } else {
                shadow.chunks_mut(row_len).enumerate().for_each(|(y, row)| {
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = rule.evolve(&frame, x as u32, y as u32);
                    }
                });
            }
        }
        grid.swap_buffers();
    }
}
