//! Strategy enum for selecting how a step pass is executed.
//!
//! Every strategy writes only the shadow buffer and reads only the active
//! one, so they produce identical generations and differ only in speed.

/// Grids at or above this many cells run in parallel under `Auto`
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Available step execution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Row-major, single thread
    Serial,
    /// Rayon over disjoint shadow rows
    Parallel,
    /// Parallel for large grids, serial otherwise
    #[default]
    Auto,
}

impl Strategy {
    /// Get all available strategies
    pub fn all() -> Vec<Strategy> {
        vec![Strategy::Serial, Strategy::Parallel, Strategy::Auto]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Parallel => "Parallel",
            Strategy::Auto => "Auto",
        }
    }

    /// Whether a pass over `cells` cells should fan out across threads
    pub fn runs_parallel(&self, cells: usize) -> bool {
        match self {
            Strategy::Serial => false,
            Strategy::Parallel => true,
            Strategy::Auto => cells >= PARALLEL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Strategy::default(), Strategy::Auto);
    }

    #[test]
    fn test_auto_switches_on_size() {
        assert!(!Strategy::Auto.runs_parallel(100));
        assert!(Strategy::Auto.runs_parallel(PARALLEL_THRESHOLD));
        assert!(Strategy::Parallel.runs_parallel(1));
        assert!(!Strategy::Serial.runs_parallel(usize::MAX));
    }
}
