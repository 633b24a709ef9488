use crate::common::RankError;

pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight winning lines as raw masks over bit `row * 3 + col`:
/// three rows, three columns, then the two diagonals.
pub const WIN_LINES: [u16; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];

/// Utility of a terminal board won by X.
pub const MAX_UTILITY: i8 = 1;
/// Utility of a drawn terminal board.
pub const DRAW: i8 = 0;
/// Utility of a terminal board won by O.
pub const MIN_UTILITY: i8 = -1;

pub const DAMPING: f64 = 0.85;
pub const SAMPLES: usize = 10_000;
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;
/// Upper bound on relaxation rounds for the iterative estimator.
pub const MAX_ITERATIONS: usize = 10_000;

/// Tunables shared by both PageRank estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    /// Probability of following an out-link rather than jumping anywhere.
    pub damping: f64,
    /// Number of pages visited by the random walk.
    pub samples: usize,
    /// Largest per-page change still considered converged.
    pub threshold: f64,
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
            threshold: CONVERGENCE_THRESHOLD,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl RankConfig {
    /// Reject tunables outside their domain: damping in (0, 1), at least one
    /// sample and round, and a positive finite threshold.
    pub fn validate(&self) -> Result<(), RankError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(RankError::InvalidDamping(self.damping));
        }
        if self.samples == 0 {
            return Err(RankError::InvalidSamples);
        }
        if !(self.threshold > 0.0 && self.threshold.is_finite()) {
            return Err(RankError::InvalidThreshold(self.threshold));
        }
        if self.max_iterations == 0 {
            return Err(RankError::DidNotConverge { iterations: 0 });
        }
        Ok(())
    }
}
