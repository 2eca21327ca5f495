//! Deterministic linear-congruential generator for branch counts.

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS: u64 = 1 << 31;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u32 = 1;

/// Source of bounded draws used to decide branching factors.
///
/// Builders take this trait instead of a concrete generator so tests can
/// inject scripted sequences.
pub trait BranchDraw {
    /// Draw an integer in `[0, bound)`.
    fn next(&mut self, bound: u32) -> DomainResult<u32>;

    /// Draw an integer in the inclusive range `[min, max]`.
    fn next_in(&mut self, min: u32, max: u32) -> DomainResult<u32> {
        if min > max {
            return Err(DomainError::InvalidRange { min, max });
        }
        let span = u64::from(max - min) + 1;
        let bound = u32::try_from(span).map_err(|_| DomainError::InvalidBound { bound: span })?;
        Ok(min + self.next(bound)?)
    }
}

/// Linear-congruential counter: `state = (state * 1103515245 + 12345) mod 2^31`.
///
/// Not a quality RNG. Its only job is reproducible branch counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn reseed(&mut self, seed: u32) {
        self.state = seed;
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        // u64 intermediate: state < 2^32 and the product stays below 2^63
        let next = (u64::from(self.state) * MULTIPLIER + INCREMENT) % MODULUS;
        self.state = next as u32;
        self.state
    }
}

impl BranchDraw for Lcg {
    #[instrument(level = "trace", skip(self))]
    fn next(&mut self, bound: u32) -> DomainResult<u32> {
        if bound == 0 {
            return Err(DomainError::InvalidBound { bound: 0 });
        }
        Ok(self.step() % bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_seed_one_when_stepping_then_matches_reference_states() {
        let mut lcg = Lcg::default();
        let states: Vec<u32> = (0..5).map(|_| lcg.step()).collect();
        assert_eq!(
            states,
            vec![1103527590, 377401575, 662824084, 1147902781, 2035015474]
        );
    }

    #[test]
    fn given_zero_bound_when_drawing_then_fails_without_advancing() {
        let mut lcg = Lcg::new(7);
        assert_eq!(lcg.next(0), Err(DomainError::InvalidBound { bound: 0 }));
        assert_eq!(lcg.state(), 7);
    }

    #[test]
    fn given_inverted_range_when_drawing_then_errors() {
        let mut lcg = Lcg::default();
        assert_eq!(
            lcg.next_in(5, 3),
            Err(DomainError::InvalidRange { min: 5, max: 3 })
        );
    }

    #[test]
    fn given_full_u32_range_when_drawing_then_bound_overflow_is_reported() {
        let mut lcg = Lcg::default();
        assert!(matches!(
            lcg.next_in(0, u32::MAX),
            Err(DomainError::InvalidBound { .. })
        ));
    }

    #[test]
    fn given_max_state_when_stepping_then_no_overflow() {
        let mut lcg = Lcg::new(u32::MAX);
        let expected = ((u32::MAX as u64) * MULTIPLIER + INCREMENT) % MODULUS;
        assert_eq!(lcg.step() as u64, expected);
    }
}
