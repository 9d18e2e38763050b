//! Seeded pseudo-random generator for reproducible decal patterns.
//!
//! Every decal carries its own seed, so replaying the decal log after a
//! resize reproduces each mark pixel for pixel instead of re-randomizing.

/// Linear-congruential generator: `s = (s * 9301 + 49297) mod 233280`.
///
/// Small modulus on purpose: the sequence only feeds visual jitter, and the
/// same constants are used everywhere a decal needs replayable randomness.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

const MUL: u64 = 9301;
const INC: u64 = 49297;
const MODULUS: u64 = 233280;

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        self.state = (self.state * MUL + INC) % MODULUS;
        self.state as f32 / MODULUS as f32
    }

    /// Next value in `[lo, hi)`.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Next integer in `[lo, hi)`.
    pub fn range_usize(&mut self, lo: usize, hi: usize) -> usize {
        lo + (self.next_f32() * (hi - lo) as f32) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRng::new(12345);
        let mut b = SeededRng::new(12345);
        for _ in 0..64 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        let same = (0..16).filter(|_| a.next_f32() == b.next_f32()).count();
        assert!(same < 16);
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let mut rng = SeededRng::new(u32::MAX);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn range_respects_bounds() {
        let mut rng = SeededRng::new(7);
        for _ in 0..1000 {
            let v = rng.range(25.0, 40.0);
            assert!((25.0..40.0).contains(&v));
        }
    }

    #[test]
    fn range_usize_respects_bounds() {
        let mut rng = SeededRng::new(99);
        for _ in 0..1000 {
            let v = rng.range_usize(5, 9);
            assert!((5..9).contains(&v));
        }
    }
}
