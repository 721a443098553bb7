//! Seeded xorshift32 randomness
//!
//! Every object carries its own generator state so the integrate pass
//! can run per-object without touching shared state.

/// Default seed used when the host does not provide one
pub const DEFAULT_SEED: u32 = 12345;

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in [0, 1)
#[inline]
pub fn unit_f32(state: &mut u32) -> f32 {
    // 24 bits fit the f32 mantissa exactly, so the result never rounds up to 1.0
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform float in [-0.5, 0.5)
#[inline]
pub fn centered_f32(state: &mut u32) -> f32 {
    unit_f32(state) - 0.5
}

/// Derive a fresh non-zero state from a parent generator.
/// Xorshift gets stuck at zero, so zero is never returned.
#[inline]
pub fn fork_seed(state: &mut u32) -> u32 {
    let seed = xorshift32(state);
    if seed == 0 { DEFAULT_SEED } else { seed }
}

/// Sanitize a host-provided seed
#[inline]
pub fn seed_or_default(seed: u32) -> u32 {
    if seed == 0 { DEFAULT_SEED } else { seed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_stays_in_half_open_range() {
        let mut state = DEFAULT_SEED;
        for _ in 0..10_000 {
            let r = unit_f32(&mut state);
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = 777;
        let mut b = 777;
        for _ in 0..32 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }

    #[test]
    fn fork_never_yields_zero() {
        let mut state = 1;
        for _ in 0..1000 {
            assert_ne!(fork_seed(&mut state), 0);
        }
        assert_eq!(seed_or_default(0), DEFAULT_SEED);
    }
}
