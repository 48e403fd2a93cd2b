//! Win/loss evaluation. Pure functions of the oracle's random value.

use crate::constants::ROLL_RANGE;

/// Reduce a raw random value to a percentile in `0..100`.
pub fn roll(random_value: u64) -> u32 {
    (random_value % ROLL_RANGE) as u32
}

/// Reduce a 32-byte digest using its four high-order bytes. Some hash
/// constructions carry little entropy in their low bits.
pub fn roll_from_digest(digest: &[u8; 32]) -> u32 {
    let high = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    roll(high as u64)
}

/// A roll wins iff it is strictly below the threshold.
pub fn is_win(roll: u32, threshold: u32) -> bool {
    roll < threshold
}

/// Whether `random_value` wins against `threshold`.
pub fn evaluate(random_value: u64, threshold: u32) -> bool {
    is_win(roll(random_value), threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert!(evaluate(25, 35));
        assert!(!evaluate(75, 35));
        assert!(evaluate(34, 35));
        assert!(!evaluate(35, 35));
        assert!(evaluate(0, 35));
        assert!(!evaluate(99, 35));
    }

    #[test]
    fn test_reduces_modulo_hundred() {
        assert_eq!(roll(1_234), 34);
        assert!(evaluate(1_234, 35));
        assert_eq!(roll(u64::MAX), (u64::MAX % 100) as u32);
        assert!(!evaluate(135, 35));
    }

    #[test]
    fn test_extreme_thresholds() {
        for v in [0u64, 17, 50, 99, 12_345_678] {
            assert!(!evaluate(v, 0));
            assert!(evaluate(v, 100));
        }
    }

    #[test]
    fn test_digest_uses_high_order_bytes() {
        let mut digest = [0xffu8; 32];
        digest[..4].copy_from_slice(&10u32.to_be_bytes());
        assert_eq!(roll_from_digest(&digest), 10);

        // Low-order bytes do not move the roll.
        digest[31] = 0;
        digest[4] = 0;
        assert_eq!(roll_from_digest(&digest), 10);

        digest[..4].copy_from_slice(&290u32.to_be_bytes());
        assert_eq!(roll_from_digest(&digest), 90);
    }
}
