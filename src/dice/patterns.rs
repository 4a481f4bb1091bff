use crate::config::FACE_COUNT;

/// Face pattern table: LED bitmask for faces 1 through 6, indexed by
/// the sampled entropy value.
pub const FACE_PATTERNS: [u8; FACE_COUNT as usize] = [
    0b0000_1000, // 1: center pip
    0b0100_0001, // 2
    0b0010_1010, // 3
    0b0110_0011, // 4
    0b0110_1011, // 5
    0b0111_0111, // 6
];

/// Power-on display until the first roll.
pub const ALL_LIT: u8 = 0b0111_1111;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_patterns_have_matching_pip_counts() {
        for (i, pattern) in FACE_PATTERNS.iter().enumerate() {
            assert_eq!(pattern.count_ones() as usize, i + 1);
        }
    }

    #[test]
    fn patterns_fit_the_seven_led_matrix() {
        for pattern in FACE_PATTERNS.iter() {
            assert_eq!(pattern & !ALL_LIT, 0);
        }
        assert_eq!(ALL_LIT.count_ones(), 7);
    }
}
