//! Shannon entropy over outcome counts and bit streams

use std::collections::HashMap;

/// Shannon entropy of an outcome-count distribution, in bits
///
/// H = -sum((count/total) * log2(count/total)) over outcomes with nonzero
/// counts. Returns 0.0 for an empty map.
pub fn shannon_entropy(counts: &HashMap<String, u64>) -> f64 {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;
    for &count in counts.values() {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Shannon entropy of a bit stream over the {0, 1} alphabet, in bits
///
/// Characters other than '0' and '1' are ignored. Returns 0.0 on empty
/// input (and on input with no recognized bits).
pub fn bit_entropy(bits: &str) -> f64 {
    let mut zeros = 0u64;
    let mut ones = 0u64;
    for c in bits.chars() {
        match c {
            '0' => zeros += 1,
            '1' => ones += 1,
            _ => {}
        }
    }

    let total = zeros + ones;
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;
    for count in [zeros, ones] {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Bit entropy of a list of bit-strings concatenated into one symbol stream
pub fn bit_sequence_entropy<S: AsRef<str>>(bit_strings: &[S]) -> f64 {
    let joined: String = bit_strings.iter().map(|s| s.as_ref()).collect();
    bit_entropy(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn counts_of(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_entropy_of_empty_map_is_zero() {
        assert_eq!(shannon_entropy(&HashMap::new()), 0.0);
    }

    #[test]
    fn test_entropy_of_single_outcome_is_zero() {
        let counts = counts_of(&[("00", 1024)]);
        assert_eq!(shannon_entropy(&counts), 0.0);
    }

    #[test]
    fn test_entropy_of_uniform_two_outcomes() {
        let counts = counts_of(&[("0", 500), ("1", 500)]);
        assert_relative_eq!(shannon_entropy(&counts), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_of_uniform_four_outcomes() {
        let counts = counts_of(&[("00", 250), ("01", 250), ("10", 250), ("11", 250)]);
        assert_relative_eq!(shannon_entropy(&counts), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_bounded_by_log2_k() {
        let counts = counts_of(&[("00", 700), ("01", 200), ("10", 90), ("11", 10)]);
        let h = shannon_entropy(&counts);
        assert!(h > 0.0);
        assert!(h <= (counts.len() as f64).log2() + 1e-12);
    }

    #[test]
    fn test_entropy_ignores_zero_counts() {
        let mut counts = counts_of(&[("0", 512), ("1", 512)]);
        counts.insert("phantom".to_string(), 0);
        assert_relative_eq!(shannon_entropy(&counts), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bit_entropy_empty_is_zero() {
        assert_eq!(bit_entropy(""), 0.0);
    }

    #[test]
    fn test_bit_entropy_single_symbol_is_zero() {
        assert_eq!(bit_entropy("00000000"), 0.0);
        assert_eq!(bit_entropy("1111"), 0.0);
    }

    #[test]
    fn test_bit_entropy_balanced_is_one() {
        assert_relative_eq!(bit_entropy("01010101"), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bit_entropy_skips_unrecognized_characters() {
        assert_relative_eq!(bit_entropy("0x1x0x1x"), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bit_sequence_entropy_concatenates() {
        // "00" + "11" is a balanced stream
        assert_relative_eq!(
            bit_sequence_entropy(&["00", "11"]),
            1.0,
            epsilon = 1e-12
        );
        assert_eq!(bit_sequence_entropy::<&str>(&[]), 0.0);
    }
}
