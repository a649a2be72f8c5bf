//! Von Neumann debiasing extractor
//!
//! Consumes 2-bit outcome strings and emits one unbiased bit per unequal
//! pair: "01" -> 0, "10" -> 1, everything else discarded. For independent
//! input bits with a fixed per-bit bias p, P("01") = P("10") = p(1-p), so
//! the output distribution is fair regardless of p. Expected yield is ~25%
//! of pairs for unbiased input.

/// Extract unbiased bits from a sequence of 2-bit outcome strings
///
/// Pairs "00" and "11", and any string whose length is not 2, are discarded
/// without error.
pub fn von_neumann<S: AsRef<str>>(pairs: &[S]) -> String {
    let mut output = String::new();
    for pair in pairs {
        match pair.as_ref() {
            "01" => output.push('0'),
            "10" => output.push('1'),
            _ => {}
        }
    }
    output
}
