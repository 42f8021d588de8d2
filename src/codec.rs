//! Printable base-64 encoding of assignments.
//!
//! An assignment is read as a big-endian binary integer (node 0 is the most
//! significant bit) and written in base 64 over the alphabet
//! `0-9A-Za-z_$`. The text is padded to `ceil(num_nodes / 6)` digits and
//! wrapped at 120 characters per line; strings longer than 64 digits start
//! with a line break so they print on their own lines.
//!
//! Since 64 = 2^6, each digit is exactly six bits, counted from the least
//! significant end.

use crate::error::{GraphOptError, Result};

/// The 64 digit symbols, in value order.
pub const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_$";

const BITS_PER_DIGIT: usize = 6;

/// Characters per line of an encoded solution.
pub const LINE_WIDTH: usize = 120;

/// Encoded strings longer than this get a leading line break.
pub const INLINE_LIMIT: usize = 64;

fn digit_value(symbol: char) -> Option<usize> {
    match symbol {
        '0'..='9' => Some(symbol as usize - '0' as usize),
        'A'..='Z' => Some(symbol as usize - 'A' as usize + 10),
        'a'..='z' => Some(symbol as usize - 'a' as usize + 36),
        '_' => Some(62),
        '$' => Some(63),
        _ => None,
    }
}

/// Encoder/decoder for assignments of a fixed node count.
///
/// # Examples
///
/// ```
/// use u_graphopt::codec::SolutionCodec;
///
/// let codec = SolutionCodec::new(8);
/// let x = vec![true, false, false, false, false, false, false, true];
/// let s = codec.encode(&x);
/// assert_eq!(s, "21");
/// assert_eq!(codec.decode(&s).unwrap(), x);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionCodec {
    num_nodes: usize,
}

impl SolutionCodec {
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Minimum digit count before wrapping: `ceil(num_nodes / 6)`.
    pub fn width(&self) -> usize {
        self.num_nodes.div_ceil(BITS_PER_DIGIT)
    }

    /// Renders `x` as wrapped base-64 text.
    pub fn encode(&self, x: &[bool]) -> String {
        debug_assert_eq!(x.len(), self.num_nodes);

        // Least significant digit first.
        let mut digits: Vec<char> = x
            .rchunks(BITS_PER_DIGIT)
            .map(|chunk| {
                let value = chunk.iter().fold(0usize, |acc, &b| (acc << 1) | b as usize);
                ALPHABET[value] as char
            })
            .collect();

        while digits.len() > 1 && digits.last() == Some(&'0') {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push('0');
        }
        while digits.len() < self.width() {
            digits.push('0');
        }
        digits.reverse();

        wrap(&digits)
    }

    /// Parses text produced by [`encode`](Self::encode).
    ///
    /// Whitespace is ignored. Fails with [`GraphOptError::InvalidSymbol`] on
    /// a character outside [`ALPHABET`] (position counts characters of the
    /// raw input), and with [`GraphOptError::CodecOverflow`] when the value
    /// has set bits beyond `num_nodes`.
    pub fn decode(&self, s: &str) -> Result<Vec<bool>> {
        let mut bits = Vec::with_capacity(s.len() * BITS_PER_DIGIT);
        for (position, symbol) in s.chars().enumerate() {
            if symbol.is_whitespace() {
                continue;
            }
            let value =
                digit_value(symbol).ok_or(GraphOptError::InvalidSymbol { symbol, position })?;
            for shift in (0..BITS_PER_DIGIT).rev() {
                bits.push((value >> shift) & 1 == 1);
            }
        }

        if bits.len() >= self.num_nodes {
            let excess = bits.len() - self.num_nodes;
            if bits[..excess].iter().any(|&b| b) {
                return Err(GraphOptError::CodecOverflow {
                    num_nodes: self.num_nodes,
                });
            }
            bits.drain(..excess);
            Ok(bits)
        } else {
            let mut x = vec![false; self.num_nodes - bits.len()];
            x.extend(bits);
            Ok(x)
        }
    }
}

fn wrap(digits: &[char]) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / LINE_WIDTH + 2);
    if digits.len() > INLINE_LIMIT {
        out.push('\n');
    }
    for (i, &c) in digits.iter().enumerate() {
        if i > 0 && i % LINE_WIDTH == 0 {
            out.push('\n');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::Rng;
    use u_numflow::random::create_rng;

    fn roundtrip(x: &[bool]) {
        let codec = SolutionCodec::new(x.len());
        let s = codec.encode(x);
        assert_eq!(codec.decode(&s).unwrap(), x, "encoded as {s:?}");
    }

    #[test]
    fn test_roundtrip_standard_lengths() {
        let mut rng = create_rng(42);
        for &n in &[1usize, 8, 37, 120] {
            roundtrip(&vec![false; n]);
            roundtrip(&vec![true; n]);
            for _ in 0..20 {
                let x: Vec<bool> = (0..n).map(|_| rng.random_range(0.0..1.0) < 0.5).collect();
                roundtrip(&x);
            }
        }
    }

    #[test]
    fn test_known_encodings() {
        let codec = SolutionCodec::new(6);
        assert_eq!(codec.encode(&[false, false, false, false, false, true]), "1");
        assert_eq!(codec.encode(&[true; 6]), "$");
        assert_eq!(codec.encode(&[true, false, false, false, false, false]), "W");

        let codec = SolutionCodec::new(12);
        assert_eq!(codec.encode(&[true; 12]), "$$");
        let mut x = vec![false; 12];
        x[6..11].fill(true);
        // low digit 0b111110 = 62, high digit zero but kept for width
        assert_eq!(codec.encode(&x), "0_");
    }

    #[test]
    fn test_zero_padding_width() {
        let codec = SolutionCodec::new(37);
        assert_eq!(codec.width(), 7);
        assert_eq!(codec.encode(&vec![false; 37]), "0000000");

        let mut x = vec![false; 37];
        x[36] = true;
        assert_eq!(codec.encode(&x), "0000001");
    }

    #[test]
    fn test_line_wrapping() {
        let codec = SolutionCodec::new(600);
        let s = codec.encode(&vec![true; 600]);
        assert!(s.starts_with('\n'));
        assert_eq!(s.trim_start().len(), 100);
        assert!(!s.trim_start().contains('\n'));

        let codec = SolutionCodec::new(1200);
        let s = codec.encode(&vec![true; 1200]);
        let lines: Vec<&str> = s.split('\n').collect();
        assert_eq!(lines, vec!["", "$".repeat(120).as_str(), "$".repeat(80).as_str()]);

        let codec = SolutionCodec::new(384);
        assert!(!codec.encode(&vec![true; 384]).contains('\n'));
    }

    #[test]
    fn test_decode_ignores_whitespace() {
        let codec = SolutionCodec::new(12);
        assert_eq!(codec.decode(" $\n$ ").unwrap(), vec![true; 12]);
    }

    #[test]
    fn test_decode_short_input_is_right_aligned() {
        let codec = SolutionCodec::new(10);
        let x = codec.decode("3").unwrap();
        let mut expected = vec![false; 10];
        expected[8] = true;
        expected[9] = true;
        assert_eq!(x, expected);
        assert_eq!(codec.decode("").unwrap(), vec![false; 10]);
    }

    #[test]
    fn test_invalid_symbol() {
        let codec = SolutionCodec::new(24);
        assert_eq!(
            codec.decode("12#4").unwrap_err(),
            GraphOptError::InvalidSymbol {
                symbol: '#',
                position: 2
            }
        );
    }

    #[test]
    fn test_overflow() {
        let codec = SolutionCodec::new(4);
        assert_eq!(codec.decode("F").unwrap(), vec![true; 4]);
        assert_eq!(
            codec.decode("$").unwrap_err(),
            GraphOptError::CodecOverflow { num_nodes: 4 }
        );
    }

    proptest! {
        #[test]
        fn prop_roundtrip(x in proptest::collection::vec(any::<bool>(), 0..400)) {
            let codec = SolutionCodec::new(x.len());
            let s = codec.encode(&x);
            prop_assert_eq!(codec.decode(&s).unwrap(), x);
        }

        #[test]
        fn prop_digit_count(x in proptest::collection::vec(any::<bool>(), 1..400)) {
            let codec = SolutionCodec::new(x.len());
            let digits = codec.encode(&x).chars().filter(|c| !c.is_whitespace()).count();
            prop_assert_eq!(digits, codec.width());
        }
    }
}
