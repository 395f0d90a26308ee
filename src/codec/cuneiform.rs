//! Segmented sexagesimal codec: Babylonian cuneiform.
//!
//! Positional base 60, but each position is itself written additively with
//! just two glyphs: 𒌋 (ten) and 𒁹 (one). Positions are joined by a literal
//! double-space separator; a zero digit has no glyph of its own and is held
//! by a single-space placeholder.
//!
//! Because separator and placeholder are both spaces, consecutive zero
//! positions merge into one longer space run. Decode therefore parses run
//! lengths instead of splitting naively: between glyph runs a space run is
//! 2 + 3z spaces for z interior zeros, a trailing run is 3z, and an
//! all-space numeral of m zero positions is 1 + 3(m − 1). Runs of any other
//! length are malformed.

use crate::codec::{Codec, Options};
use crate::error::{CodecError, CodecResult};
use crate::system::System;

const TEN: char = '\u{1230B}'; // 𒌋
const ONE: char = '\u{12079}'; // 𒁹
const SEPARATOR: &str = "  ";
const PLACEHOLDER: char = ' ';

/// A maximal run of glyphs (summed additively) or spaces (counted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Glyphs(i64),
    Spaces(usize),
}

/// Cuneiform numeral codec.
#[derive(Debug, Clone, Copy)]
pub struct Cuneiform;

impl Cuneiform {
    fn tokenize(text: &str) -> CodecResult<Vec<Run>> {
        let mut runs: Vec<Run> = Vec::new();
        for cp in text.chars() {
            match cp {
                PLACEHOLDER => match runs.last_mut() {
                    Some(Run::Spaces(k)) => *k += 1,
                    _ => runs.push(Run::Spaces(1)),
                },
                TEN | ONE => {
                    let v = if cp == TEN { 10 } else { 1 };
                    match runs.last_mut() {
                        Some(Run::Glyphs(d)) => *d += v,
                        _ => runs.push(Run::Glyphs(v)),
                    }
                }
                _ => {
                    return Err(CodecError::InvalidNumeral {
                        system: System::Cuneiform,
                        text: text.to_string(),
                    });
                }
            }
        }
        Ok(runs)
    }
}

impl Codec for Cuneiform {
    fn system(&self) -> System {
        System::Cuneiform
    }

    fn encode(&self, value: i64, _opts: &Options) -> CodecResult<String> {
        if value < 0 {
            return Err(CodecError::Negative {
                system: System::Cuneiform,
                value,
            });
        }

        // Base-60 digits, least significant first.
        let mut digits: Vec<i64> = Vec::new();
        let mut n = value;
        loop {
            digits.push(n % 60);
            n /= 60;
            if n == 0 {
                break;
            }
        }

        let positions: Vec<String> = digits
            .iter()
            .rev()
            .map(|&d| {
                if d == 0 {
                    PLACEHOLDER.to_string()
                } else {
                    let mut pos = String::new();
                    for _ in 0..d / 10 {
                        pos.push(TEN);
                    }
                    for _ in 0..d % 10 {
                        pos.push(ONE);
                    }
                    pos
                }
            })
            .collect();
        Ok(positions.join(SEPARATOR))
    }

    fn decode(&self, text: &str, _opts: &Options) -> CodecResult<i64> {
        let invalid = || CodecError::InvalidNumeral {
            system: System::Cuneiform,
            text: text.to_string(),
        };

        let runs = Self::tokenize(text)?;
        // A blank numeral is the zero placeholder degenerate case.
        if runs.is_empty() {
            return Ok(0);
        }
        // All spaces: placeholder positions only, worth 0 at any length of
        // the form 1 + 3(m − 1).
        if let [Run::Spaces(k)] = runs[..] {
            return if k % 3 == 1 { Ok(0) } else { Err(invalid()) };
        }

        let mut digits: Vec<i64> = Vec::new();
        let last = runs.len() - 1;
        for (i, run) in runs.iter().enumerate() {
            match *run {
                Run::Glyphs(d) => digits.push(d),
                Run::Spaces(k) => {
                    let zeros = if i == 0 || i == last {
                        // Leading/trailing: each zero position is
                        // placeholder + separator (or separator + placeholder).
                        (k % 3 == 0).then_some(k / 3)
                    } else {
                        // Interior: one separator plus z (placeholder +
                        // separator) groups.
                        (k >= 2 && (k - 2) % 3 == 0).then_some((k - 2) / 3)
                    }
                    .ok_or_else(invalid)?;
                    digits.extend(std::iter::repeat_n(0, zeros));
                }
            }
        }

        let mut acc: i64 = 0;
        for digit in digits {
            acc = acc
                .checked_mul(60)
                .and_then(|a| a.checked_add(digit))
                .ok_or_else(|| CodecError::Overflow {
                    system: System::Cuneiform,
                    text: text.to_string(),
                })?;
        }
        Ok(acc)
    }

    fn detect(&self, text: &str) -> bool {
        let mut seen_glyph = false;
        for cp in text.chars() {
            match cp {
                TEN | ONE => seen_glyph = true,
                PLACEHOLDER => {}
                _ => return false,
            }
        }
        seen_glyph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTS: Options = Options { separator: None };

    #[test]
    fn single_position_values() {
        assert_eq!(Cuneiform.encode(0, &OPTS).unwrap(), " ");
        assert_eq!(Cuneiform.encode(1, &OPTS).unwrap(), "𒁹");
        assert_eq!(Cuneiform.encode(9, &OPTS).unwrap(), "𒁹".repeat(9));
        assert_eq!(Cuneiform.encode(23, &OPTS).unwrap(), "𒌋𒌋𒁹𒁹𒁹");
        assert_eq!(
            Cuneiform.encode(59, &OPTS).unwrap(),
            format!("{}{}", "𒌋".repeat(5), "𒁹".repeat(9))
        );
        assert_eq!(Cuneiform.decode(" ", &OPTS).unwrap(), 0);
    }

    #[test]
    fn sixty_carries_into_a_second_position() {
        // One unit in the 60s place, then separator and placeholder.
        assert_eq!(Cuneiform.encode(60, &OPTS).unwrap(), "𒁹   ");
        assert_eq!(Cuneiform.decode("𒁹   ", &OPTS).unwrap(), 60);
    }

    #[test]
    fn consecutive_zero_positions_merge_into_one_space_run() {
        // 3600 = 1·60² → glyph + two zero positions = six trailing spaces.
        let encoded = Cuneiform.encode(3600, &OPTS).unwrap();
        assert_eq!(encoded, format!("𒁹{}", " ".repeat(6)));
        assert_eq!(Cuneiform.decode(&encoded, &OPTS).unwrap(), 3600);
        // Interior zero: 3601 = 1·60² + 0·60 + 1.
        let encoded = Cuneiform.encode(3601, &OPTS).unwrap();
        assert_eq!(encoded, format!("𒁹{}𒁹", " ".repeat(5)));
        assert_eq!(Cuneiform.decode(&encoded, &OPTS).unwrap(), 3601);
    }

    #[test]
    fn multi_position_values() {
        assert_eq!(Cuneiform.encode(3661, &OPTS).unwrap(), "𒁹  𒁹  𒁹");
        assert_eq!(Cuneiform.decode("𒁹  𒁹  𒁹", &OPTS).unwrap(), 3661);
    }

    #[test]
    fn decode_folds_base_sixty() {
        assert_eq!(Cuneiform.decode("𒌋𒌋𒁹𒁹𒁹", &OPTS).unwrap(), 23);
        // 2·60 + 30
        assert_eq!(Cuneiform.decode("𒁹𒁹  𒌋𒌋𒌋", &OPTS).unwrap(), 150);
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = Cuneiform.encode(-1, &OPTS).unwrap_err();
        assert!(matches!(err, CodecError::Negative { .. }));
    }

    #[test]
    fn decode_rejects_foreign_codepoints_and_bad_spacing() {
        for text in ["𒁹x", "𒁹 𒁹", "𒁹    𒁹", "  "] {
            let err = Cuneiform.decode(text, &OPTS).unwrap_err();
            assert!(
                matches!(err, CodecError::InvalidNumeral { .. }),
                "text {text:?}"
            );
        }
    }

    #[test]
    fn round_trips_across_position_boundaries() {
        for n in [
            0, 1, 59, 60, 61, 599, 3599, 3600, 3601, 3661, 215_999, 216_000,
            216_001, 1_000_000,
        ] {
            let encoded = Cuneiform.encode(n, &OPTS).unwrap();
            assert_eq!(Cuneiform.decode(&encoded, &OPTS).unwrap(), n, "n = {n}");
        }
    }

    #[test]
    fn detect_requires_at_least_one_glyph() {
        assert!(Cuneiform.detect("𒁹   "));
        assert!(Cuneiform.detect("𒌋𒌋𒁹"));
        assert!(!Cuneiform.detect(""));
        assert!(!Cuneiform.detect("   "));
        assert!(!Cuneiform.detect("𒁹1"));
    }
}
