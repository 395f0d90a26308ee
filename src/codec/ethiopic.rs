//! Hierarchical multiplicative codec: Ethiopic (Ge'ez) numerals.
//!
//! Values are built from 1–99 groups closed by multiplier glyphs: ፻ scales
//! the group before it by 100, ፼ scales everything accumulated so far by
//! 10,000. A coefficient of 1 is implicit — ፻ alone is 100, ፼ alone is
//! 10,000.
//!
//! Decode folds three accumulators (current 0–99 group, ×100 segment,
//! running total). Each ፼ closer multiplies the *entire* accumulated total,
//! so adjacent closers compound: `decode("፼፼")` is 100,010,000, not 10⁸.
//! Encode caps its domain below 10⁸, where that fold is invertible, so
//! every encoded value decodes back to itself.

use crate::codec::{Codec, Options};
use crate::error::{CodecError, CodecResult};
use crate::system::System;

const MIN: i64 = 1;
const MAX: i64 = 99_999_999;

const ONES_BASE: u32 = 0x1369; // ፩
const TENS_BASE: u32 = 0x1372; // ፲
const HUNDRED: char = '\u{137B}'; // ፻
const MYRIAD: char = '\u{137C}'; // ፼

/// Ethiopic numeral codec.
#[derive(Debug, Clone, Copy)]
pub struct Ethiopic;

impl Ethiopic {
    /// Render 1..=99 as optional tens glyph + optional ones glyph.
    fn push_small(out: &mut String, n: i64) {
        debug_assert!((1..=99).contains(&n));
        let tens = n / 10;
        let ones = n % 10;
        if tens > 0 {
            out.push(char::from_u32(TENS_BASE + tens as u32 - 1).expect("tens row is valid"));
        }
        if ones > 0 {
            out.push(char::from_u32(ONES_BASE + ones as u32 - 1).expect("ones row is valid"));
        }
    }

    /// Render 1..=9999: optional (coefficient)፻ group + trailing 1–99 group.
    fn push_segment(out: &mut String, n: i64) {
        debug_assert!((1..=9999).contains(&n));
        let hundreds = n / 100;
        let rest = n % 100;
        if hundreds > 0 {
            if hundreds != 1 {
                Self::push_small(out, hundreds);
            }
            out.push(HUNDRED);
        }
        if rest > 0 {
            Self::push_small(out, rest);
        }
    }
}

impl Codec for Ethiopic {
    fn system(&self) -> System {
        System::Ethiopic
    }

    fn encode(&self, value: i64, _opts: &Options) -> CodecResult<String> {
        if value < MIN {
            return Err(CodecError::NotPositive {
                system: System::Ethiopic,
                value,
            });
        }
        if value > MAX {
            return Err(CodecError::OutOfRange {
                system: System::Ethiopic,
                value,
                min: MIN,
                max: MAX,
            });
        }

        let mut out = String::new();
        let myriads = value / 10_000;
        let rest = value % 10_000;
        if myriads > 0 {
            if myriads != 1 {
                Self::push_segment(&mut out, myriads);
            }
            out.push(MYRIAD);
        }
        if rest > 0 {
            Self::push_segment(&mut out, rest);
        }
        Ok(out)
    }

    fn decode(&self, text: &str, _opts: &Options) -> CodecResult<i64> {
        if text.is_empty() {
            return Err(CodecError::InvalidNumeral {
                system: System::Ethiopic,
                text: text.to_string(),
            });
        }

        let overflow = || CodecError::Overflow {
            system: System::Ethiopic,
            text: text.to_string(),
        };

        let mut current: i64 = 0; // 1–99 group being accumulated
        let mut segment: i64 = 0; // value below the next ፼ closer
        let mut total: i64 = 0;

        for cp in text.chars() {
            let u = cp as u32;
            if (ONES_BASE..ONES_BASE + 9).contains(&u) {
                current += (u - ONES_BASE) as i64 + 1;
            } else if (TENS_BASE..TENS_BASE + 9).contains(&u) {
                current += ((u - TENS_BASE) as i64 + 1) * 10;
            } else if cp == HUNDRED {
                let coefficient = if current == 0 { 1 } else { current };
                segment = segment
                    .checked_add(coefficient.checked_mul(100).ok_or_else(overflow)?)
                    .ok_or_else(overflow)?;
                current = 0;
            } else if cp == MYRIAD {
                // The closer scales everything accumulated so far, which is
                // what makes adjacent closers compound.
                let mut coefficient = segment + current;
                if coefficient == 0 {
                    coefficient = 1;
                }
                total = total
                    .checked_add(coefficient)
                    .and_then(|t| t.checked_mul(10_000))
                    .ok_or_else(overflow)?;
                segment = 0;
                current = 0;
            } else {
                return Err(CodecError::InvalidDigit {
                    system: System::Ethiopic,
                    codepoint: cp,
                });
            }
        }

        total
            .checked_add(segment)
            .and_then(|t| t.checked_add(current))
            .ok_or_else(overflow)
    }

    fn detect(&self, text: &str) -> bool {
        !text.is_empty()
            && text
                .chars()
                .all(|cp| (ONES_BASE..=MYRIAD as u32).contains(&(cp as u32)))
    }
}
