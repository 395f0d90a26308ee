//! Myriad hybrid codec: Han-script numeral family.
//!
//! Multiplicative-additive decimal notation grouped in powers of 10,000.
//! One codec type serves the family; the variants differ only in their
//! glyph tables: `chinese` (simplified common forms), `chinese-financial`
//! (banker's anti-fraud forms), and `japanese` (kanji forms, 億 rather
//! than 亿).
//!
//! Encode covers the full signed 64-bit range. Decode is a deliberate
//! strict subset: the zero constant and the negative-zero form only; any
//! other well-formed numeral reports `NotImplemented` rather than guessing
//! at a partial grammar.

use crate::codec::{Codec, Options};
use crate::error::{CodecError, CodecResult};
use crate::system::System;

/// A Han-family numeral codec, parametrized by its glyph tables.
#[derive(Debug, Clone, Copy)]
pub struct Han {
    system: System,
    /// Zero glyph used by encode.
    zero: char,
    /// Zero glyphs recognized by decode (〇 and 零 are interchangeable).
    zeros: &'static [char],
    /// Negative-sign prefix.
    negative: &'static str,
    /// Digit glyphs 0..=9 (index 0 is only used via `zero`).
    digits: [char; 10],
    /// Intra-group unit glyphs: ten, hundred, thousand.
    units: [char; 3],
    /// Section glyphs for group levels 1..=4: 10⁴, 10⁸, 10¹², 10¹⁶.
    sections: [char; 4],
}

impl Han {
    /// Render one base-10000 group (1..=9999) with the decimal
    /// additive-positional sub-encoder.
    ///
    /// A zero between rendered positions becomes a single placeholder
    /// glyph; consecutive internal zeros collapse into one, and leading or
    /// trailing zeros produce nothing.
    fn render_group(&self, group: u64) -> String {
        let positions = [
            (group / 1000 % 10, Some(self.units[2])),
            (group / 100 % 10, Some(self.units[1])),
            (group / 10 % 10, Some(self.units[0])),
            (group % 10, None),
        ];

        let mut out = String::new();
        let mut started = false;
        let mut pending_zero = false;
        for (digit, unit) in positions {
            if digit == 0 {
                if started {
                    pending_zero = true;
                }
                continue;
            }
            if pending_zero {
                out.push(self.zero);
                pending_zero = false;
            }
            out.push(self.digits[digit as usize]);
            if let Some(unit) = unit {
                out.push(unit);
            }
            started = true;
        }
        out
    }

    /// Encode a non-zero magnitude (sign handled by the caller).
    fn render_magnitude(&self, mut n: u64) -> String {
        // Base-10000 groups, least significant first.
        let mut groups: Vec<u64> = Vec::new();
        while n > 0 {
            groups.push(n % 10_000);
            n /= 10_000;
        }

        let mut out = String::new();
        let mut any_emitted = false;
        for level in (0..groups.len()).rev() {
            let group = groups[level];
            if group == 0 {
                // The group's digits are omitted but its section glyph is
                // kept once something has been written before it.
                if any_emitted && level > 0 {
                    out.push(self.sections[level - 1]);
                }
                continue;
            }
            out.push_str(&self.render_group(group));
            if level > 0 {
                out.push(self.sections[level - 1]);
            }
            any_emitted = true;
        }

        // Leading "one-ten" contraction: 15 is 十五, not 一十五.
        let mut chars = out.chars();
        if chars.next() == Some(self.digits[1]) && chars.next() == Some(self.units[0]) {
            out.remove(0);
        }
        out
    }

    fn in_glyph_set(&self, cp: char) -> bool {
        self.zeros.contains(&cp)
            || self.negative.contains(cp)
            || self.digits.contains(&cp)
            || self.units.contains(&cp)
            || self.sections.contains(&cp)
    }

    /// Whether `text` is exactly one recognized zero glyph.
    fn is_zero_constant(&self, text: &str) -> bool {
        let mut chars = text.chars();
        matches!((chars.next(), chars.next()), (Some(cp), None) if self.zeros.contains(&cp))
    }
}

impl Codec for Han {
    fn system(&self) -> System {
        self.system
    }

    fn encode(&self, value: i64, _opts: &Options) -> CodecResult<String> {
        if value == 0 {
            return Ok(self.zero.to_string());
        }
        let magnitude = self.render_magnitude(value.unsigned_abs());
        if value < 0 {
            Ok(format!("{}{magnitude}", self.negative))
        } else {
            Ok(magnitude)
        }
    }

    fn decode(&self, text: &str, _opts: &Options) -> CodecResult<i64> {
        if self.is_zero_constant(text) {
            return Ok(0);
        }
        if let Some(rest) = text.strip_prefix(self.negative) {
            if self.is_zero_constant(rest) {
                return Ok(0);
            }
        }
        // Well-formed numerals beyond the constants are an acknowledged
        // gap; anything with foreign code points is plain invalid.
        if let Some(cp) = text.chars().find(|&cp| !self.in_glyph_set(cp)) {
            return Err(CodecError::InvalidDigit {
                system: self.system,
                codepoint: cp,
            });
        }
        if text.is_empty() {
            return Err(CodecError::InvalidNumeral {
                system: self.system,
                text: text.to_string(),
            });
        }
        Err(CodecError::NotImplemented {
            system: self.system,
            text: text.to_string(),
        })
    }

    fn detect(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|cp| self.in_glyph_set(cp))
    }
}

// ---------------------------------------------------------------------------
// Registered instances (pure data)
// ---------------------------------------------------------------------------

/// Simplified Chinese common forms.
pub const CHINESE: Han = Han {
    system: System::Chinese,
    zero: '零',
    zeros: &['零', '〇'],
    negative: "负",
    digits: ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
    units: ['十', '百', '千'],
    sections: ['万', '亿', '兆', '京'],
};

/// Chinese financial (anti-fraud) forms.
pub const CHINESE_FINANCIAL: Han = Han {
    system: System::ChineseFinancial,
    zero: '零',
    zeros: &['零'],
    negative: "负",
    digits: ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'],
    units: ['拾', '佰', '仟'],
    sections: ['万', '亿', '兆', '京'],
};

/// Japanese kanji forms.
pub const JAPANESE: Han = Han {
    system: System::Japanese,
    zero: '〇',
    zeros: &['〇', '零'],
    negative: "マイナス",
    digits: ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
    units: ['十', '百', '千'],
    sections: ['万', '億', '兆', '京'],
};

/// Every Han-family codec instance, in registration order.
pub const INSTANCES: &[Han] = &[CHINESE, CHINESE_FINANCIAL, JAPANESE];
