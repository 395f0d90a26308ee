//! Generic positional codec, parametrized by digit source and radix.
//!
//! The vast majority of supported systems are plain digit-per-position
//! scripts that differ only in which Unicode block their digits live in.
//! One codec type serves all of them; the per-script instances in
//! [`INSTANCES`] are pure data.
//!
//! Digits usually form a contiguous codepoint range starting at a base
//! codepoint (every decimal script block, the math styles, Mayan and
//! Kaktovik). The one exception is dozenal, whose digit set is ASCII 0–9
//! followed by ↊/↋ from the Number Forms block, so it carries an explicit
//! digit table instead.

use crate::codec::{split_sign, Codec, Options, DETECT_SEPARATORS};
use crate::error::{CodecError, CodecResult};
use crate::system::System;

/// Where a positional system's digit glyphs come from.
#[derive(Debug, Clone, Copy)]
enum Digits {
    /// `radix` consecutive codepoints starting at `base` (digit d ↔ base+d).
    Range { base: char },
    /// An explicit digit table, indexed by digit value.
    Table(&'static [char]),
}

/// A positional numeral codec: base-offset digit mapping plus a radix.
#[derive(Debug, Clone, Copy)]
pub struct Positional {
    system: System,
    digits: Digits,
    radix: u32,
}

impl Positional {
    /// A decimal system with digits in one contiguous codepoint range.
    pub const fn decimal(system: System, base: char) -> Self {
        Self {
            system,
            digits: Digits::Range { base },
            radix: 10,
        }
    }

    /// A contiguous-range system with an explicit radix (Mayan, Kaktovik).
    pub const fn with_radix(system: System, base: char, radix: u32) -> Self {
        Self {
            system,
            digits: Digits::Range { base },
            radix,
        }
    }

    /// A system whose digits are enumerated in a table (dozenal).
    pub const fn tabled(system: System, table: &'static [char]) -> Self {
        Self {
            system,
            digits: Digits::Table(table),
            radix: table.len() as u32,
        }
    }

    /// Value of `cp` as a digit of this system, if it is one.
    fn digit_value(&self, cp: char) -> Option<u32> {
        match self.digits {
            Digits::Range { base } => {
                let v = (cp as u32).wrapping_sub(base as u32);
                (v < self.radix).then_some(v)
            }
            Digits::Table(table) => table
                .iter()
                .position(|&d| d == cp)
                .map(|i| i as u32),
        }
    }

    /// Glyph for digit `d` (caller guarantees `d < radix`).
    fn digit_char(&self, d: u32) -> char {
        match self.digits {
            Digits::Range { base } => {
                // No registered digit block straddles the surrogate gap,
                // so base + d is always a valid scalar.
                char::from_u32(base as u32 + d).expect("digit block within scalar range")
            }
            Digits::Table(table) => table[d as usize],
        }
    }
}

impl Codec for Positional {
    fn system(&self) -> System {
        self.system
    }

    fn encode(&self, value: i64, opts: &Options) -> CodecResult<String> {
        let radix = self.radix as u64;
        let mut n = value.unsigned_abs();
        let mut out: Vec<char> = Vec::new();

        if n == 0 {
            out.push(self.digit_char(0));
        }
        let mut emitted = 0usize;
        while n > 0 {
            if emitted > 0 && emitted % 3 == 0 {
                if let Some(sep) = opts.separator {
                    out.push(sep);
                }
            }
            out.push(self.digit_char((n % radix) as u32));
            n /= radix;
            emitted += 1;
        }
        if value < 0 {
            out.push('-');
        }
        out.reverse();
        Ok(out.into_iter().collect())
    }

    /// Decode a digit string, most-significant digit first.
    ///
    /// An empty digit sequence (after sign/separator stripping) decodes to 0.
    /// `detect` rejects empty strings, so the auto-detection path never gets
    /// here with one; the behavior is kept for direct calls.
    fn decode(&self, text: &str, opts: &Options) -> CodecResult<i64> {
        let (negative, rest) = split_sign(text);
        let radix = self.radix as i64;
        let mut acc: i64 = 0;

        for cp in rest.chars() {
            if opts.separator == Some(cp) {
                continue;
            }
            let d = self.digit_value(cp).ok_or(CodecError::InvalidDigit {
                system: self.system,
                codepoint: cp,
            })? as i64;
            acc = acc
                .checked_mul(radix)
                .and_then(|a| a.checked_add(d))
                .ok_or_else(|| CodecError::Overflow {
                    system: self.system,
                    text: text.to_string(),
                })?;
        }

        Ok(if negative { -acc } else { acc })
    }

    fn detect(&self, text: &str) -> bool {
        let (_, rest) = split_sign(text);
        let mut seen_digit = false;
        for cp in rest.chars() {
            if DETECT_SEPARATORS.contains(&cp) {
                continue;
            }
            if self.digit_value(cp).is_none() {
                return false;
            }
            seen_digit = true;
        }
        seen_digit
    }
}

// ---------------------------------------------------------------------------
// Registered instances (pure data)
// ---------------------------------------------------------------------------

/// The default base-10 system: ASCII digits.
pub const ARABIC: Positional = Positional::decimal(System::Arabic, '0');

/// Dozenal digits: ASCII 0–9 then turned digit two ↊ and turned digit three ↋.
const DOZENAL_DIGITS: [char; 12] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '\u{218A}', '\u{218B}',
];

/// Every positional codec instance, in registration order.
pub const INSTANCES: &[Positional] = &[
    ARABIC,
    Positional::decimal(System::ArabicIndic, '\u{0660}'),
    Positional::decimal(System::ExtendedArabicIndic, '\u{06F0}'),
    Positional::decimal(System::Nko, '\u{07C0}'),
    Positional::decimal(System::Devanagari, '\u{0966}'),
    Positional::decimal(System::Bengali, '\u{09E6}'),
    Positional::decimal(System::Gurmukhi, '\u{0A66}'),
    Positional::decimal(System::Gujarati, '\u{0AE6}'),
    Positional::decimal(System::Oriya, '\u{0B66}'),
    Positional::decimal(System::Tamil, '\u{0BE6}'),
    Positional::decimal(System::Telugu, '\u{0C66}'),
    Positional::decimal(System::Kannada, '\u{0CE6}'),
    Positional::decimal(System::Malayalam, '\u{0D66}'),
    Positional::decimal(System::Sinhala, '\u{0DE6}'),
    Positional::decimal(System::Thai, '\u{0E50}'),
    Positional::decimal(System::Lao, '\u{0ED0}'),
    Positional::decimal(System::Tibetan, '\u{0F20}'),
    Positional::decimal(System::Myanmar, '\u{1040}'),
    Positional::decimal(System::Khmer, '\u{17E0}'),
    Positional::decimal(System::Mongolian, '\u{1810}'),
    Positional::decimal(System::Limbu, '\u{1946}'),
    Positional::decimal(System::NewTaiLue, '\u{19D0}'),
    Positional::decimal(System::Balinese, '\u{1B50}'),
    Positional::decimal(System::Sundanese, '\u{1BB0}'),
    Positional::decimal(System::Lepcha, '\u{1C40}'),
    Positional::decimal(System::OlChiki, '\u{1C50}'),
    Positional::decimal(System::Vai, '\u{A620}'),
    Positional::decimal(System::Saurashtra, '\u{A8D0}'),
    Positional::decimal(System::KayahLi, '\u{A900}'),
    Positional::decimal(System::Javanese, '\u{A9D0}'),
    Positional::decimal(System::Cham, '\u{AA50}'),
    Positional::decimal(System::MeeteiMayek, '\u{ABF0}'),
    Positional::decimal(System::Fullwidth, '\u{FF10}'),
    Positional::decimal(System::Osmanya, '\u{104A0}'),
    Positional::decimal(System::Brahmi, '\u{11066}'),
    Positional::decimal(System::SoraSompeng, '\u{110F0}'),
    Positional::decimal(System::Chakma, '\u{11136}'),
    Positional::decimal(System::Sharada, '\u{111D0}'),
    Positional::decimal(System::Khudawadi, '\u{112F0}'),
    Positional::decimal(System::Tirhuta, '\u{114D0}'),
    Positional::decimal(System::Modi, '\u{11650}'),
    Positional::decimal(System::Takri, '\u{116C0}'),
    Positional::decimal(System::Ahom, '\u{11730}'),
    Positional::decimal(System::WarangCiti, '\u{118E0}'),
    Positional::decimal(System::Mro, '\u{16A60}'),
    Positional::decimal(System::PahawhHmong, '\u{16B50}'),
    Positional::decimal(System::Medefaidrin, '\u{16E80}'),
    Positional::decimal(System::Adlam, '\u{1E950}'),
    Positional::decimal(System::MathBold, '\u{1D7CE}'),
    Positional::decimal(System::MathDoubleStruck, '\u{1D7D8}'),
    Positional::decimal(System::MathSansSerif, '\u{1D7E2}'),
    Positional::decimal(System::MathSansSerifBold, '\u{1D7EC}'),
    Positional::decimal(System::MathMonospace, '\u{1D7F6}'),
    Positional::decimal(System::Segmented, '\u{1FBF0}'),
    Positional::with_radix(System::Mayan, '\u{1D2E0}', 20),
    Positional::with_radix(System::Kaktovik, '\u{1D2C0}', 20),
    Positional::tabled(System::Dozenal, &DOZENAL_DIGITS),
];
