//! Numeral codecs: the capability contract and its implementations.
//!
//! Every supported system is served by a value implementing [`Codec`], the
//! three-operation contract (encode, decode, detect). Codecs are stateless;
//! all of them work over immutable mapping tables, so a single instance is
//! shared process-wide through the registry.
//!
//! # Components
//!
//! - [`positional`] — the generic base-offset/radix codec serving dozens of
//!   scripts (decimal blocks, math styles, vigesimal Mayan/Kaktovik, dozenal)
//! - [`roman`] — additive-subtractive greedy substitution
//! - [`aegean`] — tally-additive, one glyph per (magnitude, count)
//! - [`attic`] — acrophonic-additive repeated symbols
//! - [`ethiopic`] — hierarchical multiplicative with ×100/×10000 closers
//! - [`cuneiform`] — segmented base-60 with an inner additive sub-codec
//! - [`han`] — myriad-grouped hybrid family (Chinese, financial, Japanese)

pub mod aegean;
pub mod attic;
pub mod cuneiform;
pub mod ethiopic;
pub mod han;
pub mod positional;
pub mod roman;

use std::fmt;

use crate::error::CodecResult;
use crate::system::System;

/// Options recognized by the conversion operations.
///
/// `separator` is honored by positional codecs only: on encode it is
/// interleaved every three digits counting from the least-significant end,
/// on decode every occurrence of it is stripped before digit folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Digit-group separator character (positional systems only).
    pub separator: Option<char>,
}

impl Options {
    /// Options with a digit-group separator.
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator: Some(separator),
        }
    }
}

/// The capability contract every numeral system implements.
///
/// Implementations are registered with the static registry and selected by
/// the dispatch layer, either by explicit [`System`] identifier or by
/// priority-ordered detection.
pub trait Codec: Send + Sync {
    /// The system this codec serves.
    fn system(&self) -> System;

    /// Encode an integer into this system's textual representation.
    ///
    /// Inputs outside the system's supported range are rejected with a
    /// specific error kind; no partial output is ever produced.
    fn encode(&self, value: i64, opts: &Options) -> CodecResult<String>;

    /// Decode a textual representation into an integer.
    ///
    /// The entire input is consumed: any unrecognized code point anywhere
    /// aborts the decode. Nothing is silently skipped.
    fn decode(&self, text: &str, opts: &Options) -> CodecResult<i64>;

    /// Whether every constituent unit of `text` belongs to this system.
    ///
    /// A pure predicate: false for the empty string always, and true only
    /// if the whole remainder (after an optional leading sign and tolerated
    /// separators) lies in this system's glyph set.
    fn detect(&self, text: &str) -> bool;
}

impl fmt::Debug for dyn Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codec({})", self.system())
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Separator characters tolerated during detection: comma, period, and
/// space may appear between digits without disqualifying a positional
/// candidate.
pub(crate) const DETECT_SEPARATORS: [char; 3] = [',', '.', ' '];

/// Split an optional leading `+`/`-` sign off a numeral string.
///
/// Returns `(negative, rest)`. Only the first character is examined; interior
/// signs are left for the digit scan to reject.
pub(crate) fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sign_handles_all_prefixes() {
        assert_eq!(split_sign("-123"), (true, "123"));
        assert_eq!(split_sign("+123"), (false, "123"));
        assert_eq!(split_sign("123"), (false, "123"));
        assert_eq!(split_sign(""), (false, ""));
        assert_eq!(split_sign("-"), (true, ""));
    }

    #[test]
    fn options_default_has_no_separator() {
        assert_eq!(Options::default().separator, None);
        assert_eq!(Options::with_separator(',').separator, Some(','));
    }

    #[test]
    fn dyn_codec_debug_names_the_system() {
        let codec: &dyn Codec = &positional::ARABIC;
        assert_eq!(format!("{codec:?}"), "Codec(arabic)");
    }
}
