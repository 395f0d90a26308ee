//! Rich diagnostic error types for the heseb engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so users know exactly which input was
//! rejected and why. No error here is fatal: every failure crosses the public
//! boundary as an ordinary returned value.

use miette::Diagnostic;
use thiserror::Error;

use crate::system::System;

/// Top-level error type for the heseb engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum HesebError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Dispatch(#[from] DispatchError),
}

// ---------------------------------------------------------------------------
// Codec errors
// ---------------------------------------------------------------------------

/// Errors raised by an individual numeral codec.
///
/// A codec never produces partial output: every variant means the whole
/// conversion was rejected.
#[derive(Debug, Error, Diagnostic)]
pub enum CodecError {
    #[error("{system} cannot represent {value}: only positive integers are supported")]
    #[diagnostic(
        code(heseb::codec::not_positive),
        help(
            "Historical additive systems have no symbol for zero and no \
             sign convention. Supply a value of 1 or greater, or encode \
             into a positional system instead."
        )
    )]
    NotPositive { system: System, value: i64 },

    #[error("{system} cannot represent {value}: negative values are not supported")]
    #[diagnostic(
        code(heseb::codec::negative),
        help(
            "This system has no negative-sign convention. Encode the \
             absolute value, or choose a positional system which prefixes \
             '-' to negative encodings."
        )
    )]
    Negative { system: System, value: i64 },

    #[error("{value} is outside the range {min}..={max} supported by {system}")]
    #[diagnostic(
        code(heseb::codec::out_of_range),
        help(
            "The symbol repertoire of this system bounds the values it can \
             write. Split the value, or encode into a positional system \
             with unbounded range."
        )
    )]
    OutOfRange {
        system: System,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("invalid digit {codepoint:?} for {system}")]
    #[diagnostic(
        code(heseb::codec::invalid_digit),
        help(
            "Every code point of the input must belong to the system's \
             digit block. Check for mixed scripts or a stray separator, \
             and pass the separator explicitly if one was used."
        )
    )]
    InvalidDigit { system: System, codepoint: char },

    #[error("malformed {system} numeral: {text:?}")]
    #[diagnostic(
        code(heseb::codec::invalid_numeral),
        help(
            "The input contains a symbol run that this system's grammar \
             does not produce. Use `heseb detect` to check which system \
             the string actually belongs to."
        )
    )]
    InvalidNumeral { system: System, text: String },

    #[error("{system} numeral {text:?} overflows a 64-bit integer")]
    #[diagnostic(
        code(heseb::codec::overflow),
        help(
            "The encoded value does not fit in i64, which is the widest \
             integer the engine converts. Shorten the numeral."
        )
    )]
    Overflow { system: System, text: String },

    #[error("decoding {text:?} as {system} is not implemented")]
    #[diagnostic(
        code(heseb::codec::not_implemented),
        help(
            "Only constant forms (zero, negative zero) of this system can \
             be decoded. General myriad-grouped parsing is an acknowledged \
             gap, not a malformed input."
        )
    )]
    NotImplemented { system: System, text: String },
}

// ---------------------------------------------------------------------------
// Dispatch errors
// ---------------------------------------------------------------------------

/// Errors raised by the system-resolution layer.
#[derive(Debug, Error, Diagnostic)]
pub enum DispatchError {
    #[error("unknown numeral system: '{name}'")]
    #[diagnostic(
        code(heseb::dispatch::unknown_system),
        help("Run `heseb catalog` to list the supported system identifiers.")
    )]
    UnknownSystem { name: String },

    #[error("no numeral system claims the string {text:?}")]
    #[diagnostic(
        code(heseb::dispatch::unknown_system),
        help(
            "Auto-detection tried every registered system in priority \
             order and none matched. Pass `--from <system>` if you know \
             the source system, and check for mixed-script input."
        )
    )]
    DetectionFailed { text: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Codec(#[from] CodecError),
}

/// Convenience alias for functions returning heseb results.
pub type HesebResult<T> = std::result::Result<T, HesebError>;

/// Convenience alias for codec-internal results.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
