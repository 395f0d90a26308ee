//! System resolution layer: route conversion requests to codecs.
//!
//! The layer owns no algorithmic logic of its own. It looks codecs up in
//! the static registry, walks [`DETECTION_ORDER`] when the source system is
//! unspecified, and composes decode → encode for cross-system conversion.
//! Every codec error propagates unchanged: the layer never recovers, it
//! short-circuits (fail-fast for both chained transcode and batch lists).
//!
//! # Architecture
//!
//! - [`Source`] / [`Target`]: where a string comes from and what to produce
//! - [`Request`] / [`Converted`]: the typed single entry point accepting an
//!   integer, a list of integers, or a string
//! - Convenience functions ([`encode`], [`decode`], [`transcode`],
//!   [`encode_batch`], [`detect`]) for direct use

use crate::codec::{Codec, Options};
use crate::error::{DispatchError, HesebResult};
use crate::registry::{codec, DETECTION_ORDER};
use crate::system::System;

/// Source of a string conversion: an explicit system, or auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Decode with this system's codec.
    System(System),
    /// Walk the detection priority order and use the first claimant.
    #[default]
    Auto,
}

/// Target of a string conversion: a numeral system, or the plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Re-encode into this system.
    System(System),
    /// Return the decoded integer itself.
    Integer,
}

impl Default for Target {
    /// The fixed generic base-10 system.
    fn default() -> Self {
        Target::System(System::Arabic)
    }
}

/// A conversion request: the typed form of the single entry point.
#[derive(Debug, Clone)]
pub enum Request<'a> {
    /// Encode one integer into a system.
    Number { value: i64, to: System },
    /// Encode each integer independently, in order, failing fast.
    Batch { values: &'a [i64], to: System },
    /// Decode a string, optionally re-encoding into a target system.
    Text {
        text: &'a str,
        from: Source,
        to: Target,
    },
}

/// A successful conversion outcome. No partial successes exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted {
    Text(String),
    Number(i64),
    Batch(Vec<String>),
}

/// Drive a [`Request`] to its outcome.
pub fn convert(request: Request<'_>, opts: &Options) -> HesebResult<Converted> {
    match request {
        Request::Number { value, to } => encode(value, to, opts).map(Converted::Text),
        Request::Batch { values, to } => encode_batch(values, to, opts).map(Converted::Batch),
        Request::Text { text, from, to } => {
            let value = decode(text, from, opts)?;
            match to {
                Target::Integer => Ok(Converted::Number(value)),
                Target::System(system) => {
                    encode(value, system, opts).map(Converted::Text)
                }
            }
        }
    }
}

/// Encode `value` into `to`.
pub fn encode(value: i64, to: System, opts: &Options) -> HesebResult<String> {
    Ok(codec(to).encode(value, opts)?)
}

/// Encode each element of `values` into `to`, in input order.
///
/// The first element-level failure aborts the whole batch; no partial list
/// is returned.
pub fn encode_batch(values: &[i64], to: System, opts: &Options) -> HesebResult<Vec<String>> {
    let target = codec(to);
    let mut out = Vec::with_capacity(values.len());
    for &value in values {
        out.push(target.encode(value, opts)?);
    }
    Ok(out)
}

/// Decode `text` from an explicit system or by auto-detection.
pub fn decode(text: &str, from: Source, opts: &Options) -> HesebResult<i64> {
    match from {
        Source::System(system) => Ok(codec(system).decode(text, opts)?),
        Source::Auto => {
            let system = detect(text).ok_or_else(|| DispatchError::DetectionFailed {
                text: text.to_string(),
            })?;
            tracing::debug!(%system, "auto-detected source system");
            Ok(codec(system).decode(text, opts)?)
        }
    }
}

/// Decode `text` and re-encode it into `to`.
pub fn transcode(text: &str, from: Source, to: System, opts: &Options) -> HesebResult<String> {
    let value = decode(text, from, opts)?;
    encode(value, to, opts)
}

/// Resolve the source system of `text` by priority-ordered detection.
///
/// Returns the first system whose glyph set claims the whole string, or
/// `None` when every registered codec declines (including for the empty
/// string, which no codec claims).
pub fn detect(text: &str) -> Option<System> {
    DETECTION_ORDER
        .iter()
        .copied()
        .find(|&system| codec(system).detect(text))
}
