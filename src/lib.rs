// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # heseb
//!
//! A numeral-system conversion engine: integers to and from the textual
//! representations of dozens of numeral systems (modern positional scripts,
//! historical additive/hierarchical/hybrid systems, and specialized bases),
//! with priority-ordered source-system auto-detection.
//!
//! ## Architecture
//!
//! - **Codecs** (`codec`): the encode/decode/detect contract and its
//!   implementations — one generic positional codec serving ~50 scripts as
//!   pure data, plus the structurally distinct historical codecs (Roman,
//!   Aegean, Attic, Ethiopic, Cuneiform) and the Han myriad-hybrid family
//! - **Registry** (`registry`): static codec table and the detection
//!   priority order (narrow glyph sets before generic ones)
//! - **Dispatch** (`dispatch`): system resolution — explicit routing,
//!   auto-detection, decode→encode chaining, fail-fast batch conversion
//! - **Catalog** (`catalog`): descriptive per-system metadata for listing
//!   and JSON export
//!
//! Every conversion is a pure function over immutable static tables; there
//! is no shared mutable state anywhere, so parallel use needs no locks.
//!
//! ## Library usage
//!
//! ```
//! use heseb::codec::Options;
//! use heseb::dispatch::{self, Source};
//! use heseb::system::System;
//!
//! let opts = Options::default();
//! let roman = dispatch::encode(2026, System::Roman, &opts).unwrap();
//! assert_eq!(roman, "MMXXVI");
//!
//! // The source system of a string can be resolved automatically.
//! assert_eq!(dispatch::decode("MMXXVI", Source::Auto, &opts).unwrap(), 2026);
//! assert_eq!(dispatch::detect("𒌋𒌋𒁹𒁹𒁹"), Some(System::Cuneiform));
//! ```

pub mod catalog;
pub mod codec;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod system;
