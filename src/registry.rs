//! Static codec registry: one codec instance per [`System`].
//!
//! All codecs are stateless values over immutable tables, so the registry
//! is built once behind a `OnceLock` and handed out as `&'static dyn Codec`
//! borrows. [`DETECTION_ORDER`] is the total order auto-detection walks;
//! its invariant (narrower glyph sets before generic ones) is pinned by
//! tests rather than left implicit.

use std::sync::OnceLock;

use crate::codec::{aegean, attic, cuneiform, ethiopic, han, positional, roman, Codec};
use crate::system::System;

static CODECS: OnceLock<Vec<&'static dyn Codec>> = OnceLock::new();

fn build_registry() -> Vec<&'static dyn Codec> {
    let mut codecs: Vec<&'static dyn Codec> = Vec::new();
    for codec in positional::INSTANCES {
        codecs.push(codec);
    }
    codecs.push(&roman::Roman);
    codecs.push(&aegean::Aegean);
    codecs.push(&attic::Attic);
    codecs.push(&ethiopic::Ethiopic);
    codecs.push(&cuneiform::Cuneiform);
    for codec in han::INSTANCES {
        codecs.push(codec);
    }
    codecs
}

/// All registered codecs, in registration order.
pub fn all_codecs() -> &'static [&'static dyn Codec] {
    CODECS.get_or_init(build_registry)
}

/// The codec serving `system`.
///
/// The registry is total over the closed [`System`] set; a missing entry
/// would be a build-time registration bug, which the tests pin.
pub fn codec(system: System) -> &'static dyn Codec {
    all_codecs()
        .iter()
        .copied()
        .find(|codec| codec.system() == system)
        .expect("every System variant has a registered codec")
}

/// Auto-detection priority order over all systems.
///
/// Structurally distinct and narrow-glyph-set systems come first so that
/// generic codecs never shadow them: historical scripts, then the Han
/// family, then the uniquely-blocked positional scripts, then plain ASCII
/// `arabic`, and finally `dozenal` — whose digit set is a superset of 0–9,
/// so it must only claim what every other system has declined.
pub const DETECTION_ORDER: &[System] = &[
    // Historical systems: unique blocks or narrow letter sets.
    System::Roman,
    System::Aegean,
    System::Attic,
    System::Ethiopic,
    System::Cuneiform,
    // Han family: financial forms are the most distinctive.
    System::ChineseFinancial,
    System::Chinese,
    System::Japanese,
    // Vigesimal and styled digits: unique blocks.
    System::Mayan,
    System::Kaktovik,
    System::MathBold,
    System::MathDoubleStruck,
    System::MathSansSerif,
    System::MathSansSerifBold,
    System::MathMonospace,
    System::Segmented,
    // Decimal script blocks: mutually disjoint ranges.
    System::ArabicIndic,
    System::ExtendedArabicIndic,
    System::Nko,
    System::Devanagari,
    System::Bengali,
    System::Gurmukhi,
    System::Gujarati,
    System::Oriya,
    System::Tamil,
    System::Telugu,
    System::Kannada,
    System::Malayalam,
    System::Sinhala,
    System::Thai,
    System::Lao,
    System::Tibetan,
    System::Myanmar,
    System::Khmer,
    System::Mongolian,
    System::Limbu,
    System::NewTaiLue,
    System::Balinese,
    System::Sundanese,
    System::Lepcha,
    System::OlChiki,
    System::Vai,
    System::Saurashtra,
    System::KayahLi,
    System::Javanese,
    System::Cham,
    System::MeeteiMayek,
    System::Fullwidth,
    System::Osmanya,
    System::Brahmi,
    System::SoraSompeng,
    System::Chakma,
    System::Sharada,
    System::Khudawadi,
    System::Tirhuta,
    System::Modi,
    System::Takri,
    System::Ahom,
    System::WarangCiti,
    System::Mro,
    System::PahawhHmong,
    System::Medefaidrin,
    System::Adlam,
    // Generic ASCII digits: after every narrower script.
    System::Arabic,
    // Dozenal overlaps 0–9 and is deliberately generic: dead last.
    System::Dozenal,
];
