//! Core system identifiers for the heseb engine.
//!
//! Every supported numeral system is named by a [`System`] variant. The set
//! is closed and defined at build time; the registry owns exactly one codec
//! per variant. [`SystemKind`] classifies the structural grammar a system
//! uses, which is what decides which codec type serves it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// Identifier of a supported numeral system.
///
/// `Display` and `FromStr` use the kebab-case identifier (`"arabic-indic"`,
/// `"roman"`, …), matching the serde representation, so CLI arguments and
/// JSON round-trip through the same strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum System {
    // -- Decimal positional scripts --
    Arabic,
    ArabicIndic,
    ExtendedArabicIndic,
    Nko,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    Khmer,
    Mongolian,
    Limbu,
    NewTaiLue,
    Balinese,
    Sundanese,
    Lepcha,
    OlChiki,
    Vai,
    Saurashtra,
    KayahLi,
    Javanese,
    Cham,
    MeeteiMayek,
    Fullwidth,
    Osmanya,
    Brahmi,
    SoraSompeng,
    Chakma,
    Sharada,
    Khudawadi,
    Tirhuta,
    Modi,
    Takri,
    Ahom,
    WarangCiti,
    Mro,
    PahawhHmong,
    Medefaidrin,
    Adlam,
    // -- Mathematical digit styles --
    MathBold,
    MathDoubleStruck,
    MathSansSerif,
    MathSansSerifBold,
    MathMonospace,
    Segmented,
    // -- Non-decimal positional --
    Mayan,
    Kaktovik,
    Dozenal,
    // -- Historical systems --
    Roman,
    Aegean,
    Attic,
    Ethiopic,
    Cuneiform,
    // -- Myriad hybrid family --
    Chinese,
    ChineseFinancial,
    Japanese,
}

/// Structural grammar of a numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemKind {
    /// Digit-per-position with a radix (base 10, 12, or 20 here).
    Positional,
    /// Greedy symbol substitution with subtractive pairs (Roman).
    AdditiveSubtractive,
    /// One glyph per (magnitude, count) pair, purely additive (Aegean).
    TallyAdditive,
    /// Repeated-symbol additive with an enumerated magnitude table (Attic).
    Acrophonic,
    /// Nested additive groups closed by multiplier glyphs (Ethiopic).
    HierarchicalMultiplicative,
    /// Base-60 positions, each rendered by an inner additive sub-codec (Cuneiform).
    SegmentedSexagesimal,
    /// Multiplicative-additive decimal grouped in powers of 10,000 (Han family).
    MyriadHybrid,
}

impl System {
    /// Every supported system, in declaration order.
    ///
    /// This is the registration order, not the detection priority order;
    /// the latter lives in [`crate::registry::DETECTION_ORDER`].
    pub const ALL: &'static [System] = &[
        System::Arabic,
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
        System::MathBold,
        System::MathDoubleStruck,
        System::MathSansSerif,
        System::MathSansSerifBold,
        System::MathMonospace,
        System::Segmented,
        System::Mayan,
        System::Kaktovik,
        System::Dozenal,
        System::Roman,
        System::Aegean,
        System::Attic,
        System::Ethiopic,
        System::Cuneiform,
        System::Chinese,
        System::ChineseFinancial,
        System::Japanese,
    ];

    /// The kebab-case identifier used by `Display`, `FromStr`, serde,
    /// and the CLI.
    pub fn identifier(self) -> &'static str {
        match self {
            System::Arabic => "arabic",
            System::ArabicIndic => "arabic-indic",
            System::ExtendedArabicIndic => "extended-arabic-indic",
            System::Nko => "nko",
            System::Devanagari => "devanagari",
            System::Bengali => "bengali",
            System::Gurmukhi => "gurmukhi",
            System::Gujarati => "gujarati",
            System::Oriya => "oriya",
            System::Tamil => "tamil",
            System::Telugu => "telugu",
            System::Kannada => "kannada",
            System::Malayalam => "malayalam",
            System::Sinhala => "sinhala",
            System::Thai => "thai",
            System::Lao => "lao",
            System::Tibetan => "tibetan",
            System::Myanmar => "myanmar",
            System::Khmer => "khmer",
            System::Mongolian => "mongolian",
            System::Limbu => "limbu",
            System::NewTaiLue => "new-tai-lue",
            System::Balinese => "balinese",
            System::Sundanese => "sundanese",
            System::Lepcha => "lepcha",
            System::OlChiki => "ol-chiki",
            System::Vai => "vai",
            System::Saurashtra => "saurashtra",
            System::KayahLi => "kayah-li",
            System::Javanese => "javanese",
            System::Cham => "cham",
            System::MeeteiMayek => "meetei-mayek",
            System::Fullwidth => "fullwidth",
            System::Osmanya => "osmanya",
            System::Brahmi => "brahmi",
            System::SoraSompeng => "sora-sompeng",
            System::Chakma => "chakma",
            System::Sharada => "sharada",
            System::Khudawadi => "khudawadi",
            System::Tirhuta => "tirhuta",
            System::Modi => "modi",
            System::Takri => "takri",
            System::Ahom => "ahom",
            System::WarangCiti => "warang-citi",
            System::Mro => "mro",
            System::PahawhHmong => "pahawh-hmong",
            System::Medefaidrin => "medefaidrin",
            System::Adlam => "adlam",
            System::MathBold => "math-bold",
            System::MathDoubleStruck => "math-double-struck",
            System::MathSansSerif => "math-sans-serif",
            System::MathSansSerifBold => "math-sans-serif-bold",
            System::MathMonospace => "math-monospace",
            System::Segmented => "segmented",
            System::Mayan => "mayan",
            System::Kaktovik => "kaktovik",
            System::Dozenal => "dozenal",
            System::Roman => "roman",
            System::Aegean => "aegean",
            System::Attic => "attic",
            System::Ethiopic => "ethiopic",
            System::Cuneiform => "cuneiform",
            System::Chinese => "chinese",
            System::ChineseFinancial => "chinese-financial",
            System::Japanese => "japanese",
        }
    }

    /// Structural classification of this system.
    pub fn kind(self) -> SystemKind {
        match self {
            System::Roman => SystemKind::AdditiveSubtractive,
            System::Aegean => SystemKind::TallyAdditive,
            System::Attic => SystemKind::Acrophonic,
            System::Ethiopic => SystemKind::HierarchicalMultiplicative,
            System::Cuneiform => SystemKind::SegmentedSexagesimal,
            System::Chinese | System::ChineseFinancial | System::Japanese => {
                SystemKind::MyriadHybrid
            }
            _ => SystemKind::Positional,
        }
    }
}

impl std::fmt::Display for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for System {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        System::ALL
            .iter()
            .copied()
            .find(|sys| sys.identifier() == s)
            .ok_or_else(|| DispatchError::UnknownSystem {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for &system in System::ALL {
            let parsed: System = system.identifier().parse().unwrap();
            assert_eq!(parsed, system);
        }
    }

    #[test]
    fn identifiers_are_unique() {
        for (i, a) in System::ALL.iter().enumerate() {
            for b in &System::ALL[i + 1..] {
                assert_ne!(a.identifier(), b.identifier());
            }
        }
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let err = "klingon".parse::<System>().unwrap_err();
        assert!(matches!(err, DispatchError::UnknownSystem { .. }));
        assert!(format!("{err}").contains("klingon"));
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(System::ArabicIndic.to_string(), "arabic-indic");
        assert_eq!(System::Roman.to_string(), "roman");
        assert_eq!(System::ChineseFinancial.to_string(), "chinese-financial");
    }

    #[test]
    fn serde_uses_kebab_case_identifiers() {
        let json = serde_json::to_string(&System::MathDoubleStruck).unwrap();
        assert_eq!(json, "\"math-double-struck\"");
        let back: System = serde_json::from_str(&json).unwrap();
        assert_eq!(back, System::MathDoubleStruck);
    }

    #[test]
    fn kind_classification() {
        assert_eq!(System::Arabic.kind(), SystemKind::Positional);
        assert_eq!(System::Mayan.kind(), SystemKind::Positional);
        assert_eq!(System::Roman.kind(), SystemKind::AdditiveSubtractive);
        assert_eq!(System::Aegean.kind(), SystemKind::TallyAdditive);
        assert_eq!(System::Attic.kind(), SystemKind::Acrophonic);
        assert_eq!(
            System::Ethiopic.kind(),
            SystemKind::HierarchicalMultiplicative
        );
        assert_eq!(System::Cuneiform.kind(), SystemKind::SegmentedSexagesimal);
        assert_eq!(System::Japanese.kind(), SystemKind::MyriadHybrid);
    }
}
