//! System catalog: human-readable metadata for every registered system.
//!
//! A thin descriptive table over the codec engine — name, digit-block
//! notes, and a sample encoding per system, serializable for the CLI's
//! JSON export. No conversion logic lives here.

use std::sync::OnceLock;

use serde::Serialize;

use crate::codec::{Codec, Options};
use crate::registry;
use crate::system::{System, SystemKind};

/// Descriptive metadata for one numeral system.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    /// System identifier.
    pub system: System,
    /// Structural classification.
    pub kind: SystemKind,
    /// Human-readable name.
    pub name: &'static str,
    /// Short note on the glyph repertoire.
    pub notes: &'static str,
    /// Sample encoding, produced by the system's own codec.
    pub example: String,
}

/// (system, name, notes, sample value) rows; the example string is encoded
/// at catalog build time so it can never drift from the codec.
const ROWS: &[(System, &str, &str, i64)] = &[
    (System::Arabic, "Arabic", "ASCII digits 0-9", 2026),
    (System::ArabicIndic, "Arabic-Indic", "digits U+0660-U+0669", 2026),
    (
        System::ExtendedArabicIndic,
        "Extended Arabic-Indic",
        "Persian/Urdu digits U+06F0-U+06F9",
        2026,
    ),
    (System::Nko, "N'Ko", "digits U+07C0-U+07C9", 2026),
    (System::Devanagari, "Devanagari", "digits U+0966-U+096F", 2026),
    (System::Bengali, "Bengali", "digits U+09E6-U+09EF", 2026),
    (System::Gurmukhi, "Gurmukhi", "digits U+0A66-U+0A6F", 2026),
    (System::Gujarati, "Gujarati", "digits U+0AE6-U+0AEF", 2026),
    (System::Oriya, "Oriya", "digits U+0B66-U+0B6F", 2026),
    (System::Tamil, "Tamil", "digits U+0BE6-U+0BEF", 2026),
    (System::Telugu, "Telugu", "digits U+0C66-U+0C6F", 2026),
    (System::Kannada, "Kannada", "digits U+0CE6-U+0CEF", 2026),
    (System::Malayalam, "Malayalam", "digits U+0D66-U+0D6F", 2026),
    (
        System::Sinhala,
        "Sinhala Lith",
        "astrological digits U+0DE6-U+0DEF",
        2026,
    ),
    (System::Thai, "Thai", "digits U+0E50-U+0E59", 2026),
    (System::Lao, "Lao", "digits U+0ED0-U+0ED9", 2026),
    (System::Tibetan, "Tibetan", "digits U+0F20-U+0F29", 2026),
    (System::Myanmar, "Myanmar", "digits U+1040-U+1049", 2026),
    (System::Khmer, "Khmer", "digits U+17E0-U+17E9", 2026),
    (System::Mongolian, "Mongolian", "digits U+1810-U+1819", 2026),
    (System::Limbu, "Limbu", "digits U+1946-U+194F", 2026),
    (System::NewTaiLue, "New Tai Lue", "digits U+19D0-U+19D9", 2026),
    (System::Balinese, "Balinese", "digits U+1B50-U+1B59", 2026),
    (System::Sundanese, "Sundanese", "digits U+1BB0-U+1BB9", 2026),
    (System::Lepcha, "Lepcha", "digits U+1C40-U+1C49", 2026),
    (System::OlChiki, "Ol Chiki", "digits U+1C50-U+1C59", 2026),
    (System::Vai, "Vai", "digits U+A620-U+A629", 2026),
    (System::Saurashtra, "Saurashtra", "digits U+A8D0-U+A8D9", 2026),
    (System::KayahLi, "Kayah Li", "digits U+A900-U+A909", 2026),
    (System::Javanese, "Javanese", "digits U+A9D0-U+A9D9", 2026),
    (System::Cham, "Cham", "digits U+AA50-U+AA59", 2026),
    (System::MeeteiMayek, "Meetei Mayek", "digits U+ABF0-U+ABF9", 2026),
    (
        System::Fullwidth,
        "Fullwidth",
        "CJK-width ASCII digits U+FF10-U+FF19",
        2026,
    ),
    (System::Osmanya, "Osmanya", "digits U+104A0-U+104A9", 2026),
    (System::Brahmi, "Brahmi", "digits U+11066-U+1106F", 2026),
    (System::SoraSompeng, "Sora Sompeng", "digits U+110F0-U+110F9", 2026),
    (System::Chakma, "Chakma", "digits U+11136-U+1113F", 2026),
    (System::Sharada, "Sharada", "digits U+111D0-U+111D9", 2026),
    (System::Khudawadi, "Khudawadi", "digits U+112F0-U+112F9", 2026),
    (System::Tirhuta, "Tirhuta", "digits U+114D0-U+114D9", 2026),
    (System::Modi, "Modi", "digits U+11650-U+11659", 2026),
    (System::Takri, "Takri", "digits U+116C0-U+116C9", 2026),
    (System::Ahom, "Ahom", "digits U+11730-U+11739", 2026),
    (System::WarangCiti, "Warang Citi", "digits U+118E0-U+118E9", 2026),
    (System::Mro, "Mro", "digits U+16A60-U+16A69", 2026),
    (System::PahawhHmong, "Pahawh Hmong", "digits U+16B50-U+16B59", 2026),
    (System::Medefaidrin, "Medefaidrin", "digits U+16E80-U+16E89", 2026),
    (System::Adlam, "Adlam", "digits U+1E950-U+1E959", 2026),
    (
        System::MathBold,
        "Mathematical Bold",
        "styled digits U+1D7CE-U+1D7D7",
        2026,
    ),
    (
        System::MathDoubleStruck,
        "Mathematical Double-Struck",
        "styled digits U+1D7D8-U+1D7E1",
        2026,
    ),
    (
        System::MathSansSerif,
        "Mathematical Sans-Serif",
        "styled digits U+1D7E2-U+1D7EB",
        2026,
    ),
    (
        System::MathSansSerifBold,
        "Mathematical Sans-Serif Bold",
        "styled digits U+1D7EC-U+1D7F5",
        2026,
    ),
    (
        System::MathMonospace,
        "Mathematical Monospace",
        "styled digits U+1D7F6-U+1D7FF",
        2026,
    ),
    (
        System::Segmented,
        "Segmented",
        "seven-segment digits U+1FBF0-U+1FBF9",
        2026,
    ),
    (
        System::Mayan,
        "Mayan",
        "base-20 digits U+1D2E0-U+1D2F3",
        2026,
    ),
    (
        System::Kaktovik,
        "Kaktovik",
        "Iñupiaq base-20 digits U+1D2C0-U+1D2D3",
        2026,
    ),
    (
        System::Dozenal,
        "Dozenal",
        "base 12: ASCII digits plus turned two/three U+218A/U+218B",
        2026,
    ),
    (
        System::Roman,
        "Roman",
        "additive-subtractive I V X L C D M, range 1-3999",
        2026,
    ),
    (
        System::Aegean,
        "Aegean",
        "tally glyphs U+10107-U+10133, range 1-99999",
        2026,
    ),
    (
        System::Attic,
        "Attic",
        "acrophonic Greek numerals, positive integers",
        2026,
    ),
    (
        System::Ethiopic,
        "Ethiopic",
        "Ge'ez numerals U+1369-U+137C with multiplier closers",
        2026,
    ),
    (
        System::Cuneiform,
        "Babylonian Cuneiform",
        "base-60 positions of tens/units wedges",
        2026,
    ),
    (
        System::Chinese,
        "Chinese",
        "simplified myriad-grouped numerals",
        2026,
    ),
    (
        System::ChineseFinancial,
        "Chinese Financial",
        "banker's anti-fraud numerals",
        2026,
    ),
    (
        System::Japanese,
        "Japanese",
        "kanji myriad-grouped numerals",
        2026,
    ),
];

static CATALOG: OnceLock<Vec<SystemInfo>> = OnceLock::new();

fn build_catalog() -> Vec<SystemInfo> {
    let opts = Options::default();
    ROWS.iter()
        .map(|&(system, name, notes, sample)| SystemInfo {
            system,
            kind: system.kind(),
            name,
            notes,
            example: registry::codec(system)
                .encode(sample, &opts)
                .unwrap_or_default(),
        })
        .collect()
}

/// The full catalog, one entry per registered system.
pub fn all() -> &'static [SystemInfo] {
    CATALOG.get_or_init(build_catalog)
}

/// Catalog entry for `system`.
pub fn lookup(system: System) -> &'static SystemInfo {
    all()
        .iter()
        .find(|info| info.system == system)
        .expect("catalog covers every registered system")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_system() {
        assert_eq!(all().len(), System::ALL.len());
        for &system in System::ALL {
            assert_eq!(lookup(system).system, system);
        }
    }

    #[test]
    fn examples_are_produced_by_the_codecs() {
        for info in all() {
            assert!(!info.example.is_empty(), "system {}", info.system);
            assert!(
                registry::codec(info.system).detect(&info.example),
                "system {} example {:?}",
                info.system,
                info.example
            );
        }
    }

    #[test]
    fn examples_decode_back_to_their_sample() {
        let opts = Options::default();
        for (info, &(_, _, _, sample)) in all().iter().zip(ROWS) {
            // The Han family's general decode is an acknowledged gap.
            if info.system.kind() == crate::system::SystemKind::MyriadHybrid {
                continue;
            }
            assert_eq!(
                registry::codec(info.system)
                    .decode(&info.example, &opts)
                    .unwrap(),
                sample,
                "system {}",
                info.system
            );
        }
    }

    #[test]
    fn catalog_serializes_to_json() {
        let json = serde_json::to_string(all()).unwrap();
        assert!(json.contains("\"roman\""));
        assert!(json.contains("additive-subtractive"));
    }
}
