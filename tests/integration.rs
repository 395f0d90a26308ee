//! End-to-end integration tests for the heseb engine.
//!
//! These exercise the full pipeline through the public dispatch API:
//! explicit-system round-trips, auto-detection consistency, error
//! propagation, and the literal fixtures of the historical systems.

use heseb::codec::{Codec, Options};
use heseb::dispatch::{self, Converted, Request, Source, Target};
use heseb::error::{CodecError, DispatchError, HesebError};
use heseb::registry;
use heseb::system::{System, SystemKind};

const OPTS: Options = Options { separator: None };

/// Sample values inside every system's domain (positive, below the Aegean
/// and Roman caps).
const SAMPLES: [i64; 6] = [1, 7, 42, 399, 2026, 3999];

#[test]
fn explicit_round_trip_for_every_system() {
    for &system in System::ALL {
        // The Han family's general decode is a deliberate gap.
        if system.kind() == SystemKind::MyriadHybrid {
            continue;
        }
        for n in SAMPLES {
            let encoded = dispatch::encode(n, system, &OPTS).unwrap();
            let decoded =
                dispatch::decode(&encoded, Source::System(system), &OPTS).unwrap();
            assert_eq!(decoded, n, "system {system} value {n}");
        }
    }
}

#[test]
fn auto_detection_agrees_with_explicit_decoding() {
    for &system in System::ALL {
        // Dozenal deliberately overlaps ASCII digits, and the Han variants
        // share most of their glyph repertoire; their strings resolve to
        // an earlier system in the priority order.
        if system == System::Dozenal || system.kind() == SystemKind::MyriadHybrid {
            continue;
        }
        for n in SAMPLES {
            let encoded = dispatch::encode(n, system, &OPTS).unwrap();
            assert!(
                registry::codec(system).detect(&encoded),
                "system {system} must claim its own encoding {encoded:?}"
            );
            assert_eq!(
                dispatch::detect(&encoded),
                Some(system),
                "auto-detection of {encoded:?}"
            );
            assert_eq!(
                dispatch::decode(&encoded, Source::Auto, &OPTS).unwrap(),
                n,
                "auto decode of {encoded:?}"
            );
        }
    }
}

#[test]
fn roman_domain_boundaries() {
    for value in [0, -1] {
        let err = dispatch::encode(value, System::Roman, &OPTS).unwrap_err();
        assert!(matches!(
            err,
            HesebError::Codec(CodecError::NotPositive { .. })
        ));
    }
    let err = dispatch::encode(4000, System::Roman, &OPTS).unwrap_err();
    assert!(matches!(
        err,
        HesebError::Codec(CodecError::OutOfRange { .. })
    ));
    assert_eq!(
        dispatch::encode(3999, System::Roman, &OPTS).unwrap(),
        "MMMCMXCIX"
    );
}

#[test]
fn sign_handling_in_the_default_system() {
    let plus = dispatch::decode("+123", Source::System(System::Arabic), &OPTS).unwrap();
    let bare = dispatch::decode("123", Source::System(System::Arabic), &OPTS).unwrap();
    assert_eq!(plus, 123);
    assert_eq!(plus, bare);
    assert_eq!(dispatch::encode(-45, System::Arabic, &OPTS).unwrap(), "-45");
    assert_eq!(
        dispatch::decode("-45", Source::Auto, &OPTS).unwrap(),
        -45
    );
}

#[test]
fn separator_round_trip() {
    let opts = Options::with_separator(',');
    let encoded = dispatch::encode(1_234_567, System::Arabic, &opts).unwrap();
    assert_eq!(encoded, "1,234,567");
    assert_eq!(
        dispatch::decode(&encoded, Source::System(System::Arabic), &opts).unwrap(),
        1_234_567
    );
}

// ---------------------------------------------------------------------------
// Literal fixtures
// ---------------------------------------------------------------------------

#[test]
fn aegean_fixtures() {
    assert_eq!(
        dispatch::encode(1000, System::Aegean, &OPTS).unwrap(),
        "\u{10122}"
    );
    assert_eq!(
        dispatch::encode(10_000, System::Aegean, &OPTS).unwrap(),
        "\u{1012B}"
    );
}

#[test]
fn attic_fixtures() {
    let encoded = dispatch::encode(49, System::Attic, &OPTS).unwrap();
    assert_eq!(encoded, "ΔΔΔΔ\u{10143}ΙΙΙΙ");
    assert_eq!(
        dispatch::decode(&encoded, Source::System(System::Attic), &OPTS).unwrap(),
        49
    );
}

#[test]
fn ethiopic_fixtures() {
    assert_eq!(dispatch::encode(10_000, System::Ethiopic, &OPTS).unwrap(), "፼");
    assert_eq!(dispatch::encode(20_000, System::Ethiopic, &OPTS).unwrap(), "፪፼");
    // Adjacent closers compound across the accumulated total.
    assert_eq!(
        dispatch::decode("፼፼", Source::System(System::Ethiopic), &OPTS).unwrap(),
        100_010_000
    );
}

#[test]
fn cuneiform_fixtures() {
    assert_eq!(dispatch::encode(60, System::Cuneiform, &OPTS).unwrap(), "𒁹   ");
    assert_eq!(
        dispatch::encode(23, System::Cuneiform, &OPTS).unwrap(),
        "𒌋𒌋𒁹𒁹𒁹"
    );
}

#[test]
fn han_fixtures() {
    assert_eq!(
        dispatch::encode(12_345, System::Chinese, &OPTS).unwrap(),
        "一万二千三百四十五"
    );
    assert_eq!(dispatch::encode(0, System::Chinese, &OPTS).unwrap(), "零");
    assert_eq!(
        dispatch::encode(-123, System::Chinese, &OPTS).unwrap(),
        "负一百二十三"
    );
    let err = dispatch::decode(
        "一万二千三百四十五",
        Source::System(System::Chinese),
        &OPTS,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        HesebError::Codec(CodecError::NotImplemented { .. })
    ));
}

// ---------------------------------------------------------------------------
// Dispatch composition
// ---------------------------------------------------------------------------

#[test]
fn batch_conversion_fails_fast() {
    let err = dispatch::encode_batch(&[1, 2, 4000, 3], System::Roman, &OPTS).unwrap_err();
    assert!(matches!(
        err,
        HesebError::Codec(CodecError::OutOfRange { value: 4000, .. })
    ));

    let ok = dispatch::encode_batch(&[1, 2, 3], System::Roman, &OPTS).unwrap();
    assert_eq!(ok, vec!["I", "II", "III"]);
}

#[test]
fn cross_system_conversion() {
    // Roman year → Devanagari digits, via auto-detection.
    let out = dispatch::transcode("MMXXVI", Source::Auto, System::Devanagari, &OPTS).unwrap();
    assert_eq!(out, "\u{0968}\u{0966}\u{0968}\u{096C}");

    // Thai digits → Roman, explicit source.
    let thai = dispatch::encode(1999, System::Thai, &OPTS).unwrap();
    let out =
        dispatch::transcode(&thai, Source::System(System::Thai), System::Roman, &OPTS).unwrap();
    assert_eq!(out, "MCMXCIX");
}

#[test]
fn request_entry_point_round_trips() {
    let out = dispatch::convert(
        Request::Text {
            text: "ΔΔΔΔ\u{10143}ΙΙΙΙ",
            from: Source::Auto,
            to: Target::Integer,
        },
        &OPTS,
    )
    .unwrap();
    assert_eq!(out, Converted::Number(49));

    let out = dispatch::convert(
        Request::Number {
            value: 49,
            to: System::Attic,
        },
        &OPTS,
    )
    .unwrap();
    assert_eq!(out, Converted::Text("ΔΔΔΔ\u{10143}ΙΙΙΙ".to_string()));
}

#[test]
fn unresolvable_input_reports_detection_failure() {
    let err = dispatch::decode("not a numeral!", Source::Auto, &OPTS).unwrap_err();
    assert!(matches!(
        err,
        HesebError::Dispatch(DispatchError::DetectionFailed { .. })
    ));
}

#[test]
fn unknown_identifier_reports_unknown_system() {
    let err = "base64".parse::<System>().unwrap_err();
    assert!(matches!(err, DispatchError::UnknownSystem { .. }));
}
