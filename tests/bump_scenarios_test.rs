// tests/bump_scenarios_test.rs
use semver_bump::analyzer::{analyze_log, resolve_from_flags, scan_directives};
use semver_bump::bumper::apply;
use semver_bump::cli::run_explicit;
use semver_bump::domain::{BumpFlags, Version, VersionBump};
use semver_bump::SemverBumpError;

fn flags(major: bool, minor: bool, patch: bool) -> BumpFlags {
    BumpFlags {
        major,
        minor,
        patch,
    }
}

#[test]
fn test_render_parse_round_trip_for_triples() {
    for major in [0u64, 1, 9, 10, 123] {
        for minor in [0u64, 2, 40] {
            for patch in [0u64, 3, 999] {
                let rendered = Version::new(major, minor, patch).to_string();
                let reparsed = Version::parse(&rendered).expect("rendered version parses");
                assert_eq!(reparsed.to_string(), rendered);
            }
        }
    }
}

#[test]
fn test_each_bump_on_1_2_3() {
    let cases = [
        (VersionBump::Patch, "1.2.4"),
        (VersionBump::Minor, "1.3.0"),
        (VersionBump::Major, "2.0.0"),
    ];

    for (bump, expected) in cases {
        let mut v = Version::parse("1.2.3").unwrap();
        apply(&mut v, bump, None).unwrap();
        assert_eq!(v.to_string(), expected, "bump: {}", bump);
    }
}

#[test]
fn test_conflicting_flags_only_for_multiple_true() {
    let conflicting = [
        flags(true, true, false),
        flags(true, false, true),
        flags(false, true, true),
        flags(true, true, true),
    ];
    for f in conflicting {
        assert!(matches!(
            resolve_from_flags(f),
            Err(SemverBumpError::ConflictingFlags)
        ));
    }

    let accepted = [
        flags(false, false, false),
        flags(true, false, false),
        flags(false, true, false),
        flags(false, false, true),
    ];
    for f in accepted {
        assert!(resolve_from_flags(f).is_ok());
    }
}

#[test]
fn test_text_resolution() {
    assert_eq!(analyze_log("+patch +minor").bump(), VersionBump::Minor);
    assert_eq!(analyze_log("+major +minor +patch").bump(), VersionBump::Major);
    assert_eq!(analyze_log("no directives here").bump(), VersionBump::Patch);
}

#[test]
fn test_order_of_directives_does_not_matter() {
    let forward = "+patch\n+minor\n+major";
    let backward = "+major\n+minor\n+patch";
    assert_ne!(scan_directives(forward), scan_directives(backward));
    assert_eq!(analyze_log(forward).bump(), analyze_log(backward).bump());
}

#[test]
fn test_metadata_fully_replaced() {
    let mut v = Version::parse("1.2.3+6.4").unwrap();
    apply(&mut v, VersionBump::Patch, Some("7.3")).unwrap();
    assert_eq!(v.to_string(), "1.2.4+7.3");
}

#[test]
fn test_invalid_metadata_references_full_string() {
    let mut v = Version::parse("1.2.3").unwrap();
    let err = apply(&mut v, VersionBump::Patch, Some("bad!data")).unwrap_err();
    match &err {
        SemverBumpError::InvalidMetadata(metadata) => assert_eq!(metadata, "bad!data"),
        other => panic!("expected InvalidMetadata, got {:?}", other),
    }
    assert!(err.to_string().contains("bad!data"));
}

#[test]
fn test_explicit_mode_defaults_to_patch() {
    let next = run_explicit("0.1.2", BumpFlags::default(), None).unwrap();
    assert_eq!(next.to_string(), "0.1.3");
}

#[test]
fn test_explicit_mode_with_flags_and_meta() {
    assert_eq!(
        run_explicit("0.1.2", flags(false, true, false), None)
            .unwrap()
            .to_string(),
        "0.2.0"
    );
    assert_eq!(
        run_explicit("0.1.2+metadata", BumpFlags::default(), Some("newMetaData"))
            .unwrap()
            .to_string(),
        "0.1.3+newMetaData"
    );
}

#[test]
fn test_explicit_mode_errors() {
    assert!(matches!(
        run_explicit("not-a-version", BumpFlags::default(), None),
        Err(SemverBumpError::InvalidFormat { .. })
    ));
    assert!(matches!(
        run_explicit("1.2.3", flags(true, true, false), None),
        Err(SemverBumpError::ConflictingFlags)
    ));
    assert!(matches!(
        run_explicit("1.2.3", BumpFlags::default(), Some("a..b")),
        Err(SemverBumpError::InvalidMetadata(_))
    ));
}
