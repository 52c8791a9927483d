//! Selection scenarios over a mixed catalog.
//!
//! The catalog registers several snapshotters per platform, with the default
//! snapshotter deliberately not first for every platform.

use unpack_platforms::PlatformSpec;
use unpack_resolver::{Catalog, MatchResult, Selector, SnapshotterKey, UnpackRequest};

const DEFAULT: &str = "overlayfs";

fn key(name: &str) -> SnapshotterKey {
    SnapshotterKey::new(name).unwrap()
}

fn supported_pairings() -> Catalog {
    Catalog::builder()
        .strict(PlatformSpec::linux("amd64"), key("native"))
        .strict(PlatformSpec::linux("amd64"), key(DEFAULT))
        .strict(PlatformSpec::linux("amd64"), key("devmapper"))
        .strict(PlatformSpec::linux("arm64"), key(DEFAULT))
        .strict(PlatformSpec::linux("arm64"), key("native"))
        .strict(PlatformSpec::linux("arm"), key("native"))
        .strict(PlatformSpec::linux("arm"), key(DEFAULT))
        .build()
}

struct Case {
    name: &'static str,
    platform: PlatformSpec,
    snapshotter: Option<&'static str>,
    expected: Option<&'static str>,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "no match for linux/arm64 with devmapper",
            platform: PlatformSpec::linux("arm64"),
            snapshotter: Some("devmapper"),
            expected: None,
        },
        Case {
            name: "no match for linux/386 with the default snapshotter",
            platform: PlatformSpec::linux("386"),
            snapshotter: Some(DEFAULT),
            expected: None,
        },
        Case {
            name: "no match for linux/386 without a preference",
            platform: PlatformSpec::linux("386"),
            snapshotter: None,
            expected: None,
        },
        Case {
            name: "linux/amd64 with native",
            platform: PlatformSpec::linux("amd64"),
            snapshotter: Some("native"),
            expected: Some("native"),
        },
        Case {
            name: "linux/arm64 with native",
            platform: PlatformSpec::linux("arm64"),
            snapshotter: Some("native"),
            expected: Some("native"),
        },
        Case {
            name: "linux/arm with the default snapshotter named explicitly",
            platform: PlatformSpec::linux("arm"),
            snapshotter: Some(DEFAULT),
            expected: Some(DEFAULT),
        },
        Case {
            name: "linux/amd64 platform only picks the default over earlier native",
            platform: PlatformSpec::linux("amd64"),
            snapshotter: None,
            expected: Some(DEFAULT),
        },
        Case {
            name: "linux/arm64 platform only picks the default",
            platform: PlatformSpec::linux("arm64"),
            snapshotter: None,
            expected: Some(DEFAULT),
        },
        Case {
            name: "linux/arm platform only picks the default registered last",
            platform: PlatformSpec::linux("arm"),
            snapshotter: None,
            expected: Some(DEFAULT),
        },
        Case {
            name: "variant is not ignored",
            platform: PlatformSpec::linux("arm").with_variant("v7"),
            snapshotter: None,
            expected: None,
        },
    ]
}

#[test]
fn test_supported_pairing_selection() {
    let catalog = supported_pairings();
    let selector = Selector::new(key(DEFAULT));

    for case in cases() {
        let mut request = UnpackRequest::new(case.platform.clone());
        if let Some(name) = case.snapshotter {
            request = request.with_snapshotter(key(name));
        }

        let result = selector.resolve(&request, &catalog);
        match (case.expected, &result) {
            (None, MatchResult::NoMatch) => {}
            (Some(expected), MatchResult::Matched(resolved)) => {
                assert_eq!(
                    resolved.snapshotter, expected,
                    "{}: unexpected snapshotter",
                    case.name
                );
                assert_eq!(
                    resolved.platform, case.platform,
                    "{}: resolved platform differs from request",
                    case.name
                );
            }
            _ => panic!("{}: expected {:?}, got {:?}", case.name, case.expected, result),
        }
    }
}

#[test]
fn test_free_function_agrees_with_selector() {
    let catalog = supported_pairings();
    let default = key(DEFAULT);
    let selector = Selector::new(default.clone());

    for case in cases() {
        let mut request = UnpackRequest::new(case.platform);
        if let Some(name) = case.snapshotter {
            request = request.with_snapshotter(key(name));
        }
        assert_eq!(
            unpack_resolver::resolve(&request, &catalog, &default),
            selector.resolve(&request, &catalog),
            "{}",
            case.name
        );
    }
}

#[test]
fn test_require_error_names_platform_and_snapshotter() {
    let selector = Selector::new(key(DEFAULT));
    let request = UnpackRequest::new(PlatformSpec::linux("arm64")).with_snapshotter(key("devmapper"));

    let err = selector.require(&request, &supported_pairings()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Platform linux/arm64 with snapshotter devmapper is not supported"
    );
}
