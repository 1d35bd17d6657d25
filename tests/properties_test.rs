// tests/properties_test.rs
use csemver_build::domain::{
    FileVersionQuad, OrderedVersion, PreRelease, PreReleaseName, VersionComponents,
    MAX_ORDERED_VERSION,
};
use csemver_build::{compute, VersionInput};
use proptest::prelude::*;

fn arb_pre_release() -> impl Strategy<Value = Option<PreRelease>> {
    prop::option::of(
        (0u8..8, 0u8..100, 0u8..100).prop_map(|(index, number, fix)| {
            PreRelease::new(PreReleaseName::from_index(index).unwrap(), number, fix)
        }),
    )
}

fn arb_components() -> impl Strategy<Value = VersionComponents> {
    (0u32..100_000, 0u32..50_000, 0u32..10_000, arb_pre_release()).prop_map(
        |(major, minor, patch, pre_release)| VersionComponents {
            major,
            minor,
            patch,
            pre_release,
        },
    )
}

/// Sort key matching the CSemVer precedence rules.
fn precedence(v: &VersionComponents) -> (u32, u32, u32, bool, u8, u8, u8) {
    match v.pre_release {
        Some(pre) => (v.major, v.minor, v.patch, false, pre.name.index(), pre.number, pre.fix),
        None => (v.major, v.minor, v.patch, true, 0, 0, 0),
    }
}

proptest! {
    #[test]
    fn prop_encode_is_strictly_monotonic(a in arb_components(), b in arb_components()) {
        let (ea, eb) = (OrderedVersion::encode(&a), OrderedVersion::encode(&b));
        prop_assert_eq!(precedence(&a).cmp(&precedence(&b)), ea.cmp(&eb));
    }

    #[test]
    fn prop_encode_stays_in_range(v in arb_components()) {
        let ordered = OrderedVersion::encode(&v);
        prop_assert!(ordered.value() >= 1);
        prop_assert!(ordered.value() <= MAX_ORDERED_VERSION);
    }

    #[test]
    fn prop_decode_inverts_encode(v in arb_components()) {
        prop_assert_eq!(OrderedVersion::encode(&v).decode(), Some(v));
    }

    #[test]
    fn prop_quad_round_trip(value in 0u64..=MAX_ORDERED_VERSION, ci in any::<bool>()) {
        let ordered = OrderedVersion::from_value(value).unwrap();
        let quad = FileVersionQuad::encode(ordered, ci);
        prop_assert_eq!(quad.decode(), Some((ordered, ci)));
        prop_assert_eq!(quad.is_ci_build(), ci);
    }

    #[test]
    fn prop_ci_successor_lands_on_next_patch(v in arb_components()) {
        let base = OrderedVersion::encode(&v);
        if let Ok(next) = base.ci_successor() {
            let expected = if v.patch < 9_999 {
                (v.major, v.minor, v.patch + 1)
            } else if v.minor < 49_999 {
                (v.major, v.minor + 1, 0)
            } else {
                (v.major + 1, 0, 0)
            };
            prop_assert_eq!(next.release_triple(), expected);
            prop_assert!(next > base);
        } else {
            prop_assert!(base.value() + 80_001 > MAX_ORDERED_VERSION);
        }
    }

    #[test]
    fn prop_computed_parity_matches_ci(
        major in 0i32..1_000,
        minor in 0i32..1_000,
        patch in 0i32..9_999,
        ci in any::<bool>(),
    ) {
        let mut input = VersionInput::new(major, minor, patch);
        if ci {
            input = input.with_ci_build("IDX", "name");
        }
        let info = compute(&input).unwrap();
        prop_assert_eq!(info.file_version.revision & 1 == 1, ci);
        prop_assert_eq!(info.is_ci_build, ci);
    }

    #[test]
    fn prop_release_renders_bare_triple(
        major in 0i32..100_000,
        minor in 0i32..50_000,
        patch in 0i32..10_000,
    ) {
        let info = compute(&VersionInput::new(major, minor, patch)).unwrap();
        prop_assert_eq!(info.version, format!("{}.{}.{}", major, minor, patch));
    }

    #[test]
    fn prop_rendered_versions_are_semver(v in arb_components(), ci in any::<bool>()) {
        let mut input = VersionInput::new(v.major as i32, v.minor as i32, v.patch as i32);
        if let Some(pre) = v.pre_release {
            input = input.with_pre_release(pre.name.as_str(), i32::from(pre.number), i32::from(pre.fix));
        }
        if ci {
            input = input.with_ci_build("ABC123", "build");
        }
        if let Ok(info) = compute(&input) {
            prop_assert!(info.to_semver().is_ok(), "not semver: {}", info.version);
        }
    }
}
