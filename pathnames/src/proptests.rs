//! Property-based tests for the path engine.

use crate::config::GrammarConfig;
use crate::{DelimitedSyntax, PathEngine, PathNames, PathSyntax};
use proptest::prelude::*;

// Plain names, never markers.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-][a-zA-Z0-9_. -]{0,11}".prop_filter("not a marker", |s| s != "." && s != "..")
}

// Names mixed with self and parent markers.
fn name_or_marker_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => Just(".".to_string()),
        3 => Just("..".to_string()),
        5 => name_strategy(),
    ]
}

fn root_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(Just("/".to_string()))
}

fn normalized_path_strategy() -> impl Strategy<Value = PathNames> {
    (root_strategy(), prop::collection::vec(name_strategy(), 0..8))
        .prop_map(|(root, segments)| PathNames::new(root, segments))
}

fn any_path_strategy() -> impl Strategy<Value = PathNames> {
    (root_strategy(), prop::collection::vec(name_or_marker_strategy(), 0..12))
        .prop_map(|(root, segments)| PathNames::new(root, segments))
}

fn relative_path_strategy() -> impl Strategy<Value = PathNames> {
    prop::collection::vec(name_or_marker_strategy(), 0..8).prop_map(PathNames::relative)
}

fn drive_engine() -> PathEngine<DelimitedSyntax> {
    let config = GrammarConfig {
        root_marker: Some("C:".to_string()),
        root_separator: "\\".to_string(),
        separator: "\\".to_string(),
        ..Default::default()
    };
    PathEngine::new(DelimitedSyntax::new(config).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // parse(render(p)) == p for normalized paths of valid names
    #[test]
    fn render_parse_round_trip(path in normalized_path_strategy()) {
        let engine = PathEngine::unix();
        let rendered = engine.render(&path);
        prop_assert_eq!(engine.parse(&rendered).unwrap(), path);
    }

    // Same round trip through a grammar with a distinct root separator
    #[test]
    fn render_parse_round_trip_drive(segments in prop::collection::vec(name_strategy(), 0..8), rooted in any::<bool>()) {
        let engine = drive_engine();
        let path = PathNames::new(rooted.then(|| "C:".to_string()), segments);
        let rendered = engine.render(&path);
        prop_assert_eq!(engine.parse(&rendered).unwrap(), path);
    }

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalize_idempotent(path in any_path_strategy()) {
        let engine = PathEngine::unix();
        let once = engine.normalize(&path);
        prop_assert_eq!(engine.normalize(&once), once);
    }

    // Normalized paths hold no markers and keep their root
    #[test]
    fn normalize_removes_markers(path in any_path_strategy()) {
        let engine = PathEngine::unix();
        let normalized = engine.normalize(&path);
        prop_assert_eq!(normalized.root(), path.root());
        for name in normalized.segments() {
            prop_assert!(!engine.syntax().is_self(name));
            prop_assert!(!engine.syntax().is_parent(name));
        }
    }

    // Absolute paths replace any base
    #[test]
    fn resolve_absolute_override(base in any_path_strategy(), segments in prop::collection::vec(name_or_marker_strategy(), 0..6)) {
        let engine = PathEngine::unix();
        let other = PathNames::new(Some("/".to_string()), segments);
        prop_assert_eq!(engine.resolve(&base, &other).unwrap(), other);
    }

    // An empty relative path leaves the base unchanged
    #[test]
    fn resolve_empty_identity(base in any_path_strategy()) {
        let engine = PathEngine::unix();
        prop_assert_eq!(engine.resolve(&base, &PathNames::default()).unwrap(), base);
    }

    // Relative resolution concatenates under the base root
    #[test]
    fn resolve_concatenates(base in any_path_strategy(), other in relative_path_strategy()) {
        let engine = PathEngine::unix();
        let resolved = engine.resolve(&base, &other).unwrap();
        prop_assert_eq!(resolved.root(), base.root());
        prop_assert_eq!(resolved.name_count(), base.name_count() + other.name_count());
        prop_assert!(resolved.segments().starts_with(base.segments()));
        prop_assert!(resolved.segments().ends_with(other.segments()));
    }

    // Sibling resolution is resolution against the parent
    #[test]
    fn resolve_sibling_matches_parent(base in any_path_strategy(), other in relative_path_strategy()) {
        let engine = PathEngine::unix();
        let sibling = engine.resolve_sibling(&base, &other).unwrap();
        match base.parent() {
            Some(parent) => prop_assert_eq!(sibling, engine.resolve(&parent, &other).unwrap()),
            None => prop_assert_eq!(sibling, other),
        }
    }

    // relativize is undone by resolve + normalize
    #[test]
    fn relativize_inverts_resolve(
        root in root_strategy(),
        base in prop::collection::vec(name_strategy(), 0..6),
        other in prop::collection::vec(name_strategy(), 0..6),
    ) {
        let engine = PathEngine::unix();
        let base = PathNames::new(root.clone(), base);
        let other = PathNames::new(root, other);
        let relative = engine.relativize(&base, &other).unwrap();
        prop_assert!(relative.root().is_none());
        let back = engine.normalize(&engine.resolve(&base, &relative).unwrap());
        prop_assert_eq!(back, other);
    }
}
