//! Property-based tests for grammar configuration.

use super::loader::ConfigLoader;
use super::schema::GrammarConfig;
use super::validator::ConfigValidator;
use crate::{DelimitedSyntax, PathEngine, PathNames, PathSyntax};
use proptest::prelude::*;

fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        Just("\\".to_string()),
        Just("::".to_string()),
        Just("|".to_string()),
    ]
}

// Configurations that always pass validation
fn config_strategy() -> impl Strategy<Value = GrammarConfig> {
    (
        separator_strategy(),
        prop::option::of("[A-Z]:|crate|~"),
        prop::bool::ANY,
    )
        .prop_map(|(separator, root_marker, separated_root)| GrammarConfig {
            root_separator: if separated_root {
                separator.clone()
            } else {
                String::new()
            },
            root_marker,
            separator,
            forbidden: vec!['*', '?'],
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Generated configurations validate
    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // A configuration survives a YAML round trip
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded = ConfigLoader::from_yaml_str(&yaml).unwrap();
        prop_assert_eq!(loaded, config);
    }

    // A configuration survives a JSON round trip
    #[test]
    fn json_round_trip(config in config_strategy()) {
        let json = serde_json::to_string(&config).unwrap();
        let loaded = ConfigLoader::from_json_str(&json).unwrap();
        prop_assert_eq!(loaded, config);
    }

    // Every configured grammar parses what it renders
    #[test]
    fn configured_grammar_round_trip(
        config in config_strategy(),
        segments in prop::collection::vec("[abcr:|\\/_0-9]{1,6}", 0..6),
        rooted in prop::bool::ANY,
    ) {
        let root = if rooted { config.root_marker.clone() } else { None };
        let engine = PathEngine::new(DelimitedSyntax::new(config).unwrap());
        let segments: Vec<String> = segments
            .into_iter()
            .filter(|name| engine.syntax().is_valid_name(name))
            .collect();
        let path = PathNames::new(root, segments);
        let rendered = engine.render(&path);
        prop_assert_eq!(engine.parse(&rendered).unwrap(), path);
    }
}
