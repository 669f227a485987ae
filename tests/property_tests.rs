//! Property-based tests for ranked_logger using proptest

use proptest::prelude::*;
use ranked_logger::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Critical),
        Just(Level::Error),
        Just(Level::Warning),
        Just(Level::Notice),
        Just(Level::Info),
        Just(Level::Debug),
    ]
}

fn any_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Null),
        any::<bool>().prop_map(Key::Bool),
        any::<i64>().prop_map(Key::Int),
        "[a-z]{0,6}".prop_map(Key::String),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            prop::collection::hash_map("[a-z]{1,5}", inner.clone(), 0..6)
                .prop_map(|m: HashMap<String, Value>| Value::Object(m)),
            prop::collection::btree_map(any_key(), inner.clone(), 0..6)
                .prop_map(|m: BTreeMap<Key, Value>| Value::Map(m)),
            prop::collection::btree_set(any_key(), 0..6)
                .prop_map(|s: BTreeSet<Key>| Value::Set(s)),
            inner.prop_map(|v| Value::Shared(Shared::new(v))),
        ]
    })
}

fn memory_registry() -> (LoggerRegistry, MemoryAppender) {
    let memory = MemoryAppender::new();
    let registry = LoggerRegistry::builder().appender(memory.clone()).build();
    (registry, memory)
}

proptest! {
    /// A named level passes exactly when its rank lies inside the window
    #[test]
    fn test_admission_matches_window(
        level in any_level(),
        min in prop_oneof![Just(LEVEL_ALL), Just(LEVEL_OFF), 0i32..130_000],
        max in prop_oneof![Just(LEVEL_ALL), Just(LEVEL_OFF), 0i32..130_000],
    ) {
        let (registry, memory) = memory_registry();
        let logger = registry.get_logger("prop");
        logger.set_min_level(min).set_max_level(max);

        logger.log(level.as_str(), "payload");

        let expected = min <= level.rank() && level.rank() <= max;
        prop_assert_eq!(memory.len() == 1, expected);
        prop_assert_eq!(logger.admits(level.rank()), expected);
    }

    /// Level names resolve to their fixed ranks without any diagnostic
    #[test]
    fn test_known_names_resolve(level in any_level()) {
        let (registry, memory) = memory_registry();
        prop_assert_eq!(registry.level_to_int(level.as_str()), level.rank());
        prop_assert!(memory.fallbacks().is_empty());
    }

    /// Anything outside the six names resolves to OFF with one diagnostic
    #[test]
    fn test_unknown_names_resolve_to_off(name in "[A-Za-z_]{0,10}") {
        prop_assume!(name.parse::<Level>().is_err());
        let (registry, memory) = memory_registry();
        prop_assert_eq!(registry.level_to_int(&name), LEVEL_OFF);
        prop_assert_eq!(memory.fallbacks().len(), 1);
    }

    /// A deep clone compares equal to its source
    #[test]
    fn test_deep_clone_equals_source(value in any_value()) {
        prop_assert_eq!(value.deep_clone(), value);
    }

    /// Rendering a deep clone gives the same text as the source
    #[test]
    fn test_deep_clone_renders_identically(value in any_value()) {
        prop_assert_eq!(value.deep_clone().to_string(), value.to_string());
    }

    /// Message items are followed by exactly two context elements
    #[test]
    fn test_context_adds_two_elements(items in prop::collection::vec(any_value(), 1..5)) {
        let (registry, memory) = memory_registry();
        let logger = registry.get_logger("prop");

        logger.critical_with_context(Value::List(items.clone()), Value::Int(1));

        let records = memory.records();
        prop_assert_eq!(records[0].payload.len(), items.len() + 2);
        prop_assert_eq!(records[0].message(), &items[..]);
        prop_assert_eq!(records[0].context(), Some(&Value::Int(1)));
    }
}
