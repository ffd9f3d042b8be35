pub mod fixtures;

use backed_enum::prelude::*;
use fixtures::sorted;
use proptest::collection::hash_map;
use proptest::prelude::*;
use std::collections::HashMap;

const NAME: &str = "[A-Z_][A-Z0-9_]{0,8}";

fn integer_enum() -> impl Strategy<Value = HashMap<String, i16>> {
    hash_map(NAME, -8i16..8, 0..12)
}

fn text_enum() -> impl Strategy<Value = HashMap<String, String>> {
    hash_map(NAME, "[a-c]{0,2}", 0..12)
}

proptest! {
    #[test]
    fn validate_iff_parse_succeeds(entries in integer_enum(), probe in -10i16..10) {
        let enumeration = BackedEnum::new(entries);

        prop_assert_eq!(enumeration.validate(&probe), enumeration.parse(&probe).is_ok());
    }

    #[test]
    fn absent_values_are_rejected_with_candidate(entries in text_enum(), probe in "[a-d]{0,3}") {
        let members: Vec<String> = entries.values().cloned().collect();
        let enumeration = BackedEnum::new(entries);

        if members.contains(&probe) {
            prop_assert!(enumeration.validate(probe.as_str()));
            prop_assert_eq!(enumeration.parse(probe.as_str()), Ok(&probe));
        } else {
            prop_assert!(!enumeration.validate(probe.as_str()));
            let err = enumeration.parse(probe.as_str()).unwrap_err();
            prop_assert_eq!(err.invalid_value(), Some(&RawValue::Text(probe.clone())));
        }
    }

    #[test]
    fn structure_copies_are_isolated(entries in integer_enum(), extra in 100i16..200) {
        let enumeration = BackedEnum::new(entries.clone());
        let before = sorted(enumeration.values());

        let mut copy = enumeration.structure();
        copy.clear();
        copy.insert("EXTRA".to_owned(), extra);

        prop_assert_eq!(sorted(enumeration.values()), before);
        prop_assert!(!enumeration.validate(&extra));
        prop_assert!(enumeration.parse(&extra).is_err());
        prop_assert_eq!(enumeration.structure().len(), entries.len());
    }

    #[test]
    fn values_keep_multiplicity(entries in integer_enum()) {
        let enumeration = BackedEnum::new(entries.clone());

        prop_assert_eq!(enumeration.values().len(), entries.len());
        for value in entries.values() {
            let expected = entries.values().filter(|v| *v == value).count();
            let listed = enumeration.values().iter().filter(|v| *v == value).count();
            prop_assert_eq!(listed, expected);
            prop_assert!(enumeration.validate(value));
            prop_assert_eq!(enumeration.names_of(value).len(), expected);
        }
    }

    #[test]
    fn empty_enumeration_rejects_everything(probe in any::<i64>()) {
        let empty = BackedEnum::<i64>::default();

        prop_assert!(empty.values().is_empty());
        prop_assert!(!empty.validate(&probe));
        prop_assert!(empty.parse(&probe).unwrap_err().is_invalid_value());
    }
}
