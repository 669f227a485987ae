//! Structural copies of log payloads
//!
//! `Clone` on a [`Value`] keeps `Shared` cells aliased with the caller. An
//! appender may hold on to a record and format it later, so payloads are
//! snapshotted with [`DeepClone`] before they leave the logger.
//!
//! The memo maps each source cell to its copy. Two references to one cell in
//! the source become two references to one cell in the copy, and a cycle
//! through a cell is reproduced in the copy instead of recursing forever.

use super::value::{Key, Shared, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

/// Tracks cells already copied during one deep clone
#[derive(Debug, Default)]
pub struct CloneMemo {
    copies: HashMap<usize, Shared>,
}

impl CloneMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct cells copied so far
    pub fn len(&self) -> usize {
        self.copies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }
}

pub trait DeepClone: Sized {
    /// Copy `self` using an existing memo
    fn deep_clone_with(&self, memo: &mut CloneMemo) -> Self;

    /// Produce a structurally independent copy
    fn deep_clone(&self) -> Self {
        self.deep_clone_with(&mut CloneMemo::new())
    }
}

impl DeepClone for Key {
    fn deep_clone_with(&self, _memo: &mut CloneMemo) -> Self {
        self.clone()
    }
}

impl DeepClone for Shared {
    fn deep_clone_with(&self, memo: &mut CloneMemo) -> Self {
        if let Some(copy) = memo.copies.get(&self.addr()) {
            return copy.clone();
        }

        // Register the copy before descending so back-references resolve to it
        let copy = Shared::new(Value::Null);
        memo.copies.insert(self.addr(), copy.clone());

        let inner = self.read().deep_clone_with(memo);
        copy.set(inner);
        copy
    }
}

impl DeepClone for Value {
    fn deep_clone_with(&self, memo: &mut CloneMemo) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Int(i) => Value::Int(*i),
            Value::Float(f) => Value::Float(*f),
            Value::String(s) => Value::String(s.clone()),
            Value::List(items) => Value::List(items.deep_clone_with(memo)),
            Value::Object(fields) => Value::Object(fields.deep_clone_with(memo)),
            Value::Map(entries) => Value::Map(entries.deep_clone_with(memo)),
            Value::Set(keys) => Value::Set(keys.deep_clone_with(memo)),
            Value::Shared(cell) => Value::Shared(cell.deep_clone_with(memo)),
        }
    }
}

impl<T: DeepClone> DeepClone for Vec<T> {
    fn deep_clone_with(&self, memo: &mut CloneMemo) -> Self {
        self.iter().map(|item| item.deep_clone_with(memo)).collect()
    }
}

impl<T: DeepClone> DeepClone for Option<T> {
    fn deep_clone_with(&self, memo: &mut CloneMemo) -> Self {
        self.as_ref().map(|inner| inner.deep_clone_with(memo))
    }
}

impl<K, V> DeepClone for HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: DeepClone,
{
    fn deep_clone_with(&self, memo: &mut CloneMemo) -> Self {
        self.iter()
            .map(|(k, v)| (k.clone(), v.deep_clone_with(memo)))
            .collect()
    }
}

impl<K, V> DeepClone for BTreeMap<K, V>
where
    K: Clone + Ord,
    V: DeepClone,
{
    fn deep_clone_with(&self, memo: &mut CloneMemo) -> Self {
        self.iter()
            .map(|(k, v)| (k.clone(), v.deep_clone_with(memo)))
            .collect()
    }
}

impl<K: Clone + Ord> DeepClone for BTreeSet<K> {
    fn deep_clone_with(&self, _memo: &mut CloneMemo) -> Self {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_payload(cell: &Shared, items: &Shared) -> Value {
        Value::object([
            ("user", Value::Shared(cell.clone())),
            ("items", Value::Shared(items.clone())),
        ])
    }

    #[test]
    fn test_scalars_copy_as_is() {
        for value in [
            Value::Null,
            Value::Bool(true),
            Value::Int(-3),
            Value::Float(1.5),
            Value::from("text"),
        ] {
            assert_eq!(value.deep_clone(), value);
        }
    }

    #[test]
    fn test_mutating_original_leaves_clone_unchanged() {
        let user = Shared::new(Value::object([("id", 1)]));
        let items = Shared::new(Value::list(["a"]));
        let original = nested_payload(&user, &items);

        let copy = original.deep_clone();

        user.set(Value::object([("id", 2)]));
        if let Value::List(list) = &mut *items.write() {
            list.push(Value::from("b"));
        }

        assert_eq!(
            copy,
            nested_payload(
                &Shared::new(Value::object([("id", 1)])),
                &Shared::new(Value::list(["a"]))
            )
        );
    }

    #[test]
    fn test_mutating_clone_leaves_original_unchanged() {
        let items = Shared::new(Value::list([1, 2]));
        let original = Value::list([Value::Shared(items.clone())]);

        let copy = original.deep_clone();
        let Value::List(copied) = &copy else {
            panic!("expected list");
        };
        let Value::Shared(copied_cell) = &copied[0] else {
            panic!("expected shared cell");
        };
        assert!(!copied_cell.ptr_eq(&items));
        copied_cell.set(Value::Null);

        assert_eq!(*items.read(), Value::list([1, 2]));
    }

    #[test]
    fn test_aliasing_within_payload_is_preserved() {
        let cell = Shared::new("shared");
        let payload = vec![Value::Shared(cell.clone()), Value::Shared(cell.clone())];

        let mut memo = CloneMemo::new();
        let copy = payload.deep_clone_with(&mut memo);
        assert_eq!(memo.len(), 1);

        match (&copy[0], &copy[1]) {
            (Value::Shared(a), Value::Shared(b)) => {
                assert!(a.ptr_eq(b));
                assert!(!a.ptr_eq(&cell));
            }
            _ => panic!("expected shared cells"),
        }
    }

    #[test]
    fn test_cycles_are_reproduced() {
        let cell = Shared::new(Value::List(Vec::new()));
        if let Value::List(items) = &mut *cell.write() {
            items.push(Value::Shared(cell.clone()));
        }

        let copy = cell.deep_clone();
        assert!(!copy.ptr_eq(&cell));
        let guard = copy.read();
        let Value::List(items) = &*guard else {
            panic!("expected list");
        };
        match &items[0] {
            Value::Shared(inner) => assert!(inner.ptr_eq(&copy)),
            other => panic!("expected back-reference, got {:?}", other),
        }
    }

    #[test]
    fn test_cyclic_clone_equals_source() {
        let cell = Shared::new(Value::List(Vec::new()));
        if let Value::List(items) = &mut *cell.write() {
            items.push(Value::from(1));
            items.push(Value::Shared(cell.clone()));
        }

        let copy = Value::Shared(cell.clone()).deep_clone();
        assert_eq!(copy, Value::Shared(cell));
    }

    #[test]
    fn test_ordered_containers_keep_their_kind() {
        let mut entries = BTreeMap::new();
        entries.insert(Key::from("k"), Value::Shared(Shared::new(1)));
        let keys: BTreeSet<Key> = [Key::from(1), Key::from(2)].into_iter().collect();

        let map_copy = Value::Map(entries.clone()).deep_clone();
        let set_copy = Value::Set(keys.clone()).deep_clone();

        let Value::Map(copied_entries) = map_copy else {
            panic!("expected Map");
        };
        assert_eq!(copied_entries.len(), 1);
        match (&copied_entries[&Key::from("k")], &entries[&Key::from("k")]) {
            (Value::Shared(a), Value::Shared(b)) => assert!(!a.ptr_eq(b)),
            _ => panic!("expected shared cells"),
        }
        assert_eq!(set_copy, Value::Set(keys));
    }
}
