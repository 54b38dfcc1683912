//! Provides the `Inventory` structure: an insertion-ordered map from item
//! name to the number held.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// An `Inventory` is a tally of items, each distinct item name a key of an
/// `IndexMap` with its count as the value.
/// * Counts are never negative and never zero: a name is present only once
///   something has been added under it.
/// * Iteration order is insertion order. The table renderer relies on that
///   order for its tie-break, so we never expose an operation that reorders
///   the underlying map.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    items: ItemMap,
}
type ItemMap = IndexMap<String, u32, FxBuildHasher>;

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Inventory { items: ItemMap::default() }
    }

    /// Folds a sequence of acquired item names into the inventory. Each
    /// occurrence of a name bumps that name's count by one, so merging a
    /// sequence adds its multiset occurrence counts onto whatever was already
    /// held. Merging an empty sequence is a no-op.
    pub fn merge<S: AsRef<str>>(&mut self, acquired: impl IntoIterator<Item = S>) {
        for item in acquired {
            let name = item.as_ref();
            match self.items.get_mut(name) {
                None => {
                    self.items.insert(name.to_owned(), 1);
                }
                Some(count) => *count += 1,
            }
        }
    }

    /// The number held under `name`; zero if we've never seen it.
    #[must_use]
    pub fn count(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// The sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.items.values().map(|&count| u64::from(count)).sum()
    }

    /// The number of distinct item names held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing is held at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(name, count)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, &count)| (name.as_str(), count))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Inventory {
    /// Builds an inventory from literal `(name, count)` seed pairs, keeping
    /// the pairs' order as the insertion order.
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(seed: I) -> Self {
        let mut inventory = Inventory::new();
        for (name, count) in seed {
            inventory.items.insert(name.into(), count);
        }
        inventory
    }
}
