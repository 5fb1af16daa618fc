use std::collections::HashMap;
use std::hash::Hash;

/// Deduplicating store of GL objects keyed by their description.
///
/// Ordering rules:
/// - iteration follows first-insertion order
/// - names are allocated from 1 upward, one per distinct key
#[derive(Debug, Clone)]
pub struct ObjectCache<K> {
    entries: Vec<(K, u32)>,
    index: HashMap<K, usize>,
    next_name: u32,
}

impl<K> Default for ObjectCache<K> {
    fn default() -> Self {
        Self { entries: Vec::new(), index: HashMap::new(), next_name: 1 }
    }
}

impl<K: Clone + Eq + Hash> ObjectCache<K> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the name cached for `key`, creating one on first use.
    ///
    /// The flag is `true` when a new object was created.
    pub fn get_or_insert(&mut self, key: K) -> (u32, bool) {
        if let Some(&slot) = self.index.get(&key) {
            return (self.entries[slot].1, false);
        }

        let name = self.next_name;
        self.next_name += 1;
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, name));
        (name, true)
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<u32> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> {
        self.entries.iter().map(|(key, name)| (key, *name))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_keys_share_a_name() {
        let mut cache = ObjectCache::new();
        assert_eq!(cache.get_or_insert("a"), (1, true));
        assert_eq!(cache.get_or_insert("b"), (2, true));
        assert_eq!(cache.get_or_insert("a"), (1, false));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut cache = ObjectCache::new();
        for key in ["z", "a", "m", "a"] {
            cache.get_or_insert(key);
        }
        let keys: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(cache.get(&"m"), Some(3));
        assert_eq!(cache.get(&"q"), None);
    }
}
