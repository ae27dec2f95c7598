use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Ordered occurrence counter. Iterates in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<K>
where
    K: std::cmp::Ord,
{
    pub map: BTreeMap<K, u64>,
}

impl<K> Default for Counter<K>
where
    K: std::cmp::Ord,
{
    fn default() -> Self {
        Counter {
            map: BTreeMap::new(),
        }
    }
}

impl<K> Counter<K>
where
    K: std::cmp::Ord,
{
    pub fn new() -> Counter<K> {
        Default::default()
    }

    pub fn record(&mut self, key: K) {
        if let Some(val) = self.map.get_mut(&key) {
            *val += 1;
        } else {
            self.map.insert(key, 1);
        }
    }

    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: std::cmp::Ord + ?Sized,
    {
        self.map.get(key).copied().unwrap_or(0)
    }

    /// Sum of all recorded occurrences.
    pub fn total(&self) -> u64 {
        self.map.values().sum()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.map.iter().map(|(k, v)| (k, *v))
    }
}
