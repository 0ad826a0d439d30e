//! Key/value extraction from associative structures.
//!
//! Output order follows the source map's own iteration order; sort the
//! result if a stable order is needed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Collect the keys of `map`. Pass `&map` to borrow instead of consume.
pub fn keys<M, K, V>(map: M) -> Vec<K>
where
    M: IntoIterator<Item = (K, V)>,
{
    map.into_iter().map(|(k, _)| k).collect()
}

pub fn values<M, K, V>(map: M) -> Vec<V>
where
    M: IntoIterator<Item = (K, V)>,
{
    map.into_iter().map(|(_, v)| v).collect()
}

pub fn entries<M, K, V>(map: M) -> Vec<Pair<K, V>>
where
    M: IntoIterator<Item = (K, V)>,
{
    map.into_iter().map(Pair::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn sample() -> HashMap<&'static str, i32> {
        HashMap::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[test]
    fn test_keys() {
        let mut out = keys(sample());
        out.sort();
        assert_eq!(out, vec!["a", "b", "c"]);
        assert!(keys(HashMap::<String, i32>::new()).is_empty());
    }

    #[test]
    fn test_values_borrowed() {
        let map = sample();
        let mut out: Vec<&i32> = values(&map);
        out.sort();
        assert_eq!(out, vec![&1, &2, &3]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_entries() {
        let mut out = entries(sample());
        out.sort();
        assert_eq!(
            out,
            vec![Pair::new("a", 1), Pair::new("b", 2), Pair::new("c", 3)]
        );
        assert!(entries(HashMap::<u8, u8>::new()).is_empty());
    }

    #[test]
    fn test_entries_follow_map_order() {
        let map = BTreeMap::from([(3, "c"), (1, "a"), (2, "b")]);
        let out = entries(map);
        assert_eq!(out.first().map(|p| p.key), Some(1));
        assert_eq!(out.last().cloned().map(Pair::into_tuple), Some((3, "c")));
    }

    #[test]
    fn test_pair_serializes_as_struct() {
        let json = serde_json::to_string(&Pair::new("k", 7)).unwrap();
        assert_eq!(json, r#"{"key":"k","value":7}"#);
    }
}
