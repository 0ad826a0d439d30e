//! Sequence primitives over a single, statically known element type.
//!
//! Every function builds a new sequence; inputs are taken by value (or by
//! `IntoIterator`, so `&vec` works too) and never mutated.

use std::collections::HashMap;
use std::hash::Hash;

/// Apply `f` to every element, preserving length and order.
pub fn map<I, Out, F>(items: I, f: F) -> Vec<Out>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Out,
{
    items.into_iter().map(f).collect()
}

/// Fallible `map`: stops at the first error and returns it.
/// Elements mapped before the failure are dropped.
pub fn try_map<I, Out, E, F>(items: I, f: F) -> Result<Vec<Out>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<Out, E>,
{
    items.into_iter().map(f).collect()
}

/// Keep the elements matching `predicate`, in their original order.
pub fn filter<I, P>(items: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}

/// Left fold starting from `initial`. Empty input returns `initial`.
pub fn fold<I, Acc, F>(items: I, initial: Acc, combine: F) -> Acc
where
    I: IntoIterator,
    F: FnMut(Acc, I::Item) -> Acc,
{
    items.into_iter().fold(initial, combine)
}

pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    contains_by(items, |item| item == value)
}

pub fn contains_by<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

/// Alias of [`contains_by`].
pub fn some<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    contains_by(items, predicate)
}

/// True when every element matches; vacuously true for `[]`.
pub fn all<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

/// Lowest-index element matching `predicate`.
pub fn first_matching<T, P>(items: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    items.iter().find(|&item| predicate(item))
}

/// Highest-index element matching `predicate` (scans backward).
pub fn last_matching<T, P>(items: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    items.iter().rev().find(|&item| predicate(item))
}

/// Concatenate sub-sequences in order.
pub fn flatten<T>(nested: Vec<Vec<T>>) -> Vec<T> {
    let size = nested.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(size);
    for inner in nested {
        out.extend(inner);
    }
    out
}

pub fn insert_first<T>(items: Vec<T>, elem: T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.push(elem);
    out.extend(items);
    out
}

pub fn insert_last<T>(items: Vec<T>, elem: T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend(items);
    out.push(elem);
    out
}

/// Apply `f` in order, returning the first error it produces.
pub fn for_each_until_error<I, E, F>(items: I, mut f: F) -> Result<(), E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<(), E>,
{
    for item in items {
        f(item)?;
    }
    Ok(())
}

/// Index elements by `key_fn`. On duplicate keys the later element wins.
pub fn to_lookup_table<T, K, F>(items: Vec<T>, mut key_fn: F) -> HashMap<K, T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut table = HashMap::with_capacity(items.len());
    for item in items {
        table.insert(key_fn(&item), item);
    }
    table
}
