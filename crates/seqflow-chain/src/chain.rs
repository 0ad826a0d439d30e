//! Chain wrapper: erased elements plus an optional carried failure.
//!
//! Transformations never report errors directly. The first failure moves the
//! chain to `Failed`, every later transformation passes it through untouched,
//! and the next terminal call returns it.

use seqflow_core::{slice, BoxError, Erased, Result, SeqError};
use std::fmt;
use std::marker::PhantomData;

enum State {
    Live(Vec<Erased>),
    Failed(SeqError),
}

/// Fluent wrapper whose terminal calls produce elements of type `T`.
///
/// Intermediate element types are only known to the closures passed to
/// `map`/`try_map`/`filter`; each element is recovered as the closure's input
/// type and a mismatch fails the chain.
pub struct Chain<T> {
    state: State,
    _pd: PhantomData<fn() -> T>,
}

impl<T: 'static> Chain<T> {
    /// Start a live chain from `items`, whose element type may differ from `T`.
    pub fn from_vec<S: 'static>(items: Vec<S>) -> Self {
        Self::live(slice::map(items, Erased::new))
    }

    fn live(items: Vec<Erased>) -> Self {
        Self {
            state: State::Live(items),
            _pd: PhantomData,
        }
    }

    fn failed(err: SeqError) -> Self {
        Self {
            state: State::Failed(err),
            _pd: PhantomData,
        }
    }

    fn step<F>(self, op: &'static str, f: F) -> Self
    where
        F: FnOnce(Vec<Erased>) -> Result<Vec<Erased>>,
    {
        match self.state {
            State::Failed(err) => Self::failed(err),
            State::Live(items) => match f(items) {
                Ok(items) => Self::live(items),
                Err(err) => {
                    tracing::debug!(op, error = %err, "chain failed");
                    Self::failed(err)
                }
            },
        }
    }

    fn into_items(self) -> Result<Vec<Erased>> {
        match self.state {
            State::Live(items) => Ok(items),
            State::Failed(err) => Err(err),
        }
    }

    pub fn map<A, B, F>(self, mut f: F) -> Self
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B,
    {
        self.step("map", |items| {
            slice::try_map(items, |item| item.downcast::<A>("map").map(|a| Erased::new(f(a))))
        })
    }

    /// Like `map`, but the first `Err` from `f` fails the chain and the
    /// elements mapped so far are dropped.
    pub fn try_map<A, B, E, F>(self, mut f: F) -> Self
    where
        A: 'static,
        B: 'static,
        E: Into<BoxError>,
        F: FnMut(A) -> std::result::Result<B, E>,
    {
        self.step("try_map", |items| {
            slice::try_map(items.into_iter().enumerate(), |(index, item)| {
                let a = item.downcast::<A>("try_map")?;
                f(a).map(Erased::new)
                    .map_err(|e| SeqError::element(index, e))
            })
        })
    }

    pub fn filter<A, P>(self, mut predicate: P) -> Self
    where
        A: 'static,
        P: FnMut(&A) -> bool,
    {
        self.step("filter", |items| {
            let mut kept = Vec::with_capacity(items.len());
            for item in items {
                let keep = predicate(item.downcast_ref::<A>("filter")?);
                if keep {
                    kept.push(item);
                }
            }
            Ok(kept)
        })
    }

    // ========================================================================
    // TERMINAL CALLS
    // ========================================================================

    /// Recover every element as `T`; any mismatch fails the whole call.
    pub fn to_vec(self) -> Result<Vec<T>> {
        slice::try_map(self.into_items()?, |item| item.downcast::<T>("to_vec"))
    }

    /// Recovers every element before folding; a mismatch skips `combine`.
    pub fn fold<Acc, F>(self, initial: Acc, combine: F) -> Result<Acc>
    where
        F: FnMut(Acc, T) -> Acc,
    {
        let values = slice::try_map(self.into_items()?, |item| item.downcast::<T>("fold"))?;
        Ok(slice::fold(values, initial, combine))
    }

    pub fn for_each_until_error<E, F>(self, mut f: F) -> Result<()>
    where
        E: Into<BoxError>,
        F: FnMut(T) -> std::result::Result<(), E>,
    {
        slice::for_each_until_error(self.into_items()?.into_iter().enumerate(), |(index, item)| {
            let value = item.downcast::<T>("for_each")?;
            f(value).map_err(|e| SeqError::element(index, e))
        })
    }

    pub fn first(self) -> Result<T> {
        self.into_items()?
            .into_iter()
            .next()
            .ok_or(SeqError::Empty { context: "first" })?
            .downcast::<T>("first")
    }

    pub fn last(self) -> Result<T> {
        self.into_items()?
            .pop()
            .ok_or(SeqError::Empty { context: "last" })?
            .downcast::<T>("last")
    }

    /// Element at `index % len`; never out of range.
    pub fn pick(self, index: usize) -> Result<T> {
        let mut items = self.into_items()?;
        if items.is_empty() {
            return Err(SeqError::Empty { context: "pick" });
        }
        let at = index % items.len();
        items.swap_remove(at).downcast::<T>("pick")
    }

    /// Sum of all elements; an empty chain yields the additive identity.
    pub fn sum(self) -> Result<T>
    where
        T: std::iter::Sum<T>,
    {
        Ok(self.to_vec()?.into_iter().sum())
    }

    // ========================================================================
    // INSPECTION
    // ========================================================================

    /// Number of elements held; zero once failed.
    pub fn len(&self) -> usize {
        match &self.state {
            State::Live(items) => items.len(),
            State::Failed(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// The carried failure, if any.
    pub fn error(&self) -> Option<&SeqError> {
        match &self.state {
            State::Failed(err) => Some(err),
            State::Live(_) => None,
        }
    }
}

impl<T: 'static> From<Vec<T>> for Chain<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Live(items) => f.debug_struct("Chain").field("live", &items.len()).finish(),
            State::Failed(err) => f.debug_struct("Chain").field("failed", err).finish(),
        }
    }
}
