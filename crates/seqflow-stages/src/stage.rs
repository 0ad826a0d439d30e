//! Stage Trait: one contract for every pipeline stage
//!
//! A stage receives the pipeline's erased carrier, recovers it as the
//! element type its closure was written for, and hands back a new erased
//! sequence. Recovery failures surface as `SeqError::TypeMismatch` naming
//! the stage id.
use seqflow_core::{slice, BoxError, ErasedSeq, Result, SeqError};
use std::any::type_name;
use std::marker::PhantomData;

pub trait Stage {
    /// Stage id (ex: "map", "filter")
    fn id(&self) -> &'static str;

    /// Element type expected on input
    fn in_type(&self) -> &'static str;

    /// Element type produced on output
    fn out_type(&self) -> &'static str;

    /// Runs the stage
    fn run(&self, input: ErasedSeq) -> Result<ErasedSeq>;
}

/// `In -> Out` for every element.
pub struct MapStage<In, Out, F> {
    f: F,
    _pd: PhantomData<fn(In) -> Out>,
}

impl<In, Out, F> MapStage<In, Out, F>
where
    F: Fn(In) -> Out,
{
    pub fn new(f: F) -> Self {
        Self { f, _pd: PhantomData }
    }
}

impl<In, Out, F> Stage for MapStage<In, Out, F>
where
    In: 'static,
    Out: 'static,
    F: Fn(In) -> Out,
{
    fn id(&self) -> &'static str {
        "map"
    }

    fn in_type(&self) -> &'static str {
        type_name::<In>()
    }

    fn out_type(&self) -> &'static str {
        type_name::<Out>()
    }

    fn run(&self, input: ErasedSeq) -> Result<ErasedSeq> {
        let items = input.into_vec::<In>(self.id())?;
        Ok(ErasedSeq::new(slice::map(items, &self.f)))
    }
}

/// `In -> Result<Out, E>` for every element, aborting on the first error.
pub struct TryMapStage<In, Out, E, F> {
    f: F,
    _pd: PhantomData<fn(In) -> std::result::Result<Out, E>>,
}

impl<In, Out, E, F> TryMapStage<In, Out, E, F>
where
    F: Fn(In) -> std::result::Result<Out, E>,
{
    pub fn new(f: F) -> Self {
        Self { f, _pd: PhantomData }
    }
}

impl<In, Out, E, F> Stage for TryMapStage<In, Out, E, F>
where
    In: 'static,
    Out: 'static,
    E: Into<BoxError>,
    F: Fn(In) -> std::result::Result<Out, E>,
{
    fn id(&self) -> &'static str {
        "try_map"
    }

    fn in_type(&self) -> &'static str {
        type_name::<In>()
    }

    fn out_type(&self) -> &'static str {
        type_name::<Out>()
    }

    fn run(&self, input: ErasedSeq) -> Result<ErasedSeq> {
        let items = input.into_vec::<In>(self.id())?;
        let mapped = slice::try_map(items.into_iter().enumerate(), |(index, item)| {
            (self.f)(item).map_err(|e| SeqError::element(index, e))
        })?;
        Ok(ErasedSeq::new(mapped))
    }
}

/// Keeps the elements matching a predicate.
pub struct FilterStage<T, P> {
    predicate: P,
    _pd: PhantomData<fn(&T) -> bool>,
}

impl<T, P> FilterStage<T, P>
where
    P: Fn(&T) -> bool,
{
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            _pd: PhantomData,
        }
    }
}

impl<T, P> Stage for FilterStage<T, P>
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    fn id(&self) -> &'static str {
        "filter"
    }

    fn in_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn out_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn run(&self, input: ErasedSeq) -> Result<ErasedSeq> {
        let items = input.into_vec::<T>(self.id())?;
        Ok(ErasedSeq::new(slice::filter(items, &self.predicate)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    First,
    Last,
}

/// Prepends or appends one element. The element is cloned per run so a
/// pipeline can be executed more than once.
#[derive(Debug, Clone)]
pub struct InsertStage<T> {
    elem: T,
    at: InsertAt,
}

impl<T: Clone> InsertStage<T> {
    pub fn first(elem: T) -> Self {
        Self {
            elem,
            at: InsertAt::First,
        }
    }

    pub fn last(elem: T) -> Self {
        Self {
            elem,
            at: InsertAt::Last,
        }
    }

    /// Classic `cons`: same as [`InsertStage::first`].
    pub fn cons(elem: T) -> Self {
        Self::first(elem)
    }

    pub fn position(&self) -> InsertAt {
        self.at
    }
}

impl<T> Stage for InsertStage<T>
where
    T: Clone + 'static,
{
    fn id(&self) -> &'static str {
        match self.at {
            InsertAt::First => "insert_first",
            InsertAt::Last => "insert_last",
        }
    }

    fn in_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn out_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn run(&self, input: ErasedSeq) -> Result<ErasedSeq> {
        let items = input.into_vec::<T>(self.id())?;
        let elem = self.elem.clone();
        let out = match self.at {
            InsertAt::First => slice::insert_first(items, elem),
            InsertAt::Last => slice::insert_last(items, elem),
        };
        Ok(ErasedSeq::new(out))
    }
}

// ============================================================================
// BOXED CONSTRUCTORS
// ============================================================================

pub fn map<In, Out, F>(f: F) -> Box<dyn Stage>
where
    In: 'static,
    Out: 'static,
    F: Fn(In) -> Out + 'static,
{
    Box::new(MapStage::new(f))
}

pub fn try_map<In, Out, E, F>(f: F) -> Box<dyn Stage>
where
    In: 'static,
    Out: 'static,
    E: Into<BoxError> + 'static,
    F: Fn(In) -> std::result::Result<Out, E> + 'static,
{
    Box::new(TryMapStage::new(f))
}

pub fn filter<T, P>(predicate: P) -> Box<dyn Stage>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    Box::new(FilterStage::new(predicate))
}

pub fn insert_first<T: Clone + 'static>(elem: T) -> Box<dyn Stage> {
    Box::new(InsertStage::first(elem))
}

pub fn insert_last<T: Clone + 'static>(elem: T) -> Box<dyn Stage> {
    Box::new(InsertStage::last(elem))
}

pub fn cons<T: Clone + 'static>(elem: T) -> Box<dyn Stage> {
    Box::new(InsertStage::cons(elem))
}
