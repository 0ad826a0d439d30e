//! Erased values: a single element (`Erased`) or a whole homogeneous
//! sequence (`ErasedSeq`) whose static type is forgotten until recovered.
//!
//! Recovery always goes through `Erased::downcast` / `ErasedSeq::into_vec`,
//! so every caller reports a mismatch with the same `SeqError::TypeMismatch`.

use crate::error::{Result, SeqError};
use std::any::{type_name, Any};
use std::fmt;

fn mismatch<T: 'static>(context: &'static str, got: &'static str) -> SeqError {
    SeqError::TypeMismatch {
        context,
        expected: type_name::<T>(),
        got,
    }
}

/// One value of a type known only at the call site.
pub struct Erased {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl Erased {
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the concrete type held.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Recover the value as `T`, consuming the erased box.
    pub fn downcast<T: 'static>(self, context: &'static str) -> Result<T> {
        let got = self.type_name;
        self.value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| mismatch::<T>(context, got))
    }

    pub fn downcast_ref<T: 'static>(&self, context: &'static str) -> Result<&T> {
        self.value
            .downcast_ref::<T>()
            .ok_or_else(|| mismatch::<T>(context, self.type_name))
    }
}

impl fmt::Debug for Erased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Erased")
            .field("type", &self.type_name)
            .finish()
    }
}

/// A `Vec<T>` carried without its element type.
pub struct ErasedSeq {
    items: Box<dyn Any>,
    elem_type: &'static str,
    len: usize,
}

impl ErasedSeq {
    pub fn new<T: 'static>(items: Vec<T>) -> Self {
        Self {
            len: items.len(),
            elem_type: type_name::<T>(),
            items: Box::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Name of the element type held.
    pub fn elem_type(&self) -> &'static str {
        self.elem_type
    }

    pub fn holds<T: 'static>(&self) -> bool {
        self.items.is::<Vec<T>>()
    }

    /// Recover the sequence as `Vec<T>`.
    ///
    /// `context` names the caller (a stage id or terminal call) and ends up
    /// in the mismatch error.
    pub fn into_vec<T: 'static>(self, context: &'static str) -> Result<Vec<T>> {
        let got = self.elem_type;
        self.items
            .downcast::<Vec<T>>()
            .map(|boxed| *boxed)
            .map_err(|_| mismatch::<T>(context, got))
    }
}

impl<T: 'static> From<Vec<T>> for ErasedSeq {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl fmt::Debug for ErasedSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedSeq")
            .field("elem_type", &self.elem_type)
            .field("len", &self.len)
            .finish()
    }
}
