//! Shared array storage.
//!
//! The array method library lives elsewhere; the core only needs element
//! storage with reference identity so that arrays can take part in equality,
//! addition and string conversion.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// Shared handle to a JavaScript array.
#[derive(Clone, Default)]
pub struct ArrayRef(Rc<RefCell<Vec<Value>>>);

impl ArrayRef {
    /// Create an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array holding `elements`
    pub fn from_vec(elements: Vec<Value>) -> Self {
        ArrayRef(Rc::new(RefCell::new(elements)))
    }

    /// Append an element, returning the new length
    pub fn push(&self, value: Value) -> usize {
        let mut elements = self.0.borrow_mut();
        elements.push(value);
        elements.len()
    }

    /// Element at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Replace the element at `index`, growing the array with `undefined`
    /// holes when `index` is past the end. A write at `usize::MAX` is ignored.
    pub fn set(&self, index: usize, value: Value) {
        let mut elements = self.0.borrow_mut();
        if index >= elements.len() {
            let Some(new_len) = index.checked_add(1) else {
                return;
            };
            elements.resize(new_len, Value::Undefined);
        }
        elements[index] = value;
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the array has no elements
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Snapshot of the current elements.
    ///
    /// Callers that run user code per element iterate over the snapshot so
    /// that the array may be mutated meanwhile.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Whether both handles refer to the same array
    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Value>> for ArrayRef {
    fn from(elements: Vec<Value>) -> Self {
        ArrayRef::from_vec(elements)
    }
}

impl fmt::Debug for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(elements) => f.debug_tuple("Array").field(&elements.len()).finish(),
            Err(_) => write!(f, "Array(<borrowed>)"),
        }
    }
}
