//! Prototype-chained property store.
//!
//! String keys hash into a fixed table of [`BUCKET_COUNT`] buckets, each an
//! insertion-ordered list of slots. Symbol keys live in one separate
//! insertion-ordered list. A slot either holds a value or a getter/setter
//! pair.
//!
//! Only [`ObjectRef::get`] consults the prototype chain. Every other
//! operation is local to the receiver.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::error::{JsError, JsResult};
use crate::function::FunctionRef;
use crate::symbol::SymbolId;
use crate::value::Value;

/// Number of string-key buckets per object.
pub const BUCKET_COUNT: usize = 16;

/// Bucket index of a string key: the sum of its bytes modulo
/// [`BUCKET_COUNT`].
///
/// # Examples
///
/// ```
/// use core_types::object::hash_key;
///
/// assert_eq!(hash_key(""), 0);
/// assert_eq!(hash_key("a"), 97 % 16);
/// assert_eq!(hash_key("ab"), hash_key("ba"));
/// ```
pub fn hash_key(key: &str) -> usize {
    key.bytes()
        .fold(0usize, |hash, byte| (hash + byte as usize) % BUCKET_COUNT)
}

/// A property key: a string or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// String-keyed property
    String(String),
    /// Symbol-keyed property
    Symbol(SymbolId),
}

impl From<&str> for PropertyKey {
    fn from(key: &str) -> Self {
        PropertyKey::String(key.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(key: String) -> Self {
        PropertyKey::String(key)
    }
}

impl From<&String> for PropertyKey {
    fn from(key: &String) -> Self {
        PropertyKey::String(key.clone())
    }
}

impl From<SymbolId> for PropertyKey {
    fn from(id: SymbolId) -> Self {
        PropertyKey::Symbol(id)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(name) => f.write_str(name),
            PropertyKey::Symbol(id) => write!(f, "[{}]", id),
        }
    }
}

/// Contents of a property.
#[derive(Debug, Clone)]
pub enum Slot {
    /// Plain stored value
    Data(Value),
    /// Getter with an optional setter
    Accessor {
        /// Called with the owning object as receiver
        get: FunctionRef,
        /// Called with the owning object and the assigned value
        set: Option<FunctionRef>,
    },
}

#[derive(Debug)]
struct Property {
    key: PropertyKey,
    slot: Slot,
}

#[derive(Default)]
struct ObjectData {
    prototype: Option<ObjectRef>,
    buckets: [Vec<Property>; BUCKET_COUNT],
    symbols: Vec<Property>,
}

impl ObjectData {
    fn list(&self, key: &PropertyKey) -> &Vec<Property> {
        match key {
            PropertyKey::String(name) => &self.buckets[hash_key(name)],
            PropertyKey::Symbol(_) => &self.symbols,
        }
    }

    fn list_mut(&mut self, key: &PropertyKey) -> &mut Vec<Property> {
        match key {
            PropertyKey::String(name) => &mut self.buckets[hash_key(name)],
            PropertyKey::Symbol(_) => &mut self.symbols,
        }
    }

    fn slot(&self, key: &PropertyKey) -> Option<&Slot> {
        self.list(key)
            .iter()
            .find(|prop| prop.key == *key)
            .map(|prop| &prop.slot)
    }

    fn slot_mut(&mut self, key: &PropertyKey) -> Option<&mut Slot> {
        self.list_mut(key)
            .iter_mut()
            .find(|prop| prop.key == *key)
            .map(|prop| &mut prop.slot)
    }

    fn append(&mut self, key: PropertyKey, slot: Slot) {
        self.list_mut(&key).push(Property { key, slot });
    }
}

/// Shared handle to an object's property store.
///
/// Handles are cheap to clone; all clones see the same properties.
/// Prototypes are shared the same way, so many objects may point at one
/// parent.
///
/// # Examples
///
/// ```
/// use core_types::{ObjectRef, Value};
///
/// let parent = ObjectRef::create(None, [("greeting", Value::string("hi"))]);
/// let child = ObjectRef::new(Some(parent.clone()));
///
/// assert_eq!(child.get("greeting"), Some(Value::string("hi")));
/// assert!(!child.has("greeting"));
///
/// child.set("greeting", Value::string("hello"));
/// assert_eq!(child.get("greeting"), Some(Value::string("hello")));
/// assert_eq!(parent.get("greeting"), Some(Value::string("hi")));
/// ```
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<ObjectData>>);

impl ObjectRef {
    /// Create an empty object with the given prototype
    pub fn new(prototype: Option<ObjectRef>) -> Self {
        ObjectRef(Rc::new(RefCell::new(ObjectData {
            prototype,
            ..ObjectData::default()
        })))
    }

    /// Create an object with a prototype and initial string-keyed data
    /// properties, inserted in iteration order.
    pub fn create<I, K>(prototype: Option<&ObjectRef>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let obj = ObjectRef::new(prototype.cloned());
        for (key, value) in pairs {
            obj.set(key.into(), value);
        }
        obj
    }

    /// The prototype this object was created with
    pub fn prototype(&self) -> Option<ObjectRef> {
        self.0.borrow().prototype.clone()
    }

    /// Look up `key`, walking the prototype chain.
    ///
    /// Returns `None` when no object on the chain has the key. Accessor slots
    /// run their getter with the object that owns the slot as receiver.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Option<Value> {
        let key = key.into();
        let mut current = self.clone();
        loop {
            if let Some(found) = current.read_own(&key) {
                return Some(found);
            }
            let next = current.0.borrow().prototype.clone();
            current = next?;
        }
    }

    /// Look up `key` on this object only.
    pub fn get_own(&self, key: impl Into<PropertyKey>) -> Option<Value> {
        self.read_own(&key.into())
    }

    fn read_own(&self, key: &PropertyKey) -> Option<Value> {
        // The borrow must end before a getter runs; getters may touch `self`.
        let slot = self.0.borrow().slot(key).cloned()?;
        match slot {
            Slot::Data(value) => Some(value),
            Slot::Accessor { get, .. } => {
                trace!(key = %key, getter = get.name(), "invoking accessor getter");
                Some(get.call(&Value::Object(self.clone()), &[]))
            }
        }
    }

    /// Assign `key` on this object.
    ///
    /// An existing data slot is updated in place. An existing accessor slot
    /// runs its setter and is left untouched; without a setter the write is
    /// dropped. An absent key gets a new data slot appended to its bucket.
    pub fn set(&self, key: impl Into<PropertyKey>, value: Value) {
        let key = key.into();
        let setter = {
            let mut data = self.0.borrow_mut();
            match data.slot_mut(&key) {
                Some(Slot::Data(existing)) => {
                    *existing = value;
                    return;
                }
                Some(Slot::Accessor { set, .. }) => set.clone(),
                None => {
                    data.append(key, Slot::Data(value));
                    return;
                }
            }
        };
        match setter {
            Some(set) => {
                trace!(key = %key, setter = set.name(), "invoking accessor setter");
                set.call(&Value::Object(self.clone()), &[value]);
            }
            None => trace!(key = %key, "accessor without setter; write dropped"),
        }
    }

    /// Install a getter/setter pair for `key`.
    ///
    /// An existing slot of either kind is replaced in place, keeping its
    /// position; otherwise the accessor is appended.
    pub fn set_accessor(
        &self,
        key: impl Into<PropertyKey>,
        get: FunctionRef,
        set: Option<FunctionRef>,
    ) {
        let key = key.into();
        let mut data = self.0.borrow_mut();
        let accessor = Slot::Accessor { get, set };
        match data.slot_mut(&key) {
            Some(slot) => *slot = accessor,
            None => data.append(key, accessor),
        }
    }

    /// Whether this object itself has `key`
    pub fn has(&self, key: impl Into<PropertyKey>) -> bool {
        self.0.borrow().slot(&key.into()).is_some()
    }

    /// Remove `key` from this object, returning whether anything was removed
    pub fn delete(&self, key: impl Into<PropertyKey>) -> bool {
        let key = key.into();
        let mut data = self.0.borrow_mut();
        let list = data.list_mut(&key);
        match list.iter().position(|prop| prop.key == key) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    /// Own string keys, bucket by bucket and in insertion order within a
    /// bucket.
    ///
    /// This is not the ECMAScript property order: keys that hash to a lower
    /// bucket come first regardless of when they were added.
    pub fn keys(&self) -> Vec<String> {
        let data = self.0.borrow();
        data.buckets
            .iter()
            .flatten()
            .filter_map(|prop| match &prop.key {
                PropertyKey::String(name) => Some(name.clone()),
                PropertyKey::Symbol(_) => None,
            })
            .collect()
    }

    /// Own symbol keys in insertion order
    pub fn symbol_keys(&self) -> Vec<SymbolId> {
        let data = self.0.borrow();
        data.symbols
            .iter()
            .filter_map(|prop| match prop.key {
                PropertyKey::Symbol(id) => Some(id),
                PropertyKey::String(_) => None,
            })
            .collect()
    }

    /// Number of own properties of either kind
    pub fn len(&self) -> usize {
        let data = self.0.borrow();
        data.symbols.len() + data.buckets.iter().map(Vec::len).sum::<usize>()
    }

    /// Whether the object has no own properties of either kind
    pub fn is_empty(&self) -> bool {
        let data = self.0.borrow();
        data.symbols.is_empty() && data.buckets.iter().all(Vec::is_empty)
    }

    /// Look up `key` through the prototype chain and call it with this
    /// object as receiver.
    pub fn call_method(&self, key: impl Into<PropertyKey>, args: &[Value]) -> JsResult<Value> {
        let key = key.into();
        match self.get(key.clone()) {
            Some(Value::Function(method)) => Ok(method.call(&Value::Object(self.clone()), args)),
            _ => Err(JsError::type_error(format!("{} is not a function", key))),
        }
    }

    /// Whether both handles refer to the same object
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for ObjectRef {
    fn default() -> Self {
        ObjectRef::new(None)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => {
                let keys: Vec<&PropertyKey> = data
                    .buckets
                    .iter()
                    .flatten()
                    .chain(data.symbols.iter())
                    .map(|prop| &prop.key)
                    .collect();
                f.debug_struct("Object")
                    .field("keys", &keys)
                    .field("has_prototype", &data.prototype.is_some())
                    .finish()
            }
            Err(_) => write!(f, "Object(<borrowed>)"),
        }
    }
}
