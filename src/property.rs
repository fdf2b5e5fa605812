//! Reading named properties off of objects.
//!
//! Rust has no runtime reflection, so "read the property called `name`" is expressed as the
//! [`PropertyAccessor`] trait.  Several implementations are provided:
//!
//! * any closure `Fn(&O, &PropertyName) -> Result<V, PropertyError>`,
//! * [`FieldTable`], an explicit table of getters,
//! * [`ReflectAccessor`], for types that implement [`Reflect`] by hand,
//! * [`SerdeAccessor`], for anything that implements [`serde::Serialize`].

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::error::ArrayError;
use crate::value::PropertyValue;

/// The name of a property, possibly nested and/or indexed.
///
/// The syntax is a dot-separated list of identifiers, each of which may be followed by any
/// number of list indices:  `name`, `address.city`, `lines[0].sku`, `grid[1][2]`.
///
/// Construct one with [`str::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyName {
    text: String,
    head: String,
    rest: Vec<Step>,
}

/// One step in a property path, after the leading field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Field(String),
    Index(usize),
}

impl std::str::FromStr for PropertyName {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref SEGMENT_RE: Regex = Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*)((?:\[[0-9]+\])*)$").unwrap();
            static ref INDEX_RE: Regex = Regex::new(r"\[([0-9]+)\]").unwrap();
        }
        if s.trim().is_empty() {
            return Err(ArrayError::invalid_argument("property_name", "the property name is empty or blank"));
        }

        let mut head = None;
        let mut rest = vec![];
        for segment in s.split('.') {
            let captures = SEGMENT_RE.captures(segment).ok_or_else(|| {
                ArrayError::invalid_argument("property_name", format!("malformed property path {:?}", s))
            })?;
            let field = captures[1].to_owned();
            match head {
                None => head = Some(field),
                Some(_) => rest.push(Step::Field(field)),
            }
            for index in INDEX_RE.captures_iter(&captures[2]) {
                let index = index[1].parse().map_err(|_| {
                    ArrayError::invalid_argument("property_name", format!("index too large in {:?}", s))
                })?;
                rest.push(Step::Index(index));
            }
        }
        // `split` always yields at least one segment, and it was checked above
        let head = head.ok_or_else(|| ArrayError::invalid_argument("property_name", "the property name is empty"))?;
        Ok(PropertyName { text: s.to_owned(), head, rest })
    }
}

impl PropertyName {
    pub fn as_str(&self) -> &str { &self.text }

    /// The leading field name.
    pub fn head(&self) -> &str { &self.head }

    /// Everything after the leading field name.
    pub fn rest(&self) -> &[Step] { &self.rest }

    /// True for a plain name like `id` with no dots or indices.
    pub fn is_simple(&self) -> bool { self.rest.is_empty() }

    /// Render the head and the first `len` steps after it, for error messages.
    fn prefix(&self, len: usize) -> String {
        let mut out = self.head.clone();
        for step in &self.rest[..len] {
            match step {
                Step::Field(name) => { out.push('.'); out.push_str(name); },
                Step::Index(index) => out.push_str(&format!("[{}]", index)),
            }
        }
        out
    }

    /// Look up the head field in an object.
    fn lookup_head<'v>(&self, root: &'v PropertyValue) -> Result<&'v PropertyValue, PropertyError> {
        match root {
            PropertyValue::Object(fields) => fields.get(&self.head).ok_or_else(|| {
                PropertyError::NoSuchProperty { path: self.head.clone() }
            }),
            other => Err(PropertyError::NotAContainer {
                path: self.head.clone(), expected: "an object", found: other.descr(),
            }),
        }
    }

    /// Follow the steps after the head, starting from the head's value.
    fn walk_rest(&self, head_value: &PropertyValue) -> Result<PropertyValue, PropertyError> {
        let mut current = head_value;
        for (i, step) in self.rest.iter().enumerate() {
            let path = || self.prefix(i + 1);
            current = match (step, current) {
                (Step::Field(name), PropertyValue::Object(fields)) => {
                    fields.get(name).ok_or_else(|| PropertyError::NoSuchProperty { path: path() })?
                },
                (Step::Index(index), PropertyValue::List(items)) => {
                    items.get(*index).ok_or_else(|| PropertyError::IndexOutOfRange {
                        path: path(), index: *index, len: items.len(),
                    })?
                },
                (Step::Field(_), other) => return Err(PropertyError::NotAContainer {
                    path: path(), expected: "an object", found: other.descr(),
                }),
                (Step::Index(_), other) => return Err(PropertyError::NotAContainer {
                    path: path(), expected: "a list", found: other.descr(),
                }),
            };
        }
        Ok(current.clone())
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for PropertyName {
    fn as_ref(&self) -> &str { &self.text }
}

/// Failure to read a property.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    #[error("no property named {:?}", .path)]
    NoSuchProperty { path: String },
    #[error("{:?}: index {} is out of range for a list of length {}", .path, .index, .len)]
    IndexOutOfRange { path: String, index: usize, len: usize },
    #[error("{:?}: expected {}, got {}", .path, .expected, .found)]
    NotAContainer {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{:?} could not be read: {}", .path, .message)]
    Unreadable { path: String, message: String },
}

/// Reads a named property off of an `O`.
pub trait PropertyAccessor<O: ?Sized> {
    /// The type of the property values, used as group keys.
    type Value: Eq + Hash;

    fn get(&self, object: &O, name: &PropertyName) -> Result<Self::Value, PropertyError>;
}

impl<O: ?Sized, V, F> PropertyAccessor<O> for F
where
    V: Eq + Hash,
    F: Fn(&O, &PropertyName) -> Result<V, PropertyError>,
{
    type Value = V;

    fn get(&self, object: &O, name: &PropertyName) -> Result<V, PropertyError> {
        self(object, name)
    }
}

// =============================================================================

/// An explicit table of getters, keyed by property name.
///
/// Only simple names are supported; there is no way to look inside of a getter's result.
pub struct FieldTable<O, V> {
    getters: IndexMap<&'static str, fn(&O) -> V>,
}

impl<O, V> Default for FieldTable<O, V> {
    fn default() -> Self { Self::new() }
}

impl<O, V> FieldTable<O, V> {
    pub fn new() -> Self {
        FieldTable { getters: IndexMap::new() }
    }

    pub fn with(mut self, name: &'static str, getter: fn(&O) -> V) -> Self {
        self.getters.insert(name, getter);
        self
    }

    pub fn names(&self) -> impl Iterator<Item=&'static str> + '_ {
        self.getters.keys().copied()
    }
}

impl<O, V: Eq + Hash> PropertyAccessor<O> for FieldTable<O, V> {
    type Value = V;

    fn get(&self, object: &O, name: &PropertyName) -> Result<V, PropertyError> {
        match self.getters.get(name.as_str()) {
            Some(getter) => Ok(getter(object)),
            None => Err(PropertyError::NoSuchProperty { path: name.to_string() }),
        }
    }
}

// =============================================================================

/// Hand-written stand-in for runtime reflection.
///
/// Implementors return the value of each property they have, and `None` for names they
/// don't recognize.  Nested and indexed paths are resolved by [`ReflectAccessor`] by looking
/// inside the returned [`PropertyValue`].
pub trait Reflect {
    fn property(&self, name: &str) -> Option<PropertyValue>;
}

impl Reflect for PropertyValue {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.field(name).cloned()
    }
}

impl Reflect for IndexMap<String, PropertyValue> {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.get(name).cloned()
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn property(&self, name: &str) -> Option<PropertyValue> { (**self).property(name) }
}

/// Accessor for [`Reflect`] types.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflectAccessor;

impl<O: Reflect + ?Sized> PropertyAccessor<O> for ReflectAccessor {
    type Value = PropertyValue;

    fn get(&self, object: &O, name: &PropertyName) -> Result<PropertyValue, PropertyError> {
        let head = object.property(name.head()).ok_or_else(|| {
            PropertyError::NoSuchProperty { path: name.head().to_owned() }
        })?;
        name.walk_rest(&head)
    }
}

// =============================================================================

/// Accessor that reads properties through an object's [`serde::Serialize`] impl.
///
/// Each object is serialized to JSON in memory and the path is looked up in the result, so
/// property names are the *serialized* field names (i.e. they respect `#[serde(rename)]`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeAccessor;

impl<O: serde::Serialize + ?Sized> PropertyAccessor<O> for SerdeAccessor {
    type Value = PropertyValue;

    fn get(&self, object: &O, name: &PropertyName) -> Result<PropertyValue, PropertyError> {
        let json = serde_json::to_value(object).map_err(|e| PropertyError::Unreadable {
            path: name.to_string(),
            message: e.to_string(),
        })?;
        let root = PropertyValue::from(json);
        name.walk_rest(name.lookup_head(&root)?)
    }
}
