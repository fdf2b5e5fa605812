//! Dynamically-typed property values.

use std::fmt;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::empty::NullOrEmpty;

/// The value of a property, as read by one of the dynamic accessors.
///
/// This is the key type produced when grouping by a property whose type is only known at
/// runtime.  It has value equality and a hash that agrees with it, so it can key a map.
///
/// Integers compare by numeric value, whichever of `Int` and `UInt` holds them.  Floats
/// compare by bit pattern.  This means `NaN == NaN` here (so that a `NaN` key can be looked up
/// again), and `0.0 != -0.0`.  Objects compare field-by-field regardless of field order.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    /// An integer above `i64::MAX`.  Conversions only produce this when `Int` can't hold the value.
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<PropertyValue>),
    /// Fields of a nested object, in declaration order.
    Object(IndexMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Textual description, e.g. `"an integer"`.
    pub fn descr(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Bool(_) => "a boolean",
            PropertyValue::Int(_) | PropertyValue::UInt(_) => "an integer",
            PropertyValue::Float(_) => "a float",
            PropertyValue::String(_) => "a string",
            PropertyValue::List(_) => "a list",
            PropertyValue::Object(_) => "an object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            &PropertyValue::Int(x) => Some(x),
            _ => None,
        }
    }

    /// Either integer variant, widened.
    fn as_wide_int(&self) -> Option<i128> {
        match self {
            &PropertyValue::Int(x) => Some(x.into()),
            &PropertyValue::UInt(x) => Some(x.into()),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&PropertyValue> {
        match self {
            PropertyValue::Object(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Builder for an [`PropertyValue::Object`].
    pub fn make_object() -> BuildObject {
        BuildObject { fields: IndexMap::new() }
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        use PropertyValue as V;

        if let (Some(a), Some(b)) = (self.as_wide_int(), other.as_wide_int()) {
            return a == b;
        }
        match (self, other) {
            (V::Null, V::Null) => true,
            (V::Bool(a), V::Bool(b)) => a == b,
            (V::Float(a), V::Float(b)) => a.to_bits() == b.to_bits(),
            (V::String(a), V::String(b)) => a == b,
            (V::List(a), V::List(b)) => a == b,
            // IndexMap equality ignores order
            (V::Object(a), V::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for PropertyValue {}

impl Hash for PropertyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Int and UInt share a tag so that equal integers hash the same
        match self {
            PropertyValue::Null => 0u8.hash(state),
            PropertyValue::Bool(x) => { 1u8.hash(state); x.hash(state) },
            PropertyValue::Int(_) | PropertyValue::UInt(_) => {
                2u8.hash(state);
                self.as_wide_int().hash(state);
            },
            PropertyValue::Float(x) => { 3u8.hash(state); x.to_bits().hash(state) },
            PropertyValue::String(x) => { 4u8.hash(state); x.hash(state) },
            PropertyValue::List(xs) => { 5u8.hash(state); xs.hash(state) },
            PropertyValue::Object(fields) => {
                6u8.hash(state);
                fields.len().hash(state);
                // summed so that field order doesn't matter
                let sum = fields.iter().fold(0u64, |acc, entry| {
                    let mut hasher = DefaultHasher::new();
                    entry.hash(&mut hasher);
                    acc.wrapping_add(hasher.finish())
                });
                sum.hash(state);
            },
        }
    }
}

/// `Display` impl, for joining and for error messages.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::Bool(x) => write!(f, "{}", x),
            PropertyValue::Int(x) => write!(f, "{}", x),
            PropertyValue::UInt(x) => write!(f, "{}", x),
            PropertyValue::Float(x) => write!(f, "{:?}", x),
            PropertyValue::String(x) => write!(f, "{}", x),
            PropertyValue::List(xs) => {
                write!(f, "[")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", x)?;
                }
                write!(f, "]")
            },
            PropertyValue::Object(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            },
        }
    }
}

impl NullOrEmpty for PropertyValue {
    fn is_null_or_empty(&self) -> bool {
        match self {
            PropertyValue::Null => true,
            PropertyValue::String(x) => x.is_empty(),
            PropertyValue::List(xs) => xs.is_empty(),
            PropertyValue::Object(fields) => fields.is_empty(),
            PropertyValue::Bool(_) => false,
            PropertyValue::Int(_) | PropertyValue::UInt(_) | PropertyValue::Float(_) => false,
        }
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as J;

        match value {
            J::Null => PropertyValue::Null,
            J::Bool(x) => PropertyValue::Bool(x),
            J::Number(x) => match (x.as_i64(), x.as_u64()) {
                (Some(int), _) => PropertyValue::Int(int),
                (None, Some(uint)) => PropertyValue::UInt(uint),
                (None, None) => PropertyValue::Float(x.as_f64().unwrap_or(f64::NAN)),
            },
            J::String(x) => PropertyValue::String(x),
            J::Array(xs) => PropertyValue::List(xs.into_iter().map(Into::into).collect()),
            J::Object(fields) => PropertyValue::Object({
                fields.into_iter().map(|(key, value)| (key, value.into())).collect()
            }),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+) => {$(
        impl From<$ty> for PropertyValue {
            fn from(x: $ty) -> Self { PropertyValue::Int(x.into()) }
        }
    )+};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for PropertyValue {
    fn from(x: u64) -> Self {
        match i64::try_from(x) {
            Ok(int) => PropertyValue::Int(int),
            Err(_) => PropertyValue::UInt(x),
        }
    }
}

impl From<usize> for PropertyValue {
    fn from(x: usize) -> Self { (x as u64).into() }
}

impl From<bool> for PropertyValue {
    fn from(x: bool) -> Self { PropertyValue::Bool(x) }
}

impl From<f32> for PropertyValue {
    fn from(x: f32) -> Self { PropertyValue::Float(x.into()) }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> Self { PropertyValue::Float(x) }
}

impl From<&str> for PropertyValue {
    fn from(x: &str) -> Self { PropertyValue::String(x.to_owned()) }
}

impl From<String> for PropertyValue {
    fn from(x: String) -> Self { PropertyValue::String(x) }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(x: Option<T>) -> Self {
        x.map_or(PropertyValue::Null, Into::into)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(xs: Vec<T>) -> Self {
        PropertyValue::List(xs.into_iter().map(Into::into).collect())
    }
}

/// Builder pattern for a [`PropertyValue::Object`].
#[derive(Debug, Clone, Default)]
pub struct BuildObject {
    fields: IndexMap<String, PropertyValue>,
}

impl BuildObject {
    pub fn field(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn build(&mut self) -> PropertyValue {
        PropertyValue::Object(std::mem::take(&mut self.fields))
    }
}
