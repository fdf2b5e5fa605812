//! Grouping array elements into buckets.
//!
//! All grouping functions here produce a [`GroupMap`], which is an [`IndexMap`]: keys are in
//! the order that they were first produced, and each bucket holds its elements in the same
//! order as the input.  Buckets are never empty.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::array::MaybeArray;
use crate::error::ArrayError;
use crate::property::{PropertyAccessor, PropertyName};

/// Mapping from a group key to the elements (in input order) that produced that key.
pub type GroupMap<K, V> = IndexMap<K, Vec<V>>;

fn accumulate<K: Eq + Hash, V>(map: &mut GroupMap<K, V>, key: K, element: V) {
    map.entry(key).or_default().push(element);
}

/// Group items by a key function.
pub fn group_by_key<T, K: Eq + Hash>(
    items: impl IntoIterator<Item=T>,
    mut key_fn: impl FnMut(&T) -> K,
) -> GroupMap<K, T> {
    let mut out = GroupMap::default();
    for item in items {
        accumulate(&mut out, key_fn(&item), item);
    }
    out
}

/// Group items by a fallible key function.
///
/// The first error aborts the whole thing; no partially-built map is returned.
pub fn try_group_by_key<T, K: Eq + Hash, E>(
    items: impl IntoIterator<Item=T>,
    mut key_fn: impl FnMut(&T) -> Result<K, E>,
) -> Result<GroupMap<K, T>, E> {
    let mut out = GroupMap::default();
    for item in items {
        accumulate(&mut out, key_fn(&item)?, item);
    }
    Ok(out)
}

/// Group equal elements of an array together.
///
/// An absent or empty array produces an empty map.  Arrays of `Option<T>` are fine; all of
/// the `None`s end up in one bucket like any other key.
///
/// ```
/// let groups = array_kit::group(&[1, 1, 2, 1, 3]);
///
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(groups[&1], vec![1, 1, 1]);
/// ```
pub fn group<'a, T>(array: impl MaybeArray<'a, T>) -> GroupMap<T, T>
where
    T: Eq + Hash + Clone + 'a,
{
    let array = array.into_slice();
    let out = group_by_key(array.iter().cloned(), T::clone);
    tracing::trace!(elements = array.len(), groups = out.len(), "grouped array by value");
    out
}

/// Group the elements of an array by the value of a named property.
///
/// `property_name` must be a valid [`PropertyName`]; a blank or malformed name is an
/// [`ArrayError::InvalidArgument`], reported before any property is read.  If the array is
/// absent, an empty map is returned without looking at the name.
///
/// If reading the property fails for any element, the accessor's error is returned and no
/// map is produced.
pub fn group_by_property<'a, O, A>(
    array: impl MaybeArray<'a, O>,
    property_name: &str,
    accessor: &A,
) -> Result<GroupMap<A::Value, O>, ArrayError>
where
    O: Clone + 'a,
    A: PropertyAccessor<O> + ?Sized,
{
    let array = match array.into_array() {
        Some(array) => array,
        None => return Ok(GroupMap::new()),
    };
    let name: PropertyName = property_name.parse()?;

    let out = try_group_by_key(array.iter().cloned(), |object| {
        accessor.get(object, &name).map_err(|e| {
            tracing::debug!(property = %name, error = %e, "could not read property for grouping");
            ArrayError::from(e)
        })
    })?;
    tracing::trace!(elements = array.len(), groups = out.len(), property = %name, "grouped array by property");
    Ok(out)
}
