//! Plain array helpers: indexed access and conversion to an owned list.

use crate::error::ArrayError;

/// An array argument that may be absent.
///
/// Every function in this crate that takes an array accepts anything implementing this, so
/// that callers can pass `&[T]`, `&[T; N]`, `&Vec<T>`, or an `Option` of any of those without
/// converting first.  `None` is how an absent array is spelled.
pub trait MaybeArray<'a, T: 'a> {
    fn into_array(self) -> Option<&'a [T]>;

    /// The array, with an absent array treated as empty.
    fn into_slice(self) -> &'a [T] where Self: Sized {
        self.into_array().unwrap_or(&[])
    }
}

impl<'a, T> MaybeArray<'a, T> for &'a [T] {
    fn into_array(self) -> Option<&'a [T]> { Some(self) }
}

impl<'a, T, const N: usize> MaybeArray<'a, T> for &'a [T; N] {
    fn into_array(self) -> Option<&'a [T]> { Some(&self[..]) }
}

impl<'a, T> MaybeArray<'a, T> for &'a Vec<T> {
    fn into_array(self) -> Option<&'a [T]> { Some(&self[..]) }
}

impl<'a, T: 'a, A: MaybeArray<'a, T>> MaybeArray<'a, T> for Option<A> {
    fn into_array(self) -> Option<&'a [T]> { self.and_then(MaybeArray::into_array) }
}

/// Get a copy of the element at `index`.
///
/// Negative indices are not counted from the end; they are simply out of range, as is any
/// index into an absent array.
///
/// ```
/// use array_kit::element_at;
///
/// assert_eq!(element_at(&[10, 20, 30], 1), Ok(20));
/// assert!(element_at(&[10, 20, 30], 5).is_err());
/// ```
pub fn element_at<'a, T: Clone + 'a>(array: impl MaybeArray<'a, T>, index: isize) -> Result<T, ArrayError> {
    let array = array.into_slice();
    usize::try_from(index).ok()
        .and_then(|i| array.get(i))
        .cloned()
        .ok_or(ArrayError::IndexOutOfRange { index, len: array.len() })
}

/// Copy an array into a fresh `Vec`, which the caller is free to grow or shrink.
///
/// An absent array gives an empty `Vec`.
pub fn to_owned_list<'a, T: Clone + 'a>(array: impl MaybeArray<'a, T>) -> Vec<T> {
    array.into_slice().to_vec()
}
