use indexmap::IndexMap;

/// Uniform test for "null or empty" values.
///
/// `None` counts as null, and strings and containers count as empty when they have no
/// elements.  Scalars are never empty.  Note that a whitespace-only string is *not* empty.
pub trait NullOrEmpty {
    fn is_null_or_empty(&self) -> bool;

    fn is_not_null_or_empty(&self) -> bool {
        !self.is_null_or_empty()
    }
}

impl NullOrEmpty for str {
    fn is_null_or_empty(&self) -> bool { self.is_empty() }
}

impl NullOrEmpty for String {
    fn is_null_or_empty(&self) -> bool { self.is_empty() }
}

impl<T> NullOrEmpty for [T] {
    fn is_null_or_empty(&self) -> bool { self.is_empty() }
}

impl<T, const N: usize> NullOrEmpty for [T; N] {
    fn is_null_or_empty(&self) -> bool { N == 0 }
}

impl<T> NullOrEmpty for Vec<T> {
    fn is_null_or_empty(&self) -> bool { self.is_empty() }
}

impl<K, V, S> NullOrEmpty for IndexMap<K, V, S> {
    fn is_null_or_empty(&self) -> bool { self.is_empty() }
}

impl<T: NullOrEmpty> NullOrEmpty for Option<T> {
    fn is_null_or_empty(&self) -> bool {
        match self {
            None => true,
            Some(x) => x.is_null_or_empty(),
        }
    }
}

impl<T: NullOrEmpty + ?Sized> NullOrEmpty for &T {
    fn is_null_or_empty(&self) -> bool { (**self).is_null_or_empty() }
}

impl<T: NullOrEmpty + ?Sized> NullOrEmpty for Box<T> {
    fn is_null_or_empty(&self) -> bool { (**self).is_null_or_empty() }
}

macro_rules! impl_never_empty {
    ($($ty:ty),+ $(,)?) => {$(
        impl NullOrEmpty for $ty {
            fn is_null_or_empty(&self) -> bool { false }
        }
    )+};
}

impl_never_empty!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings() {
        assert!("".is_null_or_empty());
        assert!(String::new().is_null_or_empty());
        assert!(!" ".is_null_or_empty());
        assert!("a".is_not_null_or_empty());
    }

    #[test]
    fn options() {
        assert!(None::<&str>.is_null_or_empty());
        assert!(Some("").is_null_or_empty());
        assert!(!Some("x").is_null_or_empty());
        assert!(!Some(0).is_null_or_empty());
        assert!(Some(None::<i32>).is_null_or_empty());
    }

    #[test]
    fn containers() {
        let empty: [i32; 0] = [];
        assert!(empty.is_null_or_empty());
        assert!(!Vec::from([1]).is_null_or_empty());
        assert!(IndexMap::<i32, i32>::new().is_null_or_empty());
        assert!((&[] as &[u8]).is_null_or_empty());
    }
}
