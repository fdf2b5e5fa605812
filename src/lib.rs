//! Small helpers for working with arrays: indexed access, copying into an owned list,
//! joining into a string, and grouping elements into buckets.

pub use error::ArrayError;
pub mod error;

pub use array::{MaybeArray, element_at, to_owned_list};
pub mod array;

pub use empty::NullOrEmpty;
pub mod empty;

pub use join::{JoinConfig, Joinable, join_with_config};
pub mod join;

pub use value::PropertyValue;
pub mod value;

pub use property::{PropertyName, PropertyAccessor, PropertyError, FieldTable, Reflect, ReflectAccessor, SerdeAccessor};
pub mod property;

pub use group::{GroupMap, group, group_by_key, try_group_by_key, group_by_property};
pub mod group;
