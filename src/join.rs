//! Joining array elements into one delimited string.

use serde::{Deserialize, Serialize};

use crate::empty::NullOrEmpty;
use crate::value::PropertyValue;

/// Settings for [`join_with_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct JoinConfig {
    /// Written after each included element.  May be empty.
    pub connector: String,
    /// Whether null or empty elements are written out (`true`) or skipped (`false`).
    pub include_null_or_empty: bool,
}

impl Default for JoinConfig {
    fn default() -> Self {
        JoinConfig { connector: ",".to_owned(), include_null_or_empty: true }
    }
}

impl JoinConfig {
    pub fn new(connector: impl Into<String>) -> Self {
        JoinConfig { connector: connector.into(), ..Default::default() }
    }

    pub fn with_include_null_or_empty(mut self, include: bool) -> Self {
        self.include_null_or_empty = include;
        self
    }
}

/// An element that can be joined.
///
/// `None` is written as `null`, mirroring what you'd see from most string builders.
pub trait Joinable: NullOrEmpty {
    fn write_to(&self, out: &mut String);
}

impl Joinable for str {
    fn write_to(&self, out: &mut String) { out.push_str(self) }
}

impl Joinable for String {
    fn write_to(&self, out: &mut String) { out.push_str(self) }
}

impl<T: Joinable> Joinable for Option<T> {
    fn write_to(&self, out: &mut String) {
        match self {
            Some(x) => x.write_to(out),
            None => out.push_str("null"),
        }
    }
}

impl<T: Joinable + ?Sized> Joinable for &T {
    fn write_to(&self, out: &mut String) { (**self).write_to(out) }
}

impl Joinable for PropertyValue {
    fn write_to(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

macro_rules! impl_joinable_via_display {
    ($($ty:ty),+ $(,)?) => {$(
        impl Joinable for $ty {
            fn write_to(&self, out: &mut String) {
                out.push_str(&self.to_string());
            }
        }
    )+};
}

impl_joinable_via_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Join elements into a string, writing the configured connector between them.
///
/// Each element is written followed by the connector; null or empty elements are skipped
/// entirely when the config says so.  Afterwards, one trailing connector is trimmed, so
/// there is no need to know in advance which element is the last one that gets written.
///
/// `None` for the config means [`JoinConfig::default`].
///
/// ```
/// use array_kit::{join_with_config, JoinConfig};
///
/// let config = JoinConfig::new(",").with_include_null_or_empty(false);
/// assert_eq!(join_with_config(Some(&config), [Some("a"), Some("b"), None]), "a,b");
/// ```
pub fn join_with_config<I>(config: Option<&JoinConfig>, elements: I) -> String
where
    I: IntoIterator,
    I::Item: Joinable,
{
    let default_config;
    let config = match config {
        Some(config) => config,
        None => {
            default_config = JoinConfig::default();
            &default_config
        },
    };
    let connector = &config.connector[..];

    let mut out = String::new();
    for element in elements {
        if element.is_null_or_empty() && !config.include_null_or_empty {
            continue;
        }
        element.write_to(&mut out);
        out.push_str(connector);
    }

    if !connector.is_empty() && out.ends_with(connector) {
        out.truncate(out.len() - connector.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn including(connector: &str) -> JoinConfig {
        JoinConfig::new(connector).with_include_null_or_empty(true)
    }

    fn skipping(connector: &str) -> JoinConfig {
        JoinConfig::new(connector).with_include_null_or_empty(false)
    }

    #[test]
    fn basic() {
        assert_eq!(join_with_config(Some(&including(",")), ["a", "b"]), "a,b");
        assert_eq!(join_with_config(Some(&including(", ")), [1, 2, 3]), "1, 2, 3");
        assert_eq!(join_with_config(None, ["a", "b"]), "a,b");
    }

    #[test]
    fn nothing_to_join() {
        let empty: [&str; 0] = [];
        assert_eq!(join_with_config(Some(&including(",")), empty), "");
        assert_eq!(join_with_config(Some(&skipping(",")), [None::<&str>, Some("")]), "");
    }

    #[test]
    fn skip_null_and_empty() {
        let config = skipping(",");
        assert_eq!(join_with_config(Some(&config), [Some("a"), Some("b"), None]), "a,b");
        assert_eq!(join_with_config(Some(&config), [None, Some("a"), Some(""), Some("b")]), "a,b");
        // whitespace is not empty
        assert_eq!(join_with_config(Some(&config), [" ", "a"]), " ,a");
    }

    #[test]
    fn include_null_and_empty() {
        let config = including(",");
        assert_eq!(join_with_config(Some(&config), [Some("a"), None, Some(""), Some("b")]), "a,null,,b");
    }

    #[test]
    fn only_one_trailing_connector_is_trimmed() {
        // the last element is itself empty, so it contributes a bare connector
        assert_eq!(join_with_config(Some(&including(",")), ["a", ""]), "a,");
        // an element that ends in the connector loses it when it comes last
        assert_eq!(join_with_config(Some(&including(",")), ["a", "b,"]), "a,b,");
        assert_eq!(join_with_config(Some(&skipping("-")), ["x-", "y-"]), "x--y-");
    }

    #[test]
    fn property_values_and_numbers() {
        let values = [PropertyValue::from(u64::MAX), PropertyValue::Null, PropertyValue::from(1.5)];
        assert_eq!(join_with_config(Some(&skipping(";")), &values), "18446744073709551615;1.5");
        assert_eq!(join_with_config(None, [1.5f32, 2.0]), "1.5,2");
    }

    #[test]
    fn empty_connector() {
        assert_eq!(join_with_config(Some(&including("")), ["a", "b", "c"]), "abc");
    }

    #[test]
    fn config_from_json() {
        let config: JoinConfig = serde_json::from_str(r#"{"connector": "|"}"#).unwrap();
        assert_eq!(config, JoinConfig::new("|"));

        let config: JoinConfig = serde_json::from_str(r#"{"include-null-or-empty": false}"#).unwrap();
        assert_eq!(config, JoinConfig::default().with_include_null_or_empty(false));
    }
}
