use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::Reflect;

use crate::QueryOptions;
use crate::resolve::{Resolved, resolve};

// -----------------------------------------------------------------------------
// Key Splitter

/// Like [`str::split`], but a fragment ending with `esc` is joined with the
/// next one by a literal `sep`.
///
/// Fragments are scanned right to left, so several escapes in a row compose.
///
/// # Examples
///
/// ```
/// use vc_query::path::split_with_escape;
///
/// assert_eq!(split_with_escape(r"a,b\,c", ",", r"\"), ["a", "b,c"]);
/// assert_eq!(split_with_escape(r"a\,b\,c", ",", r"\"), ["a,b,c"]);
/// ```
pub fn split_with_escape(text: &str, sep: &str, esc: &str) -> Vec<String> {
    let mut parts: Vec<String> = text.split(sep).map(ToString::to_string).collect();

    for index in (0..parts.len().saturating_sub(1)).rev() {
        if !esc.is_empty() && parts[index].ends_with(esc) {
            let next = parts.remove(index + 1);
            let part = &mut parts[index];
            part.truncate(part.len() - esc.len());
            part.push_str(sep);
            part.push_str(&next);
        }
    }

    parts
}

// -----------------------------------------------------------------------------
// QueryPath

/// An ordered list of lookup keys.
///
/// Every input string is split on `,` (`\,` keeps a literal comma) and each
/// key is trimmed. Multiple input strings are concatenated, so
/// `["a", "b,c"]` and `"a,b,c"` are the same path.
///
/// A path can be parsed once and resolved many times.
///
/// # Examples
///
/// ```
/// use vc_query::QueryPath;
///
/// let path = QueryPath::parse([" a , b\\,c ", "d"]);
/// assert_eq!(path.keys(), ["a", "b,c", "d"]);
/// assert_eq!(path.to_string(), "[a b,c d]");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct QueryPath(Vec<String>);

impl QueryPath {
    /// Splits and concatenates the given path strings.
    pub fn parse<I>(paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keys = paths
            .into_iter()
            .flat_map(|path| split_with_escape(path.as_ref(), ",", "\\"))
            .map(|key| key.trim().to_string())
            .collect();
        Self(keys)
    }

    #[inline]
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves this path against `value`.
    ///
    /// An empty path resolves to `value` itself.
    #[inline]
    pub fn resolve<'a>(&self, value: &'a dyn Reflect, options: QueryOptions) -> Resolved<'a> {
        Resolved::from(resolve(value, &self.0, options))
    }
}

impl fmt::Display for QueryPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&KeyList(&self.0), f)
    }
}

/// Renders keys as `[a b c]`.
pub(crate) struct KeyList<'a>(pub &'a [String]);

impl fmt::Display for KeyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, key) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(key)?;
        }
        f.write_str("]")
    }
}

// -----------------------------------------------------------------------------
// IntoQueryPath

/// Types usable as the path argument of a query.
pub trait IntoQueryPath {
    fn into_query_path(self) -> QueryPath;
}

impl IntoQueryPath for QueryPath {
    #[inline]
    fn into_query_path(self) -> QueryPath {
        self
    }
}

impl IntoQueryPath for &QueryPath {
    #[inline]
    fn into_query_path(self) -> QueryPath {
        self.clone()
    }
}

impl IntoQueryPath for &str {
    #[inline]
    fn into_query_path(self) -> QueryPath {
        QueryPath::parse([self])
    }
}

impl IntoQueryPath for String {
    #[inline]
    fn into_query_path(self) -> QueryPath {
        QueryPath::parse([self])
    }
}

impl IntoQueryPath for &String {
    #[inline]
    fn into_query_path(self) -> QueryPath {
        QueryPath::parse([self])
    }
}

impl IntoQueryPath for &[&str] {
    #[inline]
    fn into_query_path(self) -> QueryPath {
        QueryPath::parse(self)
    }
}

impl<const N: usize> IntoQueryPath for [&str; N] {
    #[inline]
    fn into_query_path(self) -> QueryPath {
        QueryPath::parse(self)
    }
}

impl IntoQueryPath for Vec<&str> {
    #[inline]
    fn into_query_path(self) -> QueryPath {
        QueryPath::parse(self)
    }
}

impl IntoQueryPath for Vec<String> {
    #[inline]
    fn into_query_path(self) -> QueryPath {
        QueryPath::parse(self)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::{IntoQueryPath, QueryPath, split_with_escape};

    #[test]
    fn escapes() {
        assert_eq!(split_with_escape("a,b", ",", "\\"), ["a", "b"]);
        assert_eq!(split_with_escape("a,b\\,c", ",", "\\"), ["a", "b,c"]);
        assert_eq!(split_with_escape("a\\,b\\,c,d", ",", "\\"), ["a,b,c", "d"]);
        assert_eq!(split_with_escape("a\\", ",", "\\"), ["a\\"]);
        assert_eq!(split_with_escape("", ",", "\\"), [""]);
    }

    #[test]
    fn trimming_and_concatenation() {
        let joined = QueryPath::parse(["Address, City"]);
        let separate = QueryPath::parse(["Address", " City "]);
        assert_eq!(joined, separate);
        assert_eq!(joined.keys(), ["Address", "City"]);
    }

    #[test]
    fn conversions() {
        assert_eq!("a,b".into_query_path().len(), 2);
        assert_eq!(["a", "b,c"].into_query_path().len(), 3);
        assert_eq!(vec!["a".to_string()].into_query_path().len(), 1);

        let empty: [&str; 0] = [];
        assert!(empty.into_query_path().is_empty());
        assert!(QueryPath::default().is_empty());
    }
}
