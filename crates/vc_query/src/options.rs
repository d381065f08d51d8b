use core::str::FromStr;

use bitflags::bitflags;

bitflags! {
    /// Lookup options of a query.
    ///
    /// The empty set, [`QueryOptions::NONE`], is the best-effort mode: keys
    /// match case-insensitively, non-exported struct fields are readable and
    /// results convert to the requested type whenever a conversion exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_query::QueryOptions;
    ///
    /// let options: QueryOptions = "CASE_SENSITIVE | STRICT_TYPE".parse().unwrap();
    /// assert!(options.is_case_sensitive());
    /// assert!(!options.is_safe_fields());
    /// assert!(options.is_strict_type());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QueryOptions: u8 {
        /// Match map keys and field names exactly.
        const CASE_SENSITIVE = 1 << 1;
        /// Refuse to descend into non-exported struct fields.
        const SAFE_FIELDS    = 1 << 2;
        /// Only return results whose type matches the requested one.
        const STRICT_TYPE    = 1 << 3;
    }
}

impl QueryOptions {
    /// Best-effort lookup.
    pub const NONE: Self = Self::empty();

    #[inline]
    pub const fn is_case_sensitive(self) -> bool {
        self.contains(Self::CASE_SENSITIVE)
    }

    #[inline]
    pub const fn is_safe_fields(self) -> bool {
        self.contains(Self::SAFE_FIELDS)
    }

    #[inline]
    pub const fn is_strict_type(self) -> bool {
        self.contains(Self::STRICT_TYPE)
    }
}

impl Default for QueryOptions {
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

impl FromStr for QueryOptions {
    type Err = bitflags::parser::ParseError;

    /// Parses flag names joined by `|`, for example `"SAFE_FIELDS | STRICT_TYPE"`.
    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        bitflags::parser::from_str(text)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::QueryOptions;

    #[test]
    fn bits_and_default() {
        assert_eq!(QueryOptions::default(), QueryOptions::NONE);
        assert_eq!(QueryOptions::CASE_SENSITIVE.bits(), 2);
        assert_eq!(QueryOptions::SAFE_FIELDS.bits(), 4);
        assert_eq!(QueryOptions::STRICT_TYPE.bits(), 8);
    }

    #[test]
    fn parse_names() {
        let options: QueryOptions = "SAFE_FIELDS".parse().unwrap();
        assert_eq!(options, QueryOptions::SAFE_FIELDS);

        let empty: QueryOptions = "".parse().unwrap();
        assert!(empty.is_empty());

        assert!("LOUD".parse::<QueryOptions>().is_err());
    }
}
